// Every user interaction, fetch result, and internal event is represented as an
// Action variant. The App event loop dispatches these to the shell and components.

use crate::api::models::Video;

/// All events flowing through the app. The [`App`](crate::app::App) event
/// loop dispatches each variant to the appropriate handler.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Tick,

    // Search form
    FocusSearch,
    SearchSubmit,

    // Data loading
    Search {
        query: String,
    },
    Retry,
    /// A fetch finished. Results from a superseded fetch are ignored.
    VideosLoaded {
        fetch_id: u64,
        items: Vec<Video>,
    },
    FetchFailed {
        fetch_id: u64,
    },

    // Display mode
    SelectVideo(Video),
    Back,
    OpenEmbed,

    ShowHelp,
    HideHelp,
}
