// Central coordinator: owns the page state, the components, and the backend source.
// Runs the event loop (key → Action → handle_action → component updates → draw).

mod fetch;
mod input;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::api::client::{BackendClient, VideoSource};
use crate::api::models::Video;
use crate::components::player_view::PlayerView;
use crate::components::search_bar::SearchBar;
use crate::components::video_grid::VideoGrid;
use crate::components::Component;
use crate::config::Config;
use crate::embed::Opener;
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

pub use fetch::Request;

/// Which of the two mutually exclusive views the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMode {
    Browsing,
    Playing(Video),
}

/// Top-level coordinator: owns every component and all mutable page state.
pub struct App {
    running: bool,
    mounted: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub(crate) search_bar: SearchBar,
    pub(crate) video_grid: VideoGrid,
    pub(crate) player_view: PlayerView,

    // State
    source: Arc<dyn VideoSource>,
    opener: Opener,
    config: Config,
    theme: Theme,
    mode: DisplayMode,
    pub show_help: bool,
    fetch_id: u64,
    in_flight: Option<JoinHandle<()>>,
    last_request: Option<Request>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = BackendClient::new(&config.backend.base_url);
        tracing::info!(base_url = client.base_url(), "using backend");
        Self::with_source(config, Arc::new(client))
    }

    pub fn with_source(config: Config, source: Arc<dyn VideoSource>) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = Theme::from_name(&config.ui.theme);

        let mut search_bar = SearchBar::new();
        let mut video_grid = VideoGrid::new();
        let mut player_view = PlayerView::new(&config.embed.host);
        search_bar.set_theme(theme.clone());
        video_grid.set_theme(theme.clone());
        player_view.set_theme(theme.clone());

        for component in [
            &mut search_bar as &mut dyn Component,
            &mut video_grid,
            &mut player_view,
        ] {
            component.register_action_handler(action_tx.clone());
        }

        let opener = Opener::new(config.embed.opener.as_deref());
        if opener.resolve().is_none() {
            tracing::warn!(opener = opener.command(), "embed opener not found on PATH");
        }

        Ok(Self {
            running: true,
            mounted: false,
            action_tx,
            action_rx,
            search_bar,
            video_grid,
            player_view,
            source,
            opener,
            config,
            theme,
            mode: DisplayMode::Browsing,
            show_help: false,
            fetch_id: 0,
            in_flight: None,
            last_request: None,
        })
    }

    /// Start the initial trending load. Only the first call has any effect.
    pub fn mount(&mut self) {
        if !self.mounted {
            self.mounted = true;
            self.fetch_trending();
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.frame_rate)?;
        tui.enter()?;

        self.mount();

        while self.running {
            let state = ui::DrawState {
                search_bar: &self.search_bar,
                video_grid: &self.video_grid,
                player_view: &self.player_view,
                playing: self.is_playing(),
                show_help: self.show_help,
                theme: &self.theme,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Paste(text) => self.handle_paste(&text)?,
                        TuiEvent::Resize => {} // next draw picks up the new size
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            Action::Quit => {
                if let Some(handle) = self.in_flight.take() {
                    handle.abort();
                }
                self.running = false;
            }

            // Data loading
            Action::Search { query } => self.search(Some(&query)),
            Action::Retry => self.retry(),
            Action::VideosLoaded { fetch_id, items } => {
                if self.finish_fetch(fetch_id) {
                    self.video_grid.set_items(items);
                }
            }
            Action::FetchFailed { fetch_id } => {
                self.finish_fetch(fetch_id);
            }

            // Search form
            Action::SearchSubmit => {
                self.search_bar.update(&action)?;
                let query = self.search_bar.input().to_string();
                self.action_tx.send(Action::Search { query })?;
            }
            Action::FocusSearch => {
                self.search_bar.update(&action)?;
            }

            // Display mode
            Action::SelectVideo(video) => self.select(video),
            Action::Back => {
                self.back();
                self.search_bar.update(&action)?;
            }
            Action::OpenEmbed => self.open_embed(),

            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            Action::Tick => {
                self.video_grid.update(&action)?;
            }
        }
        Ok(())
    }

    /// Switch to the player. The player view is only ever updated from here
    /// and `back`, so it always shows the video held by `mode`.
    pub fn select(&mut self, video: Video) {
        tracing::debug!(id = %video.id, "playing video");
        self.player_view.set_video(Some(video.clone()));
        self.mode = DisplayMode::Playing(video);
    }

    /// Return to the grid. The list is kept as-is; nothing is re-fetched.
    pub fn back(&mut self) {
        self.player_view.set_video(None);
        self.mode = DisplayMode::Browsing;
    }

    fn open_embed(&self) {
        let Some(src) = self.player_view.embed_src() else {
            return;
        };
        if let Err(e) = self.opener.open(&src) {
            tracing::error!(error = %e, %src, "could not open embed");
        }
    }

    // ── Accessors ──

    pub fn mode(&self) -> &DisplayMode {
        &self.mode
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.mode, DisplayMode::Playing(_))
    }

    pub fn selected(&self) -> Option<&Video> {
        match &self.mode {
            DisplayMode::Playing(video) => Some(video),
            DisplayMode::Browsing => None,
        }
    }

    pub fn videos(&self) -> &[Video] {
        self.video_grid.items()
    }

    pub fn is_loading(&self) -> bool {
        self.video_grid.is_loading()
    }

    pub fn query(&self) -> &str {
        self.search_bar.input()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn fetch_id(&self) -> u64 {
        self.fetch_id
    }

    pub fn last_request(&self) -> Option<&Request> {
        self.last_request.as_ref()
    }

    pub fn embed_src(&self) -> Option<String> {
        self.player_view.embed_src()
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn video_grid(&self) -> &VideoGrid {
        &self.video_grid
    }

    pub fn player_view(&self) -> &PlayerView {
        &self.player_view
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // ── Test support ──

    /// Drain and handle every queued action.
    pub fn flush_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let _ = self.handle_action(action);
        }
    }

    /// Wait for the in-flight fetch (if any) and apply its result.
    pub async fn wait_for_fetch(&mut self) {
        self.flush_actions();
        if let Some(handle) = self.in_flight.take() {
            let _ = handle.await;
        }
        self.flush_actions();
    }
}
