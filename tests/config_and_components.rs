// Config parsing, search bar behaviour, and grid/player component state.

use tubegrid::config::Config;

// ── Config ──

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.general.frame_rate, 30.0);
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.embed.host, "piped.video");
    assert!(config.embed.opener.is_none());
    assert_eq!(config.ui.theme, "dark");
}

#[test]
fn test_config_parse_toml() {
    let toml_str = r#"
[general]
frame_rate = 60.0
log_level = "warn"

[backend]
base_url = "https://videos.example.com"

[embed]
host = "yt.example.org"
opener = "firefox"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.general.frame_rate, 60.0);
    assert_eq!(config.general.log_level, "warn");
    assert_eq!(config.backend.base_url, "https://videos.example.com");
    assert_eq!(config.embed.host, "yt.example.org");
    assert_eq!(config.embed.opener.as_deref(), Some("firefox"));
    // Untouched sections keep their defaults
    assert_eq!(config.ui.theme, "dark");
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
}

#[test]
fn test_config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme, "light");
    assert_eq!(config.general.frame_rate, 30.0);
}

#[test]
fn test_config_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[backend\nbase_url = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

// ── Components ──

mod component_tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;
    use tubegrid::action::Action;
    use tubegrid::api::models::Video;
    use tubegrid::components::player_view::PlayerView;
    use tubegrid::components::search_bar::SearchBar;
    use tubegrid::components::video_grid::{columns_for_width, VideoGrid, SKELETON_COUNT};
    use tubegrid::components::Component;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Title {}", id),
            author: "Author".to_string(),
            thumbnail: None,
            views: Some(10),
        }
    }

    #[test]
    fn test_search_bar_focus() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        assert!(!bar.is_focused());
        bar.update(&Action::FocusSearch).unwrap();
        assert!(bar.is_focused());
    }

    #[test]
    fn test_search_bar_ignores_keys_when_unfocused() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        assert!(!bar.handle_key_event(make_key(KeyCode::Char('a'))).unwrap());
        assert_eq!(bar.input(), "");
    }

    #[test]
    fn test_search_bar_typing_and_backspace() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        bar.update(&Action::FocusSearch).unwrap();
        for c in "cats".chars() {
            bar.handle_key_event(make_key(KeyCode::Char(c))).unwrap();
        }
        bar.handle_key_event(make_key(KeyCode::Backspace)).unwrap();
        assert_eq!(bar.input(), "cat");
    }

    #[test]
    fn test_search_bar_enter_submits_even_when_empty() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        bar.update(&Action::FocusSearch).unwrap();
        assert!(bar.handle_key_event(make_key(KeyCode::Enter)).unwrap());
        assert!(matches!(rx.try_recv(), Ok(Action::SearchSubmit)));
    }

    #[test]
    fn test_search_bar_keeps_query_after_submit() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        bar.update(&Action::FocusSearch).unwrap();
        bar.handle_key_event(make_key(KeyCode::Char('x'))).unwrap();
        bar.update(&Action::SearchSubmit).unwrap();
        assert!(!bar.is_focused());
        assert_eq!(bar.input(), "x");
    }

    #[test]
    fn test_search_bar_consumes_q_while_typing() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut bar = SearchBar::new();
        bar.register_action_handler(tx);
        bar.update(&Action::FocusSearch).unwrap();
        let consumed = bar.handle_key_event(make_key(KeyCode::Char('q'))).unwrap();
        assert!(consumed, "q in search mode should be consumed");
        assert_eq!(bar.input(), "q");
    }

    #[test]
    fn test_search_bar_paste_keeps_first_line() {
        let mut bar = SearchBar::new();
        bar.paste("cats");
        bar.paste(" and\tdogs\r\nsecond line");
        assert_eq!(bar.input(), "cats anddogs");
    }

    #[test]
    fn test_columns_follow_breakpoints() {
        assert_eq!(columns_for_width(60), 2);
        assert_eq!(columns_for_width(80), 3);
        assert_eq!(columns_for_width(119), 3);
        assert_eq!(columns_for_width(200), 4);
    }

    #[test]
    fn test_grid_keeps_backend_order_and_duplicates() {
        let mut grid = VideoGrid::new();
        grid.set_items(vec![make_video("b"), make_video("a"), make_video("b")]);
        let ids: Vec<&str> = grid.items().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "b"]);
        assert_eq!(grid.selected_index(), Some(0));
    }

    #[test]
    fn test_grid_skeletons_only_while_loading() {
        let mut grid = VideoGrid::new();
        assert_eq!(grid.skeleton_count(), 0);
        grid.set_loading(true);
        assert_eq!(grid.skeleton_count(), SKELETON_COUNT);
        assert_eq!(SKELETON_COUNT, 8);
    }

    #[test]
    fn test_grid_navigation_clamps() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut grid = VideoGrid::new();
        grid.register_action_handler(tx);
        grid.set_items(vec![make_video("1"), make_video("2"), make_video("3")]);

        grid.handle_key_event(make_key(KeyCode::Left)).unwrap();
        assert_eq!(grid.selected_index(), Some(0));
        grid.handle_key_event(make_key(KeyCode::Right)).unwrap();
        grid.handle_key_event(make_key(KeyCode::Char('l'))).unwrap();
        grid.handle_key_event(make_key(KeyCode::Right)).unwrap();
        assert_eq!(grid.selected_index(), Some(2));
        // Two columns before the first draw: down from index 2 has no target
        grid.handle_key_event(make_key(KeyCode::Down)).unwrap();
        assert_eq!(grid.selected_index(), Some(2));
        grid.handle_key_event(make_key(KeyCode::Up)).unwrap();
        assert_eq!(grid.selected_index(), Some(0));
    }

    #[test]
    fn test_grid_enter_selects_highlighted_video_once() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut grid = VideoGrid::new();
        grid.register_action_handler(tx);
        grid.set_items(vec![make_video("1"), make_video("2")]);
        grid.next();
        grid.handle_key_event(make_key(KeyCode::Enter)).unwrap();

        match rx.try_recv() {
            Ok(Action::SelectVideo(v)) => assert_eq!(v.id, "2"),
            other => panic!("expected SelectVideo, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_grid_enter_does_nothing_while_loading() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut grid = VideoGrid::new();
        grid.register_action_handler(tx);
        grid.set_items(vec![make_video("1")]);
        grid.set_loading(true);
        grid.handle_key_event(make_key(KeyCode::Enter)).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_player_view_without_video_has_no_embed() {
        let player = PlayerView::default();
        assert!(player.video().is_none());
        assert!(player.embed_src().is_none());
    }

    #[test]
    fn test_player_view_embed_follows_video() {
        let mut player = PlayerView::new("piped.video");
        player.set_video(Some(make_video("zz9")));
        assert_eq!(
            player.embed_src().as_deref(),
            Some("https://piped.video/embed/zz9")
        );
        player.set_video(None);
        assert!(player.embed_src().is_none());
    }

    #[test]
    fn test_player_view_keys() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut player = PlayerView::default();
        player.register_action_handler(tx);

        // Nothing selected: keys pass through
        assert!(!player.handle_key_event(make_key(KeyCode::Esc)).unwrap());

        player.set_video(Some(make_video("a1")));
        assert!(player.handle_key_event(make_key(KeyCode::Char('o'))).unwrap());
        assert!(matches!(rx.try_recv(), Ok(Action::OpenEmbed)));
        assert!(player.handle_key_event(make_key(KeyCode::Esc)).unwrap());
        assert!(matches!(rx.try_recv(), Ok(Action::Back)));
    }
}
