// src/components/video_grid.rs

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::Video;
use crate::components::video_card::{draw_card, draw_skeleton, CARD_HEIGHT};
use crate::components::Component;
use crate::theme::Theme;

/// Placeholder cards drawn while a fetch is in flight.
pub const SKELETON_COUNT: usize = 8;
const COLUMN_GAP: u16 = 2;

/// Column count for a given width, following the page's 2/3/4 breakpoints.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=79 => 2,
        80..=119 => 3,
        _ => 4,
    }
}

/// Card grid for the browsing mode. Holds the fetched list in backend order.
pub struct VideoGrid {
    action_tx: Option<UnboundedSender<Action>>,
    videos: Vec<Video>,
    selected: Option<usize>,
    loading: bool,
    frame_count: u64,
    theme: Theme,
    // Written during draw so key navigation knows the current layout.
    columns: Cell<usize>,
    scroll_row: Cell<usize>,
}

impl Default for VideoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoGrid {
    pub fn new() -> Self {
        Self {
            action_tx: None,
            videos: vec![],
            selected: None,
            loading: false,
            frame_count: 0,
            theme: Theme::default(),
            columns: Cell::new(columns_for_width(0)),
            scroll_row: Cell::new(0),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the list. Order is kept exactly as given.
    pub fn set_items(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        self.selected = if self.videos.is_empty() { None } else { Some(0) };
        self.scroll_row.set(0);
    }

    pub fn items(&self) -> &[Video] {
        &self.videos
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.selected.and_then(|i| self.videos.get(i))
    }

    /// Number of placeholder cards the current state would draw.
    pub fn skeleton_count(&self) -> usize {
        if self.loading {
            SKELETON_COUNT
        } else {
            0
        }
    }

    fn move_by(&mut self, delta: isize) {
        let Some(i) = self.selected else { return };
        let target = i as isize + delta;
        if target >= 0 && (target as usize) < self.videos.len() {
            self.selected = Some(target as usize);
        }
    }

    pub fn next(&mut self) {
        self.move_by(1);
    }

    pub fn prev(&mut self) {
        self.move_by(-1);
    }

    pub fn down(&mut self) {
        self.move_by(self.columns.get() as isize);
    }

    pub fn up(&mut self) {
        self.move_by(-(self.columns.get() as isize));
    }

    fn cell_rect(area: Rect, columns: usize, col: usize, row_on_screen: usize) -> Rect {
        let cols = columns as u16;
        let width = area.width.saturating_sub(COLUMN_GAP * (cols - 1)) / cols;
        Rect {
            x: area.x + col as u16 * (width + COLUMN_GAP),
            y: area.y + row_on_screen as u16 * CARD_HEIGHT,
            width,
            height: CARD_HEIGHT.saturating_sub(1),
        }
        .intersection(area)
    }

    fn visible_rows(area: Rect) -> usize {
        usize::from((area.height / CARD_HEIGHT).max(1))
    }
}

impl Component for VideoGrid {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::Left | KeyCode::Char('h') => self.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Enter => {
                if self.loading {
                    return Ok(true);
                }
                if let (Some(video), Some(tx)) = (self.selected_video(), &self.action_tx) {
                    tx.send(Action::SelectVideo(video.clone()))?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::Tick = action {
            self.frame_count = self.frame_count.wrapping_add(1);
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let columns = columns_for_width(area.width);
        self.columns.set(columns);
        let visible_rows = Self::visible_rows(area);

        if self.loading {
            let pulse = (self.frame_count / 15) % 2 == 0;
            for i in 0..SKELETON_COUNT {
                let row = i / columns;
                if row >= visible_rows {
                    break;
                }
                let rect = Self::cell_rect(area, columns, i % columns, row);
                draw_skeleton(frame, rect, pulse, &self.theme);
            }
            return;
        }

        // Keep the highlighted row on screen.
        let mut scroll = self.scroll_row.get();
        if let Some(sel) = self.selected {
            let row = sel / columns;
            if row < scroll {
                scroll = row;
            } else if row >= scroll + visible_rows {
                scroll = row + 1 - visible_rows;
            }
        }
        self.scroll_row.set(scroll);

        let first = scroll * columns;
        let last = (first + visible_rows * columns).min(self.videos.len());
        for (i, video) in self.videos.iter().enumerate().take(last).skip(first) {
            let rect = Self::cell_rect(area, columns, i % columns, i / columns - scroll);
            draw_card(frame, rect, video, self.selected == Some(i), &self.theme);
        }
    }
}
