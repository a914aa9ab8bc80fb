// Full-width player frame for the selected video, plus the way back to the grid.
// The frame holds the embed address; `o` hands it to the opener.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::Video;
use crate::components::Component;
use crate::embed::{embed_url, DEFAULT_EMBED_HOST, FRAME_ALLOW};
use crate::format::byline;
use crate::theme::Theme;

pub const BACK_LABEL: &str = "Kembali ke beranda";

pub struct PlayerView {
    action_tx: Option<UnboundedSender<Action>>,
    video: Option<Video>,
    embed_host: String,
    theme: Theme,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self::new(DEFAULT_EMBED_HOST)
    }
}

impl PlayerView {
    pub fn new(embed_host: &str) -> Self {
        Self {
            action_tx: None,
            video: None,
            embed_host: embed_host.to_string(),
            theme: Theme::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set by the app whenever the display mode changes.
    pub fn set_video(&mut self, video: Option<Video>) {
        self.video = video;
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    /// Embed address for the current video, `None` when nothing is selected.
    pub fn embed_src(&self) -> Option<String> {
        self.video
            .as_ref()
            .map(|v| embed_url(&self.embed_host, &v.id))
    }
}

impl Component for PlayerView {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if self.video.is_none() {
            return Ok(false);
        }
        let Some(tx) = &self.action_tx else {
            return Ok(false);
        };
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => tx.send(Action::Back)?,
            KeyCode::Enter | KeyCode::Char('o') => tx.send(Action::OpenEmbed)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let (Some(video), Some(src)) = (self.video.as_ref(), self.embed_src()) else {
            return;
        };

        let [frame_area, details] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(5)]).areas(area);

        let dim = Style::default().fg(self.theme.text_dim);
        let embed = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.frame_bg))
            .title(Line::from(format!(" {} ", video.title)));
        let frame_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ▶ ", Style::default().fg(self.theme.brand)),
                Span::styled(src, Style::default().fg(self.theme.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(format!("  allow: {}", FRAME_ALLOW), dim)),
            Line::from(Span::styled("  allowfullscreen", dim)),
            Line::from(""),
            Line::from(Span::styled("  o  open player", dim)),
        ];
        frame.render_widget(
            Paragraph::new(frame_lines)
                .wrap(Wrap { trim: false })
                .block(embed),
            frame_area,
        );

        let detail_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                video.title.as_str(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(byline(&video.author, video.views), dim)),
            Line::from(""),
            Line::from(Span::styled(
                format!("⌂ {}", BACK_LABEL),
                Style::default().fg(self.theme.accent),
            )),
        ];
        frame.render_widget(Paragraph::new(detail_lines), details);
    }
}
