// Search form in the header. `/` focuses it, Enter submits, Esc leaves it.
// The typed query stays in the box after submission.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub const PLACEHOLDER: &str = "Cari video";

#[derive(Default)]
pub struct SearchBar {
    action_tx: Option<UnboundedSender<Action>>,
    input: String,
    focused: bool,
    theme: Theme,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append pasted text. Only the first line is kept, minus control characters.
    pub fn paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        self.input.extend(line.chars().filter(|c| !c.is_control()));
    }
}

impl Component for SearchBar {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.focused {
            return Ok(false);
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                Ok(true)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Ok(true)
            }
            KeyCode::Enter => {
                // An empty submission is meaningful: it goes back to trending.
                if let Some(tx) = &self.action_tx {
                    tx.send(Action::SearchSubmit)?;
                }
                Ok(true)
            }
            KeyCode::Esc => {
                self.focused = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::FocusSearch => self.focused = true,
            Action::SearchSubmit | Action::Back => self.focused = false,
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            self.theme.accent
        } else {
            self.theme.border
        };

        let line = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(self.theme.text_dim)))
        } else {
            let cursor = if self.focused { "_" } else { "" };
            Line::from(Span::styled(
                format!("{}{}", self.input, cursor),
                Style::default().fg(self.theme.text),
            ))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title_bottom(Line::from(" ⌕ ").right_aligned());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
