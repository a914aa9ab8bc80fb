// Key and paste handling: maps terminal input to actions.

use crate::action::Action;
use crate::app::App;
use crate::components::Component;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::Char;

        // Help overlay consumes all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }

        // While typing, the search form gets first pick; keys it ignores
        // (arrows, Tab) fall through to the normal bindings.
        if self.search_bar.is_focused() && self.search_bar.handle_key_event(key)? {
            return Ok(());
        }

        match key.code {
            Char('q') => return self.action_tx.send(Action::Quit).map_err(Into::into),
            Char('?') => return self.action_tx.send(Action::ShowHelp).map_err(Into::into),
            Char('/') => return self.action_tx.send(Action::FocusSearch).map_err(Into::into),
            Char('r') => return self.action_tx.send(Action::Retry).map_err(Into::into),
            _ => {}
        }

        if self.is_playing() {
            self.player_view.handle_key_event(key)?;
        } else {
            self.video_grid.handle_key_event(key)?;
        }
        Ok(())
    }

    /// Pasted text always lands in the search box, focusing it first.
    /// Nothing is submitted until Enter.
    pub fn handle_paste(&mut self, text: &str) -> anyhow::Result<()> {
        self.show_help = false;
        if !self.search_bar.is_focused() {
            self.search_bar.update(&Action::FocusSearch)?;
        }
        self.search_bar.paste(text);
        Ok(())
    }
}
