// Page layout: header (brand + search form), content area (grid or player),
// footer, and the help overlay.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::components::centered_overlay;
use crate::components::player_view::PlayerView;
use crate::components::search_bar::SearchBar;
use crate::components::video_grid::VideoGrid;
use crate::components::Component;
use crate::theme::Theme;

pub const BRAND: &str = "YouTube Clone";
pub const FOOTER: &str = "Dibuat sebagai clone sederhana untuk menonton dan mencari video. Tidak ada premium, semua gratis.";

const SEARCH_MAX_WIDTH: u16 = 64;

pub struct DrawState<'a> {
    pub search_bar: &'a SearchBar,
    pub video_grid: &'a VideoGrid,
    pub player_view: &'a PlayerView,
    pub playing: bool,
    pub show_help: bool,
    pub theme: &'a Theme,
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_header(frame, header, state);

    let content = Rect {
        x: main.x + 2,
        width: main.width.saturating_sub(4),
        y: main.y + 1,
        height: main.height.saturating_sub(1),
    };
    if state.playing {
        state.player_view.draw(frame, content);
    } else {
        state.video_grid.draw(frame, content);
    }

    frame.render_widget(
        Paragraph::new(FOOTER)
            .style(Style::default().fg(state.theme.text_dim))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        footer,
    );

    if state.show_help {
        draw_help_overlay(frame, state.theme);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &DrawState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(state.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let search_width = SEARCH_MAX_WIDTH.min(inner.width.saturating_sub(20));
    let [brand, _, search] = Layout::horizontal([
        Constraint::Length(18),
        Constraint::Min(0),
        Constraint::Length(search_width),
    ])
    .areas(inner);

    let brand_line = Line::from(Span::styled(
        format!(" 🔥 {}", BRAND),
        Style::default()
            .fg(state.theme.brand)
            .add_modifier(Modifier::BOLD),
    ));
    let brand = Rect {
        y: brand.y + 1,
        height: 1,
        ..brand
    };
    frame.render_widget(Paragraph::new(brand_line), brand);
    state.search_bar.draw(frame, search);
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let keybindings = [
        ("/", "Focus search"),
        ("paste", "Paste into the search box"),
        ("Enter", "Search / play highlighted video"),
        ("Esc", "Leave search / back to the grid"),
        ("←↓↑→ hjkl", "Move between cards"),
        ("o", "Open the player frame"),
        ("b", "Back to the grid"),
        ("r", "Repeat the last request"),
        ("?", "Toggle this help overlay"),
        ("q", "Quit"),
    ];

    let area = centered_overlay(frame.area(), 52, keybindings.len() as u16 + 6);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.brand)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), Style::default().fg(theme.accent)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(theme.text_dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
