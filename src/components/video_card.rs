// One grid cell: thumbnail slot, avatar initial, two-line title, and byline.
// Cards are stateless; the grid decides which one is highlighted.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::models::Video;
use crate::format::byline;
use crate::theme::Theme;

/// Rows taken by one card, including the gap under it.
pub const CARD_HEIGHT: u16 = 10;
const THUMB_HEIGHT: u16 = 6;
const AVATAR_WIDTH: u16 = 4;

fn split(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let [thumb, info] =
        Layout::vertical([Constraint::Length(THUMB_HEIGHT), Constraint::Min(0)]).areas(area);
    let [avatar, text] =
        Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)]).areas(info);
    let [_, title, meta] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(text);
    let avatar = Rect {
        y: avatar.y + 1,
        height: avatar.height.saturating_sub(1).min(1),
        width: avatar.width.saturating_sub(1),
        ..avatar
    };
    (thumb, avatar, title, meta)
}

pub fn draw_card(frame: &mut Frame, area: Rect, video: &Video, highlighted: bool, theme: &Theme) {
    let (thumb, avatar, title, meta) = split(area);

    let border = if highlighted { theme.highlight } else { theme.border };
    let slot = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.thumbnail_bg));
    let thumb_lines = match video.thumbnail_host() {
        Some(host) => vec![
            Line::from(""),
            Line::from(Span::styled("▶", Style::default().fg(theme.text))),
            Line::from(Span::styled(host, Style::default().fg(theme.text_dim))),
        ],
        None => vec![],
    };
    frame.render_widget(
        Paragraph::new(thumb_lines)
            .alignment(Alignment::Center)
            .block(slot),
        thumb,
    );

    frame.render_widget(
        Paragraph::new(format!(" {} ", video.avatar_initial()))
            .style(
                Style::default()
                    .fg(theme.text)
                    .bg(theme.avatar)
                    .add_modifier(Modifier::BOLD),
            ),
        avatar,
    );

    let mut title_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    if highlighted {
        title_style = title_style.fg(theme.highlight);
    }
    // Two rows of wrapped text: anything longer is clipped.
    frame.render_widget(
        Paragraph::new(Span::styled(video.title.as_str(), title_style))
            .wrap(Wrap { trim: true }),
        title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            byline(&video.author, video.views),
            Style::default().fg(theme.text_dim),
        )),
        meta,
    );
}

/// Placeholder shown while a fetch is in flight. `pulse` flips the fill
/// shade so the skeleton breathes with the tick rate.
pub fn draw_skeleton(frame: &mut Frame, area: Rect, pulse: bool, theme: &Theme) {
    let (thumb, avatar, title, meta) = split(area);
    let fill = if pulse { theme.skeleton } else { theme.thumbnail_bg };
    let style = Style::default().bg(fill);

    frame.render_widget(Block::default().style(style), thumb);
    frame.render_widget(Block::default().style(style), avatar);

    let bar = |r: Rect, percent: u16| Rect {
        height: 1,
        width: (u32::from(r.width) * u32::from(percent) / 100) as u16,
        ..r
    };
    frame.render_widget(Block::default().style(style), bar(title, 80));
    frame.render_widget(Block::default().style(style), bar(meta, 60));
}
