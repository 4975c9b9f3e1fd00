//! Toast overlay.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{toast_background, toast_foreground};
use crate::binder::{ClassSet, TOAST_SHOW_CLASS};

const TOAST_HEIGHT: u16 = 3;
const TOAST_MARGIN: u16 = 1;

/// Bottom-right placement of the toast within `area`.
pub fn toast_area(area: Rect, ctx: &LayoutContext) -> Rect {
    let width = ctx.toast_width().min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + area.height.saturating_sub(height + TOAST_MARGIN);
    Rect::new(x, y, width, height)
}

/// Local wall-clock time shown in the toast border.
pub fn shown_at_label(shown_at: DateTime<Utc>) -> String {
    shown_at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Draw the toast if its class set carries `show`.
pub fn render_toast(
    frame: &mut Frame,
    area: Rect,
    classes: &ClassSet,
    message: &str,
    shown_at: Option<DateTime<Utc>>,
) {
    if !classes.contains(TOAST_SHOW_CLASS) {
        return;
    }
    let kind = classes
        .iter()
        .find(|class| *class != TOAST_SHOW_CLASS)
        .unwrap_or("info");

    let style = Style::default()
        .bg(toast_background(kind))
        .fg(toast_foreground(kind));

    let mut block = Block::default().borders(Borders::ALL).border_style(style);
    if let Some(shown_at) = shown_at {
        block = block.title(format!(" {} ", shown_at_label(shown_at)));
    }

    frame.render_widget(Clear, area);
    let toast = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        style.add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .style(style)
    .block(block);

    frame.render_widget(toast, area);
}
