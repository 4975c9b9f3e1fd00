//! Sidebar, dropdown menu and the two code panels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::LayoutMode;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

const SIDEBAR_ENTRIES: [&str; 4] = ["Templates", "Batch transform", "Upload", "History"];
const MENU_ENTRIES: [&str; 3] = ["Dashboard", "Scanner", "Transformer"];

/// Header button that opens and closes the menu
pub const MENU_TRIGGER_LABEL: &str = " ≡ menu ";

pub const MENU_WIDTH: u16 = 20;
pub const MENU_HEIGHT: u16 = MENU_ENTRIES.len() as u16 + 2;

/// Where the dropdown menu is drawn within the body area.
pub fn menu_area(body: Rect) -> Rect {
    let width = MENU_WIDTH.min(body.width);
    let height = MENU_HEIGHT.min(body.height);
    Rect::new(body.x + body.width - width, body.y, width, height)
}

/// Where the menu trigger sits within the header row.
pub fn menu_trigger_area(header: Rect) -> Rect {
    let width = (MENU_TRIGGER_LABEL.chars().count() as u16).min(header.width);
    Rect::new(header.x + header.width - width, header.y, width, header.height.min(1))
}

pub fn render_menu_trigger(frame: &mut Frame, area: Rect, menu_open: bool) {
    let style = if menu_open {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(MENU_TRIGGER_LABEL, style))),
        area,
    );
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, overlay: bool) {
    if overlay {
        frame.render_widget(Clear, area);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if overlay {
            BorderType::Double
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(" Sidebar ");

    let lines: Vec<Line> = SIDEBAR_ENTRIES
        .iter()
        .map(|entry| Line::from(Span::raw(format!(" {}", entry))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_menu(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_ACTIVE))
        .title(" Menu ");

    let lines: Vec<Line> = MENU_ENTRIES
        .iter()
        .map(|entry| Line::from(Span::styled(format!(" {}", entry), Style::default().fg(COLOR_ACTIVE))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the original and transformed panels with the indicator between.
pub fn render_code_panels(frame: &mut Frame, area: Rect, mode: LayoutMode) {
    let chunks = if mode.stacks_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(48),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(48),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area)
    };

    render_code_block(frame, chunks[0], " Original ");

    let indicator_row = if mode.stacks_panels() {
        chunks[1]
    } else {
        Rect::new(chunks[1].x, chunks[1].y + chunks[1].height / 2, chunks[1].width, 1)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            mode.indicator(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        indicator_row,
    );

    render_code_block(frame, chunks[2], " Transformed ");
}

fn render_code_block(frame: &mut Frame, area: Rect, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    let hint = Paragraph::new(Line::from(Span::styled(
        " (no code loaded)",
        Style::default().fg(COLOR_DIM),
    )))
    .block(block);

    frame.render_widget(hint, area);
}
