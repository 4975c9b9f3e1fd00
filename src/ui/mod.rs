//! Terminal demo host
//!
//! The host rendering collaborator: it receives a [`Snapshot`] of class sets
//! and decides what to draw from them. It never reads or writes the store.

mod layout;
mod panels;
mod theme;
mod toast;

pub use layout::{breakpoints, LayoutContext, LayoutMode};
pub use panels::{menu_area, menu_trigger_area};
pub use theme::{toast_background, toast_foreground};
pub use toast::toast_area;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::binder::Snapshot;
use crate::state::PanelSpec;
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Panel id the host draws as the sidebar.
pub const SIDEBAR_ID: &str = "sidebar";
/// Panel id the host draws as the dropdown menu.
pub const MENU_ID: &str = "menu";

const KEY_HINTS: &str =
    " s sidebar  m menu  t/e/w/i toast  d dismiss  esc close menu  q quit";

/// What the host needs to draw one frame.
pub struct HostView<'a> {
    pub snapshot: &'a Snapshot,
    /// Registered panels, for their active class names
    pub panels: &'a [PanelSpec],
}

impl<'a> HostView<'a> {
    pub fn new(snapshot: &'a Snapshot, panels: &'a [PanelSpec]) -> Self {
        Self { snapshot, panels }
    }

    /// Whether the panel's class set carries its active class.
    pub fn is_active(&self, id: &str) -> bool {
        let Some(spec) = self.panels.iter().find(|spec| spec.id.as_str() == id) else {
            return false;
        };
        self.snapshot
            .panel(id)
            .is_some_and(|classes| classes.contains(&spec.active_class))
    }
}

/// Split the screen into header, body and footer rows.
pub fn screen_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn render(frame: &mut Frame, view: &HostView) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let mode = ctx.mode();
    let (header, body, footer) = screen_areas(area);

    render_header(frame, header, view);

    let sidebar_open = view.is_active(SIDEBAR_ID);
    if sidebar_open && !mode.sidebar_is_overlay() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(ctx.sidebar_width()), Constraint::Min(0)])
            .split(body);
        panels::render_sidebar(frame, columns[0], false);
        panels::render_code_panels(frame, columns[1], mode);
    } else {
        panels::render_code_panels(frame, body, mode);
        if sidebar_open {
            let overlay = Rect::new(body.x, body.y, ctx.sidebar_width().min(body.width), body.height);
            panels::render_sidebar(frame, overlay, true);
        }
    }

    if view.is_active(MENU_ID) {
        panels::render_menu(frame, menu_area(body));
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))),
        footer,
    );

    let message = view.snapshot.toast_message.as_deref().unwrap_or_default();
    toast::render_toast(
        frame,
        toast_area(area, &ctx),
        &view.snapshot.toast,
        message,
        view.snapshot.toast_shown_at,
    );
}

fn render_header(frame: &mut Frame, area: Rect, view: &HostView) {
    let classes: Vec<String> = view
        .snapshot
        .panels
        .iter()
        .map(|(id, classes)| format!("{}[{}]", id, classes))
        .collect();

    let line = Line::from(vec![
        Span::styled(" panelkit ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(classes.join(" "), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
    panels::render_menu_trigger(frame, menu_trigger_area(area), view.is_active(MENU_ID));
}
