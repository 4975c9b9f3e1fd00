//! Input translation for the demo host.
//!
//! ```text
//! KeyEvent / MouseEvent -> Command -> Intent -> Controller
//! ```
//!
//! Nothing here touches state; callers forward the resulting intent.

pub mod command;

pub use command::Command;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::controller::Intent;
use crate::state::{PanelId, ToastKind};
use crate::ui::{MENU_ID, SIDEBAR_ID};

/// Translate a key press into a command.
pub fn translate_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let intent = match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Char('s') => Intent::TogglePanel(PanelId::from(SIDEBAR_ID)),
        KeyCode::Char('m') => Intent::TogglePanel(PanelId::from(MENU_ID)),
        KeyCode::Char('t') => Intent::toast("Code transformed successfully!", ToastKind::Success),
        KeyCode::Char('e') => Intent::toast("Failed to copy code", ToastKind::Error),
        KeyCode::Char('w') => Intent::toast("Please select a template first", ToastKind::Warning),
        KeyCode::Char('i') => Intent::toast("Code panels swapped", ToastKind::Info),
        KeyCode::Char('d') => Intent::DismissToast,
        KeyCode::Esc => Intent::OutsideClick,
        _ => return None,
    };
    Some(Command::Dispatch(intent))
}

/// Translate a mouse event.
///
/// A left click on `trigger` toggles the menu. While the menu is open
/// (`menu` is its area), a left click anywhere except the menu and its
/// trigger closes transient panels.
pub fn translate_mouse(mouse: MouseEvent, trigger: Rect, menu: Option<Rect>) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);
    if trigger.contains(position) {
        return Some(Command::Dispatch(Intent::TogglePanel(PanelId::from(MENU_ID))));
    }
    let menu = menu?;
    if menu.contains(position) {
        None
    } else {
        Some(Command::Dispatch(Intent::OutsideClick))
    }
}
