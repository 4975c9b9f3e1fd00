//! Color theme constants for the demo host
//!
//! The styling layer: maps classes the binder emits to colors.

use ratatui::style::Color;

use crate::state::ToastKind;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for headers and the open sidebar
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Active menu entries
pub const COLOR_ACTIVE: Color = Color::LightGreen;

// ============================================================================
// Toast Colors
// ============================================================================

pub const COLOR_TOAST_SUCCESS: Color = Color::Rgb(40, 167, 69); // #28a745
pub const COLOR_TOAST_WARNING: Color = Color::Rgb(255, 193, 7); // #ffc107
pub const COLOR_TOAST_ERROR: Color = Color::Rgb(220, 53, 69); // #dc3545
pub const COLOR_TOAST_INFO: Color = Color::Rgb(102, 126, 234); // #667eea

/// Background for a toast class; unknown classes get the info color.
pub fn toast_background(kind_class: &str) -> Color {
    match ToastKind::parse(kind_class) {
        ToastKind::Success => COLOR_TOAST_SUCCESS,
        ToastKind::Warning => COLOR_TOAST_WARNING,
        ToastKind::Error => COLOR_TOAST_ERROR,
        ToastKind::Info => COLOR_TOAST_INFO,
    }
}

/// Foreground that stays readable on the toast background.
pub fn toast_foreground(kind_class: &str) -> Color {
    match ToastKind::parse(kind_class) {
        ToastKind::Warning => Color::Black,
        _ => Color::White,
    }
}
