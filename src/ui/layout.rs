//! Responsive Layout
//!
//! Breakpoints are part of the styling contract, not of the visibility
//! state: the host reads them to decide how to lay out the class sets it
//! was handed. Terminal columns are mapped to pixels at a fixed cell width.

// ============================================================================
// Breakpoints
// ============================================================================

/// Viewport width breakpoints, in pixels
pub mod breakpoints {
    /// At or below this width the two-panel layout collapses to one column
    pub const SINGLE_COLUMN_MAX_PX: u32 = 1024;
    /// At or below this width the sidebar becomes an off-canvas overlay
    pub const OFF_CANVAS_MAX_PX: u32 = 768;
    /// Pixels per terminal cell when mapping columns to a viewport width
    pub const CELL_WIDTH_PX: u32 = 8;
}

/// How the page lays out its panels at a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Wider than 1024px: code panels side by side, sidebar docked
    TwoColumn,
    /// 769px..=1024px: code panels stacked, sidebar docked
    SingleColumn,
    /// 768px and below: code panels stacked, sidebar slides over content
    OffCanvas,
}

impl LayoutMode {
    pub fn for_width_px(width_px: u32) -> Self {
        if width_px <= breakpoints::OFF_CANVAS_MAX_PX {
            LayoutMode::OffCanvas
        } else if width_px <= breakpoints::SINGLE_COLUMN_MAX_PX {
            LayoutMode::SingleColumn
        } else {
            LayoutMode::TwoColumn
        }
    }

    pub fn stacks_panels(&self) -> bool {
        !matches!(self, LayoutMode::TwoColumn)
    }

    pub fn sidebar_is_overlay(&self) -> bool {
        matches!(self, LayoutMode::OffCanvas)
    }

    /// Rotation of the directional indicator between the two panels.
    pub fn indicator_rotation_deg(&self) -> u16 {
        if self.stacks_panels() {
            90
        } else {
            0
        }
    }

    /// The indicator glyph after rotation.
    pub fn indicator(&self) -> &'static str {
        match self.indicator_rotation_deg() {
            90 => "↓",
            _ => "→",
        }
    }
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions plus the layout decisions derived from them.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width_px(&self) -> u32 {
        self.width as u32 * breakpoints::CELL_WIDTH_PX
    }

    pub fn mode(&self) -> LayoutMode {
        LayoutMode::for_width_px(self.width_px())
    }

    /// Sidebar width in columns: a quarter of the screen, clamped.
    pub fn sidebar_width(&self) -> u16 {
        (self.width / 4).clamp(16, 32).min(self.width)
    }

    /// Toast width in columns, leaving a small margin.
    pub fn toast_width(&self) -> u16 {
        self.width.saturating_sub(4).min(44)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_boundaries() {
        assert_eq!(LayoutMode::for_width_px(1025), LayoutMode::TwoColumn);
        assert_eq!(LayoutMode::for_width_px(1024), LayoutMode::SingleColumn);
        assert_eq!(LayoutMode::for_width_px(769), LayoutMode::SingleColumn);
        assert_eq!(LayoutMode::for_width_px(768), LayoutMode::OffCanvas);
        assert_eq!(LayoutMode::for_width_px(0), LayoutMode::OffCanvas);
    }

    #[test]
    fn test_indicator_rotates_when_stacked() {
        assert_eq!(LayoutMode::TwoColumn.indicator_rotation_deg(), 0);
        assert_eq!(LayoutMode::SingleColumn.indicator_rotation_deg(), 90);
        assert_eq!(LayoutMode::OffCanvas.indicator(), "↓");
    }

    #[test]
    fn test_only_off_canvas_overlays_sidebar() {
        assert!(!LayoutMode::TwoColumn.sidebar_is_overlay());
        assert!(!LayoutMode::SingleColumn.sidebar_is_overlay());
        assert!(LayoutMode::OffCanvas.sidebar_is_overlay());
    }

    #[test]
    fn test_columns_map_to_pixels() {
        // 128 columns * 8px = 1024px
        assert_eq!(LayoutContext::new(128, 40).mode(), LayoutMode::SingleColumn);
        assert_eq!(LayoutContext::new(129, 40).mode(), LayoutMode::TwoColumn);
        assert_eq!(LayoutContext::new(96, 40).mode(), LayoutMode::OffCanvas);
    }

    #[test]
    fn test_sidebar_width_clamped() {
        assert_eq!(LayoutContext::new(200, 40).sidebar_width(), 32);
        assert_eq!(LayoutContext::new(80, 24).sidebar_width(), 20);
        assert_eq!(LayoutContext::new(10, 5).sidebar_width(), 10);
    }
}
