// Application configuration types
//
// This module contains UI constants and the small enums the viewer uses:
// - Tick and animation timing
// - Zoom and pan steps
// - Minimum usable canvas size
// - Page selection

// ============================================================================
// Constants
// ============================================================================

/// Event poll / redraw interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 50;

/// Zoom multiplier per key press or wheel notch
pub const ZOOM_STEP: f64 = 1.2;

/// Pan distance per Shift+arrow press, in view units
pub const PAN_STEP: f64 = 25.0;

/// Smallest inner canvas (columns) the radar can be drawn into
pub const MIN_CANVAS_WIDTH: u16 = 20;

/// Smallest inner canvas (rows) the radar can be drawn into
pub const MIN_CANVAS_HEIGHT: u16 = 8;

/// Zoom factor from which every marker gets its name printed
pub const LABEL_ZOOM_THRESHOLD: f64 = 1.5;

/// Text of the on-canvas reset control
pub const RESET_BUTTON_LABEL: &str = "[Reset Zoom]";

/// Shown in the radar pane when the filtered snapshot is empty
pub const EMPTY_RADAR_MESSAGE: &str =
    "No blips to display. Try adjusting your filters or adding new blips.";

/// Shown on the overview page when the filtered snapshot is empty
pub const EMPTY_OVERVIEW_MESSAGE: &str =
    "No blips available. Please add some blips to view the overview.";

// ============================================================================
// Enums
// ============================================================================

/// Which page fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Interactive radar chart (default)
    #[default]
    Radar,
    /// Distribution bar charts and blip table
    Overview,
}

impl Page {
    pub fn toggle(self) -> Self {
        match self {
            Page::Radar => Page::Overview,
            Page::Overview => Page::Radar,
        }
    }
}
