// Theme module - Color palette for the radar viewer
//
// UI chrome uses the muted palette below. Quadrant colors follow the
// classic ten-color categorical scheme so every quadrant keeps the same
// hue on the chart, in the legend, and in the overview.

pub mod palette;

use ratatui::style::Color;

/// Primary accent - borders, titles, focused widgets
/// RGB: (187, 154, 247)
pub const ACCENT_PURPLE: Color = Color::Rgb(187, 154, 247);

/// Warnings - rejected blips, active search prompt
/// RGB: (255, 158, 100)
pub const WARN_ORANGE: Color = Color::Rgb(255, 158, 100);

/// Errors - render failures, strict-mode rejections
/// RGB: (247, 118, 142)
pub const ERROR_RED: Color = Color::Rgb(247, 118, 142);

/// Positive state - active filters, identity zoom
/// RGB: (158, 206, 106)
pub const OK_GREEN: Color = Color::Rgb(158, 206, 106);

/// General text and ring outlines
/// RGB: (169, 177, 214)
pub const TEXT_MUTED: Color = Color::Rgb(169, 177, 214);

/// Selected list row background
/// RGB: (47, 51, 77)
pub const SELECTION_BG: Color = Color::Rgb(47, 51, 77);

/// Chart background the quadrant wedges are tinted against
pub const CHART_BG: (u8, u8, u8) = (26, 27, 38);

pub use palette::*;
