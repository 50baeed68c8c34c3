// Quadrant and ring colors
//
// Colors are keyed by quadrant identity, never by sector position, so a
// reordered configuration keeps each quadrant's hue.

use ratatui::style::Color;

use super::CHART_BG;
use crate::radar::{Quadrant, Ring};

/// Share of the background mixed into a wedge tint
const WEDGE_TINT_RATIO: f32 = 0.85;

fn quadrant_rgb(quadrant: Quadrant) -> (u8, u8, u8) {
    match quadrant {
        Quadrant::Techniques => (0x1f, 0x77, 0xb4),
        Quadrant::Tools => (0xff, 0x7f, 0x0e),
        Quadrant::Platforms => (0x2c, 0xa0, 0x2c),
        Quadrant::LanguagesAndFrameworks => (0xd6, 0x27, 0x28),
    }
}

/// Marker and legend color for a quadrant
pub fn quadrant_color(quadrant: Quadrant) -> Color {
    let (r, g, b) = quadrant_rgb(quadrant);
    Color::Rgb(r, g, b)
}

/// Faint wedge fill for a quadrant, mixed toward the chart background
pub fn quadrant_tint(quadrant: Quadrant) -> Color {
    interpolate_color(quadrant_rgb(quadrant), CHART_BG, WEDGE_TINT_RATIO)
}

/// Text color for a ring name; inner rings read brighter
pub fn ring_color(ring: Ring) -> Color {
    match ring {
        Ring::Adopt => Color::Rgb(158, 206, 106),
        Ring::Trial => Color::Rgb(122, 162, 247),
        Ring::Assess => Color::Rgb(224, 175, 104),
        Ring::Hold => Color::Rgb(247, 118, 142),
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
///
/// # Returns
/// Interpolated Color::Rgb value
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Brighten an RGB color by 20%, used for the hovered marker
pub fn highlight(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = ((r as f32 * 1.2).min(255.0)) as u8;
            let g = ((g as f32 * 1.2).min(255.0)) as u8;
            let b = ((b as f32 * 1.2).min(255.0)) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}
