// Geometry / scale mapper
//
// Maps categorical quadrant and ring values onto angular sectors and radial
// bands. Pure functions of (quadrant, ring, layout configuration).

use super::blip::{Quadrant, Ring};
use super::config::LayoutConfig;
use super::error::{RadarError, Result};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Angular span owned by one quadrant (90°)
pub const SECTOR_SPAN: f64 = FRAC_PI_2;

/// Angular interval owned by one quadrant, in radians
///
/// Angles follow the mathematical convention: 0 on the +x axis,
/// counter-clockwise, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    /// Angle of the sector bisector
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + FRAC_PI_4
    }

    /// Half-open membership test, angle normalised into [0, 2π)
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = angle.rem_euclid(std::f64::consts::TAU);
        a >= self.start_angle && a < self.end_angle
    }
}

/// Radial interval owned by one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub index: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Band {
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Half-open membership test
    pub fn contains_radius(&self, radius: f64) -> bool {
        radius >= self.inner_radius && radius < self.outer_radius
    }
}

/// Linear radial scale from the ring domain [0, 4] to [0, chart_radius]
///
/// `ring_scale(j, config)` is the outer boundary of band `j - 1`; fractional
/// inputs give intermediate radii (`j + 0.5` is the midpoint of band `j`).
pub fn ring_scale(value: f64, config: &LayoutConfig) -> f64 {
    let rings = config.ring_order.len() as f64;
    value / rings * config.chart_radius
}

/// Sector index of a quadrant in the configured order
pub fn sector_index(quadrant: Quadrant, config: &LayoutConfig) -> Result<usize> {
    config
        .quadrant_order
        .iter()
        .position(|q| *q == quadrant)
        .ok_or_else(|| RadarError::invalid_category("quadrant", quadrant.label()))
}

/// Band index of a ring in the configured order
pub fn band_index(ring: Ring, config: &LayoutConfig) -> Result<usize> {
    config
        .ring_order
        .iter()
        .position(|r| *r == ring)
        .ok_or_else(|| RadarError::invalid_category("ring", ring.label()))
}

/// Angular interval owned by a quadrant
///
/// Quadrant `i` (0-indexed in configured order) owns `[i·90°, (i+1)·90°)`.
pub fn sector_for(quadrant: Quadrant, config: &LayoutConfig) -> Result<Sector> {
    let index = sector_index(quadrant, config)?;
    let start_angle = index as f64 * SECTOR_SPAN;
    Ok(Sector {
        index,
        start_angle,
        end_angle: start_angle + SECTOR_SPAN,
    })
}

/// Radial interval owned by a ring
///
/// Ring `j` (0-indexed, innermost first) owns `[radius·j/4, radius·(j+1)/4)`.
pub fn band_for(ring: Ring, config: &LayoutConfig) -> Result<Band> {
    let index = band_index(ring, config)?;
    Ok(Band {
        index,
        inner_radius: ring_scale(index as f64, config),
        outer_radius: ring_scale(index as f64 + 1.0, config),
    })
}

/// Map a blip's classification to its sector and band
///
/// # Errors
/// `InvalidCategory` when the quadrant or ring is missing from the
/// configured order. The mapper never falls back to a default sector.
pub fn map_category(
    quadrant: Quadrant,
    ring: Ring,
    config: &LayoutConfig,
) -> Result<(Sector, Band)> {
    Ok((sector_for(quadrant, config)?, band_for(ring, config)?))
}

/// Polar to Cartesian, chart centre at the origin
pub fn polar_to_cartesian(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}
