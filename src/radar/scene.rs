// Layout renderer projection
//
// Turns a computed layout into an ordered list of drawable primitives in
// world coordinates. Painting them onto a concrete surface (and applying
// the view transform) is the UI's job; this module never touches the
// layout it reads from.

use super::blip::{Quadrant, Ring};
use super::config::LayoutConfig;
use super::geometry::{polar_to_cartesian, ring_scale, SECTOR_SPAN};
use super::RadarLayout;
use crate::theme::quadrant_color;
use ratatui::style::Color;

/// Gap between the chart edge and the quadrant labels, in world units
pub const QUADRANT_LABEL_OFFSET: f64 = 20.0;

/// Horizontal offset of ring labels from the vertical axis
pub const RING_LABEL_OFFSET: f64 = 5.0;

/// One drawable element, back-to-front order is the order in `Scene`
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Tinted 90° wedge owned by a quadrant
    SectorWedge {
        quadrant: Quadrant,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
        color: Color,
    },
    /// Outer boundary circle of a ring's band
    RingCircle { ring: Ring, radius: f64 },
    /// Filled blip marker with its name
    Marker {
        blip_index: usize,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        label: String,
    },
    /// Quadrant name at the outer end of its bisector
    QuadrantLabel { quadrant: Quadrant, x: f64, y: f64 },
    /// Ring name beside the vertical axis, inside its band
    RingLabel { ring: Ring, x: f64, y: f64 },
    /// Legend row; drawn in screen space, outside the view transform
    LegendEntry {
        quadrant: Quadrant,
        row: usize,
        color: Color,
    },
}

/// Ordered primitives for one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Marker primitives only, in draw order
    pub fn markers(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Marker { .. }))
    }
}

/// Project a layout and its configuration onto drawable primitives
///
/// Order: wedges, ring circles, markers, axis labels, legend. An empty
/// layout produces an empty scene; the caller shows a placeholder instead.
pub fn build_scene(layout: &RadarLayout, config: &LayoutConfig) -> Scene {
    if layout.is_empty() {
        return Scene::default();
    }

    let mut primitives = Vec::with_capacity(layout.len() + 16);
    let radius = config.chart_radius;

    for (i, quadrant) in config.quadrant_order.iter().enumerate() {
        let start_angle = i as f64 * SECTOR_SPAN;
        primitives.push(Primitive::SectorWedge {
            quadrant: *quadrant,
            start_angle,
            end_angle: start_angle + SECTOR_SPAN,
            radius,
            color: quadrant_color(*quadrant),
        });
    }

    for (j, ring) in config.ring_order.iter().enumerate() {
        primitives.push(Primitive::RingCircle {
            ring: *ring,
            radius: ring_scale(j as f64 + 1.0, config),
        });
    }

    for (idx, placed) in layout.blips.iter().enumerate() {
        primitives.push(Primitive::Marker {
            blip_index: idx,
            x: placed.placement.x,
            y: placed.placement.y,
            radius: config.item_radius,
            color: quadrant_color(placed.blip.quadrant),
            label: placed.blip.name.clone(),
        });
    }

    for (i, quadrant) in config.quadrant_order.iter().enumerate() {
        let bisector = i as f64 * SECTOR_SPAN + SECTOR_SPAN / 2.0;
        let (x, y) = polar_to_cartesian(bisector, radius + QUADRANT_LABEL_OFFSET);
        primitives.push(Primitive::QuadrantLabel {
            quadrant: *quadrant,
            x,
            y,
        });
    }

    for (j, ring) in config.ring_order.iter().enumerate() {
        primitives.push(Primitive::RingLabel {
            ring: *ring,
            x: RING_LABEL_OFFSET,
            y: ring_scale(j as f64 + 0.5, config),
        });
    }

    for (row, quadrant) in config.quadrant_order.iter().enumerate() {
        primitives.push(Primitive::LegendEntry {
            quadrant: *quadrant,
            row,
            color: quadrant_color(*quadrant),
        });
    }

    Scene { primitives }
}
