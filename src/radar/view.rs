// Interaction controller
//
// Owns the pan/zoom view transform, hover state and click selection. It
// reads the layout for hit-testing but never writes to it; a pan or zoom
// can never trigger a relayout.

use super::{Blip, RadarLayout};
use std::time::{Duration, Instant};

/// Smallest zoom factor relative to native size
pub const MIN_SCALE: f64 = 0.5;

/// Largest zoom factor relative to native size
pub const MAX_SCALE: f64 = 5.0;

/// Duration of the eased return to identity
pub const RESET_DURATION: Duration = Duration::from_millis(750);

// ============================================================================
// View transform
// ============================================================================

/// Translate + uniform scale, mapping world to view: `view = world·scale + t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }

    pub fn invert(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            (x - self.translate_x) / self.scale,
            (y - self.translate_y) / self.scale,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Component-wise interpolation, `t` in [0, 1]
    fn lerp(&self, to: &ViewTransform, t: f64) -> ViewTransform {
        ViewTransform {
            translate_x: self.translate_x + (to.translate_x - self.translate_x) * t,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

// ============================================================================
// Hit-testing and tooltip
// ============================================================================

/// Index of the blip whose marker is under `world`, if any
///
/// The nearest centre within `hit_radius` wins; on a tie the blip drawn
/// last (top-most) wins.
pub fn hit_test(layout: &RadarLayout, world: (f64, f64), hit_radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, placed) in layout.blips.iter().enumerate() {
        let d = (placed.placement.x - world.0).hypot(placed.placement.y - world.1);
        if d > hit_radius {
            continue;
        }
        match best {
            Some((_, best_d)) if d > best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Hover tooltip content and where the pointer is, in view coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub blip_index: usize,
    pub pointer: (f64, f64),
    pub title: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    fn for_blip(blip_index: usize, blip: &Blip, pointer: (f64, f64)) -> Self {
        Self {
            blip_index,
            pointer,
            title: blip.name.clone(),
            lines: vec![
                format!("Owner: {}", blip.owner),
                format!("{} - {}", blip.quadrant, blip.ring),
            ],
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct DragState {
    last: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
struct ResetAnimation {
    from: ViewTransform,
    started: Instant,
}

/// View state mutated by user interaction
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    transform: ViewTransform,
    drag: Option<DragState>,
    pointer: Option<(f64, f64)>,
    hit_radius: f64,
    reset_animation: Option<ResetAnimation>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Blip under the pointer through the current transform
    ///
    /// Derived on every call, so zoom, pan, an eased reset or a relayout
    /// under a still pointer is reflected immediately.
    pub fn hovered(&self, layout: &RadarLayout) -> Option<usize> {
        let pointer = self.pointer?;
        hit_test(layout, self.transform.invert(pointer), self.hit_radius)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_resetting(&self) -> bool {
        self.reset_animation.is_some()
    }

    /// Set the zoom factor, clamped to [MIN_SCALE, MAX_SCALE]
    pub fn zoom_to(&mut self, scale: f64) {
        self.reset_animation = None;
        self.transform.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Multiply the zoom factor, keeping `anchor` (view coordinates) fixed
    pub fn zoom_by(&mut self, factor: f64, anchor: (f64, f64)) {
        self.reset_animation = None;
        let old = self.transform.scale;
        let new = (old * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new / old;
        self.transform.translate_x = anchor.0 - (anchor.0 - self.transform.translate_x) * ratio;
        self.transform.translate_y = anchor.1 - (anchor.1 - self.transform.translate_y) * ratio;
        self.transform.scale = new;
    }

    /// Shift the view by a delta in view units
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.reset_animation = None;
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
    }

    pub fn begin_drag(&mut self, at: (f64, f64)) {
        self.reset_animation = None;
        self.drag = Some(DragState { last: at });
    }

    /// Pan by the pointer movement since the last drag event
    pub fn drag_to(&mut self, at: (f64, f64)) {
        if let Some(drag) = self.drag {
            self.pan_by(at.0 - drag.last.0, at.1 - drag.last.1);
            self.drag = Some(DragState { last: at });
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Restore the identity transform immediately
    pub fn reset(&mut self) {
        self.reset_animation = None;
        self.drag = None;
        self.transform = ViewTransform::IDENTITY;
    }

    /// Start an eased return to identity
    pub fn begin_reset(&mut self, now: Instant) {
        if self.transform.is_identity() {
            return;
        }
        self.drag = None;
        self.reset_animation = Some(ResetAnimation {
            from: self.transform,
            started: now,
        });
    }

    /// Advance a running reset; it always ends on the exact identity
    pub fn advance(&mut self, now: Instant) {
        let Some(anim) = self.reset_animation else {
            return;
        };
        let elapsed = now.saturating_duration_since(anim.started);
        if elapsed >= RESET_DURATION {
            self.reset_animation = None;
            self.transform = ViewTransform::IDENTITY;
            return;
        }
        let t = elapsed.as_secs_f64() / RESET_DURATION.as_secs_f64();
        self.transform = anim.from.lerp(&ViewTransform::IDENTITY, ease_out_cubic(t));
    }

    /// Track the pointer and update hover state
    ///
    /// Returns the hovered blip index, if any.
    pub fn pointer_moved(
        &mut self,
        at: (f64, f64),
        layout: &RadarLayout,
        hit_radius: f64,
    ) -> Option<usize> {
        self.pointer = Some(at);
        self.hit_radius = hit_radius;
        self.hovered(layout)
    }

    /// Pointer left the chart: hide any tooltip
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Tooltip for the hovered blip, if the pointer is over one
    pub fn tooltip(&self, layout: &RadarLayout) -> Option<Tooltip> {
        let idx = self.hovered(layout)?;
        let pointer = self.pointer?;
        let placed = layout.blips.get(idx)?;
        Some(Tooltip::for_blip(idx, &placed.blip, pointer))
    }

    /// Click at `at` (view coordinates)
    ///
    /// If a marker is hit, `on_select` is called once with that blip's full
    /// record and its layout index is returned. Hover state is left untouched.
    pub fn click<F>(
        &self,
        at: (f64, f64),
        layout: &RadarLayout,
        hit_radius: f64,
        on_select: F,
    ) -> Option<usize>
    where
        F: FnOnce(&Blip),
    {
        let idx = hit_test(layout, self.transform.invert(at), hit_radius)?;
        on_select(&layout.blips[idx].blip);
        Some(idx)
    }
}
