// Blip filtering
//
// Free-text search plus optional quadrant and ring filters. The radar
// only ever sees the filtered snapshot; any change here means a fresh
// layout pass.

use crate::radar::{Blip, Quadrant, Ring};

/// Active filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlipFilter {
    /// Case-insensitive term matched against name, description and owner
    pub term: String,
    pub quadrant: Option<Quadrant>,
    pub ring: Option<Ring>,
}

impl BlipFilter {
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty() || self.quadrant.is_some() || self.ring.is_some()
    }

    pub fn matches(&self, blip: &Blip) -> bool {
        if let Some(q) = self.quadrant {
            if blip.quadrant != q {
                return false;
            }
        }
        if let Some(r) = self.ring {
            if blip.ring != r {
                return false;
            }
        }

        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&blip.name, &blip.description, &blip.owner]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// Matching blips, in snapshot order
    pub fn apply(&self, blips: &[Blip]) -> Vec<Blip> {
        blips.iter().filter(|b| self.matches(b)).cloned().collect()
    }

    /// Step the quadrant filter: none → each quadrant in turn → none
    pub fn cycle_quadrant(&mut self) {
        self.quadrant = cycle(self.quadrant, &Quadrant::ALL);
    }

    /// Step the ring filter: none → each ring in turn → none
    pub fn cycle_ring(&mut self) {
        self.ring = cycle(self.ring, &Ring::ALL);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Short human summary for the status bar, e.g. `"rust" · Tools · any ring`
    pub fn summary(&self) -> String {
        if !self.is_active() {
            return "no filter".to_string();
        }
        let mut parts = Vec::new();
        if !self.term.trim().is_empty() {
            parts.push(format!("\"{}\"", self.term.trim()));
        }
        parts.push(
            self.quadrant
                .map(|q| q.label().to_string())
                .unwrap_or_else(|| "any quadrant".to_string()),
        );
        parts.push(
            self.ring
                .map(|r| r.label().to_string())
                .unwrap_or_else(|| "any ring".to_string()),
        );
        parts.join(" · ")
    }
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => all
            .iter()
            .position(|v| *v == value)
            .and_then(|i| all.get(i + 1))
            .copied(),
    }
}
