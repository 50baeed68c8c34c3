// Layout configuration
//
// Process-wide constants that drive the mapper, the placement generator
// and the relaxation simulator. Effectively static per deployment; the
// command line can override a few of them at startup.

use super::blip::{Quadrant, Ring};
use super::error::{RadarError, Result};

// ============================================================================
// Defaults
// ============================================================================

/// Chart radius in world units (800px surface, 50px margin, halved)
pub const DEFAULT_CHART_RADIUS: f64 = 350.0;

/// Per-blip collision radius; two blips want at least twice this apart
pub const DEFAULT_ITEM_RADIUS: f64 = 15.0;

/// Fixed number of relaxation ticks per layout pass
pub const DEFAULT_ITERATIONS: usize = 300;

/// Angular jitter as a fraction of the quadrant span, each side of the bisector
pub const DEFAULT_ANGULAR_JITTER: f64 = 0.10;

/// Radial jitter in world units, each side of the band midpoint
pub const DEFAULT_RADIAL_JITTER: f64 = 20.0;

/// Strength of the pull back toward each blip's initial target
pub const DEFAULT_K_TARGET: f64 = 0.1;

/// Fraction of velocity removed every tick
pub const DEFAULT_VELOCITY_DECAY: f64 = 0.4;

/// Value alpha reaches on the last tick
pub const DEFAULT_ALPHA_MIN: f64 = 0.001;

/// Extra separation the collision pass aims for beyond two radii
pub const DEFAULT_COLLISION_PADDING: f64 = 1.0;

// ============================================================================
// Types
// ============================================================================

/// How the simulator finds pairs that may repel each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborSearch {
    /// Every pair, every tick
    #[default]
    BruteForce,
    /// Uniform grid rebuilt every tick, cell size = repulsion reach
    Grid,
}

/// Layout configuration for one radar
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Quadrant order; index `i` owns `[i·90°, (i+1)·90°)`
    pub quadrant_order: [Quadrant; 4],
    /// Ring order, innermost first
    pub ring_order: [Ring; 4],
    pub chart_radius: f64,
    pub item_radius: f64,
    pub iterations: usize,
    pub angular_jitter: f64,
    pub radial_jitter: f64,
    pub k_target: f64,
    pub velocity_decay: f64,
    pub alpha_min: f64,
    pub collision_padding: f64,
    pub neighbor_search: NeighborSearch,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            quadrant_order: Quadrant::ALL,
            ring_order: Ring::ALL,
            chart_radius: DEFAULT_CHART_RADIUS,
            item_radius: DEFAULT_ITEM_RADIUS,
            iterations: DEFAULT_ITERATIONS,
            angular_jitter: DEFAULT_ANGULAR_JITTER,
            radial_jitter: DEFAULT_RADIAL_JITTER,
            k_target: DEFAULT_K_TARGET,
            velocity_decay: DEFAULT_VELOCITY_DECAY,
            alpha_min: DEFAULT_ALPHA_MIN,
            collision_padding: DEFAULT_COLLISION_PADDING,
            neighbor_search: NeighborSearch::default(),
        }
    }
}

impl LayoutConfig {
    /// Distance below which two blips repel
    pub fn repulsion_reach(&self) -> f64 {
        2.0 * self.item_radius + self.collision_padding
    }

    /// Per-tick alpha decay so that alpha hits `alpha_min` on the last tick
    pub fn alpha_decay(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        1.0 - self.alpha_min.powf(1.0 / self.iterations as f64)
    }

    /// Check that the configuration can produce a chart
    ///
    /// Orders with a duplicated label are rejected here. A duplicate would
    /// leave some category without a sector or band, and the mapper would
    /// then reject every blip of that category.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("chart_radius", self.chart_radius),
            ("item_radius", self.item_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RadarError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("angular_jitter", self.angular_jitter),
            ("radial_jitter", self.radial_jitter),
            ("k_target", self.k_target),
            ("collision_padding", self.collision_padding),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RadarError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.velocity_decay) {
            return Err(RadarError::InvalidConfig(format!(
                "velocity_decay must be in [0, 1), got {}",
                self.velocity_decay
            )));
        }
        if !(self.alpha_min > 0.0 && self.alpha_min < 1.0) {
            return Err(RadarError::InvalidConfig(format!(
                "alpha_min must be in (0, 1), got {}",
                self.alpha_min
            )));
        }

        if Quadrant::ALL
            .iter()
            .any(|q| !self.quadrant_order.contains(q))
        {
            return Err(RadarError::InvalidConfig(
                "quadrant order must list every quadrant once".to_string(),
            ));
        }
        if Ring::ALL.iter().any(|r| !self.ring_order.contains(r)) {
            return Err(RadarError::InvalidConfig(
                "ring order must list every ring once".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_alpha_decay_reaches_alpha_min() {
        let config = LayoutConfig::default();
        let decay = config.alpha_decay();
        let mut alpha = 1.0_f64;
        for _ in 0..config.iterations {
            alpha -= alpha * decay;
        }
        assert!((alpha - config.alpha_min).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_has_no_decay() {
        let config = LayoutConfig {
            iterations: 0,
            ..Default::default()
        };
        assert_eq!(config.alpha_decay(), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let config = LayoutConfig {
            chart_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RadarError::InvalidConfig(_))));

        let config = LayoutConfig {
            item_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_quadrant_order_rejected() {
        let config = LayoutConfig {
            quadrant_order: [
                Quadrant::Tools,
                Quadrant::Tools,
                Quadrant::Platforms,
                Quadrant::Techniques,
            ],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RadarError::InvalidConfig(_))));
    }

    #[test]
    fn test_repulsion_reach_includes_padding() {
        let config = LayoutConfig::default();
        assert_eq!(config.repulsion_reach(), 31.0);
    }
}
