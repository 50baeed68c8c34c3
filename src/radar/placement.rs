// Initial placement generator
//
// Produces a jittered starting point for each blip inside its sector and
// band. Stateless: the only inputs are the classification, the layout
// configuration and the random source handed in by the caller.

use super::blip::{Quadrant, Ring};
use super::config::LayoutConfig;
use super::error::Result;
use super::geometry::{map_category, polar_to_cartesian, SECTOR_SPAN};
use rand::Rng;

/// A blip position relative to the chart centre plus its sector and band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Index of the blip's quadrant in the configured order
    pub sector: usize,
    /// Index of the blip's ring in the configured order
    pub band: usize,
}

impl Placement {
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn distance_to(&self, other: &Placement) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Largest share of a sector or band half-width that jitter may cover
const MAX_JITTER_SHARE: f64 = 0.95;

/// Uniform draw in [-1, 1)
fn symmetric_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

/// Pick the starting position for one blip
///
/// The angle sits at the sector bisector plus a uniform jitter of up to
/// `angular_jitter` of the sector span either way; the radius sits at the
/// band midpoint plus a uniform jitter of up to `radial_jitter` units.
/// Both jitters are capped at `MAX_JITTER_SHARE` of the half-width of the
/// sector or band, so the result always lies inside them.
///
/// # Errors
/// `InvalidCategory` if the configuration has no sector or band for the
/// blip's quadrant or ring.
pub fn initial_placement<R: Rng + ?Sized>(
    quadrant: Quadrant,
    ring: Ring,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Placement> {
    let (sector, band) = map_category(quadrant, ring, config)?;

    let angular_reach =
        (config.angular_jitter * SECTOR_SPAN).min(SECTOR_SPAN / 2.0 * MAX_JITTER_SHARE);
    let half_width = (band.outer_radius - band.inner_radius) / 2.0;
    let radial_reach = config.radial_jitter.min(half_width * MAX_JITTER_SHARE);

    let angle = sector.mid_angle() + symmetric_unit(rng) * angular_reach;
    let radius = band.mid_radius() + symmetric_unit(rng) * radial_reach;
    let (x, y) = polar_to_cartesian(angle, radius);

    Ok(Placement {
        x,
        y,
        sector: sector.index,
        band: band.index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::geometry::{band_for, sector_for};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_jitter_lands_on_bisector_midpoint() {
        let config = LayoutConfig {
            angular_jitter: 0.0,
            radial_jitter: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let p = initial_placement(Quadrant::Techniques, Ring::Adopt, &config, &mut rng).unwrap();
        let expected = 43.75 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((p.x - expected).abs() < 1e-9);
        assert!((p.y - expected).abs() < 1e-9);
        assert_eq!((p.sector, p.band), (0, 0));
    }

    #[test]
    fn test_same_seed_same_placement() {
        let config = LayoutConfig::default();
        let a = initial_placement(
            Quadrant::Platforms,
            Ring::Assess,
            &config,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        let b = initial_placement(
            Quadrant::Platforms,
            Ring::Assess,
            &config,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_chart_keeps_jitter_inside_band() {
        // Band half-width 12.5 is smaller than the default radial jitter
        let config = LayoutConfig {
            chart_radius: 100.0,
            ..Default::default()
        };
        let sector = sector_for(Quadrant::Techniques, &config).unwrap();
        let band = band_for(Ring::Adopt, &config).unwrap();
        for seed in 0..1000 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = initial_placement(Quadrant::Techniques, Ring::Adopt, &config, &mut rng).unwrap();
            assert!(sector.contains_angle(p.y.atan2(p.x)), "seed {} left its sector", seed);
            assert!(band.contains_radius(p.x.hypot(p.y)), "seed {} left its band", seed);
        }
    }

    #[test]
    fn test_oversized_angular_jitter_stays_in_sector() {
        let config = LayoutConfig {
            angular_jitter: 2.0,
            ..Default::default()
        };
        let sector = sector_for(Quadrant::LanguagesAndFrameworks, &config).unwrap();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = initial_placement(Quadrant::LanguagesAndFrameworks, Ring::Hold, &config, &mut rng).unwrap();
            assert!(sector.contains_angle(p.y.atan2(p.x)));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Jitter never pushes a start point out of its sector or band
        #[test]
        fn prop_initial_placement_stays_in_sector_and_band(
            seed in any::<u64>(),
            q in 0usize..4,
            r in 0usize..4,
        ) {
            let config = LayoutConfig::default();
            let quadrant = Quadrant::ALL[q];
            let ring = Ring::ALL[r];
            let mut rng = StdRng::seed_from_u64(seed);
            let p = initial_placement(quadrant, ring, &config, &mut rng).unwrap();

            let sector = sector_for(quadrant, &config).unwrap();
            let band = band_for(ring, &config).unwrap();
            let angle = p.y.atan2(p.x);
            let radius = p.x.hypot(p.y);

            prop_assert!(sector.contains_angle(angle));
            prop_assert!(band.contains_radius(radius));
            prop_assert!((radius - band.mid_radius()).abs() <= config.radial_jitter + 1e-9);
            prop_assert_eq!(p.sector, sector.index);
            prop_assert_eq!(p.band, band.index);
        }
    }
}
