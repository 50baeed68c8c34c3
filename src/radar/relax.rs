// Collision relaxation simulator
//
// Fixed-step force simulation over point masses. Each tick adds a restoring
// pull toward every blip's initial target and a pairwise repulsion for
// blips closer than the repulsion reach, then damps velocity and moves.
// Runs to completion synchronously; nothing outside sees a partial layout.

use super::config::{LayoutConfig, NeighborSearch};
use super::placement::Placement;
use super::spatial_grid::SpatialGrid;

/// Golden angle, used to spread coincident pairs apart deterministically
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Separation applied to exactly coincident points before normalising
const COINCIDENT_NUDGE: f64 = 1e-6;

/// In-progress force simulation over a set of placements
pub struct Simulation<'a> {
    config: &'a LayoutConfig,
    targets: Vec<(f64, f64)>,
    positions: Vec<(f64, f64)>,
    velocities: Vec<(f64, f64)>,
    alpha: f64,
    alpha_decay: f64,
    ticks: usize,
}

impl<'a> Simulation<'a> {
    /// Start a simulation with every blip resting at its initial target
    pub fn new(initial: &[Placement], config: &'a LayoutConfig) -> Self {
        let targets: Vec<(f64, f64)> = initial.iter().map(Placement::position).collect();
        Self {
            config,
            positions: targets.clone(),
            velocities: vec![(0.0, 0.0); targets.len()],
            targets,
            alpha: 1.0,
            alpha_decay: config.alpha_decay(),
            ticks: 0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) {
        self.alpha += (0.0 - self.alpha) * self.alpha_decay;

        self.apply_restoring_force();
        self.apply_repulsion();

        let keep = 1.0 - self.config.velocity_decay;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            v.0 *= keep;
            v.1 *= keep;
            p.0 += v.0;
            p.1 += v.1;
        }

        self.ticks += 1;
    }

    /// Pull every blip toward its own target, scaled by alpha
    fn apply_restoring_force(&mut self) {
        let strength = self.config.k_target * self.alpha;
        for ((p, v), t) in self
            .positions
            .iter()
            .zip(self.velocities.iter_mut())
            .zip(self.targets.iter())
        {
            v.0 += (t.0 - p.0) * strength;
            v.1 += (t.1 - p.1) * strength;
        }
    }

    /// Push overlapping pairs apart along the line between their centres
    ///
    /// Pairs are visited in ascending (i, j) order and each correction is
    /// written into the velocities immediately, so later pairs in the same
    /// tick see it. The correction equals the remaining overlap, split
    /// evenly; it shrinks as the pair separates and is zero beyond reach.
    fn apply_repulsion(&mut self) {
        let n = self.positions.len();
        if n < 2 {
            return;
        }
        let reach = self.config.repulsion_reach();

        let grid = match self.config.neighbor_search {
            NeighborSearch::BruteForce => None,
            NeighborSearch::Grid => Some(SpatialGrid::build(&self.predicted(), reach)),
        };

        for i in 0..n {
            let qi = self.predicted_at(i);
            let candidates: Vec<usize> = match &grid {
                None => (i + 1..n).collect(),
                Some(grid) => grid.neighbors_after(i, qi),
            };

            for j in candidates {
                let qj = self.predicted_at(j);
                let mut dx = qi.0 - qj.0;
                let mut dy = qi.1 - qj.1;
                let mut dist_sq = dx * dx + dy * dy;
                if dist_sq >= reach * reach {
                    continue;
                }
                if dist_sq == 0.0 {
                    let angle = (i + j) as f64 * GOLDEN_ANGLE;
                    dx = angle.cos() * COINCIDENT_NUDGE;
                    dy = angle.sin() * COINCIDENT_NUDGE;
                    dist_sq = dx * dx + dy * dy;
                }

                let dist = dist_sq.sqrt();
                let scale = (reach - dist) / dist * 0.5;
                let (px, py) = (dx * scale, dy * scale);

                self.velocities[i].0 += px;
                self.velocities[i].1 += py;
                self.velocities[j].0 -= px;
                self.velocities[j].1 -= py;
            }
        }
    }

    fn predicted_at(&self, idx: usize) -> (f64, f64) {
        let (p, v) = (self.positions[idx], self.velocities[idx]);
        (p.0 + v.0, p.1 + v.1)
    }

    fn predicted(&self) -> Vec<(f64, f64)> {
        (0..self.positions.len()).map(|i| self.predicted_at(i)).collect()
    }

    /// Run the remaining ticks up to the configured iteration count
    pub fn run(&mut self) {
        while self.ticks < self.config.iterations {
            self.tick();
        }
    }

    /// Freeze the simulation into final placements
    ///
    /// Sector and band indices are carried over from the initial
    /// placements unchanged.
    pub fn into_placements(self, initial: &[Placement]) -> Vec<Placement> {
        initial
            .iter()
            .zip(self.positions)
            .map(|(start, (x, y))| Placement { x, y, ..*start })
            .collect()
    }
}

/// Relax a set of initial placements for the configured number of ticks
pub fn relax(initial: &[Placement], config: &LayoutConfig) -> Vec<Placement> {
    let mut sim = Simulation::new(initial, config);
    sim.run();
    tracing::debug!(
        blips = initial.len(),
        ticks = sim.ticks(),
        alpha = sim.alpha(),
        "Relaxation finished"
    );
    sim.into_placements(initial)
}

// ============================================================================
// Overlap statistics
// ============================================================================

/// Pairwise overlap summary for a set of placements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapStats {
    /// Pairs closer than the minimum distance
    pub overlapping_pairs: usize,
    pub total_pairs: usize,
}

impl OverlapStats {
    /// Fraction of pairs that overlap, 0 when there are no pairs
    pub fn ratio(&self) -> f64 {
        if self.total_pairs == 0 {
            0.0
        } else {
            self.overlapping_pairs as f64 / self.total_pairs as f64
        }
    }
}

/// Count pairs closer than `min_distance` (usually twice the item radius)
pub fn overlap_stats(placements: &[Placement], min_distance: f64) -> OverlapStats {
    let n = placements.len();
    let mut overlapping_pairs = 0;
    for i in 0..n {
        for j in i + 1..n {
            if placements[i].distance_to(&placements[j]) < min_distance {
                overlapping_pairs += 1;
            }
        }
    }
    OverlapStats {
        overlapping_pairs,
        total_pairs: n * n.saturating_sub(1) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::blip::{Quadrant, Ring};
    use crate::radar::placement::initial_placement;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cluster(count: usize, seed: u64) -> Vec<Placement> {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| initial_placement(Quadrant::Tools, Ring::Trial, &config, &mut rng).unwrap())
            .collect()
    }

    // ============================================================================
    // Boundary cases
    // ============================================================================

    #[test]
    fn test_empty_input_relaxes_to_empty() {
        let config = LayoutConfig::default();
        assert!(relax(&[], &config).is_empty());
    }

    #[test]
    fn test_single_blip_is_not_moved() {
        let config = LayoutConfig::default();
        let initial = cluster(1, 7);
        let relaxed = relax(&initial, &config);
        assert_eq!(relaxed, initial);
    }

    #[test]
    fn test_far_apart_blips_are_not_moved() {
        let config = LayoutConfig::default();
        let initial = vec![
            Placement { x: 100.0, y: 0.0, sector: 0, band: 1 },
            Placement { x: -100.0, y: 0.0, sector: 2, band: 1 },
        ];
        assert_eq!(relax(&initial, &config), initial);
    }

    #[test]
    fn test_coincident_blips_are_separated() {
        let config = LayoutConfig::default();
        let initial = vec![Placement { x: 10.0, y: 10.0, sector: 0, band: 0 }; 2];
        let relaxed = relax(&initial, &config);
        assert!(relaxed[0].distance_to(&relaxed[1]) >= 2.0 * config.item_radius);
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let config = LayoutConfig {
            iterations: 0,
            ..Default::default()
        };
        let initial = cluster(5, 3);
        assert_eq!(relax(&initial, &config), initial);
    }

    // ============================================================================
    // Behaviour
    // ============================================================================

    #[test]
    fn test_alpha_cools_to_minimum() {
        let config = LayoutConfig::default();
        let initial = cluster(3, 11);
        let mut sim = Simulation::new(&initial, &config);
        sim.run();
        assert_eq!(sim.ticks(), config.iterations);
        assert_eq!(sim.positions().len(), initial.len());
        assert!(sim.positions().iter().all(|(x, y)| x.is_finite() && y.is_finite()));
        assert!((sim.alpha() - config.alpha_min).abs() < 1e-9);
    }

    #[test]
    fn test_sector_and_band_carried_through() {
        let config = LayoutConfig::default();
        let initial = cluster(8, 5);
        for p in relax(&initial, &config) {
            assert_eq!((p.sector, p.band), (1, 1));
        }
    }

    #[test]
    fn test_dense_cluster_overlap_below_tolerance() {
        let config = LayoutConfig::default();
        let min_distance = 2.0 * config.item_radius;
        let initial = cluster(20, 42);
        let before = overlap_stats(&initial, min_distance);
        let after = overlap_stats(&relax(&initial, &config), min_distance);

        assert_eq!(after.total_pairs, 190);
        assert!(after.ratio() < 0.05, "residual overlap {:?}", after);
        assert!(after.overlapping_pairs < before.overlapping_pairs);
    }

    #[test]
    fn test_grid_search_matches_overlap_tolerance() {
        let config = LayoutConfig {
            neighbor_search: NeighborSearch::Grid,
            ..Default::default()
        };
        let initial = cluster(20, 42);
        let after = overlap_stats(&relax(&initial, &config), 2.0 * config.item_radius);
        assert!(after.ratio() < 0.05, "residual overlap {:?}", after);
    }

    #[test]
    fn test_grid_search_identical_for_sparse_input() {
        let brute = LayoutConfig::default();
        let grid = LayoutConfig {
            neighbor_search: NeighborSearch::Grid,
            ..Default::default()
        };
        let initial: Vec<Placement> = (0..6)
            .map(|i| Placement {
                x: i as f64 * 50.0,
                y: 0.0,
                sector: 0,
                band: 0,
            })
            .collect();
        assert_eq!(relax(&initial, &brute), relax(&initial, &grid));
    }

    #[test]
    fn test_relaxation_is_deterministic() {
        let config = LayoutConfig::default();
        let initial = cluster(15, 8);
        let a = relax(&initial, &config);
        let b = relax(&initial, &config);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        }
    }

    #[test]
    fn test_overlap_stats_counts_pairs() {
        let placements = vec![
            Placement { x: 0.0, y: 0.0, sector: 0, band: 0 },
            Placement { x: 10.0, y: 0.0, sector: 0, band: 0 },
            Placement { x: 100.0, y: 0.0, sector: 0, band: 0 },
        ];
        let stats = overlap_stats(&placements, 30.0);
        assert_eq!(stats.overlapping_pairs, 1);
        assert_eq!(stats.total_pairs, 3);
        assert_eq!(overlap_stats(&[], 30.0).ratio(), 0.0);
    }
}
