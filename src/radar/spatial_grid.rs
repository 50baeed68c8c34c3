// Uniform grid for repulsion candidate lookup.
//
// Instead of testing every pair each tick, points are bucketed into square
// cells as wide as the repulsion reach. Any pair closer than the reach then
// lives in the same or an adjacent cell.

use std::collections::HashMap;

/// A uniform hash grid over point indices
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Side length of each cell
    cell_size: f64,
    /// Map from cell coordinates to the indices of points inside it
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// Bucket `points` into cells of side `cell_size`
    pub fn build(points: &[(f64, f64)], cell_size: f64) -> Self {
        let mut grid = Self {
            cell_size: cell_size.max(f64::EPSILON),
            cells: HashMap::new(),
        };
        for (idx, &point) in points.iter().enumerate() {
            let cell = grid.cell_of(point);
            grid.cells.entry(cell).or_default().push(idx);
        }
        grid
    }

    fn cell_of(&self, (x, y): (f64, f64)) -> (i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    /// Indices greater than `idx` in the 3x3 block around `point`, ascending
    ///
    /// May include points farther than one cell; the caller does the exact
    /// distance check.
    pub fn neighbors_after(&self, idx: usize, point: (f64, f64)) -> Vec<usize> {
        let (cx, cy) = self.cell_of(point);
        let mut result = Vec::new();
        for gx in cx - 1..=cx + 1 {
            for gy in cy - 1..=cy + 1 {
                if let Some(bucket) = self.cells.get(&(gx, gy)) {
                    result.extend(bucket.iter().copied().filter(|&j| j > idx));
                }
            }
        }
        result.sort_unstable();
        result
    }

    /// Number of occupied cells
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
