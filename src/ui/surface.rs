// Canvas surface geometry
//
// Maps terminal cells to radar view coordinates and back. View space has
// its origin at the chart centre with y pointing up, the same units as
// world space at identity zoom. Terminal cells are about twice as tall as
// they are wide, so the vertical unit per cell is doubled to keep rings
// round.

use crate::app::config::{MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH};
use radarscope::radar::scene::QUADRANT_LABEL_OFFSET;
use radarscope::radar::{LayoutConfig, RadarError};
use ratatui::layout::Rect;

/// Cell height over cell width for a typical terminal font
const CELL_ASPECT: f64 = 2.0;

/// Drawable area of the radar canvas for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSurface {
    /// Inner canvas area in terminal cells
    pub area: Rect,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Where the reset control was drawn this frame
    pub reset_button: Option<Rect>,
}

impl CanvasSurface {
    /// Fit the whole chart, labels included, into `area`
    ///
    /// # Errors
    /// `RenderSurfaceUnavailable` when the area is below the minimum size.
    pub fn new(area: Rect, config: &LayoutConfig) -> Result<Self, RadarError> {
        if area.width < MIN_CANVAS_WIDTH || area.height < MIN_CANVAS_HEIGHT {
            return Err(RadarError::RenderSurfaceUnavailable {
                width: area.width,
                height: area.height,
            });
        }

        let extent = chart_extent(config);
        let w = area.width as f64;
        let h = area.height as f64;
        let unit = (2.0 * extent / w).max(2.0 * extent / (h * CELL_ASPECT));

        let half_w = w * unit / 2.0;
        let half_h = h * unit * CELL_ASPECT / 2.0;
        Ok(Self {
            area,
            x_bounds: [-half_w, half_w],
            y_bounds: [-half_h, half_h],
            reset_button: None,
        })
    }

    /// View units per cell column
    pub fn unit_x(&self) -> f64 {
        (self.x_bounds[1] - self.x_bounds[0]) / self.area.width as f64
    }

    /// View units per cell row
    pub fn unit_y(&self) -> f64 {
        (self.y_bounds[1] - self.y_bounds[0]) / self.area.height as f64
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// View coordinates of a cell's centre; defined outside the area too,
    /// so drags that leave the canvas keep panning
    pub fn cell_to_view(&self, column: u16, row: u16) -> (f64, f64) {
        let dx = column as f64 - self.area.x as f64 + 0.5;
        let dy = row as f64 - self.area.y as f64 + 0.5;
        (
            self.x_bounds[0] + dx * self.unit_x(),
            self.y_bounds[1] - dy * self.unit_y(),
        )
    }

    /// Cell containing a view point, if it lies on the canvas
    pub fn view_to_cell(&self, (x, y): (f64, f64)) -> Option<(u16, u16)> {
        let col = ((x - self.x_bounds[0]) / self.unit_x()).floor();
        let row = ((self.y_bounds[1] - y) / self.unit_y()).floor();
        if col < 0.0 || row < 0.0 || col >= self.area.width as f64 || row >= self.area.height as f64
        {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    pub fn hits_reset_button(&self, column: u16, row: u16) -> bool {
        self.reset_button.is_some_and(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }
}

/// Half-size of the region that must stay visible at identity zoom
fn chart_extent(config: &LayoutConfig) -> f64 {
    config.chart_radius + QUADRANT_LABEL_OFFSET * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: u16, height: u16) -> CanvasSurface {
        CanvasSurface::new(Rect::new(2, 3, width, height), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_too_small_area_is_unavailable() {
        let err = CanvasSurface::new(Rect::new(0, 0, 5, 40), &LayoutConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RadarError::RenderSurfaceUnavailable { width: 5, height: 40 }
        ));
        assert!(CanvasSurface::new(Rect::new(0, 0, 0, 0), &LayoutConfig::default()).is_err());
    }

    #[test]
    fn test_chart_fits_in_both_directions() {
        for (w, h) in [(100, 30), (40, 40), (200, 20)] {
            let s = surface(w, h);
            let extent = chart_extent(&LayoutConfig::default());
            assert!(s.x_bounds[1] >= extent - 1e-9);
            assert!(s.y_bounds[1] >= extent - 1e-9);
            // Cells keep a 1:2 aspect so circles stay round
            assert!((s.unit_y() / s.unit_x() - CELL_ASPECT).abs() < 1e-9);
        }
    }

    #[test]
    fn test_centre_cell_is_near_origin() {
        let s = surface(100, 30);
        let (x, y) = s.cell_to_view(2 + 50, 3 + 15);
        assert!(x.abs() <= s.unit_x());
        assert!(y.abs() <= s.unit_y());
    }

    #[test]
    fn test_cell_view_round_trip() {
        let s = surface(80, 24);
        for (col, row) in [(2, 3), (81, 26), (40, 10)] {
            let view = s.cell_to_view(col, row);
            assert_eq!(s.view_to_cell(view), Some((col, row)));
        }
        assert_eq!(s.view_to_cell((1e6, 0.0)), None);
        assert!(!s.contains(1, 3));
        assert!(s.contains(2, 3));
    }

    #[test]
    fn test_reset_button_hit() {
        let mut s = surface(80, 24);
        assert!(!s.hits_reset_button(70, 3));
        s.reset_button = Some(Rect::new(68, 3, 12, 1));
        assert!(s.hits_reset_button(70, 3));
        assert!(!s.hits_reset_button(70, 4));
    }
}
