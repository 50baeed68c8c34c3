// Application state management
//
// This module contains the main AppState struct: the loaded snapshot, the
// active filter, the current layout, the interaction controller and the
// selection. Every change to the filtered set recomputes the layout from
// scratch with the configured seed.

pub mod config;
pub mod event;

pub use config::Page;

use crate::ui::surface::CanvasSurface;
use config::{PAN_STEP, ZOOM_STEP};
use radarscope::filter::BlipFilter;
use radarscope::radar::view::InteractionController;
use radarscope::radar::{self, Blip, LayoutConfig, RadarLayout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::widgets::ListState;
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Every valid blip from the snapshot, in snapshot order
    pub all_blips: Vec<Blip>,

    /// Records dropped while validating the snapshot
    pub rejected: usize,

    /// Active search and category filters
    pub filter: BlipFilter,

    /// Whether keystrokes currently edit the search term
    pub search_mode: bool,

    /// Layout configuration, fixed for the session
    pub layout_config: LayoutConfig,

    /// Seed for every layout pass
    pub seed: u64,

    /// Layout of the filtered blips
    pub layout: RadarLayout,

    /// Message from the last failed layout pass, if any
    pub layout_error: Option<String>,

    /// Pan/zoom, hover and drag state
    pub controller: InteractionController,

    /// Full record of the selected blip
    pub selected: Option<Blip>,

    /// List state for the blip list (highlight and scrolling)
    pub list_state: ListState,

    /// Page shown in the main area
    pub page: Page,

    /// Canvas geometry from the last draw; None when nothing was drawn
    pub surface: Option<CanvasSurface>,

    /// Size of the last unusable canvas, to log it once per size
    pub surface_error: Option<(u16, u16)>,
}

impl AppState {
    /// Create state for a validated snapshot and compute the first layout
    pub fn new(blips: Vec<Blip>, rejected: usize, layout_config: LayoutConfig, seed: u64) -> Self {
        let mut state = Self {
            running: true,
            all_blips: blips,
            rejected,
            filter: BlipFilter::default(),
            search_mode: false,
            layout_config,
            seed,
            layout: RadarLayout::default(),
            layout_error: None,
            controller: InteractionController::new(),
            selected: None,
            list_state: ListState::default(),
            page: Page::default(),
            surface: None,
            surface_error: None,
        };

        state.relayout();
        state
    }

    /// Update state on each tick
    pub fn on_tick(&mut self) {
        self.controller.advance(Instant::now());
    }

    /// Recompute the layout for the current filter
    ///
    /// The previous layout is discarded and the list highlight follows the
    /// selection if it is still visible. Hover is re-derived from the
    /// pointer against the new layout on the next read.
    pub fn relayout(&mut self) {
        let visible = self.filter.apply(&self.all_blips);
        let mut rng = StdRng::seed_from_u64(self.seed);

        match radar::compute_layout(&visible, &self.layout_config, &mut rng) {
            Ok(layout) => {
                self.layout = layout;
                self.layout_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Layout pass failed");
                self.layout = RadarLayout::default();
                self.layout_error = Some(e.to_string());
            }
        }

        self.sync_list_to_selection();
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.search_mode = true;
    }

    pub fn leave_search(&mut self) {
        self.search_mode = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.term.push(c);
        self.relayout();
    }

    pub fn pop_search_char(&mut self) {
        if self.filter.term.pop().is_some() {
            self.relayout();
        }
    }

    pub fn cycle_quadrant_filter(&mut self) {
        self.filter.cycle_quadrant();
        self.relayout();
    }

    pub fn cycle_ring_filter(&mut self) {
        self.filter.cycle_ring();
        self.relayout();
    }

    pub fn clear_filters(&mut self) {
        if self.filter.is_active() {
            self.filter.clear();
            self.relayout();
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Move list highlight up
    pub fn select_previous(&mut self) {
        if self.layout.is_empty() {
            self.list_state.select(None);
            return;
        }
        let idx = match self.list_state.selected() {
            None => self.layout.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.list_state.select(Some(idx));
    }

    /// Move list highlight down
    pub fn select_next(&mut self) {
        if self.layout.is_empty() {
            self.list_state.select(None);
            return;
        }
        let idx = match self.list_state.selected() {
            None => 0,
            Some(idx) => (idx + 1).min(self.layout.len() - 1),
        };
        self.list_state.select(Some(idx));
    }

    /// Select the blip highlighted in the list
    pub fn select_highlighted(&mut self) {
        if let Some(placed) = self.list_state.selected().and_then(|i| self.layout.blips.get(i)) {
            self.selected = Some(placed.blip.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn sync_list_to_selection(&mut self) {
        let idx = self
            .selected
            .as_ref()
            .and_then(|sel| self.layout.blips.iter().position(|p| &p.blip == sel));
        self.list_state.select(idx);
    }

    // ========================================================================
    // View interaction
    // ========================================================================

    pub fn hit_radius(&self) -> f64 {
        self.layout_config.item_radius
    }

    /// Zoom around the view origin (keyboard)
    pub fn zoom_in(&mut self) {
        self.controller.zoom_by(ZOOM_STEP, (0.0, 0.0));
    }

    pub fn zoom_out(&mut self) {
        self.controller.zoom_by(1.0 / ZOOM_STEP, (0.0, 0.0));
    }

    pub fn pan(&mut self, dx_steps: f64, dy_steps: f64) {
        self.controller.pan_by(dx_steps * PAN_STEP, dy_steps * PAN_STEP);
    }

    pub fn begin_reset(&mut self) {
        self.controller.begin_reset(Instant::now());
    }

    /// Click on the canvas at a view point
    ///
    /// Selects the blip under the pointer and returns true, or returns
    /// false when the click landed on empty space.
    pub fn click_at(&mut self, view: (f64, f64)) -> bool {
        let hit_radius = self.hit_radius();
        let selected = &mut self.selected;
        let hit = self
            .controller
            .click(view, &self.layout, hit_radius, |blip| *selected = Some(blip.clone()));
        if hit.is_some() {
            self.list_state.select(hit);
            tracing::debug!(blip = ?self.selected.as_ref().map(|b| &b.name), "Selected blip");
        }
        hit.is_some()
    }

    pub fn toggle_page(&mut self) {
        self.page = self.page.toggle();
        self.controller.pointer_left();
        self.controller.end_drag();
    }
}
