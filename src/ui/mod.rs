// UI rendering module
//
// This module contains all UI rendering components for radarscope.
// The main draw() function orchestrates rendering of all UI panels.

mod blip_list;
mod inspector;
mod overview;
mod radar;
mod status_bar;
pub mod surface;

use crate::app::{AppState, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use blip_list::render_blip_list;
use inspector::render_inspector;
use overview::render_overview;
use radar::render_radar;
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Main layout: body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    // Body: radar or overview + right panels
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Main page
            Constraint::Percentage(35), // Right panels
        ])
        .split(chunks[0]);

    match app.page {
        Page::Radar => render_radar(f, body_chunks[0], app),
        Page::Overview => {
            app.surface = None;
            render_overview(f, body_chunks[0], app);
        }
    }

    // Right side: Blip list + Inspector
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Blip list
            Constraint::Percentage(45), // Inspector
        ])
        .split(body_chunks[1]);

    render_blip_list(f, right_chunks[0], app);
    render_inspector(f, right_chunks[1], app);

    render_status_bar(f, chunks[1], app);
}
