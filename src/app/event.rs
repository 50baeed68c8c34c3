// Keyboard and mouse event handling
//
// This module contains the event handlers that process user input and
// update the application state accordingly.

use super::{AppState, Page};
use crate::app::config::ZOOM_STEP;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `key` - The key event that was received
///
/// # Key Bindings
/// - `q`, `Q` - Quit the application
/// - `Esc` - Leave search mode, otherwise clear the selection
/// - `Up` / `Down` - Move the blip list highlight
/// - `Enter` - Select the highlighted blip
/// - `Tab` - Toggle Radar / Overview page
/// - `+`, `=` / `-`, `_` - Zoom in / out
/// - `Shift` + arrows - Pan
/// - `r`, `R` - Eased reset to identity view
/// - `/` - Search; `f` cycle quadrant filter; `g` cycle ring filter; `x` clear
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if app.search_mode {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.leave_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return true;
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        let pan = match key.code {
            KeyCode::Left => Some((1.0, 0.0)),
            KeyCode::Right => Some((-1.0, 0.0)),
            KeyCode::Up => Some((0.0, -1.0)),
            KeyCode::Down => Some((0.0, 1.0)),
            _ => None,
        };
        if let Some((dx, dy)) = pan {
            app.pan(dx, dy);
            return true;
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            false
        }
        KeyCode::Esc => {
            app.clear_selection();
            true
        }
        KeyCode::Up => {
            app.select_previous();
            true
        }
        KeyCode::Down => {
            app.select_next();
            true
        }
        KeyCode::Enter => {
            app.select_highlighted();
            true
        }
        KeyCode::Tab => {
            app.toggle_page();
            true
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.zoom_in();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.zoom_out();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.begin_reset();
            true
        }
        KeyCode::Char('/') => {
            app.enter_search();
            true
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.cycle_quadrant_filter();
            true
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.cycle_ring_filter();
            true
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.clear_filters();
            true
        }
        _ => true,
    }
}

/// Handle mouse events on the radar canvas
///
/// Events are ignored on the overview page and before the first canvas
/// has been drawn.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    if app.page != Page::Radar {
        return;
    }
    let Some(surface) = app.surface else {
        return;
    };

    let (col, row) = (mouse.column, mouse.row);
    let view = surface.cell_to_view(col, row);
    let on_canvas = surface.contains(col, row);
    let hit_radius = app.hit_radius();

    match mouse.kind {
        MouseEventKind::Moved => {
            if on_canvas {
                app.controller.pointer_moved(view, &app.layout, hit_radius);
            } else {
                app.controller.pointer_left();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if surface.hits_reset_button(col, row) {
                app.begin_reset();
            } else if on_canvas && !app.click_at(view) {
                app.controller.begin_drag(view);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.controller.drag_to(view);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.controller.end_drag();
        }
        MouseEventKind::ScrollUp if on_canvas => {
            app.controller.zoom_by(ZOOM_STEP, view);
            app.controller.pointer_moved(view, &app.layout, hit_radius);
        }
        MouseEventKind::ScrollDown if on_canvas => {
            app.controller.zoom_by(1.0 / ZOOM_STEP, view);
            app.controller.pointer_moved(view, &app.layout, hit_radius);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::ui::surface::CanvasSurface;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn with_surface(app: &mut AppState) -> CanvasSurface {
        let surface = CanvasSurface::new(Rect::new(0, 0, 120, 40), &app.layout_config).unwrap();
        app.surface = Some(surface);
        surface
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();

        assert!(app.running);
        let result = handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, key(KeyCode::Char('Q')));
        assert!(!result);
        assert!(!app.running);

        // Esc never quits
        app.running = true;
        assert!(handle_key_event(&mut app, key(KeyCode::Esc)));
        assert!(app.running);
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('/')));
        assert!(app.search_mode);

        // 'q' is text while searching
        for c in "kaf".chars() {
            assert!(handle_key_event(&mut app, key(KeyCode::Char(c))));
        }
        assert_eq!(app.filter.term, "kaf");
        assert_eq!(app.layout.len(), 1);

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.filter.term, "ka");

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.search_mode);
        assert!(app.running);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.layout.len(), 1); // Tools
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.layout.len(), 3);
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.layout.len(), 2); // Adopt
    }

    #[test]
    fn test_zoom_pan_and_reset_keys() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('+')));
        assert!((app.controller.transform().scale - ZOOM_STEP).abs() < 1e-12);
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert!(app.controller.transform().translate_x > 0.0);

        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert!(app.controller.is_resetting());
        app.controller.reset();
        assert!(app.controller.transform().is_identity());
    }

    #[test]
    fn test_plain_arrows_navigate_list() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.selected.as_ref().map(|b| b.name.as_str()), Some("Kafka"));
        assert!(app.controller.transform().is_identity());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_tab_toggles_page_and_disables_mouse() {
        let mut app = sample_app();
        with_surface(&mut app);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.page, Page::Overview);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 60, 20));
        assert!(app.controller.transform().is_identity());
    }

    #[test]
    fn test_mouse_ignored_without_surface() {
        let mut app = sample_app();
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 10, 10));
        assert!(app.controller.transform().is_identity());
    }

    #[test]
    fn test_click_on_marker_cell_selects() {
        let mut app = sample_app();
        let surface = with_surface(&mut app);
        let (col, row) = surface
            .view_to_cell(app.layout.blips[0].placement.position())
            .unwrap();

        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, col, row));
        assert_eq!(app.controller.hovered(&app.layout), Some(0));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert_eq!(app.selected.as_ref().map(|b| b.name.as_str()), Some("Rust"));
        assert!(!app.controller.is_dragging());
    }

    #[test]
    fn test_drag_on_empty_canvas_pans() {
        let mut app = sample_app();
        let surface = with_surface(&mut app);
        // Well below the Adopt and Trial bands
        let (col, row) = surface.view_to_cell((0.0, -300.0)).unwrap();

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert!(app.controller.is_dragging());
        handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), col + 4, row));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), col + 4, row));
        assert!(!app.controller.is_dragging());

        let t = app.controller.transform();
        assert!((t.translate_x - 4.0 * surface.unit_x()).abs() < 1e-9);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_wheel_zoom_and_reset_button() {
        let mut app = sample_app();
        let mut surface = with_surface(&mut app);
        surface.reset_button = Some(Rect::new(100, 0, 12, 1));
        app.surface = Some(surface);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 30, 10));
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 30, 10));
        assert!(app.controller.transform().scale > 1.4);

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 105, 0));
        assert!(app.controller.is_resetting());
    }
}
