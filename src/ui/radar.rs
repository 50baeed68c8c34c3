// Radar canvas rendering module
//
// Paints a Scene onto a Braille canvas. World coordinates go through the
// interaction controller's view transform here, and only here; the layout
// itself is never touched by drawing.

use crate::app::config::{EMPTY_RADAR_MESSAGE, LABEL_ZOOM_THRESHOLD, RESET_BUTTON_LABEL};
use crate::app::AppState;
use crate::theme::{
    highlight, quadrant_color, quadrant_tint, ring_color, ACCENT_PURPLE, CHART_BG, ERROR_RED,
    OK_GREEN, TEXT_MUTED,
};
use crate::ui::surface::CanvasSurface;
use radarscope::radar::scene::{build_scene, Primitive, Scene};
use radarscope::radar::view::{Tooltip, ViewTransform};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, BorderType, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};
use std::f64::consts::TAU;
use unicode_width::UnicodeWidthStr;

/// Drawn marker size relative to the collision radius
const MARKER_FILL_RATIO: f64 = 0.55;

// ============================================================================
// Draw lists
// ============================================================================

struct MarkerShape {
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
    selected: bool,
    label: Option<String>,
}

struct TextItem {
    x: f64,
    y: f64,
    text: String,
    style: Style,
}

/// Everything the canvas closure needs, already in view coordinates
#[derive(Default)]
struct DrawList {
    wedges: Vec<(Color, Vec<(f64, f64)>)>,
    rings: Vec<(f64, f64, f64)>,
    markers: Vec<MarkerShape>,
    texts: Vec<TextItem>,
    dot: f64,
}

/// Cells whose centres fall inside a wedge, in view coordinates
fn wedge_cells(
    surface: &CanvasSurface,
    transform: &ViewTransform,
    start_angle: f64,
    end_angle: f64,
    radius: f64,
) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for row in surface.area.y..surface.area.y + surface.area.height {
        for col in surface.area.x..surface.area.x + surface.area.width {
            let view = surface.cell_to_view(col, row);
            let (wx, wy) = transform.invert(view);
            if wx.hypot(wy) > radius {
                continue;
            }
            let angle = wy.atan2(wx).rem_euclid(TAU);
            if angle >= start_angle && angle < end_angle {
                points.push(view);
            }
        }
    }
    points
}

/// Shift a label left of its anchor when it sits on the left half
fn text_anchor(x: f64, text: &str, unit_x: f64) -> f64 {
    if x < 0.0 {
        x - text.width() as f64 * unit_x
    } else {
        x
    }
}

fn build_draw_list(
    scene: &Scene,
    surface: &CanvasSurface,
    transform: &ViewTransform,
    hovered: Option<usize>,
    selected: Option<usize>,
) -> DrawList {
    let mut list = DrawList {
        dot: surface.unit_x() / 2.0,
        ..Default::default()
    };
    let (cx, cy) = transform.apply((0.0, 0.0));
    let show_all_labels = transform.scale >= LABEL_ZOOM_THRESHOLD;

    for primitive in &scene.primitives {
        match primitive {
            Primitive::SectorWedge {
                quadrant,
                start_angle,
                end_angle,
                radius,
                ..
            } => {
                let cells = wedge_cells(surface, transform, *start_angle, *end_angle, *radius);
                list.wedges.push((quadrant_tint(*quadrant), cells));
            }
            Primitive::RingCircle { radius, .. } => {
                list.rings.push((cx, cy, radius * transform.scale));
            }
            Primitive::Marker {
                blip_index,
                x,
                y,
                radius,
                color,
                label,
            } => {
                let (vx, vy) = transform.apply((*x, *y));
                let is_hovered = hovered == Some(*blip_index);
                let is_selected = selected == Some(*blip_index);
                list.markers.push(MarkerShape {
                    x: vx,
                    y: vy,
                    radius: radius * MARKER_FILL_RATIO * transform.scale,
                    color: if is_hovered { highlight(*color) } else { *color },
                    selected: is_selected,
                    label: (show_all_labels || is_hovered || is_selected).then(|| label.clone()),
                });
            }
            Primitive::QuadrantLabel { quadrant, x, y } => {
                let (vx, vy) = transform.apply((*x, *y));
                let text = quadrant.label().to_string();
                list.texts.push(TextItem {
                    x: text_anchor(vx - cx, &text, surface.unit_x()) + cx,
                    y: vy,
                    text,
                    style: Style::default()
                        .fg(quadrant_color(*quadrant))
                        .add_modifier(Modifier::BOLD),
                });
            }
            Primitive::RingLabel { ring, x, y } => {
                let (vx, vy) = transform.apply((*x, *y));
                list.texts.push(TextItem {
                    x: vx,
                    y: vy,
                    text: ring.label().to_string(),
                    style: Style::default().fg(ring_color(*ring)),
                });
            }
            // Drawn in screen space by render_legend
            Primitive::LegendEntry { .. } => {}
        }
    }

    list
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the radar pane
///
/// Records the canvas geometry on `app.surface` so mouse events can be
/// mapped back to view coordinates. When nothing interactive is drawn the
/// surface is cleared.
pub fn render_radar(f: &mut Frame, area: Rect, app: &mut AppState) {
    let title = format!(" Tech Radar ({}) ", app.layout.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_PURPLE));
    let inner = block.inner(area);

    if let Some(err) = &app.layout_error {
        app.surface = None;
        render_placeholder(f, area, block, err, ERROR_RED);
        return;
    }

    if app.layout.is_empty() {
        app.surface = None;
        render_placeholder(f, area, block, EMPTY_RADAR_MESSAGE, TEXT_MUTED);
        return;
    }

    let mut surface = match CanvasSurface::new(inner, &app.layout_config) {
        Ok(surface) => {
            app.surface_error = None;
            surface
        }
        Err(e) => {
            if app.surface_error != Some((inner.width, inner.height)) {
                tracing::warn!(error = %e, "Radar canvas unavailable");
                app.surface_error = Some((inner.width, inner.height));
            }
            app.surface = None;
            render_placeholder(f, area, block, "Enlarge the terminal to show the radar.", ERROR_RED);
            return;
        }
    };

    let scene = build_scene(&app.layout, &app.layout_config);
    let transform = app.controller.transform();
    let selected_index = app
        .selected
        .as_ref()
        .and_then(|sel| app.layout.blips.iter().position(|p| &p.blip == sel));
    let list = build_draw_list(
        &scene,
        &surface,
        &transform,
        app.controller.hovered(&app.layout),
        selected_index,
    );

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(Color::Rgb(CHART_BG.0, CHART_BG.1, CHART_BG.2))
        .x_bounds(surface.x_bounds)
        .y_bounds(surface.y_bounds)
        .paint(move |ctx| {
            for (color, coords) in &list.wedges {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
            ctx.layer();

            for (x, y, radius) in &list.rings {
                ctx.draw(&Circle {
                    x: *x,
                    y: *y,
                    radius: *radius,
                    color: TEXT_MUTED,
                });
            }
            ctx.layer();

            for marker in &list.markers {
                let mut r = marker.radius;
                while r > 0.0 {
                    ctx.draw(&Circle {
                        x: marker.x,
                        y: marker.y,
                        radius: r,
                        color: marker.color,
                    });
                    r -= list.dot;
                }
                ctx.draw(&Points {
                    coords: &[(marker.x, marker.y)],
                    color: marker.color,
                });
                if marker.selected {
                    ctx.draw(&Circle {
                        x: marker.x,
                        y: marker.y,
                        radius: marker.radius + list.dot * 2.0,
                        color: ACCENT_PURPLE,
                    });
                }
                if let Some(label) = &marker.label {
                    ctx.print(
                        marker.x + marker.radius + list.dot * 2.0,
                        marker.y,
                        Span::styled(label.clone(), Style::default().fg(Color::White)),
                    );
                }
            }

            for text in &list.texts {
                ctx.print(text.x, text.y, Span::styled(text.text.clone(), text.style));
            }
        });

    f.render_widget(canvas, area);

    render_legend(f, inner, &scene);
    surface.reset_button = render_reset_button(f, inner, transform.is_identity());
    app.surface = Some(surface);

    if let Some(tooltip) = app.controller.tooltip(&app.layout) {
        render_tooltip(f, &surface, &tooltip);
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, block: Block, message: &str, color: Color) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Vertically centre a single wrapped paragraph
    let top = inner.y + inner.height / 2;
    let rect = Rect::new(inner.x, top, inner.width, inner.bottom() - top);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, rect);
}

/// Legend in the canvas's top-left corner, unaffected by pan and zoom
fn render_legend(f: &mut Frame, inner: Rect, scene: &Scene) {
    let lines: Vec<Line> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::LegendEntry {
                quadrant, color, ..
            } => Some(Line::from(vec![
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(quadrant.label(), Style::default().fg(TEXT_MUTED)),
            ])),
            _ => None,
        })
        .collect();

    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    if width == 0 || width > inner.width / 2 || height > inner.height / 2 {
        return;
    }

    f.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, width, height),
    );
}

/// Reset control in the top-right corner; returns where it was drawn
fn render_reset_button(f: &mut Frame, inner: Rect, at_identity: bool) -> Option<Rect> {
    let width = RESET_BUTTON_LABEL.width() as u16;
    if inner.width < width * 2 || inner.height == 0 {
        return None;
    }

    let rect = Rect::new(inner.right() - width, inner.y, width, 1);
    let color = if at_identity { TEXT_MUTED } else { OK_GREEN };
    f.render_widget(
        Paragraph::new(Span::styled(
            RESET_BUTTON_LABEL,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        rect,
    );
    Some(rect)
}

/// Place a popup of `size` next to the pointer cell, kept inside `bounds`
fn popup_rect(pointer: (u16, u16), size: (u16, u16), bounds: Rect) -> Rect {
    let width = size.0.min(bounds.width);
    let height = size.1.min(bounds.height);

    let mut x = pointer.0.saturating_add(2);
    if x + width > bounds.right() {
        x = pointer.0.saturating_sub(width + 1).max(bounds.x);
    }
    let mut y = pointer.1.saturating_add(1);
    if y + height > bounds.bottom() {
        y = bounds.bottom().saturating_sub(height).max(bounds.y);
    }
    Rect::new(x, y, width, height)
}

fn render_tooltip(f: &mut Frame, surface: &CanvasSurface, tooltip: &Tooltip) {
    let Some(cell) = surface.view_to_cell(tooltip.pointer) else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        tooltip.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        tooltip
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(TEXT_MUTED)))),
    );

    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let rect = popup_rect(cell, (width, height), surface.area);

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_PURPLE)),
        ),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use radarscope::radar::geometry::SECTOR_SPAN;
    use radarscope::radar::LayoutConfig;

    fn surface() -> CanvasSurface {
        CanvasSurface::new(Rect::new(0, 0, 100, 40), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_wedges_partition_the_disc() {
        let s = surface();
        let t = ViewTransform::IDENTITY;
        let total: usize = (0..4)
            .map(|i| {
                let start = i as f64 * SECTOR_SPAN;
                wedge_cells(&s, &t, start, start + SECTOR_SPAN, 350.0).len()
            })
            .sum();
        let disc = wedge_cells(&s, &t, 0.0, TAU + 1.0, 350.0).len();
        assert_eq!(total, disc);
        assert!(disc > 0);
    }

    #[test]
    fn test_first_wedge_is_upper_right() {
        let s = surface();
        let cells = wedge_cells(&s, &ViewTransform::IDENTITY, 0.0, SECTOR_SPAN, 350.0);
        assert!(cells.iter().all(|(x, y)| *x >= 0.0 && *y >= 0.0));
    }

    #[test]
    fn test_zoom_shrinks_visible_wedge_area() {
        let s = surface();
        let zoomed = ViewTransform {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 0.5,
        };
        let full = wedge_cells(&s, &ViewTransform::IDENTITY, 0.0, SECTOR_SPAN, 350.0).len();
        let small = wedge_cells(&s, &zoomed, 0.0, SECTOR_SPAN, 350.0).len();
        assert!(small < full);
    }

    #[test]
    fn test_text_anchor_flips_on_left_half() {
        assert_eq!(text_anchor(10.0, "Tools", 2.0), 10.0);
        assert_eq!(text_anchor(-10.0, "Tools", 2.0), -20.0);
    }

    #[test]
    fn test_popup_stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 40, 10);
        let r = popup_rect((38, 9), (12, 4), bounds);
        assert!(r.right() <= bounds.right());
        assert!(r.bottom() <= bounds.bottom());
        let r = popup_rect((1, 1), (12, 4), bounds);
        assert_eq!((r.x, r.y), (3, 2));
    }
}
