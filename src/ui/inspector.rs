// Blip inspector rendering module
//
// Shows the full record of the selected blip. This is the consumer of
// click-to-select: whatever the radar or the list selects ends up here.

use crate::app::AppState;
use crate::theme::{quadrant_color, ring_color, ACCENT_PURPLE, TEXT_MUTED};
use radarscope::radar::Blip;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

// ============================================================================
// Inspector View Model
// ============================================================================

/// Everything the inspector shows, extracted from AppState
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub name: String,
    /// Store id, or "unsaved" for records that were never persisted
    pub id: String,
    pub quadrant: String,
    pub quadrant_color: Color,
    pub ring: String,
    pub ring_color: Color,
    pub owner: String,
    pub description: String,
    pub has_selection: bool,
}

impl Default for InspectorView {
    fn default() -> Self {
        Self {
            name: "No blip selected".to_string(),
            id: String::new(),
            quadrant: String::new(),
            quadrant_color: TEXT_MUTED,
            ring: String::new(),
            ring_color: TEXT_MUTED,
            owner: String::new(),
            description: "Click a blip on the radar or press Enter in the list.".to_string(),
            has_selection: false,
        }
    }
}

impl InspectorView {
    pub fn from_blip(blip: &Blip) -> Self {
        Self {
            name: blip.name.clone(),
            id: blip.id.clone().unwrap_or_else(|| "unsaved".to_string()),
            quadrant: blip.quadrant.label().to_string(),
            quadrant_color: quadrant_color(blip.quadrant),
            ring: blip.ring.label().to_string(),
            ring_color: ring_color(blip.ring),
            owner: if blip.owner.is_empty() {
                "-".to_string()
            } else {
                blip.owner.clone()
            },
            description: blip.description.clone(),
            has_selection: true,
        }
    }
}

/// Build the inspector view for the current selection
pub fn extract_inspector_view(app: &AppState) -> InspectorView {
    app.selected
        .as_ref()
        .map(InspectorView::from_blip)
        .unwrap_or_default()
}

fn field(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(TEXT_MUTED)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn render_inspector(f: &mut Frame, area: Rect, app: &AppState) {
    let view = extract_inspector_view(app);

    let mut lines = vec![Line::from(Span::styled(
        view.name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];

    if view.has_selection {
        lines.push(Line::raw(""));
        lines.push(field("Id", view.id, TEXT_MUTED));
        lines.push(field("Quadrant", view.quadrant, view.quadrant_color));
        lines.push(field("Ring", view.ring, view.ring_color));
        lines.push(field("Owner", view.owner, Color::White));
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        view.description,
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Inspector ",
                    Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_PURPLE)),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use radarscope::radar::{Quadrant, Ring};

    #[test]
    fn test_default_view_without_selection() {
        let view = InspectorView::default();
        assert!(!view.has_selection);
        assert_eq!(view.name, "No blip selected");
    }

    #[test]
    fn test_view_shows_full_record() {
        let blip = Blip::new("Kafka", Quadrant::Platforms, Ring::Trial)
            .with_id("14")
            .with_owner("data-team")
            .with_description("Event backbone");
        let view = InspectorView::from_blip(&blip);
        assert!(view.has_selection);
        assert_eq!(view.id, "14");
        assert_eq!(view.quadrant, "Platforms");
        assert_eq!(view.ring, "Trial");
        assert_eq!(view.owner, "data-team");
        assert_eq!(view.description, "Event backbone");
        assert_eq!(view.quadrant_color, quadrant_color(Quadrant::Platforms));
    }

    #[test]
    fn test_unsaved_record_and_missing_owner() {
        let blip = Blip::new("Draft", Quadrant::Tools, Ring::Assess);
        let view = InspectorView::from_blip(&blip);
        assert_eq!(view.id, "unsaved");
        assert_eq!(view.owner, "-");
    }
}
