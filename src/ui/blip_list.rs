// Blip list rendering module
//
// Renders the scrollable list of the filtered blips with quadrant
// coloring, ring and owner.

use crate::app::AppState;
use crate::theme::{quadrant_color, ring_color, SELECTION_BG, TEXT_MUTED, WARN_ORANGE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

pub fn render_blip_list(f: &mut Frame, area: Rect, app: &mut AppState) {
    let mut items = Vec::with_capacity(app.layout.len());

    for (idx, placed) in app.layout.blips.iter().enumerate() {
        let blip = &placed.blip;
        let is_selected = app.selected.as_ref() == Some(blip);

        let mut spans = vec![
            Span::styled(format!("{:2}.", idx + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(" ● ", Style::default().fg(quadrant_color(blip.quadrant))),
            Span::styled(
                blip.name.clone(),
                if is_selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                },
            ),
            Span::styled(
                format!(" [{}]", blip.ring),
                Style::default().fg(ring_color(blip.ring)),
            ),
        ];
        if !blip.owner.is_empty() {
            spans.push(Span::styled(
                format!(" {}", blip.owner),
                Style::default().fg(TEXT_MUTED),
            ));
        }

        items.push(ListItem::new(Line::from(spans)));
    }

    let title = format!(" Blips ({}/{}) ", app.layout.len(), app.all_blips.len());

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(WARN_ORANGE).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(WARN_ORANGE)),
        )
        .highlight_style(Style::default().bg(SELECTION_BG));

    f.render_stateful_widget(list, area, &mut app.list_state);
}
