// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, zoom level,
// filter summary and the rejected-record count.

use crate::app::{AppState, Page};
use crate::theme::{ACCENT_PURPLE, ERROR_RED, OK_GREEN, TEXT_MUTED, WARN_ORANGE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let status_text = if app.search_mode {
        Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(WARN_ORANGE).add_modifier(Modifier::BOLD)),
            Span::styled(app.filter.term.clone(), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(WARN_ORANGE)),
            Span::styled("  Enter/Esc: done", Style::default().fg(TEXT_MUTED)),
        ])
    } else {
        let indicators = build_indicators(app);
        let indicator_width: usize = indicators.iter().map(|s| s.content.width()).sum();
        let available = (area.width as usize)
            .saturating_sub(4)
            .saturating_sub(indicator_width);

        let mut spans = build_hints(app, available);
        spans.extend(indicators);
        Line::from(spans)
    };

    let status_bar = Paragraph::new(status_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(ACCENT_PURPLE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Key hints that fit in `available` columns, highest priority first
pub fn build_hints(app: &AppState, available: usize) -> Vec<Span<'static>> {
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
    }

    let page_hint = match app.page {
        Page::Radar => "Overview | ",
        Page::Overview => "Radar | ",
    };

    let hints = [
        Hint { priority: 1, key: "Q:", desc: "Quit | " },
        Hint { priority: 1, key: "Tab:", desc: page_hint },
        Hint { priority: 1, key: "/:", desc: "Search | " },
        Hint { priority: 2, key: "f/g:", desc: "Quadrant/Ring | " },
        Hint { priority: 2, key: "x:", desc: "Clear | " },
        Hint { priority: 2, key: "+/-:", desc: "Zoom | " },
        Hint { priority: 3, key: "r:", desc: "Reset | " },
        Hint { priority: 3, key: "↑↓ Enter:", desc: "Select | " },
        Hint { priority: 3, key: "⇧←→↑↓:", desc: "Pan | " },
    ];

    let mut spans = vec![Span::styled(" ◎ ", Style::default().fg(ACCENT_PURPLE))];
    let mut used = 3;

    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let len = hint.key.width() + hint.desc.width();
            if used + len <= available {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(hint.desc));
                used += len;
            }
        }
    }

    spans
}

/// Zoom, filter and rejection indicators
/// Always shown; they explain why the chart looks the way it does
pub fn build_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    let transform = app.controller.transform();
    let zoom_color = if transform.is_identity() { OK_GREEN } else { WARN_ORANGE };
    spans.push(Span::styled("[Zoom:", Style::default().fg(TEXT_MUTED)));
    spans.push(Span::styled(
        format!("{:.2}x", transform.scale),
        Style::default().fg(zoom_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(TEXT_MUTED)));

    let filter_color = if app.filter.is_active() { OK_GREEN } else { TEXT_MUTED };
    spans.push(Span::styled("[", Style::default().fg(TEXT_MUTED)));
    spans.push(Span::styled(app.filter.summary(), Style::default().fg(filter_color)));
    spans.push(Span::styled("] ", Style::default().fg(TEXT_MUTED)));

    if app.rejected > 0 {
        spans.push(Span::styled(
            format!("[Rejected: {}]", app.rejected),
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        ));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_respect_available_width() {
        let app = sample_app();
        let narrow = text(&build_hints(&app, 20));
        assert!(narrow.contains("Q:"));
        assert!(!narrow.contains("Pan"));
        let wide = text(&build_hints(&app, 500));
        assert!(wide.contains("Pan"));
    }

    #[test]
    fn test_indicators_show_zoom_and_rejections() {
        let mut app = sample_app();
        assert!(text(&build_indicators(&app)).contains("1.00x"));
        assert!(!text(&build_indicators(&app)).contains("Rejected"));

        app.zoom_in();
        app.rejected = 2;
        let s = text(&build_indicators(&app));
        assert!(s.contains("1.20x"));
        assert!(s.contains("[Rejected: 2]"));
    }

    #[test]
    fn test_indicators_show_filter_summary() {
        let mut app = sample_app();
        app.cycle_quadrant_filter();
        assert!(text(&build_indicators(&app)).contains("Techniques"));
    }
}
