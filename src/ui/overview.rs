// Overview page rendering module
//
// Distribution of the filtered blips per quadrant and per ring, plus a
// table of every blip.

use crate::app::config::EMPTY_OVERVIEW_MESSAGE;
use crate::app::AppState;
use crate::theme::{quadrant_color, ring_color, ACCENT_PURPLE, TEXT_MUTED, WARN_ORANGE};
use radarscope::radar::{Blip, Quadrant, Ring};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Blip counts per quadrant and per ring, in enum order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub quadrants: [(Quadrant, usize); 4],
    pub rings: [(Ring, usize); 4],
}

impl Distribution {
    pub fn of<'a>(blips: impl IntoIterator<Item = &'a Blip>) -> Self {
        let mut quadrants = Quadrant::ALL.map(|q| (q, 0));
        let mut rings = Ring::ALL.map(|r| (r, 0));
        for blip in blips {
            if let Some(entry) = quadrants.iter_mut().find(|(q, _)| *q == blip.quadrant) {
                entry.1 += 1;
            }
            if let Some(entry) = rings.iter_mut().find(|(r, _)| *r == blip.ring) {
                entry.1 += 1;
            }
        }
        Self { quadrants, rings }
    }
}

fn titled_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn bar(label: &'static str, count: usize, color: Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label))
        .value(count as u64)
        .text_value(count.to_string())
        .style(Style::default().fg(color))
}

pub fn render_overview(f: &mut Frame, area: Rect, app: &AppState) {
    if app.layout.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            EMPTY_OVERVIEW_MESSAGE,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(titled_block(" Overview ", ACCENT_PURPLE));
        f.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let dist = Distribution::of(app.layout.blips.iter().map(|p| &p.blip));

    let quadrant_bars: Vec<Bar> = dist
        .quadrants
        .iter()
        .map(|(q, n)| bar(q.label(), *n, quadrant_color(*q)))
        .collect();
    let ring_bars: Vec<Bar> = dist
        .rings
        .iter()
        .map(|(r, n)| bar(r.label(), *n, ring_color(*r)))
        .collect();

    f.render_widget(
        BarChart::default()
            .block(titled_block(" By Quadrant ", ACCENT_PURPLE))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&quadrant_bars)),
        charts[0],
    );
    f.render_widget(
        BarChart::default()
            .block(titled_block(" By Ring ", ACCENT_PURPLE))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&ring_bars)),
        charts[1],
    );

    let header = Row::new(["Name", "Quadrant", "Ring", "Owner"]).style(
        Style::default()
            .fg(WARN_ORANGE)
            .add_modifier(Modifier::BOLD),
    );
    let rows = app.layout.blips.iter().map(|p| {
        let b = &p.blip;
        Row::new(vec![
            Cell::from(b.name.clone()),
            Cell::from(Span::styled(
                b.quadrant.label(),
                Style::default().fg(quadrant_color(b.quadrant)),
            )),
            Cell::from(Span::styled(
                b.ring.label(),
                Style::default().fg(ring_color(b.ring)),
            )),
            Cell::from(Span::styled(b.owner.clone(), Style::default().fg(TEXT_MUTED))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(titled_block(" Blips ", ACCENT_PURPLE));

    f.render_widget(table, chunks[1]);
}
