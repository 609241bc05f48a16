//! Dashboard side panel component
//!
//! Renders the visualization radio list and, for per-class charts, the
//! sentiment selector

use super::super::state::DashboardState;
use super::super::utils::to_color;
use crate::controller::VisualizationKind;
use crate::sentiment::Sentiment;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the side panel.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let show_sentiment = state.selection.kind.needs_sentiment();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(VisualizationKind::ALL.len() as u16 + 4),
            Constraint::Length(if show_sentiment {
                Sentiment::ALL.len() as u16 + 4
            } else {
                0
            }),
            Constraint::Fill(1),
        ])
        .split(area);

    render_visualization_list(f, chunks[0], state);
    if show_sentiment {
        render_sentiment_list(f, chunks[1], state);
    }
    render_dataset_breakdown(f, chunks[2], state);
}

fn radio_line(index: usize, label: String, selected: bool, color: Color) -> Line<'static> {
    let marker = if selected { "(•)" } else { "( )" };
    let style = if selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("{} ", index), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} ", marker), style),
        Span::styled(label, style),
    ])
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

fn render_visualization_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = VisualizationKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            radio_line(
                i + 1,
                kind.to_string(),
                *kind == state.selection.kind,
                Color::Cyan,
            )
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(panel("CHOOSE VISUALIZATION [↑↓ 1-4]"));
    f.render_widget(paragraph, area);
}

fn render_sentiment_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = Sentiment::ALL
        .iter()
        .enumerate()
        .map(|(i, sentiment)| {
            radio_line(
                i + 1,
                sentiment.to_string(),
                *sentiment == state.selection.sentiment,
                to_color(sentiment.color()),
            )
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(panel("CHOOSE SENTIMENT [←→ p/n/t]"));
    f.render_widget(paragraph, area);
}

/// Records per known class, for orientation while browsing.
fn render_dataset_breakdown(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Sentiment::ALL
        .iter()
        .map(|sentiment| {
            let count = state.dataset.of_class(*sentiment).count();
            Line::from(vec![
                Span::styled(
                    format!("{:<9}", sentiment.to_string()),
                    Style::default().fg(to_color(sentiment.color())),
                ),
                Span::styled(count.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let unlabeled = state
        .dataset
        .records()
        .iter()
        .filter(|record| record.class().is_none())
        .count();
    if unlabeled > 0 {
        lines.push(Line::from(Span::styled(
            format!("Unknown  {}", unlabeled),
            Style::default().fg(Color::LightRed),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("DATASET"))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
