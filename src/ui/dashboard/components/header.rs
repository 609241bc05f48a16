//! Dashboard header component
//!
//! Renders the title and a one-line dataset summary

use super::super::state::DashboardState;
use super::super::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and dataset summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "{} DASHBOARD v{}",
        state.config.title.to_uppercase(),
        version
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let summary = Line::from(vec![
        Span::styled("Dataset: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.dataset_source.clone(),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled("  Records: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.dataset.len().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Renders: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.render_count.to_string(),
            Style::default().fg(Color::LightYellow),
        ),
        Span::styled("  Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_uptime(state.start_time.elapsed()),
            Style::default().fg(Color::LightGreen),
        ),
    ]);
    let summary = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(summary, header_chunks[1]);
}
