//! Dashboard chart component
//!
//! Draws the latest render pass: a bar chart, a word cloud, or a failure
//! panel. The same functions draw headless output into an in-memory buffer.

use super::super::state::DashboardState;
use super::super::utils::to_color;
use crate::analysis::{Orientation, WordCloudLayout};
use crate::chart::{BarDirection, BarSeries, Chart, ChartBody, RenderError};

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Bar as BarWidget, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph, Widget,
    Wrap,
};

/// Glyph tiers by font size relative to the largest word.
const LARGE_WORD_RATIO: f64 = 0.6;
const MEDIUM_WORD_RATIO: f64 = 0.3;

/// Columns between vertical bars, rows between horizontal ones.
const VERTICAL_BAR_GAP: u16 = 2;
const HORIZONTAL_BAR_GAP: u16 = 1;

/// Render the chart area for the current dashboard state.
pub fn render_chart_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    match &state.chart {
        Ok(chart) => render_chart(f, area, chart),
        Err(err) => render_failure(f, area, err),
    }
}

/// Render one chart into `area`.
pub fn render_chart(f: &mut Frame, area: Rect, chart: &Chart) {
    match &chart.body {
        ChartBody::Bars(series) => render_bars(f, area, &chart.title, series),
        ChartBody::WordCloud(layout) => render_word_cloud(f, area, &chart.title, layout),
    }
}

/// Visible failure indicator for a render pass that produced no chart.
pub fn render_failure(f: &mut Frame, area: Rect, err: &RenderError) {
    let lines = vec![
        Line::styled(
            "RENDER FAILED",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(err.to_string(), Style::default().fg(Color::Red)),
        Line::raw(""),
        Line::styled(
            "Choose another visualization or sentiment to continue.",
            Style::default().fg(Color::Gray),
        ),
    ];
    let block = Block::default()
        .title("CHART")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn chart_block<'a>(title: &'a str, footer: String) -> Block<'a> {
    Block::default()
        .title(Line::from(title).centered())
        .title_bottom(Line::from(footer).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_bars(f: &mut Frame, area: Rect, title: &str, series: &BarSeries) {
    let block = chart_block(
        title,
        format!("x: {}  y: {}", series.x_label, series.y_label),
    );
    let inner = block.inner(area);
    let mid_height_labels =
        series.annotate && matches!(series.direction, BarDirection::Vertical);

    let bars: Vec<BarWidget> = series
        .bars
        .iter()
        .map(|bar| {
            let color = to_color(bar.color);
            // Mid-height labels are drawn over the chart afterwards.
            let text_value = if mid_height_labels {
                String::new()
            } else {
                bar.value.to_string()
            };
            let mut widget = BarWidget::default()
                .value(bar.value)
                .label(Line::from(bar.label.clone()))
                .text_value(text_value)
                .style(Style::default().fg(color));
            if series.annotate {
                widget = widget.value_style(annotation_style(color));
            }
            widget
        })
        .collect();

    let count = series.bars.len().max(1) as u16;
    let (direction, bar_width) = match series.direction {
        BarDirection::Vertical => {
            let gaps = count.saturating_sub(1) * VERTICAL_BAR_GAP;
            let width = inner.width.saturating_sub(gaps) / count;
            (Direction::Vertical, width.clamp(3, 24))
        }
        BarDirection::Horizontal => {
            let gaps = count.saturating_sub(1) * HORIZONTAL_BAR_GAP;
            let height = inner.height.saturating_sub(gaps) / count;
            (Direction::Horizontal, height.clamp(1, 3))
        }
    };
    let bar_gap = match series.direction {
        BarDirection::Vertical => VERTICAL_BAR_GAP,
        BarDirection::Horizontal => HORIZONTAL_BAR_GAP,
    };
    let max = series.max_value().max(1);

    let chart = BarChart::default()
        .block(block)
        .direction(direction)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);

    if mid_height_labels {
        draw_mid_height_labels(f.buffer_mut(), inner, series, bar_width, max);
    }
}

fn annotation_style(color: Color) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

/// Writes each bar's value centered on the middle row of its filled part.
///
/// Follows the vertical bar geometry: bars start at the left edge of `inner`
/// separated by the bar gap, and the bottom row holds the bar labels.
fn draw_mid_height_labels(
    buf: &mut Buffer,
    inner: Rect,
    series: &BarSeries,
    bar_width: u16,
    max: u64,
) {
    let bars_height = inner.height.saturating_sub(1);
    if bars_height == 0 || bar_width == 0 {
        return;
    }
    let bottom = inner.y + bars_height;

    for (i, bar) in series.bars.iter().enumerate() {
        let x = inner.x as u32 + i as u32 * (bar_width + VERTICAL_BAR_GAP) as u32;
        if x + bar_width as u32 > inner.right() as u32 {
            break;
        }
        let x = x as u16;
        let filled = (bar.value.min(max) * bars_height as u64 / max) as u16;
        let y = bottom - 1 - filled.saturating_sub(1) / 2;

        let text = bar.value.to_string();
        let len = (text.chars().count() as u16).min(bar_width);
        let offset = (bar_width - len) / 2;
        buf.set_stringn(
            x + offset,
            y,
            &text,
            bar_width as usize,
            annotation_style(to_color(bar.color)),
        );
    }
}

fn render_word_cloud(f: &mut Frame, area: Rect, title: &str, layout: &WordCloudLayout) {
    let block = chart_block(
        title,
        format!("{} words on {}x{}", layout.words.len(), layout.width, layout.height),
    );
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(WordCloudCanvas { layout }, inner);
}

/// Projects a pixel layout onto terminal cells.
///
/// Glyphs cannot grow in a terminal, so size is expressed through case and
/// weight. Smaller words are drawn first so that the largest stay legible
/// where the coarse projection makes them collide.
pub struct WordCloudCanvas<'a> {
    pub layout: &'a WordCloudLayout,
}

impl Widget for WordCloudCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = to_color(self.layout.background);
        buf.set_style(area, Style::default().bg(background));
        if area.width == 0 || area.height == 0 {
            return;
        }

        let max_size = self
            .layout
            .words
            .iter()
            .map(|w| w.font_size)
            .max()
            .unwrap_or(1)
            .max(1) as f64;
        let scale_x = area.width as f64 / self.layout.width.max(1) as f64;
        let scale_y = area.height as f64 / self.layout.height.max(1) as f64;

        for word in self.layout.words.iter().rev() {
            let ratio = word.font_size as f64 / max_size;
            let mut style = Style::default().fg(to_color(word.color)).bg(background);
            let text = if ratio >= LARGE_WORD_RATIO {
                style = style.add_modifier(Modifier::BOLD);
                word.word.to_uppercase()
            } else {
                if ratio >= MEDIUM_WORD_RATIO {
                    style = style.add_modifier(Modifier::BOLD);
                }
                word.word.clone()
            };

            // Anchor at the box center so short projections stay inside it.
            let center_x = (word.x as f64 + word.width as f64 / 2.0) * scale_x;
            let center_y = (word.y as f64 + word.height as f64 / 2.0) * scale_y;
            let len = text.chars().count() as f64;

            match word.orientation {
                Orientation::Horizontal => {
                    let x = clamp_cell(center_x - len / 2.0, area.width);
                    let y = clamp_cell(center_y, area.height);
                    let max_width = (area.width - x) as usize;
                    buf.set_stringn(area.x + x, area.y + y, &text, max_width, style);
                }
                Orientation::Vertical => {
                    let x = clamp_cell(center_x, area.width);
                    let y = clamp_cell(center_y - len / 2.0, area.height);
                    for (i, ch) in text.chars().enumerate() {
                        let row = y as usize + i;
                        if row >= area.height as usize {
                            break;
                        }
                        buf.set_stringn(
                            area.x + x,
                            area.y + row as u16,
                            ch.to_string(),
                            1,
                            style,
                        );
                    }
                }
            }
        }
    }
}

fn clamp_cell(value: f64, extent: u16) -> u16 {
    (value.max(0.0) as u16).min(extent.saturating_sub(1))
}
