//! Plain-text chart output for headless runs.
//!
//! Charts are drawn with the dashboard widgets into an in-memory terminal and
//! the resulting cells are read back as text.

use crate::chart::Chart;
use crate::ui::dashboard::components::chart::render_chart;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

/// Draw `chart` into a `width` x `height` cell buffer and return its text.
///
/// Trailing blanks are trimmed from each row; colors are dropped.
pub fn chart_to_text(chart: &Chart, width: u16, height: u16) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render_chart(f, f.area(), chart))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Read a buffer back as lines of text.
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines: Vec<String> = (0..area.height)
        .map(|y| {
            let row: String = (0..area.width)
                .map(|x| buffer[(area.x + x, area.y + y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Bar, BarDirection, BarSeries, ChartBody};
    use crate::sentiment::Rgb;

    #[test]
    fn horizontal_bars_render_as_text() {
        let chart = Chart {
            title: "Top Words Sentiment BRICS (Negative)".to_string(),
            body: ChartBody::Bars(BarSeries {
                direction: BarDirection::Horizontal,
                x_label: "Frequency".to_string(),
                y_label: "Words".to_string(),
                bars: vec![
                    Bar {
                        label: "bad".to_string(),
                        value: 2,
                        color: Rgb(255, 0, 0),
                    },
                    Bar {
                        label: "rude".to_string(),
                        value: 1,
                        color: Rgb(255, 0, 0),
                    },
                ],
                annotate: false,
            }),
        };
        let text = chart_to_text(&chart, 60, 12).unwrap();
        assert!(text.contains("Top Words Sentiment BRICS (Negative)"));
        assert!(text.contains("bad"));
        assert!(text.contains("rude"));
        assert!(text.lines().all(|line| !line.ends_with(' ')));
        assert!(text.lines().count() <= 12);
    }

    #[test]
    fn trailing_blank_rows_are_dropped() {
        let mut buffer = Buffer::empty(ratatui::layout::Rect::new(0, 0, 5, 3));
        buffer.set_string(0, 0, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_to_text(&buffer), "ab");
    }
}
