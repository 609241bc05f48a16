//! Dashboard footer component
//!
//! Renders the key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the key binding hint. The sentiment keys are only listed while
/// the selected chart takes a sentiment.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, show_sentiment_keys: bool) {
    let footer_text = if show_sentiment_keys {
        "[↑↓/1-4] View | [←→/p n t] Sentiment | [Q] Quit"
    } else {
        "[↑↓/1-4] View | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
