// Overlay message system for displaying centered text on screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::game::MatchResult;

/// Lines longer than this wrap inside the box
const MAX_TEXT_WIDTH: usize = 60;

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    /// Style preset for the overlay
    pub style: OverlayStyle,
}

/// Predefined styles for overlay messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Success message
    Success,
}

impl OverlayMessage {
    /// Pick the style from how the match ended
    pub fn for_result(result: MatchResult, lines: Vec<String>) -> Self {
        let style = match result {
            MatchResult::Win => OverlayStyle::Success,
            MatchResult::Loss => OverlayStyle::Error,
            MatchResult::Draw => OverlayStyle::Warning,
        };
        Self {
            lines,
            title: None,
            style,
        }
    }

    /// Set the title for this message
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the color for the border and title based on style
    fn border_color(&self, palette: &Palette) -> Color {
        match self.style {
            OverlayStyle::Warning => palette.warning,
            OverlayStyle::Error => palette.danger,
            OverlayStyle::Success => palette.success,
        }
    }
}

/// Render an overlay message in the center of the screen
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect, palette: &Palette) {
    // Calculate overlay dimensions based on content; long lines wrap
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_TEXT_WIDTH);
    let wrapped_rows: usize = message
        .lines
        .iter()
        .map(|line| line.chars().count().div_ceil(MAX_TEXT_WIDTH).max(1))
        .sum();

    // Add padding for borders and spacing
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(4));
    let overlay_height = (wrapped_rows as u16 + 4).min(area.height.saturating_sub(2));

    // Center the overlay
    let overlay_area = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let border_color = message.border_color(palette);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.surface));

    if let Some(ref title) = message.title {
        block = block.title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border_color).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(block, overlay_area);

    // Render the message text inside the block
    let inner_area = overlay_area.inner(ratatui::layout::Margin::new(2, 1));

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(palette.text))))
        .collect();

    let paragraph = Paragraph::new(text_lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_styles() {
        assert_eq!(
            OverlayMessage::for_result(MatchResult::Win, vec![]).style,
            OverlayStyle::Success
        );
        assert_eq!(
            OverlayMessage::for_result(MatchResult::Loss, vec![]).style,
            OverlayStyle::Error
        );
        assert_eq!(
            OverlayMessage::for_result(MatchResult::Draw, vec![]).style,
            OverlayStyle::Warning
        );
    }
}
