// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::state::{MenuItem, MenuState};
use crate::ui::Theme;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState, theme: Theme) {
    let palette = theme.palette();
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg, area);

    // Create layout with title area and menu area
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Title area
            Constraint::Min(6),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let title_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled("╦ ╦╔═╗╔╗╔╔╦╗  ╔═╗╦═╗╦╔═╗╦╔═╔═╗╔╦╗", title_style)),
        Line::from(Span::styled("╠═╣╠═╣║║║ ║║  ║  ╠╦╝║║  ╠╩╗║╣  ║ ", title_style)),
        Line::from(Span::styled("╩ ╩╩ ╩╝╚╝═╩╝  ╚═╝╩╚═╩╚═╝╩ ╩╚═╝ ╩ ", title_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Pick 1-6. Match the bowler and you're out.",
            Style::default().fg(palette.muted),
        )),
    ];

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = match item {
                MenuItem::ToggleTheme => {
                    format!("{}{} ({})", prefix, item.display_text(), theme.display_name())
                }
                _ => format!("{}{}", prefix, item.display_text()),
            };

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(palette.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(palette.text)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let key = Style::default().fg(palette.text);
    let hint = Style::default().fg(palette.muted);
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", key),
        Span::styled(": Navigate  ", hint),
        Span::styled("Enter", key),
        Span::styled(": Select  ", hint),
        Span::styled("T", key),
        Span::styled(": Theme  ", hint),
        Span::styled("Q/Esc", key),
        Span::styled(": Quit", hint),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}
