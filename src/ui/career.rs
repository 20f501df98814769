// Career stats and achievement list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::career::{AchievementEngine, CareerStats};

pub fn render_career(
    frame: &mut Frame,
    stats: &CareerStats,
    achievements: &AchievementEngine,
    palette: &Palette,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(10), // Stats
            Constraint::Min(7),    // Achievements
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "CAREER",
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let label = Style::default().fg(palette.muted);
    let value = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let stat = |name: &str, shown: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", name), label),
            Span::styled(shown, value),
        ])
    };

    let stat_lines = vec![
        stat("Matches", stats.matches_played().to_string()),
        stat("Wins", stats.wins.to_string()),
        stat("Losses", stats.losses.to_string()),
        stat("Draws", stats.draws.to_string()),
        stat("Win rate", format!("{:.0}%", stats.win_rate() * 100.0)),
        stat("Total runs", stats.total_runs.to_string()),
        stat("Highest score", stats.highest_score.to_string()),
        stat("Wickets taken", stats.wickets.to_string()),
    ];

    let stats_widget = Paragraph::new(stat_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(" Record ")
            .style(Style::default().bg(palette.surface)),
    );
    frame.render_widget(stats_widget, chunks[1]);

    let achievement_lines: Vec<Line> = achievements
        .achievements()
        .iter()
        .map(|achievement| {
            let (mark, style) = if achievement.is_unlocked() {
                ("[x] ", Style::default().fg(palette.success).add_modifier(Modifier::BOLD))
            } else {
                ("[ ] ", Style::default().fg(palette.muted))
            };
            Line::from(vec![
                Span::styled(mark, style),
                Span::styled(format!("{:<18}", achievement.title), style),
                Span::styled(achievement.description, Style::default().fg(palette.text)),
            ])
        })
        .collect();

    let unlocked = achievements
        .achievements()
        .iter()
        .filter(|a| a.is_unlocked())
        .count();
    let achievements_widget = Paragraph::new(achievement_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(format!(
                " Achievements {}/{} ",
                unlocked,
                achievements.achievements().len()
            ))
            .style(Style::default().bg(palette.surface)),
    );
    frame.render_widget(achievements_widget, chunks[2]);

    let controls = Paragraph::new("Esc/Enter: Back  Q: Quit")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}
