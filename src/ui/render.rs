use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::braille::{number_pixel_width, BrailleCanvas, DIGIT_PIXEL_HEIGHT};
use super::overlay::{render_overlay, OverlayMessage};
use super::theme::Palette;
use crate::ai::Difficulty;
use crate::game::{Phase, Side, Snapshot};

// Layout: header line, scoreboard with Braille scores, reveal area with the
// last two moves, prompt for the current phase, message and status lines,
// controls hint
const SCOREBOARD_ROWS: u16 = 7; // border + label + 4 rows of digits + border
const REVEAL_ROWS: u16 = 6;

/// Everything the match screen needs besides the engine snapshot
pub struct MatchHud<'a> {
    pub difficulty: Difficulty,
    /// Highlighted entry in the difficulty picker
    pub picker_index: usize,
    /// True while the reveal delay holds the processing lock
    pub revealing: bool,
    /// Last rejected action, shown until the next accepted one
    pub status: Option<&'a str>,
    pub overlay: Option<&'a OverlayMessage>,
}

pub fn render_match(frame: &mut Frame, snapshot: &Snapshot, hud: &MatchHud, palette: &Palette) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(SCOREBOARD_ROWS), // Scores
            Constraint::Length(REVEAL_ROWS),     // Last moves
            Constraint::Min(4),                  // Phase prompt
            Constraint::Length(1),               // Message
            Constraint::Length(1),               // Status
            Constraint::Length(1),               // Controls
        ])
        .split(area);

    draw_header(frame, snapshot, hud, palette, chunks[0]);
    draw_scoreboard(frame, snapshot, palette, chunks[1]);
    draw_reveal(frame, snapshot, hud, palette, chunks[2]);
    draw_prompt(frame, snapshot, hud, palette, chunks[3]);

    let message = Paragraph::new(snapshot.message.as_str())
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[4]);

    if let Some(status) = hud.status {
        let status = Paragraph::new(status)
            .style(Style::default().fg(palette.danger))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[5]);
    }

    draw_controls(frame, snapshot, palette, chunks[6]);

    if let Some(overlay) = hud.overlay {
        render_overlay(frame, overlay, area, palette);
    }
}

fn draw_header(frame: &mut Frame, snapshot: &Snapshot, hud: &MatchHud, palette: &Palette, area: Rect) {
    let mut spans = vec![Span::styled(
        "HAND CRICKET",
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )];

    if !matches!(snapshot.phase, Phase::DifficultySelect) {
        spans.push(Span::styled(
            format!("  |  {} opponent", hud.difficulty.display_name()),
            Style::default().fg(palette.muted),
        ));
    }
    if matches!(snapshot.phase, Phase::Batting(_) | Phase::GameOver(_)) {
        spans.push(Span::styled(
            format!("  |  Innings {}", snapshot.innings),
            Style::default().fg(palette.muted),
        ));
    }
    if snapshot.target > 0 {
        spans.push(Span::styled(
            format!("  |  Target {}", snapshot.target),
            Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_scoreboard(frame: &mut Frame, snapshot: &Snapshot, palette: &Palette, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let batting = match snapshot.phase {
        Phase::Batting(side) => Some(side),
        _ => None,
    };

    for (side, score, half) in [
        (Side::Player, snapshot.player_score, halves[0]),
        (Side::Computer, snapshot.computer_score, halves[1]),
    ] {
        let at_crease = batting == Some(side);
        let title = if at_crease {
            format!(" {} - batting ", side.display_name())
        } else {
            format!(" {} ", side.display_name())
        };
        let border = if at_crease { palette.highlight } else { palette.muted };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(title, Style::default().fg(border)))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(half);
        frame.render_widget(block, half);

        draw_big_number(frame, score, inner, palette.text, palette.surface);
    }
}

fn draw_reveal(frame: &mut Frame, snapshot: &Snapshot, hud: &MatchHud, palette: &Palette, area: Rect) {
    let (Some(player), Some(computer)) = (snapshot.last_player_move, snapshot.last_computer_move)
    else {
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Matching moves are a wicket, so both sides light up together
    let colour = if player == computer {
        palette.danger
    } else if hud.revealing {
        palette.highlight
    } else {
        palette.accent
    };

    for (label, value, half) in [("You played", player, halves[0]), ("Computer played", computer, halves[1])] {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(half);

        let caption = Paragraph::new(label)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        frame.render_widget(caption, rows[0]);
        draw_big_number(frame, value as u32, rows[1], colour, palette.background);
    }
}

fn draw_prompt(frame: &mut Frame, snapshot: &Snapshot, hud: &MatchHud, palette: &Palette, area: Rect) {
    let key = Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let lines: Vec<Line> = match snapshot.phase {
        Phase::DifficultySelect => Difficulty::all()
            .into_iter()
            .enumerate()
            .map(|(i, difficulty)| {
                let selected = i == hud.picker_index;
                let prefix = if selected { "> " } else { "  " };
                let style = if selected { key } else { text };
                Line::from(vec![
                    Span::styled(format!("{}{:<8}", prefix, difficulty.display_name()), style),
                    Span::styled(difficulty.description().to_string(), muted),
                ])
            })
            .collect(),
        Phase::Toss {
            awaiting_choice: false,
        } => vec![Line::from(vec![
            Span::styled("R", key),
            Span::styled(" Rock   ", text),
            Span::styled("P", key),
            Span::styled(" Paper   ", text),
            Span::styled("S", key),
            Span::styled(" Scissors", text),
        ])],
        Phase::Toss {
            awaiting_choice: true,
        } => vec![Line::from(vec![
            Span::styled("B", key),
            Span::styled(" Bat   ", text),
            Span::styled("W", key),
            Span::styled(" Bowl", text),
        ])],
        Phase::Batting(side) => {
            let role = match side {
                Side::Player => "You're batting",
                Side::Computer => "You're bowling",
            };
            let hint = if hud.revealing {
                Span::styled("...", muted)
            } else {
                Span::styled("Press 1-6", key)
            };
            vec![Line::from(vec![Span::styled(format!("{}  ", role), text), hint])]
        }
        Phase::InningsBreak | Phase::GameOver(_) => Vec::new(),
    };

    let prompt = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(prompt, area.inner(ratatui::layout::Margin::new(0, 1)));
}

fn draw_controls(frame: &mut Frame, snapshot: &Snapshot, palette: &Palette, area: Rect) {
    let hint = match snapshot.phase {
        Phase::DifficultySelect => "↑/↓: Choose  Enter: Confirm  E/M/H: Quick pick  Esc: Menu",
        _ => "N: New match  Esc: Menu  Q: Quit",
    };

    let controls = Paragraph::new(hint)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}

/// Draw `value` in Braille digits centered in `area`
fn draw_big_number(frame: &mut Frame, value: u32, area: Rect, fg: Color, bg: Color) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let x = canvas.pixel_width().saturating_sub(number_pixel_width(value)) / 2;
    let y = (canvas.height() * 4).saturating_sub(DIGIT_PIXEL_HEIGHT) / 2;
    canvas.draw_number(value, x, y);

    for row in 0..canvas.height() {
        let line = Paragraph::new(canvas.row(row))
            .style(Style::default().fg(fg).bg(bg));
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(line, row_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(snapshot: &Snapshot, hud: &MatchHud) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let palette = Theme::Dark.palette();
        terminal
            .draw(|f| render_match(f, snapshot, hud, &palette))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_batting_screen_keeps_opponent_reads_hidden() {
        let snapshot = Snapshot {
            phase: Phase::Batting(Side::Player),
            player_score: 12,
            computer_score: 0,
            target: 0,
            innings: 1,
            last_player_move: Some(4),
            last_computer_move: Some(2),
            message: "You scored 4".to_string(),
        };
        let hud = MatchHud {
            difficulty: Difficulty::Hard,
            picker_index: 2,
            revealing: false,
            status: None,
            overlay: None,
        };

        let text = screen_text(&snapshot, &hud);
        assert!(text.contains("Press 1-6"));
        assert!(text.contains("Hard opponent"));
        assert!(!text.contains("recent"));
    }
}
