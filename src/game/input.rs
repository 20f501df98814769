use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use super::state::{BatOrBowl, Hand};
use crate::ai::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Back,
    NewMatch,
    Up,
    Down,
    Select,
    Difficulty(Difficulty),
    Toss(Hand),
    Choose(BatOrBowl),
    /// Any digit key; values outside 1..=6 are left for the engine to reject
    Ball(u8),
}

/// Map a key press to an action on the match screen
pub fn action_for_key(code: KeyCode) -> Option<InputAction> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Esc => InputAction::Back,
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::NewMatch,
        KeyCode::Up | KeyCode::Char('k') => InputAction::Up,
        KeyCode::Down | KeyCode::Char('j') => InputAction::Down,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Select,
        KeyCode::Char('e') | KeyCode::Char('E') => InputAction::Difficulty(Difficulty::Easy),
        KeyCode::Char('m') | KeyCode::Char('M') => InputAction::Difficulty(Difficulty::Medium),
        KeyCode::Char('h') | KeyCode::Char('H') => InputAction::Difficulty(Difficulty::Hard),
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Toss(Hand::Rock),
        KeyCode::Char('p') | KeyCode::Char('P') => InputAction::Toss(Hand::Paper),
        KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Toss(Hand::Scissors),
        KeyCode::Char('b') | KeyCode::Char('B') => InputAction::Choose(BatOrBowl::Bat),
        KeyCode::Char('w') | KeyCode::Char('W') => InputAction::Choose(BatOrBowl::Bowl),
        KeyCode::Char(c) if c.is_ascii_digit() => InputAction::Ball(c as u8 - b'0'),
        _ => return None,
    };
    Some(action)
}

/// Poll for input events and return actions.
/// Each Press event generates an immediate action - no state tracking needed.
pub fn poll_input(timeout: Duration) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    // Wait up to `timeout` for the first event, then drain what's pending
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(action) = action_for_key(key.code) {
                    actions.push(action);
                }
            }
        }
        wait = Duration::from_millis(0);
    }

    Ok(actions)
}
