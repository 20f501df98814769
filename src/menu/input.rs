// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use super::state::{MenuItem, MenuState};

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    StartMatch,
    ShowCareer,
    ToggleTheme,
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(menu_state: &mut MenuState) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

fn handle_key_press(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            menu_state.select_previous();
            MenuAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            menu_state.select_next();
            MenuAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => handle_menu_selection(menu_state),
        KeyCode::Char('t') | KeyCode::Char('T') => MenuAction::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

fn handle_menu_selection(menu_state: &MenuState) -> MenuAction {
    match menu_state.selected_item() {
        MenuItem::PlayMatch => MenuAction::StartMatch,
        MenuItem::Career => MenuAction::ShowCareer,
        MenuItem::ToggleTheme => MenuAction::ToggleTheme,
        MenuItem::Quit => MenuAction::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_activates_selected_item() {
        let mut menu = MenuState::new();
        assert_eq!(handle_key_press(&mut menu, KeyCode::Enter), MenuAction::StartMatch);
        handle_key_press(&mut menu, KeyCode::Down);
        assert_eq!(handle_key_press(&mut menu, KeyCode::Enter), MenuAction::ShowCareer);
    }

    #[test]
    fn test_shortcuts() {
        let mut menu = MenuState::new();
        assert_eq!(handle_key_press(&mut menu, KeyCode::Char('t')), MenuAction::ToggleTheme);
        assert_eq!(handle_key_press(&mut menu, KeyCode::Esc), MenuAction::Quit);
        assert_eq!(handle_key_press(&mut menu, KeyCode::Char('x')), MenuAction::None);
    }
}
