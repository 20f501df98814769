// Menu state management and screen definitions

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Currently in the main menu
    Menu,
    /// Currently playing a match
    Match,
    /// Viewing career stats and achievements
    Career,
    /// Graceful shutdown
    Exiting,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    PlayMatch,
    Career,
    ToggleTheme,
    Quit,
}

impl MenuItem {
    /// Get display text for menu item
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::PlayMatch => "Play vs Computer",
            MenuItem::Career => "Career & Achievements",
            MenuItem::ToggleTheme => "Toggle Theme",
            MenuItem::Quit => "Quit",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        vec![
            MenuItem::PlayMatch,
            MenuItem::Career,
            MenuItem::ToggleTheme,
            MenuItem::Quit,
        ]
    }
}

/// Menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
        }
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = MenuState::new();
        menu.select_previous();
        assert_eq!(menu.selected_item(), MenuItem::Quit);
        menu.select_next();
        assert_eq!(menu.selected_item(), MenuItem::PlayMatch);
        menu.select_next();
        assert_eq!(menu.selected_item(), MenuItem::Career);
    }
}
