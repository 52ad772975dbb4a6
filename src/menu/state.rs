// Menu state management

use crate::players::PlayerKind;

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    /// Choosing players
    Menu,
    /// Playing a match between these two
    Match(PlayerKind, PlayerKind),
    /// Graceful shutdown
    Exiting,
}

/// Which paddle the menu is currently choosing for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuStage {
    PickLeft,
    PickRight { left: PlayerKind },
}

/// Menu state
pub struct MenuState {
    /// Currently selected item index
    pub selected_index: usize,
    /// All selectable player kinds
    pub items: Vec<PlayerKind>,
    pub stage: MenuStage,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: PlayerKind::all(),
            stage: MenuStage::PickLeft,
        }
    }

    /// Get currently selected player kind
    pub fn selected_item(&self) -> PlayerKind {
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

    /// Lock in the left player and move on to the right one
    pub fn choose_left(&mut self) {
        self.stage = MenuStage::PickRight {
            left: self.selected_item(),
        };
    }

    /// Return to choosing the left player, with its previous pick highlighted
    pub fn back_to_left(&mut self) {
        if let MenuStage::PickRight { left } = self.stage {
            self.selected_index = self.items.iter().position(|k| *k == left).unwrap_or(0);
        }
        self.stage = MenuStage::PickLeft;
    }

    pub fn prompt(&self) -> String {
        match self.stage {
            MenuStage::PickLeft => "Choose the LEFT player".to_string(),
            MenuStage::PickRight { left } => {
                format!("Choose the RIGHT player (left: {})", left.display_name())
            }
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
        assert_eq!(menu.selected_item(), PlayerKind::Human);

        menu.select_previous();
        assert_eq!(menu.selected_item(), PlayerKind::TeleportAi);

        menu.select_next();
        assert_eq!(menu.selected_item(), PlayerKind::Human);
    }

    #[test]
    fn test_back_restores_left_choice() {
        let mut menu = MenuState::new();
        menu.select_next();
        menu.select_next();
        menu.choose_left();
        assert_eq!(
            menu.stage,
            MenuStage::PickRight {
                left: PlayerKind::PredictAi
            }
        );

        menu.select_next();
        menu.back_to_left();
        assert_eq!(menu.stage, MenuStage::PickLeft);
        assert_eq!(menu.selected_item(), PlayerKind::PredictAi);
    }
}
