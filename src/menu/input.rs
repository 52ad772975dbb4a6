// Menu input handling

use std::io;
use std::time::Duration;

use super::state::{MenuStage, MenuState};
use crate::game::input::poll_menu_signal;
use crate::game::{KeyMap, MenuSignal};
use crate::players::PlayerKind;

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Both players chosen
    StartMatch(PlayerKind, PlayerKind),
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(
    menu_state: &mut MenuState,
    keymap: &KeyMap,
) -> Result<MenuAction, io::Error> {
    let signal = poll_menu_signal(keymap, Duration::from_millis(100))?;
    Ok(apply_signal(menu_state, signal))
}

pub fn apply_signal(menu_state: &mut MenuState, signal: MenuSignal) -> MenuAction {
    match signal {
        MenuSignal::None => MenuAction::None,
        MenuSignal::Up => {
            menu_state.select_previous();
            MenuAction::None
        }
        MenuSignal::Down => {
            menu_state.select_next();
            MenuAction::None
        }
        MenuSignal::Confirm => match menu_state.stage {
            MenuStage::PickLeft => {
                menu_state.choose_left();
                MenuAction::None
            }
            MenuStage::PickRight { left } => {
                MenuAction::StartMatch(left, menu_state.selected_item())
            }
        },
        MenuSignal::Back => match menu_state.stage {
            MenuStage::PickLeft => MenuAction::Quit,
            MenuStage::PickRight { .. } => {
                menu_state.back_to_left();
                MenuAction::None
            }
        },
        MenuSignal::Quit => MenuAction::Quit,
    }
}
