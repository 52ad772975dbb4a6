// Menu module for ASCII Pong
// Handles player selection and the end-of-match report

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::{render_final_score, render_menu};
pub use state::{AppState, MenuState};
