// ASCII Pong configuration types
// Field size and frame pacing are fixed; everything here is cosmetic or tuning

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub sound: SoundConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle controls (human player on the left)
    pub left_paddle_up: String,
    pub left_paddle_down: String,

    // Right paddle controls (human player on the right)
    pub right_paddle_up: String,
    pub right_paddle_down: String,

    // Game controls (Esc always quits as well)
    pub quit: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_paddle_up: "W".to_string(),
            left_paddle_down: "S".to_string(),
            right_paddle_up: "Up".to_string(),
            right_paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Character used to draw the ball
    pub ball_char: char,

    // Show the controls line under the field
    pub show_controls: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ball_char: 'O',
            show_controls: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Chance per frame that the follow bot corrects its position (0.0 - 1.0)
    pub follow_reaction_rate: f64,

    // How many columns from its edge the teleport bot starts reacting
    pub teleport_reach: i32,

    // Upper bound on cells simulated by the predict bot
    pub prediction_step_cap: u32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            follow_reaction_rate: 0.8,
            teleport_reach: 4,
            prediction_step_cap: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SoundConfig {
    // Ring the terminal bell on paddle hits and points
    pub enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
