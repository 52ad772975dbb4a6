// Paddle controllers: the human player and the computer opponents

mod controller;
pub mod follow_bot;
pub mod human;
mod prediction;
pub mod predictive_bot;
pub mod teleport_bot;

use std::str::FromStr;

use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AIConfig;
use crate::game::{Field, Player, Side};

pub use controller::Controller;
pub use follow_bot::FollowBot;
pub use human::HumanController;
pub use predictive_bot::PredictiveBot;
pub use teleport_bot::TeleportBot;

/// Paddle height shared by every kind except the teleporter
pub const STANDARD_PADDLE_HEIGHT: i32 = 4;

/// Who is steering a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    FollowAi,
    PredictAi,
    TeleportAi,
}

impl PlayerKind {
    /// Get display name for player kind
    pub fn display_name(&self) -> &str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::FollowAi => "Follow AI",
            PlayerKind::PredictAi => "Predict AI",
            PlayerKind::TeleportAi => "Teleport AI",
        }
    }

    /// Get description for player kind
    pub fn description(&self) -> &str {
        match self {
            PlayerKind::Human => "Keyboard controlled",
            PlayerKind::FollowAi => "Chases the ball, sometimes too slow",
            PlayerKind::PredictAi => "Works out where the ball will land",
            PlayerKind::TeleportAi => "Tiny paddle that blinks into place",
        }
    }

    /// Get all player kinds in menu order
    pub fn all() -> Vec<PlayerKind> {
        vec![
            PlayerKind::Human,
            PlayerKind::FollowAi,
            PlayerKind::PredictAi,
            PlayerKind::TeleportAi,
        ]
    }

    pub fn paddle_height(&self) -> i32 {
        match self {
            PlayerKind::TeleportAi => 1,
            _ => STANDARD_PADDLE_HEIGHT,
        }
    }

    /// Characters drawn for each paddle row, top to bottom
    pub fn glyphs(&self, side: Side) -> Vec<char> {
        let height = self.paddle_height() as usize;
        match (self, side) {
            (PlayerKind::Human, _) => vec!['|'; height],
            (PlayerKind::FollowAi, Side::Left) => vec![')'; height],
            (PlayerKind::FollowAi, Side::Right) => vec!['('; height],
            (PlayerKind::PredictAi, _) => {
                let mut glyphs = vec!['|'; height];
                glyphs[0] = '+';
                glyphs[height - 1] = '+';
                glyphs
            }
            (PlayerKind::TeleportAi, Side::Left) => vec!['>'; height],
            (PlayerKind::TeleportAi, Side::Right) => vec!['<'; height],
        }
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "follow" | "follow-ai" => Ok(PlayerKind::FollowAi),
            "predict" | "predict-ai" => Ok(PlayerKind::PredictAi),
            "teleport" | "teleport-ai" => Ok(PlayerKind::TeleportAi),
            other => Err(anyhow!(
                "unknown player kind {:?} (expected human, follow, predict or teleport)",
                other
            )),
        }
    }
}

/// Create a controller instance from a player kind.
///
/// Bots that need randomness get their own stream split off `rng`, so a
/// seeded match replays identically.
pub fn create_controller(
    kind: PlayerKind,
    side: Side,
    ai: &AIConfig,
    rng: &mut StdRng,
) -> Box<dyn Controller> {
    match kind {
        PlayerKind::Human => Box::new(HumanController::new(side)),
        PlayerKind::FollowAi => Box::new(FollowBot::new(
            ai.follow_reaction_rate,
            StdRng::seed_from_u64(rng.gen()),
        )),
        PlayerKind::PredictAi => Box::new(PredictiveBot::new(side, ai.prediction_step_cap)),
        PlayerKind::TeleportAi => Box::new(TeleportBot::new(side, ai.teleport_reach)),
    }
}

pub fn create_player(
    kind: PlayerKind,
    side: Side,
    field: &Field,
    ai: &AIConfig,
    rng: &mut StdRng,
) -> Player {
    Player::new(side, create_controller(kind, side, ai, rng), field)
}
