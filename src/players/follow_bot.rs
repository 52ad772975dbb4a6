// Follow bot - chases the ball row with imperfect reactions

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::Rng;

use super::{Controller, PlayerKind};
use crate::game::{Ball, Field, InputSignal, Paddle};

/// Steps its paddle centre toward the ball's row.
///
/// Each call draws one uniform value; at or above `reaction_rate` the bot
/// skips its correction for that frame.
#[derive(Debug)]
pub struct FollowBot {
    reaction_rate: f64,
    rng: StdRng,
}

impl FollowBot {
    pub fn new(reaction_rate: f64, rng: StdRng) -> Self {
        Self { reaction_rate, rng }
    }
}

impl Controller for FollowBot {
    fn steer(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, _signal: InputSignal) -> i32 {
        if self.rng.gen::<f64>() >= self.reaction_rate {
            return paddle.y;
        }

        match ball.y.cmp(&paddle.center()) {
            Ordering::Less if paddle.y > 1 => paddle.y - 1,
            Ordering::Greater if paddle.y < field.max_paddle_top(paddle.height) => paddle.y + 1,
            _ => paddle.y,
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::FollowAi
    }
}
