// Keyboard-driven paddle

use super::{Controller, PlayerKind};
use crate::game::{Ball, Field, InputSignal, Paddle, PaddleMove, Side};

/// Moves one row per key press for its own side's bindings
#[derive(Debug)]
pub struct HumanController {
    side: Side,
}

impl HumanController {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Controller for HumanController {
    fn steer(&mut self, paddle: &Paddle, _ball: &Ball, field: &Field, signal: InputSignal) -> i32 {
        match signal.paddle_move(self.side) {
            Some(PaddleMove::Up) if paddle.y > 1 => paddle.y - 1,
            Some(PaddleMove::Down) if paddle.y < field.max_paddle_top(paddle.height) => {
                paddle.y + 1
            }
            _ => paddle.y,
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
