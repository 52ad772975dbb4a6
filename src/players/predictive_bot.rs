// Predictive bot - works out the landing row once per approach

use super::prediction::predict_catch_row;
use super::{Controller, PlayerKind};
use crate::game::{Ball, Field, InputSignal, Paddle, Side};

/// Bot that simulates the ball's path to its catch plane and walks there
#[derive(Debug)]
pub struct PredictiveBot {
    side: Side,
    max_steps: u32,

    // Landing row for the current approach; None until the ball heads our way
    predicted_row: Option<i32>,
}

impl PredictiveBot {
    pub fn new(side: Side, max_steps: u32) -> Self {
        Self {
            side,
            max_steps,
            predicted_row: None,
        }
    }

    pub fn predicted_row(&self) -> Option<i32> {
        self.predicted_row
    }
}

impl Controller for PredictiveBot {
    fn steer(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, _signal: InputSignal) -> i32 {
        if !ball.moving_toward(self.side) {
            // Forget the old prediction so the next approach gets a fresh one
            self.predicted_row = None;
            return paddle.y;
        }

        let target_x = field.catch_plane(self.side);
        let max_steps = self.max_steps;
        let target = *self
            .predicted_row
            .get_or_insert_with(|| predict_catch_row(ball, field, target_x, max_steps));

        if target < paddle.y && paddle.y > 1 {
            paddle.y - 1
        } else if target > paddle.bottom() && paddle.y < field.max_paddle_top(paddle.height) {
            paddle.y + 1
        } else {
            paddle.y
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::PredictAi
    }
}
