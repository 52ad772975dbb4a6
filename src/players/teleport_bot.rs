// Teleport bot - snaps next to the ball when it gets close

use super::{Controller, PlayerKind};
use crate::game::{Ball, Field, InputSignal, Paddle, Side};

/// A one-row paddle that jumps straight to the ball once it is within
/// `reach` columns of this side, and does nothing otherwise
#[derive(Debug)]
pub struct TeleportBot {
    side: Side,
    reach: i32,
}

impl TeleportBot {
    pub fn new(side: Side, reach: i32) -> Self {
        Self { side, reach }
    }

    fn in_range(&self, ball: &Ball, field: &Field) -> bool {
        match self.side {
            Side::Left => ball.x <= self.reach,
            Side::Right => ball.x >= field.width - self.reach,
        }
    }
}

impl Controller for TeleportBot {
    fn steer(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, _signal: InputSignal) -> i32 {
        if !self.in_range(ball, field) {
            return paddle.y;
        }

        // Lead the ball by one row in the direction it is travelling
        let target = ball.y + ball.dy.delta();
        field.clamp_paddle_top(target, paddle.height)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::TeleportAi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn paddle(side: Side, y: i32) -> Paddle {
        Paddle { side, height: 1, y }
    }

    fn ball(x: i32, y: i32, dy: Direction) -> Ball {
        Ball {
            x,
            y,
            dx: Direction::Negative,
            dy,
        }
    }

    /// New top row for a paddle resting on row 10
    fn steer_toward(bot: &mut TeleportBot, ball: Ball) -> i32 {
        let resting = paddle(bot.side, 10);
        bot.steer(&resting, &ball, &Field::STANDARD, InputSignal::None)
    }

    #[test]
    fn test_left_activation_boundary() {
        let mut bot = TeleportBot::new(Side::Left, 4);

        assert_eq!(steer_toward(&mut bot, ball(5, 3, Direction::Positive)), 10);
        assert_eq!(steer_toward(&mut bot, ball(4, 3, Direction::Positive)), 4);
    }

    #[test]
    fn test_right_activation_boundary() {
        let mut bot = TeleportBot::new(Side::Right, 4);

        assert_eq!(steer_toward(&mut bot, ball(35, 3, Direction::Negative)), 10);
        assert_eq!(steer_toward(&mut bot, ball(36, 3, Direction::Negative)), 2);
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut bot = TeleportBot::new(Side::Left, 4);

        assert_eq!(steer_toward(&mut bot, ball(3, 1, Direction::Negative)), 1);
        assert_eq!(steer_toward(&mut bot, ball(3, 20, Direction::Positive)), 20);
    }
}
