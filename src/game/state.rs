use std::fmt;

use super::field::{Field, Side};
use super::input::InputSignal;
use crate::players::{Controller, PlayerKind};

/// Ball advances once every this many loop iterations; paddles move every one
pub const BALL_TICK_MAX: u32 = 2;

/// One axis of ball velocity. Always exactly one cell per step, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    pub fn delta(self) -> i32 {
        match self {
            Direction::Negative => -1,
            Direction::Positive => 1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Negative => Direction::Positive,
            Direction::Positive => Direction::Negative,
        }
    }

    /// Horizontal direction that travels toward `side`
    pub fn toward(side: Side) -> Self {
        match side {
            Side::Left => Direction::Negative,
            Side::Right => Direction::Positive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: Direction,
    pub dy: Direction,
}

impl Ball {
    /// Centered ball heading right and down
    pub fn new(field: &Field) -> Self {
        let (x, y) = field.center();
        Self {
            x,
            y,
            dx: Direction::Positive,
            dy: Direction::Positive,
        }
    }

    /// Serve from the centre toward `receiver`, keeping the vertical direction
    pub fn recenter(&mut self, field: &Field, receiver: Side) {
        let (x, y) = field.center();
        self.x = x;
        self.y = y;
        self.dx = Direction::toward(receiver);
    }

    pub fn moving_toward(&self, side: Side) -> bool {
        self.dx == Direction::toward(side)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub height: i32,
    /// Top row of the paddle
    pub y: i32,
}

impl Paddle {
    pub fn new(side: Side, height: i32, field: &Field) -> Self {
        let y = field.clamp_paddle_top(field.height / 2 - height / 2, height);
        Self { side, height, y }
    }

    /// Last row the paddle occupies
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn covers(&self, row: i32) -> bool {
        self.y <= row && row <= self.bottom()
    }

    pub fn center(&self) -> i32 {
        self.y + self.height / 2
    }
}

/// A paddle together with whatever steers it
pub struct Player {
    pub paddle: Paddle,
    controller: Box<dyn Controller>,
}

impl Player {
    pub fn new(side: Side, controller: Box<dyn Controller>, field: &Field) -> Self {
        let paddle = Paddle::new(side, controller.kind().paddle_height(), field);
        Self { paddle, controller }
    }

    pub fn kind(&self) -> PlayerKind {
        self.controller.kind()
    }

    /// Ask the controller for a new top row and store it clamped to the field
    pub fn take_turn(&mut self, ball: &Ball, field: &Field, signal: InputSignal) {
        let target = self.controller.steer(&self.paddle, ball, field, signal);
        self.paddle.y = field.clamp_paddle_top(target, self.paddle.height);
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("paddle", &self.paddle)
            .field("controller", &self.controller)
            .finish()
    }
}

#[derive(Debug)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub left: Player,
    pub right: Player,
    pub score_left: u32,
    pub score_right: u32,
    pub ball_tick: u32,
    pub ball_tick_max: u32,
}

impl GameState {
    pub fn new(field: Field, left: Player, right: Player) -> Self {
        Self {
            field,
            ball: Ball::new(&field),
            left,
            right,
            score_left: 0,
            score_right: 0,
            ball_tick: 0,
            ball_tick_max: BALL_TICK_MAX,
        }
    }

    /// Award a point to `side`
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score_left, self.score_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::human::HumanController;

    fn human(side: Side) -> Player {
        Player::new(side, Box::new(HumanController::new(side)), &Field::STANDARD)
    }

    #[test]
    fn test_new_state_is_centered() {
        let state = GameState::new(Field::STANDARD, human(Side::Left), human(Side::Right));

        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball.dx, Direction::Positive);
        assert_eq!(state.ball.dy, Direction::Positive);
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.ball_tick_max, 2);
        assert_eq!(state.left.paddle.y, 8);
        assert_eq!(state.right.paddle.height, 4);
    }

    #[test]
    fn test_paddle_span() {
        let paddle = Paddle {
            side: Side::Left,
            height: 4,
            y: 5,
        };
        assert!(!paddle.covers(4));
        assert!(paddle.covers(5));
        assert!(paddle.covers(8));
        assert!(!paddle.covers(9));
        assert_eq!(paddle.center(), 7);
    }

    #[test]
    fn test_recenter_keeps_vertical_direction() {
        let field = Field::STANDARD;
        let mut ball = Ball {
            x: 1,
            y: 3,
            dx: Direction::Negative,
            dy: Direction::Negative,
        };
        ball.recenter(&field, Side::Right);

        assert_eq!((ball.x, ball.y), (20, 10));
        assert_eq!(ball.dx, Direction::Positive);
        assert_eq!(ball.dy, Direction::Negative);
    }
}
