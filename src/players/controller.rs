// Controller trait for paddle steering

use std::fmt;

use super::PlayerKind;
use crate::game::{Ball, Field, InputSignal, Paddle};

/// Trait for anything that steers a paddle
///
/// Called once per loop iteration for each side. Controllers may keep
/// internal state between calls (a cached prediction, a random stream).
pub trait Controller: fmt::Debug {
    /// Decide the paddle's new top row
    ///
    /// # Arguments
    /// * `paddle` - The paddle being steered, at its current position
    /// * `ball` - Current ball position and direction
    /// * `field` - Field geometry
    /// * `signal` - The input polled this iteration (ignored by bots)
    ///
    /// # Returns
    /// The desired top row. Returning `paddle.y` leaves the paddle where it
    /// is; the caller clamps the result into the field.
    fn steer(&mut self, paddle: &Paddle, ball: &Ball, field: &Field, signal: InputSignal) -> i32;

    /// Which kind of player this is (drives paddle height and glyphs)
    fn kind(&self) -> PlayerKind;
}
