// Trajectory prediction for AI bots

use crate::game::{Ball, Field};

/// Predict which row the ball will be on when it reaches column `target_x`
///
/// Walks the ball forward one cell at a time, reflecting off the top and
/// bottom walls exactly like the update step does. Paddles are ignored. Stops
/// after `max_steps` cells even if the column was never reached (the ball
/// may already be past it).
///
/// # Arguments
/// * `ball` - Current ball position and direction
/// * `field` - Field geometry (for wall reflection)
/// * `target_x` - Column to predict for, normally a paddle's catch plane
/// * `max_steps` - Simulation cap
pub fn predict_catch_row(ball: &Ball, field: &Field, target_x: i32, max_steps: u32) -> i32 {
    let mut x = ball.x;
    let mut y = ball.y;
    let mut dy = ball.dy;
    let mut steps = 0;

    while x != target_x && steps < max_steps {
        x += ball.dx.delta();
        y += dy.delta();
        if y <= 1 || y >= field.height {
            dy = dy.flipped();
        }
        steps += 1;
    }

    y
}
