use std::io;
use std::time::Instant;

use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, trace};

use crate::config::DisplayConfig;
use crate::game::{self, Field, GameState, InputSignal, InputSource, Side};
use crate::sound::{Sound, SoundEvent};
use crate::ui;

use super::pacing::{limit_frame_rate, pause, Pacing};

/// Final result handed to the end-of-match screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub score_left: u32,
    pub score_right: u32,
    pub ticks: u64,
}

impl MatchSummary {
    pub fn winner(&self) -> Option<Side> {
        match self.score_left.cmp(&self.score_right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Draw only the resize warning and wait out the retry delay when the
/// terminal cannot hold the field. Returns whether it stalled.
pub fn stall_if_undersized<B: Backend>(
    terminal: &mut Terminal<B>,
    field: &Field,
    pacing: &Pacing,
) -> io::Result<bool> {
    let size = terminal.size()?;
    if ui::fits(size, field) {
        return Ok(false);
    }

    debug!(width = size.width, height = size.height, "terminal too small, waiting");
    terminal.draw(|f| ui::render_too_small(f, field))?;
    pause(pacing.resize_retry);
    Ok(true)
}

/// Run one match until the quit signal arrives.
///
/// Each iteration: wait out an undersized terminal, draw, poll one input,
/// then advance the game and pace the frame.
pub fn run_match<B: Backend, I: InputSource, S: Sound>(
    terminal: &mut Terminal<B>,
    state: &mut GameState,
    input: &mut I,
    sound: &mut S,
    pacing: &Pacing,
    display: &DisplayConfig,
    controls_hint: &str,
) -> io::Result<MatchSummary> {
    info!(
        left = state.left.kind().display_name(),
        right = state.right.kind().display_name(),
        "match started"
    );

    let mut ticks: u64 = 0;

    loop {
        let frame_start = Instant::now();

        if stall_if_undersized(terminal, &state.field, pacing)? {
            continue;
        }

        terminal.draw(|f| ui::render(f, state, display, controls_hint))?;

        let signal = input.poll()?;
        if signal == InputSignal::Quit {
            break;
        }

        let report = game::tick(state, signal);
        ticks += 1;

        if let Some(scorer) = report.scored {
            info!(
                scorer = scorer.name(),
                left = state.score_left,
                right = state.score_right,
                "point scored"
            );
            sound.beep(SoundEvent::Score);
            pause(pacing.after_score);
            continue;
        }

        if report.ball_moved {
            trace!(x = state.ball.x, y = state.ball.y, wall = report.wall_bounce, "ball step");
        }

        for side in report.paddle_bounces() {
            debug!(side = side.name(), x = state.ball.x, y = state.ball.y, "paddle hit");
            sound.beep(SoundEvent::Paddle);
        }

        limit_frame_rate(frame_start, pacing.frame);
    }

    let (score_left, score_right) = state.scores();
    let summary = MatchSummary {
        score_left,
        score_right,
        ticks,
    };
    info!(
        left = summary.score_left,
        right = summary.score_right,
        ticks = summary.ticks,
        "match ended"
    );

    Ok(summary)
}
