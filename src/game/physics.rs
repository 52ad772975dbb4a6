use super::field::Side;
use super::input::InputSignal;
use super::state::GameState;

/// What happened during one update step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub ball_moved: bool,
    pub wall_bounce: bool,
    pub left_paddle_bounce: bool,
    pub right_paddle_bounce: bool,
    pub scored: Option<Side>,
}

impl TickReport {
    /// Paddles that returned the ball this step, left first. Both can fire
    /// when the catch planes coincide on a very narrow field.
    pub fn paddle_bounces(&self) -> impl Iterator<Item = Side> {
        [
            (Side::Left, self.left_paddle_bounce),
            (Side::Right, self.right_paddle_bounce),
        ]
        .into_iter()
        .filter_map(|(side, hit)| hit.then_some(side))
    }
}

/// Advance the game by one loop iteration.
///
/// Both paddles move every call (left first); the ball only moves once every
/// `ball_tick_max` calls. Checks run in a fixed order: wall, paddles, right
/// score, left score.
pub fn tick(state: &mut GameState, signal: InputSignal) -> TickReport {
    let mut report = TickReport::default();

    state.left.take_turn(&state.ball, &state.field, signal);
    state.right.take_turn(&state.ball, &state.field, signal);

    state.ball_tick += 1;
    if state.ball_tick < state.ball_tick_max {
        return report;
    }
    state.ball_tick = 0;

    advance_ball(state, &mut report);
    report
}

fn advance_ball(state: &mut GameState, report: &mut TickReport) {
    let field = state.field;
    let ball = &mut state.ball;

    ball.x += ball.dx.delta();
    ball.y += ball.dy.delta();
    report.ball_moved = true;

    if ball.y <= 1 || ball.y >= field.height {
        ball.dy = ball.dy.flipped();
        report.wall_bounce = true;
    }

    for player in [&state.left, &state.right] {
        let side = player.paddle.side;
        if ball.x == field.catch_plane(side) && player.paddle.covers(ball.y) {
            ball.dx = ball.dx.flipped();
            match side {
                Side::Left => report.left_paddle_bounce = true,
                Side::Right => report.right_paddle_bounce = true,
            }
        }
    }

    let scorer = if ball.x <= 1 {
        Some(Side::Right)
    } else if ball.x >= field.width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        // Serve goes back toward the side that just won the point
        ball.recenter(&field, scorer);
        state.award_point(scorer);
        report.scored = Some(scorer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AIConfig;
    use crate::game::{Ball, Direction, Field, Player};
    use crate::players::{self, HumanController, PlayerKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn human(side: Side) -> Player {
        Player::new(side, Box::new(HumanController::new(side)), &Field::STANDARD)
    }

    fn two_humans() -> GameState {
        GameState::new(Field::STANDARD, human(Side::Left), human(Side::Right))
    }

    fn place_ball(state: &mut GameState, x: i32, y: i32, dx: Direction, dy: Direction) {
        state.ball = Ball { x, y, dx, dy };
    }

    /// Tick until the ball has moved once
    fn ball_step(state: &mut GameState) -> TickReport {
        loop {
            let report = tick(state, InputSignal::None);
            if report.ball_moved {
                return report;
            }
        }
    }

    #[test]
    fn test_ball_moves_every_second_tick() {
        let mut state = two_humans();

        let first = tick(&mut state, InputSignal::None);
        assert!(!first.ball_moved);
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball_tick, 1);

        let second = tick(&mut state, InputSignal::None);
        assert!(second.ball_moved);
        assert_eq!((state.ball.x, state.ball.y), (21, 11));
        assert_eq!(state.ball_tick, 0);
    }

    #[test]
    fn test_paddles_move_on_every_tick() {
        let mut state = two_humans();

        tick(&mut state, InputSignal::LeftPaddleUp);
        assert_eq!(state.left.paddle.y, 7);
        tick(&mut state, InputSignal::RightPaddleDown);
        assert_eq!(state.right.paddle.y, 9);
        assert_eq!(state.left.paddle.y, 7);
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = two_humans();
        place_ball(&mut state, 20, 2, Direction::Positive, Direction::Negative);

        let report = ball_step(&mut state);
        assert!(report.wall_bounce);
        assert_eq!(state.ball.y, 1);
        assert_eq!(state.ball.dy, Direction::Positive);

        ball_step(&mut state);
        assert_eq!(state.ball.y, 2);
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut state = two_humans();
        state.right.paddle.y = 10;
        place_ball(&mut state, 20, 10, Direction::Positive, Direction::Positive);

        let mut flips = 0;
        while state.ball.x < 38 {
            let before = state.ball.dx;
            ball_step(&mut state);
            if state.ball.dx != before {
                flips += 1;
            }
        }

        assert_eq!(state.ball.x, 38);
        assert_eq!(state.ball.y, 12);
        assert_eq!(state.ball.dx, Direction::Negative);
        assert_eq!(flips, 1);
        assert_eq!(state.scores(), (0, 0));

        // Heads back toward the left without further bounces or points
        for _ in 0..5 {
            let report = ball_step(&mut state);
            assert_eq!(report.paddle_bounces().count(), 0);
            assert_eq!(report.scored, None);
        }
        assert_eq!(state.ball.x, 33);
    }

    #[test]
    fn test_paddle_bounce_is_reported() {
        let mut state = two_humans();
        state.left.paddle.y = 1;
        place_ball(&mut state, 4, 3, Direction::Negative, Direction::Positive);

        let report = ball_step(&mut state);
        assert_eq!(report.paddle_bounces().collect::<Vec<_>>(), vec![Side::Left]);
        assert_eq!(state.ball.dx, Direction::Positive);
    }

    #[test]
    fn test_both_paddles_can_bounce_in_one_step() {
        // On a 5-wide field both catch planes sit on column 3
        let field = Field {
            width: 5,
            height: 20,
        };
        let left = Player::new(Side::Left, Box::new(HumanController::new(Side::Left)), &field);
        let right = Player::new(Side::Right, Box::new(HumanController::new(Side::Right)), &field);
        let mut state = GameState::new(field, left, right);
        place_ball(&mut state, 2, 9, Direction::Positive, Direction::Positive);

        let report = ball_step(&mut state);

        assert!(report.left_paddle_bounce);
        assert!(report.right_paddle_bounce);
        assert_eq!(
            report.paddle_bounces().collect::<Vec<_>>(),
            vec![Side::Left, Side::Right]
        );
        // Two flips cancel out
        assert_eq!(state.ball.dx, Direction::Positive);
        assert_eq!(state.ball.x, 3);
        assert_eq!(report.scored, None);
    }

    #[test]
    fn test_right_scores_when_ball_passes_left() {
        let mut state = two_humans();
        state.left.paddle.y = 15;
        place_ball(&mut state, 2, 5, Direction::Negative, Direction::Negative);

        let report = ball_step(&mut state);

        assert_eq!(report.scored, Some(Side::Right));
        assert_eq!(state.scores(), (0, 1));
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball.dx, Direction::Positive);
        assert_eq!(state.ball.dy, Direction::Negative);
    }

    #[test]
    fn test_ball_reaching_column_zero_scores_right() {
        let mut state = two_humans();
        state.left.paddle.y = 15;
        place_ball(&mut state, 1, 6, Direction::Negative, Direction::Positive);

        let report = ball_step(&mut state);

        assert_eq!(report.scored, Some(Side::Right));
        assert_eq!(state.score_right, 1);
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball.dx, Direction::Positive);
        assert_eq!(state.ball.dy, Direction::Positive);
    }

    #[test]
    fn test_left_scores_when_ball_passes_right() {
        let mut state = two_humans();
        state.right.paddle.y = 1;
        place_ball(&mut state, 39, 15, Direction::Positive, Direction::Positive);

        let report = ball_step(&mut state);

        assert_eq!(report.scored, Some(Side::Left));
        assert_eq!(state.scores(), (1, 0));
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball.dx, Direction::Negative);
        assert_eq!(state.ball.dy, Direction::Positive);
    }

    #[test]
    fn test_score_keeps_dy_after_wall_flip() {
        let mut state = two_humans();
        state.right.paddle.y = 10;
        // Lands on the top wall and the goal line in the same step
        place_ball(&mut state, 39, 2, Direction::Positive, Direction::Negative);

        let report = ball_step(&mut state);

        assert!(report.wall_bounce);
        assert_eq!(report.scored, Some(Side::Left));
        assert_eq!(state.ball.dy, Direction::Positive);
    }

    #[test]
    fn test_invariants_hold_over_long_bot_match() {
        let field = Field::STANDARD;
        let ai = AIConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for (left, right) in [
            (PlayerKind::FollowAi, PlayerKind::PredictAi),
            (PlayerKind::TeleportAi, PlayerKind::FollowAi),
            (PlayerKind::PredictAi, PlayerKind::TeleportAi),
        ] {
            let mut state = GameState::new(
                field,
                players::create_player(left, Side::Left, &field, &ai, &mut rng),
                players::create_player(right, Side::Right, &field, &ai, &mut rng),
            );

            for _ in 0..5000 {
                let before = state.score_left + state.score_right;
                let (old_left, old_right) = state.scores();
                let report = tick(&mut state, InputSignal::None);
                let after = state.score_left + state.score_right;

                assert!(state.score_left >= old_left && state.score_right >= old_right);
                if report.scored.is_some() {
                    assert_eq!(after, before + 1);
                } else {
                    assert_eq!(after, before);
                }

                for player in [&state.left, &state.right] {
                    let paddle = &player.paddle;
                    assert!(paddle.y >= 1);
                    assert!(paddle.y <= field.height - paddle.height + 1);
                }
                assert!(state.ball.x > 1 && state.ball.x < field.width);
                assert!(state.ball.y >= 1 && state.ball.y <= field.height);
            }
        }
    }
}
