// Playing field geometry
// All positions are 1-based cells inside the border

/// Fixed logical grid the game runs on.
///
/// Passed by value into every component instead of living in globals; the
/// game always uses [`Field::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl Field {
    pub const STANDARD: Field = Field {
        width: 40,
        height: 20,
    };

    /// Ball spawn point after a score
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    /// Column where a paddle can intercept the ball
    pub fn catch_plane(&self, side: Side) -> i32 {
        match side {
            Side::Left => 3,
            Side::Right => self.width - 2,
        }
    }

    /// Column the paddle glyphs are drawn in (one cell outside its catch plane)
    pub fn paddle_column(&self, side: Side) -> i32 {
        match side {
            Side::Left => 2,
            Side::Right => self.width - 1,
        }
    }

    /// Lowest legal top row for a paddle of `paddle_height` rows
    pub fn max_paddle_top(&self, paddle_height: i32) -> i32 {
        self.height - paddle_height + 1
    }

    /// Clamp a paddle top row into the field. Never wraps.
    pub fn clamp_paddle_top(&self, y: i32, paddle_height: i32) -> i32 {
        y.clamp(1, self.max_paddle_top(paddle_height).max(1))
    }

    /// Smallest terminal that can show the field: (columns, rows).
    /// Border on both sides, plus a spare row and a controls hint below.
    pub fn min_terminal_size(&self) -> (u16, u16) {
        ((self.width + 2) as u16, (self.height + 4) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_planes() {
        let field = Field::STANDARD;
        assert_eq!(field.catch_plane(Side::Left), 3);
        assert_eq!(field.catch_plane(Side::Right), 38);
        assert_eq!(field.center(), (20, 10));
    }

    #[test]
    fn test_clamp_paddle_top() {
        let field = Field::STANDARD;
        assert_eq!(field.clamp_paddle_top(0, 4), 1);
        assert_eq!(field.clamp_paddle_top(-7, 4), 1);
        assert_eq!(field.clamp_paddle_top(17, 4), 17);
        assert_eq!(field.clamp_paddle_top(18, 4), 17);
        assert_eq!(field.clamp_paddle_top(20, 1), 20);
        assert_eq!(field.clamp_paddle_top(21, 1), 20);
    }

    #[test]
    fn test_min_terminal_size() {
        assert_eq!(Field::STANDARD.min_terminal_size(), (42, 24));
    }
}
