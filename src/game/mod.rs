pub mod field;
pub mod input;
pub mod physics;
pub mod state;

pub use field::{Field, Side};
pub use input::{InputSignal, InputSource, KeyMap, Keyboard, MenuSignal, PaddleMove};
pub use physics::{tick, TickReport};
pub use state::{Ball, Direction, GameState, Paddle, Player};
