//! The match loop and its pacing

pub mod pacing;
pub mod run;

pub use pacing::Pacing;
pub use run::{run_match, MatchSummary};
