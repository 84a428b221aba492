pub mod handicap;
pub mod leaderboard;
pub mod matchplay;
pub mod stableford;

pub use handicap::*;
pub use leaderboard::*;
pub use matchplay::*;
pub use stableford::*;
