pub mod attestation;
pub mod campaign_state;
pub mod leaderboard_state;

pub use attestation::*;
pub use campaign_state::*;
pub use leaderboard_state::*;
