//! # househub-service
//!
//! Business logic for HouseHub. Each service wraps the repositories it
//! needs and is built once at startup with its dependencies passed in as
//! `Arc` references.

pub mod account;
pub mod house;
pub mod leaderboard;

pub use account::{AccountService, SignupInput};
pub use house::HouseService;
pub use leaderboard::{LeaderboardService, rank_entries};
