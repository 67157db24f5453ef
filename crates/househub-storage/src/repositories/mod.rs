//! Typed repositories over the JSON datasets.

pub mod house;
pub mod leaderboard;
pub mod user;

pub use house::HouseRepository;
pub use leaderboard::LeaderboardRepository;
pub use user::UserRepository;
