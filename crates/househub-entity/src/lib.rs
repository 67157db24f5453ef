//! # househub-entity
//!
//! Domain entity models for HouseHub. Every struct in this crate is a
//! record of one of the JSON datasets or a value derived from one.
//! Field names follow the camelCase layout of the datasets on disk.

pub mod house;
pub mod leaderboard;
pub mod user;

pub use house::House;
pub use leaderboard::{LeaderboardEntry, RankedEntry};
pub use user::{NewUser, User, UserId, UserIdentity, UserProfile};
