//! # househub-storage
//!
//! Flat-file persistence for HouseHub. Each dataset is one JSON document
//! that is always read and written wholesale.
//!
//! - `json_file`: whole-document reads and atomic replace-on-write
//! - `repositories`: typed access to users, houses and the leaderboard
//! - `store`: opens all datasets from the storage configuration

pub mod json_file;
pub mod repositories;
pub mod store;

pub use json_file::JsonFile;
pub use repositories::{HouseRepository, LeaderboardRepository, UserRepository};
pub use store::DataStore;
