//! Route handlers organized by domain.

pub mod assets;
pub mod auth;
pub mod house;
pub mod leaderboard;
pub mod pages;
