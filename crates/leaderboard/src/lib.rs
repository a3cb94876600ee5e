//! Same-day leaderboard for the rep tracker.
//!
//! - [`aggregate`] folds a day's workout log entries into ranked rows
//! - [`LeaderboardService`] loads a day window from a store and ranks it

pub mod aggregate;
pub mod service;

pub use aggregate::{DEFAULT_DAILY_GOAL, LeaderboardRow, aggregate};
pub use service::LeaderboardService;
