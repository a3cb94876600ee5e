//! HTTP handlers and the state they share.

pub mod goals;
pub mod health;
pub mod leaderboard;
pub mod metrics;
pub mod workouts;

use ::leaderboard::LeaderboardService;
use serde_json::Number;
use workout_store::WorkoutStore;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: WorkoutStore> {
    pub store: S,
    pub leaderboard: LeaderboardService<S>,
}

impl<S: WorkoutStore + Clone> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            leaderboard: LeaderboardService::new(store.clone()),
            store,
        }
    }
}

/// Reads a JSON number as a whole number, accepting `10` and `10.0` alike.
///
/// Fractional and out-of-range values yield `None`.
pub(crate) fn whole_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_accepts_integral_floats() {
        assert_eq!(whole_number(&Number::from(12)), Some(12));
        assert_eq!(whole_number(&Number::from(-3)), Some(-3));
        assert_eq!(whole_number(&Number::from_f64(10.0).unwrap()), Some(10));
    }

    #[test]
    fn whole_number_rejects_fractions_and_huge_values() {
        assert_eq!(whole_number(&Number::from_f64(2.5).unwrap()), None);
        assert_eq!(whole_number(&Number::from(u64::MAX)), None);
        assert_eq!(whole_number(&Number::from_f64(1e300).unwrap()), None);
    }
}
