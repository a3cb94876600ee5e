//! Leaderboard aggregation: per-user rep totals for one day.

use std::collections::HashMap;

use common::Username;
use serde::Serialize;
use workout_store::WorkoutLogEntry;

/// Goal shown for users who have not set one.
pub const DEFAULT_DAILY_GOAL: u32 = 100;

/// One ranked line of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub username: Username,
    pub total_reps: u64,
    pub daily_goal: u32,
}

struct Tally {
    username: Username,
    total_reps: u64,
    daily_goal: Option<u32>,
}

/// Folds workout log entries into leaderboard rows.
///
/// The entries are expected to be pre-filtered to a single day; no time
/// filtering happens here. Each username yields exactly one row whose
/// `total_reps` is the sum of its entries. The goal comes from the first entry
/// of that user carrying one, falling back to [`DEFAULT_DAILY_GOAL`].
///
/// Rows are ordered by `total_reps`, highest first. Equal totals keep the
/// order in which their users first appeared.
pub fn aggregate<I>(entries: I) -> Vec<LeaderboardRow>
where
    I: IntoIterator<Item = WorkoutLogEntry>,
{
    let mut index: HashMap<Username, usize> = HashMap::new();
    let mut tallies: Vec<Tally> = Vec::new();

    for entry in entries {
        let slot = *index.entry(entry.username.clone()).or_insert_with(|| {
            tallies.push(Tally {
                username: entry.username.clone(),
                total_reps: 0,
                daily_goal: None,
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[slot];
        tally.total_reps += u64::from(entry.reps);
        if tally.daily_goal.is_none() {
            tally.daily_goal = entry.daily_goal;
        }
    }

    let mut rows: Vec<LeaderboardRow> = tallies
        .into_iter()
        .map(|t| LeaderboardRow {
            username: t.username,
            total_reps: t.total_reps,
            daily_goal: t.daily_goal.unwrap_or(DEFAULT_DAILY_GOAL),
        })
        .collect();

    // `sort_by` is stable, so ties stay in first-seen order.
    rows.sort_by(|a, b| b.total_reps.cmp(&a.total_reps));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(user: &str, reps: u32, goal: Option<u32>) -> WorkoutLogEntry {
        WorkoutLogEntry {
            username: Username::parse(user).unwrap(),
            reps,
            created_at: chrono::Utc::now(),
            daily_goal: goal,
        }
    }

    fn row(user: &str, total_reps: u64, daily_goal: u32) -> LeaderboardRow {
        LeaderboardRow {
            username: Username::parse(user).unwrap(),
            total_reps,
            daily_goal,
        }
    }

    #[test]
    fn empty_input_gives_empty_leaderboard() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn sums_per_user_and_ranks_descending() {
        let rows = aggregate(vec![
            entry("a", 10, Some(50)),
            entry("b", 20, Some(30)),
            entry("a", 5, Some(50)),
        ]);

        assert_eq!(rows, vec![row("b", 20, 30), row("a", 15, 50)]);
    }

    #[test]
    fn missing_goal_falls_back_to_default() {
        let rows = aggregate(vec![entry("c", 3, None)]);
        assert_eq!(rows, vec![row("c", 3, DEFAULT_DAILY_GOAL)]);
    }

    #[test]
    fn goal_taken_from_first_entry_that_has_one() {
        let rows = aggregate(vec![
            entry("d", 1, None),
            entry("d", 1, Some(40)),
            entry("d", 1, Some(20)),
        ]);

        assert_eq!(rows, vec![row("d", 3, 40)]);
    }

    #[test]
    fn ties_keep_each_user_once() {
        let rows = aggregate(vec![
            entry("x", 7, None),
            entry("y", 3, None),
            entry("y", 4, None),
        ]);

        assert_eq!(rows.len(), 2);
        let names: HashSet<_> = rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, HashSet::from(["x", "y"]));
        assert!(rows.iter().all(|r| r.total_reps == 7));
    }

    #[test]
    fn zero_rep_entries_still_produce_a_row() {
        let rows = aggregate(vec![entry("z", 0, Some(10)), entry("w", 2, None)]);
        assert_eq!(rows, vec![row("w", 2, 100), row("z", 0, 10)]);
    }

    #[test]
    fn totals_do_not_overflow_u32() {
        let rows = aggregate(vec![entry("big", u32::MAX, None), entry("big", u32::MAX, None)]);
        assert_eq!(rows[0].total_reps, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn invariants_hold_for_mixed_input() {
        let input: Vec<_> = (0..200u32)
            .map(|i| {
                let user = format!("user-{}", i % 17);
                let goal = if i % 3 == 0 { Some(i % 50 + 1) } else { None };
                entry(&user, (i * 7919) % 61, goal)
            })
            .collect();

        let mut expected: HashMap<String, u64> = HashMap::new();
        for e in &input {
            *expected.entry(e.username.to_string()).or_default() += u64::from(e.reps);
        }

        let rows = aggregate(input);

        assert_eq!(rows.len(), expected.len());
        for r in &rows {
            assert_eq!(r.total_reps, expected[r.username.as_str()]);
        }
        assert!(rows.windows(2).all(|w| w[0].total_reps >= w[1].total_reps));
    }

    #[test]
    fn row_serializes_to_expected_shape() {
        let json = serde_json::to_value(row("amy", 12, 50)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "username": "amy", "total_reps": 12, "daily_goal": 50 })
        );
    }
}
