//! Matching quality metrics.
//!
//! Summarizes how well a matching served its preference graph.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage | matched users / users |
//! | Slot fill rate | matched slots / distinct slots referenced |
//! | Open slots | referenced slots nobody holds |
//! | Unreachable users | users with no eligible slot at all |

use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{MatchResult, PreferenceGraph};

/// Matching performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingStats {
    /// Users in the graph.
    pub user_count: usize,
    /// Users who received a slot.
    pub matched_count: usize,
    /// Users without a slot.
    pub unmatched_count: usize,
    /// Distinct slots referenced by the graph.
    pub slot_count: usize,
    /// Referenced slots left unassigned.
    pub open_slot_count: usize,
    /// Users who selected no slot.
    pub unreachable_users: usize,
    /// Fraction of users matched (0.0..1.0).
    pub coverage: f64,
    /// Fraction of referenced slots filled (0.0..1.0).
    pub slot_fill_rate: f64,
}

impl MatchingStats {
    /// Computes metrics from a result and the graph it was computed from.
    pub fn calculate<U, S>(result: &MatchResult<U, S>, graph: &PreferenceGraph<U, S>) -> Self
    where
        U: Clone + Eq + Hash + Debug,
        S: Clone + Ord + Debug,
    {
        let user_count = graph.user_count();
        let slot_count = graph.distinct_slots().len();
        let matched_count = result.matched_count();
        let unreachable_users = graph.entries().filter(|(_, s)| s.is_empty()).count();

        // No users → nobody was left out.
        let coverage = if user_count == 0 {
            1.0
        } else {
            matched_count as f64 / user_count as f64
        };

        let slot_fill_rate = if slot_count == 0 {
            0.0
        } else {
            result.matched.len() as f64 / slot_count as f64
        };

        Self {
            user_count,
            matched_count,
            unmatched_count: result.unmatched_count(),
            slot_count,
            open_slot_count: slot_count.saturating_sub(result.matched.len()),
            unreachable_users,
            coverage,
            slot_fill_rate,
        }
    }

    /// Whether every user who selected at least one slot was matched.
    pub fn all_reachable_matched(&self) -> bool {
        self.unmatched_count == self.unreachable_users
    }
}
