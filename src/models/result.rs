//! Matching result model.
//!
//! A result pairs slots with the users assigned to them and lists the
//! users who could not be placed. Every user of the input graph is in
//! exactly one of the two.

use serde::{Deserialize, Serialize};

/// A slot and the users assigned to it.
///
/// The matching engine assigns exactly one user per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment<U, S> {
    /// Assigned slot.
    pub slot: S,
    /// Users holding the slot.
    pub users: Vec<U>,
}

impl<U, S> SlotAssignment<U, S> {
    /// Creates an assignment of a single user.
    pub fn single(slot: S, user: U) -> Self {
        Self {
            slot,
            users: vec![user],
        }
    }
}

/// Output of the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult<U, S> {
    /// Assignments, ascending by slot.
    pub matched: Vec<SlotAssignment<U, S>>,
    /// Users without a slot, in input order.
    pub unmatched: Vec<U>,
}

impl<U, S> MatchResult<U, S>
where
    U: PartialEq,
    S: PartialEq,
{
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            matched: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    /// Number of users who received a slot.
    pub fn matched_count(&self) -> usize {
        self.matched.iter().map(|a| a.users.len()).sum()
    }

    /// Number of users without a slot.
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Whether every user received a slot.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// Iterates `(slot, user)` pairs in slot order.
    pub fn pairs(&self) -> impl Iterator<Item = (&S, &U)> {
        self.matched
            .iter()
            .flat_map(|a| a.users.iter().map(move |u| (&a.slot, u)))
    }

    /// The slot assigned to a user.
    pub fn slot_for(&self, user: &U) -> Option<&S> {
        self.pairs().find(|(_, u)| *u == user).map(|(s, _)| s)
    }

    /// The user holding a slot.
    pub fn user_for(&self, slot: &S) -> Option<&U> {
        self.matched
            .iter()
            .find(|a| a.slot == *slot)
            .and_then(|a| a.users.first())
    }

    /// Whether a user received a slot.
    pub fn is_matched(&self, user: &U) -> bool {
        self.slot_for(user).is_some()
    }
}

impl<U, S> Default for MatchResult<U, S>
where
    U: PartialEq,
    S: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> MatchResult<&'static str, u32> {
        MatchResult {
            matched: vec![
                SlotAssignment::single(9, "bob"),
                SlotAssignment::single(10, "alice"),
            ],
            unmatched: vec!["carol"],
        }
    }

    #[test]
    fn test_counts() {
        let r = sample_result();
        assert_eq!(r.matched_count(), 2);
        assert_eq!(r.unmatched_count(), 1);
        assert!(!r.is_complete());
    }

    #[test]
    fn test_lookups() {
        let r = sample_result();
        assert_eq!(r.slot_for(&"alice"), Some(&10));
        assert_eq!(r.slot_for(&"carol"), None);
        assert_eq!(r.user_for(&9), Some(&"bob"));
        assert_eq!(r.user_for(&11), None);
        assert!(r.is_matched(&"bob"));
        assert!(!r.is_matched(&"carol"));
    }

    #[test]
    fn test_pairs_in_slot_order() {
        let r = sample_result();
        let pairs: Vec<_> = r.pairs().collect();
        assert_eq!(pairs, vec![(&9u32, &"bob"), (&10u32, &"alice")]);
    }

    #[test]
    fn test_empty_result() {
        let r: MatchResult<String, u32> = MatchResult::default();
        assert_eq!(r.matched_count(), 0);
        assert!(r.is_complete());
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "matched": [
                    { "slot": 9, "users": ["bob"] },
                    { "slot": 10, "users": ["alice"] }
                ],
                "unmatched": ["carol"]
            })
        );
    }
}
