//! Slot table: the slot-keyed booking sheet.
//!
//! Holds the registered slots (each with the users who selected it) and
//! the registered users. This is the data a schedule builder keeps
//! between matching runs; it is converted into a [`PreferenceGraph`]
//! whenever a matching is needed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::PreferenceGraph;
use crate::error::MatchError;

/// A registered slot and the users who selected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRow<U, S> {
    /// The slot.
    pub slot: S,
    /// Users who selected this slot, in registration order.
    pub users: Vec<U>,
}

/// Registered slots and users.
///
/// Rows are kept sorted by slot. Registration is all-or-nothing: a
/// rejected call leaves the table unchanged.
///
/// # Example
/// ```
/// use u_appoint::models::SlotTable;
///
/// let mut table = SlotTable::new();
/// table.add_slot(10).unwrap();
/// table.add_slot(9).unwrap();
/// table.add_user("alice", &[10]).unwrap();
///
/// assert!(table.add_slot(10).is_err());
/// assert!(table.add_user("bob", &[12]).is_err());
/// assert_eq!(table.slots().copied().collect::<Vec<_>>(), vec![9, 10]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTable<U, S> {
    rows: Vec<SlotRow<U, S>>,
    users: Vec<U>,
}

impl<U, S> SlotTable<U, S>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Registers a new slot.
    ///
    /// # Errors
    /// [`MatchError::DuplicateSlot`] if an equal slot is already registered.
    pub fn add_slot(&mut self, slot: S) -> Result<(), MatchError> {
        match self.rows.binary_search_by(|row| row.slot.cmp(&slot)) {
            Ok(_) => Err(MatchError::DuplicateSlot(format!("{slot:?}"))),
            Err(pos) => {
                self.rows.insert(
                    pos,
                    SlotRow {
                        slot,
                        users: Vec::new(),
                    },
                );
                Ok(())
            }
        }
    }

    /// Registers a user and the slots they selected.
    ///
    /// Selecting no slots is allowed; such a user is still part of every
    /// matching and ends up unmatched.
    ///
    /// # Errors
    /// - [`MatchError::DuplicateUser`] if the user is already registered.
    /// - [`MatchError::UnknownSlot`] if any selected slot is not registered.
    pub fn add_user(&mut self, user: U, slots: &[S]) -> Result<(), MatchError> {
        if self.users.contains(&user) {
            return Err(MatchError::DuplicateUser(format!("{user:?}")));
        }

        let mut positions = Vec::with_capacity(slots.len());
        for slot in slots {
            let pos = self
                .rows
                .binary_search_by(|row| row.slot.cmp(slot))
                .map_err(|_| MatchError::UnknownSlot(format!("{slot:?}")))?;
            positions.push(pos);
        }

        let mut seen = HashSet::new();
        for pos in positions {
            if seen.insert(pos) {
                self.rows[pos].users.push(user.clone());
            }
        }
        self.users.push(user);
        Ok(())
    }

    /// Rows in ascending slot order.
    pub fn rows(&self) -> &[SlotRow<U, S>] {
        &self.rows
    }

    /// Registered slots, ascending.
    pub fn slots(&self) -> impl Iterator<Item = &S> {
        self.rows.iter().map(|r| &r.slot)
    }

    /// Registered users, in registration order.
    pub fn users(&self) -> &[U] {
        &self.users
    }

    /// Number of registered slots.
    pub fn slot_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Builds the preference graph for the current registrations.
    ///
    /// Users keep registration order; each user's slots are ascending.
    /// Users who selected nothing are included with an empty list.
    pub fn to_preference_graph(&self) -> PreferenceGraph<U, S> {
        self.users
            .iter()
            .map(|user| {
                let slots = self
                    .rows
                    .iter()
                    .filter(|row| row.users.contains(user))
                    .map(|row| row.slot.clone())
                    .collect();
                (user.clone(), slots)
            })
            .collect()
    }
}

impl<U, S> Default for SlotTable<U, S>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourSlot;

    fn sample_table() -> SlotTable<&'static str, u32> {
        let mut t = SlotTable::new();
        t.add_slot(11).unwrap();
        t.add_slot(10).unwrap();
        t.add_user("alice", &[10]).unwrap();
        t.add_user("bob", &[11, 10]).unwrap();
        t
    }

    #[test]
    fn test_rows_sorted_by_slot() {
        let t = sample_table();
        assert_eq!(t.slots().copied().collect::<Vec<_>>(), vec![10, 11]);
        assert_eq!(t.rows()[0].users, vec!["alice", "bob"]);
        assert_eq!(t.rows()[1].users, vec!["bob"]);
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let mut t = sample_table();
        assert_eq!(t.add_slot(10), Err(MatchError::DuplicateSlot("10".into())));
        assert_eq!(t.slot_count(), 2);
    }

    #[test]
    fn test_duplicate_hour_slot_rejected() {
        // Different instants in the same hour are the same slot.
        let mut t: SlotTable<String, HourSlot> = SlotTable::new();
        t.add_slot(HourSlot::from_timestamp_ms(3_600_000 + 5)).unwrap();
        assert!(matches!(
            t.add_slot(HourSlot::from_timestamp_ms(3_600_000 + 999)),
            Err(MatchError::DuplicateSlot(_))
        ));
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let mut t = sample_table();
        assert_eq!(
            t.add_user("alice", &[11]),
            Err(MatchError::DuplicateUser("\"alice\"".into()))
        );
        assert_eq!(t.user_count(), 2);
        assert_eq!(t.rows()[1].users, vec!["bob"]);
    }

    #[test]
    fn test_unknown_slot_leaves_table_unchanged() {
        let mut t = sample_table();
        let before = t.clone();
        assert_eq!(
            t.add_user("carol", &[10, 99]),
            Err(MatchError::UnknownSlot("99".into()))
        );
        assert_eq!(t, before);
    }

    #[test]
    fn test_user_without_slots() {
        let mut t = sample_table();
        t.add_user("carol", &[]).unwrap();
        let g = t.to_preference_graph();
        assert_eq!(g.eligible_slots(&"carol"), Some(&[][..]));
    }

    #[test]
    fn test_repeated_selection_counted_once() {
        let mut t = sample_table();
        t.add_user("dave", &[11, 11]).unwrap();
        assert_eq!(t.rows()[1].users, vec!["bob", "dave"]);
    }

    #[test]
    fn test_to_preference_graph() {
        let g = sample_table().to_preference_graph();
        let users: Vec<_> = g.users().copied().collect();
        assert_eq!(users, vec!["alice", "bob"]);
        // Slot order is ascending regardless of selection order.
        assert_eq!(g.eligible_slots(&"bob"), Some(&[10, 11][..]));
    }
}
