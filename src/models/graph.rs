//! Preference graph model.
//!
//! A preference graph is the bipartite input of the matching engine:
//! each user is paired with the ordered list of slots they accept.
//!
//! # Ordering
//! Entry order is the order in which users are processed, and each
//! user's slot order is the order in which their slots are tried. Both
//! only act as deterministic tie-breaks; neither is a priority weight.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Users and the slots each of them is willing to take.
///
/// # Example
/// ```
/// use u_appoint::models::PreferenceGraph;
///
/// let graph = PreferenceGraph::new()
///     .with_user("alice", vec![10])
///     .with_user("bob", vec![10, 11]);
/// assert_eq!(graph.user_count(), 2);
/// assert_eq!(graph.eligible_slots(&"bob"), Some(&[10, 11][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceGraph<U, S> {
    entries: Vec<(U, Vec<S>)>,
}

impl<U, S> PreferenceGraph<U, S>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a user with their eligible slots (builder form).
    pub fn with_user(mut self, user: U, slots: Vec<S>) -> Self {
        self.add_user(user, slots);
        self
    }

    /// Appends a user with their eligible slots.
    ///
    /// Uniqueness is not enforced here; the engine rejects graphs with
    /// repeated users during validation.
    pub fn add_user(&mut self, user: U, slots: Vec<S>) {
        self.entries.push((user, slots));
    }

    /// Derives a graph from the slot-keyed shape (slot → users who chose it).
    ///
    /// Rows are scanned in ascending slot order. Users appear in the order
    /// they are first seen, and each user's slots end up ascending.
    pub fn from_slot_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<U>)>,
    {
        let mut rows: Vec<(S, Vec<U>)> = rows.into_iter().collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let mut graph = Self::new();
        let mut index: HashMap<U, usize> = HashMap::new();

        for (slot, users) in rows {
            for user in users {
                let pos = *index.entry(user.clone()).or_insert_with(|| {
                    graph.entries.push((user, Vec::new()));
                    graph.entries.len() - 1
                });
                graph.entries[pos].1.push(slot.clone());
            }
        }

        graph
    }

    /// All `(user, eligible slots)` entries in processing order.
    pub fn entries(&self) -> impl Iterator<Item = (&U, &[S])> {
        self.entries.iter().map(|(u, s)| (u, s.as_slice()))
    }

    /// Users in processing order.
    pub fn users(&self) -> impl Iterator<Item = &U> {
        self.entries.iter().map(|(u, _)| u)
    }

    /// Eligible slots of a user, in preference order.
    pub fn eligible_slots(&self, user: &U) -> Option<&[S]> {
        self.entries
            .iter()
            .find(|(u, _)| u == user)
            .map(|(_, s)| s.as_slice())
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of user-slot edges.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, s)| s.len()).sum()
    }

    /// Every slot referenced by some user, ascending and deduplicated.
    pub fn distinct_slots(&self) -> Vec<S> {
        self.entries
            .iter()
            .flat_map(|(_, s)| s.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<U, S> Default for PreferenceGraph<U, S>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<U, S> FromIterator<(U, Vec<S>)> for PreferenceGraph<U, S>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    fn from_iter<I: IntoIterator<Item = (U, Vec<S>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
