//! Slot assignment engine.
//!
//! # Algorithm
//!
//! Maximum bipartite matching by augmenting paths (Kuhn):
//!
//! 1. Process users in graph order.
//! 2. For each user, try their slots in preference order. A free slot is
//!    taken immediately. An occupied slot is taken if its holder can be
//!    moved to another of the holder's own slots, recursively.
//! 3. Each top-level search starts with fresh visited-user and
//!    probed-slot sets.
//! 4. Collect assignments in slot order; users left without a slot are
//!    reported as unmatched in graph order.
//!
//! By Berge's theorem a user for whom no augmenting path exists cannot
//! gain one through later augmentations, so a single pass is maximum.
//!
//! # Complexity
//! O(U × E) where U = users, E = user-slot edges.
//!
//! # Reference
//! Kuhn (1955), "The Hungarian Method for the Assignment Problem"

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::error::MatchError;
use crate::models::{MatchResult, PreferenceGraph, SlotAssignment, SlotTable};
use crate::validation::validate_graph;

/// Assignment strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Augmenting-path search; always yields a maximum matching.
    #[default]
    Maximum,
    /// First free slot in preference order, never displacing anyone.
    ///
    /// Not maximum: an early user can take the only slot a later user
    /// could use.
    Greedy,
}

/// Matches users to slots, one user per slot and one slot per user.
///
/// The engine holds configuration only; every call builds its own
/// working state and leaves the input graph untouched.
///
/// # Example
///
/// ```
/// use u_appoint::matching::MatchingEngine;
/// use u_appoint::models::PreferenceGraph;
///
/// let graph = PreferenceGraph::new()
///     .with_user("alice", vec![10])
///     .with_user("bob", vec![10, 11]);
///
/// let result = MatchingEngine::new().compute(&graph).unwrap();
/// assert_eq!(result.matched_count(), 2);
/// assert_eq!(result.user_for(&10), Some(&"alice"));
/// assert_eq!(result.user_for(&11), Some(&"bob"));
/// assert!(result.unmatched.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    mode: MatchMode,
}

impl MatchingEngine {
    /// Creates an engine in [`MatchMode::Maximum`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the assignment strategy.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured strategy.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Computes a matching for the graph.
    ///
    /// Users with no eligible slots are legal and end up unmatched. A
    /// slot listed more than once by the same user is tried at its first
    /// position only, the same as [`SlotTable::add_user`] records it once.
    ///
    /// # Errors
    /// [`MatchError::InvalidInput`] if the graph repeats a user. No partial
    /// result is returned.
    pub fn compute<U, S>(
        &self,
        graph: &PreferenceGraph<U, S>,
    ) -> Result<MatchResult<U, S>, MatchError>
    where
        U: Clone + Eq + Hash + Debug,
        S: Clone + Ord + Debug,
    {
        if let Err(errors) = validate_graph(graph) {
            warn!(errors = errors.len(), "rejecting invalid preference graph");
            return Err(MatchError::InvalidInput(errors));
        }

        let indexed = IndexedGraph::build(graph);
        let slot_count = indexed.slots.len();
        let owners = match self.mode {
            MatchMode::Maximum => assign_maximum(&indexed.adjacency, slot_count),
            MatchMode::Greedy => assign_greedy(&indexed.adjacency, slot_count),
        };

        let result = indexed.into_result(graph, &owners);
        debug!(
            mode = ?self.mode,
            users = graph.user_count(),
            slots = slot_count,
            matched = result.matched_count(),
            unmatched = result.unmatched_count(),
            "computed matching"
        );
        Ok(result)
    }

    /// Computes a matching for the current registrations of a slot table.
    pub fn compute_table<U, S>(
        &self,
        table: &SlotTable<U, S>,
    ) -> Result<MatchResult<U, S>, MatchError>
    where
        U: Clone + Eq + Hash + Debug,
        S: Clone + Ord + Debug,
    {
        self.compute(&table.to_preference_graph())
    }
}

/// Computes a maximum matching with the default engine.
pub fn compute_matching<U, S>(
    graph: &PreferenceGraph<U, S>,
) -> Result<MatchResult<U, S>, MatchError>
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    MatchingEngine::new().compute(graph)
}

/// The graph with users and slots replaced by dense indices.
struct IndexedGraph<S> {
    /// Distinct slots, ascending. A slot's index is its position here.
    slots: Vec<S>,
    /// Per user (graph order), slot indices in preference order, each
    /// slot at most once.
    adjacency: Vec<Vec<usize>>,
}

impl<S: Clone + Ord> IndexedGraph<S> {
    fn build<U>(graph: &PreferenceGraph<U, S>) -> Self
    where
        U: Clone + Eq + Hash + Debug,
        S: Debug,
    {
        let slots = graph.distinct_slots();
        let adjacency = graph
            .entries()
            .map(|(_, eligible)| {
                let mut listed = vec![false; slots.len()];
                eligible
                    .iter()
                    .filter_map(|s| slots.binary_search(s).ok())
                    .filter(|&i| !std::mem::replace(&mut listed[i], true))
                    .collect()
            })
            .collect();
        Self { slots, adjacency }
    }

    fn into_result<U>(
        self,
        graph: &PreferenceGraph<U, S>,
        owners: &[Option<usize>],
    ) -> MatchResult<U, S>
    where
        U: Clone + Eq + Hash + Debug,
        S: Debug,
    {
        let users: Vec<&U> = graph.users().collect();
        let mut has_slot = vec![false; users.len()];
        let mut matched = Vec::new();

        for (slot, owner) in self.slots.into_iter().zip(owners) {
            if let Some(u) = *owner {
                has_slot[u] = true;
                matched.push(SlotAssignment::single(slot, users[u].clone()));
            }
        }

        let unmatched = users
            .into_iter()
            .zip(has_slot)
            .filter(|(_, assigned)| !assigned)
            .map(|(u, _)| u.clone())
            .collect();

        MatchResult { matched, unmatched }
    }
}

/// Kuhn's algorithm. Returns the owning user of each slot.
fn assign_maximum(adjacency: &[Vec<usize>], slot_count: usize) -> Vec<Option<usize>> {
    let mut owners = vec![None; slot_count];

    for user in 0..adjacency.len() {
        let mut search = AugmentSearch::new(adjacency.len(), slot_count);
        if !search.augment(user, adjacency, &mut owners) {
            trace!(user, "no augmenting path");
        }
    }

    owners
}

/// Single pass, no displacement. Returns the owning user of each slot.
fn assign_greedy(adjacency: &[Vec<usize>], slot_count: usize) -> Vec<Option<usize>> {
    let mut owners = vec![None; slot_count];

    for (user, eligible) in adjacency.iter().enumerate() {
        if let Some(&slot) = eligible.iter().find(|&&s| owners[s].is_none()) {
            owners[slot] = Some(user);
        }
    }

    owners
}

/// State of one augmenting-path search, scoped to a single top-level user.
struct AugmentSearch {
    visited_users: Vec<bool>,
    probed_slots: Vec<bool>,
}

impl AugmentSearch {
    fn new(user_count: usize, slot_count: usize) -> Self {
        Self {
            visited_users: vec![false; user_count],
            probed_slots: vec![false; slot_count],
        }
    }

    /// Tries to give `user` a slot, moving current holders along an
    /// alternating path if needed. Recursion depth is bounded by the
    /// number of users.
    fn augment(
        &mut self,
        user: usize,
        adjacency: &[Vec<usize>],
        owners: &mut [Option<usize>],
    ) -> bool {
        if self.visited_users[user] {
            return false;
        }
        self.visited_users[user] = true;

        for &slot in &adjacency[user] {
            if self.probed_slots[slot] {
                continue;
            }
            self.probed_slots[slot] = true;

            match owners[slot] {
                None => {
                    owners[slot] = Some(user);
                    return true;
                }
                Some(holder) => {
                    if self.augment(holder, adjacency, owners) {
                        trace!(user, holder, slot, "displaced holder");
                        owners[slot] = Some(user);
                        return true;
                    }
                }
            }
        }

        false
    }
}
