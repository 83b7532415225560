//! Slot assignment and matching metrics.
//!
//! # Algorithm
//!
//! `MatchingEngine` computes a maximum bipartite matching between users
//! and slots with augmenting paths. A weaker greedy mode is available for
//! callers that want first-come-first-served behavior.
//!
//! # Metrics
//!
//! `MatchingStats` reports coverage and slot usage of a computed result.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Berge (1957), "Two Theorems in Graph Theory"

mod engine;
mod stats;

pub use engine::{compute_matching, MatchMode, MatchingEngine};
pub use stats::MatchingStats;
