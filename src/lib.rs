//! Appointment slot assignment for the U-Engine ecosystem.
//!
//! Matches users to time slots, at most one user per slot and one slot
//! per user, placing as many users as possible and reporting the rest.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PreferenceGraph`, `SlotTable`,
//!   `HourSlot`, `MatchResult`
//! - **`matching`**: `MatchingEngine` (maximum bipartite matching) and
//!   `MatchingStats`
//! - **`validation`**: Input integrity checks (duplicate users, repeated
//!   or unknown slots)
//!
//! # Example
//!
//! ```
//! use u_appoint::matching::compute_matching;
//! use u_appoint::models::PreferenceGraph;
//!
//! let graph = PreferenceGraph::new()
//!     .with_user("alice", vec![10])
//!     .with_user("bob", vec![10]);
//!
//! let result = compute_matching(&graph).unwrap();
//! assert_eq!(result.matched_count(), 1);
//! assert_eq!(result.unmatched, vec!["bob"]);
//! ```
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.3 (Maximum Bipartite Matching)

pub mod error;
pub mod matching;
pub mod models;
pub mod validation;

pub use error::MatchError;
