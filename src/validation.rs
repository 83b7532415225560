//! Input validation for matching problems.
//!
//! Checks structural integrity of a preference graph before matching.
//! Detects:
//! - Duplicate users
//! - References to slots outside a registered slot set
//!
//! A slot listed twice by the same user is not an error: it names the
//! same slot both times, and matching keeps only the first occurrence.
//!
//! All problems are collected; validation never stops at the first one.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::models::PreferenceGraph;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two graph entries share the same user.
    DuplicateUser,
    /// A user references a slot that is not registered.
    UnknownSlot,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structure of a preference graph.
///
/// Checks that no user appears in more than one entry.
///
/// A user with an empty eligibility list is valid, and so is a user who
/// lists the same slot twice.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_graph<U, S>(graph: &PreferenceGraph<U, S>) -> ValidationResult
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    let mut errors = Vec::new();
    let mut seen_users = HashSet::new();

    for user in graph.users() {
        if !seen_users.insert(user) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUser,
                format!("Duplicate user: {user:?}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a preference graph against a registered slot set.
///
/// Runs [`validate_graph`] and additionally reports every slot reference
/// that is not in `registered`.
pub fn validate_against_slots<U, S>(
    graph: &PreferenceGraph<U, S>,
    registered: &[S],
) -> ValidationResult
where
    U: Clone + Eq + Hash + Debug,
    S: Clone + Ord + Debug,
{
    let mut errors = validate_graph(graph).err().unwrap_or_default();
    let known: BTreeSet<&S> = registered.iter().collect();

    for (user, slots) in graph.entries() {
        for slot in slots {
            if !known.contains(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlot,
                    format!("User {user:?} references unknown slot {slot:?}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> PreferenceGraph<&'static str, u32> {
        PreferenceGraph::new()
            .with_user("alice", vec![10])
            .with_user("bob", vec![10, 11])
            .with_user("carol", vec![])
    }

    #[test]
    fn test_valid_graph() {
        assert!(validate_graph(&sample_graph()).is_ok());
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph: PreferenceGraph<String, u32> = PreferenceGraph::new();
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_duplicate_user() {
        let graph = sample_graph().with_user("alice", vec![11]);

        let errors = validate_graph(&graph).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateUser);
        assert!(errors[0].message.contains("alice"));
    }

    #[test]
    fn test_repeated_slot_in_user_list_is_valid() {
        let graph = PreferenceGraph::new().with_user("alice", vec![10, 11, 10]);
        assert!(validate_graph(&graph).is_ok());
        assert!(validate_against_slots(&graph, &[10, 11]).is_ok());
    }

    #[test]
    fn test_same_slot_across_users_is_valid() {
        let graph = PreferenceGraph::new()
            .with_user("alice", vec![10])
            .with_user("bob", vec![10]);
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_unknown_slot() {
        let errors = validate_against_slots(&sample_graph(), &[10]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownSlot);
        assert!(errors[0].message.contains("11"));
    }

    #[test]
    fn test_all_slots_registered() {
        assert!(validate_against_slots(&sample_graph(), &[10, 11, 12]).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let graph = PreferenceGraph::new()
            .with_user("alice", vec![10, 10])
            .with_user("alice", vec![99]);

        let errors = validate_against_slots(&graph, &[10]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateUser));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSlot));
    }

    #[test]
    fn test_error_display_is_message() {
        let err = ValidationError::new(ValidationErrorKind::UnknownSlot, "missing");
        assert_eq!(err.to_string(), "missing");
    }
}
