//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while building inputs or computing a matching.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// The preference graph failed structural validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A slot was registered twice.
    #[error("slot {0} is already registered")]
    DuplicateSlot(String),

    /// A user was registered twice.
    #[error("user {0} is already registered")]
    DuplicateUser(String),

    /// A user selected a slot that was never registered.
    #[error("slot {0} is not registered")]
    UnknownSlot(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_joins_errors() {
        let err = MatchError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateUser, "Duplicate user: \"a\""),
            ValidationError::new(ValidationErrorKind::UnknownSlot, "Unknown slot: 3"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate user: \"a\"; Unknown slot: 3"
        );
    }

    #[test]
    fn test_registration_messages() {
        assert_eq!(
            MatchError::DuplicateSlot("10".into()).to_string(),
            "slot 10 is already registered"
        );
        assert_eq!(
            MatchError::UnknownSlot("11".into()).to_string(),
            "slot 11 is not registered"
        );
    }
}
