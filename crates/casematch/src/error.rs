//! Error types for case dispatch.

use thiserror::Error;

use crate::scrutinee::Input;

/// No registered case accepted the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("no case matched null")]
    Null,

    #[error("no case matched `{repr}` of type `{type_name}`")]
    Unmatched {
        type_name: &'static str,
        repr:      String,
    },
}

impl MatchError {
    pub(crate) fn for_input(input: Input<'_>) -> Self {
        match input {
            None => MatchError::Null,
            Some(value) => MatchError::Unmatched {
                type_name: value.type_name(),
                repr:      format!("{value:?}"),
            },
        }
    }

    /// Runtime type of the unmatched input, `None` for null.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            MatchError::Null => None,
            MatchError::Unmatched { type_name, .. } => Some(*type_name),
        }
    }

    /// `Debug` rendering of the unmatched input, `None` for null.
    pub fn input_repr(&self) -> Option<&str> {
        match self {
            MatchError::Null => None,
            MatchError::Unmatched { repr, .. } => Some(repr.as_str()),
        }
    }
}

pub type Result<T, E = MatchError> = std::result::Result<T, E>;
