use shared_types::NameError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("History tracking disabled")]
    HistoryDisabled,

    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StateError> for NameError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::HistoryDisabled => NameError::HistoryDisabled,
            other => NameError::State(other.to_string()),
        }
    }
}
