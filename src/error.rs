use thiserror::Error;

/// Errors surfaced by the ledger. None of these are fatal to the process:
/// validation and not-found leave the collections unchanged, and persistence
/// failures degrade to in-memory operation with a status-line warning.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no transaction with id {0}")]
    NotFound(i64),

    #[error("persistence failed: {0}")]
    Persistence(String),
}
