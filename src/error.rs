use thiserror::Error;

/// Failures surfaced by desk operations. Messages carry the code prefix the
/// dashboard matches on.
#[derive(Debug, Error, PartialEq)]
pub enum DeskError {
    #[error("MISSING_FIELD: {0} is required")]
    MissingField(&'static str),

    #[error("NOT_FOUND: ticket {0} does not exist")]
    TicketNotFound(String),

    #[error("STATE_LOCK: support desk state is poisoned")]
    StateLock,

    #[error("SETTINGS: {0}")]
    Settings(String),
}

pub type DeskResult<T> = Result<T, DeskError>;
