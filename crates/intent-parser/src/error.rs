use thiserror::Error;

pub type Result<T, E = SessionError> = core::result::Result<T, E>;

/// Reasons a transcript is turned away before parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("still processing the previous command (retry in {retry_in_ms} ms)")]
    Busy { retry_in_ms: u64 },
}
