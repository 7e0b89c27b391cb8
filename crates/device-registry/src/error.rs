use thiserror::Error;

pub type Result<T, E = RegistryError> = core::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate device id: {0}")]
    DuplicateId(String),
    #[error("device id must not be empty (name: {0})")]
    EmptyId(String),
    #[error("device {0} has an empty name")]
    EmptyName(String),
    #[error("device {0} has an empty location")]
    EmptyLocation(String),
    #[error("device {0} has an intensity value but does not support intensity")]
    UnexpectedIntensity(String),
}
