use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons a submitted form is rejected. The display text is shown to the
/// user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter medicine name")]
    MissingName,

    #[error("Please select a time")]
    MissingTime,

    #[error("Please enter times per day")]
    MissingFrequency,

    #[error("Please select at least one day")]
    NoDaysSelected,
}
