//! Error types for RCS lookup and interpolation

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcsError {
    #[error("Empty dataset: no breakpoints to bracket")]
    EmptyDataset,

    #[error("Invalid direction parameter: distance sum to nearest directions is zero or not finite")]
    InvalidDirectionParameter,

    #[error("Unknown incident direction id: {0}")]
    UnknownDirection(u8),

    #[error("Direction catalog needs at least two entries")]
    CatalogTooSmall,

    #[error("Dimension mismatch")]
    DimensionMismatch,

    #[error("Unrepresentable number")]
    Unrepresentable,
}

pub type Result<T> = std::result::Result<T, RcsError>;
