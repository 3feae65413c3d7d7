//! Error types for probgrid-core

use crate::label::Label;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in probgrid-core
///
/// Every variant is recoverable: a failed operation leaves the grid and
/// the existing regions untouched so the caller can correct the input
/// and retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Dimension string is not of the form "RxC" (e.g. "4x4")
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Grid dimensions outside the supported range
    #[error("Grid size {0}x{1} out of bounds (max: {2}x{2})")]
    GridSizeOutOfBounds(u16, u16, u16),

    /// Region dimensions outside the supported range
    #[error("Region size {0}x{1} out of bounds (max: {2}x{2})")]
    RegionSizeOutOfBounds(u16, u16, u16),

    /// Region cap reached
    #[error("Region limit reached (max: {0})")]
    RegionLimit(usize),

    /// No region carries the requested label
    #[error("No region labeled {0}")]
    RegionNotFound(Label),
}
