//! Errors raised when a caller violates the domain of a computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Cost and predictions are undefined over zero points.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The secant slope divides by the step size.
    #[error("step size h must be non-zero")]
    ZeroStep,

    #[error("invalid sample range: min={min}, max={max}, step={step}")]
    InvalidRange { min: f64, max: f64, step: f64 },

    #[error("dataset columns differ in length: {xs} xs, {ys} ys")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("noise standard deviation must be finite and non-negative, got {sigma}")]
    InvalidNoise { sigma: f64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
