//! Error types for pricing and solvency computations.

use thiserror::Error;

/// Errors raised while pricing a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Project value or coverage amount is zero or negative.
    #[error("Project value and coverage amount must be positive numbers")]
    InvalidInput,

    /// A score input lies outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    OutOfRange { field: &'static str, value: u8 },

    /// The pricing configuration cannot produce meaningful premiums.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    /// A quantity exceeded the representable decimal range.
    #[error("{quantity} is too large to represent")]
    Overflow { quantity: &'static str },
}

/// Errors raised while deriving pool solvency metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolvencyError {
    /// A fraction of total capital was requested while total capital is zero.
    #[error("{quantity} is undefined when total capital is zero")]
    DivisionUndefined { quantity: &'static str },

    /// A derived quantity exceeded the representable decimal range.
    #[error("{quantity} is too large to represent")]
    Overflow { quantity: &'static str },
}
