//! Premium pricing and risk-pool solvency core.
//!
//! This crate holds the pure computations behind a freelance insurance quote:
//! - Premium pricing from coverage ratio, term, risk appetite and reputation
//! - Job-type and industry risk weights
//! - Pool solvency metrics and reserve health classification
//!
//! Every operation is a deterministic function of its inputs. Nothing here
//! performs I/O or keeps state between calls.

/// Prelude module for convenient imports.
pub mod prelude;

/// Discrete domain selectors.
pub mod enums;
/// Error types.
pub mod error;
/// Premium pricing engine.
pub mod pricing;
/// Pool solvency model.
pub mod solvency;
/// Input and result records.
pub mod value_objects;
