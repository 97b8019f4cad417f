//! Error types for DSL validation and resolution.
//!
//! - [`DslError`] — Document-level errors raised while validating and
//!   resolving operation declarations. Document errors carry a stable
//!   numeric code.

pub mod dsl_error;

pub use dsl_error::DslError;

/// Convenience alias for DSL-level results.
pub type DslResult<T> = Result<T, DslError>;
