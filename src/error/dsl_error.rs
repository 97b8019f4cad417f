//! Document-level error type.

use thiserror::Error;

use crate::dsl::schema::DeclKind;
use crate::dsl::version::DslVersion;

/// Errors raised while validating and resolving operation declarations.
///
/// Most variants describe user-fixable document errors and carry a stable
/// numeric code, exposed via [`DslError::code`]. The codes are part of the
/// crate's compatibility surface: an existing variant never changes its code.
/// Raising any variant aborts the surrounding parse; there is no batching or
/// partial recovery.
#[derive(Debug, Error)]
pub enum DslError {
    /// Raw document text could not be parsed at all.
    #[error("DSL parse error: {0}")]
    Parse(String),

    /// Declared executor is not a member of the valid-executor set.
    #[error("Operation '{operation}' has an illegal executor value '{value}'. valid values are {valid:?}")]
    IllegalExecutor {
        /// Fully-qualified `interface.operation` path.
        operation: String,
        value: String,
        valid: Vec<String>,
    },

    /// A field was declared below the minimum DSL version that supports it.
    #[error("'{field}' of '{operation}' is not supported for DSL version {version}. It requires version {minimum} or later")]
    VersionMismatch {
        field: &'static str,
        operation: String,
        version: DslVersion,
        minimum: DslVersion,
    },

    /// The payload already declares the key reserved for script-path injection.
    #[error("Cannot define '{property}' property in '{mapping}' for {kind} '{name}'")]
    ReservedProperty {
        property: String,
        mapping: String,
        kind: DeclKind,
        name: String,
    },

    /// The script fallback triggered but no script plugin is registered.
    #[error("Script plugin is not defined but it is required for mapping '{mapping}' of {kind} '{name}'")]
    MissingScriptPlugin {
        mapping: String,
        kind: DeclKind,
        name: String,
    },

    /// More than one registered plugin name is a dot-delimited prefix of the
    /// mapping string.
    #[error("Ambiguous operation mapping. [operation={operation}, plugins={candidates:?}]")]
    AmbiguousMapping {
        operation: String,
        candidates: Vec<String>,
    },

    /// `max_retries` below -1.
    #[error("'max_retries' value must be either -1 to specify unlimited retries or a non negative number but got {value}.")]
    InvalidMaxRetries { value: i64 },

    /// Negative `retry_interval`.
    #[error("'retry_interval' value must be a non negative number but got {value}.")]
    InvalidRetryInterval { value: f64 },

    /// A mapping string matched neither a plugin prefix nor a script
    /// resource. The code and wording come from the call site.
    #[error("{message}")]
    UnresolvedMapping { code: u32, message: String },

    /// Framework invariant violation, not a user-facing document error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DslError {
    /// Stable numeric code of a document-level error.
    ///
    /// `None` for parse and internal failures, which precede (or bypass)
    /// document-logic validation.
    pub fn code(&self) -> Option<u32> {
        match self {
            DslError::Parse(_) | DslError::Internal(_) => None,
            DslError::IllegalExecutor { .. } => Some(28),
            DslError::VersionMismatch { .. } => Some(29),
            DslError::ReservedProperty { .. } => Some(60),
            DslError::MissingScriptPlugin { .. } => Some(61),
            DslError::InvalidMaxRetries { .. } => Some(70),
            DslError::InvalidRetryInterval { .. } => Some(71),
            DslError::AmbiguousMapping { .. } => Some(91),
            DslError::UnresolvedMapping { code, .. } => Some(*code),
        }
    }
}
