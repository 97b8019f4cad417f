//! Field-level validators for operation declarations.
//!
//! Each validator checks a single field and does not depend on any other
//! field having passed; the first failure still aborts the surrounding parse.

use crate::constants::VALID_EXECUTORS;
use crate::dsl::schema::Normalize;
use crate::dsl::version::{DslVersion, MIN_RETRY_FIELDS_VERSION};
use crate::error::DslError;

/// Context threaded down from the enclosing document.
///
/// Replaces the ancestor lookup a schema-tree framework would provide: the
/// document version and the version-gate flag are passed explicitly.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// Version the enclosing document declares.
    pub version: DslVersion,
    /// When false, the minimum-version requirement on retry fields is
    /// skipped entirely. Bound checks still apply.
    pub validate_version: bool,
}

/// Check a declared executor against the valid-executor set.
///
/// An absent executor is fine; it defaults during resolution.
pub fn validate_executor(
    interface_name: &str,
    operation_name: &str,
    executor: Option<&str>,
) -> Result<(), DslError> {
    let value = match executor {
        Some(value) => value,
        None => return Ok(()),
    };
    if VALID_EXECUTORS.contains(&value) {
        return Ok(());
    }
    Err(DslError::IllegalExecutor {
        operation: format!("{}.{}", interface_name, operation_name),
        value: value.to_string(),
        valid: VALID_EXECUTORS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Check a declared `max_retries`: version-gated to 1.1, then bounded below
/// by -1 (unlimited) regardless of the gate.
pub fn validate_max_retries(
    operation_name: &str,
    value: Option<i64>,
    ctx: &ValidationContext,
) -> Result<(), DslError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };
    if ctx.validate_version && ctx.version < MIN_RETRY_FIELDS_VERSION {
        return Err(DslError::VersionMismatch {
            field: "max_retries",
            operation: operation_name.to_string(),
            version: ctx.version,
            minimum: MIN_RETRY_FIELDS_VERSION,
        });
    }
    if value < -1 {
        return Err(DslError::InvalidMaxRetries { value });
    }
    Ok(())
}

/// Check a declared `retry_interval`: version-gated to 1.1, then required
/// non-negative regardless of the gate.
pub fn validate_retry_interval(
    operation_name: &str,
    value: Option<f64>,
    ctx: &ValidationContext,
) -> Result<(), DslError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };
    if ctx.validate_version && ctx.version < MIN_RETRY_FIELDS_VERSION {
        return Err(DslError::VersionMismatch {
            field: "retry_interval",
            operation: operation_name.to_string(),
            version: ctx.version,
            minimum: MIN_RETRY_FIELDS_VERSION,
        });
    }
    if value < 0.0 {
        return Err(DslError::InvalidRetryInterval { value });
    }
    Ok(())
}

/// Run every field validator on one declaration.
pub fn validate_operation(
    interface_name: &str,
    operation_name: &str,
    declaration: &impl Normalize,
    ctx: &ValidationContext,
) -> Result<(), DslError> {
    let normalized = declaration.normalize();
    validate_executor(interface_name, operation_name, normalized.executor.as_deref())?;
    validate_max_retries(operation_name, normalized.max_retries, ctx)?;
    validate_retry_interval(operation_name, normalized.retry_interval, ctx)?;
    Ok(())
}
