//! Resolved invocation descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Executable descriptor for one operation, bound to a plugin and executor.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResolvedOperation {
    pub name: String,
    /// Resolved plugin name. Empty for the no-op descriptor produced by an
    /// empty mapping.
    pub plugin: String,
    /// Plugin-local target name (the mapping with the plugin prefix
    /// stripped), or a script-runner task identifier.
    pub operation: String,
    pub executor: String,
    pub inputs: IndexMap<String, Value>,
    /// Set by a later pass that scans input values for intrinsic-function
    /// syntax. Always false at resolution time.
    pub has_intrinsic_functions: bool,
    pub max_retries: Option<i64>,
    pub retry_interval: Option<f64>,
}

/// Executable descriptor for one workflow. Workflows always run through the
/// workflow engine, so no executor or retry fields are carried.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResolvedWorkflowOperation {
    pub plugin: String,
    pub operation: String,
    pub parameters: IndexMap<String, Value>,
}
