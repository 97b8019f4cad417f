//! Reserved identifiers shared with the execution layer.
//!
//! These values are interop contracts: the execution-planning stage and the
//! script plugin match on them verbatim.

/// Executor assigned when neither the declaration nor the resolved plugin
/// names one.
pub const LOCAL_AGENT: &str = "local_agent";

/// Name under which the script plugin must be registered for the
/// script-resource fallback to apply.
pub const SCRIPT_PLUGIN_NAME: &str = "script";

/// Task the script plugin runs for an operation backed by a script file.
pub const SCRIPT_PLUGIN_RUN_TASK: &str = "script_runner.tasks.run";

/// Task the script plugin runs for a workflow backed by a script file.
pub const SCRIPT_PLUGIN_EXECUTE_WORKFLOW_TASK: &str = "script_runner.tasks.execute_workflow";

/// Payload key the script fallback injects. User declarations must not use it.
pub const SCRIPT_PATH_PROPERTY: &str = "script_path";

/// Executors accepted by executor validation.
pub const VALID_EXECUTORS: &[&str] = &[LOCAL_AGENT];
