//! Operation/workflow resolution engine.
//!
//! Turns normalized declarations into executable descriptors bound to a
//! plugin and an execution mode. Exactly one resolution path applies per
//! declaration: plugin-qualified match, script-resource fallback, or
//! (operations only) the empty no-op.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::{
    LOCAL_AGENT, SCRIPT_PATH_PROPERTY, SCRIPT_PLUGIN_EXECUTE_WORKFLOW_TASK, SCRIPT_PLUGIN_NAME,
    SCRIPT_PLUGIN_RUN_TASK,
};
use crate::dsl::schema::{DeclKind, Normalize, PluginRegistry, WorkflowDeclaration};
use crate::error::DslError;

use super::resolved::{ResolvedOperation, ResolvedWorkflowOperation};
use super::resource::ResourceProbe;

/// Caller-supplied parameters threaded through resolution.
///
/// `error_code` and `partial_error_message` feed the final
/// unresolved-mapping error, so call sites own the wording of their own
/// failure mode.
pub struct ResolutionContext<'a> {
    pub plugins: &'a PluginRegistry,
    pub error_code: u32,
    pub partial_error_message: &'a str,
    /// Root identifier for the script-resource fallback. `None` disables
    /// the fallback.
    pub resource_base: Option<&'a str>,
    pub probe: &'a dyn ResourceProbe,
}

/// Path selected for a non-empty mapping target.
enum Target {
    Plugin {
        plugin: String,
        operation: String,
        plugin_executor: Option<String>,
    },
    Script {
        path: String,
    },
}

/// Resolve every operation of one interface, preserving declaration order.
pub fn resolve_interface_operations<D: Normalize>(
    interface: &IndexMap<String, D>,
    ctx: &ResolutionContext<'_>,
) -> Result<Vec<ResolvedOperation>, DslError> {
    interface
        .iter()
        .map(|(operation_name, declaration)| resolve_operation(operation_name, declaration, ctx))
        .collect()
}

/// Resolve one named operation declaration into an executable descriptor.
pub fn resolve_operation(
    operation_name: &str,
    declaration: &impl Normalize,
    ctx: &ResolutionContext<'_>,
) -> Result<ResolvedOperation, DslError> {
    let decl = declaration.normalize();
    if decl.target.is_empty() {
        // Schema acceptance allows an empty implementation on operations;
        // it resolves to an inert descriptor.
        return Ok(ResolvedOperation {
            name: operation_name.to_string(),
            plugin: String::new(),
            operation: String::new(),
            executor: LOCAL_AGENT.to_string(),
            inputs: IndexMap::new(),
            has_intrinsic_functions: false,
            max_retries: None,
            retry_interval: None,
        });
    }
    match select_target(operation_name, DeclKind::Operation, &decl.target, ctx)? {
        Target::Plugin {
            plugin,
            operation,
            plugin_executor,
        } => Ok(ResolvedOperation {
            name: operation_name.to_string(),
            plugin,
            operation,
            executor: pick_executor(decl.executor.as_deref(), plugin_executor.as_deref()),
            inputs: decl.payload,
            has_intrinsic_functions: false,
            max_retries: decl.max_retries,
            retry_interval: decl.retry_interval,
        }),
        Target::Script { path } => {
            let fallback =
                script_fallback(operation_name, DeclKind::Operation, &path, &decl.payload, ctx)?;
            Ok(ResolvedOperation {
                name: operation_name.to_string(),
                plugin: SCRIPT_PLUGIN_NAME.to_string(),
                operation: fallback.task.to_string(),
                executor: pick_executor(
                    decl.executor.as_deref(),
                    fallback.plugin_executor.as_deref(),
                ),
                inputs: fallback.payload,
                has_intrinsic_functions: false,
                max_retries: decl.max_retries,
                retry_interval: decl.retry_interval,
            })
        }
    }
}

/// Resolve one named workflow declaration into an executable descriptor.
pub fn resolve_workflow(
    workflow_name: &str,
    declaration: &WorkflowDeclaration,
    ctx: &ResolutionContext<'_>,
) -> Result<ResolvedWorkflowOperation, DslError> {
    let decl = declaration.normalize();
    if decl.target.is_empty() {
        // Schema validation guarantees a non-empty workflow mapping;
        // reaching this point is a framework bug, not a document error.
        return Err(DslError::Internal(
            "illegal state: workflow mapping should always be defined \
             (enforced by schema validation)"
                .to_string(),
        ));
    }
    match select_target(workflow_name, DeclKind::Workflow, &decl.target, ctx)? {
        Target::Plugin {
            plugin, operation, ..
        } => Ok(ResolvedWorkflowOperation {
            plugin,
            operation,
            parameters: decl.payload,
        }),
        Target::Script { path } => {
            let fallback =
                script_fallback(workflow_name, DeclKind::Workflow, &path, &decl.payload, ctx)?;
            Ok(ResolvedWorkflowOperation {
                plugin: SCRIPT_PLUGIN_NAME.to_string(),
                operation: fallback.task.to_string(),
                parameters: fallback.payload,
            })
        }
    }
}

/// Select the resolution path for a non-empty mapping target.
///
/// A plugin matches only on an exact dot-delimited prefix, never a raw
/// substring. More than one match is always an error.
fn select_target(
    name: &str,
    kind: DeclKind,
    target: &str,
    ctx: &ResolutionContext<'_>,
) -> Result<Target, DslError> {
    let mut candidates: Vec<&str> = ctx
        .plugins
        .keys()
        .map(String::as_str)
        .filter(|plugin| {
            target
                .strip_prefix(*plugin)
                .map_or(false, |rest| rest.starts_with('.'))
        })
        .collect();

    if candidates.len() > 1 {
        candidates.sort_unstable();
        return Err(DslError::AmbiguousMapping {
            operation: name.to_string(),
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
        });
    }
    if let Some(&plugin) = candidates.first() {
        let operation = target[plugin.len() + 1..].to_string();
        tracing::debug!(plugin, operation = operation.as_str(), "resolved plugin-qualified mapping");
        return Ok(Target::Plugin {
            plugin: plugin.to_string(),
            operation,
            plugin_executor: ctx.plugins[plugin].executor.clone(),
        });
    }

    if let Some(base) = ctx.resource_base {
        if ctx.probe.exists(base, target) {
            tracing::debug!(path = target, "mapping names a script resource");
            return Ok(Target::Script {
                path: target.to_string(),
            });
        }
    }

    let message = format!(
        "Could not extract plugin from {0} mapping '{1}', which is declared for {0} '{2}'. {3}",
        kind, target, name, ctx.partial_error_message
    );
    Err(DslError::UnresolvedMapping {
        code: ctx.error_code,
        message,
    })
}

struct ScriptFallback {
    task: &'static str,
    payload: IndexMap<String, Value>,
    plugin_executor: Option<String>,
}

/// Rewrite a script-resource mapping onto the script plugin.
///
/// Builds a new payload (original fields plus the reserved script-path key);
/// the caller's declaration is never mutated.
fn script_fallback(
    name: &str,
    kind: DeclKind,
    path: &str,
    payload: &IndexMap<String, Value>,
    ctx: &ResolutionContext<'_>,
) -> Result<ScriptFallback, DslError> {
    if payload.contains_key(SCRIPT_PATH_PROPERTY) {
        return Err(DslError::ReservedProperty {
            property: SCRIPT_PATH_PROPERTY.to_string(),
            mapping: path.to_string(),
            kind,
            name: name.to_string(),
        });
    }
    let script_plugin = match ctx.plugins.get(SCRIPT_PLUGIN_NAME) {
        Some(spec) => spec,
        None => {
            return Err(DslError::MissingScriptPlugin {
                mapping: path.to_string(),
                kind,
                name: name.to_string(),
            });
        }
    };

    let (task, script_path_value) = match kind {
        DeclKind::Operation => (SCRIPT_PLUGIN_RUN_TASK, Value::String(path.to_string())),
        DeclKind::Workflow => (
            SCRIPT_PLUGIN_EXECUTE_WORKFLOW_TASK,
            serde_json::json!({
                "default": path,
                "description": "Workflow script executed by the script plugin",
            }),
        ),
    };
    let mut injected = payload.clone();
    injected.insert(SCRIPT_PATH_PROPERTY.to_string(), script_path_value);

    Ok(ScriptFallback {
        task,
        payload: injected,
        plugin_executor: script_plugin.executor.clone(),
    })
}

fn pick_executor(declared: Option<&str>, plugin_default: Option<&str>) -> String {
    declared.or(plugin_default).unwrap_or(LOCAL_AGENT).to_string()
}
