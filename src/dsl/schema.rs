//! Declaration shapes for interfaces, operations and workflows.
//!
//! Every declaration is accepted in two grammatical forms: a bare mapping
//! string (shorthand) or a full record. Both collapse through [`Normalize`]
//! into one canonical [`NormalizedDeclaration`] before validation or
//! resolution runs.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ================================
// Plugin registry
// ================================

/// One registered plugin, as the document's plugin section declares it.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PluginSpec {
    /// Default executor for operations resolved to this plugin.
    #[serde(default)]
    pub executor: Option<String>,
    /// Remaining plugin fields (source, package, ...) are opaque at this layer.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Read-only mapping plugin-name → spec, finalized before resolution runs.
pub type PluginRegistry = HashMap<String, PluginSpec>;

// ================================
// Declaration kinds
// ================================

/// Declaration flavor: node operations vs. workflow entries.
///
/// Selects the field-naming convention (`implementation`/`inputs` vs.
/// `mapping`/`parameters`), the script task identifier, and the wording of
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Operation,
    Workflow,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Operation => write!(f, "operation"),
            DeclKind::Workflow => write!(f, "workflow"),
        }
    }
}

// ================================
// Operation declarations
// ================================

/// Typed parameter schema entry used by node-type operation inputs.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ParameterDefinition {
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
}

/// Operation declared on a node type. `inputs` is a typed parameter schema.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum NodeTypeOperation {
    /// Bare mapping string, e.g. `my_plugin.tasks.create`.
    Shorthand(String),
    Full(NodeTypeOperationBody),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NodeTypeOperationBody {
    #[serde(default)]
    pub implementation: String,
    #[serde(default)]
    pub inputs: IndexMap<String, ParameterDefinition>,
    #[serde(default)]
    pub executor: Option<String>,
    #[serde(default)]
    pub max_retries: Option<i64>,
    #[serde(default)]
    pub retry_interval: Option<f64>,
}

/// Operation declared on a node template. `inputs` is a freeform mapping.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum NodeTemplateOperation {
    /// Bare mapping string, e.g. `my_plugin.tasks.create`.
    Shorthand(String),
    Full(NodeTemplateOperationBody),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NodeTemplateOperationBody {
    #[serde(default)]
    pub implementation: String,
    #[serde(default)]
    pub inputs: IndexMap<String, Value>,
    #[serde(default)]
    pub executor: Option<String>,
    #[serde(default)]
    pub max_retries: Option<i64>,
    #[serde(default)]
    pub retry_interval: Option<f64>,
}

/// Workflow declaration. Uses the `mapping`/`parameters` naming convention
/// and carries no executor or retry fields; workflows always run through the
/// workflow engine.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum WorkflowDeclaration {
    /// Bare mapping string, e.g. `my_plugin.workflows.install`.
    Shorthand(String),
    Full(WorkflowDeclarationBody),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct WorkflowDeclarationBody {
    #[serde(default)]
    pub mapping: String,
    #[serde(default)]
    pub parameters: IndexMap<String, Value>,
}

// ================================
// Interfaces
// ================================

/// Ordered operations of one node-type interface.
pub type NodeTypeInterface = IndexMap<String, NodeTypeOperation>;
/// Ordered node-type interfaces by name.
pub type NodeTypeInterfaces = IndexMap<String, NodeTypeInterface>;
/// Ordered operations of one node-template interface.
pub type NodeTemplateInterface = IndexMap<String, NodeTemplateOperation>;
/// Ordered node-template interfaces by name.
pub type NodeTemplateInterfaces = IndexMap<String, NodeTemplateInterface>;
/// Ordered workflow declarations by name.
pub type Workflows = IndexMap<String, WorkflowDeclaration>;

// ================================
// Normalization
// ================================

/// Canonical form every declaration shape collapses into.
///
/// `target` holds `implementation` for operations and `mapping` for
/// workflows; `payload` holds `inputs` and `parameters` respectively.
/// A shorthand declaration yields target-only: empty payload, no executor,
/// no retry fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedDeclaration {
    pub target: String,
    pub payload: IndexMap<String, Value>,
    pub executor: Option<String>,
    pub max_retries: Option<i64>,
    pub retry_interval: Option<f64>,
}

/// Capability shared by the declaration shapes: collapse to the canonical
/// record the validators and the resolution engine consume.
pub trait Normalize {
    fn normalize(&self) -> NormalizedDeclaration;
}

impl Normalize for NodeTypeOperation {
    fn normalize(&self) -> NormalizedDeclaration {
        match self {
            NodeTypeOperation::Shorthand(implementation) => NormalizedDeclaration {
                target: implementation.clone(),
                ..Default::default()
            },
            NodeTypeOperation::Full(body) => NormalizedDeclaration {
                target: body.implementation.clone(),
                payload: body
                    .inputs
                    .iter()
                    .map(|(name, def)| (name.clone(), parameter_to_value(def)))
                    .collect(),
                executor: body.executor.clone(),
                max_retries: body.max_retries,
                retry_interval: body.retry_interval,
            },
        }
    }
}

impl Normalize for NodeTemplateOperation {
    fn normalize(&self) -> NormalizedDeclaration {
        match self {
            NodeTemplateOperation::Shorthand(implementation) => NormalizedDeclaration {
                target: implementation.clone(),
                ..Default::default()
            },
            NodeTemplateOperation::Full(body) => NormalizedDeclaration {
                target: body.implementation.clone(),
                payload: body.inputs.clone(),
                executor: body.executor.clone(),
                max_retries: body.max_retries,
                retry_interval: body.retry_interval,
            },
        }
    }
}

impl Normalize for WorkflowDeclaration {
    fn normalize(&self) -> NormalizedDeclaration {
        match self {
            WorkflowDeclaration::Shorthand(mapping) => NormalizedDeclaration {
                target: mapping.clone(),
                ..Default::default()
            },
            WorkflowDeclaration::Full(body) => NormalizedDeclaration {
                target: body.mapping.clone(),
                payload: body.parameters.clone(),
                ..Default::default()
            },
        }
    }
}

/// Render a typed parameter definition as a plain JSON object, keeping only
/// the declared fields.
fn parameter_to_value(def: &ParameterDefinition) -> Value {
    let mut map = serde_json::Map::new();
    if let Some(param_type) = &def.param_type {
        map.insert("type".to_string(), Value::String(param_type.clone()));
    }
    if let Some(default) = &def.default {
        map.insert("default".to_string(), default.clone());
    }
    if let Some(description) = &def.description {
        map.insert("description".to_string(), Value::String(description.clone()));
    }
    if let Some(required) = def.required {
        map.insert("required".to_string(), Value::Bool(required));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shorthand_normalization() {
        let op = NodeTemplateOperation::Shorthand("my_plugin.tasks.create".into());
        let normalized = op.normalize();
        assert_eq!(normalized.target, "my_plugin.tasks.create");
        assert!(normalized.payload.is_empty());
        assert_eq!(normalized.executor, None);
        assert_eq!(normalized.max_retries, None);
        assert_eq!(normalized.retry_interval, None);
    }

    #[test]
    fn test_full_normalization_carries_all_fields() {
        let mut inputs = IndexMap::new();
        inputs.insert("port".to_string(), json!(8080));
        let op = NodeTemplateOperation::Full(NodeTemplateOperationBody {
            implementation: "my_plugin.tasks.configure".into(),
            inputs,
            executor: Some("local_agent".into()),
            max_retries: Some(3),
            retry_interval: Some(2.5),
        });
        let normalized = op.normalize();
        assert_eq!(normalized.target, "my_plugin.tasks.configure");
        assert_eq!(normalized.payload.get("port"), Some(&json!(8080)));
        assert_eq!(normalized.executor.as_deref(), Some("local_agent"));
        assert_eq!(normalized.max_retries, Some(3));
        assert_eq!(normalized.retry_interval, Some(2.5));
    }

    #[test]
    fn test_node_type_inputs_render_as_parameter_schema() {
        let mut inputs = IndexMap::new();
        inputs.insert(
            "port".to_string(),
            ParameterDefinition {
                param_type: Some("integer".into()),
                default: Some(json!(8080)),
                description: None,
                required: None,
            },
        );
        let op = NodeTypeOperation::Full(NodeTypeOperationBody {
            implementation: "my_plugin.tasks.configure".into(),
            inputs,
            ..Default::default()
        });
        let normalized = op.normalize();
        assert_eq!(
            normalized.payload.get("port"),
            Some(&json!({"type": "integer", "default": 8080}))
        );
    }

    #[test]
    fn test_workflow_normalization() {
        let wf = WorkflowDeclaration::Full(WorkflowDeclarationBody {
            mapping: "my_plugin.workflows.install".into(),
            parameters: IndexMap::from([("key".to_string(), json!("value"))]),
        });
        let normalized = wf.normalize();
        assert_eq!(normalized.target, "my_plugin.workflows.install");
        assert_eq!(normalized.payload.get("key"), Some(&json!("value")));
        assert_eq!(normalized.executor, None);
    }

    #[test]
    fn test_untagged_deserialization_both_shapes() {
        let shorthand: NodeTemplateOperation =
            serde_json::from_value(json!("my_plugin.tasks.create")).unwrap();
        assert!(matches!(shorthand, NodeTemplateOperation::Shorthand(_)));

        let full: NodeTemplateOperation = serde_json::from_value(json!({
            "implementation": "my_plugin.tasks.create",
            "inputs": {"key": "value"},
            "max_retries": -1
        }))
        .unwrap();
        match full {
            NodeTemplateOperation::Full(body) => {
                assert_eq!(body.implementation, "my_plugin.tasks.create");
                assert_eq!(body.max_retries, Some(-1));
            }
            NodeTemplateOperation::Shorthand(_) => panic!("expected full record"),
        }
    }

    #[test]
    fn test_decl_kind_display() {
        assert_eq!(DeclKind::Operation.to_string(), "operation");
        assert_eq!(DeclKind::Workflow.to_string(), "workflow");
    }

    #[test]
    fn test_plugin_spec_deserialization() {
        let spec: PluginSpec = serde_json::from_value(json!({
            "executor": "local_agent",
            "source": "https://example.com/plugin.zip"
        }))
        .unwrap();
        assert_eq!(spec.executor.as_deref(), Some("local_agent"));
        assert!(spec.extra.contains_key("source"));
    }
}
