//! # opflow — operation resolution for TOSCA-style orchestration documents
//!
//! `opflow` turns the declarative operation entries of an orchestration
//! document — node-type and node-template interfaces, and workflow
//! definitions — into concrete, executable invocation descriptors bound to a
//! specific plugin and execution mode. It covers:
//!
//! - **Declaration shapes**: every operation accepts a bare mapping string
//!   (shorthand) or a full record; both normalize into one canonical form
//!   before any downstream logic runs.
//! - **Field validation**: executor whitelist, retry-count and retry-interval
//!   bounds, with a version gate on the retry fields.
//! - **Resolution**: cross-referential mapping → plugin lookup with
//!   dot-delimited prefix matching, ambiguity detection, and a
//!   script-resource fallback routed through the script plugin.
//! - **Two naming conventions**: `implementation`/`inputs` for operations
//!   and `mapping`/`parameters` for workflows, each producing its own
//!   descriptor shape.
//!
//! Document loading, import resolution, and plugin installation live in
//! other layers; the resource-existence check is a caller-supplied
//! [`ResourceProbe`].
//!
//! # Quick Start
//!
//! ```rust
//! use opflow::dsl::{parse_dsl, DslFormat, NodeTemplateInterface, PluginRegistry, PluginSpec};
//! use opflow::resolve::{resolve_interface_operations, ResolutionContext};
//!
//! let yaml = r#"
//! create: my_plugin.tasks.create
//! configure:
//!   implementation: my_plugin.tasks.configure
//!   inputs:
//!     port: 8080
//! "#;
//! let interface: NodeTemplateInterface = parse_dsl(yaml, DslFormat::Yaml).unwrap();
//!
//! let mut plugins = PluginRegistry::new();
//! plugins.insert("my_plugin".to_string(), PluginSpec::default());
//!
//! let probe = |_base: &str, _relative: &str| false;
//! let ctx = ResolutionContext {
//!     plugins: &plugins,
//!     error_code: 10,
//!     partial_error_message: "In interface 'lifecycle'.",
//!     resource_base: None,
//!     probe: &probe,
//! };
//! let resolved = resolve_interface_operations(&interface, &ctx).unwrap();
//! assert_eq!(resolved[0].plugin, "my_plugin");
//! assert_eq!(resolved[0].operation, "tasks.create");
//! ```

pub mod constants;
pub mod dsl;
pub mod error;
pub mod resolve;

pub use crate::dsl::{parse_dsl, DslFormat, DslVersion, ValidationContext};
pub use crate::error::{DslError, DslResult};
pub use crate::resolve::{
    resolve_interface_operations, resolve_operation, resolve_workflow, ResolutionContext,
    ResolvedOperation, ResolvedWorkflowOperation, ResourceProbe,
};
