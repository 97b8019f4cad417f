pub mod engine;
pub mod resolved;
pub mod resource;

pub use engine::{
    resolve_interface_operations, resolve_operation, resolve_workflow, ResolutionContext,
};
pub use resolved::{ResolvedOperation, ResolvedWorkflowOperation};
pub use resource::ResourceProbe;
