pub mod parser;
pub mod schema;
pub mod validation;
pub mod version;

pub use parser::{parse_dsl, DslFormat};
pub use schema::*;
pub use validation::{
    validate_executor, validate_max_retries, validate_operation, validate_retry_interval,
    ValidationContext,
};
pub use version::{DslVersion, CURRENT_DSL_VERSION, MIN_RETRY_FIELDS_VERSION};
