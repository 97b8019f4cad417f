//! DSL parser: converts raw YAML/JSON text into schema types.

use serde::de::DeserializeOwned;

use crate::error::DslError;

/// Supported DSL input formats.
#[derive(Debug, Clone, Copy)]
pub enum DslFormat {
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
    /// JSON format (`.json`).
    Json,
}

/// Parse DSL content into any schema type.
pub fn parse_dsl<T: DeserializeOwned>(content: &str, format: DslFormat) -> Result<T, DslError> {
    match format {
        DslFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| DslError::Parse(e.to_string()))
        }
        DslFormat::Json => {
            serde_json::from_str(content).map_err(|e| DslError::Parse(e.to_string()))
        }
    }
}
