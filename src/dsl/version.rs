//! DSL version handling.

use std::fmt;
use std::str::FromStr;

use crate::error::DslError;

/// Current supported DSL version.
pub const CURRENT_DSL_VERSION: DslVersion = DslVersion::V1_1;

/// All supported DSL versions.
pub const SUPPORTED_DSL_VERSIONS: &[DslVersion] = &[DslVersion::V1_0, DslVersion::V1_1];

/// Minimum version at which `max_retries` / `retry_interval` may be declared.
pub const MIN_RETRY_FIELDS_VERSION: DslVersion = DslVersion::V1_1;

/// A `major.minor` DSL definitions version, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DslVersion {
    pub major: u32,
    pub minor: u32,
}

impl DslVersion {
    pub const V1_0: DslVersion = DslVersion::new(1, 0);
    pub const V1_1: DslVersion = DslVersion::new(1, 1);

    pub const fn new(major: u32, minor: u32) -> Self {
        DslVersion { major, minor }
    }
}

impl fmt::Display for DslVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for DslVersion {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DslError::Parse(format!("invalid DSL version '{}'", s));
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(DslVersion {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}
