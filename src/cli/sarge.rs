use sarge::ArgumentType;
use thiserror::Error;

use crate::cli::AppMode;

/// A `--mode` value that names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}', expected 'server' or 'cli'")]
pub struct UnknownMode(pub String);

impl ArgumentType for AppMode {
    type Error = UnknownMode;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let val = val?;
        Some(AppMode::from_name(val).ok_or_else(|| UnknownMode(val.to_string())))
    }
}
