//! Error types for the config module.

use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating a deployment config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid project id '{0}': must be 6-30 lowercase letters, digits or hyphens, starting with a letter")]
    InvalidProjectId(String),

    #[error("Audit log destination '{0}' is the same as the source project; a project cannot sink audit logs to itself")]
    SelfSink(String),

    #[error("Duplicate VM name: {0}")]
    DuplicateVmName(String),

    #[error("VM name '{0}' collides with a generated resource name")]
    ReservedVmName(String),

    #[error("Unknown zone '{zone}' for VM '{vm}'")]
    UnknownZone { vm: String, zone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
