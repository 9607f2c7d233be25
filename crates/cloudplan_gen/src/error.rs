//! Error types for the generation module.

use thiserror::Error;

/// Result type alias for generation operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors that can occur while generating or assembling a deployment plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] cloudplan_config::ConfigError),

    #[error("Resource '{resource}' depends on '{dependency}', which no generator emitted")]
    UnresolvedDependency { resource: String, dependency: String },

    #[error("Two generated resources share the name '{0}'")]
    DuplicateResourceName(String),

    #[error("Cyclic dependency involving resources: {0}")]
    CyclicDependency(String),
}
