//! # cloudplan_config
//!
//! Deployment configuration model and validation for cloudplan.
//!
//! This crate defines the input side of the generation layer: the
//! [`DeploymentConfig`] value object describing one project deployment, a
//! YAML reader for config files, and validation of the fields the resource
//! generators rely on (project-id pattern, audit-log destination, VM names
//! and zones).
//!
//! ## Example
//!
//! ```rust
//! use cloudplan_config::{ConfigValidator, DeploymentConfig, VmSpec};
//!
//! let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
//!     .with_owners_group("owners@example.com")
//!     .with_auditors_group("auditors@example.com")
//!     .with_vm(VmSpec::new("vm-a", "n1-standard-1", "us-central1-a", "debian-12"));
//!
//! let result = ConfigValidator::validate(&config);
//! assert!(result.valid);
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod validator;

pub use error::{ConfigError, ConfigResult};
pub use models::{DeploymentConfig, VmSpec};
pub use reader::ConfigReader;
pub use validator::{is_known_zone, ConfigValidator, ValidationResult, KNOWN_ZONES};
