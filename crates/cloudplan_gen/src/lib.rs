//! # cloudplan_gen
//!
//! Resource descriptor generation and assembly for cloudplan.
//!
//! Three generators each emit a slice of the deployment:
//!
//! - [`ProjectResourceGenerator`] — project baseline: enabled APIs, billing
//!   account association, IAM role grants
//! - [`RemoteAuditLogGenerator`] — the sink routing audit logs to the
//!   central audit-logging project
//! - [`VmResourceGenerator`] — compute instances from the VM inventory
//!
//! The [`Assembler`] concatenates their outputs and topologically sorts by
//! declared dependency names into a [`DeploymentDescriptor`] handed to the
//! external deployment engine. Generation is pure and deterministic: no
//! I/O, no shared state, identical input yields identical output.
//!
//! ## Example
//!
//! ```rust
//! use cloudplan_config::{DeploymentConfig, VmSpec};
//! use cloudplan_gen::Assembler;
//!
//! let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
//!     .with_vm(VmSpec::new("vm-a", "n1-standard-1", "us-central1-a", "debian-12"));
//!
//! let descriptor = Assembler::assemble(&config).unwrap();
//! assert!(descriptor.is_topologically_ordered());
//! ```

pub mod assembler;
pub mod audit;
pub mod error;
pub mod project;
pub mod resource;
pub mod vm;

pub use assembler::Assembler;
pub use audit::{RemoteAuditLogGenerator, LOG_SINK_NAME};
pub use error::{PlanError, PlanResult};
pub use project::{api_enablement_name, ProjectResourceGenerator, REQUIRED_APIS};
pub use resource::{DeploymentDescriptor, ResourceDescriptor, ResourceKind};
pub use vm::VmResourceGenerator;
