//! Data models for deployment configurations.

use serde::{Deserialize, Serialize};

/// Configuration for a single monitored-project deployment.
///
/// This is the input boundary of the generation layer: the config is assumed
/// to have been fully loaded before generation begins, and is never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Cloud project id for the deployed project.
    pub project_id: String,
    /// Billing account linked to the project.
    pub billing_account: String,
    /// Group granted ownership of the project.
    pub owners_group: String,
    /// Group granted read access to audit logs.
    pub auditors_group: String,
    /// Project id of the remote project that receives this project's
    /// audit logs. Must differ from `project_id`.
    pub audit_logs_project_id: String,
    /// Compute instances to create in the project. May be empty.
    #[serde(default)]
    pub vms: Vec<VmSpec>,
}

impl DeploymentConfig {
    pub fn new(
        project_id: impl Into<String>,
        billing_account: impl Into<String>,
        audit_logs_project_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            billing_account: billing_account.into(),
            owners_group: String::new(),
            auditors_group: String::new(),
            audit_logs_project_id: audit_logs_project_id.into(),
            vms: Vec::new(),
        }
    }

    pub fn with_owners_group(mut self, group: impl Into<String>) -> Self {
        self.owners_group = group.into();
        self
    }

    pub fn with_auditors_group(mut self, group: impl Into<String>) -> Self {
        self.auditors_group = group.into();
        self
    }

    pub fn with_vm(mut self, vm: VmSpec) -> Self {
        self.vms.push(vm);
        self
    }
}

/// Specification of a single compute instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmSpec {
    /// Instance name, unique within the deployment.
    pub name: String,
    /// Machine type, unqualified (e.g. `n1-standard-1`).
    pub machine_type: String,
    /// Zone the instance runs in (e.g. `us-central1-a`).
    pub zone: String,
    /// Boot disk image.
    pub boot_image: String,
    /// Network tags applied to the instance.
    #[serde(default)]
    pub network_tags: Vec<String>,
    /// Optional startup script, attached as instance metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_script: Option<String>,
}

impl VmSpec {
    pub fn new(
        name: impl Into<String>,
        machine_type: impl Into<String>,
        zone: impl Into<String>,
        boot_image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            machine_type: machine_type.into(),
            zone: zone.into(),
            boot_image: boot_image.into(),
            network_tags: Vec::new(),
            startup_script: None,
        }
    }

    pub fn with_network_tag(mut self, tag: impl Into<String>) -> Self {
        self.network_tags.push(tag.into());
        self
    }

    pub fn with_startup_script(mut self, script: impl Into<String>) -> Self {
        self.startup_script = Some(script.into());
        self
    }
}
