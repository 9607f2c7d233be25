//! Baseline project resource generation.

use serde_json::json;
use tracing::debug;

use cloudplan_config::{ConfigResult, ConfigValidator, DeploymentConfig};

use crate::resource::{ResourceDescriptor, ResourceKind};

/// APIs every deployed project needs enabled.
pub const REQUIRED_APIS: &[&str] = &[
    "compute.googleapis.com",
    "logging.googleapis.com",
    "iam.googleapis.com",
    "cloudresourcemanager.googleapis.com",
];

/// Name of the enablement descriptor for a service, referenced by other
/// generators as a dependency.
pub fn api_enablement_name(service: &str) -> String {
    let short = service.strip_suffix(".googleapis.com").unwrap_or(service);
    format!("enable-{short}")
}

/// Name of the billing-association descriptor.
pub const BILLING_ASSOCIATION_NAME: &str = "billing-association";

/// Generator for the baseline project resources: enabled APIs, billing
/// account association and IAM role grants.
pub struct ProjectResourceGenerator;

impl ProjectResourceGenerator {
    /// Generate the project baseline descriptors.
    ///
    /// Pure function of the config; emission order is fixed: API
    /// enablements, billing association, IAM bindings.
    pub fn generate(config: &DeploymentConfig) -> ConfigResult<Vec<ResourceDescriptor>> {
        ConfigValidator::validate_project_id(&config.project_id)?;
        debug!("Generating project resources for {}", config.project_id);

        let mut resources = Vec::new();

        for service in REQUIRED_APIS {
            resources.push(
                ResourceDescriptor::new(ResourceKind::ApiEnablement, api_enablement_name(service))
                    .with_property("project", config.project_id.as_str())
                    .with_property("service", *service),
            );
        }

        resources.push(
            ResourceDescriptor::new(ResourceKind::BillingAssociation, BILLING_ASSOCIATION_NAME)
                .with_property("project", config.project_id.as_str())
                .with_property("billing_account", config.billing_account.as_str()),
        );

        for (role, group) in Self::role_grants(config) {
            resources.push(
                ResourceDescriptor::new(ResourceKind::IamBinding, Self::binding_name(role))
                    .with_property("project", config.project_id.as_str())
                    .with_property("role", role)
                    .with_property("member", json!(format!("group:{group}")))
                    .depends_on(api_enablement_name("cloudresourcemanager.googleapis.com")),
            );
        }

        Ok(resources)
    }

    /// Role grants derived from the config groups. Empty groups produce no
    /// binding.
    fn role_grants(config: &DeploymentConfig) -> Vec<(&'static str, &str)> {
        let mut grants = Vec::new();
        if !config.owners_group.is_empty() {
            grants.push(("roles/owner", config.owners_group.as_str()));
        }
        if !config.auditors_group.is_empty() {
            grants.push(("roles/logging.viewer", config.auditors_group.as_str()));
        }
        grants
    }

    fn binding_name(role: &str) -> String {
        let short = role.strip_prefix("roles/").unwrap_or(role).replace('.', "-");
        format!("iam-{short}")
    }

    /// Names this generator claims in the shared resource namespace.
    /// VM names must not collide with any of them.
    pub(crate) fn claimed_names() -> Vec<String> {
        let mut names: Vec<String> = REQUIRED_APIS.iter().map(|s| api_enablement_name(s)).collect();
        names.push(BILLING_ASSOCIATION_NAME.to_string());
        names.push(Self::binding_name("roles/owner"));
        names.push(Self::binding_name("roles/logging.viewer"));
        names
    }
}
