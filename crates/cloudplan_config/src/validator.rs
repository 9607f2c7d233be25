//! Deployment config validation utilities.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConfigError, ConfigResult};
use crate::models::DeploymentConfig;

/// Cloud project-id pattern: 6-30 characters, lowercase letters, digits and
/// hyphens, starting with a letter and not ending with a hyphen.
static PROJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]{4,28}[a-z0-9]$").expect("valid project-id regex"));

/// Zones the deployment engine is known to accept.
pub const KNOWN_ZONES: &[&str] = &[
    "us-central1-a",
    "us-central1-b",
    "us-central1-c",
    "us-central1-f",
    "us-east1-b",
    "us-east1-c",
    "us-east1-d",
    "us-west1-a",
    "us-west1-b",
    "us-west1-c",
    "europe-west1-b",
    "europe-west1-c",
    "europe-west1-d",
    "asia-east1-a",
    "asia-east1-b",
    "asia-east1-c",
];

/// Check whether a zone is on the allow-list.
pub fn is_known_zone(zone: &str) -> bool {
    KNOWN_ZONES.contains(&zone)
}

/// Validation result with details, collected rather than fail-fast so a
/// config review reports every problem at once.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }
}

/// Validator for deployment configs.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a project id against the cloud project-id pattern.
    pub fn validate_project_id(project_id: &str) -> ConfigResult<()> {
        if !PROJECT_ID_RE.is_match(project_id) {
            return Err(ConfigError::InvalidProjectId(project_id.to_string()));
        }
        Ok(())
    }

    /// Check that the audit-log destination is a different, non-empty project.
    pub fn validate_audit_destination(config: &DeploymentConfig) -> ConfigResult<()> {
        if config.project_id.is_empty() {
            return Err(ConfigError::MissingField("project_id".to_string()));
        }
        if config.audit_logs_project_id.is_empty() {
            return Err(ConfigError::MissingField("audit_logs_project_id".to_string()));
        }
        if config.audit_logs_project_id == config.project_id {
            return Err(ConfigError::SelfSink(config.project_id.clone()));
        }
        Ok(())
    }

    /// Check VM specs: unique names, non-empty allow-listed zones.
    pub fn validate_vms(config: &DeploymentConfig) -> ConfigResult<()> {
        let mut seen = std::collections::HashSet::new();
        for vm in &config.vms {
            if !seen.insert(vm.name.as_str()) {
                return Err(ConfigError::DuplicateVmName(vm.name.clone()));
            }
            if !is_known_zone(&vm.zone) {
                return Err(ConfigError::UnknownZone {
                    vm: vm.name.clone(),
                    zone: vm.zone.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate an entire config, collecting every error.
    pub fn validate(config: &DeploymentConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Err(e) = Self::validate_project_id(&config.project_id) {
            result.add_error(e.to_string());
        }
        if config.billing_account.is_empty() {
            result.add_error("billing_account cannot be empty");
        }
        if let Err(e) = Self::validate_audit_destination(config) {
            result.add_error(e.to_string());
        }
        if let Err(e) = Self::validate_vms(config) {
            result.add_error(e.to_string());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VmSpec;

    #[test]
    fn test_valid_project_ids() {
        for id in ["proj-1", "my-project-123", "abcdef"] {
            assert!(ConfigValidator::validate_project_id(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn test_invalid_project_ids() {
        for id in ["", "short", "UPPERCASE-ID", "1-starts-with-digit", "ends-with-hyphen-"] {
            assert!(ConfigValidator::validate_project_id(id).is_err(), "{id}");
        }
    }

    #[test]
    fn test_project_id_length_bounds() {
        assert!(ConfigValidator::validate_project_id(&"a".repeat(6)).is_ok());
        assert!(ConfigValidator::validate_project_id(&"a".repeat(30)).is_ok());
        assert!(ConfigValidator::validate_project_id(&"a".repeat(5)).is_err());
        assert!(ConfigValidator::validate_project_id(&"a".repeat(31)).is_err());
    }

    #[test]
    fn test_self_sink_rejected() {
        let config = DeploymentConfig::new("proj-1", "BILL-1", "proj-1");
        assert!(matches!(
            ConfigValidator::validate_audit_destination(&config),
            Err(ConfigError::SelfSink(_))
        ));
    }

    #[test]
    fn test_empty_source_project_fails_audit_destination_check() {
        let config = DeploymentConfig::new("", "BILL-1", "audit-proj");
        assert!(matches!(
            ConfigValidator::validate_audit_destination(&config),
            Err(ConfigError::MissingField(field)) if field == "project_id"
        ));
    }

    #[test]
    fn test_duplicate_vm_names_rejected() {
        let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
            .with_vm(VmSpec::new("vm-a", "n1-standard-1", "us-central1-a", "debian-12"))
            .with_vm(VmSpec::new("vm-a", "n1-standard-2", "us-central1-b", "debian-12"));

        assert!(matches!(
            ConfigValidator::validate_vms(&config),
            Err(ConfigError::DuplicateVmName(name)) if name == "vm-a"
        ));
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
            .with_vm(VmSpec::new("vm-a", "n1-standard-1", "mars-central1-a", "debian-12"));

        assert!(matches!(
            ConfigValidator::validate_vms(&config),
            Err(ConfigError::UnknownZone { zone, .. }) if zone == "mars-central1-a"
        ));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = DeploymentConfig::new("x", "", "x");
        let result = ConfigValidator::validate(&config);
        assert!(!result.valid);
        assert!(result.errors.len() >= 3);
    }
}
