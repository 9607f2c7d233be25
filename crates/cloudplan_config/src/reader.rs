//! Config file reading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigResult;
use crate::models::DeploymentConfig;

/// Reader for deployment config files.
pub struct ConfigReader;

impl ConfigReader {
    /// Read a deployment config from a YAML file.
    pub fn read(path: impl AsRef<Path>) -> ConfigResult<DeploymentConfig> {
        let path = path.as_ref();
        debug!("Reading deployment config from {:?}", path);

        let content = fs::read_to_string(path)?;
        Self::read_str(&content)
    }

    /// Parse a deployment config from a YAML string.
    pub fn read_str(content: &str) -> ConfigResult<DeploymentConfig> {
        let config: DeploymentConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
project_id: proj-1
billing_account: BILL-1
owners_group: owners@example.com
auditors_group: auditors@example.com
audit_logs_project_id: audit-proj
vms:
  - name: vm-a
    machine_type: n1-standard-1
    zone: us-central1-a
    boot_image: debian-12
    network_tags: [web]
"#;

    #[test]
    fn test_read_str() {
        let config = ConfigReader::read_str(SAMPLE).unwrap();
        assert_eq!(config.project_id, "proj-1");
        assert_eq!(config.audit_logs_project_id, "audit-proj");
        assert_eq!(config.vms.len(), 1);
        assert_eq!(config.vms[0].network_tags, vec!["web".to_string()]);
    }

    #[test]
    fn test_read_str_vms_default_empty() {
        let config = ConfigReader::read_str(
            "project_id: proj-1\nbilling_account: BILL-1\nowners_group: o@x\nauditors_group: a@x\naudit_logs_project_id: audit-proj\n",
        )
        .unwrap();
        assert!(config.vms.is_empty());
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = ConfigReader::read_str(SAMPLE).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reparsed = ConfigReader::read_str(&yaml).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployment.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let config = ConfigReader::read(&path).unwrap();
        assert_eq!(config.billing_account, "BILL-1");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = ConfigReader::read("/nonexistent/deployment.yaml").unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Io(_)));
    }
}
