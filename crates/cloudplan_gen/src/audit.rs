//! Remote audit-log sink generation.

use tracing::debug;

use cloudplan_config::{ConfigResult, ConfigValidator, DeploymentConfig};

use crate::project::api_enablement_name;
use crate::resource::{ResourceDescriptor, ResourceKind};

/// Fixed name of the audit-log sink resource.
pub const LOG_SINK_NAME: &str = "audit-logs-to-bigquery";

/// Filter selecting the project's audit-log entries.
const AUDIT_LOG_FILTER: &str = r#"logName:"logs/cloudaudit.googleapis.com""#;

/// Generator for the log sink routing this project's audit logs to the
/// centrally owned audit-logging project.
pub struct RemoteAuditLogGenerator;

impl RemoteAuditLogGenerator {
    /// Generate the single log-sink descriptor.
    pub fn generate(config: &DeploymentConfig) -> ConfigResult<Vec<ResourceDescriptor>> {
        ConfigValidator::validate_audit_destination(config)?;
        debug!(
            "Generating audit-log sink {} -> {}",
            config.project_id, config.audit_logs_project_id
        );

        let destination = format!(
            "bigquery.googleapis.com/projects/{}/datasets/audit_logs",
            config.audit_logs_project_id
        );

        let sink = ResourceDescriptor::new(ResourceKind::LogSink, LOG_SINK_NAME)
            .with_property("project", config.project_id.as_str())
            .with_property("destination", destination)
            .with_property("filter", AUDIT_LOG_FILTER)
            .depends_on(api_enablement_name("logging.googleapis.com"));

        Ok(vec![sink])
    }
}
