//! Compute instance resource generation.

use serde_json::json;
use tracing::debug;

use cloudplan_config::{ConfigError, ConfigResult, ConfigValidator, DeploymentConfig, VmSpec};

use crate::audit::LOG_SINK_NAME;
use crate::project::{api_enablement_name, ProjectResourceGenerator};
use crate::resource::{ResourceDescriptor, ResourceKind};

/// Generator for the compute-instance descriptors of the VM inventory.
pub struct VmResourceGenerator;

impl VmResourceGenerator {
    /// Generate one descriptor per VM spec, in input order.
    ///
    /// Input order is preserved so repeated runs produce stable diffs.
    pub fn generate(config: &DeploymentConfig) -> ConfigResult<Vec<ResourceDescriptor>> {
        ConfigValidator::validate_vms(config)?;
        Self::reject_reserved_names(config)?;
        debug!("Generating {} VM resources for {}", config.vms.len(), config.project_id);

        Ok(config
            .vms
            .iter()
            .map(|vm| Self::vm_descriptor(config, vm))
            .collect())
    }

    /// VM names share one flat namespace with every other resource name,
    /// so a VM must not shadow a descriptor another generator emits.
    fn reject_reserved_names(config: &DeploymentConfig) -> ConfigResult<()> {
        let mut reserved = ProjectResourceGenerator::claimed_names();
        reserved.push(LOG_SINK_NAME.to_string());

        for vm in &config.vms {
            if reserved.iter().any(|name| *name == vm.name) {
                return Err(ConfigError::ReservedVmName(vm.name.clone()));
            }
        }
        Ok(())
    }

    fn vm_descriptor(config: &DeploymentConfig, vm: &VmSpec) -> ResourceDescriptor {
        let machine_type = format!("zones/{}/machineTypes/{}", vm.zone, vm.machine_type);

        let mut descriptor = ResourceDescriptor::new(ResourceKind::VmInstance, vm.name.as_str())
            .with_property("project", config.project_id.as_str())
            .with_property("zone", vm.zone.as_str())
            .with_property("machine_type", machine_type)
            .with_property("boot_image", vm.boot_image.as_str())
            .with_property("network_tags", json!(vm.network_tags))
            .depends_on(api_enablement_name("compute.googleapis.com"));

        if let Some(script) = &vm.startup_script {
            descriptor = descriptor.with_property(
                "metadata",
                json!({ "items": [{ "key": "startup-script", "value": script }] }),
            );
        }

        descriptor
    }
}
