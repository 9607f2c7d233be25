//! Integration tests for descriptor generation and assembly.

use cloudplan_config::{DeploymentConfig, VmSpec};
use cloudplan_gen::{Assembler, PlanError, ResourceKind, LOG_SINK_NAME};

fn sample_config() -> DeploymentConfig {
    DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
        .with_owners_group("owners@example.com")
        .with_auditors_group("auditors@example.com")
        .with_vm(VmSpec::new("vm-a", "n1-standard-1", "us-central1-a", "debian-12"))
        .with_vm(
            VmSpec::new("vm-b", "n1-standard-2", "us-east1-b", "debian-12")
                .with_network_tag("web")
                .with_startup_script("#!/bin/bash\nsystemctl start app"),
        )
}

#[test]
fn test_assemble_is_topologically_ordered() {
    let descriptor = Assembler::assemble(&sample_config()).unwrap();
    assert!(descriptor.is_topologically_ordered());
}

#[test]
fn test_compute_enablement_precedes_vms() {
    let descriptor = Assembler::assemble(&sample_config()).unwrap();

    let compute = descriptor.index_of("enable-compute").unwrap();
    assert!(compute < descriptor.index_of("vm-a").unwrap());
    assert!(compute < descriptor.index_of("vm-b").unwrap());
}

#[test]
fn test_logging_enablement_precedes_sink() {
    let descriptor = Assembler::assemble(&sample_config()).unwrap();

    let logging = descriptor.index_of("enable-logging").unwrap();
    assert!(logging < descriptor.index_of(LOG_SINK_NAME).unwrap());
}

#[test]
fn test_vm_input_order_survives_assembly() {
    let descriptor = Assembler::assemble(&sample_config()).unwrap();
    assert!(descriptor.index_of("vm-a").unwrap() < descriptor.index_of("vm-b").unwrap());
}

#[test]
fn test_assemble_is_idempotent() {
    let config = sample_config();
    let first = Assembler::assemble(&config).unwrap();
    let second = Assembler::assemble(&config).unwrap();

    assert_eq!(first, second);
    // Byte-for-byte identical under serialization, property order included.
    assert_eq!(
        serde_yaml::to_string(&first).unwrap(),
        serde_yaml::to_string(&second).unwrap()
    );
}

#[test]
fn test_empty_vm_inventory_still_assembles() {
    let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj");
    let descriptor = Assembler::assemble(&config).unwrap();

    assert!(descriptor
        .resources
        .iter()
        .all(|r| r.kind != ResourceKind::VmInstance));
    assert!(descriptor.index_of(LOG_SINK_NAME).is_some());
    assert!(descriptor.is_topologically_ordered());
}

#[test]
fn test_self_sink_aborts_assembly() {
    let mut config = sample_config();
    config.audit_logs_project_id = config.project_id.clone();

    assert!(matches!(
        Assembler::assemble(&config),
        Err(PlanError::Config(cloudplan_config::ConfigError::SelfSink(_)))
    ));
}

#[test]
fn test_duplicate_vm_names_abort_assembly() {
    let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj")
        .with_vm(VmSpec::new("vm-a", "n1-standard-1", "us-central1-a", "debian-12"))
        .with_vm(VmSpec::new("vm-a", "n1-standard-2", "us-central1-b", "debian-12"));

    assert!(matches!(
        Assembler::assemble(&config),
        Err(PlanError::Config(
            cloudplan_config::ConfigError::DuplicateVmName(_)
        ))
    ));
}

#[test]
fn test_vm_named_like_generated_resource_aborts_assembly() {
    // VM names live in the same namespace as generator-emitted names; a
    // collision must be a config error, never a corrupted descriptor or a
    // cycle report.
    for reserved in ["enable-compute", "billing-association"] {
        let config = DeploymentConfig::new("proj-1", "BILL-1", "audit-proj").with_vm(VmSpec::new(
            reserved,
            "n1-standard-1",
            "us-central1-a",
            "debian-12",
        ));

        assert!(
            matches!(
                Assembler::assemble(&config),
                Err(PlanError::Config(
                    cloudplan_config::ConfigError::ReservedVmName(_)
                ))
            ),
            "{reserved}"
        );
    }
}

#[test]
fn test_invalid_project_id_aborts_assembly() {
    let config = DeploymentConfig::new("Not A Project", "BILL-1", "audit-proj");
    assert!(matches!(
        Assembler::assemble(&config),
        Err(PlanError::Config(
            cloudplan_config::ConfigError::InvalidProjectId(_)
        ))
    ));
}

#[test]
fn test_descriptor_serializes_with_stable_keys() {
    let descriptor = Assembler::assemble(&sample_config()).unwrap();
    let yaml = serde_yaml::to_string(&descriptor).unwrap();

    // Spot-check that the manifest carries the expected content.
    assert!(yaml.contains("enable-compute"));
    assert!(yaml.contains("audit-logs-to-bigquery"));
    assert!(yaml.contains("zones/us-central1-a/machineTypes/n1-standard-1"));
    assert!(yaml.contains("startup-script"));
}
