//! Validate command - Check a deployment config.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use cloudplan_config::{ConfigReader, ConfigValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the deployment config YAML
    #[arg(short, long)]
    pub config: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating deployment config {:?}", args.config);

    let config = ConfigReader::read(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;

    let result = ConfigValidator::validate(&config);

    if result.valid {
        println!(
            "Config OK: project {} with {} VM(s)",
            config.project_id,
            config.vms.len()
        );
        Ok(())
    } else {
        for error in &result.errors {
            eprintln!("  - {error}");
        }
        bail!("validation failed with {} error(s)", result.errors.len());
    }
}
