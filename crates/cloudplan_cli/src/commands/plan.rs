//! Plan command - Generate a deployment descriptor.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cloudplan_config::ConfigReader;
use cloudplan_gen::Assembler;

#[derive(Args)]
pub struct PlanArgs {
    /// Path to the deployment config YAML
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write the descriptor YAML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: PlanArgs) -> Result<()> {
    info!("Planning deployment from {:?}", args.config);

    let config = ConfigReader::read(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;

    let descriptor = Assembler::assemble(&config)?;
    let yaml = serde_yaml::to_string(&descriptor)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &yaml)
                .with_context(|| format!("failed to write descriptor to {}", path.display()))?;
            println!(
                "Wrote {} resources to {}",
                descriptor.resources.len(),
                path.display()
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
