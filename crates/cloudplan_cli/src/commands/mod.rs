//! CLI command definitions.
//!
//! Each subcommand maps to one step of the deployment-preparation flow:
//! validate a config, or turn it into a deployment descriptor.

use clap::{Parser, Subcommand};

pub mod plan;
pub mod validate;

/// cloudplan - deployment descriptor generation
#[derive(Parser)]
#[command(name = "cloudplan")]
#[command(version, about = "cloudplan - deployment descriptor generation")]
#[command(long_about = r#"
cloudplan turns a validated project deployment config into a complete,
dependency-ordered resource manifest for the deployment engine.

WORKFLOWS:
  plan       → Generate the deployment descriptor from a config YAML
  validate   → Check a config YAML without generating anything

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  5 - Generation error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a deployment descriptor from a config file
    Plan(plan::PlanArgs),

    /// Validate a deployment config file
    Validate(validate::ValidateArgs),
}
