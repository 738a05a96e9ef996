//! Command-line interface for the configuration manager.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_component_name, DEFAULT_PLAN_FILENAME};
use crate::deployment::ServicesDeploymentManager;
use crate::error::Result;
use crate::manager::dissect_file;
use crate::ports::PortsManager;
use crate::sections::SectionValue;
use crate::yaml::save_yaml;

/// Co-simulation workflow configuration manager.
#[derive(Parser)]
#[command(name = "cosim-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dissect a services-deployment document and print the plan.
    Inspect {
        /// Path to the services-deployment XML file
        file: PathBuf,
    },

    /// Export a services-deployment document as a YAML plan for the launcher.
    Export {
        /// Path to the services-deployment XML file
        file: PathBuf,

        /// Output file (default: services_deployment_plan.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dissect a port-ranges document and print the coerced ranges.
    Ports {
        /// Path to the port-ranges XML file
        file: PathBuf,

        /// Only show this component (e.g. ORCHESTRATOR)
        #[arg(short, long)]
        component: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file } => inspect_command(&file),
        Commands::Export { file, output } => export_command(&file, output.as_deref()),
        Commands::Ports { file, component } => ports_command(&file, component.as_deref()),
    }
}

/// Execute the inspect command.
fn inspect_command(file: &Path) -> Result<()> {
    let mut manager = ServicesDeploymentManager::new();
    dissect_file(file, &mut manager)?;

    if let Some(plan) = manager.services_deployment_plan() {
        println!(
            "{} {}",
            style("Launch command:").bold(),
            style(plan.launch_command.join(" ")).cyan()
        );
        println!();
        println!("{}", style("Service settings:").bold());
        for (service, value) in &plan.settings {
            println!("  {}", style(service).green());
            print_section(value, 2);
        }
    }

    Ok(())
}

/// Print a settings subtree with two-space indentation per level.
fn print_section(value: &SectionValue, depth: usize) {
    let indent = depth * 2;
    match value {
        SectionValue::Text(text) => println!("{:indent$}{}", "", text.trim()),
        SectionValue::Map(map) => {
            for (key, child) in map {
                match child {
                    SectionValue::Text(text) => {
                        println!("{:indent$}{key}: {}", "", text.trim());
                    }
                    SectionValue::Map(_) => {
                        println!("{:indent$}{key}:", "");
                        print_section(child, depth + 1);
                    }
                }
            }
        }
    }
}

/// Execute the export command.
fn export_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let mut manager = ServicesDeploymentManager::new();
    dissect_file(file, &mut manager)?;

    let output_path = output.unwrap_or_else(|| Path::new(DEFAULT_PLAN_FILENAME));
    if let Some(plan) = manager.into_plan() {
        save_yaml(&plan, output_path)?;
        println!(
            "{} {}",
            style("Saved to:").green().bold(),
            output_path.display()
        );
    }

    Ok(())
}

/// Execute the ports command.
fn ports_command(file: &Path, component: Option<&str>) -> Result<()> {
    // Validate the filter before touching the file
    if let Some(name) = component {
        validate_component_name(name)?;
    }

    let mut manager = PortsManager::new();
    dissect_file(file, &mut manager)?;

    if let Some(ranges) = manager.port_ranges() {
        println!(
            "{:<24} {:>8} {:>8} {:>10}",
            style("COMPONENT").bold(),
            style("MIN").bold(),
            style("MAX").bold(),
            style("MAX_TRIES").bold()
        );
        for (name, range) in ranges {
            if component.is_some_and(|filter| filter != name) {
                continue;
            }
            println!(
                "{:<24} {:>8} {:>8} {:>10}",
                style(name).green(),
                range.min,
                range.max,
                range.max_tries
            );
        }
    }

    Ok(())
}
