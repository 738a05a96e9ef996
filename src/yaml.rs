//! YAML output generation for deployment plans.
//!
//! The launcher tooling consumes the extracted plan as YAML; this module is
//! the single place where that rendering happens.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::deployment::ServicesDeploymentPlan;
use crate::error::Result;

/// Render a deployment plan as a YAML string.
pub fn generate_yaml(plan: &ServicesDeploymentPlan) -> Result<String> {
    Ok(serde_yaml_ng::to_string(plan)?)
}

/// Write a deployment plan to a YAML file.
///
/// # Arguments
/// * `plan` - The plan to serialize
/// * `path` - Destination file, overwritten if it exists
pub fn save_yaml(plan: &ServicesDeploymentPlan, path: &Path) -> Result<()> {
    let yaml = generate_yaml(plan)?;
    let mut file = File::create(path)?;
    file.write_all(yaml.as_bytes())?;
    Ok(())
}
