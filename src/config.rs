//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConfigError, Result};

/// Default output filename for an exported deployment plan.
pub const DEFAULT_PLAN_FILENAME: &str = "services_deployment_plan.yaml";

/// Component name pattern: uppercase identifier, e.g. ORCHESTRATOR.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMPONENT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"));

/// Validate a component name supplied on the command line.
///
/// Component names follow the convention of the workflow documents:
/// uppercase letters, digits and underscores, starting with a letter.
///
/// # Arguments
/// * `name` - The component name to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ConfigError::InvalidComponentName)` if invalid
///
/// # Examples
/// ```
/// use cosim_config::config::validate_component_name;
///
/// assert!(validate_component_name("ORCHESTRATOR").is_ok());
/// assert!(validate_component_name("orchestrator").is_err());
/// ```
pub fn validate_component_name(name: &str) -> Result<()> {
    if COMPONENT_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidComponentName(name.to_string()))
    }
}
