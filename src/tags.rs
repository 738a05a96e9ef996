//! Section-tag registry.
//!
//! Static mapping from logical section names to the literal identifiers used
//! in the workflow XML files. Pure lookup table; every module that touches a
//! document goes through these constants so a tag is never spelled twice.

/// Root element of a services-deployment document.
pub const SERVICES_DEPLOYMENT_ROOT: &str = "services_deployment";

/// Root element of a port-ranges document.
pub const PORT_RANGES_ROOT: &str = "port_ranges";

/// Section holding the raw `srun` invocation template.
pub const SRUN_OPTIONS: &str = "srun_options";

/// Section holding per-service node/resource placement settings.
pub const DEPLOYMENT_SETTINGS: &str = "settings";

/// Generic variables section used by workflow-level documents.
pub const VARIABLES: &str = "variables";

/// Generic parameters section used by workflow-level documents.
pub const PARAMETERS: &str = "parameters";

/// Orchestrator service component.
pub const ORCHESTRATOR: &str = "ORCHESTRATOR";

/// Command-and-control service component.
pub const COMMAND_CONTROL: &str = "COMMAND_CONTROL";

/// Application companion service component.
pub const APPLICATION_COMPANION: &str = "APPLICATION_COMPANION";

/// Lower bound field of a port-range entry.
pub const PORT_MIN: &str = "MIN";

/// Upper bound field of a port-range entry.
pub const PORT_MAX: &str = "MAX";

/// Maximum-retry field of a port-range entry.
pub const PORT_MAX_TRIES: &str = "MAX_TRIES";
