//! Port-range document extraction with numeric coercion.
//!
//! A port-ranges document assigns each service component a network port
//! window and a retry budget, e.g.
//!
//! ```text
//! ORCHESTRATOR          MIN 59100  MAX 59120  MAX_TRIES 20
//! COMMAND_CONTROL       MIN 59121  MAX 59150  MAX_TRIES 30
//! APPLICATION_COMPANION MIN 59150  MAX 59200  MAX_TRIES 50
//! ```
//!
//! All components are treated alike: the three fields are coerced from their
//! string form to integers, failing fast on the first value that does not
//! parse. The bounds themselves are not validated further.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::manager::SectionExtractor;
use crate::sections::{ParsedDocument, SectionMap, SectionValue};
use crate::tags;

/// Port allocation budget for one service component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortRange {
    /// Lower bound of the port window.
    pub min: i64,
    /// Upper bound of the port window.
    pub max: i64,
    /// Maximum number of bind attempts inside the window.
    pub max_tries: i64,
}

/// Extractor for port-ranges documents.
///
/// The coerced map is cleared at the start of each build and published only
/// on full success: the accessor never exposes a partially coerced map.
#[derive(Debug, Default)]
pub struct PortsManager {
    ranges: Option<BTreeMap<String, PortRange>>,
}

impl PortsManager {
    /// Create a manager with no ranges built yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-component port ranges from the last successful dissection.
    #[must_use]
    pub fn port_ranges(&self) -> Option<&BTreeMap<String, PortRange>> {
        self.ranges.as_ref()
    }

    /// Consume the manager, yielding the coerced map if one was built.
    #[must_use]
    pub fn into_ranges(self) -> Option<BTreeMap<String, PortRange>> {
        self.ranges
    }
}

impl SectionExtractor for PortsManager {
    fn root_tag(&self) -> &str {
        tags::PORT_RANGES_ROOT
    }

    /// Port-ranges documents carry no generic variables section.
    fn build_variables(&mut self, _doc: &ParsedDocument) -> Result<()> {
        Ok(())
    }

    /// No generic parameters section either.
    fn build_parameters(&mut self, _doc: &ParsedDocument) -> Result<()> {
        Ok(())
    }

    fn build_particular_sections(&mut self, doc: &ParsedDocument) -> Result<()> {
        self.ranges = None;

        let mut ranges = BTreeMap::new();
        for (component, entry) in doc.sections() {
            let fields = entry.as_map();
            ranges.insert(
                component.clone(),
                PortRange {
                    min: coerce_field(component, fields, tags::PORT_MIN)?,
                    max: coerce_field(component, fields, tags::PORT_MAX)?,
                    max_tries: coerce_field(component, fields, tags::PORT_MAX_TRIES)?,
                },
            );
        }

        self.ranges = Some(ranges);
        Ok(())
    }
}

/// Coerce one field of a component entry into an integer.
///
/// An absent field coerces like an empty string and therefore fails the same
/// way a non-numeric value does.
fn coerce_field(component: &str, fields: Option<&SectionMap>, field: &str) -> Result<i64> {
    let raw = fields
        .and_then(|map| map.get(field))
        .and_then(SectionValue::as_text)
        .unwrap_or("")
        .trim();

    raw.parse::<i64>().map_err(|_| {
        tracing::error!(component, field, value = raw, "non-numeric port value");
        ConfigError::ValueConversion {
            component: component.to_string(),
            field: field.to_string(),
            value: raw.to_string(),
        }
    })
}
