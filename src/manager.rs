//! Dissection pipeline and the per-document-type extraction seam.
//!
//! Every workflow document goes through the same fixed sequence: read file →
//! parse XML → verify the root tag → build the section map → run the three
//! extraction hooks in order. What varies per document type is behind
//! [`SectionExtractor`]: which root tag identifies the document, and what the
//! hooks do with the section map. Document formats that carry the generic
//! `variables`/`parameters` sections call [`parse_variables_section`] /
//! [`parse_parameters_section`] from their hooks; formats without them
//! implement the hooks as deliberate no-ops.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Document;

use crate::error::{ConfigError, Result};
use crate::sections::{build_section_map, ParsedDocument};
use crate::tags;
use crate::xml::get_tag_name;

/// Variable reference pattern inside a variables-section value, e.g.
/// `${RESULTS_DIR}/logs`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VAR_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

/// Maximum nesting depth for variable references.
const MAX_RESOLVE_DEPTH: usize = 8;

/// Per-document-type extraction hooks.
///
/// The pipeline calls the hooks in a fixed order: `build_variables`,
/// `build_parameters`, `build_particular_sections`. Each hook returns the
/// outcome of its step; the first failure aborts the remaining steps. An
/// implementation owns whatever it extracts and exposes it through its own
/// accessors.
pub trait SectionExtractor {
    /// The root tag identifying this document type.
    fn root_tag(&self) -> &str;

    /// Parse the generic variables section.
    fn build_variables(&mut self, doc: &ParsedDocument) -> Result<()>;

    /// Parse the generic parameters section.
    fn build_parameters(&mut self, doc: &ParsedDocument) -> Result<()>;

    /// Parse the sections particular to this document type.
    fn build_particular_sections(&mut self, doc: &ParsedDocument) -> Result<()>;
}

/// Dissect a workflow document from a file.
///
/// # Arguments
/// * `path` - Path to the XML document
/// * `extractor` - Document-type-specific extractor, mutated in place
///
/// # Errors
/// IO and XML-parse failures, a root-tag mismatch, or whatever the
/// extractor's hooks report.
pub fn dissect_file<E: SectionExtractor + ?Sized>(path: &Path, extractor: &mut E) -> Result<()> {
    let xml = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    dissect_str(&xml, &filename, extractor)
}

/// Dissect a workflow document from an in-memory string.
///
/// `filename` is the display name used in error reporting.
pub fn dissect_str<E: SectionExtractor + ?Sized>(
    xml: &str,
    filename: &str,
    extractor: &mut E,
) -> Result<()> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let found = get_tag_name(root);
    if found != extractor.root_tag() {
        return Err(ConfigError::RootTagMismatch {
            expected: extractor.root_tag().to_string(),
            found: found.to_string(),
        });
    }

    let parsed = ParsedDocument::new(filename, build_section_map(root));
    tracing::debug!(
        filename,
        sections = parsed.sections().len(),
        "section map built"
    );

    extractor.build_variables(&parsed)?;
    extractor.build_parameters(&parsed)?;
    extractor.build_particular_sections(&parsed)?;

    Ok(())
}

/// Parse the generic `variables` section into a name → value map.
///
/// Values may reference other variables as `${NAME}`; references are
/// substituted repeatedly (up to a fixed depth, so reference cycles
/// terminate) and are order-independent for acyclic definitions. A reference
/// to an unknown name is left literal and logged at `warn`.
///
/// # Errors
/// Missing-section error when the document has no variables section.
pub fn parse_variables_section(doc: &ParsedDocument) -> Result<BTreeMap<String, String>> {
    let raw = doc.require_map(tags::VARIABLES)?;

    let literals: BTreeMap<&str, &str> = raw
        .iter()
        .filter_map(|(name, value)| value.as_text().map(|text| (name.as_str(), text.trim())))
        .collect();

    Ok(literals
        .iter()
        .map(|(name, value)| ((*name).to_string(), resolve_references(value, &literals)))
        .collect())
}

/// Parse the generic `parameters` section into a name → value map.
///
/// Parameter values are plain leaf text; no reference substitution.
///
/// # Errors
/// Missing-section error when the document has no parameters section.
pub fn parse_parameters_section(doc: &ParsedDocument) -> Result<BTreeMap<String, String>> {
    let raw = doc.require_map(tags::PARAMETERS)?;

    Ok(raw
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_text()
                .map(|text| (name.clone(), text.trim().to_string()))
        })
        .collect())
}

/// Substitute `${NAME}` references against the literal definitions.
fn resolve_references(value: &str, literals: &BTreeMap<&str, &str>) -> String {
    let mut current = value.to_string();

    for _ in 0..MAX_RESOLVE_DEPTH {
        if !current.contains("${") {
            break;
        }

        let next = VAR_REF_PATTERN
            .replace_all(&current, |caps: &regex::Captures<'_>| {
                match literals.get(&caps[1]) {
                    Some(replacement) => (*replacement).to_string(),
                    None => {
                        tracing::warn!("unresolved variable reference: ${{{}}}", &caps[1]);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned();

        if next == current {
            // Only unknown references remain
            break;
        }
        current = next;
    }

    current
}
