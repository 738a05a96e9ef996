//! The section map: fully tokenized document content keyed by section tag.
//!
//! Generic section discovery walks the element children of the document root.
//! A section with no element children becomes a raw text value; a section
//! with element children becomes a nested mapping, built recursively. The map
//! is owned by the dissection pipeline and read-only from the perspective of
//! the per-document-type extractors.

use std::collections::BTreeMap;

use roxmltree::Node;
use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::xml::{element_children, get_tag_name, get_text, has_element_children};

/// Nested mapping from section tags to their content.
pub type SectionMap = BTreeMap<String, SectionValue>;

/// Content of a single section.
///
/// Leaf sections carry their raw text verbatim (including surrounding
/// whitespace from the document); structured sections carry a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    /// Raw text of a leaf section.
    Text(String),
    /// Nested mapping of a structured section.
    Map(SectionMap),
}

impl SectionValue {
    /// The raw text, if this is a leaf section.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => None,
        }
    }

    /// The nested mapping, if this is a structured section.
    #[must_use]
    pub fn as_map(&self) -> Option<&SectionMap> {
        match self {
            Self::Text(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

/// Build the section map from a document root element.
///
/// Section tags are unique within a document by contract; if a tag repeats,
/// the last occurrence wins.
#[must_use]
pub fn build_section_map(root: Node<'_, '_>) -> SectionMap {
    let mut sections = SectionMap::new();

    for child in element_children(root) {
        let value = if has_element_children(child) {
            SectionValue::Map(build_section_map(child))
        } else {
            SectionValue::Text(get_text(child))
        };
        sections.insert(get_tag_name(child).to_string(), value);
    }

    sections
}

/// A dissected document: its display name plus the section map.
///
/// Rebuilt on every dissection pass; extractor hooks receive it read-only.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    filename: String,
    sections: SectionMap,
}

impl ParsedDocument {
    /// Create a parsed document from a section map.
    #[must_use]
    pub fn new(filename: impl Into<String>, sections: SectionMap) -> Self {
        Self {
            filename: filename.into(),
            sections,
        }
    }

    /// The document's display name, used in error reporting.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// All sections of the document.
    #[must_use]
    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Look up a section by tag.
    #[must_use]
    pub fn section(&self, tag: &str) -> Option<&SectionValue> {
        self.sections.get(tag)
    }

    /// Look up a leaf section's raw text, reporting a missing-section error
    /// when the tag is absent or the section is not a leaf.
    pub fn require_text(&self, tag: &str) -> Result<&str> {
        self.section(tag)
            .and_then(SectionValue::as_text)
            .ok_or_else(|| self.missing(tag))
    }

    /// Look up a structured section's mapping, reporting a missing-section
    /// error when the tag is absent or the section is a leaf.
    pub fn require_map(&self, tag: &str) -> Result<&SectionMap> {
        self.section(tag)
            .and_then(SectionValue::as_map)
            .ok_or_else(|| self.missing(tag))
    }

    /// Report a missing section, logging at the point of detection.
    fn missing(&self, tag: &str) -> ConfigError {
        tracing::error!("{} has no <{}>...</{}> section", self.filename, tag, tag);
        ConfigError::MissingSection {
            filename: self.filename.clone(),
            tag: tag.to_string(),
        }
    }
}
