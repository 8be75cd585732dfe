//! Market catalog types and loading.
//!
//! The catalog is the external product listing: which lines exist, what each
//! is called, and what it sells. On disk it is a JSON object keyed by line
//! id, each value carrying the display name and items sold. The core never
//! mutates it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::line_id::LineId;

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON is malformed
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog root is not a JSON object
    #[error("catalog root must be a JSON object keyed by line id")]
    NotAnObject,
}

/// Raw catalog value as stored on disk.
#[derive(Debug, Clone, Deserialize)]
struct RawLine {
    name: String,
    #[serde(default)]
    items_sold: Vec<String>,
}

/// One market line as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Line id; foreign key into the layout table.
    pub id: LineId,
    /// Display name of the line.
    pub name: String,
    /// Products sold there. Duplicates permitted; order irrelevant to
    /// matching.
    pub items: Vec<String>,
}

/// An ordered collection of catalog entries.
///
/// Entry order is the order of the source data. The matcher's first-match
/// semantics depend on it, so it is preserved through loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from pre-built entries, keeping their order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// The JSON root must be an object mapping line ids to
    /// `{name, items_sold}` values. Keys that are not valid line ids are
    /// skipped rather than failing the whole load.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let root: serde_json::Value = serde_json::from_str(json)?;
        let object = root.as_object().ok_or(CatalogError::NotAnObject)?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            let raw: RawLine = serde_json::from_value(value.clone())?;
            match LineId::parse(key) {
                Ok(id) => entries.push(CatalogEntry {
                    id,
                    name: raw.name,
                    items: raw.items_sold,
                }),
                Err(e) => {
                    debug!(key = %key, error = %e, "skipping catalog entry with invalid line id");
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by line id.
    pub fn get(&self, id: &LineId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
