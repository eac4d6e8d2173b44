//! # Mapping Table
//!
//! The ordered list of `(filename, category)` pairs that drives a run.
//!
//! The built-in table lives in `assets/mappings.toml` and is compiled into the
//! binary. Tables are validated on construction, so the organizer never sees
//! a duplicate filename or a name that would escape the project root.

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::Deserialize;

const BUILTIN_MAPPINGS: &str = include_str!("../../assets/mappings.toml");

/// One file and the docs category it belongs in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingEntry {
    #[serde(rename = "file")]
    pub filename: String,
    /// Subdirectory under the docs root. Empty means the docs root itself.
    #[serde(default)]
    pub category: String,
}

impl MappingEntry {
    pub fn new(filename: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            category: category.into(),
        }
    }

    /// `<docs root>/<category>`, or the docs root when the category is empty.
    pub fn destination_dir(&self, docs_root: &Path) -> PathBuf {
        if self.category.is_empty() {
            docs_root.to_path_buf()
        } else {
            docs_root.join(&self.category)
        }
    }

    /// Human-readable destination, e.g. `docs/setup` or `docs/`.
    pub fn destination_label(&self, docs_name: &str) -> String {
        format!("{}/{}", docs_name, self.category)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum MappingError {
    Parse(toml::de::Error),
    EmptyFilename,
    InvalidFilename(String),
    InvalidCategory { filename: String, category: String },
    Duplicate(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::Parse(e) => write!(f, "mapping table parse error: {e}"),
            MappingError::EmptyFilename => write!(f, "mapping entry has an empty filename"),
            MappingError::InvalidFilename(name) => {
                write!(f, "mapping filename must be a bare file name: {name:?}")
            }
            MappingError::InvalidCategory { filename, category } => {
                write!(f, "invalid category {category:?} for {filename}")
            }
            MappingError::Duplicate(name) => write!(f, "duplicate mapping for {name}"),
        }
    }
}

impl std::error::Error for MappingError {}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Deserialize)]
struct MappingFile {
    #[serde(default)]
    mappings: Vec<MappingEntry>,
}

/// Immutable, validated sequence of mapping entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Builds a table from entries, rejecting anything that could move a file
    /// twice or outside the intended directories.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self, MappingError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            validate_filename(&entry.filename)?;
            validate_category(entry)?;
            if !seen.insert(entry.filename.as_str()) {
                return Err(MappingError::Duplicate(entry.filename.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses a `[[mappings]]` TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, MappingError> {
        let file: MappingFile = toml::from_str(contents).map_err(MappingError::Parse)?;
        Self::new(file.mappings)
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self, MappingError> {
        let table = Self::from_toml_str(BUILTIN_MAPPINGS)?;
        debug!("Loaded {} built-in mappings", table.len());
        Ok(table)
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate_filename(name: &str) -> Result<(), MappingError> {
    if name.is_empty() {
        return Err(MappingError::EmptyFilename);
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(MappingError::InvalidFilename(name.to_string())),
    }
}

fn validate_category(entry: &MappingEntry) -> Result<(), MappingError> {
    let ok = Path::new(&entry.category)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if ok {
        Ok(())
    } else {
        Err(MappingError::InvalidCategory {
            filename: entry.filename.clone(),
            category: entry.category.clone(),
        })
    }
}
