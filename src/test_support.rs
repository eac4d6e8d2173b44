//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::config::Layout;
use crate::core::mapping::{MappingEntry, MappingTable};

/// A throwaway project root. Deleted on drop.
pub struct ScratchProject {
    dir: TempDir,
}

impl ScratchProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn docs(&self) -> PathBuf {
        self.root().join("docs")
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.root())
    }

    pub fn touch(&self, name: &str) {
        self.write(name, "");
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.root().join(name), contents).unwrap();
    }
}

/// Builds a validated table from `(filename, category)` pairs.
pub fn table(pairs: &[(&str, &str)]) -> MappingTable {
    MappingTable::new(
        pairs
            .iter()
            .map(|(file, category)| MappingEntry::new(*file, *category))
            .collect(),
    )
    .unwrap()
}
