//! # Root Organizer
//!
//! Walks a [`MappingTable`] in order and relocates each file that exists at
//! the project root into its docs category.
//!
//! ```text
//! pending ──(source missing)──────────────────────────► Skipped
//!    │
//!    └──► ensure dest dir ──► move ──(ok)──────────────► Moved
//!              │               └──(err)────────────────► Failed
//!              └──(err)────────────────────────────────► Failed
//! ```
//!
//! Entries are independent. A failure is reported and the run moves on, so
//! the summary is always produced.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::config::Layout;
use crate::core::mapping::{MappingEntry, MappingTable};

/// What happened to a single mapping entry.
#[derive(Debug)]
pub enum Outcome {
    /// Source was not present at the project root.
    Skipped { filename: String },
    Moved {
        filename: String,
        /// e.g. `docs/setup`
        label: String,
        destination: PathBuf,
    },
    /// Creating the destination directory or moving the file failed.
    Failed { filename: String, error: io::Error },
}

impl Outcome {
    pub fn filename(&self) -> &str {
        match self {
            Outcome::Skipped { filename }
            | Outcome::Moved { filename, .. }
            | Outcome::Failed { filename, .. } => filename,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Skipped { filename } => write!(f, "⏭️  Skipped (not found): {filename}"),
            Outcome::Moved { filename, label, .. } => write!(f, "✅ Moved: {filename} -> {label}"),
            Outcome::Failed { filename, error } => write!(f, "❌ Error moving {filename}: {error}"),
        }
    }
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Report {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Moved { .. } => self.moved += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📊 Summary: {} moved, {} skipped", self.moved, self.skipped)
    }
}

/// Processes every entry of `table` against `layout`, handing each outcome to
/// `on_outcome` as soon as it is known.
pub fn organize<F>(table: &MappingTable, layout: &Layout, mut on_outcome: F) -> Report
where
    F: FnMut(&Outcome),
{
    info!(
        "Organizing {} mapped files from {}",
        table.len(),
        layout.project_root.display()
    );
    let docs_name = layout.docs_name();
    let mut report = Report::default();

    for entry in table {
        let outcome = process_entry(entry, layout, &docs_name);
        report.record(&outcome);
        on_outcome(&outcome);
    }

    info!(
        "Done: {} moved, {} skipped, {} failed",
        report.moved, report.skipped, report.failed
    );
    report
}

fn process_entry(entry: &MappingEntry, layout: &Layout, docs_name: &str) -> Outcome {
    let filename = entry.filename.clone();
    let source = layout.project_root.join(&entry.filename);

    // Follows links: a dangling symlink counts as absent
    if !source.exists() {
        debug!("Not found: {}", source.display());
        return Outcome::Skipped { filename };
    }

    let dest_dir = entry.destination_dir(&layout.docs_root);
    if let Err(error) = fs::create_dir_all(&dest_dir) {
        warn!("Failed to create {}: {}", dest_dir.display(), error);
        return Outcome::Failed { filename, error };
    }

    let destination = dest_dir.join(&entry.filename);
    match move_path(&source, &destination) {
        Ok(()) => {
            debug!("{} -> {}", source.display(), destination.display());
            Outcome::Moved {
                filename,
                label: entry.destination_label(docs_name),
                destination,
            }
        }
        Err(error) => {
            warn!("Failed to move {}: {}", source.display(), error);
            Outcome::Failed { filename, error }
        }
    }
}

/// Renames `source` to `destination`, replacing an existing file there.
///
/// Falls back to [`copy_then_remove`] when the two paths are on different
/// filesystems.
pub fn move_path(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("Cross-device move, copying {}", source.display());
            copy_then_remove(source, destination)
        }
        Err(e) => Err(e),
    }
}

/// Copies a regular file to `destination`, overwriting it, then removes the
/// source. Directories and symlinks are refused and left in place.
pub fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let file_type = fs::symlink_metadata(source)?.file_type();
    if !file_type.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot copy non-regular file across devices: {}", source.display()),
        ));
    }
    fs::copy(source, destination)?;
    fs::remove_file(source)
}
