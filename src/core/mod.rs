//! # Core Logic
//!
//! Everything the `organize-root` binary does, minus argument parsing and
//! logger setup.
//!
//! ```text
//!   assets/mappings.toml ──► MappingTable ─┐
//!                                          ├──► organize() ──► Outcome per entry
//!   CLI / env / cwd ───────► Layout ───────┘         │
//!                                                    └──► Report (summary)
//! ```
//!
//! ## Modules
//!
//! - [`mapping`]: the `(filename, category)` table and its validation
//! - [`config`]: project root / docs root resolution
//! - [`organizer`]: the per-entry skip / move / fail pass

pub mod config;
pub mod mapping;
pub mod organizer;

pub use config::Layout;
pub use mapping::{MappingEntry, MappingTable};
pub use organizer::{Outcome, Report, organize};
