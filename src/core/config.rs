//! # Configuration
//!
//! Resolves where files are read from and where they go, with a clear
//! override hierarchy: defaults → env vars → CLI flags.
//!
//! - project root: `--root` → `ORGANIZE_ROOT` → current working directory
//! - docs root: `--docs-dir` → `ORGANIZE_DOCS_DIR` → `<project root>/docs`
//!
//! A relative docs override is taken relative to the project root.

use log::{debug, info};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

pub const ROOT_ENV_VAR: &str = "ORGANIZE_ROOT";
pub const DOCS_DIR_ENV_VAR: &str = "ORGANIZE_DOCS_DIR";
pub const DEFAULT_DOCS_DIR: &str = "docs";

// ============================================================================
// Overrides (sparse, all fields Option<T>)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub root: Option<PathBuf>,
    pub docs_dir: Option<PathBuf>,
}

impl LayoutOverrides {
    /// Reads `ORGANIZE_ROOT` and `ORGANIZE_DOCS_DIR`. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            root: env_path(ROOT_ENV_VAR),
            docs_dir: env_path(DOCS_DIR_ENV_VAR),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// ============================================================================
// Resolved Layout (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub project_root: PathBuf,
    pub docs_root: PathBuf,
}

impl Layout {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let docs_root = project_root.join(DEFAULT_DOCS_DIR);
        Self {
            project_root,
            docs_root,
        }
    }

    pub fn with_docs_root(mut self, docs_root: impl Into<PathBuf>) -> Self {
        self.docs_root = docs_root.into();
        self
    }

    /// Final path component of the docs root, used in console notices.
    pub fn docs_name(&self) -> String {
        self.docs_root
            .file_name()
            .map(OsStr::to_string_lossy)
            .map(|s| s.into_owned())
            .unwrap_or_else(|| DEFAULT_DOCS_DIR.to_string())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    CurrentDir(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CurrentDir(e) => {
                write!(f, "could not determine current directory: {e}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the layout from CLI flags, then env vars, then the working directory.
pub fn resolve(cli: &LayoutOverrides) -> Result<Layout, ConfigError> {
    let env = LayoutOverrides::from_env();
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    let layout = resolve_with(cli, &env, &cwd);
    info!(
        "Project root: {}, docs root: {}",
        layout.project_root.display(),
        layout.docs_root.display()
    );
    Ok(layout)
}

/// Pure part of [`resolve`]: collapses CLI → env → `cwd`.
pub fn resolve_with(cli: &LayoutOverrides, env: &LayoutOverrides, cwd: &Path) -> Layout {
    let project_root = cli
        .root
        .clone()
        .or_else(|| env.root.clone())
        .map(|root| cwd.join(root))
        .unwrap_or_else(|| cwd.to_path_buf());

    let layout = Layout::new(project_root);
    match cli.docs_dir.as_ref().or(env.docs_dir.as_ref()) {
        Some(docs) => {
            debug!("Docs dir override: {}", docs.display());
            let docs_root = layout.project_root.join(docs);
            layout.with_docs_root(docs_root)
        }
        None => layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(root: Option<&str>, docs: Option<&str>) -> LayoutOverrides {
        LayoutOverrides {
            root: root.map(PathBuf::from),
            docs_dir: docs.map(PathBuf::from),
        }
    }

    #[test]
    fn test_resolve_uses_cwd_when_empty() {
        let layout = resolve_with(&overrides(None, None), &overrides(None, None), Path::new("/work"));
        assert_eq!(layout.project_root, PathBuf::from("/work"));
        assert_eq!(layout.docs_root, PathBuf::from("/work/docs"));
    }

    #[test]
    fn test_env_overrides_cwd() {
        let env = overrides(Some("/from-env"), Some("handbook"));
        let layout = resolve_with(&overrides(None, None), &env, Path::new("/work"));
        assert_eq!(layout.project_root, PathBuf::from("/from-env"));
        assert_eq!(layout.docs_root, PathBuf::from("/from-env/handbook"));
    }

    #[test]
    fn test_cli_wins_over_env() {
        let cli = overrides(Some("/from-cli"), None);
        let env = overrides(Some("/from-env"), Some("/abs/docs"));
        let layout = resolve_with(&cli, &env, Path::new("/work"));
        assert_eq!(layout.project_root, PathBuf::from("/from-cli"));
        // Absolute docs override is kept as-is
        assert_eq!(layout.docs_root, PathBuf::from("/abs/docs"));
    }

    #[test]
    fn test_relative_root_is_relative_to_cwd() {
        let cli = overrides(Some("repo"), None);
        let layout = resolve_with(&cli, &overrides(None, None), Path::new("/work"));
        assert_eq!(layout.project_root, PathBuf::from("/work/repo"));
        assert_eq!(layout.docs_root, PathBuf::from("/work/repo/docs"));
    }

    #[test]
    fn test_docs_name() {
        assert_eq!(Layout::new("/p").docs_name(), "docs");
        let layout = Layout::new("/p").with_docs_root("/p/handbook");
        assert_eq!(layout.docs_name(), "handbook");
        assert_eq!(Layout::new("/").with_docs_root("/").docs_name(), "docs");
    }
}
