//! Locating and loading `bem-lint.toml`.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config` (or `BEM_LINT_CONFIG`), taken as given
//! 2. `bem-lint.toml`, then `.bem-lint.toml`, in the project directory
//! 3. `config.toml` in the global directory: `$BEM_LINT_CONFIG_DIR`, else
//!    `~/.bem-lint/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use bem_lint_core::Config;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_NAMES: &[&str] = &["bem-lint.toml", ".bem-lint.toml"];
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the documents.
    Project(PathBuf),
    /// Found in the per-user directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid configuration.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the config source for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    Resolver {
        global_dir: global_config_dir(),
    }
    .resolve(project_dir, explicit)
}

/// Returns the global config directory: `$BEM_LINT_CONFIG_DIR` or
/// `~/.bem-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os("BEM_LINT_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home::home_dir().map(|h| h.join(".bem-lint")),
    }
}

/// Lookup with the global directory fixed up front, so tests need not
/// touch the environment.
struct Resolver {
    global_dir: Option<PathBuf>,
}

impl Resolver {
    fn resolve(&self, project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        if let Some(path) = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| project_dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            tracing::debug!("Found project config: {}", path.display());
            return ConfigSource::Project(path);
        }

        self.global_dir
            .as_ref()
            .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
            .filter(|candidate| candidate.is_file())
            .map_or(ConfigSource::Default, |path| {
                tracing::debug!("Found global config: {}", path.display());
                ConfigSource::Global(path)
            })
    }
}
