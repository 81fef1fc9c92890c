//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (a parse failure here is an error)
//! 3. `./fabgen.toml` in the current directory
//! 4. The per-user config file (see [`AppConfig::config_path`])
//! 5. Built-in defaults (always present)
//!
//! Every section and field is optional in the file; anything omitted
//! falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use fabgen_core::application::RUNTIME_PACKAGES;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input/output locations.
    pub paths: PathsConfig,
    /// External command settings.
    pub toolchain: ToolchainConfig,
    /// Packages installed into the generated project.
    pub packages: PackagesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Where the specification documents live.
    pub spec_dir: PathBuf,
    /// Where the generated application is placed.
    pub project_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            spec_dir: PathBuf::from("artifacts"),
            project_dir: PathBuf::from("new-app"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub scaffold_command: String,
    pub install_command: String,
    pub build_command: String,
    /// Bound on the build validation, in seconds.
    pub build_timeout_secs: u64,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            scaffold_command: "./setup-new-app.sh".into(),
            install_command: "npm install".into(),
            build_command: "npm run build".into(),
            build_timeout_secs: 60,
        }
    }
}

impl ToolchainConfig {
    pub fn build_timeout(&self) -> Duration {
        Duration::from_secs(self.build_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    pub runtime: Vec<String>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            runtime: RUNTIME_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration following the documented resolution order.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            // An explicitly named file must exist and parse.
            return Self::read_file(path);
        }

        for candidate in [PathBuf::from("fabgen.toml"), Self::config_path()] {
            if candidate.is_file() {
                return Self::read_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fabgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "fabgen", "fabgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fabgen.toml"))
    }
}
