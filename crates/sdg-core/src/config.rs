//! Badge configuration: asset resolution and default sizing.
//!
//! Loaded from `badge_config.toml` when present, with environment overrides
//! (`UN_SDG_ASSET_MODE`, `UN_SDG_ASSET_BASE`, `UN_SDG_WIDTH`,
//! `UN_SDG_HEIGHT`). Unset or invalid values fall back to defaults, so the
//! component renders with no external files at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BadgeResult;
use crate::selection::DEFAULT_DIMENSION;

/// Default local directory holding the badge artwork.
pub const DEFAULT_ASSET_BASE: &str = "./lib";

// ---------------------------------------------------------------------------
// AssetSource: file-name -> loadable URI
// ---------------------------------------------------------------------------

/// Where badge artwork is resolved from. The registry stores bare file names
/// (`goal-4.svg`, `circle.png`); the source joins them to a URI the host
/// image loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetMode {
    /// Files next to the application, served as `file://` URIs.
    #[default]
    Local,
    /// Remote base URL, joined as `https://.../{file}`.
    Remote,
}

impl AssetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetMode::Local => "local",
            AssetMode::Remote => "remote",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "remote" => AssetMode::Remote,
            _ => AssetMode::Local,
        }
    }
}

/// Resolver from registry asset file names to loadable URIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSource {
    pub mode: AssetMode,
    pub base: String,
}

impl Default for AssetSource {
    fn default() -> Self {
        Self::local(DEFAULT_ASSET_BASE)
    }
}

impl AssetSource {
    pub fn local(base: &str) -> Self {
        Self { mode: AssetMode::Local, base: base.to_string() }
    }

    pub fn remote(base: &str) -> Self {
        Self { mode: AssetMode::Remote, base: base.to_string() }
    }

    /// Joins a registry asset file name to a URI. Local mode produces a
    /// `file://` URI for the host's file loader; remote mode joins onto the
    /// configured base URL.
    pub fn resolve(&self, asset_file: &str) -> String {
        let base = self.base.trim_end_matches('/');
        match self.mode {
            AssetMode::Local => format!("file://{base}/{asset_file}"),
            AssetMode::Remote => format!("{base}/{asset_file}"),
        }
    }
}

// ---------------------------------------------------------------------------
// BadgeConfig
// ---------------------------------------------------------------------------

fn default_asset_base() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

fn default_dimension() -> String {
    DEFAULT_DIMENSION.to_string()
}

/// Host-level configuration. File values are overridden by environment
/// variables; both are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    #[serde(default)]
    pub asset_mode: AssetMode,
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    /// Initial container width for new badge instances.
    #[serde(default = "default_dimension")]
    pub width: String,
    #[serde(default = "default_dimension")]
    pub height: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            asset_mode: AssetMode::default(),
            asset_base: default_asset_base(),
            width: default_dimension(),
            height: default_dimension(),
        }
    }
}

impl BadgeConfig {
    /// Loads `badge_config.toml` from the current directory when present,
    /// then applies environment overrides. Never fails: unreadable or
    /// unparsable files are logged and replaced by defaults.
    pub fn load() -> Self {
        let mut config = match Self::load_from_path(Path::new("badge_config.toml")) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "badge_config.toml unreadable; using defaults");
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Loads configuration from a specific path. A missing file is not an
    /// error and yields defaults.
    pub fn load_from_path(path: &Path) -> BadgeResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: BadgeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Environment overrides: an unset or empty variable leaves the file
    /// value in place.
    pub fn apply_env(&mut self) {
        if let Some(mode) = env_opt_string("UN_SDG_ASSET_MODE") {
            self.asset_mode = AssetMode::from_str(&mode);
        }
        if let Some(base) = env_opt_string("UN_SDG_ASSET_BASE") {
            self.asset_base = base;
        }
        if let Some(width) = env_opt_string("UN_SDG_WIDTH") {
            self.width = width;
        }
        if let Some(height) = env_opt_string("UN_SDG_HEIGHT") {
            self.height = height;
        }
    }

    pub fn asset_source(&self) -> AssetSource {
        AssetSource { mode: self.asset_mode, base: self.asset_base.clone() }
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_source_resolve() {
        let local = AssetSource::local("./lib");
        assert_eq!(local.resolve("goal-1.svg"), "file://./lib/goal-1.svg");

        let trailing = AssetSource::local("./lib/");
        assert_eq!(trailing.resolve("circle.png"), "file://./lib/circle.png");

        let remote = AssetSource::remote("https://example.org/sdg/lib");
        assert_eq!(remote.resolve("all.svg"), "https://example.org/sdg/lib/all.svg");
    }

    #[test]
    fn test_asset_mode_parse() {
        assert_eq!(AssetMode::from_str("remote"), AssetMode::Remote);
        assert_eq!(AssetMode::from_str("Remote"), AssetMode::Remote);
        assert_eq!(AssetMode::from_str("local"), AssetMode::Local);
        assert_eq!(AssetMode::from_str("cdn"), AssetMode::Local);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BadgeConfig::load_from_path(&dir.path().join("badge_config.toml")).unwrap();
        assert_eq!(config.asset_mode, AssetMode::Local);
        assert_eq!(config.asset_base, DEFAULT_ASSET_BASE);
        assert_eq!(config.width, DEFAULT_DIMENSION);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge_config.toml");
        std::fs::write(
            &path,
            "asset_mode = \"remote\"\nasset_base = \"https://example.org/lib\"\nwidth = \"128px\"\n",
        )
        .unwrap();
        let config = BadgeConfig::load_from_path(&path).unwrap();
        assert_eq!(config.asset_mode, AssetMode::Remote);
        assert_eq!(config.asset_base, "https://example.org/lib");
        assert_eq!(config.width, "128px");
        // unset fields keep their defaults
        assert_eq!(config.height, DEFAULT_DIMENSION);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge_config.toml");
        std::fs::write(&path, "asset_mode = [not toml").unwrap();
        assert!(BadgeConfig::load_from_path(&path).is_err());
    }
}
