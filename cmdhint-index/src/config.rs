//! Configuration for cmdhint.
//!
//! Discovers and loads `cmdhint.toml`. The config names the index directory,
//! the sources directory probed for repository-enablement markers, and the
//! channel catalog in scan priority order. Compiled-in defaults mirror a
//! stock Termux layout and apply when no file is present.

use camino::{Utf8Path, Utf8PathBuf};
use cmdhint_types::ChannelTag;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "cmdhint.toml";

const DEFAULT_PREFIX: &str = "/data/data/com.termux/files/usr";

/// One channel in the catalog: its tag and the index file backing it.
///
/// Catalog order is the documented scan priority order; the default (empty
/// tag) channel comes first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelSpec {
    /// Repository tag; empty means the default, always-enabled channel.
    #[serde(default)]
    pub tag: ChannelTag,

    /// Index file name, resolved against the index directory.
    pub file: String,
}

/// Top-level configuration from cmdhint.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CmdhintConfig {
    pub paths: PathsConfig,

    /// Channel catalog in scan priority order.
    pub channels: Vec<ChannelSpec>,
}

impl Default for CmdhintConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            channels: default_channels(),
        }
    }
}

/// Paths section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the per-channel index files.
    pub index_dir: Utf8PathBuf,

    /// Directory probed for `<tag>.list` repository-enablement markers.
    pub sources_dir: Utf8PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            index_dir: Utf8PathBuf::from(format!("{DEFAULT_PREFIX}/libexec/cmdhint")),
            sources_dir: Utf8PathBuf::from(format!("{DEFAULT_PREFIX}/etc/apt/sources.list.d")),
        }
    }
}

/// The built-in catalog: default channel first, then the add-on channels.
pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec {
            tag: ChannelTag::default_channel(),
            file: "commands-main.list".to_string(),
        },
        ChannelSpec {
            tag: ChannelTag::new("root"),
            file: "commands-root.list".to_string(),
        },
        ChannelSpec {
            tag: ChannelTag::new("x11"),
            file: "commands-x11.list".to_string(),
        },
    ]
}

/// Discover the cmdhint.toml config file inside `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a cmdhint.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<CmdhintConfig> {
    use anyhow::Context;
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<CmdhintConfig> {
    use anyhow::Context;
    let config: CmdhintConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from an explicit path, discover it next to the default index
/// directory, or fall back to compiled-in defaults.
pub fn load_or_default(explicit: Option<&Utf8Path>) -> anyhow::Result<CmdhintConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match discover_config(&PathsConfig::default().index_dir) {
            Some(path) => load_config(&path),
            None => Ok(CmdhintConfig::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_catalog_orders_default_channel_first() {
        let channels = default_channels();
        assert_eq!(channels.len(), 3);
        assert!(channels[0].tag.is_default());
        assert_eq!(channels[1].tag.as_str(), "root");
        assert_eq!(channels[2].tag.as_str(), "x11");
    }

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
[paths]
index_dir = "/opt/cmdhint/indexes"
sources_dir = "/opt/cmdhint/sources.list.d"

[[channels]]
tag = ""
file = "commands-main.list"

[[channels]]
tag = "science"
file = "commands-science.list"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.index_dir, "/opt/cmdhint/indexes");
        assert_eq!(config.channels.len(), 2);
        assert!(config.channels[0].tag.is_default());
        assert_eq!(config.channels[1].tag.as_str(), "science");
        assert_eq!(config.channels[1].file, "commands-science.list");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.channels, default_channels());
        assert!(config.paths.index_dir.as_str().ends_with("libexec/cmdhint"));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(parse_config("[[channels]]\ntag = 3").is_err());
    }
}
