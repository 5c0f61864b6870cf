//! Configuration schema for konofan-assets.
//!
//! ```toml
//! [source]
//! data_source = "https://assets.example.org/data"
//! asset_base = "https://raw.githubusercontent.com/HaiKonofanDesu/konofan-assets-jp-sortet/main"
//!
//! [network]
//! retry_count = 2
//! timeout = "30s"
//!
//! [tree]
//! conflict_policy = "reject"
//! ```
//!
//! Every field is optional; missing fields fall back to the built-in defaults.

use crate::assets::join_url;
use crate::catalog::ClientOptions;
use crate::error::{AssetBrowserError, Result};
use crate::tree::{ConflictPolicy, TreeOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DATA_SOURCE: &str = "public/data";
pub const DEFAULT_ASSET_BASE: &str =
    "https://raw.githubusercontent.com/HaiKonofanDesu/konofan-assets-jp-sortet/main";
pub const DEFAULT_STORY_BASE: &str =
    "https://raw.githubusercontent.com/HaiKonofanDesu/konofan-story/refs/heads/main";
pub const DEFAULT_VIDEO_BASE: &str =
    "https://raw.githubusercontent.com/HaiKonofanDesu/konofan-videos/refs/heads/main";
pub const DEFAULT_AUDIO_BASE: &str =
    "https://raw.githubusercontent.com/HaiKonofanDesu/konofan-audio/refs/heads/main";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub network: NetworkConfig,
    pub tree: TreeConfig,
}

/// Where lists and content are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory or base URL holding `assets.txt`, `stories.txt`, ...
    pub data_source: String,
    /// Base URL of the extracted asset files
    pub asset_base: String,
    /// Base URL of the story scripts
    pub story_base: String,
    /// Base URL of the video files
    pub video_base: String,
    /// Base URL of the music and sound files
    pub audio_base: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            story_base: DEFAULT_STORY_BASE.to_string(),
            video_base: DEFAULT_VIDEO_BASE.to_string(),
            audio_base: DEFAULT_AUDIO_BASE.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn asset_url(&self, path: &str) -> String {
        join_url(&self.asset_base, path)
    }

    pub fn story_url(&self, filename: &str) -> String {
        join_url(&self.story_base, filename)
    }

    pub fn video_url(&self, path: &str) -> String {
        join_url(&self.video_base, path)
    }

    pub fn audio_url(&self, path: &str) -> String {
        join_url(&self.audio_base, path)
    }
}

/// HTTP behavior, durations in humantime notation ("30s", "500ms")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub retry_count: u32,
    pub retry_delay: String,
    pub timeout: String,
    pub connect_timeout: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            retry_count: 2,
            retry_delay: "500ms".to_string(),
            timeout: "30s".to_string(),
            connect_timeout: "10s".to_string(),
        }
    }
}

impl NetworkConfig {
    pub fn to_client_options(&self) -> Result<ClientOptions> {
        Ok(ClientOptions {
            retry_count: self.retry_count,
            retry_delay: parse_duration("network.retry_delay", &self.retry_delay)?,
            timeout: parse_duration("network.timeout", &self.timeout)?,
            connect_timeout: parse_duration("network.connect_timeout", &self.connect_timeout)?,
        })
    }
}

fn parse_duration(key: &str, value: &str) -> Result<Duration> {
    humantime::parse_duration(value)
        .map_err(|e| AssetBrowserError::Config(format!("{} = \"{}\": {}", key, value, e)))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub conflict_policy: ConflictPolicy,
    /// Reject asset paths containing empty segments
    pub strict_segments: bool,
}

impl TreeConfig {
    pub fn to_tree_options(&self) -> TreeOptions {
        TreeOptions {
            conflict_policy: self.conflict_policy,
            strict_segments: self.strict_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.data_source, "public/data");
        assert_eq!(config.network.retry_count, 2);
        assert_eq!(config.tree.conflict_policy, ConflictPolicy::LastWriteWins);
        assert!(!config.tree.strict_segments);
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [source]
            data_source = "https://assets.example.org/data"

            [network]
            retry_count = 4
            timeout = "1m"

            [tree]
            conflict_policy = "reject"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.data_source, "https://assets.example.org/data");
        assert_eq!(config.source.asset_base, DEFAULT_ASSET_BASE);
        assert_eq!(config.network.retry_count, 4);
        assert_eq!(config.tree.conflict_policy, ConflictPolicy::Reject);

        let options = config.network.to_client_options().unwrap();
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
        assert_eq!(options.retry_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_duration_is_config_error() {
        let network = NetworkConfig {
            timeout: "soon".to_string(),
            ..Default::default()
        };
        let err = network.to_client_options().unwrap_err();
        assert!(matches!(err, AssetBrowserError::Config(msg) if msg.contains("network.timeout")));
    }

    #[test]
    fn test_content_urls() {
        let source = SourceConfig {
            asset_base: "https://cdn.test/assets/".to_string(),
            ..Default::default()
        };
        assert_eq!(source.asset_url("Unit/a.png"), "https://cdn.test/assets/Unit/a.png");
        assert_eq!(
            source.story_url("main_01.txt"),
            format!("{}/main_01.txt", DEFAULT_STORY_BASE)
        );
        assert!(source.audio_url("SE/a.wav").ends_with("konofan-audio/refs/heads/main/SE/a.wav"));
        assert!(source.video_url("Movie/a.mp4").contains("konofan-videos"));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("conflict_policy = \"last-write-wins\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.network.timeout, "30s");
    }
}
