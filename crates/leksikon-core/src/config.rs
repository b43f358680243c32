//! Configuration types for leksikon.
//!
//! [`Config::load`] reads `~/.config/leksikon/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `LEKSIKON__*`
//! environment overrides (`LEKSIKON__SERVER__BIND=0.0.0.0:8080`).
//! [`Config::load_from`] reads a specific file instead. [`Config::defaults`]
//! returns the defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[lexicon]
page_size = 12
# data_path = "/path/to/seed.json"

[search]
debounce_ms = 300

[remote]
enabled    = false
base_url   = "http://127.0.0.1:3000/api"
timeout_ms = 5000

[server]
bind = "127.0.0.1:3000"

[ui]
region_pane_width_pct = 25
theme                 = "default"
"#;

const ENV_PREFIX: &str = "LEKSIKON";
const ENV_SEPARATOR: &str = "__";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[lexicon]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Seed file to load instead of the builtin lexicon.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

fn default_page_size() -> usize { 12 }

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_path: None,
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 { 300 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// `[remote]` section — the corpus API used by `--remote` and remote browse.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String { "http://127.0.0.1:3000/api".to_string() }
fn default_timeout_ms() -> u64 { 5000 }

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_region_pane_width_pct")]
    pub region_pane_width_pct: u16,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_region_pane_width_pct() -> u16 { 25 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            region_pane_width_pct: default_region_pane_width_pct(),
            theme: default_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/leksikon/config.toml`, layered on top of the
    /// built-in defaults and under environment overrides. Creates the file
    /// with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::layered(config::File::from(path.as_path()).required(false), environment())
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(config::File::from(path).required(true), environment())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered<F>(file: F, env: config::Environment) -> anyhow::Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;
        tracing::debug!(
            page_size = cfg.lexicon.page_size,
            remote = cfg.remote.enabled,
            bind = %cfg.server.bind,
            "config: loaded"
        );
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("leksikon")
        .join("config.toml")
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
