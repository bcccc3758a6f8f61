//! Configuration types for storefront.
//!
//! [`Config::load`] layers, in order: the built-in defaults, the user file at
//! `~/.config/storefront/config.toml` (if present), an optional explicit file,
//! and `STOREFRONT_*` environment variables (`STOREFRONT_INDEX__TOKEN=…`).
//! [`Config::defaults`] returns the built-in values without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind           = "127.0.0.1:3000"
flatten_errors = false

[index]
url        = "http://127.0.0.1:8080"
token      = ""
timeout_ms = 5000

[ranking]
min_price       = 0.0
avg_price       = 25.0
max_price       = 50.0
dimensions      = 3
price_dimension = 2

[session]
api_url     = "http://127.0.0.1:3000"
debounce_ms = 400
timeout_ms  = 5000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Report every failure (including validation) as a generic 500, for
    /// clients written against the single-failure contract.
    #[serde(default)]
    pub flatten_errors: bool,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), flatten_errors: false }
    }
}

/// `[index]` section: where the vector index lives.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_index_url")]
    pub url: String,
    /// Bearer token; empty means no `Authorization` header.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_index_url() -> String { "http://127.0.0.1:8080".to_string() }
fn default_timeout_ms() -> u64 { 5000 }

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: default_index_url(),
            token: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// `[ranking]` section: the price bounds used to encode a sort preference as
/// a point in the index's vector space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    #[serde(default = "default_avg_price")]
    pub avg_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    #[serde(default = "default_price_dimension")]
    pub price_dimension: usize,
}

fn default_min_price() -> f64 { 0.0 }
fn default_avg_price() -> f64 { 25.0 }
fn default_max_price() -> f64 { 50.0 }
fn default_dimensions() -> usize { 3 }
fn default_price_dimension() -> usize { 2 }

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            avg_price: default_avg_price(),
            max_price: default_max_price(),
            dimensions: default_dimensions(),
            price_dimension: default_price_dimension(),
        }
    }
}

/// `[session]` section: the browse client.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Bound on each products request sent by the browse client.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String { "http://127.0.0.1:3000".to_string() }
fn default_debounce_ms() -> u64 { 400 }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            debounce_ms: default_debounce_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `explicit` must exist when given; the
    /// per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        cfg.check()?;
        Ok(cfg)
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

    fn check(&self) -> anyhow::Result<()> {
        let r = &self.ranking;
        anyhow::ensure!(
            r.price_dimension < r.dimensions,
            "ranking.price_dimension ({}) must be below ranking.dimensions ({})",
            r.price_dimension,
            r.dimensions
        );
        anyhow::ensure!(
            r.min_price <= r.avg_price && r.avg_price <= r.max_price,
            "ranking prices must satisfy min_price <= avg_price <= max_price"
        );
        Ok(())
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
        .join("storefront")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
