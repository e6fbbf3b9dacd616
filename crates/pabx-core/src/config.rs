//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub mutations: MutationConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Comma separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9001
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

/// Session persistence configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Path of the JSON key/value file holding the persisted session
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Key under which the signed-in user is stored
    #[serde(default = "default_session_key")]
    pub key: String,
}

fn default_store_path() -> String {
    "data/session.json".to_string()
}

fn default_session_key() -> String {
    "pabx_user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            key: default_session_key(),
        }
    }
}

/// Which rows "select all" covers on the CDR page
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectAllScope {
    /// Only the rows visible on the current page
    #[default]
    CurrentPage,
    /// Every row matching the current search and filter, across pages
    AllMatches,
}

/// Page sizes and list behaviour per view
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub agents_page_size: usize,
    #[serde(default = "default_page_size")]
    pub cdr_page_size: usize,
    #[serde(default = "default_page_size")]
    pub users_page_size: usize,
    #[serde(default = "default_page_size")]
    pub rates_page_size: usize,
    #[serde(default = "default_audios_page_size")]
    pub audios_page_size: usize,
    #[serde(default = "default_client_agents_page_size")]
    pub client_agents_page_size: usize,
    #[serde(default)]
    pub select_all_scope: SelectAllScope,
    /// Maximum number of undelivered notifications kept in memory
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

fn default_page_size() -> usize {
    10
}

fn default_audios_page_size() -> usize {
    8
}

fn default_client_agents_page_size() -> usize {
    5
}

fn default_notification_capacity() -> usize {
    50
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            agents_page_size: default_page_size(),
            cdr_page_size: default_page_size(),
            users_page_size: default_page_size(),
            rates_page_size: default_page_size(),
            audios_page_size: default_audios_page_size(),
            client_agents_page_size: default_client_agents_page_size(),
            select_all_scope: SelectAllScope::default(),
            notification_capacity: default_notification_capacity(),
        }
    }
}

/// Active call duration ticker
#[derive(Debug, Deserialize, Clone)]
pub struct TickerConfig {
    /// Tick period in milliseconds
    #[serde(default = "default_tick_interval")]
    pub interval_ms: u64,
}

fn default_tick_interval() -> u64 {
    1000
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_tick_interval(),
        }
    }
}

/// Search input behaviour
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Debounce delay for the CDR search box in milliseconds
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

fn default_debounce() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
        }
    }
}

/// Simulated export behaviour
#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Simulated processing delay in milliseconds
    #[serde(default = "default_export_delay")]
    pub delay_ms: u64,
}

fn default_export_delay() -> u64 {
    1500
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_export_delay(),
        }
    }
}

/// How modal saves are applied
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MutationMode {
    /// Log the intent and notify, leave the record store untouched
    #[default]
    LogOnly,
    /// Apply the intent to the in-memory record store
    InMemory,
}

/// Mutation facade selection
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MutationConfig {
    #[serde(default)]
    pub mode: MutationMode,
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9001)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("server.cors_origins", default_cors_origins())?
            .set_default("session.store_path", default_store_path())?
            .set_default("session.key", default_session_key())?
            .set_default("ticker.interval_ms", 1000)?
            .set_default("search.debounce_ms", 300)?
            .set_default("export.delay_ms", 1500)?
            .set_default("mutations.mode", "log_only")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with PABX_ prefix
            .add_source(
                Environment::with_prefix("PABX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("PABX").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
                cors_origins: default_cors_origins(),
            },
            session: SessionConfig::default(),
            ui: UiConfig::default(),
            ticker: TickerConfig::default(),
            search: SearchConfig::default(),
            export: ExportConfig::default(),
            mutations: MutationConfig::default(),
        }
    }
}
