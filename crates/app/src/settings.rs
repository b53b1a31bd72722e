//! Handles settings for the application.
//!
//! Sources, lowest precedence first:
//!
//! - the TOML file `config/expense_tracker.toml` (or `--config <path>`),
//!   optional;
//! - `EXPENSE_TRACKER__<SECTION>__<KEY>` environment variables, e.g.
//!   `EXPENSE_TRACKER__SERVER__AUTH_TOKEN`;
//! - the bare `PORT` environment variable;
//! - the `--port` flag.
//!
//! Without any source the server listens on `127.0.0.1:3000` and stores data
//! in `expenses.db`.
use clap::Parser;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tracker.toml";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite("expenses.db".to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
    /// Bearer token required on every request. No token: all requests pass.
    pub auth_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database: Database::default(),
            auth_token: None,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("EXPENSE_TRACKER")
                    .separator("__")
                    .try_parsing(true),
            );
        let builder = with_port_overrides(builder, std::env::var("PORT").ok(), args.port)?;

        builder.build()?.try_deserialize()
    }
}

/// Apply the `PORT` variable, then the `--port` flag, on top of `builder`.
fn with_port_overrides(
    builder: ConfigBuilder<DefaultState>,
    env_port: Option<String>,
    arg_port: Option<u16>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_override_option("server.port", env_port)?
        .set_override_option("server.port", arg_port.map(i64::from))
}
