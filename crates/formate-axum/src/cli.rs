//! Command-line and environment configuration.
//!
//! Every flag falls back to an environment variable, so a `.env` file
//! loaded by `dotenvy` configures the server without any flags.

use std::path::PathBuf;

use clap::Parser;
use formate_openai::OpenAiConfig;

use crate::bootstrap::{CorsConfig, DatabaseTarget, ServerConfig};

/// formate: PDF format GraphQL API and OpenAI chat relay.
#[derive(Debug, Parser)]
#[command(name = "formate", version, about)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    /// `*` for any origin, or a comma-separated list of allowed origins
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,

    #[arg(long, env = "API_PREFIX", default_value = "api")]
    pub api_prefix: String,

    #[arg(long, env = "API_VERSION", default_value = "v1")]
    pub api_version: String,

    /// SQLite connection URL; takes precedence over --db-path
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// SQLite database file
    #[arg(long, env = "DB_PATH", default_value = "data/formate.db")]
    pub db_path: PathBuf,

    /// OpenAI API key; chat calls fail until one is set
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = formate_openai::DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Deployment label, only logged
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub app_env: String,
}

impl ServerArgs {
    /// Resolve the parsed arguments into a typed `ServerConfig`.
    pub fn into_config(self) -> ServerConfig {
        let database = match self.database_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Path(self.db_path),
        };

        let openai = OpenAiConfig::new()
            .with_base_url(self.openai_base_url)
            .with_optional_api_key(self.openai_api_key);

        ServerConfig {
            port: self.port,
            cors: CorsConfig::parse(&self.cors_origin),
            api_prefix: self.api_prefix,
            api_version: self.api_version,
            database,
            openai,
            app_env: self.app_env,
        }
    }
}
