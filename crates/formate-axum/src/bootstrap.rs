//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together.
//! All concrete implementations are instantiated here and handed to the
//! services through their constructors.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use formate_core::{ChatCompletionPort, ChatRelayService, PdfFormatService};
use formate_db::{CoreFactory, setup_database, setup_database_url};
use formate_openai::{OpenAiChatClient, OpenAiConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::graphql::{FormateSchema, build_schema};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins, without credentials.
    #[default]
    AllowAll,
    /// Allow specific origins, with credentials.
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Parse a `CORS_ORIGIN` value: `*` (or blank) allows everything,
    /// anything else is a comma-separated origin list.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "*" {
            return Self::AllowAll;
        }
        Self::AllowOrigins(
            value
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Connection URL, e.g. `sqlite://data/formate.db`.
    Url(String),
    /// Plain file path; parent directories are created.
    Path(PathBuf),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// First segment of the REST prefix (`api`).
    pub api_prefix: String,
    /// Second segment of the REST prefix (`v1`).
    pub api_version: String,
    /// Database location.
    pub database: DatabaseTarget,
    /// Chat provider client configuration.
    pub openai: OpenAiConfig,
    /// Deployment label, logged at startup.
    pub app_env: String,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: 5001,
            cors: CorsConfig::default(),
            api_prefix: "api".to_string(),
            api_version: "v1".to_string(),
            database: DatabaseTarget::Path(PathBuf::from("data/formate.db")),
            openai: OpenAiConfig::default(),
            app_env: "development".to_string(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>, version: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self.api_version = version.into();
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: DatabaseTarget) -> Self {
        self.database = database;
        self
    }

    #[must_use]
    pub fn with_openai(mut self, openai: OpenAiConfig) -> Self {
        self.openai = openai;
        self
    }

    /// REST base path, e.g. `/api/v1`. Empty segments are dropped.
    pub fn api_base(&self) -> String {
        let segments: Vec<&str> = [self.api_prefix.as_str(), self.api_version.as_str()]
            .into_iter()
            .map(|s| s.trim_matches('/'))
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            String::new()
        } else {
            format!("/{}", segments.join("/"))
        }
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AppContext {
    /// CRUD service for `PdfFormate` records.
    pub pdf_formats: Arc<PdfFormatService>,
    /// Chat relay over the configured provider.
    pub chat: Arc<ChatRelayService>,
    /// Executable GraphQL schema; holds its own handle to `pdf_formats`.
    pub schema: FormateSchema,
}

impl AppContext {
    /// Wire a context from already-built collaborators.
    pub fn new(pdf_formats: Arc<PdfFormatService>, provider: Arc<dyn ChatCompletionPort>) -> Self {
        Self {
            schema: build_schema(Arc::clone(&pdf_formats)),
            chat: Arc::new(ChatRelayService::new(provider)),
            pdf_formats,
        }
    }
}

/// Bootstrap the server: open the database and build every service.
pub async fn bootstrap(config: ServerConfig) -> Result<AppContext> {
    // 1. Create database pool with full schema setup
    let pool = match &config.database {
        DatabaseTarget::Url(url) => setup_database_url(url).await?,
        DatabaseTarget::Path(path) => {
            info!(db_path = %path.display(), "Opening database file");
            setup_database(path).await?
        }
    };
    let pdf_formats = Arc::new(CoreFactory::build_pdf_format_service(pool));

    // 2. Chat provider; a missing key is tolerated here and reported per call
    let provider: Arc<dyn ChatCompletionPort> =
        Arc::new(OpenAiChatClient::new(config.openai.clone())?);

    Ok(AppContext::new(pdf_formats, provider))
}

/// Start the web server and serve until Ctrl-C or SIGTERM.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(config.clone()).await?;
    let app = crate::routes::create_router(ctx, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!(
        environment = %config.app_env,
        database_url = matches!(config.database, DatabaseTarget::Url(_)),
        "formate listening on http://{}{}",
        addr,
        config.api_base()
    );
    info!("GraphQL endpoint at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
