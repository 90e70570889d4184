//! # Database Connection
//!
//! Connection settings for the Postgres database and a pooled Sea-ORM
//! connection built from them.

use std::{str::FromStr, time::Duration};

use ::error::{AppError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Postgres connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host:            String,
    pub port:            u16,
    pub database:        String,
    pub username:        String,
    pub password:        String,
    pub ssl_mode:        SslMode,
    /// Maximum connections in the pool
    pub pool_size:       u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

/// Postgres `sslmode` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    Disable,
    Prefer,
    #[default]
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(AppError::config(format!("Unknown SSL mode: {}", other))),
        }
    }
}

impl DatabaseConfig {
    /// Settings for a local `signiel` database.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host:            "localhost".to_string(),
            port:            5432,
            database:        "signiel".to_string(),
            username:        "signiel".to_string(),
            password:        String::new(),
            ssl_mode:        SslMode::default(),
            pool_size:       10,
            connect_timeout: 30,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    #[must_use]
    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets the connection timeout in seconds.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Postgres URL for these settings, also used as `DATABASE_URL` by the
    /// migrator binary. Credentials are percent-encoded.
    #[must_use]
    pub fn build_connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Sea-ORM pool options for these settings.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.build_connection_string());
        options
            .max_connections(self.pool_size)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .sqlx_logging(false);
        options
    }

    /// Opens a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns `Database` if the server cannot be reached.
    pub async fn connect(&self) -> Result<DatabaseConnection> {
        let db = Database::connect(self.connect_options())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {}", self.host, e)))?;
        info!(
            host = %self.host,
            port = self.port,
            database = %self.database,
            pool_size = self.pool_size,
            "Database connected"
        );
        Ok(db)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self { Self::new() }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Reads `SIGNIEL_DATABASE_*` variables over the defaults of
/// [`DatabaseConfig::new`].
///
/// Recognized suffixes: `HOST`, `PORT`, `NAME`, `USER`, `PASSWORD`,
/// `SSL_MODE`, `POOL_SIZE`, `CONNECT_TIMEOUT`. Values that fail to parse
/// keep their default.
#[must_use]
pub fn load_config_from_env() -> DatabaseConfig {
    let defaults = DatabaseConfig::new();
    DatabaseConfig {
        host:            env_or("SIGNIEL_DATABASE_HOST", defaults.host),
        port:            env_or("SIGNIEL_DATABASE_PORT", defaults.port),
        database:        env_or("SIGNIEL_DATABASE_NAME", defaults.database),
        username:        env_or("SIGNIEL_DATABASE_USER", defaults.username),
        password:        env_or("SIGNIEL_DATABASE_PASSWORD", defaults.password),
        ssl_mode:        env_or("SIGNIEL_DATABASE_SSL_MODE", defaults.ssl_mode),
        pool_size:       env_or("SIGNIEL_DATABASE_POOL_SIZE", defaults.pool_size),
        connect_timeout: env_or("SIGNIEL_DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout),
    }
}
