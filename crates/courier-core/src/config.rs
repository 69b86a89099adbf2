use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_LIST_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub contacts: ContactsConfig,
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u8,
    pub run_migrations: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("backend", &self.backend)
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactsConfig {
    pub list_limit: u32,
}

/// SMTP settings for submission notifications. Notifications are disabled
/// when this section is absent.
#[derive(Clone, Deserialize)]
pub struct MailConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub notify_email: String,
    pub from_email: Option<String>,
}

impl MailConfig {
    /// ## Summary
    /// Sender address, falling back to the SMTP username.
    #[must_use]
    pub fn sender(&self) -> &str {
        self.from_email.as_deref().unwrap_or(&self.username)
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("notify_email", &self.notify_email)
            .field("from_email", &self.from_email)
            .finish()
    }
}

const fn default_smtp_port() -> u16 {
    587
}

/// Conventional flat environment variables and the keys they override.
const ENV_ALIASES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DATABASE_URL", "database.url"),
    ("RUST_LOG", "logging.level"),
    ("SMTP_HOST", "mail.host"),
    ("SMTP_PORT", "mail.port"),
    ("SMTP_USERNAME", "mail.username"),
    ("SMTP_PASSWORD", "mail.password"),
    ("NOTIFY_EMAIL", "mail.notify_email"),
    ("DEFAULT_FROM_EMAIL", "mail.from_email"),
];

impl Settings {
    /// ## Summary
    /// Loads configuration into a `Settings`.
    ///
    /// Sources, later ones winning: built-in defaults, an optional
    /// `config.toml`, `COURIER__SECTION__KEY` variables, then the flat aliases
    /// in `ENV_ALIASES`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// ## Summary
    /// Like [`Settings::load`], resolving flat aliases through `lookup`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default(
                "server.cors_origins",
                vec!["http://localhost:3000", "http://127.0.0.1:3000"],
            )?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", "postgres://localhost/courier")?
            .set_default("database.max_connections", 4)?
            .set_default("database.run_migrations", true)?
            .set_default("contacts.list_limit", i64::from(DEFAULT_LIST_LIMIT))?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("COURIER")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            );

        for (var, key) in ENV_ALIASES {
            let value = lookup(var).filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        Ok(builder.build()?.try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
