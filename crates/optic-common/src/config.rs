/// Environment variable holding a full DSN, bypassing composition below.
pub const ENV_DSN: &str = "OPTIC_DSN";

pub const ENV_DB_USER: &str = "OPTIC_DB_USER";
pub const ENV_DB_PASSWORD: &str = "OPTIC_DB_PASSWORD";
pub const ENV_DB_ACCOUNT: &str = "OPTIC_DB_ACCOUNT";
pub const ENV_DB_WAREHOUSE: &str = "OPTIC_DB_WAREHOUSE";
pub const ENV_DB_DATABASE: &str = "OPTIC_DB_DATABASE";
pub const ENV_DB_SCHEMA: &str = "OPTIC_DB_SCHEMA";

pub const DEFAULT_ACCOUNT: &str = "localhost:5432";
pub const DEFAULT_WAREHOUSE: &str = "optic_adhoc";
pub const DEFAULT_DATABASE: &str = "retail";
pub const DEFAULT_SCHEMA: &str = "userdb_mkt";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Database connection parameters for the intake table.
///
/// User and password have no defaults and must be supplied; the remaining
/// parameters fall back to the deployment defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    /// Host (and optional port) of the warehouse gateway.
    pub account: String,
    /// Compute warehouse the gateway routes this session to.
    pub warehouse: String,
    pub database: String,
    pub schema: String,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Ok(Self {
            user: get(ENV_DB_USER).ok_or(ConfigError::MissingVar(ENV_DB_USER))?,
            password: get(ENV_DB_PASSWORD).ok_or(ConfigError::MissingVar(ENV_DB_PASSWORD))?,
            account: get(ENV_DB_ACCOUNT).unwrap_or_else(|| DEFAULT_ACCOUNT.to_string()),
            warehouse: get(ENV_DB_WAREHOUSE).unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string()),
            database: get(ENV_DB_DATABASE).unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            schema: get(ENV_DB_SCHEMA).unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
        })
    }

    /// Composes the connection DSN. The schema is applied through the
    /// session search path and the warehouse rides along as the session's
    /// application name, which the gateway routes compute on. Credentials
    /// are percent-encoded so they survive URL userinfo syntax.
    pub fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}?options=-csearch_path%3D{}&application_name={}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.account,
            self.database,
            self.schema,
            self.warehouse
        )
    }
}
