use thiserror::Error;

/// Failures of an access checker. The menu treats every one of them as a denial.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Policy lookup failed: {0}")]
    PolicyLookup(String),
}

/// Failures of the principal source
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Session state poisoned")]
    SessionPoisoned,

    #[error("Session lookup failed: {0}")]
    SessionLookup(String),

    #[error("Logout failed: {0}")]
    LogoutFailed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
