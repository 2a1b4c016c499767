//! Shell configuration
//!
//! Defaults describe the stock application. A JSON file named by
//! `APP_SHELL_CONFIG` replaces them, and `APP_SHELL_NAME` /
//! `APP_SHELL_LOGIN_PATH` override single fields on top of that.
//!
//! Only the server reads the environment. Browser clients receive the loaded
//! value through `server_fns::get_shell_config`.

use serde::{Deserialize, Serialize};

use crate::domain::models::Principal;
use crate::shared::errors::ConfigError;
use crate::shared::logging;

pub const CONFIG_PATH_VAR: &str = "APP_SHELL_CONFIG";
pub const APP_NAME_VAR: &str = "APP_SHELL_NAME";
pub const LOGIN_PATH_VAR: &str = "APP_SHELL_LOGIN_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name shown next to the logo in the drawer
    pub app_name: String,
    pub logo_src: String,
    pub logo_alt: String,
    /// Login entry point linked from the anonymous header
    pub login_path: String,
    pub sign_in_label: String,
    pub logout_label: String,
    /// Principal the in-process session starts with (none = anonymous)
    pub session_user: Option<Principal>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "My App".to_string(),
            logo_src: "/images/logo.svg".to_string(),
            logo_alt: "My App logo".to_string(),
            login_path: "login".to_string(),
            sign_in_label: "Sign in".to_string(),
            logout_label: "Logout".to_string(),
            session_user: None,
        }
    }
}

impl ShellConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve environment variables
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (mut config, source) = match lookup(CONFIG_PATH_VAR) {
            Some(path) => (Self::from_file(&path)?, path),
            None => (Self::default(), "defaults".to_string()),
        };

        if let Some(name) = lookup(APP_NAME_VAR) {
            config.app_name = name;
        }
        if let Some(path) = lookup(LOGIN_PATH_VAR) {
            config.login_path = path;
        }

        config.validate()?;
        logging::log_config_loaded(&source, &config.app_name);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(path, &raw)
    }

    fn from_json(path: &str, raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.login_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "login_path".to_string(),
                value: self.login_path.clone(),
            });
        }
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "app_name".to_string(),
                value: self.app_name.clone(),
            });
        }
        Ok(())
    }

    /// Absolute href of the login entry point
    pub fn login_href(&self) -> String {
        format!("/{}", self.login_path.trim_start_matches('/'))
    }
}
