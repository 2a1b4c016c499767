//! Server functions for Dioxus Fullstack

use dioxus::prelude::*;

use crate::config::ShellConfig;

/// Configuration the server process was started with.
///
/// The hydrating client builds its services from this value rather than from
/// its own defaults, so both sides render the same header, menu and title.
#[server]
pub async fn get_shell_config() -> Result<ShellConfig, ServerFnError> {
    Ok(crate::shared::state::installed_config())
}
