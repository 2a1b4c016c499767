//! Application shell - main entry point
//!
//! Loads the shell configuration, then launches the Dioxus app.

use app_shell::app::App;
#[cfg(not(target_arch = "wasm32"))]
use app_shell::config::ShellConfig;
#[cfg(not(target_arch = "wasm32"))]
use app_shell::shared::state::install_config;

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<ShellConfig> {
    use anyhow::Context;

    ShellConfig::load().context("failed to load shell configuration")
}

#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE launching
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting application shell...");

    match load_config() {
        Ok(config) => {
            install_config(config);
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Application shell initialized".into());
    // Configuration arrives from the server with the first render
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match load_config() {
        Ok(config) => {
            install_config(config);
        }
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}
