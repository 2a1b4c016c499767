//! Structured logging for the application shell
//!
//! Every event carries an `operation` field so menu, navigation and session
//! activity can be filtered apart with `RUST_LOG` and a log aggregator.

use crate::domain::models::ViewId;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuBuild,
    AccessCheck,
    Navigation,
    Session,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuBuild => "menu_build",
            LogOperation::AccessCheck => "access_check",
            LogOperation::Navigation => "navigation",
            LogOperation::Session => "session",
            LogOperation::Config => "config",
        }
    }
}

/// Log an entry left out of the menu
pub fn log_menu_entry_denied(view: ViewId, label: &str) {
    tracing::debug!(
        operation = LogOperation::MenuBuild.as_str(),
        view = view.as_str(),
        label = label,
        "Menu entry hidden for principal"
    );
}

/// Log an access checker failure (the entry is denied)
pub fn log_access_check_failed(view: ViewId, error: &str) {
    tracing::warn!(
        operation = LogOperation::AccessCheck.as_str(),
        view = view.as_str(),
        error = error,
        "Access check failed, denying menu entry"
    );
}

/// Log the filtered menu
pub fn log_menu_built(principal: Option<&str>, registry_size: usize, tab_count: usize) {
    tracing::info!(
        operation = LogOperation::MenuBuild.as_str(),
        principal = principal.unwrap_or("anonymous"),
        registry_entries = registry_size,
        visible_tabs = tab_count,
        "Menu built"
    );
}

/// Log a completed navigation sync
pub fn log_navigation_synced(view: ViewId, selected_tab: Option<usize>, title: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        view = view.as_str(),
        selected_tab = ?selected_tab,
        title = title,
        "Shell synced with active view"
    );
}

/// Log a principal lookup failure (the shell falls back to anonymous)
pub fn log_principal_unavailable(error: &str) {
    tracing::warn!(
        operation = LogOperation::Session.as_str(),
        error = error,
        "Principal unavailable, treating session as anonymous"
    );
}

pub fn log_logout_requested(username: &str) {
    tracing::info!(
        operation = LogOperation::Session.as_str(),
        username = username,
        "Logout requested"
    );
}

/// Log where configuration came from
pub fn log_config_loaded(source: &str, app_name: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        source = source,
        app_name = app_name,
        "Shell configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuBuild.as_str(), "menu_build");
        assert_eq!(LogOperation::AccessCheck.as_str(), "access_check");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Session.as_str(), "session");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
