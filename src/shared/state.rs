//! Process-wide services shared with every shell through the Dioxus context

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::ShellConfig;
use crate::domain::models::{MenuRegistry, Principal, ViewCatalog, ViewId};
use crate::domain::services::{
    AccessChecker, AnnotationAccessChecker, AuthenticatedPrincipal, NavigationShell, SessionPrincipal,
};
use crate::shared::logging;

/// Configuration installed by the entry point before the app launches
static INSTALLED_CONFIG: OnceCell<ShellConfig> = OnceCell::new();

/// Install the startup configuration. Returns false if one was already installed.
pub fn install_config(config: ShellConfig) -> bool {
    INSTALLED_CONFIG.set(config).is_ok()
}

/// The installed configuration, or the defaults when the entry point installed none
pub fn installed_config() -> ShellConfig {
    INSTALLED_CONFIG.get().cloned().unwrap_or_default()
}

/// Collaborators of the navigation shell
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<ShellConfig>,
    pub registry: Arc<MenuRegistry>,
    pub catalog: Arc<ViewCatalog>,
    pub checker: Arc<dyn AccessChecker>,
    pub principals: Arc<dyn AuthenticatedPrincipal>,
}

impl AppServices {
    /// Standard menu and views, access from the views' declared requirements,
    /// an in-process session seeded from the config
    pub fn standard(config: ShellConfig) -> Self {
        let catalog = Arc::new(ViewCatalog::standard());
        let principals = match config.session_user.clone() {
            Some(principal) => SessionPrincipal::signed_in(principal),
            None => SessionPrincipal::anonymous(),
        };

        Self {
            config: Arc::new(config),
            registry: Arc::new(MenuRegistry::standard()),
            checker: Arc::new(AnnotationAccessChecker::new(catalog.clone())),
            catalog,
            principals: Arc::new(principals),
        }
    }

    /// A fresh shell for the current principal
    pub fn new_shell(&self) -> NavigationShell {
        NavigationShell::new(
            self.principals.as_ref(),
            self.checker.as_ref(),
            &self.registry,
            &self.config,
        )
    }

    /// Whether the current principal may open `view`. Failures deny.
    pub fn can_open(&self, view: ViewId) -> bool {
        let principal: Option<Principal> = self.principals.current().unwrap_or_else(|e| {
            logging::log_principal_unavailable(&e.to_string());
            None
        });
        self.checker
            .has_access(view, principal.as_ref())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;
    use crate::shared::errors::AuthError;

    struct UnreachableSession;

    impl AuthenticatedPrincipal for UnreachableSession {
        fn current(&self) -> Result<Option<Principal>, AuthError> {
            Err(AuthError::SessionLookup("session store unreachable".to_string()))
        }

        fn logout(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[test]
    fn test_standard_services_for_anonymous_session() {
        let services = AppServices::standard(ShellConfig::default());
        let shell = services.new_shell();

        assert!(!shell.header().is_signed_in());
        assert_eq!(shell.tabs().len(), 3);
        assert!(services.can_open(ViewId::Login));
        assert!(!services.can_open(ViewId::Editor));
    }

    #[test]
    fn test_standard_services_for_seeded_admin() {
        let config = ShellConfig {
            session_user: Some(Principal::new("admin", "Emma Powerful").with_role(Role::Admin)),
            ..ShellConfig::default()
        };
        let services = AppServices::standard(config);
        let shell = services.new_shell();

        assert!(shell.header().is_signed_in());
        assert!(shell.tabs().iter().any(|t| t.target_view == ViewId::Editor));
        assert!(services.can_open(ViewId::CollaborativeMasterDetail));

        services.principals.logout().unwrap();
        assert!(!services.new_shell().header().is_signed_in());
        assert!(!services.can_open(ViewId::Editor));
    }

    #[test]
    fn test_can_open_with_unreachable_session_is_anonymous() {
        let services = AppServices {
            principals: Arc::new(UnreachableSession),
            ..AppServices::standard(ShellConfig::default())
        };

        assert!(services.can_open(ViewId::HelloWorld));
        assert!(!services.can_open(ViewId::PersonForm));
        assert!(!services.can_open(ViewId::Editor));
    }

    #[test]
    fn test_client_shell_matches_server_shell() {
        let lookup = |key: &str| match key {
            crate::config::APP_NAME_VAR => Some("Back Office".to_string()),
            _ => None,
        };
        let mut server_config = ShellConfig::load_with(lookup).unwrap();
        server_config.session_user =
            Some(Principal::new("user", "John Normal").with_role(Role::User));

        // What the browser receives from get_shell_config
        let wire = serde_json::to_string(&server_config).unwrap();
        let client_config: ShellConfig = serde_json::from_str(&wire).unwrap();

        let server_shell = AppServices::standard(server_config).new_shell();
        let client_shell = AppServices::standard(client_config).new_shell();

        assert_eq!(client_shell, server_shell);
        assert_eq!(client_shell.drawer().app_name, "Back Office");
        assert!(client_shell.header().is_signed_in());
        assert_ne!(client_shell, AppServices::standard(ShellConfig::default()).new_shell());
    }
}
