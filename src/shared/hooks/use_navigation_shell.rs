use dioxus::prelude::*;

use crate::domain::models::ViewId;
use crate::domain::services::{HeaderAction, NavigationShell};
use crate::shared::errors::AuthError;
use crate::shared::state::AppServices;

#[derive(Clone)]
pub struct UseNavigationShellReturn {
    pub shell: Signal<NavigationShell>,
    services: AppServices,
}

impl UseNavigationShellReturn {
    pub fn toggle_drawer(&self) {
        let mut shell = self.shell;
        shell.write().toggle_drawer();
    }

    /// Hand the logout command to the session, then start over with a fresh shell
    pub fn logout(&self) -> Result<(), AuthError> {
        let mut shell = self.shell;

        shell
            .read()
            .handle_header_action(HeaderAction::Logout, self.services.principals.as_ref())?;

        let mut next = self.services.new_shell();
        if let Some(active) = shell.read().active_view().cloned() {
            next.on_navigation_complete(active);
        }
        shell.set(next);
        Ok(())
    }

    pub fn can_open(&self, view: ViewId) -> bool {
        self.services.can_open(view)
    }
}

/// Navigation shell of the current session, kept in sync with `active`.
///
/// The shell is built once per mount. A change of `active` is applied during
/// render, before the caller reads the shell, so no frame shows the previous
/// view's selection or title.
pub fn use_navigation_shell(active: ViewId) -> UseNavigationShellReturn {
    let services = use_context::<AppServices>();

    let mut shell = use_signal({
        let services = services.clone();
        move || services.new_shell()
    });

    if shell.peek().active_view().map(|v| v.id) != Some(active) {
        shell.write().sync_to(active, &services.catalog);
    }

    UseNavigationShellReturn { shell, services }
}
