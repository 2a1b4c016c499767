//! Navigation shell state
//!
//! Owns the header, the drawer with its access-filtered tabs, the active view
//! slot and the title label. The routing layer reports every completed
//! navigation through [`NavigationShell::on_navigation_complete`]; selection and
//! title are kept consistent with that view.
//!
//! One shell exists per session. The menu is filtered once, at construction:
//! permission changes during the session do not re-filter it.

use crate::config::ShellConfig;
use crate::domain::models::{ActiveView, MenuRegistry, Principal, Tab, ViewCatalog, ViewId};
use crate::domain::services::access_checker::AccessChecker;
use crate::domain::services::authenticated_principal::AuthenticatedPrincipal;
use crate::domain::services::menu_builder::MenuBuilder;
use crate::shared::errors::AuthError;
use crate::shared::logging;

/// Right-hand side of the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderContent {
    /// Signed-in principal: avatar plus a context menu holding the logout action
    Identity {
        username: String,
        display_name: String,
        avatar_ref: Option<String>,
        initials: String,
        logout_label: String,
    },
    /// Anonymous visitor: plain link to the login entry point
    SignIn { href: String, label: String },
}

impl HeaderContent {
    fn for_principal(principal: Option<&Principal>, config: &ShellConfig) -> Self {
        match principal {
            Some(p) => HeaderContent::Identity {
                username: p.username.clone(),
                display_name: p.display_name.clone(),
                avatar_ref: p.avatar_ref.clone(),
                initials: p.initials(),
                logout_label: config.logout_label.clone(),
            },
            None => HeaderContent::SignIn {
                href: config.login_href(),
                label: config.sign_in_label.clone(),
            },
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, HeaderContent::Identity { .. })
    }
}

/// Commands raised from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Logout,
}

/// Static drawer content above the tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerContent {
    pub app_name: String,
    pub logo_src: String,
    pub logo_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationShell {
    header: HeaderContent,
    drawer: DrawerContent,
    tabs: Vec<Tab>,
    drawer_open: bool,
    active_view: Option<ActiveView>,
    selected: Option<usize>,
    title: String,
    navigations: u64,
}

impl NavigationShell {
    /// Build header, menu and drawer for the session's current principal.
    ///
    /// A failing principal source renders the anonymous header and menu.
    pub fn new(
        principals: &dyn AuthenticatedPrincipal,
        checker: &dyn AccessChecker,
        registry: &MenuRegistry,
        config: &ShellConfig,
    ) -> Self {
        let principal = principals.current().unwrap_or_else(|e| {
            logging::log_principal_unavailable(&e.to_string());
            None
        });

        let tabs = MenuBuilder::new(checker).build(registry, principal.as_ref());

        Self {
            header: HeaderContent::for_principal(principal.as_ref(), config),
            drawer: DrawerContent {
                app_name: config.app_name.clone(),
                logo_src: config.logo_src.clone(),
                logo_alt: config.logo_alt.clone(),
            },
            tabs,
            drawer_open: true,
            active_view: None,
            selected: None,
            title: String::new(),
            navigations: 0,
        }
    }

    /// Place `view` in the content slot, then sync tab selection and title with it.
    ///
    /// A view without a tab clears the selection; a view without a title
    /// clears the title label. Neither is an error.
    pub fn on_navigation_complete(&mut self, view: ActiveView) {
        let id = view.id;
        self.selected = self.tab_index_for(id);
        self.title = view.page_title.clone().unwrap_or_default();
        self.active_view = Some(view);
        self.navigations += 1;

        logging::log_navigation_synced(id, self.selected, &self.title);
    }

    /// Navigate to `id`, taking its page title from the catalog
    pub fn navigate_to(&mut self, id: ViewId, catalog: &ViewCatalog) {
        self.on_navigation_complete(ActiveView::from_catalog(id, catalog));
    }

    /// Bring the shell in line with the router's current view before it is read.
    /// Returns false when `id` is already active.
    pub fn sync_to(&mut self, id: ViewId, catalog: &ViewCatalog) -> bool {
        if self.active_view.as_ref().is_some_and(|view| view.id == id) {
            return false;
        }
        self.navigate_to(id, catalog);
        true
    }

    /// Dispatch a header command to the principal source.
    ///
    /// The shell keeps showing the old header: the caller is expected to end
    /// the session and build a new shell for the next one.
    pub fn handle_header_action(
        &self,
        action: HeaderAction,
        principals: &dyn AuthenticatedPrincipal,
    ) -> Result<(), AuthError> {
        match (action, &self.header) {
            (HeaderAction::Logout, HeaderContent::Identity { username, .. }) => {
                logging::log_logout_requested(username);
                principals.logout()
            }
            // Nobody to log out
            (HeaderAction::Logout, HeaderContent::SignIn { .. }) => Ok(()),
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn header(&self) -> &HeaderContent {
        &self.header
    }

    pub fn drawer(&self) -> &DrawerContent {
        &self.drawer
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected.and_then(|i| self.tabs.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn active_view(&self) -> Option<&ActiveView> {
        self.active_view.as_ref()
    }

    /// Number of navigations completed since the shell was built
    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    fn tab_index_for(&self, id: ViewId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.routes_to(id))
    }
}
