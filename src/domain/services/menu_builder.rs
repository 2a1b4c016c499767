//! Access-filtered menu construction

use crate::domain::models::{MenuRegistry, Principal, Tab};
use crate::domain::services::access_checker::AccessChecker;
use crate::shared::logging;

/// Turns the menu registry into the tabs one principal is allowed to see
pub struct MenuBuilder<'a> {
    checker: &'a dyn AccessChecker,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(checker: &'a dyn AccessChecker) -> Self {
        Self { checker }
    }

    /// Stable filter over the registry: order is preserved, nothing is duplicated.
    /// A checker error hides the entry.
    pub fn build(&self, registry: &MenuRegistry, principal: Option<&Principal>) -> Vec<Tab> {
        let tabs: Vec<Tab> = registry
            .entries()
            .iter()
            .filter(|entry| match self.checker.has_access(entry.target_view, principal) {
                Ok(true) => true,
                Ok(false) => {
                    logging::log_menu_entry_denied(entry.target_view, &entry.label);
                    false
                }
                Err(e) => {
                    logging::log_access_check_failed(entry.target_view, &e.to_string());
                    false
                }
            })
            .map(Tab::from)
            .collect();

        logging::log_menu_built(
            principal.map(|p| p.username.as_str()),
            registry.len(),
            tabs.len(),
        );

        tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MenuEntryDescriptor, Role, ViewId};
    use crate::shared::errors::AccessError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Grants exactly the listed views, records every call
    struct FakeChecker {
        granted: HashSet<ViewId>,
        calls: Mutex<Vec<ViewId>>,
    }

    impl FakeChecker {
        fn granting(views: &[ViewId]) -> Self {
            Self {
                granted: views.iter().copied().collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl AccessChecker for FakeChecker {
        fn has_access(&self, view: ViewId, _principal: Option<&Principal>) -> Result<bool, AccessError> {
            self.calls.lock().unwrap().push(view);
            Ok(self.granted.contains(&view))
        }
    }

    /// Errors for one view, grants everything else
    struct FailingChecker {
        broken: ViewId,
    }

    impl AccessChecker for FailingChecker {
        fn has_access(&self, view: ViewId, _principal: Option<&Principal>) -> Result<bool, AccessError> {
            if view == self.broken {
                Err(AccessError::PolicyLookup("policy store offline".to_string()))
            } else {
                Ok(true)
            }
        }
    }

    fn hello_about_registry() -> MenuRegistry {
        MenuRegistry::new(vec![
            MenuEntryDescriptor::new("Hello", "globe", ViewId::HelloWorld),
            MenuEntryDescriptor::new("About", "file", ViewId::About),
        ])
    }

    fn labels(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_denied_entry_is_left_out() {
        let checker = FakeChecker::granting(&[ViewId::HelloWorld]);
        let tabs = MenuBuilder::new(&checker).build(&hello_about_registry(), None);

        assert_eq!(
            tabs,
            vec![Tab {
                label: "Hello".to_string(),
                icon_token: "globe".to_string(),
                target_view: ViewId::HelloWorld,
            }]
        );
    }

    #[test]
    fn test_filter_preserves_registry_order() {
        let registry = MenuRegistry::standard();
        let checker = FakeChecker::granting(&[ViewId::Empty, ViewId::Map, ViewId::About]);

        let tabs = MenuBuilder::new(&checker).build(&registry, None);

        assert_eq!(labels(&tabs), vec!["About", "Map", "Empty"]);
    }

    #[test]
    fn test_one_check_per_entry_in_order() {
        let registry = MenuRegistry::standard();
        let checker = FakeChecker::granting(&[]);

        let tabs = MenuBuilder::new(&checker).build(&registry, None);

        let expected: Vec<ViewId> = registry.entries().iter().map(|e| e.target_view).collect();
        assert!(tabs.is_empty());
        assert_eq!(*checker.calls.lock().unwrap(), expected);
    }

    #[test]
    fn test_checker_error_fails_closed() {
        let checker = FailingChecker { broken: ViewId::About };
        let tabs = MenuBuilder::new(&checker).build(&hello_about_registry(), None);

        assert_eq!(labels(&tabs), vec!["Hello"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let registry = MenuRegistry::standard();
        let checker = FakeChecker::granting(&[ViewId::HelloWorld, ViewId::Editor, ViewId::Empty]);
        let builder = MenuBuilder::new(&checker);

        assert_eq!(builder.build(&registry, None), builder.build(&registry, None));
    }

    #[test]
    fn test_principal_is_passed_to_checker() {
        struct AdminOnly {
            seen: Mutex<Vec<Option<String>>>,
        }

        impl AccessChecker for AdminOnly {
            fn has_access(&self, _view: ViewId, principal: Option<&Principal>) -> Result<bool, AccessError> {
                self.seen.lock().unwrap().push(principal.map(|p| p.username.clone()));
                Ok(principal.is_some_and(|p| p.has_role(Role::Admin)))
            }
        }

        let checker = AdminOnly { seen: Mutex::new(Vec::new()) };
        let admin = Principal::new("admin", "Emma Powerful").with_role(Role::Admin);
        let registry = hello_about_registry();

        let tabs = MenuBuilder::new(&checker).build(&registry, Some(&admin));

        assert_eq!(tabs.len(), 2);
        assert_eq!(
            *checker.seen.lock().unwrap(),
            vec![Some("admin".to_string()), Some("admin".to_string())]
        );
    }
}
