// Business logic services
// Framework-agnostic, 100% testable

pub mod access_checker;
pub mod authenticated_principal;
pub mod menu_builder;
pub mod navigation_shell;

pub use access_checker::{AccessChecker, AnnotationAccessChecker};
pub use authenticated_principal::{AuthenticatedPrincipal, SessionPrincipal};
pub use menu_builder::MenuBuilder;
pub use navigation_shell::{DrawerContent, HeaderAction, HeaderContent, NavigationShell};
