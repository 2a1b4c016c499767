// Domain models
// Pure Rust, no framework dependencies

pub mod view;
pub mod principal;
pub mod menu;

pub use view::{AccessRequirement, ActiveView, ViewCatalog, ViewDescriptor, ViewId};
pub use principal::{Principal, Role};
pub use menu::{ICON_STYLESHEET, MenuEntryDescriptor, MenuRegistry, Tab};
