pub mod drawer_toggle;
pub mod menu_tabs;
pub mod user_menu;

pub use drawer_toggle::DrawerToggle;
pub use menu_tabs::MenuTabs;
pub use user_menu::UserMenu;
