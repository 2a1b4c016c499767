pub mod drawer;
pub mod main_layout;
pub mod navbar;

pub use drawer::Drawer;
pub use main_layout::MainLayout;
pub use navbar::Navbar;
