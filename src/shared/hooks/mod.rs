// Custom Dioxus hooks
pub mod use_navigation_shell;

pub use use_navigation_shell::{use_navigation_shell, UseNavigationShellReturn};
