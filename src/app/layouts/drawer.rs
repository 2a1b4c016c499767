use dioxus::prelude::*;

use crate::app::components::MenuTabs;
use crate::domain::models::Tab;
use crate::domain::services::DrawerContent;

/// Collapsible drawer: logo, application name and the menu tabs
#[component]
pub fn Drawer(drawer: DrawerContent, tabs: Vec<Tab>, selected: Option<usize>, open: bool) -> Element {
    let drawer_class = if open {
        "sidemenu-menu c-drawer"
    } else {
        "sidemenu-menu c-drawer c-drawer--closed"
    };

    rsx! {
        aside { class: "{drawer_class}",
            div { id: "logo", class: "c-drawer__logo",
                img { src: "{drawer.logo_src}", alt: "{drawer.logo_alt}" }
                h1 { "{drawer.app_name}" }
            }
            MenuTabs { tabs, selected }
        }
    }
}
