use dioxus::prelude::*;

use crate::app::components::{DrawerToggle, UserMenu};
use crate::domain::services::HeaderContent;

/// Header bar: drawer toggle, current view title, identity or sign-in link
#[component]
pub fn Navbar(
    title: String,
    header: HeaderContent,
    drawer_open: bool,
    on_toggle_drawer: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "sidemenu-header c-navbar dark",
            DrawerToggle {
                drawer_open,
                onclick: move |_| on_toggle_drawer.call(()),
            }

            h1 { class: "c-navbar__title", "{title}" }

            {match header {
                HeaderContent::Identity { display_name, avatar_ref, initials, logout_label, .. } => rsx! {
                    UserMenu {
                        display_name,
                        avatar_ref,
                        initials,
                        logout_label,
                        on_logout: move |_| on_logout.call(()),
                    }
                },
                HeaderContent::SignIn { href, label } => rsx! {
                    a { class: "c-navbar__sign-in ms-auto me-m", href: "{href}", "{label}" }
                },
            }}
        }
    }
}
