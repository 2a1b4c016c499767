use dioxus::prelude::*;

use crate::app::layouts::{Drawer, Navbar};
use crate::app::pages::Route;
use crate::domain::models::ICON_STYLESHEET;
use crate::shared::hooks::use_navigation_shell;

/// Persistent frame around the routed view.
///
/// Reports every route change to the session's navigation shell before reading
/// it, then renders the shell's header, drawer and title.
#[component]
pub fn MainLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();
    let view = route.view_id();
    let nav = use_navigation_shell(view);
    let navigator = navigator();

    let shell = nav.shell.read().clone();
    let title = shell.title().to_string();
    let permitted = nav.can_open(view);

    let toggle_nav = nav.clone();
    let logout_nav = nav.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: ICON_STYLESHEET }
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Title { "{title}" }

        div { class: "c-shell",
            Navbar {
                title: title.clone(),
                header: shell.header().clone(),
                drawer_open: shell.drawer_open(),
                on_toggle_drawer: move |_| toggle_nav.toggle_drawer(),
                on_logout: move |_| match logout_nav.logout() {
                    Ok(()) => {
                        navigator.push(Route::Login {});
                    }
                    Err(e) => tracing::error!(error = %e, "Logout failed"),
                },
            }

            div { class: "c-shell__body",
                Drawer {
                    drawer: shell.drawer().clone(),
                    tabs: shell.tabs().to_vec(),
                    selected: shell.selected_index(),
                    open: shell.drawer_open(),
                }

                main { class: "c-shell__content",
                    if permitted {
                        Outlet::<Route> {}
                    } else {
                        AccessDenied { signed_in: shell.header().is_signed_in() }
                    }
                }
            }
        }
    }
}

/// Shown in place of a view the principal may not open
#[component]
fn AccessDenied(signed_in: bool) -> Element {
    rsx! {
        div { class: "c-access-denied",
            p { "You do not have access to this view." }
            if !signed_in {
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    fn css_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css")
    }

    #[test]
    fn test_bundled_sheets_exist_and_style_the_frame() {
        let entry = std::fs::read_to_string(css_dir().join("main.css")).unwrap();
        let imports: Vec<&str> = entry
            .lines()
            .filter_map(|line| line.trim().strip_prefix("@import"))
            .filter_map(|rest| rest.split('"').nth(1))
            .collect();

        assert_eq!(imports, vec!["navbar.css", "drawer.css", "tabs.css"]);

        let mut bundle = entry.clone();
        for name in imports {
            bundle.push_str(&std::fs::read_to_string(css_dir().join(name)).unwrap());
        }
        for class in [".c-shell", ".c-access-denied", ".c-tabs__tab--selected", ".text-l", ".pr-s"] {
            assert!(bundle.contains(class), "{class} missing from shell CSS");
        }
    }
}
