use dioxus::prelude::*;

/// Avatar opening a context menu with the logout action
#[component]
pub fn UserMenu(
    display_name: String,
    avatar_ref: Option<String>,
    initials: String,
    logout_label: String,
    /// Called when the logout item is chosen
    on_logout: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let is_open = menu_open();

    rsx! {
        div { class: "c-user-menu ms-auto me-m",
            button {
                class: "c-avatar",
                title: "{display_name}",
                aria_label: "{display_name}",
                aria_haspopup: "menu",
                aria_expanded: "{is_open}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    menu_open.set(!is_open);
                },
                if let Some(src) = avatar_ref {
                    img { class: "c-avatar__image", src: "{src}", alt: "{display_name}" }
                } else {
                    span { class: "c-avatar__initials", "{initials}" }
                }
            }

            if is_open {
                // Backdrop closes the menu on outside click
                div {
                    class: "c-user-menu__backdrop",
                    onclick: move |_| menu_open.set(false),
                }
                div { class: "c-user-menu__items", role: "menu",
                    button {
                        class: "c-user-menu__item",
                        role: "menuitem",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            menu_open.set(false);
                            on_logout.call(());
                        },
                        "{logout_label}"
                    }
                }
            }
        }
    }
}
