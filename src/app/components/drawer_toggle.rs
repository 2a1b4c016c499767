use dioxus::prelude::*;

#[component]
pub fn DrawerToggle(drawer_open: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let label = if drawer_open { "Close menu" } else { "Open menu" };

    rsx! {
        button {
            class: "c-drawer-toggle",
            aria_label: "{label}",
            aria_expanded: "{drawer_open}",
            onclick: move |evt| onclick.call(evt),
            span { class: "c-drawer-toggle__bar" }
            span { class: "c-drawer-toggle__bar" }
            span { class: "c-drawer-toggle__bar" }
        }
    }
}
