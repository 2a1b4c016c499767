use dioxus::prelude::*;

use crate::app::pages::Route;
use crate::domain::models::Tab;

/// Vertical tab list of the drawer. At most one tab carries the selected state.
#[component]
pub fn MenuTabs(tabs: Vec<Tab>, selected: Option<usize>) -> Element {
    rsx! {
        nav {
            id: "tabs",
            class: "c-tabs c-tabs--vertical c-tabs--minimal",
            role: "tablist",
            aria_orientation: "vertical",
            for (index, key, tab) in tabs.into_iter().enumerate().map(|(i, t)| (i, t.key(i), t)) {
                MenuTab {
                    key: "{key}",
                    is_selected: selected == Some(index),
                    tab,
                }
            }
        }
    }
}

#[component]
fn MenuTab(tab: Tab, is_selected: bool) -> Element {
    let tab_class = if is_selected {
        "c-tabs__tab c-tabs__tab--selected"
    } else {
        "c-tabs__tab"
    };
    let icon_class = tab.icon_class_attr();

    rsx! {
        div {
            class: "{tab_class}",
            role: "tab",
            aria_selected: "{is_selected}",
            Link {
                to: Route::from_view(tab.target_view),
                class: "c-tabs__link",
                span { class: "{icon_class}" }
                "{tab.label}"
            }
        }
    }
}
