use dioxus::prelude::*;

use crate::domain::models::ViewId;

/// Stand-in content for a view
#[component]
pub fn PlaceholderView(view: ViewId) -> Element {
    rsx! {
        div { class: "c-view {view}-view",
            "data-view": "{view}",
            "Content placeholder"
        }
    }
}
