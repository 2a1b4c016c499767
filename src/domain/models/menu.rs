
use super::view::ViewId;

/// Stylesheet of the Line Awesome icon font the standard menu's tokens come from
pub const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/line-awesome/1.3.0/line-awesome/css/line-awesome.min.css";

/// Classes every tab icon carries, before the entry's own icon classes
const BASE_ICON_CLASSES: [&str; 2] = ["text-l", "pr-s"];

/// One declared menu entry: label, icon token and the view it routes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntryDescriptor {
    pub label: String,
    /// Space-separated icon classes, empty for entries without an icon
    pub icon_token: String,
    pub target_view: ViewId,
}

impl MenuEntryDescriptor {
    pub fn new(label: impl Into<String>, icon_token: impl Into<String>, target_view: ViewId) -> Self {
        Self {
            label: label.into(),
            icon_token: icon_token.into(),
            target_view,
        }
    }
}

/// Ordered catalog of menu entries.
///
/// Constructed once and shared read-only (wrap it in an `Arc`) by every shell instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRegistry {
    entries: Vec<MenuEntryDescriptor>,
}

impl MenuRegistry {
    pub fn new(entries: Vec<MenuEntryDescriptor>) -> Self {
        Self { entries }
    }

    /// The application's menu, in display order
    pub fn standard() -> Self {
        Self::new(vec![
            MenuEntryDescriptor::new("Hello World", "la la-globe", ViewId::HelloWorld),
            MenuEntryDescriptor::new("About", "la la-file", ViewId::About),
            MenuEntryDescriptor::new("Master-Detail", "la la-columns", ViewId::MasterDetail),
            MenuEntryDescriptor::new("Person Form", "la la-user", ViewId::PersonForm),
            MenuEntryDescriptor::new("Address Form", "la la-map-marker", ViewId::AddressForm),
            MenuEntryDescriptor::new("Credit Card Form", "", ViewId::CreditCardForm),
            MenuEntryDescriptor::new("Map", "la la-map", ViewId::Map),
            MenuEntryDescriptor::new("Editor", "la la-edit", ViewId::Editor),
            MenuEntryDescriptor::new("Image List", "la la-th-list", ViewId::ImageList),
            MenuEntryDescriptor::new("Checkout Form", "", ViewId::CheckoutForm),
            MenuEntryDescriptor::new(
                "Collaborative Master-Detail",
                "la la-columns",
                ViewId::CollaborativeMasterDetail,
            ),
            MenuEntryDescriptor::new("Empty", "la la-fighter-jet", ViewId::Empty),
        ])
    }

    pub fn entries(&self) -> &[MenuEntryDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A menu entry that passed the access filter, as rendered in the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    pub icon_token: String,
    pub target_view: ViewId,
}

impl Tab {
    pub fn icon_classes(&self) -> Vec<&str> {
        BASE_ICON_CLASSES
            .into_iter()
            .chain(self.icon_token.split_whitespace())
            .collect()
    }

    pub fn icon_class_attr(&self) -> String {
        self.icon_classes().join(" ")
    }

    pub fn routes_to(&self, view: ViewId) -> bool {
        self.target_view == view
    }

    /// Render key of the tab at `index`; unique even when two entries share a view
    pub fn key(&self, index: usize) -> String {
        format!("{}-{}", index, self.target_view)
    }
}

impl From<&MenuEntryDescriptor> for Tab {
    fn from(entry: &MenuEntryDescriptor) -> Self {
        Self {
            label: entry.label.clone(),
            icon_token: entry.icon_token.clone(),
            target_view: entry.target_view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = MenuRegistry::standard();
        let labels: Vec<&str> = registry.entries().iter().map(|e| e.label.as_str()).collect();

        assert_eq!(registry.len(), 12);
        assert_eq!(labels.first(), Some(&"Hello World"));
        assert_eq!(labels.last(), Some(&"Empty"));
        assert!(!registry.entries().iter().any(|e| e.target_view == ViewId::Login));
    }

    #[test]
    fn test_icon_classes_with_token() {
        let tab = Tab::from(&MenuEntryDescriptor::new("Map", "la la-map", ViewId::Map));

        assert_eq!(tab.icon_classes(), vec!["text-l", "pr-s", "la", "la-map"]);
        assert_eq!(tab.icon_class_attr(), "text-l pr-s la la-map");
    }

    #[test]
    fn test_icon_classes_without_token() {
        let tab = Tab::from(&MenuEntryDescriptor::new("Checkout Form", "", ViewId::CheckoutForm));

        assert_eq!(tab.icon_classes(), vec!["text-l", "pr-s"]);
        assert!(tab.routes_to(ViewId::CheckoutForm));
        assert!(!tab.routes_to(ViewId::Map));
    }

    #[test]
    fn test_standard_icons_are_line_awesome() {
        for entry in MenuRegistry::standard().entries() {
            let classes: Vec<&str> = entry.icon_token.split_whitespace().collect();
            if classes.is_empty() {
                continue;
            }
            assert_eq!(classes[0], "la", "{}", entry.label);
            assert!(classes[1..].iter().all(|c| c.starts_with("la-")), "{}", entry.label);
        }
        assert!(ICON_STYLESHEET.contains("line-awesome"));
    }

    #[test]
    fn test_tab_keys_unique_for_repeated_view() {
        let registry = MenuRegistry::new(vec![
            MenuEntryDescriptor::new("Master-Detail", "la la-columns", ViewId::MasterDetail),
            MenuEntryDescriptor::new("Master-Detail (copy)", "la la-columns", ViewId::MasterDetail),
        ]);
        let keys: Vec<String> = registry
            .entries()
            .iter()
            .map(Tab::from)
            .enumerate()
            .map(|(index, tab)| tab.key(index))
            .collect();

        assert_eq!(keys, vec!["0-master-detail", "1-master-detail"]);
    }
}
