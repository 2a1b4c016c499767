use std::collections::HashMap;

use super::principal::{Principal, Role};

/// Every view the router can place in the shell's content slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    HelloWorld,
    About,
    MasterDetail,
    PersonForm,
    AddressForm,
    CreditCardForm,
    Map,
    Editor,
    ImageList,
    CheckoutForm,
    CollaborativeMasterDetail,
    Empty,
    Login,
}

impl ViewId {
    pub const ALL: [ViewId; 13] = [
        ViewId::HelloWorld,
        ViewId::About,
        ViewId::MasterDetail,
        ViewId::PersonForm,
        ViewId::AddressForm,
        ViewId::CreditCardForm,
        ViewId::Map,
        ViewId::Editor,
        ViewId::ImageList,
        ViewId::CheckoutForm,
        ViewId::CollaborativeMasterDetail,
        ViewId::Empty,
        ViewId::Login,
    ];

    /// Stable tag, also used as the CSS class suffix of the view
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::HelloWorld => "hello-world",
            ViewId::About => "about",
            ViewId::MasterDetail => "master-detail",
            ViewId::PersonForm => "person-form",
            ViewId::AddressForm => "address-form",
            ViewId::CreditCardForm => "credit-card-form",
            ViewId::Map => "map",
            ViewId::Editor => "editor",
            ViewId::ImageList => "image-list",
            ViewId::CheckoutForm => "checkout-form",
            ViewId::CollaborativeMasterDetail => "collaborative-master-detail",
            ViewId::Empty => "empty",
            ViewId::Login => "login",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == tag)
            .ok_or_else(|| format!("Unknown view: {}", s))
    }
}

/// What a principal must hold to navigate to a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Anyone, signed in or not
    AnonymousAllowed,
    /// Any signed-in principal
    PermitAll,
    /// Signed-in principal holding at least one of the roles
    RolesAllowed(Vec<Role>),
    DenyAll,
}

impl AccessRequirement {
    pub fn is_satisfied_by(&self, principal: Option<&Principal>) -> bool {
        match self {
            AccessRequirement::AnonymousAllowed => true,
            AccessRequirement::PermitAll => principal.is_some(),
            AccessRequirement::RolesAllowed(roles) => {
                principal.is_some_and(|p| roles.iter().any(|role| p.has_role(*role)))
            }
            AccessRequirement::DenyAll => false,
        }
    }
}

/// Metadata a view declares about itself: page title and access requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: ViewId,
    pub title: Option<String>,
    pub access: AccessRequirement,
}

impl ViewDescriptor {
    pub fn new(id: ViewId, title: Option<&str>, access: AccessRequirement) -> Self {
        Self {
            id,
            title: title.map(String::from),
            access,
        }
    }
}

/// Immutable lookup of view metadata, built once at startup
#[derive(Debug, Clone, Default)]
pub struct ViewCatalog {
    descriptors: HashMap<ViewId, ViewDescriptor>,
}

impl ViewCatalog {
    /// Later descriptors for the same view replace earlier ones
    pub fn new(descriptors: impl IntoIterator<Item = ViewDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Titles and access rules of the application's views
    pub fn standard() -> Self {
        use AccessRequirement::*;

        let user = || RolesAllowed(vec![Role::User]);
        let admin = || RolesAllowed(vec![Role::Admin]);

        Self::new([
            ViewDescriptor::new(ViewId::HelloWorld, Some("Hello World"), AnonymousAllowed),
            ViewDescriptor::new(ViewId::About, Some("About"), AnonymousAllowed),
            ViewDescriptor::new(ViewId::MasterDetail, Some("Master-Detail"), admin()),
            ViewDescriptor::new(ViewId::PersonForm, Some("Person Form"), user()),
            ViewDescriptor::new(ViewId::AddressForm, Some("Address Form"), user()),
            ViewDescriptor::new(ViewId::CreditCardForm, Some("Credit Card Form"), user()),
            ViewDescriptor::new(ViewId::Map, Some("Map"), user()),
            ViewDescriptor::new(ViewId::Editor, Some("Editor"), admin()),
            ViewDescriptor::new(ViewId::ImageList, Some("Image List"), user()),
            ViewDescriptor::new(ViewId::CheckoutForm, Some("Checkout Form"), user()),
            ViewDescriptor::new(
                ViewId::CollaborativeMasterDetail,
                Some("Collaborative Master-Detail"),
                admin(),
            ),
            ViewDescriptor::new(ViewId::Empty, Some("Empty"), AnonymousAllowed),
            ViewDescriptor::new(ViewId::Login, Some("Login"), AnonymousAllowed),
        ])
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewDescriptor> {
        self.descriptors.get(&id)
    }

    pub fn title_of(&self, id: ViewId) -> Option<&str> {
        self.get(id).and_then(|d| d.title.as_deref())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// The view currently occupying the shell's content slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    pub id: ViewId,
    pub page_title: Option<String>,
}

impl ActiveView {
    pub fn new(id: ViewId, page_title: Option<&str>) -> Self {
        Self {
            id,
            page_title: page_title.map(String::from),
        }
    }

    /// Instantiate a view with the title its catalog entry declares
    pub fn from_catalog(id: ViewId, catalog: &ViewCatalog) -> Self {
        Self::new(id, catalog.title_of(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_round_trips_through_tag() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
        }
        assert_eq!("ABOUT".parse::<ViewId>().unwrap(), ViewId::About);
        assert!("settings".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_access_requirement_rules() {
        let user = Principal::new("user", "John Normal").with_role(Role::User);
        let admin = Principal::new("admin", "Emma Powerful").with_role(Role::Admin);
        let admins_only = AccessRequirement::RolesAllowed(vec![Role::Admin]);

        assert!(AccessRequirement::AnonymousAllowed.is_satisfied_by(None));
        assert!(!AccessRequirement::PermitAll.is_satisfied_by(None));
        assert!(AccessRequirement::PermitAll.is_satisfied_by(Some(&user)));
        assert!(admins_only.is_satisfied_by(Some(&admin)));
        assert!(!admins_only.is_satisfied_by(Some(&user)));
        assert!(!admins_only.is_satisfied_by(None));
        assert!(!AccessRequirement::DenyAll.is_satisfied_by(Some(&admin)));
    }

    #[test]
    fn test_standard_catalog_covers_every_view() {
        let catalog = ViewCatalog::standard();

        assert_eq!(catalog.len(), ViewId::ALL.len());
        assert_eq!(catalog.title_of(ViewId::About), Some("About"));
        assert_eq!(
            catalog.get(ViewId::Editor).map(|d| &d.access),
            Some(&AccessRequirement::RolesAllowed(vec![Role::Admin]))
        );
    }

    #[test]
    fn test_active_view_from_catalog_without_title() {
        let catalog = ViewCatalog::new([ViewDescriptor::new(
            ViewId::Empty,
            None,
            AccessRequirement::AnonymousAllowed,
        )]);

        assert_eq!(ActiveView::from_catalog(ViewId::Empty, &catalog).page_title, None);
        assert_eq!(ActiveView::from_catalog(ViewId::About, &catalog).page_title, None);
    }
}
