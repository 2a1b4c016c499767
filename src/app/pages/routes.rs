use dioxus::prelude::*;

use crate::app::layouts::MainLayout;
use crate::app::pages::placeholder::PlaceholderView;
use crate::config::ShellConfig;
use crate::domain::models::ViewId;
use crate::server_fns::get_shell_config;
use crate::shared::state::{installed_config, AppServices};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
    #[route("/")]
    HelloWorld {},
    #[route("/about")]
    About {},
    #[route("/master-detail")]
    MasterDetail {},
    #[route("/person-form")]
    PersonForm {},
    #[route("/address-form")]
    AddressForm {},
    #[route("/credit-card-form")]
    CreditCardForm {},
    #[route("/map")]
    Map {},
    #[route("/editor")]
    Editor {},
    #[route("/image-list")]
    ImageList {},
    #[route("/checkout-form")]
    CheckoutForm {},
    #[route("/collaborative-master-detail")]
    CollaborativeMasterDetail {},
    #[route("/empty")]
    Empty {},
    #[route("/login")]
    Login {},
}

impl Route {
    pub fn view_id(&self) -> ViewId {
        match self {
            Route::HelloWorld {} => ViewId::HelloWorld,
            Route::About {} => ViewId::About,
            Route::MasterDetail {} => ViewId::MasterDetail,
            Route::PersonForm {} => ViewId::PersonForm,
            Route::AddressForm {} => ViewId::AddressForm,
            Route::CreditCardForm {} => ViewId::CreditCardForm,
            Route::Map {} => ViewId::Map,
            Route::Editor {} => ViewId::Editor,
            Route::ImageList {} => ViewId::ImageList,
            Route::CheckoutForm {} => ViewId::CheckoutForm,
            Route::CollaborativeMasterDetail {} => ViewId::CollaborativeMasterDetail,
            Route::Empty {} => ViewId::Empty,
            Route::Login {} => ViewId::Login,
        }
    }

    pub fn from_view(view: ViewId) -> Self {
        match view {
            ViewId::HelloWorld => Route::HelloWorld {},
            ViewId::About => Route::About {},
            ViewId::MasterDetail => Route::MasterDetail {},
            ViewId::PersonForm => Route::PersonForm {},
            ViewId::AddressForm => Route::AddressForm {},
            ViewId::CreditCardForm => Route::CreditCardForm {},
            ViewId::Map => Route::Map {},
            ViewId::Editor => Route::Editor {},
            ViewId::ImageList => Route::ImageList {},
            ViewId::CheckoutForm => Route::CheckoutForm {},
            ViewId::CollaborativeMasterDetail => Route::CollaborativeMasterDetail {},
            ViewId::Empty => Route::Empty {},
            ViewId::Login => Route::Login {},
        }
    }
}

#[component]
pub fn App() -> Element {
    // Server render and hydrating client start from the server's config
    let config_resource = use_server_future(move || async move { get_shell_config().await })?;

    let config = match &*config_resource.read() {
        Some(Ok(config)) => config.clone(),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Server config unavailable, using local config");
            installed_config()
        }
        None => return rsx! {},
    };

    rsx! {
        Shell { config }
    }
}

#[component]
fn Shell(config: ShellConfig) -> Element {
    use_context_provider(|| AppServices::standard(config.clone()));

    use_effect(|| {
        tracing::info!("Application shell mounted");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Content views are placeholders, each tagged with its view id
macro_rules! placeholder_pages {
    ($($name:ident),* $(,)?) => {
        $(
            #[component]
            fn $name() -> Element {
                rsx! {
                    PlaceholderView { view: ViewId::$name }
                }
            }
        )*
    };
}

placeholder_pages!(
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
);
