use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{Catalog, Estimator as RateEstimator},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{BookingSection, EstimatorSection, HomePage},
        shell::Shell,
    },
    util::{
        assets,
        config::SiteConfig,
        version::{version_label, APP_NAME},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/estimator")]
    Estimator {},
    #[route("/booking")]
    Booking {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        let config = SiteConfig::load();
        info!(
            "Starting {} with booking endpoint {}",
            version_label(),
            config.booking_endpoint
        );
        config
    });
    use_context_provider(|| config.clone());

    // One estimator for the whole session so the quote survives navigation.
    let estimator = use_signal(|| RateEstimator::new(Catalog::load()));
    use_context_provider(|| estimator);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Title { "{APP_NAME} | Last Minute Courier Austin" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Link { rel: "stylesheet", href: assets::LEAFLET_CSS }
        document::Script { src: assets::TAILWIND_CDN }
        document::Script { src: assets::LEAFLET_JS }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorSection {} } }
}

#[component]
pub fn Booking() -> Element {
    rsx! { Shell { BookingSection {} } }
}
