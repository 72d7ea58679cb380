//! Rate estimation and booking logic lives here.

pub mod booking;
pub mod catalog;
pub mod estimator;
pub mod pricing;
pub mod route_preview;

pub use booking::{BookingDraft, BookingRequest, ServiceMode};
pub use catalog::{AirCategory, Catalog, Coords, HQ_LABEL};
pub use estimator::{
    AddOn, Estimator, QuoteBreakdown, ShippingMode, CUSTOM_MILES_MAX, CUSTOM_MILES_MIN,
};
pub use pricing::{AddOns, BASE_FEE};
pub use route_preview::{
    ground_embed_url, Bounds, MapCollaborator, PreviewTarget, RouteHandle, RoutePreview,
    SurfaceHandle,
};
