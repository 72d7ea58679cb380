//! Collaborators that reach outside the process: the booking intake and the map.

pub mod booking_client;
pub mod leaflet;

pub use booking_client::{BookingClient, BookingClientError};
pub use leaflet::LeafletMap;
