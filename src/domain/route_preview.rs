//! Keeps the external route map in step with the estimator selection.
//!
//! The air map is a scoped resource: a surface is acquired on entering air
//! mode and released on leaving it, on [`RoutePreview::teardown`], or when the
//! preview is dropped. Route artifacts are cleared before new ones are drawn.

use url::form_urlencoded;

use super::catalog::{Coords, GroundDestination, HQ_COORDS};
use super::estimator::{EstimatorSelection, ShippingMode};

/// Zoom level used when a fresh air map is created.
pub const AIR_MAP_INITIAL_ZOOM: u8 = 3;

const TEXAS_OVERVIEW_URL: &str =
    "https://maps.google.com/maps?q=Texas&t=m&z=6&output=embed&iwloc=near";

/// Handle to a rendered map surface. Consumed on release.
#[derive(Debug, PartialEq, Eq)]
pub struct SurfaceHandle(pub u64);

/// Handle to the markers and line of one drawn route. Consumed on clear.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south_west: Coords,
    pub north_east: Coords,
}

impl Bounds {
    pub fn enclosing(a: Coords, b: Coords) -> Self {
        Self {
            south_west: Coords::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: Coords::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }
}

/// Rendering backend for the air route map.
pub trait MapCollaborator {
    fn create_surface(&mut self, center: Coords, zoom: u8) -> SurfaceHandle;
    fn show_route(
        &mut self,
        surface: &SurfaceHandle,
        origin: Coords,
        destination: Coords,
    ) -> RouteHandle;
    fn clear_route(&mut self, surface: &SurfaceHandle, route: RouteHandle);
    fn fit_view(&mut self, surface: &SurfaceHandle, bounds: Bounds);
    fn destroy_surface(&mut self, surface: SurfaceHandle);
}

/// What the preview should currently show.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewTarget {
    pub mode: ShippingMode,
    pub origin: Coords,
    pub destination: Coords,
    pub destination_label: &'static str,
}

impl PreviewTarget {
    pub fn for_selection(selection: &EstimatorSelection) -> Self {
        let destination_label = match selection.mode {
            ShippingMode::Ground if selection.ground_destination.is_custom() => "Destination",
            ShippingMode::Ground => selection.ground_destination.name,
            ShippingMode::Air => selection.air_destination.name,
        };
        Self {
            mode: selection.mode,
            origin: HQ_COORDS,
            destination: selection.destination_coords(),
            destination_label,
        }
    }
}

/// Embedded road map used while in ground mode.
pub fn ground_embed_url(destination: &GroundDestination) -> String {
    if destination.is_custom() {
        return TEXAS_OVERVIEW_URL.to_string();
    }
    let query = format!("{}, TX", destination.name);
    // Component encoding: spaces become %20, not the form-style `+`.
    let encoded = form_urlencoded::byte_serialize(query.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("https://maps.google.com/maps?q=from:Austin,+TX+to:{encoded}&t=m&output=embed")
}

#[derive(Debug)]
struct AirSession {
    surface: SurfaceHandle,
    route: Option<RouteHandle>,
    drawn_for: Option<&'static str>,
}

pub struct RoutePreview<M: MapCollaborator> {
    map: M,
    session: Option<AirSession>,
}

impl<M: MapCollaborator> RoutePreview<M> {
    pub fn new(map: M) -> Self {
        Self { map, session: None }
    }

    /// Brings the map in line with `selection` and returns the new target.
    pub fn sync(&mut self, selection: &EstimatorSelection) -> PreviewTarget {
        let target = PreviewTarget::for_selection(selection);

        match target.mode {
            ShippingMode::Ground => self.teardown(),
            ShippingMode::Air => {
                let map = &mut self.map;
                let session = self.session.get_or_insert_with(|| AirSession {
                    surface: map.create_surface(target.origin, AIR_MAP_INITIAL_ZOOM),
                    route: None,
                    drawn_for: None,
                });

                if session.drawn_for != Some(target.destination_label) {
                    if let Some(route) = session.route.take() {
                        map.clear_route(&session.surface, route);
                    }
                    session.route =
                        Some(map.show_route(&session.surface, target.origin, target.destination));
                    map.fit_view(
                        &session.surface,
                        Bounds::enclosing(target.origin, target.destination),
                    );
                    session.drawn_for = Some(target.destination_label);
                }
            }
        }

        target
    }

    /// Releases the map surface and everything drawn on it.
    pub fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Some(route) = session.route.take() {
                self.map.clear_route(&session.surface, route);
            }
            self.map.destroy_surface(session.surface);
        }
    }
}

impl<M: MapCollaborator> Drop for RoutePreview<M> {
    fn drop(&mut self) {
        self.teardown();
    }
}
