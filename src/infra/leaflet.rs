//! Leaflet-backed air route map, driven through `document::eval`.
//!
//! Surfaces and route layers live in `window.__speedyBat` keyed by handle id.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Bounds, Coords, MapCollaborator, RouteHandle, SurfaceHandle};

const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap &copy; CARTO";
const FIT_PADDING_PX: u32 = 50;
const FIT_MAX_ZOOM: u8 = 4;

const REGISTRY: &str = "window.__speedyBat = window.__speedyBat || { maps: {}, routes: {} };";

pub struct LeafletMap {
    container_id: String,
    next_id: u64,
}

impl LeafletMap {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            next_id: 0,
        }
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Sends `script` to the page and logs what it reports back.
    fn run(&self, action: &'static str, id: u64, script: String) {
        debug!("leaflet {action} #{id}: {} bytes of script", script.len());
        let eval = document::eval(&script);
        spawn_forever(async move {
            match eval.await {
                Ok(value) if completed(&value) => debug!("leaflet {action} #{id} done"),
                Ok(_) => warn!("leaflet {action} #{id} skipped: map container or Leaflet missing"),
                Err(err) => warn!("leaflet {action} #{id} failed: {err:?}"),
            }
        });
    }
}

/// Scripts return `false` when they could not act on the page.
fn completed(value: &Value) -> bool {
    !matches!(value, Value::Bool(false))
}

impl MapCollaborator for LeafletMap {
    fn create_surface(&mut self, center: Coords, zoom: u8) -> SurfaceHandle {
        let id = self.allocate();
        self.run("create", id, create_surface_script(&self.container_id, id, center, zoom));
        SurfaceHandle(id)
    }

    fn show_route(
        &mut self,
        surface: &SurfaceHandle,
        origin: Coords,
        destination: Coords,
    ) -> RouteHandle {
        let id = self.allocate();
        self.run("show route", id, show_route_script(surface.0, id, origin, destination));
        RouteHandle(id)
    }

    fn clear_route(&mut self, _surface: &SurfaceHandle, route: RouteHandle) {
        self.run("clear route", route.0, clear_route_script(route.0));
    }

    fn fit_view(&mut self, surface: &SurfaceHandle, bounds: Bounds) {
        self.run("fit view", surface.0, fit_view_script(surface.0, bounds));
    }

    fn destroy_surface(&mut self, surface: SurfaceHandle) {
        self.run("destroy", surface.0, destroy_surface_script(surface.0));
    }
}

fn lat_lng(coords: Coords) -> String {
    format!("[{}, {}]", coords.lat, coords.lng)
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn create_surface_script(container_id: &str, id: u64, center: Coords, zoom: u8) -> String {
    format!(
        r#"return (() => {{
            {REGISTRY}
            const el = document.getElementById({container});
            if (!el || typeof L === 'undefined') return false;
            const map = L.map(el, {{
                zoomControl: false,
                attributionControl: false,
                dragging: true,
                scrollWheelZoom: false,
                doubleClickZoom: false
            }}).setView({center}, {zoom});
            L.tileLayer({tiles}, {{
                attribution: {attribution},
                subdomains: 'abcd',
                maxZoom: 19
            }}).addTo(map);
            window.__speedyBat.maps[{id}] = map;
            return true;
        }})()"#,
        container = js_string(container_id),
        center = lat_lng(center),
        tiles = js_string(TILE_URL),
        attribution = js_string(TILE_ATTRIBUTION),
    )
}

fn show_route_script(surface: u64, id: u64, origin: Coords, destination: Coords) -> String {
    format!(
        r#"return (() => {{
            {REGISTRY}
            const map = window.__speedyBat.maps[{surface}];
            if (!map) return false;
            const pin = (kind) => L.divIcon({{
                className: 'bg-transparent',
                html: `<div class="marker-pin ${{kind}}"></div>`,
                iconSize: [12, 12],
                iconAnchor: [6, 6]
            }});
            const group = L.layerGroup([
                L.marker({origin}, {{ icon: pin('marker-origin') }}),
                L.marker({destination}, {{ icon: pin('marker-destination-air') }}),
                L.polyline([{origin}, {destination}], {{
                    className: 'route-path-air',
                    weight: 3,
                    opacity: 0.8,
                    smoothFactor: 1
                }})
            ]).addTo(map);
            window.__speedyBat.routes[{id}] = group;
            return true;
        }})()"#,
        origin = lat_lng(origin),
        destination = lat_lng(destination),
    )
}

fn clear_route_script(id: u64) -> String {
    format!(
        r#"return (() => {{
            {REGISTRY}
            const group = window.__speedyBat.routes[{id}];
            if (!group) return false;
            group.remove();
            delete window.__speedyBat.routes[{id}];
            return true;
        }})()"#
    )
}

fn fit_view_script(surface: u64, bounds: Bounds) -> String {
    format!(
        r#"return (() => {{
            {REGISTRY}
            const map = window.__speedyBat.maps[{surface}];
            if (!map) return false;
            map.fitBounds(L.latLngBounds([{south_west}, {north_east}]), {{
                padding: [{FIT_PADDING_PX}, {FIT_PADDING_PX}],
                maxZoom: {FIT_MAX_ZOOM},
                animate: true,
                duration: 1
            }});
            return true;
        }})()"#,
        south_west = lat_lng(bounds.south_west),
        north_east = lat_lng(bounds.north_east),
    )
}

fn destroy_surface_script(surface: u64) -> String {
    format!(
        r#"return (() => {{
            {REGISTRY}
            const map = window.__speedyBat.maps[{surface}];
            if (!map) return false;
            map.remove();
            delete window.__speedyBat.maps[{surface}];
            return true;
        }})()"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_targets_container_and_registers_surface() {
        let script = create_surface_script("air-map", 7, Coords::new(30.2672, -97.7431), 3);
        assert!(script.contains(r#"document.getElementById("air-map")"#));
        assert!(script.contains(".setView([30.2672, -97.7431], 3)"));
        assert!(script.contains("window.__speedyBat.maps[7] = map;"));
        assert!(script.contains("{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"));
    }

    #[test]
    fn route_is_one_removable_layer_group() {
        let script = show_route_script(
            1,
            2,
            Coords::new(30.2672, -97.7431),
            Coords::new(51.47, -0.4543),
        );
        assert!(script.contains("window.__speedyBat.maps[1]"));
        assert!(script.contains("L.polyline([[30.2672, -97.7431], [51.47, -0.4543]]"));
        assert!(script.contains("window.__speedyBat.routes[2] = group;"));
        assert!(script.contains("marker-pin ${kind}"));

        let clear = clear_route_script(2);
        assert!(clear.contains("group.remove()"));
        assert!(clear.contains("delete window.__speedyBat.routes[2]"));
    }

    #[test]
    fn fit_uses_padding_and_zoom_cap() {
        let bounds = Bounds::enclosing(Coords::new(30.0, -97.0), Coords::new(40.0, -73.0));
        let script = fit_view_script(3, bounds);
        assert!(script.contains("L.latLngBounds([[30, -97], [40, -73]])"));
        assert!(script.contains("padding: [50, 50]"));
        assert!(script.contains("maxZoom: 4"));
    }

    #[test]
    fn destroy_removes_and_forgets_surface() {
        let script = destroy_surface_script(9);
        assert!(script.contains("map.remove()"));
        assert!(script.contains("delete window.__speedyBat.maps[9]"));
    }

    #[test]
    fn scripts_report_missing_targets() {
        let create = create_surface_script("air-map", 1, Coords::new(30.2672, -97.7431), 3);
        assert!(create.starts_with("return (() =>"));
        assert!(create.contains("typeof L === 'undefined') return false;"));

        let (a, b) = (Coords::new(0.0, 0.0), Coords::new(1.0, 1.0));
        for script in [
            show_route_script(1, 2, a, b),
            clear_route_script(2),
            fit_view_script(1, Bounds::enclosing(a, b)),
            destroy_surface_script(1),
        ] {
            assert!(script.starts_with("return (() =>"));
            assert!(script.contains("return false;"));
            assert!(script.contains("return true;"));
        }
    }

    #[test]
    fn only_an_explicit_false_counts_as_skipped() {
        assert!(completed(&Value::Bool(true)));
        assert!(completed(&Value::Null));
        assert!(!completed(&Value::Bool(false)));
    }

    #[test]
    fn handles_are_unique() {
        let mut map = LeafletMap::new("air-map");
        let first = map.allocate();
        let second = map.allocate();
        assert_ne!(first, second);
    }
}
