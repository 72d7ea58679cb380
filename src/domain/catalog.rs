//! Static destination reference data for the rate estimator.

use std::collections::HashSet;

use thiserror::Error;
use tracing::error;

/// Latitude / longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Austin HQ, origin of every route.
pub const HQ_COORDS: Coords = Coords::new(30.2672, -97.7431);
pub const HQ_LABEL: &str = "Austin, TX";

/// How a ground destination resolves its one-way mileage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundDistance {
    Fixed(u32),
    /// Mileage is supplied by the user instead of the catalog.
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundDestination {
    pub name: &'static str,
    pub distance: GroundDistance,
    pub coords: Coords,
}

impl GroundDestination {
    pub fn is_custom(&self) -> bool {
        matches!(self.distance, GroundDistance::Custom)
    }

    /// One-way miles, using `custom_miles` for the custom entry.
    pub fn resolve_miles(&self, custom_miles: u32) -> u32 {
        match self.distance {
            GroundDistance::Fixed(miles) => miles,
            GroundDistance::Custom => custom_miles,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirCategory {
    Domestic,
    International,
}

impl AirCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::International => "International",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirDestination {
    pub name: &'static str,
    pub category: AirCategory,
    pub courier_fee: f64,
    pub flight_estimate: f64,
    pub transit_time_label: &'static str,
    pub coords: Coords,
}

pub const CUSTOM_ROUTE_NAME: &str = "Custom Route";

static GROUND_DESTINATIONS: [GroundDestination; 5] = [
    GroundDestination {
        name: "Houston",
        distance: GroundDistance::Fixed(165),
        coords: Coords::new(29.7604, -95.3698),
    },
    GroundDestination {
        name: "Dallas/Fort Worth",
        distance: GroundDistance::Fixed(195),
        coords: Coords::new(32.7767, -96.7970),
    },
    GroundDestination {
        name: "San Antonio",
        distance: GroundDistance::Fixed(80),
        coords: Coords::new(29.4241, -98.4936),
    },
    GroundDestination {
        name: "El Paso",
        distance: GroundDistance::Fixed(575),
        coords: Coords::new(31.7619, -106.4850),
    },
    // Coordinates approximate Waco as a placeholder.
    GroundDestination {
        name: CUSTOM_ROUTE_NAME,
        distance: GroundDistance::Custom,
        coords: Coords::new(31.5493, -97.1467),
    },
];

static AIR_DESTINATIONS: [AirDestination; 7] = [
    AirDestination {
        name: "New York (JFK)",
        category: AirCategory::Domestic,
        courier_fee: 1500.0,
        flight_estimate: 600.0,
        transit_time_label: "8-10h",
        coords: Coords::new(40.6413, -73.7781),
    },
    AirDestination {
        name: "Los Angeles (LAX)",
        category: AirCategory::Domestic,
        courier_fee: 1500.0,
        flight_estimate: 500.0,
        transit_time_label: "6-8h",
        coords: Coords::new(33.9416, -118.4085),
    },
    AirDestination {
        name: "Chicago (ORD)",
        category: AirCategory::Domestic,
        courier_fee: 1500.0,
        flight_estimate: 450.0,
        transit_time_label: "5-7h",
        coords: Coords::new(41.9742, -87.9073),
    },
    AirDestination {
        name: "London (LHR)",
        category: AirCategory::International,
        courier_fee: 4080.0,
        flight_estimate: 2160.0,
        transit_time_label: "20-24h",
        coords: Coords::new(51.4700, -0.4543),
    },
    AirDestination {
        name: "Frankfurt (FRA)",
        category: AirCategory::International,
        courier_fee: 4080.0,
        flight_estimate: 2520.0,
        transit_time_label: "21-25h",
        coords: Coords::new(50.0379, 8.5622),
    },
    AirDestination {
        name: "Tokyo (HND)",
        category: AirCategory::International,
        courier_fee: 5040.0,
        flight_estimate: 3360.0,
        transit_time_label: "24-30h",
        coords: Coords::new(35.5494, 139.7798),
    },
    AirDestination {
        name: "Dubai (DXB)",
        category: AirCategory::International,
        courier_fee: 4560.0,
        flight_estimate: 2880.0,
        transit_time_label: "22-26h",
        coords: Coords::new(25.2532, 55.3657),
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} catalog is empty")]
    Empty(&'static str),
    #[error("duplicate destination name: {0}")]
    DuplicateName(&'static str),
    #[error("expected exactly one custom ground destination, found {0}")]
    CustomCount(usize),
    #[error("destination {0} has a non-positive price or distance")]
    NonPositive(&'static str),
}

/// Read-only view over the ground and air destination lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Catalog {
    ground: &'static [GroundDestination],
    air: &'static [AirDestination],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in Speedy Bat destination list.
    pub fn standard() -> Self {
        Self {
            ground: &GROUND_DESTINATIONS,
            air: &AIR_DESTINATIONS,
        }
    }

    /// Validated built-in catalog. A broken table is logged and served as is
    /// so the site still renders.
    pub fn load() -> Self {
        match Self::new(&GROUND_DESTINATIONS, &AIR_DESTINATIONS) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("Built-in destination catalog failed validation: {err}");
                Self::standard()
            }
        }
    }

    pub fn new(
        ground: &'static [GroundDestination],
        air: &'static [AirDestination],
    ) -> Result<Self, CatalogError> {
        if ground.is_empty() {
            return Err(CatalogError::Empty("ground"));
        }
        if air.is_empty() {
            return Err(CatalogError::Empty("air"));
        }

        let mut seen = HashSet::new();
        for name in ground.iter().map(|d| d.name) {
            if !seen.insert(name) {
                return Err(CatalogError::DuplicateName(name));
            }
        }
        seen.clear();
        for name in air.iter().map(|d| d.name) {
            if !seen.insert(name) {
                return Err(CatalogError::DuplicateName(name));
            }
        }

        let custom_count = ground.iter().filter(|d| d.is_custom()).count();
        if custom_count != 1 {
            return Err(CatalogError::CustomCount(custom_count));
        }

        if let Some(bad) = ground
            .iter()
            .find(|d| matches!(d.distance, GroundDistance::Fixed(0)))
        {
            return Err(CatalogError::NonPositive(bad.name));
        }
        if let Some(bad) = air
            .iter()
            .find(|d| !(d.courier_fee > 0.0) || !(d.flight_estimate > 0.0))
        {
            return Err(CatalogError::NonPositive(bad.name));
        }

        Ok(Self { ground, air })
    }

    pub fn list_ground_destinations(&self) -> &'static [GroundDestination] {
        self.ground
    }

    pub fn list_air_destinations(&self) -> &'static [AirDestination] {
        self.air
    }

    pub fn find_ground(&self, name: &str) -> Option<&'static GroundDestination> {
        self.ground.iter().find(|d| d.name == name)
    }

    pub fn find_air(&self, name: &str) -> Option<&'static AirDestination> {
        self.air.iter().find(|d| d.name == name)
    }

    pub fn first_ground(&self) -> &'static GroundDestination {
        &self.ground[0]
    }

    pub fn first_air(&self) -> &'static AirDestination {
        &self.air[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_validation() {
        assert_eq!(
            Catalog::new(&GROUND_DESTINATIONS, &AIR_DESTINATIONS),
            Ok(Catalog::standard())
        );
        assert_eq!(Catalog::load(), Catalog::standard());
    }

    #[test]
    fn listing_keeps_catalog_order() {
        let catalog = Catalog::standard();
        let ground: Vec<_> = catalog
            .list_ground_destinations()
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            ground,
            ["Houston", "Dallas/Fort Worth", "San Antonio", "El Paso", "Custom Route"]
        );
        assert_eq!(catalog.list_air_destinations().len(), 7);
        assert_eq!(catalog.first_air().name, "New York (JFK)");
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::standard();
        let houston = catalog.find_ground("Houston").unwrap();
        assert_eq!(houston.distance, GroundDistance::Fixed(165));

        let lhr = catalog.find_air("London (LHR)").unwrap();
        assert_eq!(lhr.category, AirCategory::International);
        assert_eq!(lhr.transit_time_label, "20-24h");

        assert!(catalog.find_ground("houston").is_none());
        assert!(catalog.find_air("Nonexistent").is_none());
    }

    #[test]
    fn custom_entry_uses_supplied_miles() {
        let custom = Catalog::standard().find_ground(CUSTOM_ROUTE_NAME).unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.resolve_miles(321), 321);

        let el_paso = Catalog::standard().find_ground("El Paso").unwrap();
        assert_eq!(el_paso.resolve_miles(321), 575);
    }

    static NO_CUSTOM: [GroundDestination; 1] = [GroundDestination {
        name: "Houston",
        distance: GroundDistance::Fixed(165),
        coords: Coords::new(29.7604, -95.3698),
    }];

    const JFK: AirDestination = AirDestination {
        name: "New York (JFK)",
        category: AirCategory::Domestic,
        courier_fee: 1500.0,
        flight_estimate: 600.0,
        transit_time_label: "8-10h",
        coords: Coords::new(40.6413, -73.7781),
    };

    static DUPLICATE_AIR: [AirDestination; 2] = [JFK, JFK];

    #[test]
    fn rejects_broken_catalogs() {
        assert_eq!(
            Catalog::new(&NO_CUSTOM, &AIR_DESTINATIONS),
            Err(CatalogError::CustomCount(0))
        );
        assert_eq!(
            Catalog::new(&GROUND_DESTINATIONS, &DUPLICATE_AIR),
            Err(CatalogError::DuplicateName("New York (JFK)"))
        );
        assert_eq!(
            Catalog::new(&[], &AIR_DESTINATIONS),
            Err(CatalogError::Empty("ground"))
        );
    }
}
