//! Ground and air pricing policies.
//!
//! Costs are kept unrounded here; currency rounding happens when rendering.

use std::fmt;

use super::catalog::{AirCategory, AirDestination};

pub const BASE_FEE: f64 = 175.0;
pub const RATE_PER_MILE: f64 = 2.45;
pub const ROUND_TRIP_MULTIPLIER: f64 = 2.0;

/// Liftgate / heavy handling.
pub const HEAVY_SURCHARGE: f64 = 75.0;
/// Temperature controlled vehicle.
pub const REFRIGERATED_SURCHARGE: f64 = 150.0;
/// Dangerous goods handling.
pub const HAZMAT_SURCHARGE: f64 = 95.0;
/// After hours / weekend multiplier, applied after every additive surcharge.
pub const AFTER_HOURS_MULTIPLIER: f64 = 1.25;

/// Average highway speed used for drive time.
pub const AVERAGE_SPEED_MPH: f64 = 65.0;

/// Ground-only shipment add-ons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddOns {
    pub heavy: bool,
    pub refrigerated: bool,
    pub hazmat: bool,
    pub after_hours: bool,
}

impl AddOns {
    pub fn any(&self) -> bool {
        self.heavy || self.refrigerated || self.hazmat || self.after_hours
    }
}

/// Drive time derived from one-way miles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitEstimate {
    pub hours: u32,
    pub minutes: u32,
}

impl TransitEstimate {
    pub fn from_miles(miles: u32) -> Self {
        let exact = miles as f64 / AVERAGE_SPEED_MPH;
        let hours = exact.floor();
        let minutes = ((exact - hours) * 60.0).round();
        Self {
            hours: hours as u32,
            minutes: minutes as u32,
        }
    }
}

impl fmt::Display for TransitEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundQuote {
    /// One-way miles the quote was computed for.
    pub miles: u32,
    pub base_fee: f64,
    pub mileage_charge: f64,
    /// Everything added on top of base fee and mileage, after-hours included.
    pub surcharges: f64,
    pub total: f64,
    pub eta: TransitEstimate,
}

/// Round-trip mileage pricing with add-on surcharges.
pub fn ground_quote(miles: u32, add_ons: AddOns) -> GroundQuote {
    let mileage_charge = miles as f64 * ROUND_TRIP_MULTIPLIER * RATE_PER_MILE;
    let mut total = mileage_charge + BASE_FEE;

    if add_ons.heavy {
        total += HEAVY_SURCHARGE;
    }
    if add_ons.refrigerated {
        total += REFRIGERATED_SURCHARGE;
    }
    if add_ons.hazmat {
        total += HAZMAT_SURCHARGE;
    }

    if add_ons.after_hours {
        total *= AFTER_HOURS_MULTIPLIER;
    }

    GroundQuote {
        miles,
        base_fee: BASE_FEE,
        mileage_charge,
        surcharges: total - (mileage_charge + BASE_FEE),
        total,
        // ETA is one-way while cost is round trip.
        eta: TransitEstimate::from_miles(miles),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AirQuote {
    pub destination: &'static str,
    pub category: AirCategory,
    pub courier_fee: f64,
    pub flight_estimate: f64,
    pub total: f64,
    pub transit_time_label: &'static str,
}

/// Flat courier day rate plus airfare; add-ons never apply.
pub fn air_quote(destination: &AirDestination) -> AirQuote {
    AirQuote {
        destination: destination.name,
        category: destination.category,
        courier_fee: destination.courier_fee,
        flight_estimate: destination.flight_estimate,
        total: destination.courier_fee + destination.flight_estimate,
        transit_time_label: destination.transit_time_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    const EPSILON: f64 = 1e-9;

    fn all_add_ons() -> Vec<AddOns> {
        (0..16u8)
            .map(|bits| AddOns {
                heavy: bits & 1 != 0,
                refrigerated: bits & 2 != 0,
                hazmat: bits & 4 != 0,
                after_hours: bits & 8 != 0,
            })
            .collect()
    }

    #[test]
    fn houston_without_add_ons() {
        let quote = ground_quote(165, AddOns::default());
        assert!((quote.total - 983.5).abs() < EPSILON);
        assert!(quote.surcharges.abs() < EPSILON);
        assert_eq!(quote.eta.to_string(), "2h 32m");
    }

    #[test]
    fn houston_with_every_add_on() {
        let add_ons = AddOns {
            heavy: true,
            refrigerated: true,
            hazmat: true,
            after_hours: true,
        };
        let quote = ground_quote(165, add_ons);
        assert!((quote.total - 1629.375).abs() < EPSILON);
        assert!((quote.surcharges - (1629.375 - 983.5)).abs() < EPSILON);
    }

    #[test]
    fn after_hours_multiplies_additive_surcharges_too() {
        let add_ons = AddOns {
            hazmat: true,
            after_hours: true,
            ..AddOns::default()
        };
        let quote = ground_quote(80, add_ons);
        let expected = (80.0 * 2.0 * 2.45 + 175.0 + 95.0) * 1.25;
        assert!((quote.total - expected).abs() < EPSILON);
    }

    #[test]
    fn cost_never_drops_when_add_ons_are_added() {
        for destination in Catalog::standard().list_ground_destinations() {
            let miles = destination.resolve_miles(100);
            for base in all_add_ons() {
                let cost = ground_quote(miles, base).total;
                for extra in all_add_ons() {
                    let combined = AddOns {
                        heavy: base.heavy || extra.heavy,
                        refrigerated: base.refrigerated || extra.refrigerated,
                        hazmat: base.hazmat || extra.hazmat,
                        after_hours: base.after_hours || extra.after_hours,
                    };
                    assert!(ground_quote(miles, combined).total >= cost - EPSILON);
                }
            }
        }
    }

    #[test]
    fn pre_multiplier_cost_is_linear_in_miles() {
        let add_ons = AddOns {
            heavy: true,
            ..AddOns::default()
        };
        let at_100 = ground_quote(100, add_ons).total;
        let at_200 = ground_quote(200, add_ons).total;
        let at_300 = ground_quote(300, add_ons).total;
        assert!(((at_200 - at_100) - (at_300 - at_200)).abs() < EPSILON);
        assert!(((at_200 - at_100) - 100.0 * 2.0 * 2.45).abs() < EPSILON);
    }

    #[test]
    fn eta_uses_one_way_miles() {
        assert_eq!(TransitEstimate::from_miles(65).to_string(), "1h 0m");
        assert_eq!(TransitEstimate::from_miles(575).to_string(), "8h 51m");
        assert_eq!(TransitEstimate::from_miles(10).to_string(), "0h 9m");
        assert_eq!(TransitEstimate::from_miles(800).to_string(), "12h 18m");
    }

    #[test]
    fn london_air_quote() {
        let lhr = Catalog::standard().find_air("London (LHR)").unwrap();
        let quote = air_quote(lhr);
        assert_eq!(quote.total, 6240.0);
        assert_eq!(quote.transit_time_label, "20-24h");
        assert_eq!(quote.category, AirCategory::International);
    }

    #[test]
    fn any_add_on_means_a_surcharge() {
        assert!(!AddOns::default().any());
        assert_eq!(ground_quote(100, AddOns::default()).surcharges, 0.0);
        let single = |flag: fn(&mut AddOns)| {
            let mut add_ons = AddOns::default();
            flag(&mut add_ons);
            add_ons
        };
        for add_ons in [
            single(|a| a.heavy = true),
            single(|a| a.refrigerated = true),
            single(|a| a.hazmat = true),
            single(|a| a.after_hours = true),
        ] {
            assert!(add_ons.any());
            assert!(ground_quote(100, add_ons).surcharges > 0.0);
        }
    }
}
