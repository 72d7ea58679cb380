//! Estimator session state and the transitions that mutate it.
//!
//! Every transition recomputes the [`QuoteSnapshot`] before it returns, so a
//! stale quote is never visible to whoever reads the estimator next.

use std::fmt;

use tracing::debug;

use super::catalog::{AirDestination, Catalog, Coords, GroundDestination};
use super::pricing::{air_quote, ground_quote, AddOns, AirQuote, GroundQuote};

pub const CUSTOM_MILES_MIN: u32 = 10;
pub const CUSTOM_MILES_MAX: u32 = 800;
pub const CUSTOM_MILES_DEFAULT: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShippingMode {
    #[default]
    Ground,
    Air,
}

impl ShippingMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ground => "Expedited Ground",
            Self::Air => "Air Hand Carry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOn {
    Heavy,
    Refrigerated,
    Hazmat,
    AfterHours,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [
        AddOn::Heavy,
        AddOn::Refrigerated,
        AddOn::Hazmat,
        AddOn::AfterHours,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Heavy => "Heavy (100lb+)",
            Self::Refrigerated => "Refrigerated",
            Self::Hazmat => "Hazmat / DG",
            Self::AfterHours => "After Hours",
        }
    }

    pub fn is_set(&self, add_ons: &AddOns) -> bool {
        match self {
            Self::Heavy => add_ons.heavy,
            Self::Refrigerated => add_ons.refrigerated,
            Self::Hazmat => add_ons.hazmat,
            Self::AfterHours => add_ons.after_hours,
        }
    }

    fn flag_mut<'a>(&self, add_ons: &'a mut AddOns) -> &'a mut bool {
        match self {
            Self::Heavy => &mut add_ons.heavy,
            Self::Refrigerated => &mut add_ons.refrigerated,
            Self::Hazmat => &mut add_ons.hazmat,
            Self::AfterHours => &mut add_ons.after_hours,
        }
    }
}

/// The mutable part of an estimator session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatorSelection {
    pub mode: ShippingMode,
    pub ground_destination: &'static GroundDestination,
    /// Only consulted while the custom ground entry is selected.
    pub custom_miles: u32,
    pub add_ons: AddOns,
    pub air_destination: &'static AirDestination,
}

impl EstimatorSelection {
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            mode: ShippingMode::default(),
            ground_destination: catalog.first_ground(),
            custom_miles: CUSTOM_MILES_DEFAULT,
            add_ons: AddOns::default(),
            air_destination: catalog.first_air(),
        }
    }

    pub fn effective_miles(&self) -> u32 {
        self.ground_destination.resolve_miles(self.custom_miles)
    }

    /// Destination coordinates for the active mode.
    pub fn destination_coords(&self) -> Coords {
        match self.mode {
            ShippingMode::Ground => self.ground_destination.coords,
            ShippingMode::Air => self.air_destination.coords,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuoteBreakdown {
    Ground(GroundQuote),
    Air(AirQuote),
}

/// Price and transit projection of an [`EstimatorSelection`].
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSnapshot {
    pub mode: ShippingMode,
    /// Present in ground mode only.
    pub effective_miles: Option<u32>,
    pub total_cost: f64,
    pub eta_label: String,
    pub breakdown: QuoteBreakdown,
}

impl QuoteSnapshot {
    pub fn compute(selection: &EstimatorSelection) -> Self {
        match selection.mode {
            ShippingMode::Ground => {
                let quote = ground_quote(selection.effective_miles(), selection.add_ons);
                Self {
                    mode: ShippingMode::Ground,
                    effective_miles: Some(quote.miles),
                    total_cost: quote.total,
                    eta_label: quote.eta.to_string(),
                    breakdown: QuoteBreakdown::Ground(quote),
                }
            }
            ShippingMode::Air => {
                let quote = air_quote(selection.air_destination);
                Self {
                    mode: ShippingMode::Air,
                    effective_miles: None,
                    total_cost: quote.total,
                    eta_label: quote.transit_time_label.to_string(),
                    breakdown: QuoteBreakdown::Air(quote),
                }
            }
        }
    }
}

/// A discrete input event accepted by the estimator.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    SetMode(ShippingMode),
    SelectGroundDestination(String),
    SetCustomMiles(i64),
    Toggle(AddOn),
    SelectAirDestination(String),
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetMode(mode) => write!(f, "set mode {mode:?}"),
            Self::SelectGroundDestination(name) => write!(f, "select ground {name}"),
            Self::SetCustomMiles(miles) => write!(f, "set custom miles {miles}"),
            Self::Toggle(add_on) => write!(f, "toggle {add_on:?}"),
            Self::SelectAirDestination(name) => write!(f, "select air {name}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Estimator {
    catalog: Catalog,
    selection: EstimatorSelection,
    snapshot: QuoteSnapshot,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl Estimator {
    pub fn new(catalog: Catalog) -> Self {
        let selection = EstimatorSelection::initial(&catalog);
        let snapshot = QuoteSnapshot::compute(&selection);
        Self {
            catalog,
            selection,
            snapshot,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &EstimatorSelection {
        &self.selection
    }

    pub fn snapshot(&self) -> &QuoteSnapshot {
        &self.snapshot
    }

    pub fn set_mode(&mut self, mode: ShippingMode) -> &QuoteSnapshot {
        self.apply(Transition::SetMode(mode))
    }

    pub fn select_ground_destination(&mut self, name: &str) -> &QuoteSnapshot {
        self.apply(Transition::SelectGroundDestination(name.to_string()))
    }

    pub fn set_custom_miles(&mut self, miles: i64) -> &QuoteSnapshot {
        self.apply(Transition::SetCustomMiles(miles))
    }

    /// Flips one shipment flag; dispatches to the per-flag transitions.
    pub fn toggle(&mut self, add_on: AddOn) -> &QuoteSnapshot {
        match add_on {
            AddOn::Heavy => self.toggle_heavy(),
            AddOn::Refrigerated => self.toggle_refrigerated(),
            AddOn::Hazmat => self.toggle_hazmat(),
            AddOn::AfterHours => self.toggle_after_hours(),
        }
    }

    pub fn toggle_heavy(&mut self) -> &QuoteSnapshot {
        self.apply(Transition::Toggle(AddOn::Heavy))
    }

    pub fn toggle_refrigerated(&mut self) -> &QuoteSnapshot {
        self.apply(Transition::Toggle(AddOn::Refrigerated))
    }

    pub fn toggle_hazmat(&mut self) -> &QuoteSnapshot {
        self.apply(Transition::Toggle(AddOn::Hazmat))
    }

    pub fn toggle_after_hours(&mut self) -> &QuoteSnapshot {
        self.apply(Transition::Toggle(AddOn::AfterHours))
    }

    pub fn select_air_destination(&mut self, name: &str) -> &QuoteSnapshot {
        self.apply(Transition::SelectAirDestination(name.to_string()))
    }

    /// Applies one input event and recomputes the quote before returning it.
    fn apply(&mut self, transition: Transition) -> &QuoteSnapshot {
        match &transition {
            Transition::SetMode(mode) => self.selection.mode = *mode,
            Transition::SelectGroundDestination(name) => {
                match self.catalog.find_ground(name) {
                    Some(destination) => self.selection.ground_destination = destination,
                    None => debug!("ignoring unknown ground destination {name:?}"),
                }
            }
            Transition::SetCustomMiles(miles) => {
                self.selection.custom_miles = clamp_custom_miles(*miles);
            }
            Transition::Toggle(add_on) => {
                let flag = add_on.flag_mut(&mut self.selection.add_ons);
                *flag = !*flag;
            }
            Transition::SelectAirDestination(name) => match self.catalog.find_air(name) {
                Some(destination) => self.selection.air_destination = destination,
                None => debug!("ignoring unknown air destination {name:?}"),
            },
        }

        self.snapshot = QuoteSnapshot::compute(&self.selection);
        debug!(
            "estimator {transition}: {:?} total {:.2}, eta {}",
            self.snapshot.mode, self.snapshot.total_cost, self.snapshot.eta_label
        );

        &self.snapshot
    }
}

pub fn clamp_custom_miles(miles: i64) -> u32 {
    miles.clamp(CUSTOM_MILES_MIN as i64, CUSTOM_MILES_MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CUSTOM_ROUTE_NAME;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn starts_in_ground_mode_with_first_entries() {
        let estimator = Estimator::default();
        let selection = estimator.selection();
        assert_eq!(selection.mode, ShippingMode::Ground);
        assert_eq!(selection.ground_destination.name, "Houston");
        assert_eq!(selection.air_destination.name, "New York (JFK)");
        assert_eq!(selection.custom_miles, CUSTOM_MILES_DEFAULT);
        assert_eq!(selection.add_ons, AddOns::default());

        let snapshot = estimator.snapshot();
        assert_eq!(snapshot.effective_miles, Some(165));
        assert!((snapshot.total_cost - 983.5).abs() < EPSILON);
        assert_eq!(snapshot.eta_label, "2h 32m");
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut estimator = Estimator::default();
        estimator.toggle_hazmat();
        let once = estimator.set_mode(ShippingMode::Ground).clone();
        let twice = estimator.set_mode(ShippingMode::Ground).clone();
        assert_eq!(once, twice);
    }

    #[test]
    fn reselecting_a_destination_restores_the_snapshot() {
        let mut estimator = Estimator::default();
        estimator.toggle_refrigerated();
        let first = estimator.select_ground_destination("San Antonio").clone();
        estimator.select_ground_destination("El Paso");
        let again = estimator.select_ground_destination("San Antonio").clone();
        assert_eq!(first, again);
    }

    #[test]
    fn custom_miles_are_clamped() {
        let mut estimator = Estimator::default();
        estimator.select_ground_destination(CUSTOM_ROUTE_NAME);

        assert_eq!(estimator.set_custom_miles(5).effective_miles, Some(10));
        assert_eq!(estimator.set_custom_miles(9000).effective_miles, Some(800));
        assert_eq!(estimator.set_custom_miles(-3).effective_miles, Some(10));
        assert_eq!(estimator.set_custom_miles(250).effective_miles, Some(250));
    }

    #[test]
    fn custom_miles_only_apply_to_custom_route() {
        let mut estimator = Estimator::default();
        estimator.set_custom_miles(400);
        assert_eq!(estimator.snapshot().effective_miles, Some(165));

        estimator.select_ground_destination(CUSTOM_ROUTE_NAME);
        assert_eq!(estimator.snapshot().effective_miles, Some(400));
    }

    #[test]
    fn every_add_on_on_houston() {
        let mut estimator = Estimator::default();
        estimator.toggle_heavy();
        estimator.toggle_refrigerated();
        estimator.toggle_hazmat();
        let snapshot = estimator.toggle_after_hours();
        assert!((snapshot.total_cost - 1629.375).abs() < EPSILON);
    }

    #[test]
    fn toggling_twice_clears_the_flag() {
        let mut estimator = Estimator::default();
        let before = estimator.snapshot().clone();
        estimator.toggle(AddOn::Heavy);
        assert!(estimator.selection().add_ons.heavy);
        let after = estimator.toggle(AddOn::Heavy).clone();
        assert_eq!(before, after);
    }

    #[test]
    fn air_mode_quotes_london() {
        let mut estimator = Estimator::default();
        estimator.set_mode(ShippingMode::Air);
        let snapshot = estimator.select_air_destination("London (LHR)");
        assert_eq!(snapshot.mode, ShippingMode::Air);
        assert_eq!(snapshot.effective_miles, None);
        assert_eq!(snapshot.total_cost, 6240.0);
        assert_eq!(snapshot.eta_label, "20-24h");
    }

    #[test]
    fn add_ons_do_not_change_air_quotes() {
        let mut estimator = Estimator::default();
        estimator.set_mode(ShippingMode::Air);
        let before = estimator.snapshot().clone();
        estimator.toggle_after_hours();
        estimator.toggle_hazmat();
        assert_eq!(estimator.snapshot(), &before);
        assert!(estimator.selection().add_ons.after_hours);
    }

    #[test]
    fn mode_switch_preserves_ground_state() {
        let mut estimator = Estimator::default();
        estimator.select_ground_destination(CUSTOM_ROUTE_NAME);
        estimator.set_custom_miles(333);
        estimator.toggle_hazmat();
        let ground = estimator.snapshot().clone();

        estimator.set_mode(ShippingMode::Air);
        estimator.select_air_destination("Tokyo (HND)");
        let back = estimator.set_mode(ShippingMode::Ground).clone();

        assert_eq!(ground, back);
        assert_eq!(estimator.selection().air_destination.name, "Tokyo (HND)");
    }

    #[test]
    fn unknown_names_leave_selection_untouched() {
        let mut estimator = Estimator::default();
        estimator.set_mode(ShippingMode::Air);
        let selection = *estimator.selection();
        let snapshot = estimator.snapshot().clone();

        estimator.select_air_destination("Nonexistent");
        estimator.select_ground_destination("Nowhere, TX");

        assert_eq!(estimator.selection(), &selection);
        assert_eq!(estimator.snapshot(), &snapshot);
    }

    #[test]
    fn snapshot_is_fresh_after_every_transition() {
        let mut estimator = Estimator::default();
        let transitions = [
            Transition::Toggle(AddOn::Heavy),
            Transition::SelectAirDestination("Nonexistent".to_string()),
            Transition::SetMode(ShippingMode::Air),
            Transition::SetMode(ShippingMode::Air),
            Transition::SelectAirDestination("Dubai (DXB)".to_string()),
            Transition::SetMode(ShippingMode::Ground),
            Transition::SelectGroundDestination(CUSTOM_ROUTE_NAME.to_string()),
            Transition::SetCustomMiles(9000),
        ];

        for transition in transitions {
            let label = transition.to_string();
            let returned = estimator.apply(transition).clone();
            assert_eq!(returned, QuoteSnapshot::compute(estimator.selection()), "{label}");
            assert_eq!(&returned, estimator.snapshot());
        }
        assert_eq!(estimator.snapshot().effective_miles, Some(CUSTOM_MILES_MAX));
    }

    #[test]
    fn toggle_matches_the_named_flag_transitions() {
        for add_on in AddOn::ALL {
            let mut by_enum = Estimator::default();
            by_enum.toggle(add_on);

            let mut by_name = Estimator::default();
            match add_on {
                AddOn::Heavy => by_name.toggle_heavy(),
                AddOn::Refrigerated => by_name.toggle_refrigerated(),
                AddOn::Hazmat => by_name.toggle_hazmat(),
                AddOn::AfterHours => by_name.toggle_after_hours(),
            };

            assert_eq!(by_enum, by_name);
            assert!(add_on.is_set(&by_enum.selection().add_ons));
        }
    }
}
