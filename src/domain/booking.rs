//! Courier booking request captured by the booking form.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};
use uuid::Uuid;

use super::estimator::ShippingMode;


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    #[default]
    Ground,
    Air,
}

impl ServiceMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ground => "Expedited Ground (SUV/Van)",
            Self::Air => "Air Hand Carry",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Air => "air",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "ground" => Some(Self::Ground),
            "air" => Some(Self::Air),
            _ => None,
        }
    }
}

impl From<ShippingMode> for ServiceMode {
    fn from(mode: ShippingMode) -> Self {
        match mode {
            ShippingMode::Ground => Self::Ground,
            ShippingMode::Air => Self::Air,
        }
    }
}

/// Form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub service_mode: ServiceMode,
    pub pickup_time: String,
    pub delivery_time: String,
    pub urgent: bool,
    pub pickup_address: String,
    pub delivery_address: String,
    pub item_description: String,
    pub weight: String,
    pub dimensions: String,
    pub notes: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
    #[error("{0} is not a valid date and time")]
    InvalidTime(&'static str),
    #[error("delivery time is before pickup time")]
    DeliveryBeforePickup,
}

/// Validated payload ready for submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub request_id: Uuid,
    pub submitted_at: String,
    #[serde(flatten)]
    pub fields: BookingDraft,
}

impl BookingDraft {
    pub fn validate(&self) -> Result<(), BookingValidationError> {
        let required = [
            ("Full name", &self.full_name),
            ("Phone number", &self.phone),
            ("Email address", &self.email),
            ("Pickup address", &self.pickup_address),
            ("Delivery address", &self.delivery_address),
            ("Item description", &self.item_description),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BookingValidationError::Missing(*label));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(BookingValidationError::InvalidEmail);
        }

        let pickup = parse_optional_time("Pickup time", &self.pickup_time)?;
        let delivery = parse_optional_time("Delivery time", &self.delivery_time)?;
        if let (Some(pickup), Some(delivery)) = (pickup, delivery) {
            if delivery < pickup {
                return Err(BookingValidationError::DeliveryBeforePickup);
            }
        }

        Ok(())
    }

    /// Validates the draft and stamps it with a fresh id and submission time.
    pub fn into_request(self) -> Result<BookingRequest, BookingValidationError> {
        self.validate()?;
        let submitted_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Ok(BookingRequest {
            request_id: Uuid::new_v4(),
            submitted_at,
            fields: self,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn parse_optional_time(
    label: &'static str,
    value: &str,
) -> Result<Option<PrimitiveDateTime>, BookingValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // Layout produced by `<input type="datetime-local">`.
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(trimmed, format)
        .map(Some)
        .map_err(|_| BookingValidationError::InvalidTime(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingDraft {
        BookingDraft {
            full_name: "John Doe".into(),
            phone: "(512) 555-0123".into(),
            email: "dispatch@company.com".into(),
            pickup_address: "100 Congress Ave, Austin, 78701".into(),
            delivery_address: "901 Bagby St, Houston, 77002".into(),
            item_description: "Court filing".into(),
            ..BookingDraft::default()
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_field_is_reported() {
        let draft = BookingDraft {
            item_description: "   ".into(),
            ..filled()
        };
        assert_eq!(
            draft.validate(),
            Err(BookingValidationError::Missing("Item description"))
        );
        assert_eq!(
            BookingDraft::default().validate(),
            Err(BookingValidationError::Missing("Full name"))
        );
    }

    #[test]
    fn email_needs_both_sides() {
        for email in ["dispatch", "@company.com", "dispatch@", "a@b@c"] {
            let draft = BookingDraft {
                email: email.into(),
                ..filled()
            };
            assert_eq!(draft.validate(), Err(BookingValidationError::InvalidEmail));
        }
    }

    #[test]
    fn times_are_checked_when_present() {
        let draft = BookingDraft {
            pickup_time: "2026-10-17T13:30".into(),
            delivery_time: "2026-10-17T16:15".into(),
            ..filled()
        };
        assert_eq!(draft.validate(), Ok(()));

        let reversed = BookingDraft {
            pickup_time: "2026-10-17T16:15".into(),
            delivery_time: "2026-10-17T13:30".into(),
            ..filled()
        };
        assert_eq!(
            reversed.validate(),
            Err(BookingValidationError::DeliveryBeforePickup)
        );

        let garbled = BookingDraft {
            pickup_time: "tomorrow-ish".into(),
            ..filled()
        };
        assert_eq!(
            garbled.validate(),
            Err(BookingValidationError::InvalidTime("Pickup time"))
        );
    }

    #[test]
    fn request_serializes_to_flat_field_map() {
        let request = BookingDraft {
            service_mode: ServiceMode::Air,
            urgent: true,
            ..filled()
        }
        .into_request()
        .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["fullName"], "John Doe");
        assert_eq!(object["serviceMode"], "air");
        assert_eq!(object["urgent"], true);
        assert_eq!(object["itemDescription"], "Court filing");
        assert_eq!(object["requestId"], request.request_id.to_string());
        assert!(object["submittedAt"].as_str().unwrap().ends_with('Z'));
        assert!(object.values().all(|value| !value.is_object()));
    }

    #[test]
    fn service_mode_round_trips_through_form_values() {
        for mode in [ServiceMode::Ground, ServiceMode::Air] {
            assert_eq!(ServiceMode::from_value(mode.value()), Some(mode));
        }
        assert_eq!(ServiceMode::from_value("sea"), None);
        assert_eq!(ServiceMode::from(ShippingMode::Air), ServiceMode::Air);
    }
}
