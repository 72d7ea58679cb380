//! Site settings with environment overrides.

use std::env;

use thiserror::Error;
use tracing::warn;
use url::Url;

pub const BOOKING_URL_VAR: &str = "SPEEDY_BAT_BOOKING_URL";
pub const DISPATCH_PHONE_VAR: &str = "SPEEDY_BAT_DISPATCH_PHONE";

const DEFAULT_BOOKING_URL: &str = "https://script.google.com/macros/s/AKfycbwuYuhre90uLdf6n7VHLGI7jFp2Vrp_iyS1ixGQm87l4uOREtdwV8J7XqPN3TvbruiEyA/exec";
const DEFAULT_DISPATCH_PHONE: &str = "5550192834";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("{var} must be an http(s) URL")]
    UnsupportedScheme { var: &'static str },
    #[error("{var} must contain 10 digits")]
    InvalidPhone { var: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub booking_endpoint: Url,
    /// Ten digit dispatch number, digits only.
    pub dispatch_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_endpoint: Url::parse(DEFAULT_BOOKING_URL)
                .expect("built-in booking URL is valid"),
            dispatch_phone: DEFAULT_DISPATCH_PHONE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads overrides from the process environment, falling back to defaults
    /// when an override is malformed.
    pub fn load() -> Self {
        match Self::from_lookup(|var| env::var(var).ok()) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring environment overrides: {err}");
                Self::default()
            }
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(BOOKING_URL_VAR).unwrap_or_else(|| DEFAULT_BOOKING_URL.to_string());
        let booking_endpoint =
            Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
                var: BOOKING_URL_VAR,
                source,
            })?;
        if !matches!(booking_endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                var: BOOKING_URL_VAR,
            });
        }

        let raw_phone =
            lookup(DISPATCH_PHONE_VAR).unwrap_or_else(|| DEFAULT_DISPATCH_PHONE.to_string());
        let dispatch_phone: String = raw_phone.chars().filter(char::is_ascii_digit).collect();
        if dispatch_phone.len() != 10 {
            return Err(ConfigError::InvalidPhone {
                var: DISPATCH_PHONE_VAR,
            });
        }

        Ok(Self {
            booking_endpoint,
            dispatch_phone,
        })
    }

    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.dispatch_phone)
    }

    /// `(555) 019-2834` style.
    pub fn phone_display(&self) -> String {
        let digits = &self.dispatch_phone;
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert_eq!(config.booking_endpoint.scheme(), "https");
        assert_eq!(config.phone_href(), "tel:5550192834");
        assert_eq!(config.phone_display(), "(555) 019-2834");
        assert_eq!(SiteConfig::from_lookup(|_| None), Ok(config));
    }

    #[test]
    fn environment_overrides_apply() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (BOOKING_URL_VAR, "http://localhost:8080/intake"),
            (DISPATCH_PHONE_VAR, "512-555-0123"),
        ]))
        .unwrap();
        assert_eq!(config.booking_endpoint.as_str(), "http://localhost:8080/intake");
        assert_eq!(config.dispatch_phone, "5125550123");
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(matches!(
            SiteConfig::from_lookup(lookup_from(&[(BOOKING_URL_VAR, "::nope")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            SiteConfig::from_lookup(lookup_from(&[(BOOKING_URL_VAR, "ftp://example.com/")])),
            Err(ConfigError::UnsupportedScheme {
                var: BOOKING_URL_VAR
            })
        );
        assert_eq!(
            SiteConfig::from_lookup(lookup_from(&[(DISPATCH_PHONE_VAR, "555-0199")])),
            Err(ConfigError::InvalidPhone {
                var: DISPATCH_PHONE_VAR
            })
        );
    }
}
