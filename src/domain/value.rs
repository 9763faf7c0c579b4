use crate::domain::validation::ValidationError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// ISO 3166-1 alpha-2 destination country code (`countryCode`).
///
/// Invariant: exactly two ASCII letters, stored uppercase. A well-formed code
/// that the rate table does not know is still valid; pricing falls back to
/// the default international rate for it.
pub struct CountryCode(String);

impl CountryCode {
    /// Field name used by the campaign forms (`countryCode`).
    pub const FIELD: &'static str = "countryCode";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Borrow the validated uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
/// Domestic carrier selectable on the campaign forms.
///
/// Accepted by the length/limit functions for compatibility, but none of
/// them change any computed value based on it (see
/// [`character_limit`](crate::meter::character_limit)).
pub enum Carrier {
    Docomo,
    Au,
    Softbank,
    Rakuten,
}

impl Carrier {
    /// Field name used by the campaign forms (`carrier`).
    pub const FIELD: &'static str = "carrier";

    /// The identifier used by the forms for this carrier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docomo => "docomo",
            Self::Au => "au",
            Self::Softbank => "softbank",
            Self::Rakuten => "rakuten",
        }
    }
}

impl std::str::FromStr for Carrier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "docomo" => Self::Docomo,
            "au" => Self::Au,
            "softbank" => Self::Softbank,
            "rakuten" => Self::Rakuten,
            other => {
                return Err(ValidationError::UnknownCarrier {
                    input: other.to_owned(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Options accepted by every length/limit function.
///
/// Both fields are preserved for compatibility with the campaign forms and
/// are deliberately dead: the character ceiling is the unified 660 regardless
/// of carrier or the long-SMS toggle.
pub struct LengthOptions {
    pub enable_long_sms: bool,
    pub carrier: Option<Carrier>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
/// Repository-assigned message id.
pub struct MessageId(u64);

impl MessageId {
    /// Construct an id from its integer representation.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn country_code_uppercases_and_trims() {
        let code = CountryCode::new(" us ").unwrap();
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn country_code_rejects_empty_and_malformed() {
        assert!(matches!(
            CountryCode::new("  "),
            Err(ValidationError::Empty {
                field: CountryCode::FIELD
            })
        ));
        assert!(matches!(
            CountryCode::new("USA"),
            Err(ValidationError::InvalidCountryCode { .. })
        ));
        assert!(matches!(
            CountryCode::new("U1"),
            Err(ValidationError::InvalidCountryCode { .. })
        ));
    }

    #[test]
    fn country_code_accepts_codes_outside_the_rate_table() {
        let code = CountryCode::new("ZZ").unwrap();
        assert_eq!(code.as_str(), "ZZ");
    }

    #[test]
    fn carrier_round_trips_through_str() {
        for carrier in [
            Carrier::Docomo,
            Carrier::Au,
            Carrier::Softbank,
            Carrier::Rakuten,
        ] {
            assert_eq!(Carrier::from_str(carrier.as_str()).unwrap(), carrier);
        }
        assert!(matches!(
            Carrier::from_str("vodafone"),
            Err(ValidationError::UnknownCarrier { .. })
        ));
    }

    #[test]
    fn length_options_default_to_no_carrier() {
        let options = LengthOptions::default();
        assert!(!options.enable_long_sms);
        assert!(options.carrier.is_none());
    }

    #[test]
    fn message_id_preserves_value() {
        assert_eq!(MessageId::new(42).value(), 42);
    }
}
