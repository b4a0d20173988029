//! Request kinds used for classification and allow-listing.

use std::any::type_name;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::requests::{
    CurrentConversionRequest, CurrentExchangeRateRequest, HistoricalConversionRequest,
    HistoricalExchangeRateRequest,
};

/// Classification tag of a request.
///
/// The four standard kinds map one-to-one onto the request structs. Anything
/// else is `Other`, identified only by its name. An `Other` kind can be placed
/// in an allow-list but never classifies as a rate or conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RequestKind {
    /// Current exchange rate lookup.
    CurrentExchangeRate,
    /// Exchange rate lookup for a past date.
    HistoricalExchangeRate,
    /// Conversion at the current rate.
    CurrentConversion,
    /// Conversion at the rate of a past date.
    HistoricalConversion,
    /// Any kind outside the standard vocabulary.
    Other(String),
}

impl RequestKind {
    /// The four kinds a rate service can answer.
    pub const STANDARD: [Self; 4] = [
        Self::CurrentExchangeRate,
        Self::HistoricalExchangeRate,
        Self::CurrentConversion,
        Self::HistoricalConversion,
    ];

    /// Returns the kind of values of type `T`.
    ///
    /// Standard request structs resolve to their standard kind, every other
    /// type to `Other` carrying its type name.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::from_type_name(type_name::<T>())
    }

    /// Fully-qualified type name of the request this kind stands for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CurrentExchangeRate => type_name::<CurrentExchangeRateRequest>(),
            Self::HistoricalExchangeRate => type_name::<HistoricalExchangeRateRequest>(),
            Self::CurrentConversion => type_name::<CurrentConversionRequest>(),
            Self::HistoricalConversion => type_name::<HistoricalConversionRequest>(),
            Self::Other(name) => name,
        }
    }

    /// Returns true for the four standard kinds.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns true for current and historical rate lookups.
    #[must_use]
    pub const fn is_exchange_rate(&self) -> bool {
        matches!(self, Self::CurrentExchangeRate | Self::HistoricalExchangeRate)
    }

    /// Returns true for current and historical conversions.
    #[must_use]
    pub const fn is_conversion(&self) -> bool {
        matches!(self, Self::CurrentConversion | Self::HistoricalConversion)
    }

    fn from_type_name(name: &str) -> Self {
        Self::STANDARD
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses configuration names.
///
/// Accepts the snake_case short name (`current_exchange_rate`), the struct
/// name (`CurrentExchangeRateRequest`) or the fully-qualified type name.
/// Unknown names become `Other` and are kept as-is.
impl FromStr for RequestKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let kind = match s {
            "current_exchange_rate" | "CurrentExchangeRateRequest" => Self::CurrentExchangeRate,
            "historical_exchange_rate" | "HistoricalExchangeRateRequest" => {
                Self::HistoricalExchangeRate
            }
            "current_conversion" | "CurrentConversionRequest" => Self::CurrentConversion,
            "historical_conversion" | "HistoricalConversionRequest" => Self::HistoricalConversion,
            other => Self::from_type_name(other),
        };
        Ok(kind)
    }
}

impl From<String> for RequestKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}
