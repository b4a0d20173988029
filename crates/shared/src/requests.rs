//! Rate and conversion requests.
//!
//! Currency codes are carried as plain strings (ISO 4217 style) and are never
//! validated here. Amounts use `Decimal`, never floats.

use std::any::type_name;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::kind::RequestKind;

/// A request naming a base/quote currency pair.
pub trait RateQuery {
    /// Currency being priced.
    fn base_currency(&self) -> &str;

    /// Currency the price is expressed in.
    fn quote_currency(&self) -> &str;

    /// Date of a historical request, `None` for current ones.
    fn date(&self) -> Option<NaiveDate>;
}

/// A request converting an amount between a currency pair.
pub trait ConversionQuery: RateQuery {
    /// Amount in the base currency.
    fn amount(&self) -> Decimal;
}

/// Current exchange rate for a currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentExchangeRateRequest {
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
}

impl CurrentExchangeRateRequest {
    /// Creates a new current rate request.
    #[must_use]
    pub fn new(base_currency: impl Into<String>, quote_currency: impl Into<String>) -> Self {
        Self {
            base_currency: base_currency.into(),
            quote_currency: quote_currency.into(),
        }
    }
}

impl RateQuery for CurrentExchangeRateRequest {
    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Exchange rate for a currency pair on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalExchangeRateRequest {
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
    /// Date the rate applies to.
    pub date: NaiveDate,
}

impl HistoricalExchangeRateRequest {
    /// Creates a new historical rate request.
    #[must_use]
    pub fn new(
        base_currency: impl Into<String>,
        quote_currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            base_currency: base_currency.into(),
            quote_currency: quote_currency.into(),
            date,
        }
    }
}

impl RateQuery for HistoricalExchangeRateRequest {
    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

/// Conversion of an amount at the current rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConversionRequest {
    /// Amount in the base currency.
    pub amount: Decimal,
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
}

impl CurrentConversionRequest {
    /// Creates a new current conversion request.
    #[must_use]
    pub fn new(
        amount: Decimal,
        base_currency: impl Into<String>,
        quote_currency: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            base_currency: base_currency.into(),
            quote_currency: quote_currency.into(),
        }
    }
}

impl RateQuery for CurrentConversionRequest {
    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

impl ConversionQuery for CurrentConversionRequest {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Conversion of an amount at the rate of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalConversionRequest {
    /// Amount in the base currency.
    pub amount: Decimal,
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
    /// Date the rate applies to.
    pub date: NaiveDate,
}

impl HistoricalConversionRequest {
    /// Creates a new historical conversion request.
    #[must_use]
    pub fn new(
        amount: Decimal,
        base_currency: impl Into<String>,
        quote_currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            base_currency: base_currency.into(),
            quote_currency: quote_currency.into(),
            date,
        }
    }
}

impl RateQuery for HistoricalConversionRequest {
    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl ConversionQuery for HistoricalConversionRequest {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A request value outside the standard vocabulary.
///
/// Only its type name is known, which is what an unsupported-request failure
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherRequest {
    type_name: String,
}

impl OtherRequest {
    /// Stands in for a value of type `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::named(type_name::<T>())
    }

    /// Stands in for a value with the given type name.
    #[must_use]
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Type name of the stood-in value.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Any request a rate service may receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Current exchange rate lookup.
    CurrentExchangeRate(CurrentExchangeRateRequest),
    /// Historical exchange rate lookup.
    HistoricalExchangeRate(HistoricalExchangeRateRequest),
    /// Conversion at the current rate.
    CurrentConversion(CurrentConversionRequest),
    /// Conversion at a historical rate.
    HistoricalConversion(HistoricalConversionRequest),
    /// Anything else.
    Other(OtherRequest),
}

impl Request {
    /// Returns the classification tag of this request.
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::CurrentExchangeRate(_) => RequestKind::CurrentExchangeRate,
            Self::HistoricalExchangeRate(_) => RequestKind::HistoricalExchangeRate,
            Self::CurrentConversion(_) => RequestKind::CurrentConversion,
            Self::HistoricalConversion(_) => RequestKind::HistoricalConversion,
            Self::Other(other) => RequestKind::Other(other.type_name.clone()),
        }
    }
}

impl From<CurrentExchangeRateRequest> for Request {
    fn from(request: CurrentExchangeRateRequest) -> Self {
        Self::CurrentExchangeRate(request)
    }
}

impl From<HistoricalExchangeRateRequest> for Request {
    fn from(request: HistoricalExchangeRateRequest) -> Self {
        Self::HistoricalExchangeRate(request)
    }
}

impl From<CurrentConversionRequest> for Request {
    fn from(request: CurrentConversionRequest) -> Self {
        Self::CurrentConversion(request)
    }
}

impl From<HistoricalConversionRequest> for Request {
    fn from(request: HistoricalConversionRequest) -> Self {
        Self::HistoricalConversion(request)
    }
}

impl From<OtherRequest> for Request {
    fn from(request: OtherRequest) -> Self {
        Self::Other(request)
    }
}
