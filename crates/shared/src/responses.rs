//! Service responses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// A successfully found exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    /// 1 base = `rate` quote.
    pub rate: Decimal,
    /// Date the rate is effective for.
    pub date: NaiveDate,
}

/// A successfully converted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// Amount in the quote currency.
    pub amount: Decimal,
    /// Date of the rate used.
    pub date: NaiveDate,
}

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    error: ServiceError,
}

impl ErrorResponse {
    /// Wraps a failure.
    #[must_use]
    pub fn new(error: impl Into<ServiceError>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The contained failure.
    #[must_use]
    pub const fn error(&self) -> &ServiceError {
        &self.error
    }

    /// Consumes the response, returning the failure.
    #[must_use]
    pub fn into_error(self) -> ServiceError {
        self.error
    }
}

/// Anything a rate service answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Rate lookup succeeded.
    ExchangeRate(ExchangeRateResponse),
    /// Conversion succeeded.
    Conversion(ConversionResponse),
    /// Request failed.
    Error(ErrorResponse),
}

impl Response {
    /// Returns true for `Response::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the error response, if any.
    #[must_use]
    pub const fn as_error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ExchangeRateResponse> for Response {
    fn from(response: ExchangeRateResponse) -> Self {
        Self::ExchangeRate(response)
    }
}

impl From<ConversionResponse> for Response {
    fn from(response: ConversionResponse) -> Self {
        Self::Conversion(response)
    }
}

impl From<ErrorResponse> for Response {
    fn from(response: ErrorResponse) -> Self {
        Self::Error(response)
    }
}
