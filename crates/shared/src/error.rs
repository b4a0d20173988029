//! Failures a rate service reports.
//!
//! These are returned as data inside an `ErrorResponse`, not raised.

use thiserror::Error;

use crate::kind::RequestKind;
use crate::requests::{ConversionQuery, RateQuery, Request};

/// No exchange rate is available for the requested pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExchangeRateNotFound {
    message: String,
}

impl ExchangeRateNotFound {
    /// Builds the failure for a rate lookup.
    #[must_use]
    pub fn from_request(request: &impl RateQuery) -> Self {
        let base = request.base_currency();
        let quote = request.quote_currency();
        let message = match request.date() {
            Some(date) => format!("Unable to find exchange rate for {base}/{quote} on {date}"),
            None => format!("Unable to find exchange rate for {base}/{quote}"),
        };
        Self { message }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A conversion could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConversionNotPerformed {
    message: String,
}

impl ConversionNotPerformed {
    /// Builds the failure for a conversion.
    #[must_use]
    pub fn from_request(request: &impl ConversionQuery) -> Self {
        let amount = request.amount();
        let base = request.base_currency();
        let quote = request.quote_currency();
        let message = match request.date() {
            Some(date) => format!("Unable to convert {amount} {base} to {quote} on {date}"),
            None => format!("Unable to convert {amount} {base} to {quote}"),
        };
        Self { message }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The service does not handle this kind of request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported request type: \"{kind}\"")]
pub struct RequestNotSupported {
    kind: RequestKind,
}

impl RequestNotSupported {
    /// Builds the failure for any request.
    #[must_use]
    pub fn from_request(request: &Request) -> Self {
        Self::from_kind(request.kind())
    }

    /// Builds the failure for a request kind.
    #[must_use]
    pub const fn from_kind(kind: RequestKind) -> Self {
        Self { kind }
    }

    /// Kind of the rejected request.
    #[must_use]
    pub const fn kind(&self) -> &RequestKind {
        &self.kind
    }
}

/// Any failure carried by an `ErrorResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Rate lookup failed.
    #[error(transparent)]
    ExchangeRateNotFound(#[from] ExchangeRateNotFound),

    /// Conversion failed.
    #[error(transparent)]
    ConversionNotPerformed(#[from] ConversionNotPerformed),

    /// Request kind not handled.
    #[error(transparent)]
    RequestNotSupported(#[from] RequestNotSupported),
}

impl ServiceError {
    /// Returns a stable machine-readable code for this failure.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ExchangeRateNotFound(_) => "EXCHANGE_RATE_NOT_FOUND",
            Self::ConversionNotPerformed(_) => "CONVERSION_NOT_PERFORMED",
            Self::RequestNotSupported(_) => "REQUEST_NOT_SUPPORTED",
        }
    }

    /// Returns true if the failure means "not my kind of request" rather
    /// than "known request, no answer".
    #[must_use]
    pub const fn is_not_supported(&self) -> bool {
        matches!(self, Self::RequestNotSupported(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
