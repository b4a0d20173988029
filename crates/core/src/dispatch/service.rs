//! Dispatch filter service.
//!
//! Answers every request with the failure matching its kind. Useful as the
//! terminal member of a fallback chain and as a stand-in for a real rate
//! provider in tests.

use tracing::debug;

use fxroute_shared::{
    ConversionNotPerformed, DispatchConfig, ErrorResponse, ExchangeRateNotFound, Request,
    RequestKind, RequestNotSupported, Response,
};

use super::allow_list::AllowList;
use crate::service::Service;

/// Classifies requests and answers each with a "not found" style failure.
///
/// Rate lookups get `ExchangeRateNotFound`, conversions get
/// `ConversionNotPerformed`. Requests of an unknown kind, or of a kind the
/// allow-list excludes, get `RequestNotSupported`.
#[derive(Debug, Clone, Default)]
pub struct DispatchFilterService {
    allow_list: AllowList,
}

impl DispatchFilterService {
    /// Creates a filter classifying only the given kinds.
    ///
    /// Passing no kinds yields an unrestricted filter.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = RequestKind>) -> Self {
        Self {
            allow_list: AllowList::new(kinds),
        }
    }

    /// Creates a filter classifying all standard kinds.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Creates a filter from configuration.
    #[must_use]
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.allowed_requests.iter().cloned())
    }

    /// The configured allow-list.
    #[must_use]
    pub const fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Builds the failure for `request`.
    ///
    /// The allow-list is checked first: an excluded request is unsupported
    /// even if its kind has a domain-specific failure.
    #[must_use]
    pub fn reject(&self, request: &Request) -> ErrorResponse {
        let kind = request.kind();

        if !self.allow_list.permits(&kind) {
            debug!(kind = %kind, "request kind excluded by allow-list");
            return ErrorResponse::new(RequestNotSupported::from_kind(kind));
        }

        match request {
            Request::CurrentExchangeRate(rate) => {
                ErrorResponse::new(ExchangeRateNotFound::from_request(rate))
            }
            Request::HistoricalExchangeRate(rate) => {
                ErrorResponse::new(ExchangeRateNotFound::from_request(rate))
            }
            Request::CurrentConversion(conversion) => {
                ErrorResponse::new(ConversionNotPerformed::from_request(conversion))
            }
            Request::HistoricalConversion(conversion) => {
                ErrorResponse::new(ConversionNotPerformed::from_request(conversion))
            }
            Request::Other(_) => {
                debug!(kind = %kind, "unsupported request kind");
                ErrorResponse::new(RequestNotSupported::from_kind(kind))
            }
        }
    }
}

impl Service for DispatchFilterService {
    fn send(&self, request: &Request) -> Response {
        self.reject(request).into()
    }

    fn supports(&self, request: &Request) -> bool {
        let kind = request.kind();
        self.allow_list.permits(&kind) && kind.is_standard()
    }
}
