//! Property-based tests for the dispatch filter.
//!
//! - Totality: every request is answered with an error response
//! - Classification under an unrestricted allow-list
//! - Allow-list precedence over classification
//! - Inertness of kinds that match no request
//! - Agreement between `supports` and `send`

use proptest::prelude::*;

use fxroute_shared::{Request, RequestKind, Response, ServiceError};

use super::service::DispatchFilterService;
use crate::service::Service;
use crate::strategies::{allow_list, inert_kind, request};

fn error_of(service: &DispatchFilterService, request: &Request) -> Option<ServiceError> {
    match service.send(request) {
        Response::Error(response) => Some(response.into_error()),
        _ => None,
    }
}

fn is_domain_failure(error: &ServiceError) -> bool {
    matches!(
        error,
        ServiceError::ExchangeRateNotFound(_) | ServiceError::ConversionNotPerformed(_)
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every request, under every allow-list, yields an error response.
    #[test]
    fn prop_send_is_total(kinds in allow_list(), request in request()) {
        let service = DispatchFilterService::new(kinds);
        prop_assert!(service.send(&request).is_error());
    }

    /// With no allow-list, rate requests are not found, conversions are not
    /// performed, and everything else is unsupported.
    #[test]
    fn prop_unrestricted_classification(request in request()) {
        let service = DispatchFilterService::unrestricted();
        let error = error_of(&service, &request).unwrap();
        let kind = request.kind();

        if kind.is_exchange_rate() {
            prop_assert!(matches!(error, ServiceError::ExchangeRateNotFound(_)));
        } else if kind.is_conversion() {
            prop_assert!(matches!(error, ServiceError::ConversionNotPerformed(_)));
        } else {
            prop_assert!(matches!(error, ServiceError::RequestNotSupported(_)));
        }
    }

    /// A non-empty allow-list that omits a request's kind always yields the
    /// generic unsupported failure, naming that kind.
    #[test]
    fn prop_allow_list_takes_precedence(kinds in allow_list(), request in request()) {
        prop_assume!(!kinds.is_empty());
        prop_assume!(!kinds.contains(&request.kind()));

        let service = DispatchFilterService::new(kinds);
        let error = error_of(&service, &request).unwrap();

        prop_assert!(!service.supports(&request));
        match error {
            ServiceError::RequestNotSupported(unsupported) => {
                prop_assert_eq!(unsupported.kind(), &request.kind());
            }
            other => prop_assert!(false, "expected unsupported, got {:?}", other),
        }
    }

    /// Adding kinds that match no request to a non-empty list changes nothing.
    #[test]
    fn prop_inert_kinds_change_nothing(
        kinds in prop::sample::subsequence(RequestKind::STANDARD.to_vec(), 1..=4),
        extra in prop::collection::vec(inert_kind(), 1..4),
        request in request(),
    ) {
        let plain = DispatchFilterService::new(kinds.clone());
        let padded = DispatchFilterService::new(kinds.into_iter().chain(extra));

        prop_assert_eq!(plain.supports(&request), padded.supports(&request));
        prop_assert_eq!(plain.send(&request), padded.send(&request));
    }

    /// `supports` is true exactly when `send` produces a domain failure.
    #[test]
    fn prop_supports_matches_send(kinds in allow_list(), request in request()) {
        let service = DispatchFilterService::new(kinds);
        let error = error_of(&service, &request).unwrap();

        prop_assert_eq!(service.supports(&request), is_domain_failure(&error));
    }
}
