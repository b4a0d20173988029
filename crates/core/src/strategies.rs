//! Proptest strategies shared by the property tests.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use fxroute_shared::{
    CurrentConversionRequest, CurrentExchangeRateRequest, HistoricalConversionRequest,
    HistoricalExchangeRateRequest, OtherRequest, Request, RequestKind,
};

/// Strategy for three-letter currency codes.
pub fn currency() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy for amounts with up to 8 decimal places.
pub fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000, 0u32..=8)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for dates between 1970 and roughly 2079.
pub fn date() -> impl Strategy<Value = NaiveDate> {
    (0u64..40_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|epoch| epoch.checked_add_days(Days::new(days)))
            .unwrap()
    })
}

/// Strategy covering all request variants, including unknown ones.
pub fn request() -> impl Strategy<Value = Request> {
    prop_oneof![
        (currency(), currency()).prop_map(|(base, quote)| {
            Request::from(CurrentExchangeRateRequest::new(base, quote))
        }),
        (currency(), currency(), date()).prop_map(|(base, quote, date)| {
            Request::from(HistoricalExchangeRateRequest::new(base, quote, date))
        }),
        (amount(), currency(), currency()).prop_map(|(amount, base, quote)| {
            Request::from(CurrentConversionRequest::new(amount, base, quote))
        }),
        (amount(), currency(), currency(), date()).prop_map(|(amount, base, quote, date)| {
            Request::from(HistoricalConversionRequest::new(amount, base, quote, date))
        }),
        "[a-zA-Z_:]{1,24}".prop_map(|name| Request::from(OtherRequest::named(name))),
    ]
}

/// Strategy for kinds that match no standard request.
pub fn inert_kind() -> impl Strategy<Value = RequestKind> {
    "[a-z]{1,12}Marker".prop_map(RequestKind::Other)
}

/// Strategy for allow-lists: a subset of the standard kinds plus inert kinds.
pub fn allow_list() -> impl Strategy<Value = Vec<RequestKind>> {
    (
        prop::sample::subsequence(RequestKind::STANDARD.to_vec(), 0..=4),
        prop::collection::vec(inert_kind(), 0..3),
    )
        .prop_map(|(mut standard, inert)| {
            standard.extend(inert);
            standard
        })
}
