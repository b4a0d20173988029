//! Property-based tests for delegation.
//!
//! A delegating service answers exactly like its current delegate, before
//! and after the delegate is replaced.

use std::rc::Rc;

use proptest::prelude::*;

use fxroute_shared::RequestKind;

use super::delegating::DelegatingService;
use crate::dispatch::DispatchFilterService;
use crate::null::NullService;
use crate::service::Service;
use crate::strategies::{allow_list, request};

/// Which delegate to build.
#[derive(Debug, Clone)]
enum Delegate {
    Filter(Vec<RequestKind>),
    Null,
}

impl Delegate {
    fn build(&self) -> Rc<dyn Service> {
        match self {
            Self::Filter(kinds) => Rc::new(DispatchFilterService::new(kinds.iter().cloned())),
            Self::Null => Rc::new(NullService),
        }
    }
}

fn delegate() -> impl Strategy<Value = Delegate> {
    prop_oneof![allow_list().prop_map(Delegate::Filter), Just(Delegate::Null)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_delegation_is_transparent(
        first in delegate(),
        second in delegate(),
        request in request(),
    ) {
        let (first, second) = (first.build(), second.build());
        let service = DelegatingService::new(Rc::clone(&first));

        prop_assert_eq!(service.send(&request), first.send(&request));
        prop_assert_eq!(service.supports(&request), first.supports(&request));

        service.replace(Rc::clone(&second));

        prop_assert_eq!(service.send(&request), second.send(&request));
        prop_assert_eq!(service.supports(&request), second.supports(&request));
    }
}
