//! The capability every rate service implements.

use std::rc::Rc;
use std::sync::Arc;

use fxroute_shared::{Request, Response};

/// A component answering rate and conversion requests.
///
/// `send` is total: a request the service cannot handle is answered with an
/// error response, never a panic. `supports` tells a caller up front whether
/// `send` would attempt the request at all.
pub trait Service {
    /// Answers a request.
    fn send(&self, request: &Request) -> Response;

    /// Returns true if this service handles requests like `request`.
    fn supports(&self, request: &Request) -> bool;
}

impl<S: Service + ?Sized> Service for &S {
    fn send(&self, request: &Request) -> Response {
        (**self).send(request)
    }

    fn supports(&self, request: &Request) -> bool {
        (**self).supports(request)
    }
}

impl<S: Service + ?Sized> Service for Box<S> {
    fn send(&self, request: &Request) -> Response {
        (**self).send(request)
    }

    fn supports(&self, request: &Request) -> bool {
        (**self).supports(request)
    }
}

impl<S: Service + ?Sized> Service for Rc<S> {
    fn send(&self, request: &Request) -> Response {
        (**self).send(request)
    }

    fn supports(&self, request: &Request) -> bool {
        (**self).supports(request)
    }
}

impl<S: Service + ?Sized> Service for Arc<S> {
    fn send(&self, request: &Request) -> Response {
        (**self).send(request)
    }

    fn supports(&self, request: &Request) -> bool {
        (**self).supports(request)
    }
}
