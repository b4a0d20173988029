//! Service that handles nothing.

use fxroute_shared::{ErrorResponse, Request, RequestNotSupported, Response};

use crate::service::Service;

/// Supports no request and answers every one as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullService;

impl Service for NullService {
    fn send(&self, request: &Request) -> Response {
        ErrorResponse::new(RequestNotSupported::from_request(request)).into()
    }

    fn supports(&self, _request: &Request) -> bool {
        false
    }
}
