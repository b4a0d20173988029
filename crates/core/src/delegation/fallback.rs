//! Ordered fallback over several services.

use std::fmt;

use tracing::trace;

use fxroute_shared::{ErrorResponse, Request, RequestNotSupported, Response};

use crate::service::Service;

/// Tries each member service in order until one succeeds.
///
/// Members that do not support a request are skipped. If every supporting
/// member fails, the last failure is returned. If none supports the request
/// at all, the answer is `RequestNotSupported`.
#[derive(Default)]
pub struct FallbackService {
    services: Vec<Box<dyn Service>>,
}

impl FallbackService {
    /// Creates a fallback over `services`, tried front to back.
    #[must_use]
    pub fn new(services: Vec<Box<dyn Service>>) -> Self {
        Self { services }
    }

    /// Appends a service to the end of the chain.
    #[must_use]
    pub fn with(mut self, service: impl Service + 'static) -> Self {
        self.services.push(Box::new(service));
        self
    }

    /// Number of member services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if there are no member services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Service for FallbackService {
    fn send(&self, request: &Request) -> Response {
        let mut last_error: Option<ErrorResponse> = None;

        for (index, service) in self.services.iter().enumerate() {
            if !service.supports(request) {
                continue;
            }

            match service.send(request) {
                Response::Error(error) => {
                    trace!(index, code = error.error().error_code(), "fallback member failed");
                    last_error = Some(error);
                }
                response => return response,
            }
        }

        last_error
            .unwrap_or_else(|| ErrorResponse::new(RequestNotSupported::from_request(request)))
            .into()
    }

    fn supports(&self, request: &Request) -> bool {
        self.services.iter().any(|service| service.supports(request))
    }
}

impl fmt::Debug for FallbackService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackService")
            .field("services", &self.services.len())
            .finish()
    }
}
