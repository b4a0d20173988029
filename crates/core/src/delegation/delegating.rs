//! Service with a swappable delegate.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use fxroute_shared::{Request, Response};

use crate::service::Service;

/// Forwards every call to a delegate that can be replaced at any time.
///
/// Callers bind to one `DelegatingService` (usually behind an `Rc`) and the
/// owner swaps the delegate underneath them, e.g. replacing a stub with a
/// working service in a test.
///
/// The delegate lives in a `RefCell`, so this type is not `Sync`. Sharing it
/// across threads needs the caller's own synchronization. No borrow is held
/// while the delegate runs, so a delegate may replace itself mid-call.
pub struct DelegatingService {
    delegate: RefCell<Rc<dyn Service>>,
}

impl DelegatingService {
    /// Creates a service forwarding to `delegate`.
    #[must_use]
    pub fn new(delegate: impl Service + 'static) -> Self {
        let delegate: Rc<dyn Service> = Rc::new(delegate);
        Self {
            delegate: RefCell::new(delegate),
        }
    }

    /// Replaces the delegate, returning the previous one.
    ///
    /// A call already running on the previous delegate finishes on it.
    pub fn replace(&self, delegate: impl Service + 'static) -> Rc<dyn Service> {
        trace!("replacing delegate");
        self.delegate.replace(Rc::new(delegate))
    }

    fn current(&self) -> Rc<dyn Service> {
        Rc::clone(&self.delegate.borrow())
    }
}

impl Service for DelegatingService {
    fn send(&self, request: &Request) -> Response {
        self.current().send(request)
    }

    fn supports(&self, request: &Request) -> bool {
        self.current().supports(request)
    }
}

impl fmt::Debug for DelegatingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingService").finish_non_exhaustive()
    }
}
