//! Rate services for fxroute.
//!
//! Every service here speaks the [`Service`] capability over the request and
//! response vocabulary of `fxroute-shared`. None of them computes a real rate:
//! they answer with typed failures, forward to another service, or chain
//! services together.
//!
//! # Modules
//!
//! - `dispatch` - Request classification behind an optional allow-list
//! - `delegation` - Swappable delegate and ordered fallback
//! - `null` - The service that supports nothing

pub mod delegation;
pub mod dispatch;
pub mod null;
pub mod service;

#[cfg(test)]
mod strategies;

pub use delegation::{DelegatingService, FallbackService};
pub use dispatch::{AllowList, DispatchFilterService};
pub use null::NullService;
pub use service::Service;
