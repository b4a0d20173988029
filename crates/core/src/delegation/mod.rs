//! Services that compose other services.

mod delegating;
mod fallback;

#[cfg(test)]
mod delegating_props;

pub use delegating::DelegatingService;
pub use fallback::FallbackService;
