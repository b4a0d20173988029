//! Shared vocabulary for fxroute rate services.
//!
//! This crate provides the types every service speaks:
//! - Request kinds and the four standard rate/conversion requests
//! - Responses, including the error response carrying a failure
//! - Failure types with their human-readable messages
//! - Configuration management

pub mod config;
pub mod error;
pub mod kind;
pub mod requests;
pub mod responses;

pub use config::{AppConfig, ConfigResult, DispatchConfig};
pub use error::{ConversionNotPerformed, ExchangeRateNotFound, RequestNotSupported, ServiceError};
pub use kind::RequestKind;
pub use requests::{
    ConversionQuery, CurrentConversionRequest, CurrentExchangeRateRequest,
    HistoricalConversionRequest, HistoricalExchangeRateRequest, OtherRequest, RateQuery, Request,
};
pub use responses::{ConversionResponse, ErrorResponse, ExchangeRateResponse, Response};
