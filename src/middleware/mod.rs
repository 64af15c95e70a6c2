//! Middleware module
//!
//! Tower layers applied to every HTTP request.

pub mod logging;

pub use logging::{with_request_tracing, REQUEST_ID_HEADER};
