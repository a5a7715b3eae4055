//! Middleware for the storefront.
//!
//! - [`request_id`] - Per-request correlation IDs for logs and Sentry

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
