//! Menu Cart Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalogue;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod view;

pub use routes::app;
