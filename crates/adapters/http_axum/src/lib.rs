//! # cihook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - `GET /`: liveness check, always `200 OK`
//! - `POST /`: hand the raw body to the webhook service and acknowledge it
//! - Map application results into HTTP responses (`OK` text or a JSON
//!   `{"error": …}` body)
//!
//! ## Dependency rule
//! Depends on `cihook-app` (for port traits and services) and `cihook-domain`
//! (for error types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
