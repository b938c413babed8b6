//! # cihook-domain
//!
//! Pure domain model for the cihook webhook receiver.
//!
//! ## Responsibilities
//! - Define the **Payload** (a non-empty JSON object accepted on `POST /`)
//!   and enforce its validity rule at construction time
//! - Define the **Receipt** (the configured key and its optional value,
//!   stamped with the time it was accepted)
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod payload;
pub mod receipt;
