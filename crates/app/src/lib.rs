//! # cihook-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ReceiptLog`: record each accepted payload
//! - Define **driving/inbound ports** as use-case structs:
//!   - `WebhookService`: validate a raw body, extract the configured field,
//!     record the receipt
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`TracingReceiptLog`)
//!
//! ## Dependency rule
//! Depends on `cihook-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod tracing_log;
