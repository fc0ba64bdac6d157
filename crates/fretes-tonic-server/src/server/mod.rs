//! Server-side modules for the fretes service.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration parsed into a validated
//!   [`config::ServerConfig`].
//! - [`pricing`] - the [`pricing::PriceSource`] abstraction and its
//!   thread-local-RNG implementation.
//! - [`service`] - the gRPC service implementation.
//! - [`telemetry`] - logging and optional OpenTelemetry export.

pub mod config;
pub mod pricing;
pub mod service;
pub mod telemetry;
