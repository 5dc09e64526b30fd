//! AWS-oriented adapters and handlers for the tenant relay.
//!
//! This crate owns runtime integration details (the Lambda handler, queue
//! publishing, tracing attributes and environment configuration) and exposes
//! a single runtime module boundary for the contract primitives.
//! See `crates/tenant_relay_lambda/README.md` for ownership boundaries.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod runtime;
pub mod telemetry;
