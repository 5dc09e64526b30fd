//! Shared tenant relay domain primitives.
//!
//! This crate owns tenant resolution and the queue message contract. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.
//! See `crates/tenant_relay_core/README.md` for ownership boundaries.

pub mod contract;
pub mod tenant;
