//! Policy-aware ethics screening for cross-border partnership cases.
//!
//! The [`ethics`] module hosts the screening engine itself: six concurrent
//! risk checks, a policy-weighted aggregator, and the report assembly around
//! them. [`spi`] carries the standalone success-probability scorer used by
//! partnership matchmaking. The remaining modules are service plumbing.

pub mod config;
pub mod error;
pub mod ethics;
pub mod spi;
pub mod telemetry;
