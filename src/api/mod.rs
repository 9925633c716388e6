//! Outbound delivery of extracted orders.
//!
//! The pipeline only depends on the [`Transport`] trait; [`HttpTransport`]
//! is the production implementation.

pub mod client;

pub use client::{HttpTransport, Transport};

#[cfg(test)]
pub use client::MockTransport;
