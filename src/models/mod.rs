//! Data models shared across the extraction pipeline.

pub mod order;

pub use order::{DeviceType, ExtractionResult, UNKNOWN};
