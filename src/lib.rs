//! DME order extraction core library
//!
//! Turns semi-structured physician notes into durable medical equipment
//! orders and delivers them to the ordering API.

pub mod api;
pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod settings;
pub mod telemetry;

pub use error::ProcessError;
pub use models::{DeviceType, ExtractionResult};
