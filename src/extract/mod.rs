//! Note loading and field extraction.
//!
//! A note is unwrapped to plain text, split into a [`FieldMap`], and the
//! derivation rules in [`rules`] turn that map into an [`ExtractionResult`].
//!
//! [`ExtractionResult`]: crate::models::ExtractionResult

pub mod fields;
pub mod loader;
pub mod payload;
pub mod rules;

pub use fields::FieldMap;
pub use loader::{load_note, unwrap_note};
pub use payload::build_payload;
pub use rules::extract_order;
