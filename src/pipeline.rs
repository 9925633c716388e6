//! One note, end to end: load, extract, send.

use std::path::Path;

use tracing::{debug, info};

use crate::api::Transport;
use crate::error::Result;
use crate::extract::{extract_order, load_note, FieldMap};
use crate::models::ExtractionResult;

/// Loads the note at `path` and derives its order without sending it.
pub fn extract_from_path(path: &Path) -> Result<ExtractionResult> {
    info!(path = %path.display(), "Reading physician note");
    let text = load_note(path)?;
    let fields = FieldMap::parse(&text);
    debug!(fields = fields.len(), "Successfully parsed physician note file");

    info!("Extracting device information from note");
    let order = extract_order(&fields);
    info!(device = %order.device, "Extracted device type");
    debug!(
        provider = %order.ordering_provider,
        patient = %order.patient_name,
        diagnosis = %order.diagnosis,
        "Extracted order details"
    );

    Ok(order)
}

/// Extracts the note at `path` and posts the order to `url`.
///
/// Nothing is sent unless extraction fully succeeds.
pub async fn process_note<T>(path: &Path, url: &str, transport: &T) -> Result<ExtractionResult>
where
    T: Transport + ?Sized,
{
    let order = extract_from_path(path)?;

    info!(url, "Sending data to API endpoint");
    transport.send(&order, url).await?;
    info!("Successfully sent data to API");

    Ok(order)
}
