//! Derivation rules that turn a [`FieldMap`] into order fields.
//!
//! Each rule is independent and total: a missing key never fails, it falls
//! back to [`UNKNOWN`] for required fields or to `None` for optional ones.

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::FieldMap;
use super::payload::build_payload;
use crate::models::{DeviceType, ExtractionResult, UNKNOWN};

/// Flow rates like "2 L", "2.5L" or "3 l". Only the first mention is used.
static LITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?) ?L").expect("liters pattern is valid"));

/// Matched in priority order; the first keyword found decides the device.
const DEVICE_KEYWORDS: [(&str, DeviceType); 3] = [
    ("cpap", DeviceType::Cpap),
    ("oxygen", DeviceType::OxygenTank),
    ("wheelchair", DeviceType::Wheelchair),
];

/// Derives every order field from the parsed note.
pub fn extract_order(fields: &FieldMap) -> ExtractionResult {
    build_payload(
        device_type(fields),
        ordering_provider(fields),
        diagnosis(fields),
        patient_name(fields),
        date_of_birth(fields),
        oxygen_liters(fields),
        oxygen_usage(fields),
    )
}

/// The order text: the prescription if the note has one, else the recommendation.
fn order_text(fields: &FieldMap) -> Option<&str> {
    fields
        .get("Prescription")
        .or_else(|| fields.get("Recommendation"))
}

pub fn device_type(fields: &FieldMap) -> DeviceType {
    classify_device(order_text(fields))
}

pub fn classify_device(text: Option<&str>) -> DeviceType {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return DeviceType::Unknown;
    };

    let text = text.to_lowercase();
    DEVICE_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map_or(DeviceType::Unknown, |(_, device)| *device)
}

pub fn ordering_provider(fields: &FieldMap) -> String {
    fields
        .get("Ordering Physician")
        .filter(|provider| !provider.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

pub fn oxygen_liters(fields: &FieldMap) -> Option<String> {
    parse_liters(order_text(fields)?)
}

pub fn parse_liters(text: &str) -> Option<String> {
    LITERS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|number| format!("{} L", number.as_str()))
}

pub fn oxygen_usage(fields: &FieldMap) -> Option<String> {
    parse_usage(fields.get("Usage")?)
}

pub fn parse_usage(text: &str) -> Option<String> {
    let text = text.to_lowercase();
    let usage = match (text.contains("sleep"), text.contains("exertion")) {
        (true, true) => "sleep and exertion",
        (true, false) => "sleep",
        (false, true) => "exertion",
        (false, false) => return None,
    };
    Some(usage.to_string())
}

pub fn diagnosis(fields: &FieldMap) -> String {
    required(fields, "Diagnosis")
}

pub fn patient_name(fields: &FieldMap) -> String {
    required(fields, "Patient Name")
}

pub fn date_of_birth(fields: &FieldMap) -> String {
    required(fields, "DOB")
}

fn required(fields: &FieldMap, key: &str) -> String {
    fields.get(key).unwrap_or(UNKNOWN).to_string()
}
