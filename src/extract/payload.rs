use crate::models::{DeviceType, ExtractionResult};

/// Assembles the derived fields into the record posted to the API.
pub fn build_payload(
    device: DeviceType,
    ordering_provider: String,
    diagnosis: String,
    patient_name: String,
    dob: String,
    liters: Option<String>,
    usage: Option<String>,
) -> ExtractionResult {
    ExtractionResult {
        device,
        ordering_provider,
        diagnosis,
        patient_name,
        dob,
        liters,
        usage,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn complete_oxygen_order_includes_all_fields() {
        let order = build_payload(
            DeviceType::OxygenTank,
            "Dr. Cuddy".into(),
            "COPD".into(),
            "Harold Finch".into(),
            "04/12/1952".into(),
            Some("2 L".into()),
            Some("sleep and exertion".into()),
        );

        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"device":"Oxygen Tank","ordering_provider":"Dr. Cuddy","diagnosis":"COPD","patient_name":"Harold Finch","dob":"04/12/1952","liters":"2 L","usage":"sleep and exertion"}"#
        );
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let order = build_payload(
            DeviceType::Cpap,
            "Dr. Johnson".into(),
            "Sleep Apnea".into(),
            "John Doe".into(),
            "01/01/1980".into(),
            None,
            None,
        );

        let value = serde_json::to_value(&order).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("liters"));
        assert!(!object.contains_key("usage"));
        assert_eq!(
            value,
            json!({
                "device": "CPAP",
                "ordering_provider": "Dr. Johnson",
                "diagnosis": "Sleep Apnea",
                "patient_name": "John Doe",
                "dob": "01/01/1980",
            })
        );
    }

    #[test]
    fn one_optional_field_present() {
        let order = build_payload(
            DeviceType::OxygenTank,
            "Dr. Cuddy".into(),
            "COPD".into(),
            "Harold Finch".into(),
            "04/12/1952".into(),
            None,
            Some("sleep".into()),
        );

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value.get("usage"), Some(&Value::from("sleep")));
        assert_eq!(value.get("liters"), None);
    }
}
