use std::path::PathBuf;
use std::time::Duration;

use dme_extract::api::HttpTransport;
use dme_extract::pipeline::{extract_from_path, process_note};
use dme_extract::DeviceType;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn extracts_each_fixture() {
    let oxygen = extract_from_path(&fixture("physician_note1.txt")).unwrap();
    assert_eq!(oxygen.device, DeviceType::OxygenTank);

    let cpap = extract_from_path(&fixture("physician_note2.json")).unwrap();
    assert_eq!(cpap.device, DeviceType::Cpap);
    assert_eq!(cpap.ordering_provider, "Dr. Johnson");
    assert_eq!(cpap.liters, None);

    let wheelchair = extract_from_path(&fixture("physician_note3.txt")).unwrap();
    assert_eq!(wheelchair.device, DeviceType::Wheelchair);
    assert_eq!(wheelchair.diagnosis, "Multiple sclerosis, mobility impairment");
    assert_eq!(wheelchair.usage, None);
}

#[tokio::test]
async fn oxygen_note_is_posted_with_every_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/DrExtract"))
        .and(body_json(json!({
            "device": "Oxygen Tank",
            "ordering_provider": "Dr. Cuddy",
            "diagnosis": "COPD",
            "patient_name": "Harold Finch",
            "dob": "04/12/1952",
            "liters": "2 L",
            "usage": "sleep and exertion",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    let url = format!("{}/DrExtract", server.uri());

    let order = process_note(&fixture("physician_note1.txt"), &url, &transport)
        .await
        .unwrap();
    assert_eq!(order.patient_name, "Harold Finch");
}
