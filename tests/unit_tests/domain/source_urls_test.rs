use koereq::domain::{SourceUrls, ValidationError};
use serde_json::json;

#[test]
fn given_url_list_when_reading_payload_then_preserves_input_order() {
    let urls = SourceUrls::from_payload(&json!({
        "urls": ["https://a/1.jpg", "https://a/2.jpg", "https://a/3.jpg"]
    }))
    .unwrap();

    let collected: Vec<&str> = urls.iter().collect();
    assert_eq!(
        collected,
        vec!["https://a/1.jpg", "https://a/2.jpg", "https://a/3.jpg"]
    );
    assert_eq!(urls.len(), 3);
}

#[test]
fn given_empty_list_when_reading_payload_then_missing_urls() {
    let result = SourceUrls::from_payload(&json!({ "urls": [] }));

    assert_eq!(result, Err(ValidationError::MissingUrls));
}

#[test]
fn given_absent_field_when_reading_payload_then_missing_urls() {
    let result = SourceUrls::from_payload(&json!({ "url": "https://a/1.jpg" }));

    assert_eq!(result, Err(ValidationError::MissingUrls));
}

#[test]
fn given_non_list_value_when_reading_payload_then_missing_urls() {
    for value in [json!("https://a/1.jpg"), json!(3), json!({ "0": "x" }), json!(null)] {
        let result = SourceUrls::from_payload(&json!({ "urls": value }));
        assert_eq!(result, Err(ValidationError::MissingUrls));
    }
}

#[test]
fn given_non_string_element_when_reading_payload_then_missing_urls() {
    let result = SourceUrls::from_payload(&json!({ "urls": ["https://a/1.jpg", 7] }));

    assert_eq!(result, Err(ValidationError::MissingUrls));
}

#[test]
fn given_empty_vec_when_constructing_then_rejected() {
    assert_eq!(SourceUrls::new(vec![]), Err(ValidationError::MissingUrls));
}
