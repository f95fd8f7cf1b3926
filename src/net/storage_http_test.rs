use super::*;

#[test]
fn object_endpoint_joins_bucket_and_path() {
    assert_eq!(
        object_endpoint("https://x.example.co", "verification_documents", "u1/1_report.pdf"),
        "https://x.example.co/storage/v1/object/verification_documents/u1/1_report.pdf"
    );
}

#[test]
fn authenticated_object_endpoint_uses_authenticated_route() {
    assert_eq!(
        authenticated_object_endpoint("https://x.example.co", "b", "u1/f.pdf"),
        "https://x.example.co/storage/v1/object/authenticated/b/u1/f.pdf"
    );
}

#[test]
fn list_endpoint_targets_the_bucket() {
    assert_eq!(
        list_endpoint("https://x.example.co", "verification_documents"),
        "https://x.example.co/storage/v1/object/list/verification_documents"
    );
}

#[test]
fn list_payload_orders_by_created_at_descending() {
    let payload = list_payload("u1");
    assert_eq!(payload["prefix"], "u1");
    assert_eq!(payload["sortBy"]["column"], "created_at");
    assert_eq!(payload["sortBy"]["order"], "desc");
}

#[test]
fn storage_error_message_prefers_message_key() {
    assert_eq!(storage_error_message(400, r#"{"message":"The resource already exists"}"#), "The resource already exists");
    assert_eq!(storage_error_message(404, r#"{"error":"not_found"}"#), "not_found");
    assert_eq!(storage_error_message(500, ""), "request failed with status 500");
}
