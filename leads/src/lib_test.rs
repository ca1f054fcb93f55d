use super::*;

#[test]
fn decode_lead_collection_accepts_array_of_leads() {
    let body = r#"[
        {"id":"1","nombre":"Ana","correo":"ana@x.com","mensaje":"hola","estado":"nuevo","fecha_creado":"2025-03-03T10:00:00Z"},
        {"id":"2","nombre":"Luis","correo":"luis@x.com","mensaje":"","estado":"descartado","fecha_creado":"2025-03-04T10:00:00Z"}
    ]"#;
    let leads = decode_lead_collection(body).expect("decode");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].name, "Ana");
    assert_eq!(leads[1].status, LeadStatus::Discarded);
}

#[test]
fn decode_lead_collection_rejects_object_body() {
    let err = decode_lead_collection(r#"{"leads": []}"#).expect_err("object is not a collection");
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn decode_lead_collection_rejects_unknown_status() {
    let body = r#"[{"id":"1","nombre":"Ana","correo":"a@x.com","mensaje":"","estado":"archivado","fecha_creado":"2025-03-03T10:00:00Z"}]"#;
    let err = decode_lead_collection(body).expect_err("unknown status");
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn decode_lead_collection_rejects_invalid_json() {
    assert!(matches!(decode_lead_collection("not json"), Err(ApiError::Malformed(_))));
}

#[test]
fn decode_lead_collection_accepts_empty_array() {
    assert!(decode_lead_collection("[]").expect("decode").is_empty());
}
