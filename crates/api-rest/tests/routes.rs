use api_rest::{build_router, AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use medform_core::{CoreConfig, FormId};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Arc::new(CoreConfig::default())))
}

fn app_with_body_limit(limit: usize) -> Router {
    build_router(AppState::new(Arc::new(
        CoreConfig::default().with_body_limit(limit),
    )))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_status_and_timestamp() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    let timestamp = body["timestamp"].as_str().expect("timestamp string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "bad timestamp {timestamp}"
    );
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn extract_form_returns_fresh_ids() {
    let request_body = json!({ "image": "aGVsbG8gd29ybGQ=", "formType": "intake" });

    let (status, first) = send(app(), post_json("/api/extract-form", request_body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(app(), post_json("/api/extract-form", request_body)).await;

    assert_eq!(first["success"], true);
    assert_eq!(first["data"]["formType"], "intake");
    assert_eq!(first["data"]["confidence"], 0.94);
    assert_eq!(first["data"]["fields"]["patientName"], "John Doe");

    let first_id = first["data"]["formId"].as_str().expect("form id");
    let second_id = second["data"]["formId"].as_str().expect("form id");
    assert_ne!(first_id, second_id);
    assert!(FormId::parse(first_id).is_ok());
}

#[tokio::test]
async fn extract_form_accepts_any_body() {
    let (status, body) = send(app(), post_json("/api/extract-form", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["formType"], "medical");

    let plain_text = Request::builder()
        .method(Method::POST)
        .uri("/api/extract-form")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("not json at all"))
        .unwrap();
    let (status, body) = send(app(), plain_text).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let no_body = Request::builder()
        .method(Method::POST)
        .uri("/api/extract-form")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(), no_body).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn validate_medications_returns_one_result_each() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/validate-medications",
            json!({ "medications": ["Aspirin", "Ibuprofen"] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["safeForProcessing"], true);
    let results = body["validationResults"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["medication"], "Aspirin");
    assert_eq!(results[1]["medication"], "Ibuprofen");
    for result in results {
        assert_eq!(result["valid"], true);
        assert_eq!(result["riskScore"], 0.05);
        assert_eq!(result["interactions"], json!([]));
        assert_eq!(result["warnings"], json!([]));
    }
}

#[tokio::test]
async fn validate_medications_echoes_items_as_sent() {
    let (status, body) = send(
        app(),
        post_json("/api/validate-medications", json!({ "medications": ["Aspirin", 81] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validationResults"][0]["medication"], "Aspirin");
    assert_eq!(body["validationResults"][1]["medication"], 81);
}

#[tokio::test]
async fn validate_medications_with_empty_list() {
    let (status, body) = send(
        app(),
        post_json("/api/validate-medications", json!({ "medications": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validationResults"], json!([]));
    assert_eq!(body["overallRiskScore"], 0.03);
}

#[tokio::test]
async fn validate_medications_without_list_is_500() {
    let (status, body) = send(app(), post_json("/api/validate-medications", json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "medications must be an array, found undefined");

    let (status, body) = send(
        app(),
        post_json("/api/validate-medications", json!({ "medications": "Aspirin" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "medications must be an array, found string");
}

#[tokio::test]
async fn generate_fhir_returns_single_doe_patient() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/generate-fhir",
            json!({ "patientData": { "name": "Someone Else", "gender": "female" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["compliant"], true);

    let bundle = &body["fhirBundle"];
    assert_eq!(bundle["resourceType"], "Bundle");
    assert_eq!(bundle["type"], "transaction");

    let patients: Vec<&Value> = bundle["entry"]
        .as_array()
        .expect("entries")
        .iter()
        .map(|e| &e["resource"])
        .filter(|r| r["resourceType"] == "Patient")
        .collect();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0]["name"][0]["family"], "Doe");
    assert_eq!(patients[0]["gender"], "female");
    assert_ne!(bundle["id"], patients[0]["id"]);

    let parsed = fhir::Bundle::parse(&bundle.to_string()).expect("strict bundle parse");
    assert_eq!(parsed.patients().count(), 1);
}

#[tokio::test]
async fn generate_fhir_without_patient_data() {
    let (status, body) = send(app(), post_json("/api/generate-fhir", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fhirBundle"]["resourceType"], "Bundle");
    assert_eq!(
        body["fhirBundle"]["entry"][0]["resource"]["name"][0]["family"],
        "Doe"
    );
}

#[tokio::test]
async fn status_lists_exactly_the_five_endpoints() {
    let (status, body) = send(app(), get("/api/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "operational");
    assert_eq!(
        body["endpoints"],
        json!([
            "/health",
            "/api/extract-form",
            "/api/validate-medications",
            "/api/generate-fhir",
            "/api/status"
        ])
    );
}

#[tokio::test]
async fn malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/validate-medications")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"medications\": [\"Aspirin\""))
        .unwrap();

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn oversized_body_is_413() {
    let body = json!({ "image": "x".repeat(256) });
    let (status, body) = send(app_with_body_limit(64), post_json("/api/extract-form", body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/status")
        .header(header::ORIGIN, "https://forms.example.org")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (status, body) = send(app(), get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/health",
        "/api/extract-form",
        "/api/validate-medications",
        "/api/generate-fhir",
        "/api/status",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = app().oneshot(get("/api/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
