//! GraphQL resource API through the full router.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use common::{MockProvider, get, graphql, test_app};

const FIELDS: &str = "id name description formatType settings createdAt updatedAt";

fn create_mutation() -> String {
    format!(
        "mutation Create($input: CreatePdfFormateInput!) {{ createPdfFormate(createPdfFormateInput: $input) {{ {FIELDS} }} }}"
    )
}

fn update_mutation() -> String {
    format!(
        "mutation Update($input: UpdatePdfFormateInput!) {{ updatePdfFormate(updatePdfFormateInput: $input) {{ {FIELDS} }} }}"
    )
}

fn find_query() -> String {
    format!("query Find($id: String!) {{ pdfFormate(id: $id) {{ {FIELDS} }} }}")
}

fn list_query() -> String {
    format!("{{ pdfFormats {{ {FIELDS} }} }}")
}

fn remove_mutation() -> String {
    format!("mutation Remove($id: String!) {{ removePdfFormate(id: $id) {{ {FIELDS} }} }}")
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"].as_str().unwrap()
}

async fn create(app: &axum::Router, input: Value) -> Value {
    let response = graphql(app, &create_mutation(), json!({"input": input})).await;
    assert!(response.get("errors").is_none(), "unexpected errors: {response}");
    response["data"]["createPdfFormate"].clone()
}

async fn count(app: &axum::Router) -> usize {
    let response = graphql(app, &list_query(), json!({})).await;
    response["data"]["pdfFormats"].as_array().unwrap().len()
}

#[tokio::test]
async fn create_generates_id_and_echoes_fields() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let created = create(
        &app,
        json!({"name": "Invoice", "formatType": "A4", "settings": {"color": true}}),
    )
    .await;

    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["name"], "Invoice");
    assert_eq!(created["formatType"], "A4");
    assert_eq!(created["description"], Value::Null);
    assert_eq!(created["settings"], json!({"color": true}));
    assert_eq!(timestamp(&created["createdAt"]), timestamp(&created["updatedAt"]));
}

#[tokio::test]
async fn create_then_fetch_returns_same_record() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let created = create(
        &app,
        json!({"name": "Report", "description": "quarterly", "formatType": "Letter",
               "settings": {"margins": {"top": 20}, "landscape": false}}),
    )
    .await;

    let response = graphql(&app, &find_query(), json!({"id": created["id"]})).await;

    assert_eq!(response["data"]["pdfFormate"], created);
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let mut ids = vec![];
    for name in ["one", "two", "three"] {
        ids.push(create(&app, json!({"name": name, "formatType": "A4"})).await["id"].clone());
    }

    let response = graphql(&app, &list_query(), json!({})).await;
    let listed: Vec<Value> = response["data"]["pdfFormats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();

    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let created = create(
        &app,
        json!({"name": "Invoice", "description": "monthly", "formatType": "A4",
               "settings": {"color": true}}),
    )
    .await;

    let response = graphql(
        &app,
        &update_mutation(),
        json!({"input": {"id": created["id"], "name": "Receipt"}}),
    )
    .await;
    let updated = &response["data"]["updatePdfFormate"];

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Receipt");
    assert_eq!(updated["description"], "monthly");
    assert_eq!(updated["formatType"], "A4");
    assert_eq!(updated["settings"], json!({"color": true}));
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(timestamp(&updated["updatedAt"]) >= timestamp(&updated["createdAt"]));

    let fetched = graphql(&app, &find_query(), json!({"id": created["id"]})).await;
    assert_eq!(&fetched["data"]["pdfFormate"], updated);
}

#[tokio::test]
async fn update_with_null_clears_nullable_field() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let created = create(
        &app,
        json!({"name": "Invoice", "description": "monthly", "formatType": "A4"}),
    )
    .await;

    let response = graphql(
        &app,
        &update_mutation(),
        json!({"input": {"id": created["id"], "description": null}}),
    )
    .await;

    assert_eq!(response["data"]["updatePdfFormate"]["description"], Value::Null);
    assert_eq!(response["data"]["updatePdfFormate"]["name"], "Invoice");
}

#[tokio::test]
async fn update_without_fields_leaves_record_untouched() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let created = create(&app, json!({"name": "Invoice", "formatType": "A4"})).await;

    let response = graphql(
        &app,
        &update_mutation(),
        json!({"input": {"id": created["id"], "name": null}}),
    )
    .await;

    assert_eq!(response["data"]["updatePdfFormate"], created);
}

#[tokio::test]
async fn update_rejects_malformed_id() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let response = graphql(
        &app,
        &update_mutation(),
        json!({"input": {"id": "not-a-uuid", "name": "x"}}),
    )
    .await;

    assert_eq!(error_code(&response), "BAD_USER_INPUT");
    assert_eq!(
        response["errors"][0]["extensions"]["violations"][0]["field"],
        "id"
    );
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let id = "7d444840-9dc0-11d1-b245-5ffdce74fad2";

    let response = graphql(
        &app,
        &update_mutation(),
        json!({"input": {"id": id, "name": "x"}}),
    )
    .await;

    assert_eq!(error_code(&response), "NOT_FOUND");
    assert!(response["errors"][0]["message"].as_str().unwrap().contains(id));
}

#[tokio::test]
async fn remove_returns_record_then_fetch_is_not_found() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;
    let created = create(&app, json!({"name": "Invoice", "formatType": "A4"})).await;

    let removed = graphql(&app, &remove_mutation(), json!({"id": created["id"]})).await;
    assert_eq!(removed["data"]["removePdfFormate"], created);

    let fetched = graphql(&app, &find_query(), json!({"id": created["id"]})).await;
    assert_eq!(error_code(&fetched), "NOT_FOUND");
    assert_eq!(
        fetched["errors"][0]["message"],
        format!("PdfFormate with ID {} not found", created["id"].as_str().unwrap())
    );

    let again = graphql(&app, &remove_mutation(), json!({"id": created["id"]})).await;
    assert_eq!(error_code(&again), "NOT_FOUND");
}

#[tokio::test]
async fn create_rejects_blank_fields_without_writing() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let response = graphql(
        &app,
        &create_mutation(),
        json!({"input": {"name": "  ", "formatType": "A4", "settings": [1, 2]}}),
    )
    .await;

    assert_eq!(response["errors"][0]["message"], "Validation failed");
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
    let fields: Vec<&str> = response["errors"][0]["extensions"]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "settings"]);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn create_rejects_missing_or_unknown_fields_without_writing() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let missing = graphql(
        &app,
        r#"mutation { createPdfFormate(createPdfFormateInput: {name: "Invoice"}) { id } }"#,
        json!({}),
    )
    .await;
    assert!(missing["errors"].as_array().is_some_and(|e| !e.is_empty()));

    let unknown = graphql(
        &app,
        r#"mutation { createPdfFormate(createPdfFormateInput: {name: "Invoice", formatType: "A4", color: "red"}) { id } }"#,
        json!({}),
    )
    .await;
    assert!(unknown["errors"].as_array().is_some_and(|e| !e.is_empty()));

    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn graphiql_is_served_on_get() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let (status, _, body) = get(&app, "/graphql").await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn schema_supports_introspection() {
    let app = test_app(Arc::new(MockProvider::replying(&[]))).await;

    let response = graphql(&app, "{ __type(name: \"PdfFormate\") { name } }", json!({})).await;

    assert_eq!(response["data"]["__type"]["name"], "PdfFormate");
}
