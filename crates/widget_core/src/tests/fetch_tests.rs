use super::*;
use axum::{
    http::{HeaderMap, StatusCode},
    routing::{any, get},
    Json, Router,
};
use shared::domain::PersonRecord;
use tokio::net::TcpListener;

#[test]
fn resolve_url_returns_trimmed_configured_url() {
    let endpoint = ApiEndpoint::new("  http://127.0.0.1:3000/people.json ");
    assert_eq!(
        endpoint.resolve_url().expect("url"),
        "http://127.0.0.1:3000/people.json"
    );
}

#[test]
fn resolve_url_rejects_missing_url() {
    let endpoint = ApiEndpoint::default();
    assert!(matches!(
        endpoint.resolve_url(),
        Err(FetchError::MissingUrl)
    ));
}

#[test]
fn resolve_url_rejects_blank_url() {
    for url in ["", "   "] {
        let endpoint = ApiEndpoint::new(url);
        assert!(matches!(
            endpoint.resolve_url(),
            Err(FetchError::MissingUrl)
        ));
    }
}

#[test]
fn missing_url_error_displays_exact_message() {
    assert_eq!(FetchError::MissingUrl.to_string(), "Missing url!");
}

#[test]
fn wire_response_decodes_typed_json() {
    let response = WireResponse {
        ok: true,
        status_text: "OK".to_string(),
        body: br#"[{"gender":"Male","pets":[{"name":"Tom","type":"Cat"}]}]"#.to_vec(),
    };

    let records: Vec<PersonRecord> = response.json().expect("decode");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].gender, "Male");
}

#[test]
fn wire_response_decodes_null_body_as_none() {
    let response = WireResponse {
        ok: true,
        status_text: "OK".to_string(),
        body: b"null".to_vec(),
    };

    let records: Option<Vec<PersonRecord>> = response.json().expect("decode");
    assert!(records.is_none());
}

#[test]
fn wire_response_rejects_malformed_body() {
    let response = WireResponse {
        ok: true,
        status_text: "OK".to_string(),
        body: b"not json".to_vec(),
    };

    assert!(response.json::<Vec<PersonRecord>>().is_err());
}

#[test]
fn request_options_default_from_empty_document() {
    let options: RequestOptions = serde_json::from_str("{}").expect("decode");
    assert!(options.method.is_none());
    assert!(options.credentials.is_none());
    assert!(options.headers.is_empty());
}

#[test]
fn endpoint_config_tolerates_missing_options() {
    let endpoint: ApiEndpoint =
        serde_json::from_str(r#"{"url":"http://localhost/people.json"}"#).expect("decode");
    assert_eq!(
        endpoint.resolve_url().expect("url"),
        "http://localhost/people.json"
    );
}

#[tokio::test]
async fn missing_capability_rejects_every_request() {
    let err = MissingHttpCapability
        .execute("http://localhost/people.json", &RequestOptions::default())
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("unavailable"));
}

async fn feed() -> Json<serde_json::Value> {
    Json(serde_json::json!([
        {
            "name": "Bob",
            "gender": "Male",
            "age": 23,
            "pets": [{ "name": "Garfield", "type": "Cat" }]
        }
    ]))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn echo_probe_header(headers: HeaderMap) -> String {
    headers
        .get("x-probe")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn echo_method(request: axum::extract::Request) -> String {
    request.method().to_string()
}

async fn spawn_feed_server() -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/people.json", get(feed))
        .route("/broken", get(broken))
        .route("/echo-header", get(echo_probe_header))
        .route("/echo-method", any(echo_method));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn reqwest_http_returns_ok_envelope() {
    let server_url = spawn_feed_server().await.expect("spawn server");

    let response = ReqwestHttp::new()
        .execute(
            &format!("{server_url}/people.json"),
            &RequestOptions::default(),
        )
        .await
        .expect("execute");

    assert!(response.ok);
    assert_eq!(response.status_text, "OK");
    let records: Vec<PersonRecord> = response.json().expect("decode");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn reqwest_http_reports_status_text_for_failures() {
    let server_url = spawn_feed_server().await.expect("spawn server");

    let response = ReqwestHttp::new()
        .execute(&format!("{server_url}/broken"), &RequestOptions::default())
        .await
        .expect("execute");

    assert!(!response.ok);
    assert_eq!(response.status_text, "Internal Server Error");
}

#[tokio::test]
async fn reqwest_http_forwards_headers() {
    let server_url = spawn_feed_server().await.expect("spawn server");
    let mut options = RequestOptions::default();
    options
        .headers
        .insert("x-probe".to_string(), "roster".to_string());

    let response = ReqwestHttp::new()
        .execute(&format!("{server_url}/echo-header"), &options)
        .await
        .expect("execute");

    assert_eq!(response.body, b"roster");
}

#[tokio::test]
async fn reqwest_http_uppercases_configured_method() {
    let server_url = spawn_feed_server().await.expect("spawn server");
    let options = RequestOptions {
        method: Some("post".to_string()),
        ..RequestOptions::default()
    };

    let response = ReqwestHttp::new()
        .execute(&format!("{server_url}/echo-method"), &options)
        .await
        .expect("execute");

    assert_eq!(response.body, b"POST");
}

#[tokio::test]
async fn reqwest_http_rejects_malformed_method() {
    let options = RequestOptions {
        method: Some("not a method".to_string()),
        ..RequestOptions::default()
    };

    let err = ReqwestHttp::new()
        .execute("http://127.0.0.1:1/people.json", &options)
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("invalid request method"));
}

#[tokio::test]
async fn reqwest_http_rejects_invalid_url() {
    let err = ReqwestHttp::new()
        .execute("::not-a-url::", &RequestOptions::default())
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("invalid feed url"));
}
