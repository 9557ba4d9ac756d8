mod common;

use admin_api::{ApiClient, ApiError};
use common::{json_response, spawn_server};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;

const ME_QUERY: &str = "query Me { me { id email } }";

#[derive(Debug, Deserialize)]
struct MeData {
    me: Option<Profile>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Profile {
    id: String,
    email: String,
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(format!("http://{}/api/graphql", addr))
}

#[tokio::test]
async fn success_returns_typed_data_with_scoped_headers() {
    let body = json!({"data": {"me": {"id": "u-1", "email": "admin@rustok.io"}}}).to_string();
    let (addr, captured) = spawn_server(vec![json_response(200, "OK", &body)]).await;

    let data: MeData = client_for(addr)
        .execute(ME_QUERY, json!({}), Some("tok-123"), Some("acme"))
        .await
        .unwrap();

    assert_eq!(data.me.unwrap().email, "admin@rustok.io");

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let raw = requests[0].to_lowercase();
    assert!(raw.contains("authorization: bearer tok-123"));
    assert!(raw.contains("x-tenant-slug: acme"));
    assert!(raw.contains("query me"));
}

#[tokio::test]
async fn headers_omitted_without_credentials() {
    let body = json!({"data": {"me": null}}).to_string();
    let (addr, captured) = spawn_server(vec![json_response(200, "OK", &body)]).await;

    let data: MeData = client_for(addr)
        .execute(ME_QUERY, json!({}), None, None)
        .await
        .unwrap();
    assert!(data.me.is_none());

    let requests = captured.lock().unwrap();
    let raw = requests[0].to_lowercase();
    assert!(!raw.contains("authorization:"));
    assert!(!raw.contains("x-tenant-slug:"));
}

#[tokio::test]
async fn http_500_maps_to_http() {
    let (addr, _captured) =
        spawn_server(vec![json_response(500, "Internal Server Error", "oops")]).await;

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), Some("tok"), Some("acme"))
        .await;
    assert_eq!(result.unwrap_err(), ApiError::Http(500));
}

#[tokio::test]
async fn http_401_maps_to_unauthorized() {
    let (addr, _captured) = spawn_server(vec![json_response(401, "Unauthorized", "{}")]).await;

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), Some("stale"), None)
        .await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
}

#[tokio::test]
async fn graphql_unauthorized_error_reclassifies() {
    let body = json!({
        "errors": [{
            "message": "Unauthorized access",
            "extensions": {"code": "UNAUTHORIZED"}
        }]
    })
    .to_string();
    let (addr, _captured) = spawn_server(vec![json_response(200, "OK", &body)]).await;

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), Some("tok"), None)
        .await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
}

#[tokio::test]
async fn graphql_error_passes_through_message_and_code() {
    let body = json!({
        "errors": [{
            "message": "Permission denied: users:read required",
            "extensions": {"code": "PERMISSION_DENIED"}
        }]
    })
    .to_string();
    let (addr, _captured) = spawn_server(vec![json_response(200, "OK", &body)]).await;

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), Some("tok"), Some("acme"))
        .await;
    assert_eq!(
        result.unwrap_err(),
        ApiError::Graphql {
            message: "Permission denied: users:read required".to_string(),
            code: Some("PERMISSION_DENIED".to_string()),
        }
    );
}

#[tokio::test]
async fn empty_envelope_is_a_graphql_error() {
    let (addr, _captured) = spawn_server(vec![json_response(200, "OK", "{}")]).await;

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), None, None)
        .await;
    assert_eq!(
        result.unwrap_err(),
        ApiError::Graphql {
            message: "no data returned".to_string(),
            code: None,
        }
    );
}

#[tokio::test]
async fn unreachable_server_maps_to_network() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result: Result<MeData, ApiError> = client_for(addr)
        .execute(ME_QUERY, json!({}), None, None)
        .await;
    assert_eq!(result.unwrap_err(), ApiError::Network);
}
