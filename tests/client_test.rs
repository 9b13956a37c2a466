use pretty_assertions::assert_eq;
use std::sync::Arc;

use wgapi::api::blocks::{Accounts, BlitzAccounts, Clans, Servers, TankAccounts};
use wgapi::api::error_code::ExceptionCode;
use wgapi::api::request::HttpMethod;
use wgapi::api::testing::RecordingTransport;
use wgapi::api::types::RequestOptions;
use wgapi::api::{ApiClient, BlockKind};
use wgapi::config::ClientSettings;
use wgapi::{Region, WgApiError};

fn client_with(transport: Arc<RecordingTransport>) -> ApiClient {
    ApiClient::builder()
        .region(Region::Ru)
        .application_id("1231")
        .transport(transport)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_account_list_end_to_end() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"ok","meta":{"count":1},"data":[{"nickname":"Ivan","account_id":42}]}"#,
    ));
    let client = client_with(transport.clone());

    let accounts = client.method_block::<Accounts>().unwrap();
    let found = accounts.list("Ivan", Some(10)).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].account_id, 42);
    assert_eq!(
        transport.last_request().unwrap().url.as_str(),
        "https://api.worldoftanks.ru/wgn/account/list/?application_id=1231&search=Ivan&limit=10"
    );
}

#[tokio::test]
async fn test_uninitialized_client_refuses_blocks() {
    let transport = Arc::new(RecordingTransport::replying(r#"{"status":"ok","data":[]}"#));
    let client = ApiClient::builder()
        .region(Region::Eu)
        .transport(transport.clone())
        .build()
        .unwrap();

    assert!(!client.is_configured());
    assert!(matches!(
        client.method_block::<Accounts>(),
        Err(WgApiError::NotInitialized)
    ));
    assert!(matches!(client.context(), Err(WgApiError::NotInitialized)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_blank_application_id_is_not_configured() {
    let client = ApiClient::builder()
        .application_id("   ")
        .transport(Arc::new(RecordingTransport::new()))
        .build()
        .unwrap();
    assert!(client.application_id().is_none());
}

#[test]
fn test_blocks_are_cached_per_client() {
    let client = client_with(Arc::new(RecordingTransport::new()));

    let first = client.method_block::<Clans>().unwrap();
    let second = client.method_block::<Clans>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let other = client_with(Arc::new(RecordingTransport::new()));
    let third = other.method_block::<Clans>().unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn test_block_by_kind_downcasts() {
    let client = client_with(Arc::new(RecordingTransport::new()));
    let any = client.method_block_by_kind(BlockKind::Servers).unwrap();
    let typed = client.method_block::<Servers>().unwrap();

    let downcast = any.downcast::<Servers>().unwrap();
    assert!(Arc::ptr_eq(&downcast, &typed));
}

#[tokio::test]
async fn test_api_error_is_classified() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"error","error":{"code":407,"message":"INVALID_SEARCH","field":"search","value":"I"}}"#,
    ));
    let client = client_with(transport);
    let accounts = client.method_block::<Accounts>().unwrap();

    let err = accounts.list("I", None).await.unwrap_err();
    assert_eq!(err.exception_code(), Some(ExceptionCode::InvalidFieldValue));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("INVALID_SEARCH"));
}

#[tokio::test]
async fn test_templated_field_error() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"error","error":{"code":402,"message":"ACCOUNT_ID_NOT_SPECIFIED","field":"account_id","value":null}}"#,
    ));
    let client = client_with(transport);
    let tanks = client.method_block::<TankAccounts>().unwrap();

    let err = tanks.info(&[], &RequestOptions::default()).await.unwrap_err();
    assert_eq!(err.exception_code(), Some(ExceptionCode::FieldNotSpecified));
}

#[tokio::test]
async fn test_unknown_error_uses_fallback() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"error","error":{"code":500,"message":"SOMETHING_NEW","field":null,"value":null}}"#,
    ));
    let client = client_with(transport);
    let servers = client.method_block::<Servers>().unwrap();

    let err = servers.info(&[]).await.unwrap_err();
    assert_eq!(
        err.exception_code(),
        Some(ExceptionCode::ClientResponseErrorFailed)
    );
}

#[tokio::test]
async fn test_request_limit_is_retryable() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"error","error":{"code":407,"message":"REQUEST_LIMIT_EXCEEDED","field":null,"value":null}}"#,
    ));
    let client = client_with(transport);
    let servers = client.method_block::<Servers>().unwrap();

    let err = servers.info(&["wot"]).await.unwrap_err();
    assert_eq!(
        err.exception_code(),
        Some(ExceptionCode::RequestLimitExceeded)
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_non_json_error_status_surfaces_transport_error() {
    let transport = Arc::new(RecordingTransport::new());
    transport.push_response(404, "<html>not found</html>");
    let client = client_with(transport);
    let accounts = client.method_block::<Accounts>().unwrap();

    let err = accounts.list("Ivan", None).await.unwrap_err();
    assert!(matches!(err, WgApiError::Transport(_)));
}

#[tokio::test]
async fn test_blocks_share_region_but_not_cluster() {
    let transport = Arc::new(RecordingTransport::replying(r#"{"status":"ok","data":[]}"#));
    let client = ApiClient::builder()
        .region(Region::Asia)
        .application_id("demo")
        .transport(transport.clone())
        .build()
        .unwrap();

    client
        .method_block::<Accounts>()
        .unwrap()
        .list("x", None)
        .await
        .unwrap();
    client
        .method_block::<BlitzAccounts>()
        .unwrap()
        .list("x", None, None)
        .await
        .unwrap();

    let hosts: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.url.host_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(hosts, vec!["api.worldoftanks.asia", "api.wotblitz.asia"]);
}

#[tokio::test]
async fn test_raw_call_through_context() {
    let transport = Arc::new(RecordingTransport::replying(
        r#"{"status":"ok","data":{"1":{"tag":"ABC"}}}"#,
    ));
    let client = client_with(transport.clone());
    let context = client.context().unwrap();

    let builder = context
        .request(BlockKind::Clans, "info")
        .with_parameters(["clan_id=1".parse::<wgapi::api::params::Parameter>().unwrap()]);
    let data: serde_json::Value = context
        .execute(HttpMethod::Post, &builder)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(data["1"]["tag"], "ABC");
    let request = transport.last_request().unwrap();
    assert_eq!(request.url.as_str(), "https://api.worldoftanks.ru/wgn/clans/info/");
    assert_eq!(request.body.as_deref(), Some("application_id=1231&clan_id=1"));
}

#[test]
fn test_from_settings() {
    let mut settings = ClientSettings::default();
    settings.set("region", "na").unwrap();
    settings.set("application_id", "abc").unwrap();

    let client = ApiClient::from_settings(&settings).unwrap();
    assert_eq!(client.region(), Region::Na);
    assert_eq!(client.application_id(), Some("abc"));
}
