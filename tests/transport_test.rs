//! End-to-end tests against a mock HTTP server.
//!
//! These exercise the full request path: token session, header merge, URL
//! and query construction, and the reqwest transport's status policy.

use bytes::Bytes;
use swift_storage::*;
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, StorageClientImpl) {
    let server = MockServer::start().await;

    let config = StorageConfig::builder()
        .storage_url(format!("{}/v1/AUTH_test", server.uri()))
        .auth_token("test-token")
        .build()
        .expect("valid config");

    let client = create_client(config).expect("client builds");
    (server, client)
}

#[tokio::test]
async fn test_create_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/AUTH_test/c1/o1"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("X-Object-Meta-color", "red"))
        .and(body_bytes(b"hello".to_vec()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let opts = CreateOpts::new("c1", "o1")
        .with_metadata("color", "red")
        .with_content("hello");

    client.objects().create(opts).await.unwrap();
}

#[tokio::test]
async fn test_list_plain_text_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/AUTH_test/c1"))
        .and(header("Accept", "text/plain"))
        .and(query_param("prefix", "a b/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain; charset=utf-8")
                .set_body_string("a b/one\na b/two\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .objects()
        .list(ListOpts::new("c1").with_param("prefix", "a b/"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.body_text(), "a b/one\na b/two\n");
}

#[tokio::test]
async fn test_list_full_negotiates_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/AUTH_test/c1"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .objects()
        .list(ListOpts::new("c1").with_full(true))
        .await
        .unwrap();

    assert_eq!(response.body_text(), "[]");
}

#[tokio::test]
async fn test_copy_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("COPY"))
        .and(path("/v1/AUTH_test/c1/o1"))
        .and(header("Destination", "/c2/o2"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .objects()
        .copy(CopyOpts::new("c1", "o1", "c2", "o2"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_download_and_get_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/AUTH_test/c1/dir/my%20file.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Object-Meta-Color", "red")
                .set_body_bytes(b"content".to_vec()),
        )
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/v1/AUTH_test/c1/dir/my%20file.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Object-Meta-Color", "red")
                .insert_header("X-Trans-Id", "tx-e2e"),
        )
        .mount(&server)
        .await;

    let downloaded = client
        .objects()
        .download(DownloadOpts::new("c1", "dir/my file.txt"))
        .await
        .unwrap();
    assert_eq!(downloaded.into_body(), Bytes::from_static(b"content"));

    let head = client
        .objects()
        .get(GetOpts::new("c1", "dir/my file.txt"))
        .await
        .unwrap();
    assert!(head.body().is_empty());
    assert_eq!(head.trans_id(), Some("tx-e2e"));
    assert_eq!(head.metadata().get("color").map(String::as_str), Some("red"));
}

#[tokio::test]
async fn test_update_and_delete_end_to_end() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/AUTH_test/c1/o1"))
        .and(header("X-Object-Meta-owner", "ops"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/AUTH_test/c1/o1"))
        .and(query_param("multipart-manifest", "delete"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .objects()
        .update(UpdateOpts::new("c1", "o1").with_metadata("owner", "ops"))
        .await
        .unwrap();

    client
        .objects()
        .delete(DeleteOpts::new("c1", "o1").with_param("multipart-manifest", "delete"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_surfaces_as_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/AUTH_test/c1/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Trans-Id", "tx-missing")
                .set_body_string("<html><h1>Not Found</h1></html>"),
        )
        .mount(&server)
        .await;

    let err = client
        .objects()
        .delete(DeleteOpts::new("c1", "missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.trans_id(), Some("tx-missing"));
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = StorageConfig::builder()
        .storage_url(format!("{}/v1/AUTH_test", server.uri()))
        .build()
        .unwrap();
    let client = create_client(config).unwrap();

    let result = client.objects().list(ListOpts::new("c1")).await;
    assert!(matches!(
        result,
        Err(StorageError::Session(SessionError::MissingToken))
    ));
}

#[tokio::test]
async fn test_error_status_can_be_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/v1/AUTH_test/c1/o1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = StorageConfig::builder()
        .storage_url(format!("{}/v1/AUTH_test", server.uri()))
        .auth_token("test-token")
        .build()
        .unwrap();
    let transport = ReqwestTransport::builder()
        .error_for_status(false)
        .build()
        .unwrap();
    let client = StorageClientBuilder::new()
        .config(config)
        .transport(std::sync::Arc::new(transport))
        .build()
        .unwrap();

    let response = client.objects().get(GetOpts::new("c1", "o1")).await.unwrap();
    assert_eq!(response.status(), 404);
}

/// Serve one canned response over a raw socket, so header bytes reach the
/// client exactly as written.
async fn serve_raw_once(response: &'static [u8]) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        socket.write_all(response).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/v1/AUTH_test", addr)
}

#[tokio::test]
async fn test_get_preserves_utf8_metadata() {
    let storage_url = serve_raw_once(
        "HTTP/1.1 200 OK\r\n\
         X-Object-Meta-City: Zürich\r\n\
         X-Object-Meta-Tag: a\r\n\
         X-Object-Meta-Tag: b\r\n\
         Content-Length: 0\r\n\
         Connection: close\r\n\r\n"
            .as_bytes(),
    )
    .await;

    let config = StorageConfig::builder()
        .storage_url(storage_url)
        .auth_token("test-token")
        .build()
        .unwrap();
    let client = create_client(config).unwrap();

    let response = client.objects().get(GetOpts::new("c1", "o1")).await.unwrap();
    let metadata = response.metadata();

    assert_eq!(metadata.get("city").map(String::as_str), Some("Zürich"));
    assert_eq!(metadata.get("tag").map(String::as_str), Some("a, b"));
    assert_eq!(response.header("X-Object-Meta-City"), Some("Zürich"));
}
