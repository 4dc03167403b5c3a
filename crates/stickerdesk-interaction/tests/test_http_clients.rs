use std::time::Duration;

use serde_json::json;
use stickerdesk_core::DeskError;
use stickerdesk_core::auth::{AuthApi, SignInWithPasswordParams};
use stickerdesk_core::sticker::{StickerApi, UploadFile};
use stickerdesk_interaction::{HttpAuthApi, HttpStickerApi};
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn sticker_api(server: &MockServer) -> HttpStickerApi {
    HttpStickerApi::new(format!("{}/api/v1", server.uri()), TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_list_stickers_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/stickers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "_id": "b", "code": "second", "file_path": "uploads/b.png" },
                { "_id": "a", "code": "first", "file_path": "uploads/a.png" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stickers = sticker_api(&server).list().await.expect("list should succeed");

    let ids: Vec<&str> = stickers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(stickers[1].file_path, "uploads/a.png");
}

#[tokio::test]
async fn test_list_failure_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/stickers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = sticker_api(&server).list().await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_list_with_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/stickers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = sticker_api(&server).list().await.unwrap_err();
    assert!(matches!(err, DeskError::Serialization { .. }));
}

#[tokio::test]
async fn test_upload_sends_multipart_image_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/sticker"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"image\"; filename=\"smile.png\""))
        .and(body_string_contains("name=\"code\""))
        .and(body_string_contains("smile-code"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "new" })))
        .expect(1)
        .mount(&server)
        .await;

    let file = UploadFile::new("smile.png", b"PNGDATA".to_vec()).with_content_type("image/png");
    sticker_api(&server)
        .create(&file, "smile-code")
        .await
        .expect("upload should succeed");
}

#[tokio::test]
async fn test_delete_hits_id_path_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/sticker/abc123"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    sticker_api(&server)
        .with_bearer_token("tok-1")
        .delete("abc123")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn test_delete_not_found_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/sticker/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = sticker_api(&server).delete("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 (discard) in test environments
    let api = HttpStickerApi::new("http://127.0.0.1:9/api/v1", TIMEOUT).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_login_posts_json_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .and(body_json(json!({ "email": "admin@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "user": { "role": "SUPERADMIN", "email": "admin@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAuthApi::new(format!("{}/api/v1", server.uri()), TIMEOUT).unwrap();
    let response = api
        .login(&SignInWithPasswordParams::new("admin@example.com", "pw"))
        .await
        .expect("login should succeed");

    assert_eq!(response.token(), Some("jwt-token"));
    assert_eq!(response.role(), Some("SUPERADMIN"));
}

#[tokio::test]
async fn test_login_rejection_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let api = HttpAuthApi::new(format!("{}/api/v1", server.uri()), TIMEOUT).unwrap();
    let err = api
        .login(&SignInWithPasswordParams::new("admin@example.com", "bad"))
        .await
        .unwrap_err();

    assert_eq!(err, DeskError::auth("Invalid credentials"));
}

#[tokio::test]
async fn test_login_rejection_without_message_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/admin/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let api = HttpAuthApi::new(format!("{}/api/v1", server.uri()), TIMEOUT).unwrap();
    let err = api
        .login(&SignInWithPasswordParams::new("admin@example.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err, DeskError::auth("Login failed with status 503"));
}

#[tokio::test]
async fn test_login_unreachable_backend_is_network_error() {
    let api = HttpAuthApi::new("http://127.0.0.1:9/api/v1", TIMEOUT).unwrap();
    let err = api
        .login(&SignInWithPasswordParams::new("admin@example.com", "pw"))
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert!(!err.is_auth());
    assert_eq!(err.status(), None);
}
