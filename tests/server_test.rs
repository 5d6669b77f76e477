//! Tests for the upload server routes

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use oruxgmaps::server::{router, ServerConfig, SERVER_ID};

const BOUNDARY: &str = "oruxgmapsboundary";

const SOURCES: &str = "<onlinemapsources>\n<onlinemapsource uid=\"3\">...</onlinemapsource>\n</onlinemapsources>\n";

fn app() -> Router {
    router(&ServerConfig::new("127.0.0.1:0"))
}

fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, file_name, content) in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: text/xml\r\n\r\n",
                name, file_name
            )),
            None => body.push_str(&format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_upload_serves_form() {
    let request = Request::builder().uri("/upload").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::SERVER], SERVER_ID);
    let body = body_text(response).await;
    assert!(body.contains("enctype=\"multipart/form-data\""));
    assert!(body.contains("action=\"/upload\""));
}

#[tokio::test]
async fn test_custom_form() {
    let app = router(&ServerConfig::new("127.0.0.1:0").with_upload_form("<p>custom</p>"));
    let request = Request::builder().uri("/upload").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(body_text(response).await, "<p>custom</p>");
}

#[tokio::test]
async fn test_root_redirects_to_upload() {
    for uri in ["/", "/anything/else"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/upload");
    }
}

#[tokio::test]
async fn test_root_rejects_post() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_text(response).await, "not a GET");
}

#[tokio::test]
async fn test_upload_returns_download() {
    let body = multipart_body(&[
        ("comment", None, "not a file"),
        ("file", Some("onlinemapsources.xml"), SOURCES),
    ]);
    let response = app().oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/octet-stream");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=onlinemapsources.xml"
    );

    let text = body_text(response).await;
    assert!(text.contains("<onlinemapsource uid=\"3\">...</onlinemapsource>"));
    let new_entry = text.find("<onlinemapsource uid=\"4\">").unwrap();
    assert!(new_entry < text.find("</onlinemapsources>").unwrap());
    assert!(text.ends_with("</onlinemapsources>\n"));
}

#[tokio::test]
async fn test_upload_without_file() {
    let body = multipart_body(&[("comment", None, "no file here")]);
    let response = app().oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "no file in upload");
}

#[tokio::test]
async fn test_upload_with_malformed_uid() {
    let sources = "<onlinemapsources>\n<onlinemapsource uid=\"123456789012345678901234567890\">\n</onlinemapsources>\n";
    let body = multipart_body(&[("file", Some("onlinemapsources.xml"), sources)]);
    let response = app().oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "error inserting gmaps def");
}

#[tokio::test]
async fn test_upload_not_multipart() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::CONTENT_TYPE, "text/xml")
        .body(Body::from(SOURCES))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_upload_truncated_to_limit() {
    let config = ServerConfig::new("127.0.0.1:0")
        .with_inserter(oruxgmaps::Inserter::new().with_max_input_bytes(19));
    let body = multipart_body(&[("file", Some("onlinemapsources.xml"), SOURCES)]);
    let response = router(&config).oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    // Only the first line fits, so the source lands at the end with uid 1
    assert!(text.starts_with("<onlinemapsources>\n\n<onlinemapsource uid=\"1\">"));
    assert!(text.ends_with("</onlinemapsource>\n"));
}
