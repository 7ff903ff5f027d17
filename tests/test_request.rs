use courier::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

fn request(path: &str, headers: HashMap<String, String>) -> Request {
    Request {
        method: Method::GET,
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = request("/", headers);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("host"), None);
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_path_segments_root() {
    let req = request("/", HashMap::new());
    assert_eq!(req.path_segments(), vec![""]);
}

#[test]
fn test_path_segments_with_parameter() {
    let req = request("/echo/abc", HashMap::new());
    assert_eq!(req.path_segments(), vec!["echo", "abc"]);
}

#[test]
fn test_path_segments_trailing_slash() {
    let req = request("/files/", HashMap::new());
    assert_eq!(req.path_segments(), vec!["files", ""]);
}

#[test]
fn test_user_agent_defaults_to_empty() {
    let req = request("/user-agent", HashMap::new());
    assert_eq!(req.user_agent(), "");
}

#[test]
fn test_accept_encodings_absent() {
    let req = request("/", HashMap::new());
    assert!(req.accept_encodings().is_none());
}

#[test]
fn test_accept_encodings_are_trimmed() {
    let mut headers = HashMap::new();
    headers.insert(
        "Accept-Encoding".to_string(),
        "deflate ,  gzip,br".to_string(),
    );
    let req = request("/", headers);

    let tokens: Vec<&str> = req.accept_encodings().unwrap().collect();
    assert_eq!(tokens, vec!["deflate", "gzip", "br"]);
}

#[test]
fn test_method_display_round_trips_name() {
    assert_eq!(Method::parse("PATCH").to_string(), "PATCH");
    assert_eq!(Method::parse("BREW").as_str(), "BREW");
}

#[test]
fn test_request_builder() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/x")
        .header("User-Agent", "Test")
        .body(b"data".to_vec())
        .build()
        .unwrap();

    assert_eq!(req.method, Method::POST);
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.user_agent(), "Test");
    assert_eq!(req.body, b"data".to_vec());
}

#[test]
fn test_request_builder_requires_absolute_path() {
    assert!(RequestBuilder::new().build().is_err());
    assert!(RequestBuilder::new().path("echo").build().is_err());
}
