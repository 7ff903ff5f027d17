use courier::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_adds_nothing_implicitly() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_response_builder_content_sets_type_and_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content("application/octet-stream", vec![0, 159, 146, 150])
        .build();

    assert_eq!(
        response.header("Content-Type"),
        Some("application/octet-stream")
    );
    assert_eq!(response.header("Content-Length"), Some("4"));
    assert_eq!(response.body, vec![0, 159, 146, 150]);
}

#[test]
fn test_response_builder_header_replaces() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-Custom", "one")
        .header("X-Custom", "two")
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("X-Custom"), Some("two"));
}

#[test]
fn test_response_text_helper() {
    let response = Response::text("héllo");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    // byte length, not char count
    assert_eq!(response.header("Content-Length"), Some("6"));
    assert_eq!(response.body, "héllo".as_bytes().to_vec());
}

#[test]
fn test_response_empty_helpers() {
    for (response, status) in [
        (Response::ok(), StatusCode::Ok),
        (Response::created(), StatusCode::Created),
        (Response::not_found(), StatusCode::NotFound),
    ] {
        assert_eq!(response.status, status);
        assert!(response.headers.is_empty());
        assert!(response.body.is_empty());
    }
}
