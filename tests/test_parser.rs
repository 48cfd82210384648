use sentence_echo::http::parser::{is_complete, parse_http_request};
use sentence_echo::http::request::RawRequest;

#[test]
fn test_parse_post_with_json_body() {
    let req = b"POST /echo HTTP/1.1\r\nHost: localhost\r\nContent-Length: 27\r\n\r\n{\"sentence\": \"Hello world\"}";
    let view = parse_http_request(req);

    assert!(view.is_post);
    assert_eq!(view.content_length, Some(27));
    assert_eq!(view.body_start, Some(req.len() - 27));
    assert_eq!(view.body().unwrap(), b"{\"sentence\": \"Hello world\"}");
}

#[test]
fn test_parse_get_request_has_no_body() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let view = parse_http_request(req);

    assert!(!view.is_post);
    assert_eq!(view.content_length, None);
    assert_eq!(view.body_start, Some(req.len()));
    assert!(view.body().is_none());
}

#[test]
fn test_parse_post_without_content_length() {
    let req = b"POST / HTTP/1.1\r\nHost: localhost\r\n\r\n{\"sentence\": \"hi\"}";
    let view = parse_http_request(req);

    assert!(view.is_post);
    assert_eq!(view.content_length, None);
    assert!(view.body().is_none());
}

#[test]
fn test_parse_post_without_blank_line() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 10\r\n";
    let view = parse_http_request(req);

    assert_eq!(view.body_start, None);
    assert!(view.body().is_none());
}

#[test]
fn test_parse_zero_content_length_yields_no_body() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 0\r\n\r\n{\"sentence\": \"hi\"}";
    let view = parse_http_request(req);

    assert_eq!(view.content_length, Some(0));
    assert!(view.body().is_none());
}

#[test]
fn test_parse_malformed_content_length_defaults_to_zero() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\n{}";
    let view = parse_http_request(req);

    assert_eq!(view.content_length, Some(0));
    assert_eq!(view.declared_length(), 0);
    assert!(view.body().is_none());
}

#[test]
fn test_parse_post_marker_is_not_anchored() {
    // The marker is matched anywhere, including inside a header value.
    let req = b"PUT / HTTP/1.1\r\nX-Note: POST it\r\nContent-Length: 2\r\n\r\n{}";
    let view = parse_http_request(req);

    assert!(view.is_post);
    assert_eq!(view.body().unwrap(), b"{}");
}

#[test]
fn test_parse_lowercase_header_not_recognised() {
    let req = b"POST / HTTP/1.1\r\ncontent-length: 2\r\n\r\n{}";
    let view = parse_http_request(req);

    assert_eq!(view.content_length, None);
}

#[test]
fn test_body_extends_past_declared_length() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 2\r\n\r\n{}trailing";
    let view = parse_http_request(req);

    assert_eq!(view.body().unwrap(), b"{}trailing");
}

#[test]
fn test_body_start_uses_first_separator() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nab\r\n\r\ncd";
    let view = parse_http_request(req);

    assert_eq!(view.body().unwrap(), b"ab\r\n\r\ncd");
}

#[test]
fn test_is_complete() {
    assert!(is_complete(b"GET / HTTP/1.1\r\n\r\n"));
    assert!(is_complete(b"POST / HTTP/1.1\r\nContent-Length: 2\r\n\r\n{}"));
    assert!(!is_complete(b"POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\n{}"));
    assert!(!is_complete(b"POST / HTTP/1.1\r\nContent-Length: 2\r\n"));
}

#[test]
fn test_raw_request_stops_at_nul() {
    let raw = RawRequest::new(&b"POST / HTTP/1.1\r\n\0Content-Length: 2\r\n\r\n{}"[..]);
    let view = parse_http_request(raw.as_bytes());

    assert!(view.is_post);
    assert_eq!(view.content_length, None);
    assert_eq!(view.body_start, None);
    assert!(raw.len() > raw.as_bytes().len());
}

#[test]
fn test_parse_content_length_with_plus_sign() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: +21\r\n\r\n{\"sentence\": \"plus\"}";
    let view = parse_http_request(req);

    assert_eq!(view.content_length, Some(21));
    assert_eq!(view.body().unwrap(), b"{\"sentence\": \"plus\"}");
}

#[test]
fn test_parse_overflowing_content_length_saturates() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 99999999999999999999999\r\n\r\n{\"sentence\": \"big\"}";
    let view = parse_http_request(req);

    assert_eq!(view.content_length, Some(usize::MAX));
    assert_eq!(view.body().unwrap(), b"{\"sentence\": \"big\"}");
}
