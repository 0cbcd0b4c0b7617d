//! JSON request body parsing.
//!
//! Every request carrying an `application/json` body is buffered and
//! validated before it reaches a handler or the not-found fallback, so a
//! malformed body is rejected with 400 whatever the path.

use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_ENCODING, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;
use serde::de::IgnoredAny;

use crate::error::ApiError;

/// Largest JSON body accepted, in bytes.
pub const MAX_JSON_BODY_BYTES: usize = 100 * 1024;

/// Parsed `Content-Type` of a JSON request.
#[derive(Debug, PartialEq, Eq)]
pub struct JsonMediaType {
    pub charset: Option<String>,
}

/// Returns the media type if the request declares `application/json`.
pub fn json_media_type(headers: &HeaderMap) -> Option<JsonMediaType> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mut params = value.split(';');

    let essence = params.next()?.trim();
    if !essence.eq_ignore_ascii_case("application/json") {
        return None;
    }

    let charset = params.find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    });

    Some(JsonMediaType { charset })
}

/// Returns the content coding unless the body is sent as-is.
fn content_encoding(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_ENCODING)?;
    let encoding = value
        .to_str()
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_else(|_| String::from_utf8_lossy(value.as_bytes()).into_owned());
    (encoding != "identity").then_some(encoding)
}

/// Middleware validating JSON request bodies.
///
/// Requests without a JSON content type pass through untouched. Only
/// uncompressed UTF-8 bodies are read; other charsets and content codings
/// get 415. An empty body is accepted; a non-empty one must be an object
/// or array.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, ApiError> {
    let Some(media_type) = json_media_type(request.headers()) else {
        return Ok(next.run(request).await);
    };

    if let Some(charset) = media_type.charset {
        if charset != "utf-8" {
            return Err(ApiError::UnsupportedCharset(charset));
        }
    }

    if let Some(encoding) = content_encoding(request.headers()) {
        return Err(ApiError::UnsupportedEncoding(encoding));
    }

    let (parts, body) = request.into_parts();
    let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), &()).await?;
    validate_json(&bytes)?;

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn validate_json(bytes: &[u8]) -> Result<(), ApiError> {
    let Some(first) = bytes
        .iter()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
    else {
        return Ok(());
    };

    if *first != b'{' && *first != b'[' {
        return Err(ApiError::BadRequest(
            "malformed JSON body: top-level value must be an object or array".to_string(),
        ));
    }

    serde_json::from_slice::<IgnoredAny>(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_plain_json_media_type() {
        assert_eq!(
            json_media_type(&headers_with("application/json")),
            Some(JsonMediaType { charset: None })
        );
    }

    #[test]
    fn test_media_type_with_charset() {
        let media = json_media_type(&headers_with("Application/JSON; charset=\"UTF-8\""));
        assert_eq!(
            media,
            Some(JsonMediaType {
                charset: Some("utf-8".to_string())
            })
        );
    }

    #[test]
    fn test_non_json_media_types_ignored() {
        assert_eq!(json_media_type(&headers_with("text/plain")), None);
        assert_eq!(json_media_type(&headers_with("application/jsonp")), None);
        assert_eq!(json_media_type(&HeaderMap::new()), None);
    }

    #[test]
    fn test_content_encoding() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_encoding(&headers), None);

        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("Identity"));
        assert_eq!(content_encoding(&headers), None);

        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        assert_eq!(content_encoding(&headers), Some("gzip".to_string()));
    }

    #[test]
    fn test_validate_accepts_objects_arrays_and_empty() {
        assert!(validate_json(b"").is_ok());
        assert!(validate_json(b"  \n").is_ok());
        assert!(validate_json(br#"{"a": [1, 2, {"b": null}]}"#).is_ok());
        assert!(validate_json(b" [true, false] ").is_ok());
    }

    #[test]
    fn test_validate_rejects_scalars_and_garbage() {
        assert!(matches!(validate_json(b"42"), Err(ApiError::BadRequest(_))));
        assert!(matches!(validate_json(b"\"text\""), Err(ApiError::BadRequest(_))));
        assert!(matches!(validate_json(b"{\"a\":"), Err(ApiError::BadRequest(_))));
        assert!(matches!(validate_json(b"{} trailing"), Err(ApiError::BadRequest(_))));
    }
}
