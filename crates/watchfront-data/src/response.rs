//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The URL that produced this response.
    pub url: String,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body. Failures carry the URL so a bad payload can be
    /// traced to its endpoint.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }

    /// Turn a non-2xx response into [`FetchError::HttpError`], using the
    /// trimmed body as the message.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = String::from_utf8_lossy(&self.body).trim().to_string();
        Err(FetchError::HttpError {
            status: self.status,
            url: self.url,
            message: if message.is_empty() {
                "empty response body".to_string()
            } else {
                message
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, "http://shop.test/api/products", body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Line {
            _id: u64,
            quantity: u32,
        }

        let resp = make_response(200, br#"{"_id": 6543, "quantity": 2}"#);
        let line: Line = resp.json().unwrap();
        assert_eq!(line, Line { _id: 6543, quantity: 2 });
    }

    #[test]
    fn test_response_json_invalid_names_url() {
        let resp = make_response(200, b"<html>oops</html>");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        match err {
            FetchError::ParseError { url, .. } => assert_eq!(url, "http://shop.test/api/products"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"[]").error_for_status().is_ok());

        match make_response(503, b"Service Unavailable\n").error_for_status() {
            Err(FetchError::HttpError { status, message, .. }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match make_response(500, b"").error_for_status() {
            Err(FetchError::HttpError { message, .. }) => {
                assert_eq!(message, "empty response body")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
