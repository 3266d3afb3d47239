//! HTTP request description.

use std::collections::HashMap;

/// Verbs the inventory service answers to. Reads are `GET`, cart writes
/// are `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Method, resolved URL and headers of an outbound request. Cart writes
/// carry no body; the product id travels in the path.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The fully resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set a header, replacing any earlier value for the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_replaces_previous_value() {
        let builder = RequestBuilder::new(Method::Get, "http://localhost/api/products")
            .header("Accept", "text/html")
            .header("Accept", "application/json");
        assert_eq!(builder.method(), Method::Get);
        assert_eq!(builder.url(), "http://localhost/api/products");
        assert_eq!(builder.headers.len(), 1);
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Post.to_reqwest(), reqwest::Method::POST);
    }
}
