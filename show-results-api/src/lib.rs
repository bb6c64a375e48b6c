//! The client for the ShowResults endpoint.
//!
//! The endpoint exposes a single operation: query a new alphanumeric result
//! string. [`Client::query`] issues that request and returns the decoded
//! [`QueryResponse`] payload.
pub mod http;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::http::StatusCode;

use self::http::RequestBuilder;

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all operations on a [`Client`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad status code: {0}")]
    BadStatusCode(StatusCode),
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// A client for the ShowResults endpoint.
///
/// `Client` is cheap to clone and all clones refer to the same endpoint.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    http: http::Client,
}

impl Client {
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            base_url: base_url.into(),
            http: http::Client::new(),
        }
    }

    /// Returns a new [`RequestBuilder`] primed with the base url of the endpoint.
    pub fn request(&self) -> RequestBuilder {
        RequestBuilder::new(self.base_url.to_string())
    }

    /// Queries the endpoint for a new result string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint responds with a
    /// non-2xx status code.
    pub async fn query(&self) -> Result<QueryResponse> {
        let req = self.request().get().uri("/query").build();

        log::debug!("Querying {}/query", self.base_url);

        let resp = self.http.send(req).await?;

        if resp.is_success() {
            resp.json().await
        } else {
            Err(Error::BadStatusCode(resp.status()))
        }
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

/// The payload returned by the endpoint on a successful query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::{Error, QueryResponse, StatusCode};

    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_query_response() {
        let resp = QueryResponse {
            data: String::from("A0B3HCJ"),
        };

        assert_tokens(
            &resp,
            &[
                Token::Struct {
                    name: "QueryResponse",
                    len: 1,
                },
                Token::Str("data"),
                Token::Str("A0B3HCJ"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_query_response_empty() {
        let resp = QueryResponse {
            data: String::new(),
        };

        assert_tokens(
            &resp,
            &[
                Token::Struct {
                    name: "QueryResponse",
                    len: 1,
                },
                Token::Str("data"),
                Token::Str(""),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::BadStatusCode(StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(err.to_string(), "bad status code: 500 Internal Server Error");
    }
}
