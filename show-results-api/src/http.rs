use crate::Result;

use ::http::Method;
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;

pub use ::http::StatusCode;

/// The error of the underlying HTTP transport.
#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct Error {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[from]
    error: hyper::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

/// An HTTP client over the transport of the compilation target: `hyper` on
/// unix and windows family targets, the browser fetch API on wasm targets.
#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: native::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response> {
        self.inner.send(request).await
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    method: Method,
    headers: Vec<(&'static str, String)>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            uri: String::new(),
            method: Method::GET,
            headers: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    pub fn new(uri: String) -> Self {
        Self {
            inner: Request {
                uri,
                ..Default::default()
            },
        }
    }

    /// Sets the request method to `GET`.
    pub fn get(mut self) -> Self {
        self.inner.method = Method::GET;
        self
    }

    /// Appends `uri` to the uri of the request.
    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    /// Adds a header to the request.
    pub fn header<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        self.inner.headers.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

impl From<RequestBuilder> for Request {
    fn from(req: RequestBuilder) -> Self {
        req.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: native::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.inner.json().await
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod native {
    use super::{Error, Request, Response};
    use crate::Result;

    use ::http::StatusCode;
    use hyper::{body, client::HttpConnector, Body};
    use hyper_tls::HttpsConnector;
    use serde::de::DeserializeOwned;

    #[derive(Clone, Debug)]
    pub struct InnerClient {
        inner: hyper::Client<HttpsConnector<HttpConnector>>,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let req = request.into();

            let resp = self.inner.request(req).await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    impl Default for InnerClient {
        fn default() -> Self {
            Self {
                inner: hyper::Client::builder().build(HttpsConnector::new()),
            }
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(hyper::Response<Body>);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            self.0.status()
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            let bytes = body::to_bytes(self.0.into_body())
                .await
                .map_err(Error::from)?;

            Ok(serde_json::from_slice(&bytes)?)
        }
    }

    impl From<Request> for hyper::Request<Body> {
        fn from(request: Request) -> Self {
            let mut builder = hyper::Request::builder()
                .uri(request.uri)
                .method(request.method);

            for (key, value) in request.headers {
                builder = builder.header(key, value);
            }

            builder.body(Body::empty()).unwrap()
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Error, Request, Response};
    use crate::Result;

    use ::http::StatusCode;
    use serde::de::DeserializeOwned;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let method = match request.method.as_str() {
                "GET" => reqwasm::http::Method::GET,
                _ => unreachable!(),
            };

            let mut req = reqwasm::http::Request::new(&request.uri).method(method);

            for (key, value) in request.headers {
                req = req.header(key, &value);
            }

            let resp = req.send().await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status()).unwrap()
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            Ok(self.0.json().await.map_err(Error::from)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Request, RequestBuilder};

    use ::http::Method;

    #[test]
    fn test_request_builder_uri() {
        let req = RequestBuilder::new(String::from("https://example.com"))
            .uri("/query")
            .build();

        assert_eq!(req.uri, "https://example.com/query");
        assert_eq!(req.method, Method::GET);
    }

    #[test]
    fn test_request_builder_headers() {
        let req = RequestBuilder::new(String::from("https://example.com"))
            .get()
            .header("accept", "application/json")
            .build();

        assert_eq!(
            req.headers,
            vec![("accept", String::from("application/json"))]
        );
    }

    #[test]
    fn test_request_default() {
        let req = Request::default();

        assert_eq!(req.uri, "");
        assert_eq!(req.method, Method::GET);
        assert!(req.headers.is_empty());
    }
}
