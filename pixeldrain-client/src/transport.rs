//! Shared HTTP dispatch
//!
//! One pooled client, one base URL, one credential. Every resource client
//! describes its call as an [`ApiRequest`] and hands it to
//! [`Transport::send`], so authentication, error translation and response
//! limits live in a single place.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Response};

use crate::error::{check_response, json_with_limit, PixeldrainError};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pixeldrain.com/api";

const USER_AGENT: &str = concat!("pixeldrain-client/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all pixeldrain requests (connection pooling).
/// No timeouts: uploads and downloads may legitimately run for hours.
/// Redirects stay enabled, the thumbnail endpoint answers with one when
/// it has no thumbnail to offer.
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build shared HTTP client")
});

/// Characters percent-encoded when a value is interpolated into a URL
/// path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// API token, sent as HTTP Basic credentials.
///
/// The Basic value is the base64 of the token alone; pixeldrain does not
/// pair it with a username.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `Authorization` header value for this credential.
    pub(crate) fn header_value(&self) -> String {
        format!("Basic {}", BASE64.encode(&self.0))
    }
}

/// The token never appears in logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// How a request authenticates.
pub(crate) enum AuthMode {
    /// No `Authorization` header. Public endpoints, and endpoints that
    /// accept anonymous submissions.
    None,
    /// The transport's stored credential.
    Credential,
    /// An explicit key. Revoking an API key authenticates as the key
    /// being revoked, not as the stored credential.
    Key(String),
}

pub(crate) enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
    Stream(reqwest::Body),
}

/// One API call: the parts that vary per operation.
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    auth: AuthMode,
    query: Vec<(&'static str, String)>,
    body: RequestBody,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            auth: AuthMode::None,
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Authenticate with the transport's stored credential.
    pub fn authenticated(mut self) -> Self {
        self.auth = AuthMode::Credential;
        self
    }

    /// Authenticate with an explicit key instead of the stored credential.
    pub fn auth_key(mut self, key: impl Into<String>) -> Self {
        self.auth = AuthMode::Key(key.into());
        self
    }

    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn stream(mut self, body: reqwest::Body) -> Self {
        self.body = RequestBody::Stream(body);
        self
    }
}

/// Preconfigured dispatch shared by all resource clients.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    credential: Credential,
}

impl Transport {
    pub fn new(credential: Credential, base_url: impl Into<String>) -> Self {
        Self {
            http: SHARED_CLIENT.clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        }
    }

    /// Dispatch a request. Error statuses and transport failures come
    /// back translated as [`PixeldrainError::Remote`].
    pub async fn send(&self, request: ApiRequest) -> Result<Response, PixeldrainError> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = %request.method, %url, "dispatching API request");

        let mut builder = self.http.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.auth {
            AuthMode::None => builder,
            AuthMode::Credential => {
                builder.header(AUTHORIZATION, self.credential.header_value())
            }
            AuthMode::Key(key) => {
                builder.header(AUTHORIZATION, Credential::new(key).header_value())
            }
        };
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
            RequestBody::Stream(body) => builder.body(body),
        };

        let response = builder.send().await?;
        check_response(response).await
    }

    /// Dispatch a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, PixeldrainError> {
        let response = self.send(request).await?;
        json_with_limit(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_header_value() {
        let credential = Credential::new("abc");
        assert_eq!(credential.header_value(), "Basic YWJj");
    }

    #[test]
    fn test_credential_header_value_has_no_username_separator() {
        // base64("token:") would end differently than base64("token")
        let credential = Credential::new("token");
        assert_eq!(credential.header_value(), "Basic dG9rZW4=");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret-token");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_transport_trims_trailing_slash() {
        let transport = Transport::new(Credential::new("t"), "https://pixeldrain.com/api/");
        assert_eq!(transport.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("abc123"), "abc123");
        assert_eq!(encode_path_segment("my file.txt"), "my%20file.txt");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("q?x#y"), "q%3Fx%23y");
        assert_eq!(encode_path_segment("100%.txt"), "100%25.txt");
    }

    #[test]
    fn test_api_request_defaults() {
        let request = ApiRequest::get("/file/abc123/info");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/file/abc123/info");
        assert!(matches!(request.auth, AuthMode::None));
        assert!(request.query.is_empty());
        assert!(matches!(request.body, RequestBody::Empty));
    }

    #[test]
    fn test_api_request_auth_modes() {
        let request = ApiRequest::get("/user/files").authenticated();
        assert!(matches!(request.auth, AuthMode::Credential));

        let request = ApiRequest::delete("/user/session").auth_key("other-key");
        match request.auth {
            AuthMode::Key(key) => assert_eq!(key, "other-key"),
            _ => panic!("expected explicit key auth"),
        }
    }
}
