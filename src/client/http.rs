//! HTTP client implementation for the TAPD API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{
    BugsService, CommentsService, IterationsService, StoriesService, TasksService, UsersService,
    WorkspacesService,
};
use crate::auth::Auth;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::options::RequestOption;
use super::query::to_query_pairs;
use super::response::{Envelope, ErrorResponse, Response};
use super::transport::HttpTransport;

/// The main client for interacting with the TAPD API.
///
/// The client owns the base URL, credentials, user agent and transport.
/// Resource families are reached through accessor methods that return
/// lightweight service handles; all of them share the same underlying
/// client and are safe to use from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use tapd_rs::TapdClient;
/// use tapd_rs::models::GetStoriesRequest;
///
/// # async fn example() -> tapd_rs::Result<()> {
/// let client = TapdClient::new("client-id", "client-secret")?;
///
/// let stories = client
///     .stories()
///     .get_stories(
///         &GetStoriesRequest {
///             workspace_id: Some(11112222),
///             ..Default::default()
///         },
///         &[],
///     )
///     .await?;
/// println!("{} stories", stories.len());
/// # Ok(())
/// # }
/// ```
pub struct TapdClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    auth: Auth,
    config: ClientConfig,
}

impl TapdClient {
    /// Create a client that authenticates with a client id and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_basic_auth(client_id, client_secret))
    }

    /// Create a client that authenticates with a personal access token.
    pub fn from_access_token(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_access_token(access_token))
    }

    /// Create a client from `TAPD_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with a custom configuration and the default transport.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Self::with_transport(config, Arc::new(http))
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// The configured timeout only applies to the default transport; a
    /// custom transport is responsible for its own.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let auth = config.auth.clone().ok_or_else(|| {
            Error::Config("no authentication configured; use basic auth or an access token".to_string())
        })?;
        let base_url = config.parsed_base_url()?;

        debug!(base_url = %base_url, auth = auth.kind(), "Created TAPD client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                auth,
                config,
            }),
        })
    }

    /// Get the stories service.
    pub fn stories(&self) -> StoriesService {
        StoriesService::new(self.inner.clone())
    }

    /// Get the bugs service.
    pub fn bugs(&self) -> BugsService {
        BugsService::new(self.inner.clone())
    }

    /// Get the tasks service.
    pub fn tasks(&self) -> TasksService {
        TasksService::new(self.inner.clone())
    }

    /// Get the iterations service.
    pub fn iterations(&self) -> IterationsService {
        IterationsService::new(self.inner.clone())
    }

    /// Get the comments service.
    pub fn comments(&self) -> CommentsService {
        CommentsService::new(self.inner.clone())
    }

    /// Get the workspaces service.
    pub fn workspaces(&self) -> WorkspacesService {
        WorkspacesService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// The normalized base URL (always ends in `/`).
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The configuration the client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Build a request without sending it.
    ///
    /// `path` is resolved against the base URL's own path, so a base of
    /// `https://host/v2/` and a path of `stories` yields `/v2/stories`.
    /// `POST`, `PUT` and `PATCH` encode `payload` as a JSON body; every
    /// other method flattens it into query parameters. Pass `&()` for no
    /// payload.
    pub fn new_request<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
        options: &[RequestOption],
    ) -> Result<reqwest::Request> {
        self.inner.new_request(method, path, payload, options)
    }

    /// Send a request and decode the envelope's `data` into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<(T, Response)> {
        self.inner.send(request).await
    }

    /// Send a request, check the envelope and discard its `data`.
    pub async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        self.inner.round_trip(request).await.map(|(_, response)| response)
    }
}

impl ClientInner {
    pub(crate) fn new_request<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
        options: &[RequestOption],
    ) -> Result<reqwest::Request> {
        // Escapes are kept as written; they only have to decode cleanly.
        urlencoding::decode(path)
            .map_err(|e| Error::encoding(format!("invalid request path `{path}`: {e}")))?;

        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}{}",
            self.base_url.path(),
            path.trim_start_matches('/')
        ));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.config.user_agent.is_empty() {
            let value = HeaderValue::from_str(&self.config.user_agent)
                .map_err(|e| Error::encoding(format!("invalid user agent: {e}")))?;
            headers.insert(USER_AGENT, value);
        }

        let mut body = None;
        if is_mutating(&method) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let encoded = serde_json::to_vec(payload).map_err(Error::encoding)?;
            if encoded != b"null" {
                body = Some(encoded);
            }
        } else {
            let pairs = to_query_pairs(payload)?;
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        self.auth.apply(&mut headers)?;

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        for option in options {
            option.apply(&mut request)?;
        }

        debug!(method = %request.method(), url = %request.url(), "Built request");

        Ok(request)
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<(T, Response)> {
        let (data, response) = self.round_trip(request).await?;
        let value = serde_json::from_value(data).map_err(Error::Decode)?;
        Ok((value, response))
    }

    /// Execute the request, drain the body and check the envelope.
    async fn round_trip(&self, request: reqwest::Request) -> Result<(Value, Response)> {
        let raw = self.transport.execute(request).await?;
        let response = Response::from_reqwest(&raw);
        let body = raw.bytes().await?;

        let envelope: Envelope = serde_json::from_slice(&body).map_err(Error::Decode)?;
        if !envelope.is_success() {
            debug!(
                url = %response.url(),
                http_status = response.status_code(),
                status = envelope.status,
                info = %envelope.info,
                "API returned an error envelope"
            );
            return Err(Error::Api(Box::new(ErrorResponse::new(response, envelope))));
        }

        Ok((envelope.data, response))
    }

    /// Make a GET request with the payload as query parameters.
    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
        options: &[RequestOption],
    ) -> Result<T> {
        let request = self.new_request(Method::GET, path, payload, options)?;
        self.send(request).await.map(|(value, _)| value)
    }

    /// Make a POST request with the payload as a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
        options: &[RequestOption],
    ) -> Result<T> {
        let request = self.new_request(Method::POST, path, payload, options)?;
        self.send(request).await.map(|(value, _)| value)
    }
}

fn is_mutating(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

impl Clone for TapdClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for TapdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapdClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}
