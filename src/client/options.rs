//! Per-request options.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};

use crate::auth::{basic_header, bearer_header};
use crate::{Error, Result};

type ApplyFn = dyn Fn(&mut reqwest::Request) -> Result<()> + Send + Sync;

/// A function applied to an outgoing request after the client's defaults.
///
/// Options run in the order given and mutate the same header map the
/// client's auth wrote to, so a later option replaces an earlier value.
/// [`basic_auth`](Self::basic_auth) and [`access_token`](Self::access_token)
/// override the client's credentials for one call.
///
/// # Example
///
/// ```no_run
/// use tapd_rs::{RequestOption, TapdClient};
/// use tapd_rs::models::GetRolesRequest;
///
/// # async fn example(client: TapdClient) -> tapd_rs::Result<()> {
/// let roles = client
///     .users()
///     .get_roles(
///         &GetRolesRequest { workspace_id: Some(11112222) },
///         &[
///             RequestOption::access_token("personal-token"),
///             RequestOption::header("X-Trace-Id", "abc123"),
///         ],
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestOption(Arc<ApplyFn>);

impl RequestOption {
    /// Wrap an arbitrary request mutation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut reqwest::Request) -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Authenticate this call with a client id and secret.
    pub fn basic_auth(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        Self::new(move |req| {
            let value = basic_header(&client_id, &client_secret)?;
            req.headers_mut().insert(AUTHORIZATION, value);
            Ok(())
        })
    }

    /// Authenticate this call with a personal access token.
    pub fn access_token(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        Self::new(move |req| {
            let value = bearer_header(&access_token)?;
            req.headers_mut().insert(AUTHORIZATION, value);
            Ok(())
        })
    }

    /// Set one header, replacing any existing value.
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        Self::new(move |req| {
            let (name, value) = header_pair(&name, &value)?;
            req.headers_mut().insert(name, value);
            Ok(())
        })
    }

    /// Set several headers, each replacing any existing value.
    pub fn headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let headers: Vec<(String, String)> = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(move |req| {
            for (name, value) in &headers {
                let (name, value) = header_pair(name, value)?;
                req.headers_mut().insert(name, value);
            }
            Ok(())
        })
    }

    /// Edit the header map directly.
    pub fn header_fn<F>(f: F) -> Self
    where
        F: Fn(&mut HeaderMap) + Send + Sync + 'static,
    {
        Self::new(move |req| {
            f(req.headers_mut());
            Ok(())
        })
    }

    /// Override the `User-Agent` for this call.
    pub fn user_agent(user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        Self::new(move |req| {
            let value = HeaderValue::from_str(&user_agent)
                .map_err(|e| Error::encoding(format!("invalid user agent: {e}")))?;
            req.headers_mut().insert(USER_AGENT, value);
            Ok(())
        })
    }

    pub(crate) fn apply(&self, req: &mut reqwest::Request) -> Result<()> {
        (self.0)(req)
    }
}

impl fmt::Debug for RequestOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestOption").finish_non_exhaustive()
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::encoding(format!("invalid header name `{name}`: {e}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| Error::encoding(format!("invalid value for header `{name}`: {e}")))?;
    Ok((header_name, header_value))
}
