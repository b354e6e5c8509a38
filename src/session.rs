use crate::auth::PyxisAuth;
use crate::config::PyxisConfig;
use crate::constants::{
    API_VERSION, DEFAULT_BACKOFF_FACTOR, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::PyxisError;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP session bound to the catalog base URL
///
/// Owns the configured transport and the retry policy. The configuration is
/// immutable once [`SessionBuilder::build`] returns; authentication has
/// already been applied at that point. The underlying `reqwest::Client` is
/// reference-counted and safe to share, so one session can serve sequential
/// or concurrent calls alike.
pub struct PyxisSession {
    http_client: Client,
    base_url: String,
    retries: u32,
    backoff_factor: f64,
}

impl PyxisSession {
    /// Starts building a session for the given catalog hostname
    pub fn builder(hostname: &str) -> SessionBuilder<'static> {
        SessionBuilder::new(hostname)
    }

    /// Makes a GET request to a path relative to the catalog base URL
    ///
    /// # Arguments
    /// * `path` - Endpoint path, e.g. `operators/indices`
    /// * `params` - Optional query parameters
    /// * `headers` - Optional extra request headers
    pub async fn get(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<Response, PyxisError> {
        self.request(Method::GET, path, params, None, headers).await
    }

    /// Makes a POST request to a path relative to the catalog base URL
    ///
    /// # Arguments
    /// * `path` - Endpoint path, e.g. `signatures`
    /// * `body` - Optional raw request body, sent as-is
    /// * `headers` - Optional extra request headers
    pub async fn post(
        &self,
        path: &str,
        body: Option<String>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<Response, PyxisError> {
        self.request(Method::POST, path, None, body, headers).await
    }

    /// Sends one request, retrying on transport errors and retryable statuses
    ///
    /// Sleeps `backoff_factor * 2^(attempt - 1)` seconds between attempts.
    /// When retries exhaust on a retryable status the last response is
    /// returned for the caller to interpret; exhausted transport errors
    /// propagate unmodified.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<String>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<Response, PyxisError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!("{} {}", method, url);

            let mut request = self.http_client.request(method.clone(), &url);
            if let Some(params) = params {
                request = request.query(params);
            }
            if let Some(headers) = headers {
                for (name, value) in headers {
                    request = request.header(*name, *value);
                }
            }
            if let Some(body) = &body {
                request = request.body(body.clone());
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!("Response status: {}", status);
                    if !is_retryable_status(status) || attempt > self.retries {
                        return Ok(response);
                    }
                    warn!(
                        "Retryable status {} for {} (attempt {} of {})",
                        status,
                        url,
                        attempt,
                        self.retries + 1
                    );
                }
                Err(e) => {
                    if attempt > self.retries {
                        return Err(e.into());
                    }
                    warn!(
                        "Request to {} failed: {} (attempt {} of {})",
                        url,
                        e,
                        attempt,
                        self.retries + 1
                    );
                }
            }

            let delay = self.backoff_factor * 2f64.powi(attempt as i32 - 1);
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }
    }
}

/// Statuses the session retries: server errors and too-many-requests
fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Builder for [`PyxisSession`]
///
/// Authentication is a construction-time concern: the strategy passed to
/// [`SessionBuilder::auth`] configures the transport before the session
/// exists, so no request can ever be sent through a partially configured
/// session.
pub struct SessionBuilder<'a> {
    hostname: String,
    retries: u32,
    backoff_factor: f64,
    verify: bool,
    timeout_secs: u64,
    auth: Option<&'a dyn PyxisAuth>,
}

impl<'a> SessionBuilder<'a> {
    /// Creates a builder with the crate default policy values
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            retries: DEFAULT_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            verify: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth: None,
        }
    }

    /// Creates a builder pre-populated from a configuration
    pub fn from_config(config: &PyxisConfig) -> Self {
        Self {
            hostname: config.hostname.clone(),
            retries: config.retries,
            backoff_factor: config.backoff_factor,
            verify: config.verify,
            timeout_secs: config.timeout_secs,
            auth: None,
        }
    }

    /// Sets the number of retry attempts
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the backoff factor in seconds
    pub fn backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    /// Enables or disables TLS certificate verification
    ///
    /// Disabling verification suppresses certificate errors entirely. This is
    /// an insecure opt-in meant for test instances of the catalog.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Sets the per-attempt request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets the authentication strategy applied when the session is built
    pub fn auth<'b>(self, auth: &'b dyn PyxisAuth) -> SessionBuilder<'b> {
        SessionBuilder {
            hostname: self.hostname,
            retries: self.retries,
            backoff_factor: self.backoff_factor,
            verify: self.verify,
            timeout_secs: self.timeout_secs,
            auth: Some(auth),
        }
    }

    /// Builds the session, applying the authentication strategy once
    pub async fn build(self) -> Result<PyxisSession, PyxisError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.timeout_secs));
        if !self.verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(auth) = self.auth {
            builder = auth.configure(builder).await?;
        }
        let http_client = builder.build()?;
        let base_url = format!("{}/{}", self.hostname.trim_end_matches('/'), API_VERSION);

        Ok(PyxisSession {
            http_client,
            base_url,
            retries: self.retries,
            backoff_factor: self.backoff_factor,
        })
    }
}
