use crate::error::PyxisError;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{ClientBuilder, Identity};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Authentication strategy for the catalog transport
///
/// A strategy gets exactly one shot at the [`ClientBuilder`], while the
/// session is being built. The session never exposes a way to change
/// credentials afterwards, so a half-configured transport is not observable.
/// New variants only need to implement this trait; the client does not have
/// to change.
#[async_trait]
pub trait PyxisAuth: Send + Sync {
    /// Applies this strategy's credentials to the transport under construction
    async fn configure(&self, builder: ClientBuilder) -> Result<ClientBuilder, PyxisError>;
}

/// Default strategy: requests carry no credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl PyxisAuth for NoAuth {
    async fn configure(&self, builder: ClientBuilder) -> Result<ClientBuilder, PyxisError> {
        Ok(builder)
    }
}

/// Client-certificate authentication from a PEM certificate/key file pair
///
/// The files are read when the session is built; every subsequent request
/// presents the resulting identity during the TLS handshake.
#[derive(Debug, Clone)]
pub struct SslAuth {
    cert_path: PathBuf,
    key_path: PathBuf,
}

impl SslAuth {
    /// Creates a certificate strategy from the given file paths
    ///
    /// # Arguments
    /// * `cert_path` - PEM-encoded client certificate
    /// * `key_path` - PEM-encoded PKCS#8 private key
    pub fn new(cert_path: impl AsRef<Path>, key_path: impl AsRef<Path>) -> Self {
        Self {
            cert_path: cert_path.as_ref().to_path_buf(),
            key_path: key_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PyxisAuth for SslAuth {
    async fn configure(&self, builder: ClientBuilder) -> Result<ClientBuilder, PyxisError> {
        let cert = tokio::fs::read(&self.cert_path).await?;
        let key = tokio::fs::read(&self.key_path).await?;
        let identity = Identity::from_pkcs8_pem(&cert, &key)?;
        debug!("Loaded client certificate from {}", self.cert_path.display());
        Ok(builder.identity(identity))
    }
}

/// Bearer-token authentication sent as a default `Authorization` header
#[derive(Debug, Clone)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    /// Creates a token strategy for the given bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl PyxisAuth for TokenAuth {
    async fn configure(&self, builder: ClientBuilder) -> Result<ClientBuilder, PyxisError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| PyxisError::InvalidInput(format!("malformed bearer token: {e}")))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(builder.default_headers(headers))
    }
}
