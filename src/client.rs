//! Public API for the Pyxis container-metadata catalog
//!
//! [`PyxisClient`] wraps a [`PyxisSession`] and exposes the catalog
//! operations: operator index lookup, repository metadata retrieval with
//! registry fallback, and container-signature query/upload. Every method is
//! one stateless request/interpret round trip; retries happen below, in the
//! session.

use crate::auth::{NoAuth, PyxisAuth};
use crate::config::PyxisConfig;
use crate::error::PyxisError;
use crate::model::filter::SignatureFilter;
use crate::model::registry::RegistryLookup;
use crate::model::responses::{DataEnvelope, OperatorIndex, SignatureRecord};
use crate::session::{PyxisSession, SessionBuilder};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// Catalog requests wrapper
///
/// # Example
/// ```ignore
/// use pyxis_client::client::PyxisClient;
/// use pyxis_client::config::PyxisConfig;
///
/// let config = PyxisConfig::with_hostname("https://pyxis.engineering.redhat.com/");
/// let client = PyxisClient::new(config).await?;
/// let indices = client.get_operator_indices("4.5-4.6", None).await?;
/// ```
pub struct PyxisClient {
    session: PyxisSession,
}

impl PyxisClient {
    /// Creates a client whose requests carry no credentials
    pub async fn new(config: PyxisConfig) -> Result<Self, PyxisError> {
        Self::with_auth(config, &NoAuth).await
    }

    /// Creates a client whose transport presents the given credentials
    ///
    /// The authentication strategy is applied exactly once, while the
    /// session transport is built.
    pub async fn with_auth(
        config: PyxisConfig,
        auth: &dyn PyxisAuth,
    ) -> Result<Self, PyxisError> {
        let session = SessionBuilder::from_config(&config).auth(auth).build().await?;
        Ok(Self { session })
    }

    /// Lists index images satisfying versioning and organization conditions
    ///
    /// # Arguments
    /// * `ocp_versions_range` - Supported platform versions range
    /// * `organization` - Optional organization the index content is curated
    ///   for; an empty value is treated as absent and leaves the query
    ///   parameter out entirely
    ///
    /// # Returns
    /// * `Ok(Vec<OperatorIndex>)` - Index images satisfying the conditions
    /// * `Err(PyxisError)` - If the request fails
    pub async fn get_operator_indices(
        &self,
        ocp_versions_range: &str,
        organization: Option<&str>,
    ) -> Result<Vec<OperatorIndex>, PyxisError> {
        let mut params = vec![("ocp_versions_range", ocp_versions_range)];
        if let Some(organization) = organization.filter(|o| !o.is_empty()) {
            params.push(("organization", organization));
        }

        let resp = self
            .session
            .get("operators/indices", Some(params.as_slice()), None)
            .await?;
        let envelope: DataEnvelope<OperatorIndex> = parse_response(resp).await?;
        Ok(envelope.data)
    }

    /// Fetches repository metadata, resolving the registry per `lookup`
    ///
    /// Probes are evaluated in order: a 404 from a fallback-eligible probe
    /// moves on to the next registry, any other failure (or a 404 from a
    /// pinned registry) fails the lookup immediately.
    ///
    /// # Arguments
    /// * `repo_name` - Repository name, may contain slashes
    /// * `lookup` - Registry selection; `RegistryLookup::default()` is the
    ///   internal-then-partner probe sequence
    ///
    /// # Returns
    /// * `Ok(Value)` - The full decoded metadata object
    /// * `Err(PyxisError)` - If every eligible probe fails
    pub async fn get_repository_metadata(
        &self,
        repo_name: &str,
        lookup: &RegistryLookup,
    ) -> Result<Value, PyxisError> {
        for probe in lookup.probes() {
            let path = format!(
                "repositories/registry/{}/repository/{}",
                probe.registry, repo_name
            );
            let resp = self.session.get(&path, None, None).await?;

            if resp.status() == StatusCode::NOT_FOUND && probe.fallback_on_not_found {
                debug!(
                    "Repository {} not found in {}, trying next registry",
                    repo_name, probe.registry
                );
                continue;
            }
            return parse_response(resp).await;
        }

        Err(PyxisError::InvalidInput(String::from(
            "registry probe plan was empty",
        )))
    }

    /// Lists signature metadata matching the given filter
    ///
    /// When the filter has no conditions the bare `signatures` endpoint is
    /// queried, with no `filter=` expression at all.
    ///
    /// # Returns
    /// * `Ok(Vec<SignatureRecord>)` - Signature metadata matching the filter
    /// * `Err(PyxisError)` - If the request fails
    pub async fn get_container_signatures(
        &self,
        filter: &SignatureFilter,
    ) -> Result<Vec<SignatureRecord>, PyxisError> {
        let path = match filter.render() {
            Some(expression) => format!("signatures?filter={expression}"),
            None => String::from("signatures"),
        };

        let resp = self.session.get(&path, None, None).await?;
        let envelope: DataEnvelope<SignatureRecord> = parse_response(resp).await?;
        Ok(envelope.data)
    }

    /// Uploads pre-serialized signature records
    ///
    /// `signatures` must be the JSON encoding of a list of signature
    /// records in the shape the catalog expects. The payload is sent as-is,
    /// without validation or transformation.
    ///
    /// # Returns
    /// * `Ok(Vec<SignatureRecord>)` - The created records, with
    ///   server-populated fields filled in
    /// * `Err(PyxisError)` - If the upload fails; the error message carries
    ///   the server's `detail` text when present
    pub async fn upload_signatures(
        &self,
        signatures: &str,
    ) -> Result<Vec<SignatureRecord>, PyxisError> {
        let headers = [("Content-Type", "application/json")];
        let resp = self
            .session
            .post("signatures", Some(signatures.to_string()), Some(&headers))
            .await?;
        parse_response(resp).await
    }
}

/// Decodes a response body, turning non-2xx statuses into enriched errors
///
/// The error message is the default status line followed by the server's
/// `detail` field when the body decodes to an object carrying one, or the
/// raw body text otherwise.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, PyxisError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body.get("detail").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(text);
        error!("Request failed with status {}: {}", status, detail);
        return Err(PyxisError::Http {
            status,
            message: format!(
                "{} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                detail
            ),
        });
    }

    serde_json::from_str(&text).map_err(PyxisError::from)
}
