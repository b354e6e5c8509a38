use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope wrapping list responses from the catalog
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// Records of the returned page
    pub data: Vec<T>,
}

/// An operator index image entry
///
/// The catalog returns more fields than callers rely on; anything without a
/// stable schema lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorIndex {
    /// Pull path of the index image
    pub path: String,
    /// Platform version range the index supports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocp_version: Option<String>,
    /// Organization the index content is curated for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Remaining server-provided fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signature metadata for a container image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignatureRecord {
    /// Server-assigned record id, populated on upload
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Digest of the signed image manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_digest: Option<String>,
    /// Pull reference of the image the signature covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Repository the signed image lives in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Id of the key the signature was created with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_key_id: Option<String>,
    /// Encoded signature payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_data: Option<String>,
    /// Remaining server-provided fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
