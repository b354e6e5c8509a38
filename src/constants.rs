/// Default number of retry attempts for catalog requests
pub const DEFAULT_RETRIES: u32 = 3;
/// Default backoff factor in seconds, doubled between consecutive retries
pub const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;
/// Default timeout in seconds for catalog requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path segment of the catalog API version; every endpoint lives under it
pub const API_VERSION: &str = "v1";
/// Hostname of the internal container registry, probed first during repository lookup
pub const INTERNAL_REGISTRY: &str = "registry.access.redhat.com";
/// Hostname of the partner container registry, used when a repository is not
/// found in the internal one
pub const PARTNER_REGISTRY: &str = "registry.connect.redhat.com";
/// User agent string used in HTTP requests to identify this client to the catalog
pub const USER_AGENT: &str = "pyxis-client/0.1.0";
