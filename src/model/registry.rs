use crate::constants::{INTERNAL_REGISTRY, PARTNER_REGISTRY};

/// Registry selection for repository metadata lookup
///
/// The default probes the internal registry and moves on to the partner
/// registry only when the repository is not found there. The other variants
/// pin the lookup to a single registry; a miss on a pinned registry is a
/// plain error, never a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistryLookup {
    /// Probe the internal registry first, then the partner registry on 404
    #[default]
    InternalThenPartner,
    /// Query only the internal registry
    InternalOnly,
    /// Query only the partner registry
    PartnerOnly,
    /// Query only the given registry hostname
    Custom(String),
}

/// One step of a repository lookup plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryProbe {
    /// Registry hostname to query
    pub registry: String,
    /// Whether a not-found response moves on to the next probe instead of failing
    pub fallback_on_not_found: bool,
}

impl RegistryLookup {
    /// Resolves the selection into an ordered probe sequence
    ///
    /// The sequence is evaluated front to back, terminating on the first
    /// success or the first failure that is not a fallback-eligible 404.
    pub fn probes(&self) -> Vec<RegistryProbe> {
        match self {
            RegistryLookup::InternalThenPartner => vec![
                RegistryProbe {
                    registry: INTERNAL_REGISTRY.to_string(),
                    fallback_on_not_found: true,
                },
                RegistryProbe {
                    registry: PARTNER_REGISTRY.to_string(),
                    fallback_on_not_found: false,
                },
            ],
            RegistryLookup::InternalOnly => vec![RegistryProbe {
                registry: INTERNAL_REGISTRY.to_string(),
                fallback_on_not_found: false,
            }],
            RegistryLookup::PartnerOnly => vec![RegistryProbe {
                registry: PARTNER_REGISTRY.to_string(),
                fallback_on_not_found: false,
            }],
            RegistryLookup::Custom(registry) => vec![RegistryProbe {
                registry: registry.clone(),
                fallback_on_not_found: false,
            }],
        }
    }
}
