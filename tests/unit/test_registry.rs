use pyxis_client::constants::{INTERNAL_REGISTRY, PARTNER_REGISTRY};
use pyxis_client::model::registry::{RegistryLookup, RegistryProbe};

#[test]
fn default_lookup_probes_internal_then_partner() {
    let probes = RegistryLookup::default().probes();

    assert_eq!(
        probes,
        vec![
            RegistryProbe {
                registry: INTERNAL_REGISTRY.to_string(),
                fallback_on_not_found: true,
            },
            RegistryProbe {
                registry: PARTNER_REGISTRY.to_string(),
                fallback_on_not_found: false,
            },
        ]
    );
}

#[test]
fn internal_only_pins_internal_without_fallback() {
    let probes = RegistryLookup::InternalOnly.probes();

    assert_eq!(probes.len(), 1);
    assert_eq!(probes[0].registry, INTERNAL_REGISTRY);
    assert!(!probes[0].fallback_on_not_found);
}

#[test]
fn partner_only_pins_partner_without_fallback() {
    let probes = RegistryLookup::PartnerOnly.probes();

    assert_eq!(probes.len(), 1);
    assert_eq!(probes[0].registry, PARTNER_REGISTRY);
    assert!(!probes[0].fallback_on_not_found);
}

#[test]
fn custom_registry_pins_given_hostname() {
    let probes = RegistryLookup::Custom("some.registry.com".to_string()).probes();

    assert_eq!(probes.len(), 1);
    assert_eq!(probes[0].registry, "some.registry.com");
    assert!(!probes[0].fallback_on_not_found);
}

#[test]
fn default_variant_is_internal_then_partner() {
    assert_eq!(RegistryLookup::default(), RegistryLookup::InternalThenPartner);
}
