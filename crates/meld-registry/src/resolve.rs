//! Entity resolution across bounded contexts
//!
//! Each context contributes a fragment of partial provider records
//! keyed by NPI. Resolution merges them with a shallow overlay: a
//! field present in the incoming record wins, otherwise the existing
//! value is kept.

use std::collections::BTreeSet;

use meld_fragment::{merge_fragments, Fragment};

use crate::Address;

/// A partial view of a provider, as one bounded context knows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderRecord {
    pub name: Option<String>,
    pub address: Option<Address>,
    pub license: Option<String>,
    pub networks: Option<BTreeSet<String>>,
}

/// Shallow overlay combine: incoming fields win when present.
pub fn overlay_provider_records(
    existing: ProviderRecord,
    incoming: ProviderRecord,
) -> ProviderRecord {
    ProviderRecord {
        name: incoming.name.or(existing.name),
        address: incoming.address.or(existing.address),
        license: incoming.license.or(existing.license),
        networks: incoming.networks.or(existing.networks),
    }
}

/// Resolve provider fragments from any number of contexts into one
/// record per NPI.
pub fn resolve_providers(
    fragments: &[Fragment<String, ProviderRecord>],
) -> Fragment<String, ProviderRecord> {
    merge_fragments(fragments, overlay_provider_records)
}

/// What the EHR context knows: name and practice address.
pub fn ehr_fragment(npi: &str, name: &str, address: Address) -> Fragment<String, ProviderRecord> {
    [(
        npi.to_string(),
        ProviderRecord {
            name: Some(name.to_string()),
            address: Some(address),
            ..ProviderRecord::default()
        },
    )]
    .into_iter()
    .collect()
}

/// What the credentialing context knows: name and license.
pub fn credentialing_fragment(
    npi: &str,
    name: &str,
    license: &str,
) -> Fragment<String, ProviderRecord> {
    [(
        npi.to_string(),
        ProviderRecord {
            name: Some(name.to_string()),
            license: Some(license.to_string()),
            ..ProviderRecord::default()
        },
    )]
    .into_iter()
    .collect()
}

/// What the contracting context knows: network participation.
pub fn contracting_fragment(
    npi: &str,
    networks: BTreeSet<String>,
) -> Fragment<String, ProviderRecord> {
    [(
        npi.to_string(),
        ProviderRecord {
            networks: Some(networks),
            ..ProviderRecord::default()
        },
    )]
    .into_iter()
    .collect()
}
