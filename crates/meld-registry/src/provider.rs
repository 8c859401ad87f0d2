//! Provider state, events, and the field-wise merge instance

use std::collections::BTreeSet;

use meld_core::LogicalTime;
use meld_lattice::{merge, JoinSemilattice, Lww, LwwLattice};
use meld_temporal::{prefix_up_to, DomainEvent};
use serde::{Deserialize, Serialize};

/// A practice address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Domain events observed about a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    NameUpdated { name: String },
    AddressMoved { address: Address },
    LicenseRenewed { license: String, expiry: String },
    NetworkChanged { network: String, active: bool },
}

/// A provider's mergeable state: one LWW register per attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderState {
    pub name: Lww<String>,
    pub address: Lww<Address>,
    pub license: Lww<String>,
    pub networks: Lww<BTreeSet<String>>,
}

impl ProviderState {
    /// The state before any event, every field stamped at the epoch.
    pub fn initial() -> Self {
        ProviderState {
            name: Lww::new(String::new(), LogicalTime::ZERO),
            address: Lww::new(Address::default(), LogicalTime::ZERO),
            license: Lww::new(String::new(), LogicalTime::ZERO),
            networks: Lww::new(BTreeSet::new(), LogicalTime::ZERO),
        }
    }
}

/// Field-wise semilattice over the whole provider state.
///
/// Each field joins independently through its own LWW instance, so the
/// composite inherits the semilattice laws field by field.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProviderLattice;

impl JoinSemilattice<ProviderState> for ProviderLattice {
    fn join(&self, x: ProviderState, y: ProviderState) -> ProviderState {
        let lww = LwwLattice;
        ProviderState {
            name: lww.join(x.name, y.name),
            address: lww.join(x.address, y.address),
            license: lww.join(x.license, y.license),
            networks: lww.join(x.networks, y.networks),
        }
    }
}

/// Merge two independently-evolved provider replicas.
pub fn merge_provider_states(local: ProviderState, remote: ProviderState) -> ProviderState {
    merge(&ProviderLattice, local, remote)
}

/// Apply one event, stamping the updated field with the event's own
/// timestamp. Deterministic: replaying the same log yields the same
/// state on every replica.
pub fn apply_provider_event(
    state: ProviderState,
    event: &ProviderEvent,
    timestamp: LogicalTime,
) -> ProviderState {
    match event {
        ProviderEvent::NameUpdated { name } => ProviderState {
            name: Lww::new(name.clone(), timestamp),
            ..state
        },
        ProviderEvent::AddressMoved { address } => ProviderState {
            address: Lww::new(address.clone(), timestamp),
            ..state
        },
        ProviderEvent::LicenseRenewed { license, .. } => ProviderState {
            license: Lww::new(license.clone(), timestamp),
            ..state
        },
        ProviderEvent::NetworkChanged { network, active } => {
            let mut networks = state.networks.value.clone();
            if *active {
                networks.insert(network.clone());
            } else {
                networks.remove(network);
            }
            ProviderState {
                networks: Lww::new(networks, timestamp),
                ..state
            }
        }
    }
}

/// Fold a provider event log, each event applied at its own timestamp.
pub fn fold_provider_log(log: &[DomainEvent<ProviderEvent>]) -> ProviderState {
    log.iter().fold(ProviderState::initial(), |state, event| {
        apply_provider_event(state, &event.payload, event.timestamp)
    })
}

/// Provider state as of instant t.
pub fn provider_state_at(log: &[DomainEvent<ProviderEvent>], t: LogicalTime) -> ProviderState {
    fold_provider_log(&prefix_up_to(log, t))
}
