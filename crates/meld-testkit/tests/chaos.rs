//! Convergence under message reordering
//!
//! A fixed set of eight timestamped provider events is delivered to
//! replicas in random orders. Folding after a timestamp sort must
//! reproduce the canonical state for every permutation; folding in
//! arrival order with arrival-derived timestamps must diverge for at
//! least one. Merging independently folded replicas must agree with
//! the canonical state under any association.

use meld_core::LogicalTime;
use meld_lattice::join_all;
use meld_registry::{
    fold_provider_log, merge_provider_states, Address, ProviderEvent, ProviderLattice,
    ProviderState,
};
use meld_temporal::{DomainEvent, EventLog};
use meld_testkit::{restamp_by_arrival, run_permutations, shuffle_log, sort_by_timestamp, ChaosConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn downtown() -> Address {
    Address {
        street: "100 Downtown Ave".to_string(),
        city: "Metropolis".to_string(),
        state: "NY".to_string(),
        zip: "10001".to_string(),
    }
}

fn uptown() -> Address {
    Address {
        street: "500 Uptown Blvd".to_string(),
        city: "Metropolis".to_string(),
        state: "NY".to_string(),
        zip: "10025".to_string(),
    }
}

fn canonical_events() -> EventLog<ProviderEvent> {
    vec![
        DomainEvent::new(
            LogicalTime::new(10),
            ProviderEvent::NameUpdated {
                name: "Dr. Jane Doe".to_string(),
            },
        ),
        DomainEvent::new(
            LogicalTime::new(20),
            ProviderEvent::AddressMoved {
                address: downtown(),
            },
        ),
        DomainEvent::new(
            LogicalTime::new(30),
            ProviderEvent::LicenseRenewed {
                license: "MD-98765".to_string(),
                expiry: "2027-01-01".to_string(),
            },
        ),
        DomainEvent::new(
            LogicalTime::new(40),
            ProviderEvent::NetworkChanged {
                network: "BlueCross".to_string(),
                active: true,
            },
        ),
        DomainEvent::new(
            LogicalTime::new(50),
            ProviderEvent::AddressMoved { address: uptown() },
        ),
        DomainEvent::new(
            LogicalTime::new(60),
            ProviderEvent::NetworkChanged {
                network: "Aetna".to_string(),
                active: true,
            },
        ),
        DomainEvent::new(
            LogicalTime::new(70),
            ProviderEvent::NetworkChanged {
                network: "BlueCross".to_string(),
                active: false,
            },
        ),
        DomainEvent::new(
            LogicalTime::new(80),
            ProviderEvent::LicenseRenewed {
                license: "MD-98765-R".to_string(),
                expiry: "2029-01-01".to_string(),
            },
        ),
    ]
}

fn canonical_state() -> ProviderState {
    fold_provider_log(&sort_by_timestamp(&canonical_events()))
}

#[test]
fn timestamp_sorted_folds_converge_for_every_permutation() {
    let events = canonical_events();
    let canonical = canonical_state();

    let report = run_permutations(
        &events,
        &ChaosConfig::default(),
        |permuted| fold_provider_log(&sort_by_timestamp(permuted)),
        &canonical,
        |a, b| a == b,
    );

    assert!(report.all_converged());
    assert_eq!(report.converged, report.runs);
}

#[test]
fn arrival_stamped_folds_diverge() {
    let events = canonical_events();
    let canonical = canonical_state();

    // A replica that stamps events with its own clock as they arrive
    // bakes the delivery order into the state.
    let report = run_permutations(
        &events,
        &ChaosConfig::default(),
        |permuted| fold_provider_log(&restamp_by_arrival(permuted)),
        &canonical,
        |a, b| a == b,
    );

    assert!(report.diverged > 0);
}

#[test]
fn replicas_converge_after_pairwise_merge() {
    let events = canonical_events();
    let canonical = canonical_state();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        // Five replicas, each receiving its own delivery order.
        let replicas: Vec<ProviderState> = (0..5)
            .map(|_| fold_provider_log(&sort_by_timestamp(&shuffle_log(&events, &mut rng))))
            .collect();

        for replica in &replicas {
            assert_eq!(replica, &canonical);
        }

        // Left-to-right pairwise merge.
        let mut merged = replicas[0].clone();
        for replica in &replicas[1..] {
            merged = merge_provider_states(merged, replica.clone());
        }
        assert_eq!(merged, canonical);

        // Any other association agrees.
        let mut reversed = replicas[4].clone();
        for replica in replicas[..4].iter().rev() {
            reversed = merge_provider_states(replica.clone(), reversed);
        }
        assert_eq!(reversed, canonical);

        let folded = join_all(&ProviderLattice, replicas).expect("non-empty replicas");
        assert_eq!(folded, canonical);
    }
}
