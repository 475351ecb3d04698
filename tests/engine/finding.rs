//! Finder tier precedence and ambiguity.

use muster_engine::{SliceIndex, find_single};
use muster_foundation::ResolveError;
use muster_kinds::{Kingdom, Kingdoms, Settlement, SettlementKind, Settlements};

fn settlements() -> Vec<Settlement> {
    vec![
        Settlement::new("town_a", "Old Keep", SettlementKind::Town),
        Settlement::new("town_b", "New Keep", SettlementKind::Town),
        Settlement::new("village_k", "Keep Hollow", SettlementKind::Village),
    ]
}

#[test]
fn exact_id_short_circuits_everything() {
    let settlements = settlements();
    let index = SliceIndex::<Settlements>::new(&settlements);
    let found = find_single::<Settlements, _>(&index, "town_b").unwrap();
    assert_eq!(found.name, "New Keep");
}

#[test]
fn exact_name_beats_substring() {
    let settlements = settlements();
    let index = SliceIndex::<Settlements>::new(&settlements);
    // "old keep" is an exact (case-insensitive) name and also a substring
    // of nothing else; must resolve via the exact tier.
    let found = find_single::<Settlements, _>(&index, "old keep").unwrap();
    assert_eq!(found.id, "town_a");
}

#[test]
fn substring_over_names_only_for_kinds_without_id_search() {
    let settlements = settlements();
    let index = SliceIndex::<Settlements>::new(&settlements);
    // "town" substring-matches no display name, and settlements do not
    // search ids in the substring tier.
    let err = find_single::<Settlements, _>(&index, "town").unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn shared_substring_is_ambiguous_with_all_candidates() {
    let settlements = settlements();
    let index = SliceIndex::<Settlements>::new(&settlements);
    let err = find_single::<Settlements, _>(&index, "keep").unwrap_err();
    match err {
        ResolveError::Ambiguous { candidates, .. } => {
            assert_eq!(candidates.len(), 3);
            assert_eq!(candidates[0].id, "town_a");
        }
        ResolveError::NotFound { .. } => panic!("expected ambiguity"),
    }
}

#[test]
fn resolution_works_across_kinds() {
    let kingdoms = vec![
        Kingdom::new("vlandia", "Vlandia"),
        Kingdom::new("battania", "Battania"),
    ];
    let index = SliceIndex::<Kingdoms>::new(&kingdoms);
    let found = find_single::<Kingdoms, _>(&index, "VLAND").unwrap();
    assert_eq!(found.id, "vlandia");
}
