//! End-to-end console scenarios across layers.

use muster_engine::{MatchMode, SliceIndex, find_single, run};
use muster_foundation::ResolveError;
use muster_kinds::{Hero, Heroes, Settlement, SettlementKind, Settlements};

/// The canonical three-settlement fixture.
fn settlements() -> Vec<Settlement> {
    vec![
        Settlement::new("town_a", "Old Keep", SettlementKind::Castle)
            .with_culture("empire")
            .with_prosperity(2000.0),
        Settlement::new("town_b", "New Keep", SettlementKind::Town)
            .with_culture("vlandia")
            .with_prosperity(5000.0),
        Settlement::new("hideout_x", "Bandit Den", SettlementKind::Hideout),
    ]
}

#[test]
fn keyword_narrows_a_substring_query() {
    let settlements = settlements();
    // "keep" matches Old Keep and New Keep; only Old Keep carries EMPIRE.
    let result = run::<Settlements, _, _>(&settlements, &["keep", "empire"], MatchMode::All);
    let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["town_a"]);
}

#[test]
fn sort_directive_orders_the_substring_hits() {
    let settlements = settlements();
    // Ordinal "Old Keep" > "New Keep", so descending puts Old Keep first.
    let result =
        run::<Settlements, _, _>(&settlements, &["keep", "sort:name:desc"], MatchMode::All);
    let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["town_a", "town_b"]);
}

#[test]
fn finder_identifier_tier_beats_a_colliding_display_name() {
    let heroes = vec![
        Hero::new("lord_1_1", "Henry"),
        Hero::new("comp_9", "lord_1_1"),
    ];
    let index = SliceIndex::<Heroes>::new(&heroes);
    let found = find_single::<Heroes, _>(&index, "lord_1_1").unwrap();
    assert_eq!(found.name, "Henry");
}

#[test]
fn finder_reports_ambiguity_instead_of_guessing() {
    let heroes = vec![
        Hero::new("lord_1_1", "Henry"),
        Hero::new("lord_2_4", "Henry"),
    ];
    let index = SliceIndex::<Heroes>::new(&heroes);
    let err = find_single::<Heroes, _>(&index, "Henry").unwrap_err();
    match err {
        ResolveError::Ambiguous { candidates, .. } => {
            let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["lord_1_1", "lord_2_4"]);
        }
        ResolveError::NotFound { .. } => panic!("expected ambiguity"),
    }
}

#[test]
fn resolved_entities_feed_back_into_queries() {
    let settlements = settlements();
    let index = SliceIndex::<Settlements>::new(&settlements);

    // An operator resolves a settlement, then lists everything sharing
    // its culture keyword.
    let resolved = find_single::<Settlements, _>(&index, "bandit den").unwrap();
    assert_eq!(resolved.id, "hideout_x");

    let fortified = run::<Settlements, _, _>(&settlements, &["fortified"], MatchMode::All);
    assert_eq!(fortified.len(), 2);
    assert!(fortified.iter().all(|s| s.id != resolved.id));
}
