//! ALL/ANY matching against parsed criteria.

use muster_engine::{MatchMode, QueryCriteria, matches};
use muster_kinds::{Settlement, SettlementKind, Settlements};

fn empire_castle() -> Settlement {
    Settlement::new("castle_e1", "Epicrotea Castle", SettlementKind::Castle)
        .with_culture("empire")
        .with_prosperity(2500.0)
}

#[test]
fn all_requires_full_containment() {
    let s = empire_castle();
    let c = QueryCriteria::parse::<Settlements, _>(&["castle", "village"], MatchMode::All);
    assert!(!matches::<Settlements>(&s, &c));
}

#[test]
fn any_requires_intersection_only() {
    let s = empire_castle();
    let c = QueryCriteria::parse::<Settlements, _>(&["castle", "village"], MatchMode::Any);
    assert!(matches::<Settlements>(&s, &c));
}

#[test]
fn any_with_no_overlap_fails() {
    let s = empire_castle();
    let c = QueryCriteria::parse::<Settlements, _>(&["village", "rich"], MatchMode::Any);
    assert!(!matches::<Settlements>(&s, &c));
}

#[test]
fn match_mode_does_not_affect_the_search_check() {
    let s = empire_castle();
    let c = QueryCriteria::parse::<Settlements, _>(&["harbor", "castle"], MatchMode::Any);
    assert!(!matches::<Settlements>(&s, &c));
}

#[test]
fn typo_keywords_degrade_to_search_not_failure() {
    let s = empire_castle();
    // "castel" is not an alias; it becomes a search term and simply misses.
    let c = QueryCriteria::parse::<Settlements, _>(&["castel"], MatchMode::All);
    assert!(!matches::<Settlements>(&s, &c));

    // A typo that happens to be a substring of the name still matches.
    let c = QueryCriteria::parse::<Settlements, _>(&["epicro"], MatchMode::All);
    assert!(matches::<Settlements>(&s, &c));
}
