//! Sort dispatch through the full query path.

use muster_engine::{MatchMode, run};
use muster_kinds::{Clan, Clans, Troop, Troops};

fn clans() -> Vec<Clan> {
    vec![
        Clan::new("dey_arromanc", "dey Arromanc")
            .with_tier(5)
            .with_power(900.0, 2400.0),
        Clan::new("dey_meroc", "dey Meroc")
            .with_tier(3)
            .with_power(1200.0, 1100.0),
        Clan::new("dey_cortain", "dey Cortain")
            .with_tier(1)
            .with_power(300.0, 150.0),
    ]
}

fn ids(result: &[&Clan]) -> Vec<String> {
    result.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn numeric_field_sort_descending() {
    let clans = clans();
    let result = run::<Clans, _, _>(&clans, &["sort:strength:desc"], MatchMode::All);
    assert_eq!(ids(&result), vec!["dey_meroc", "dey_arromanc", "dey_cortain"]);
}

#[test]
fn flag_membership_sort_groups_members_last_ascending() {
    let clans = clans();
    let result = run::<Clans, _, _>(&clans, &["sort:tier_high"], MatchMode::All);
    // Non-members first (by id), then the single TIER_HIGH member.
    assert_eq!(ids(&result), vec!["dey_cortain", "dey_meroc", "dey_arromanc"]);
}

#[test]
fn default_sort_is_id_ascending() {
    let clans = clans();
    let result = run::<Clans, _, _>(&clans, &[] as &[&str], MatchMode::All);
    assert_eq!(ids(&result), vec!["dey_arromanc", "dey_cortain", "dey_meroc"]);
}

#[test]
fn unrecognized_sort_key_falls_back_to_id() {
    let clans = clans();
    let result = run::<Clans, _, _>(&clans, &["sort:valor"], MatchMode::All);
    assert_eq!(ids(&result), vec!["dey_arromanc", "dey_cortain", "dey_meroc"]);
}

#[test]
fn single_element_results_skip_sorting() {
    let troops = vec![Troop::new("spearman", "Spearman", muster_kinds::Formation::Infantry)];
    let result = run::<Troops, _, _>(&troops, &["sort:wage:desc"], MatchMode::All);
    assert_eq!(result.len(), 1);
}
