//! Flag-name lookup against the real kind masks.

use muster_foundation::{flag_named, flag_names};
use muster_kinds::{HeroFlags, SettlementFlags, TroopFlags};

#[test]
fn every_declared_flag_is_resolvable_by_its_own_name() {
    for name in flag_names::<SettlementFlags>() {
        assert!(
            flag_named::<SettlementFlags>(name).is_some(),
            "flag {name} did not resolve"
        );
    }
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(
        flag_named::<SettlementFlags>("under_siege"),
        Some(SettlementFlags::UNDER_SIEGE)
    );
    assert_eq!(
        flag_named::<HeroFlags>("Player_Clan"),
        Some(HeroFlags::PLAYER_CLAN)
    );
}

#[test]
fn lookup_rejects_names_from_other_kinds() {
    // Masks are distinct types; a hero flag name means nothing to troops.
    assert_eq!(flag_named::<TroopFlags>("prisoner"), None);
}

#[test]
fn name_enumeration_is_exhaustive() {
    let names: Vec<_> = flag_names::<TroopFlags>().collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"HORSE_ARCHER"));
}
