//! Cross-kind classification invariants.

use muster_foundation::Kind;
use muster_kinds::{
    Clan, ClanFlags, Clans, Item, ItemCategory, ItemFlags, Items, Settlement, SettlementFlags,
    SettlementKind, Settlements, Troop, TroopFlags, Troops,
};

#[test]
fn settlement_bands_follow_the_thresholds() {
    let poor = Settlement::new("v", "V", SettlementKind::Village).with_prosperity(2000.0);
    let modest = Settlement::new("t", "T", SettlementKind::Town).with_prosperity(5000.0);
    let rich = Settlement::new("u", "U", SettlementKind::Town).with_prosperity(6000.0);

    assert!(Settlements::classify(&poor).contains(SettlementFlags::POOR));
    assert!(Settlements::classify(&modest).contains(SettlementFlags::MODEST));
    assert!(Settlements::classify(&rich).contains(SettlementFlags::RICH));
}

#[test]
fn band_is_absent_when_the_attribute_is_undefined() {
    let hideout = Settlement::new("h", "H", SettlementKind::Hideout);
    let bands = SettlementFlags::POOR | SettlementFlags::MODEST | SettlementFlags::RICH;
    assert!((Settlements::classify(&hideout) & bands).is_empty());

    let untiered = Clan::new("c", "C").untiered();
    let clan_bands = ClanFlags::TIER_LOW | ClanFlags::TIER_MID | ClanFlags::TIER_HIGH;
    assert!((Clans::classify(&untiered) & clan_bands).is_empty());

    let unpriced = Item::new("i", "I", ItemCategory::Weapon);
    let item_bands = ItemFlags::CHEAP | ItemFlags::STANDARD | ItemFlags::EXPENSIVE;
    assert!((Items::classify(&unpriced) & item_bands).is_empty());
}

#[test]
fn derived_flags_accompany_their_sources() {
    let town = Settlement::new("t", "T", SettlementKind::Town);
    let flags = Settlements::classify(&town);
    assert!(flags.contains(SettlementFlags::TOWN | SettlementFlags::FORTIFIED));

    let lancer = Troop::new("l", "L", muster_kinds::Formation::Cavalry);
    let flags = Troops::classify(&lancer);
    assert!(flags.contains(TroopFlags::CAVALRY | TroopFlags::MOUNTED));
}

#[test]
fn repeated_classification_is_bit_identical() {
    let clan = Clan::new("dey_meroc", "dey Meroc")
        .with_tier(4)
        .with_power(850.0, 1200.0);
    let first = Clans::classify(&clan);
    for _ in 0..10 {
        assert_eq!(Clans::classify(&clan), first);
    }
}
