//! Status bit-groups and their defaults.

use muster_foundation::Kind;
use muster_kinds::{
    Clans, Cultures, Heroes, Items, Kingdoms, Settlements, Troops,
};

#[test]
fn heroes_default_to_alive() {
    let group = Heroes::status_group().expect("heroes have a status group");
    assert_eq!(group.default, muster_kinds::HeroFlags::ALIVE);
    assert!(group.group.contains(group.default));
}

#[test]
fn clans_and_kingdoms_default_to_active() {
    let clans = Clans::status_group().expect("clans have a status group");
    assert_eq!(clans.default, muster_kinds::ClanFlags::ACTIVE);

    let kingdoms = Kingdoms::status_group().expect("kingdoms have a status group");
    assert_eq!(kingdoms.default, muster_kinds::KingdomFlags::ACTIVE);
}

#[test]
fn other_kinds_have_no_status_group() {
    assert!(Settlements::status_group().is_none());
    assert!(Items::status_group().is_none());
    assert!(Troops::status_group().is_none());
    assert!(Cultures::status_group().is_none());
}
