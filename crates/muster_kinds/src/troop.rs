//! Unit templates.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::Kind;

/// Tiers at or above this band as mid.
const TIER_MID_MIN: u32 = 3;
/// Tiers at or above this band as high.
const TIER_HIGH_MIN: u32 = 5;

/// Battlefield formation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formation {
    /// Foot melee.
    Infantry,
    /// Foot ranged.
    Ranged,
    /// Mounted melee.
    Cavalry,
    /// Mounted ranged.
    HorseArcher,
}

/// Attribute record for one unit template, owned by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Troop {
    /// Stable identifier (`imperial_legionary`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formation class.
    pub formation: Formation,
    /// Troop tier; always defined.
    pub tier: u32,
    /// Daily wage.
    pub wage: i64,
    /// Whether this template represents a hero rather than a line troop.
    pub is_hero_unit: bool,
}

impl Troop {
    /// Creates a tier-1 line troop of the given formation.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, formation: Formation) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            formation,
            tier: 1,
            wage: 1,
            is_hero_unit: false,
        }
    }

    /// Sets tier and wage.
    #[must_use]
    pub fn with_tier(mut self, tier: u32, wage: i64) -> Self {
        self.tier = tier;
        self.wage = wage;
        self
    }

    /// Marks the template as a hero unit.
    #[must_use]
    pub fn hero_unit(mut self) -> Self {
        self.is_hero_unit = true;
        self
    }
}

bitflags! {
    /// Classification mask for unit templates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TroopFlags: u16 {
        /// Foot melee.
        const INFANTRY = 1 << 0;
        /// Foot ranged.
        const RANGED = 1 << 1;
        /// Mounted melee.
        const CAVALRY = 1 << 2;
        /// Mounted ranged.
        const HORSE_ARCHER = 1 << 3;
        /// Any mounted formation.
        const MOUNTED = 1 << 4;
        /// Hero template rather than a line troop.
        const HERO_UNIT = 1 << 5;
        /// Tier 2 and below.
        const TIER_LOW = 1 << 6;
        /// Tier 3 or 4.
        const TIER_MID = 1 << 7;
        /// Tier 5 and up.
        const TIER_HIGH = 1 << 8;
    }
}

const ALIASES: &[(&str, TroopFlags)] = &[
    ("infantry", TroopFlags::INFANTRY),
    ("foot", TroopFlags::INFANTRY),
    ("ranged", TroopFlags::RANGED),
    ("archer", TroopFlags::RANGED),
    ("cavalry", TroopFlags::CAVALRY),
    ("horsearcher", TroopFlags::HORSE_ARCHER),
    ("mounted", TroopFlags::MOUNTED),
    ("hero", TroopFlags::HERO_UNIT),
    ("lowtier", TroopFlags::TIER_LOW),
    ("midtier", TroopFlags::TIER_MID),
    ("hightier", TroopFlags::TIER_HIGH),
    ("elite", TroopFlags::TIER_HIGH),
];

/// The troop kind marker.
pub struct Troops;

impl Kind for Troops {
    type Entity = Troop;
    type Flags = TroopFlags;
    const NAME: &'static str = "troop";

    fn id(entity: &Troop) -> &str {
        &entity.id
    }

    fn display_name(entity: &Troop) -> &str {
        &entity.name
    }

    fn classify(entity: &Troop) -> TroopFlags {
        let mut flags = match entity.formation {
            Formation::Infantry => TroopFlags::INFANTRY,
            Formation::Ranged => TroopFlags::RANGED,
            Formation::Cavalry => TroopFlags::CAVALRY | TroopFlags::MOUNTED,
            Formation::HorseArcher => TroopFlags::HORSE_ARCHER | TroopFlags::MOUNTED,
        };
        if entity.is_hero_unit {
            flags |= TroopFlags::HERO_UNIT;
        }
        // Tier is always defined for troops, so exactly one band is always set.
        flags |= if entity.tier < TIER_MID_MIN {
            TroopFlags::TIER_LOW
        } else if entity.tier < TIER_HIGH_MIN {
            TroopFlags::TIER_MID
        } else {
            TroopFlags::TIER_HIGH
        };
        flags
    }

    fn aliases() -> &'static [(&'static str, TroopFlags)] {
        ALIASES
    }

    fn compare_field(key: &str, a: &Troop, b: &Troop) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "tier" => Some(a.tier.cmp(&b.tier)),
            "wage" => Some(a.wage.cmp(&b.wage)),
            _ => None,
        }
    }
}
