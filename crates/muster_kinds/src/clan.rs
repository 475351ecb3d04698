//! Factions below kingdom level.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::{Kind, StatusGroup};

/// Tiers below this band as low.
const TIER_MID_MIN: u32 = 3;
/// Tiers at or above this band as high.
const TIER_HIGH_MIN: u32 = 5;

/// Attribute record for one clan, owned and mutated by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clan {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Clan tier; undefined for some bandit groupings.
    pub tier: Option<u32>,
    /// Total military strength.
    pub strength: f64,
    /// Accumulated renown.
    pub renown: f64,
    /// True once the clan has been destroyed.
    pub eliminated: bool,
    /// Whether this is the operator's own clan.
    pub is_player: bool,
    /// Whether this is a minor (mercenary) faction.
    pub minor: bool,
    /// Whether this is a bandit grouping.
    pub bandit: bool,
}

impl Clan {
    /// Creates an active, non-player clan with default attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier: Some(1),
            strength: 0.0,
            renown: 0.0,
            eliminated: false,
            is_player: false,
            minor: false,
            bandit: false,
        }
    }

    /// Sets the tier.
    #[must_use]
    pub fn with_tier(mut self, tier: u32) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Clears the tier, as for untiered bandit groupings.
    #[must_use]
    pub fn untiered(mut self) -> Self {
        self.tier = None;
        self
    }

    /// Sets strength and renown.
    #[must_use]
    pub fn with_power(mut self, strength: f64, renown: f64) -> Self {
        self.strength = strength;
        self.renown = renown;
        self
    }

    /// Marks the clan as eliminated.
    #[must_use]
    pub fn destroyed(mut self) -> Self {
        self.eliminated = true;
        self
    }
}

bitflags! {
    /// Classification mask for clans.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClanFlags: u16 {
        /// Still in play.
        const ACTIVE = 1 << 0;
        /// Destroyed.
        const ELIMINATED = 1 << 1;
        /// The operator's own clan.
        const PLAYER = 1 << 2;
        /// Minor (mercenary) faction.
        const MINOR = 1 << 3;
        /// Bandit grouping.
        const BANDIT = 1 << 4;
        /// Tier below 3.
        const TIER_LOW = 1 << 5;
        /// Tier 3 or 4.
        const TIER_MID = 1 << 6;
        /// Tier 5 and up.
        const TIER_HIGH = 1 << 7;
    }
}

const ALIASES: &[(&str, ClanFlags)] = &[
    ("active", ClanFlags::ACTIVE),
    ("eliminated", ClanFlags::ELIMINATED),
    ("destroyed", ClanFlags::ELIMINATED),
    ("player", ClanFlags::PLAYER),
    ("mine", ClanFlags::PLAYER),
    ("minor", ClanFlags::MINOR),
    ("mercenary", ClanFlags::MINOR),
    ("bandit", ClanFlags::BANDIT),
    ("lowtier", ClanFlags::TIER_LOW),
    ("midtier", ClanFlags::TIER_MID),
    ("hightier", ClanFlags::TIER_HIGH),
];

/// The clan kind marker.
pub struct Clans;

impl Kind for Clans {
    type Entity = Clan;
    type Flags = ClanFlags;
    const NAME: &'static str = "clan";

    fn id(entity: &Clan) -> &str {
        &entity.id
    }

    fn display_name(entity: &Clan) -> &str {
        &entity.name
    }

    fn classify(entity: &Clan) -> ClanFlags {
        let mut flags = if entity.eliminated {
            ClanFlags::ELIMINATED
        } else {
            ClanFlags::ACTIVE
        };
        if entity.is_player {
            flags |= ClanFlags::PLAYER;
        }
        if entity.minor {
            flags |= ClanFlags::MINOR;
        }
        if entity.bandit {
            flags |= ClanFlags::BANDIT;
        }
        // Exactly one band when tier is defined, none otherwise.
        if let Some(tier) = entity.tier {
            flags |= if tier < TIER_MID_MIN {
                ClanFlags::TIER_LOW
            } else if tier < TIER_HIGH_MIN {
                ClanFlags::TIER_MID
            } else {
                ClanFlags::TIER_HIGH
            };
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, ClanFlags)] {
        ALIASES
    }

    fn status_group() -> Option<StatusGroup<ClanFlags>> {
        Some(StatusGroup {
            group: ClanFlags::ACTIVE | ClanFlags::ELIMINATED,
            default: ClanFlags::ACTIVE,
        })
    }

    fn compare_field(key: &str, a: &Clan, b: &Clan) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "tier" => Some(a.tier.cmp(&b.tier)),
            "strength" => Some(a.strength.total_cmp(&b.strength)),
            "renown" => Some(a.renown.total_cmp(&b.renown)),
            _ => None,
        }
    }
}
