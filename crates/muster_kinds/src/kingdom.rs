//! Realms.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::{Kind, StatusGroup};

/// Attribute record for one kingdom, owned and mutated by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kingdom {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Total military strength.
    pub strength: f64,
    /// Number of settlements held.
    pub settlement_count: u32,
    /// True once the kingdom has been destroyed.
    pub eliminated: bool,
    /// Whether the operator rules this kingdom.
    pub ruled_by_player: bool,
    /// Whether the kingdom is at war with anyone.
    pub at_war: bool,
}

impl Kingdom {
    /// Creates an active kingdom at peace with default attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            strength: 0.0,
            settlement_count: 0,
            eliminated: false,
            ruled_by_player: false,
            at_war: false,
        }
    }

    /// Sets strength and settlement count.
    #[must_use]
    pub fn with_holdings(mut self, strength: f64, settlements: u32) -> Self {
        self.strength = strength;
        self.settlement_count = settlements;
        self
    }

    /// Marks the kingdom as at war.
    #[must_use]
    pub fn warring(mut self) -> Self {
        self.at_war = true;
        self
    }

    /// Marks the kingdom as eliminated.
    #[must_use]
    pub fn destroyed(mut self) -> Self {
        self.eliminated = true;
        self
    }
}

bitflags! {
    /// Classification mask for kingdoms.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KingdomFlags: u8 {
        /// Still in play.
        const ACTIVE = 1 << 0;
        /// Destroyed.
        const ELIMINATED = 1 << 1;
        /// Ruled by the operator.
        const PLAYER_RULED = 1 << 2;
        /// Currently at war.
        const AT_WAR = 1 << 3;
    }
}

const ALIASES: &[(&str, KingdomFlags)] = &[
    ("active", KingdomFlags::ACTIVE),
    ("eliminated", KingdomFlags::ELIMINATED),
    ("destroyed", KingdomFlags::ELIMINATED),
    ("player", KingdomFlags::PLAYER_RULED),
    ("mine", KingdomFlags::PLAYER_RULED),
    ("war", KingdomFlags::AT_WAR),
    ("atwar", KingdomFlags::AT_WAR),
    ("warring", KingdomFlags::AT_WAR),
];

/// The kingdom kind marker.
pub struct Kingdoms;

impl Kind for Kingdoms {
    type Entity = Kingdom;
    type Flags = KingdomFlags;
    const NAME: &'static str = "kingdom";

    fn id(entity: &Kingdom) -> &str {
        &entity.id
    }

    fn display_name(entity: &Kingdom) -> &str {
        &entity.name
    }

    fn classify(entity: &Kingdom) -> KingdomFlags {
        let mut flags = if entity.eliminated {
            KingdomFlags::ELIMINATED
        } else {
            KingdomFlags::ACTIVE
        };
        if entity.ruled_by_player {
            flags |= KingdomFlags::PLAYER_RULED;
        }
        if entity.at_war {
            flags |= KingdomFlags::AT_WAR;
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, KingdomFlags)] {
        ALIASES
    }

    fn status_group() -> Option<StatusGroup<KingdomFlags>> {
        Some(StatusGroup {
            group: KingdomFlags::ACTIVE | KingdomFlags::ELIMINATED,
            default: KingdomFlags::ACTIVE,
        })
    }

    fn compare_field(key: &str, a: &Kingdom, b: &Kingdom) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "strength" => Some(a.strength.total_cmp(&b.strength)),
            "settlements" => Some(a.settlement_count.cmp(&b.settlement_count)),
            _ => None,
        }
    }
}
