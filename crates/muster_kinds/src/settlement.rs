//! Towns, castles, villages, and hideouts.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::Kind;

/// Prosperity below this bands as poor.
const PROSPERITY_MODEST_MIN: f64 = 3000.0;
/// Prosperity at or above this bands as rich.
const PROSPERITY_RICH_MIN: f64 = 6000.0;

/// The physical kind of a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettlementKind {
    /// A walled town with a market.
    Town,
    /// A fortified castle.
    Castle,
    /// An unfortified village.
    Village,
    /// A bandit hideout.
    Hideout,
}

/// Attribute record for one settlement, owned and mutated by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// Stable identifier (`town_a`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Physical kind.
    pub kind: SettlementKind,
    /// Prosperity; undefined for hideouts.
    pub prosperity: Option<f64>,
    /// Whether the operator's faction owns this settlement.
    pub owned_by_player: bool,
    /// Whether the settlement is currently under siege.
    pub under_siege: bool,
    /// Origin culture name, lowercase ("empire", "vlandia").
    pub culture: String,
}

impl Settlement {
    /// Creates an unowned, unbesieged settlement of the given kind.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SettlementKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            prosperity: None,
            owned_by_player: false,
            under_siege: false,
            culture: String::new(),
        }
    }

    /// Sets the prosperity.
    #[must_use]
    pub fn with_prosperity(mut self, prosperity: f64) -> Self {
        self.prosperity = Some(prosperity);
        self
    }

    /// Sets the origin culture.
    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    /// Marks the settlement as owned by the operator's faction.
    #[must_use]
    pub fn player_owned(mut self) -> Self {
        self.owned_by_player = true;
        self
    }

    /// Marks the settlement as under siege.
    #[must_use]
    pub fn besieged(mut self) -> Self {
        self.under_siege = true;
        self
    }
}

bitflags! {
    /// Classification mask for settlements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SettlementFlags: u32 {
        /// A town.
        const TOWN = 1 << 0;
        /// A castle.
        const CASTLE = 1 << 1;
        /// A village.
        const VILLAGE = 1 << 2;
        /// A hideout.
        const HIDEOUT = 1 << 3;
        /// Walled: a town or a castle.
        const FORTIFIED = 1 << 4;
        /// Owned by the operator's faction.
        const PLAYER_OWNED = 1 << 5;
        /// Currently under siege.
        const UNDER_SIEGE = 1 << 6;
        /// Origin culture is imperial.
        const EMPIRE = 1 << 7;
        /// Origin culture is Vlandian.
        const VLANDIA = 1 << 8;
        /// Origin culture is Sturgian.
        const STURGIA = 1 << 9;
        /// Origin culture is Aserai.
        const ASERAI = 1 << 10;
        /// Origin culture is Khuzait.
        const KHUZAIT = 1 << 11;
        /// Origin culture is Battanian.
        const BATTANIA = 1 << 12;
        /// Prosperity below 3000.
        const POOR = 1 << 13;
        /// Prosperity from 3000 up to 6000.
        const MODEST = 1 << 14;
        /// Prosperity 6000 and up.
        const RICH = 1 << 15;
    }
}

const ALIASES: &[(&str, SettlementFlags)] = &[
    ("town", SettlementFlags::TOWN),
    ("city", SettlementFlags::TOWN),
    ("castle", SettlementFlags::CASTLE),
    ("fort", SettlementFlags::CASTLE),
    ("village", SettlementFlags::VILLAGE),
    ("hideout", SettlementFlags::HIDEOUT),
    ("fortified", SettlementFlags::FORTIFIED),
    ("walled", SettlementFlags::FORTIFIED),
    ("player", SettlementFlags::PLAYER_OWNED),
    ("mine", SettlementFlags::PLAYER_OWNED),
    ("owned", SettlementFlags::PLAYER_OWNED),
    ("siege", SettlementFlags::UNDER_SIEGE),
    ("besieged", SettlementFlags::UNDER_SIEGE),
    ("empire", SettlementFlags::EMPIRE),
    ("imperial", SettlementFlags::EMPIRE),
    ("vlandia", SettlementFlags::VLANDIA),
    ("vlandian", SettlementFlags::VLANDIA),
    ("sturgia", SettlementFlags::STURGIA),
    ("sturgian", SettlementFlags::STURGIA),
    ("aserai", SettlementFlags::ASERAI),
    ("khuzait", SettlementFlags::KHUZAIT),
    ("battania", SettlementFlags::BATTANIA),
    ("battanian", SettlementFlags::BATTANIA),
    ("poor", SettlementFlags::POOR),
    ("modest", SettlementFlags::MODEST),
    ("average", SettlementFlags::MODEST),
    ("rich", SettlementFlags::RICH),
    ("prosperous", SettlementFlags::RICH),
];

/// The settlement kind marker.
pub struct Settlements;

impl Kind for Settlements {
    type Entity = Settlement;
    type Flags = SettlementFlags;
    const NAME: &'static str = "settlement";

    fn id(entity: &Settlement) -> &str {
        &entity.id
    }

    fn display_name(entity: &Settlement) -> &str {
        &entity.name
    }

    fn classify(entity: &Settlement) -> SettlementFlags {
        let mut flags = match entity.kind {
            SettlementKind::Town => SettlementFlags::TOWN | SettlementFlags::FORTIFIED,
            SettlementKind::Castle => SettlementFlags::CASTLE | SettlementFlags::FORTIFIED,
            SettlementKind::Village => SettlementFlags::VILLAGE,
            SettlementKind::Hideout => SettlementFlags::HIDEOUT,
        };
        if entity.owned_by_player {
            flags |= SettlementFlags::PLAYER_OWNED;
        }
        if entity.under_siege {
            flags |= SettlementFlags::UNDER_SIEGE;
        }
        flags |= match entity.culture.as_str() {
            "empire" => SettlementFlags::EMPIRE,
            "vlandia" => SettlementFlags::VLANDIA,
            "sturgia" => SettlementFlags::STURGIA,
            "aserai" => SettlementFlags::ASERAI,
            "khuzait" => SettlementFlags::KHUZAIT,
            "battania" => SettlementFlags::BATTANIA,
            _ => SettlementFlags::empty(),
        };
        // Exactly one band when prosperity is defined, none otherwise.
        if let Some(prosperity) = entity.prosperity {
            flags |= if prosperity < PROSPERITY_MODEST_MIN {
                SettlementFlags::POOR
            } else if prosperity < PROSPERITY_RICH_MIN {
                SettlementFlags::MODEST
            } else {
                SettlementFlags::RICH
            };
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, SettlementFlags)] {
        ALIASES
    }

    fn compare_field(key: &str, a: &Settlement, b: &Settlement) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "prosperity" => Some(compare_prosperity(a.prosperity, b.prosperity)),
            "culture" => Some(a.culture.cmp(&b.culture)),
            _ => None,
        }
    }
}

/// Undefined prosperity sorts before any defined value.
fn compare_prosperity(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}
