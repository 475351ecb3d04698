//! Persons: lords, wanderers, and notables.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::{Kind, StatusGroup};

/// Age below which a hero classifies as a child.
const ADULT_AGE: u32 = 18;

/// What a hero does for a living.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupation {
    /// A landed or clan noble.
    Lord,
    /// A hireable companion.
    Wanderer,
    /// A settlement notable (merchant, gang leader, headman).
    Notable,
}

/// Attribute record for one hero, owned and mutated by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    /// Stable identifier, conventionally lowercase (`lord_1_1`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Gold on hand.
    pub gold: i64,
    /// Overall character level.
    pub level: u32,
    /// False once the hero has died.
    pub alive: bool,
    /// Clan membership, if any.
    pub clan: Option<String>,
    /// Whether the clan is the operator's own.
    pub in_player_clan: bool,
    /// The hero's occupation.
    pub occupation: Occupation,
    /// Whether the hero is currently held prisoner.
    pub prisoner: bool,
}

impl Hero {
    /// Creates an adult, living lord with default attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: 30,
            gold: 0,
            level: 1,
            alive: true,
            clan: None,
            in_player_clan: false,
            occupation: Occupation::Lord,
            prisoner: false,
        }
    }

    /// Sets the age.
    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the gold on hand.
    #[must_use]
    pub fn with_gold(mut self, gold: i64) -> Self {
        self.gold = gold;
        self
    }

    /// Sets the character level.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Marks the hero as dead.
    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    /// Sets the occupation.
    #[must_use]
    pub fn with_occupation(mut self, occupation: Occupation) -> Self {
        self.occupation = occupation;
        self
    }

    /// Puts the hero in a clan, optionally the operator's own.
    #[must_use]
    pub fn with_clan(mut self, clan: impl Into<String>, player: bool) -> Self {
        self.clan = Some(clan.into());
        self.in_player_clan = player;
        self
    }

    /// Marks the hero as a prisoner.
    #[must_use]
    pub fn captured(mut self) -> Self {
        self.prisoner = true;
        self
    }
}

bitflags! {
    /// Classification mask for heroes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeroFlags: u16 {
        /// Currently living.
        const ALIVE = 1 << 0;
        /// Has died.
        const DEAD = 1 << 1;
        /// Occupation is lord.
        const LORD = 1 << 2;
        /// Occupation is wanderer.
        const WANDERER = 1 << 3;
        /// Occupation is notable.
        const NOTABLE = 1 << 4;
        /// Member of the operator's clan.
        const PLAYER_CLAN = 1 << 5;
        /// Currently held prisoner.
        const PRISONER = 1 << 6;
        /// Under adult age.
        const CHILD = 1 << 7;
    }
}

const ALIASES: &[(&str, HeroFlags)] = &[
    ("alive", HeroFlags::ALIVE),
    ("living", HeroFlags::ALIVE),
    ("dead", HeroFlags::DEAD),
    ("deceased", HeroFlags::DEAD),
    ("lord", HeroFlags::LORD),
    ("noble", HeroFlags::LORD),
    ("wanderer", HeroFlags::WANDERER),
    ("companion", HeroFlags::WANDERER),
    ("notable", HeroFlags::NOTABLE),
    ("player", HeroFlags::PLAYER_CLAN),
    ("mine", HeroFlags::PLAYER_CLAN),
    ("prisoner", HeroFlags::PRISONER),
    ("captive", HeroFlags::PRISONER),
    ("child", HeroFlags::CHILD),
    ("minor", HeroFlags::CHILD),
];

/// The hero kind marker.
pub struct Heroes;

impl Kind for Heroes {
    type Entity = Hero;
    type Flags = HeroFlags;
    const NAME: &'static str = "hero";

    fn id(entity: &Hero) -> &str {
        &entity.id
    }

    fn display_name(entity: &Hero) -> &str {
        &entity.name
    }

    fn classify(entity: &Hero) -> HeroFlags {
        let mut flags = if entity.alive {
            HeroFlags::ALIVE
        } else {
            HeroFlags::DEAD
        };
        flags |= match entity.occupation {
            Occupation::Lord => HeroFlags::LORD,
            Occupation::Wanderer => HeroFlags::WANDERER,
            Occupation::Notable => HeroFlags::NOTABLE,
        };
        if entity.in_player_clan {
            flags |= HeroFlags::PLAYER_CLAN;
        }
        if entity.prisoner {
            flags |= HeroFlags::PRISONER;
        }
        if entity.age < ADULT_AGE {
            flags |= HeroFlags::CHILD;
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, HeroFlags)] {
        ALIASES
    }

    fn status_group() -> Option<StatusGroup<HeroFlags>> {
        Some(StatusGroup {
            group: HeroFlags::ALIVE | HeroFlags::DEAD,
            default: HeroFlags::ALIVE,
        })
    }

    fn compare_field(key: &str, a: &Hero, b: &Hero) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "age" => Some(a.age.cmp(&b.age)),
            "gold" => Some(a.gold.cmp(&b.gold)),
            "level" => Some(a.level.cmp(&b.level)),
            _ => None,
        }
    }

    // Hero ids like lord_1_1 are common operator input.
    fn finder_searches_id() -> bool {
        true
    }
}
