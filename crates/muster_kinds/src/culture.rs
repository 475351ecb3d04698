//! Cultures.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::Kind;

/// Attribute record for one culture, owned by the host store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culture {
    /// Stable identifier (`empire`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this is one of the main playable cultures.
    pub is_main: bool,
    /// Whether this is a bandit culture.
    pub is_bandit: bool,
}

impl Culture {
    /// Creates a minor, non-bandit culture.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_main: false,
            is_bandit: false,
        }
    }

    /// Marks the culture as a main playable one.
    #[must_use]
    pub fn main(mut self) -> Self {
        self.is_main = true;
        self
    }

    /// Marks the culture as a bandit culture.
    #[must_use]
    pub fn bandit(mut self) -> Self {
        self.is_bandit = true;
        self
    }
}

bitflags! {
    /// Classification mask for cultures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CultureFlags: u8 {
        /// A main playable culture.
        const MAIN = 1 << 0;
        /// Not a main playable culture.
        const MINOR = 1 << 1;
        /// A bandit culture.
        const BANDIT = 1 << 2;
    }
}

const ALIASES: &[(&str, CultureFlags)] = &[
    ("main", CultureFlags::MAIN),
    ("playable", CultureFlags::MAIN),
    ("minor", CultureFlags::MINOR),
    ("bandit", CultureFlags::BANDIT),
];

/// The culture kind marker.
pub struct Cultures;

impl Kind for Cultures {
    type Entity = Culture;
    type Flags = CultureFlags;
    const NAME: &'static str = "culture";

    fn id(entity: &Culture) -> &str {
        &entity.id
    }

    fn display_name(entity: &Culture) -> &str {
        &entity.name
    }

    fn classify(entity: &Culture) -> CultureFlags {
        let mut flags = if entity.is_main {
            CultureFlags::MAIN
        } else {
            CultureFlags::MINOR
        };
        if entity.is_bandit {
            flags |= CultureFlags::BANDIT;
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, CultureFlags)] {
        ALIASES
    }

    fn compare_field(key: &str, a: &Culture, b: &Culture) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            _ => None,
        }
    }
}
