//! Item templates.

use std::cmp::Ordering;

use bitflags::bitflags;
use muster_foundation::Kind;

/// Value below this bands as cheap.
const VALUE_STANDARD_MIN: i64 = 100;
/// Value at or above this bands as expensive.
const VALUE_EXPENSIVE_MIN: i64 = 1000;

/// Broad item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    /// Weapons of any class.
    Weapon,
    /// Body, head, leg, and hand armor.
    Armor,
    /// Mounts.
    Horse,
    /// Consumable food.
    Food,
    /// Tradeable goods.
    TradeGood,
    /// Anything else (banners, tools).
    Other,
}

/// Attribute record for one item template, owned by the host store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier (`noble_bow`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Broad category.
    pub category: ItemCategory,
    /// Market value; undefined for unpriced quest items.
    pub value: Option<i64>,
    /// Carry weight.
    pub weight: f64,
    /// Equipment tier.
    pub tier: u32,
    /// Whether the item is civilian-wearable.
    pub civilian: bool,
}

impl Item {
    /// Creates an item template of the given category.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            value: None,
            weight: 0.0,
            tier: 0,
            civilian: false,
        }
    }

    /// Sets the market value.
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets weight and tier.
    #[must_use]
    pub fn with_bulk(mut self, weight: f64, tier: u32) -> Self {
        self.weight = weight;
        self.tier = tier;
        self
    }

    /// Marks the item as civilian-wearable.
    #[must_use]
    pub fn civilian(mut self) -> Self {
        self.civilian = true;
        self
    }
}

bitflags! {
    /// Classification mask for item templates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u16 {
        /// Category is weapon.
        const WEAPON = 1 << 0;
        /// Category is armor.
        const ARMOR = 1 << 1;
        /// Category is horse.
        const HORSE = 1 << 2;
        /// Category is food.
        const FOOD = 1 << 3;
        /// Category is trade good.
        const TRADE_GOOD = 1 << 4;
        /// Civilian-wearable.
        const CIVILIAN = 1 << 5;
        /// Value below 100.
        const CHEAP = 1 << 6;
        /// Value from 100 up to 1000.
        const STANDARD = 1 << 7;
        /// Value 1000 and up.
        const EXPENSIVE = 1 << 8;
    }
}

const ALIASES: &[(&str, ItemFlags)] = &[
    ("weapon", ItemFlags::WEAPON),
    ("arms", ItemFlags::WEAPON),
    ("armor", ItemFlags::ARMOR),
    ("armour", ItemFlags::ARMOR),
    ("horse", ItemFlags::HORSE),
    ("mount", ItemFlags::HORSE),
    ("food", ItemFlags::FOOD),
    ("trade", ItemFlags::TRADE_GOOD),
    ("goods", ItemFlags::TRADE_GOOD),
    ("civilian", ItemFlags::CIVILIAN),
    ("cheap", ItemFlags::CHEAP),
    ("standard", ItemFlags::STANDARD),
    ("expensive", ItemFlags::EXPENSIVE),
];

/// The item kind marker.
pub struct Items;

impl Kind for Items {
    type Entity = Item;
    type Flags = ItemFlags;
    const NAME: &'static str = "item";

    fn id(entity: &Item) -> &str {
        &entity.id
    }

    fn display_name(entity: &Item) -> &str {
        &entity.name
    }

    fn classify(entity: &Item) -> ItemFlags {
        let mut flags = match entity.category {
            ItemCategory::Weapon => ItemFlags::WEAPON,
            ItemCategory::Armor => ItemFlags::ARMOR,
            ItemCategory::Horse => ItemFlags::HORSE,
            ItemCategory::Food => ItemFlags::FOOD,
            ItemCategory::TradeGood => ItemFlags::TRADE_GOOD,
            ItemCategory::Other => ItemFlags::empty(),
        };
        if entity.civilian {
            flags |= ItemFlags::CIVILIAN;
        }
        // Exactly one band when value is defined, none otherwise.
        if let Some(value) = entity.value {
            flags |= if value < VALUE_STANDARD_MIN {
                ItemFlags::CHEAP
            } else if value < VALUE_EXPENSIVE_MIN {
                ItemFlags::STANDARD
            } else {
                ItemFlags::EXPENSIVE
            };
        }
        flags
    }

    fn aliases() -> &'static [(&'static str, ItemFlags)] {
        ALIASES
    }

    fn compare_field(key: &str, a: &Item, b: &Item) -> Option<Ordering> {
        match key {
            "id" => Some(a.id.cmp(&b.id)),
            "name" => Some(a.name.cmp(&b.name)),
            "value" => Some(a.value.cmp(&b.value)),
            "weight" => Some(a.weight.total_cmp(&b.weight)),
            "tier" => Some(a.tier.cmp(&b.tier)),
            _ => None,
        }
    }

    // Item ids are the canonical handle in equipment files.
    fn finder_searches_id() -> bool {
        true
    }
}
