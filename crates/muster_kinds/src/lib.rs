//! The seven entity kinds administered through the Muster console.
//!
//! Each module defines one kind: its host-owned attribute record, its
//! classification mask, the frozen keyword-alias table, and the closed set
//! of sortable fields. The generic engine in `muster_engine` consumes these
//! through the [`muster_foundation::Kind`] trait; nothing here queries or
//! resolves anything on its own.
//!
//! # Modules
//!
//! - [`hero`] - Persons (lords, wanderers, notables)
//! - [`clan`] - Factions below kingdom level
//! - [`kingdom`] - Realms
//! - [`settlement`] - Towns, castles, villages, hideouts
//! - [`item`] - Item templates
//! - [`troop`] - Unit templates
//! - [`culture`] - Cultures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clan;
pub mod culture;
pub mod hero;
pub mod item;
pub mod kingdom;
pub mod settlement;
pub mod troop;

pub use clan::{Clan, ClanFlags, Clans};
pub use culture::{Culture, CultureFlags, Cultures};
pub use hero::{Hero, HeroFlags, Heroes, Occupation};
pub use item::{Item, ItemCategory, ItemFlags, Items};
pub use kingdom::{Kingdom, KingdomFlags, Kingdoms};
pub use settlement::{Settlement, SettlementFlags, SettlementKind, Settlements};
pub use troop::{Formation, Troop, TroopFlags, Troops};
