//! Muster - Entity query and resolution engine for game-administration consoles
//!
//! This crate re-exports all layers of the Muster system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: muster_engine     — Criteria parsing, matching, sorting, finding
//! Layer 1: muster_kinds      — The seven concrete entity kinds
//! Layer 0: muster_foundation — Kind capability surface, flags, errors
//! ```

pub use muster_engine as engine;
pub use muster_foundation as foundation;
pub use muster_kinds as kinds;
