//! Core abstractions for the Muster query and resolution engine.
//!
//! This crate provides:
//! - [`Kind`] - The per-kind capability surface the generic engine is parametrized over
//! - [`ClassFlags`] - The classification bit-set contract, plus name-based flag lookup
//! - [`StatusGroup`] - Default-status injection rules for kinds with a retired state
//! - [`ResolveError`] / [`Candidate`] - Typed failures for single-entity resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod flags;
pub mod kind;

pub use error::{Candidate, ResolveError};
pub use flags::{ClassFlags, Flags, flag_named, flag_names};
pub use kind::{Kind, StatusGroup};
