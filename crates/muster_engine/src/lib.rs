//! Generic query and resolution engine for the Muster console.
//!
//! This crate implements the four operations the console invokes per entity
//! kind, written once and parametrized over [`muster_foundation::Kind`]:
//!
//! ```text
//! ["keep", "empire", "sort:prosperity:desc"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CRITERIA        │  → search "keep", required EMPIRE, sort prosperity desc
//! │ PARSING         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MATCHING        │  → substring + classification mask, ALL/ANY
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SORTING         │  → named field │ flag membership │ identifier
//! └─────────────────┘
//! ```
//!
//! Single-entity resolution ([`find::find_single`]) reuses the same matching
//! primitives over one candidate set, with a fixed three-tier precedence.
//!
//! # Modules
//!
//! - [`criteria`] - Token partitioning into search / keywords / sort directives
//! - [`matcher`] - Substring and classification checks under ALL/ANY
//! - [`sort`] - Sort-key resolution and comparator construction
//! - [`query`] - Filter-then-sort orchestration over a live collection
//! - [`find`] - Three-tier single-entity resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod criteria;
pub mod find;
pub mod matcher;
pub mod query;
pub mod sort;

pub use criteria::{MatchMode, QueryCriteria, SortDirection};
pub use find::{EntityIndex, SliceIndex, find_single};
pub use matcher::matches;
pub use query::run;
pub use sort::sort_entities;
