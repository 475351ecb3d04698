//! The per-kind capability surface.
//!
//! Seven entity kinds (heroes, clans, kingdoms, settlements, items, troops,
//! cultures) share one query/resolution engine. Everything kind-specific is
//! funneled through the [`Kind`] trait: classification, keyword aliases,
//! default-status rules, and the closed set of sortable fields.

use std::cmp::Ordering;

use crate::flags::ClassFlags;

/// A status bit-group with a default member.
///
/// Some kinds distinguish live entities from logically-retired ones
/// (heroes: alive/dead; clans and kingdoms: active/eliminated). When a
/// query names no member of the group, the engine injects `default` so
/// unfiltered queries do not silently include retired entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusGroup<F> {
    /// Union of every flag in the group.
    pub group: F,
    /// The flag injected when the query names no group member.
    pub default: F,
}

/// Capability surface of one entity kind.
///
/// The engine is generic over this trait; each kind supplies a zero-sized
/// marker type implementing it. All methods are pure reads of the entity's
/// current attributes — classification in particular is recomputed on every
/// call, never cached, because ownership, siege state, and life/death can
/// change between invocations.
pub trait Kind {
    /// The attribute record the host store owns for this kind.
    type Entity;

    /// The kind's classification mask type.
    type Flags: ClassFlags;

    /// Kind name used in operator-facing messages ("hero", "settlement").
    const NAME: &'static str;

    /// The stable, case-sensitive identifier of an entity.
    fn id(entity: &Self::Entity) -> &str;

    /// The display name shown to (and searched by) operators.
    fn display_name(entity: &Self::Entity) -> &str;

    /// Computes the classification mask from current attributes.
    fn classify(entity: &Self::Entity) -> Self::Flags;

    /// The frozen keyword-alias table, many-to-one onto flags.
    ///
    /// Lookup is case-insensitive; tokens absent from the table are treated
    /// as free-text search terms by the criteria parser.
    fn aliases() -> &'static [(&'static str, Self::Flags)];

    /// The status bit-group for this kind, if it defines one.
    fn status_group() -> Option<StatusGroup<Self::Flags>> {
        None
    }

    /// Compares two entities by a named field.
    ///
    /// Returns `None` when `key` is not in this kind's field set; the sort
    /// dispatcher then tries flag names before falling back to identifiers.
    /// `key` arrives already lowercased.
    fn compare_field(key: &str, a: &Self::Entity, b: &Self::Entity) -> Option<Ordering>;

    /// Whether the finder's substring tier also searches identifiers.
    ///
    /// True for kinds whose ids are common operator input (heroes).
    fn finder_searches_id() -> bool {
        false
    }
}

/// Looks up a keyword token in a kind's alias table, case-insensitively.
#[must_use]
pub fn alias_flags<K: Kind>(token: &str) -> Option<K::Flags> {
    K::aliases()
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
        .map(|&(_, flags)| flags)
}
