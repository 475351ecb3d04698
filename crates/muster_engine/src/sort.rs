//! Sort-key resolution and entity ordering.
//!
//! A sort key resolves through a closed chain: the kind's named-field set,
//! then the flag-name table of the kind's classification mask, then the
//! identifier fallback. The fallback is also the default when no sort was
//! requested, so it is exercised on nearly every query.

use std::cmp::Ordering;

// `Flags` must be in scope for `contains` to resolve on `K::Flags`.
use muster_foundation::{Flags, Kind, flag_named};

use crate::criteria::SortDirection;

/// Compares two entities by a sort key, ties broken by identifier.
///
/// Flag-membership ordering places non-members before members, so a
/// descending sort brings flagged entities to the front. The direction
/// reverses the fully-combined ordering, tie-break included.
#[must_use]
pub fn compare<K: Kind>(
    key: &str,
    direction: SortDirection,
    a: &K::Entity,
    b: &K::Entity,
) -> Ordering {
    let flag = flag_named::<K::Flags>(key);
    compare_resolved::<K>(key, flag, direction, a, b)
}

/// Sorts a filtered result list in place.
///
/// Zero- and one-element lists are left untouched; `sort_by` on them is a
/// no-op anyway, but the query engine also never calls this for them.
pub fn sort_entities<K: Kind>(
    entities: &mut [&K::Entity],
    key: &str,
    direction: SortDirection,
) {
    // Resolve the flag once, not per comparison.
    let flag = flag_named::<K::Flags>(key);
    entities.sort_by(|a, b| compare_resolved::<K>(key, flag, direction, a, b));
}

fn compare_resolved<K: Kind>(
    key: &str,
    flag: Option<K::Flags>,
    direction: SortDirection,
    a: &K::Entity,
    b: &K::Entity,
) -> Ordering {
    let primary = K::compare_field(key, a, b)
        .or_else(|| {
            flag.map(|f| K::classify(a).contains(f).cmp(&K::classify(b).contains(f)))
        })
        .unwrap_or_else(|| K::id(a).cmp(K::id(b)));

    let ordering = primary.then_with(|| K::id(a).cmp(K::id(b)));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
