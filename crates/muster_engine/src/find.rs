//! Single-entity resolution.
//!
//! Turns one free-form reference string into exactly one entity or a typed
//! failure. The tier order is a contract, not an optimization: exact id is
//! fast and unambiguous, exact name matches common operator intent, and
//! substring is the permissive fallback. Reordering the tiers changes
//! observable behavior and must be treated as a breaking change.

use muster_foundation::{Candidate, Kind, ResolveError};

/// Read-only surface of the host's entity store for one kind.
///
/// The store is the single writer; the engine iterates the live collection
/// without snapshotting, which is sound because the host guarantees
/// single-threaded access for the duration of one command.
pub trait EntityIndex<K: Kind> {
    /// Iterator over the live collection.
    type Iter<'a>: Iterator<Item = &'a K::Entity>
    where
        Self: 'a,
        K::Entity: 'a;

    /// Direct, case-sensitive identifier lookup.
    fn by_id(&self, id: &str) -> Option<&K::Entity>;

    /// Iterates every entity of the kind.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A borrowed slice of entities exposed as an [`EntityIndex`].
///
/// Hosts with richer stores implement [`EntityIndex`] directly; this
/// adapter covers tests, tools, and hosts that keep plain vectors.
pub struct SliceIndex<'s, K: Kind> {
    entities: &'s [K::Entity],
}

impl<K: Kind> Clone for SliceIndex<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for SliceIndex<'_, K> {}

impl<'s, K: Kind> SliceIndex<'s, K> {
    /// Wraps a slice of entities.
    #[must_use]
    pub fn new(entities: &'s [K::Entity]) -> Self {
        Self { entities }
    }
}

impl<K: Kind> EntityIndex<K> for SliceIndex<'_, K> {
    type Iter<'a>
        = std::slice::Iter<'a, K::Entity>
    where
        Self: 'a,
        K::Entity: 'a;

    fn by_id(&self, id: &str) -> Option<&K::Entity> {
        self.entities.iter().find(|entity| K::id(entity) == id)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entities.iter()
    }
}

/// Resolves a reference string to exactly one entity.
///
/// Resolution order, first match wins:
/// 1. exact case-sensitive identifier, via the store's direct index;
/// 2. case-insensitive exact display-name match — one hit resolves, more
///    than one is ambiguous;
/// 3. case-insensitive substring over display names (and identifiers, for
///    kinds whose ids are operator vocabulary) — zero hits is not-found,
///    one resolves, more than one is ambiguous.
///
/// # Errors
///
/// [`ResolveError::NotFound`] when nothing matched;
/// [`ResolveError::Ambiguous`] with the full candidate list when several
/// entities matched. Never silently picks one.
pub fn find_single<'i, K, I>(index: &'i I, reference: &str) -> Result<&'i K::Entity, ResolveError>
where
    K: Kind,
    I: EntityIndex<K>,
{
    if let Some(entity) = index.by_id(reference) {
        return Ok(entity);
    }

    let needle = reference.to_lowercase();

    let exact: Vec<&K::Entity> = index
        .iter()
        .filter(|entity| K::display_name(entity).to_lowercase() == needle)
        .collect();
    match exact.len() {
        1 => return Ok(exact[0]),
        n if n > 1 => return Err(ambiguous::<K>(reference, &exact)),
        _ => {}
    }

    let partial: Vec<&K::Entity> = index
        .iter()
        .filter(|entity| {
            K::display_name(entity).to_lowercase().contains(&needle)
                || (K::finder_searches_id() && K::id(entity).to_lowercase().contains(&needle))
        })
        .collect();
    match partial.len() {
        0 => Err(ResolveError::not_found(K::NAME, reference)),
        1 => Ok(partial[0]),
        _ => Err(ambiguous::<K>(reference, &partial)),
    }
}

fn ambiguous<K: Kind>(reference: &str, candidates: &[&K::Entity]) -> ResolveError {
    ResolveError::ambiguous(
        K::NAME,
        reference,
        candidates
            .iter()
            .map(|entity| Candidate::new(K::id(entity), K::display_name(entity)))
            .collect(),
    )
}
