//! Filter-then-sort orchestration over a live collection.

use muster_foundation::Kind;

use crate::criteria::{MatchMode, QueryCriteria};
use crate::matcher::matches;
use crate::sort::sort_entities;

/// Runs a full query: parse tokens, filter, sort.
///
/// The collection is iterated exactly once for filtering; each entity is
/// classified at the moment it is visited. An empty result is valid, not an
/// error, and results with fewer than two elements are never sorted.
pub fn run<'a, K, I, S>(entities: I, tokens: &[S], mode: MatchMode) -> Vec<&'a K::Entity>
where
    K: Kind,
    I: IntoIterator<Item = &'a K::Entity>,
    S: AsRef<str>,
{
    let criteria = QueryCriteria::parse::<K, S>(tokens, mode);
    run_with::<K, I>(entities, &criteria)
}

/// Runs a query against criteria the caller already built.
pub fn run_with<'a, K, I>(entities: I, criteria: &QueryCriteria<K::Flags>) -> Vec<&'a K::Entity>
where
    K: Kind,
    I: IntoIterator<Item = &'a K::Entity>,
{
    let mut results: Vec<&K::Entity> = entities
        .into_iter()
        .filter(|entity| matches::<K>(entity, criteria))
        .collect();

    if results.len() > 1 {
        sort_entities::<K>(&mut results, &criteria.sort_key, criteria.direction);
    }

    results
}
