//! Pass/fail decision for one entity against parsed criteria.

// `Flags` must be in scope for its methods to resolve on `K::Flags`.
use muster_foundation::{Flags, Kind};

use crate::criteria::{MatchMode, QueryCriteria};

/// Decides whether an entity satisfies the criteria.
///
/// Two independent checks, both of which must pass:
/// 1. search (skipped when empty): the search string is a case-insensitive
///    substring of the identifier or the display name;
/// 2. classification (skipped when no flags are required): ALL requires the
///    mask to contain every required flag, ANY requires at least one.
///
/// The match mode only governs the classification check.
#[must_use]
pub fn matches<K: Kind>(entity: &K::Entity, criteria: &QueryCriteria<K::Flags>) -> bool {
    if !criteria.search.is_empty() {
        // criteria.search is lowercased at parse time.
        let id_hit = K::id(entity).to_lowercase().contains(&criteria.search);
        let name_hit = K::display_name(entity)
            .to_lowercase()
            .contains(&criteria.search);
        if !id_hit && !name_hit {
            return false;
        }
    }

    if !criteria.required.is_empty() {
        let mask = K::classify(entity);
        let flags_hit = match criteria.mode {
            MatchMode::All => mask.contains(criteria.required),
            MatchMode::Any => mask.intersects(criteria.required),
        };
        if !flags_hit {
            return false;
        }
    }

    true
}
