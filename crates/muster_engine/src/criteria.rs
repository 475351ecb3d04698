//! Token partitioning and query criteria.
//!
//! Raw operator tokens are partitioned by content, never by position:
//! sort directives carry the reserved `sort:` prefix, keywords appear in
//! the kind's alias table, and everything else is free-text search. Typos
//! therefore degrade into search terms instead of failing the query.

use muster_foundation::{Kind, kind::alias_flags};

/// Reserved prefix marking a sort directive.
const SORT_PREFIX: &str = "sort:";

/// Default sort key when no directive was given.
const DEFAULT_SORT_KEY: &str = "id";

/// Whether a required flag set must be fully contained in, or merely
/// intersect, an entity's classification mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every required flag must be present.
    #[default]
    All,
    /// At least one required flag must be present.
    Any,
}

/// Sort direction; ascending unless a directive says `desc`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Parsed result of one token list; built once per invocation, immutable,
/// then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryCriteria<F> {
    /// Free-text search terms, space-joined, trimmed, lowercased.
    pub search: String,
    /// Flags every result must carry (ALL) or touch (ANY).
    pub required: F,
    /// Match mode governing the flag check.
    pub mode: MatchMode,
    /// Sort key, lowercased; `"id"` when no directive was given.
    pub sort_key: String,
    /// Sort direction; last directive wins.
    pub direction: SortDirection,
}

impl<F: muster_foundation::ClassFlags> QueryCriteria<F> {
    /// Partitions raw tokens into criteria for kind `K`.
    ///
    /// After keyword parsing, if the kind defines a status bit-group and no
    /// raw token named any member of it, the group's default flag is
    /// injected. Naming the group is tracked independently of the final
    /// mask, so explicitly asking for "dead" heroes never has "alive"
    /// forced back in.
    pub fn parse<K, S>(tokens: &[S], mode: MatchMode) -> Self
    where
        K: Kind<Flags = F>,
        S: AsRef<str>,
    {
        let status = K::status_group();
        let mut search_terms: Vec<String> = Vec::new();
        let mut required = F::empty();
        let mut status_named = false;
        let mut sort_key = String::from(DEFAULT_SORT_KEY);
        let mut direction = SortDirection::Ascending;

        for token in tokens {
            let token = token.as_ref();

            if let Some(directive) = sort_directive(token) {
                if let Some((key, dir)) = parse_directive(directive) {
                    sort_key = key;
                    direction = dir;
                }
                // Malformed directives leave prior state unchanged.
                continue;
            }

            if let Some(flags) = alias_flags::<K>(token) {
                required.insert(flags);
                if let Some(group) = status {
                    if flags.intersects(group.group) {
                        status_named = true;
                    }
                }
                continue;
            }

            search_terms.push(token.to_lowercase());
        }

        if let Some(group) = status {
            if !status_named {
                required.insert(group.default);
            }
        }

        Self {
            search: search_terms.join(" ").trim().to_string(),
            required,
            mode,
            sort_key,
            direction,
        }
    }
}

/// Strips the reserved sort prefix, case-insensitively.
fn sort_directive(token: &str) -> Option<&str> {
    let (prefix, rest) = token.split_at_checked(SORT_PREFIX.len())?;
    prefix.eq_ignore_ascii_case(SORT_PREFIX).then_some(rest)
}

/// Parses `<field>[:<direction>]`; `None` when the field segment is empty.
fn parse_directive(directive: &str) -> Option<(String, SortDirection)> {
    let mut parts = directive.splitn(2, ':');
    let field = parts.next().unwrap_or("");
    if field.is_empty() {
        return None;
    }
    let direction = match parts.next() {
        Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Descending,
        _ => SortDirection::Ascending,
    };
    Some((field.to_lowercase(), direction))
}
