//! Typed failures for single-entity resolution.
//!
//! Uses `thiserror` for ergonomic error definition. Both variants are
//! recoverable by design: the console surfaces `NotFound` as a plain
//! message and `Ambiguous` with its candidate list, and never silently
//! picks one of several matches.

use std::fmt;

use thiserror::Error;

/// One entity a resolution could have meant, identified for the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Stable identifier of the candidate.
    pub id: String,
    /// Display name of the candidate.
    pub name: String,
}

impl Candidate {
    /// Creates a candidate from an id and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (\"{}\")", self.id, self.name)
    }
}

/// Failure to resolve a reference string to exactly one entity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResolveError {
    /// The reference matched nothing.
    #[error("no {kind} matches \"{reference}\"")]
    NotFound {
        /// Kind name, for the operator-facing message.
        kind: &'static str,
        /// The reference as the operator typed it.
        reference: String,
    },

    /// The reference matched two or more entities.
    #[error("\"{reference}\" is ambiguous: {} {kind} candidates", .candidates.len())]
    Ambiguous {
        /// Kind name, for the operator-facing message.
        kind: &'static str,
        /// The reference as the operator typed it.
        reference: String,
        /// Every entity the reference could have meant.
        candidates: Vec<Candidate>,
    },
}

impl ResolveError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(kind: &'static str, reference: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            reference: reference.into(),
        }
    }

    /// Creates an ambiguity error carrying the candidate list.
    #[must_use]
    pub fn ambiguous(
        kind: &'static str,
        reference: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self::Ambiguous {
            kind,
            reference: reference.into(),
            candidates,
        }
    }

    /// The candidates of an ambiguity, or an empty slice for not-found.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Self::NotFound { .. } => &[],
            Self::Ambiguous { candidates, .. } => candidates,
        }
    }
}
