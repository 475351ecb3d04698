//! Resolution error surface.

use muster_foundation::{Candidate, ResolveError};

#[test]
fn not_found_carries_the_reference_verbatim() {
    let err = ResolveError::not_found("settlement", "Olde Keep");
    match err {
        ResolveError::NotFound { kind, reference } => {
            assert_eq!(kind, "settlement");
            assert_eq!(reference, "Olde Keep");
        }
        ResolveError::Ambiguous { .. } => panic!("expected not-found"),
    }
}

#[test]
fn ambiguous_preserves_candidate_order() {
    let err = ResolveError::ambiguous(
        "hero",
        "Henry",
        vec![
            Candidate::new("lord_1_1", "Henry"),
            Candidate::new("lord_2_4", "Henry"),
        ],
    );
    let ids: Vec<&str> = err.candidates().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["lord_1_1", "lord_2_4"]);
}

#[test]
fn errors_render_operator_readable_messages() {
    let err = ResolveError::not_found("clan", "dey Moroc");
    assert_eq!(format!("{err}"), "no clan matches \"dey Moroc\"");
}
