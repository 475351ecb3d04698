//! Integration tests for Layer 1: Kinds
//!
//! Classification invariants across the seven entity kinds.

mod classification;
mod status;
