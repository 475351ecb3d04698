//! Integration tests for Layer 2: Engine
//!
//! Criteria parsing, matching, sorting, and finding against real kinds.

mod finding;
mod matching;
mod sorting;
