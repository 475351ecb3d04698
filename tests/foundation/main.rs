//! Integration tests for Layer 0: Foundation
//!
//! Tests for the kind capability surface, flag lookup, and resolution errors.

mod errors;
mod flags;
