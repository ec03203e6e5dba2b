//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link time down.
//!
//! Structure:
//! - unit: single-component tests (graph queries, lookup, DOT export)
//! - integration: full editor workflows driven through input dispatch

mod helpers;
mod unit;
