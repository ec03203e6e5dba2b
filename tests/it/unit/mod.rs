//! Single-component unit tests.

mod dot_tests;
mod graph_tests;
