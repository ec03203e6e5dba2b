//! Export of graph snapshots to external formats.

pub mod dot;
