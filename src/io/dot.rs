//! Graphviz DOT export.
//!
//! Produces a `digraph { ... }` block with CRLF line endings: one line
//! per node carrying its data map as attributes, then one line per
//! connection emitted from its `from` side only, marked `dir=none` when
//! the connection is undirected.

use crate::graph::GraphSnapshot;
use crate::types::ConnectionType;
use anyhow::Context;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn attribs_to_string<'a>(attribs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let entries: Vec<String> = attribs.map(|(k, v)| format!("{k}={v}")).collect();
    if entries.is_empty() {
        String::new()
    } else {
        format!("[{}]", entries.join(";"))
    }
}

/// Render a graph snapshot as DOT text.
pub fn dot_string(snapshot: &GraphSnapshot) -> String {
    let mut out = String::from("digraph {\r\n");

    for node in &snapshot.nodes {
        let attribs =
            attribs_to_string(node.data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let _ = write!(out, "{} {};\r\n", node.id, attribs);
    }

    // Group connections under their `from` node, in node order; each
    // connection appears exactly once.
    for node in &snapshot.nodes {
        for connection in snapshot.connections.iter().filter(|c| c.from == node.id) {
            let attribs = match connection.connection_type {
                ConnectionType::Undirected => attribs_to_string([("dir", "none")].into_iter()),
                ConnectionType::Directed => String::new(),
            };
            let _ = write!(out, "{} -> {} {};\r\n", connection.from, connection.to, attribs);
        }
    }

    out.push_str("}\r\n");
    out
}

/// Write the DOT rendition of a snapshot to disk.
pub fn save_to_dot_file(snapshot: &GraphSnapshot, path: &Path) -> anyhow::Result<()> {
    fs::write(path, dot_string(snapshot))
        .with_context(|| format!("writing DOT file to {}", path.display()))
}
