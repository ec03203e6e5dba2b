//! DOT export tests, including the canonical two-node scenario.

use crate::helpers::TestEditorBuilder;
use graphboard::types::Point;

#[test]
fn two_nodes_one_undirected_connection() {
    let (editor, ids) = TestEditorBuilder::new()
        .with_node(0.0, 0.0)
        .with_node(100.0, 100.0)
        .with_connection(0, 1, false)
        .build();

    // Shared id counter: nodes get 1 and 2, the connection gets 3.
    assert_eq!(ids, vec![1, 2]);
    let connection = editor.graph().connections().next().unwrap();
    assert_eq!(connection.id(), 3);

    let dot = editor.dot_string();
    assert!(dot.contains("1 -> 2 [dir=none];\r\n"));
    assert!(!dot.contains("2 -> 1"), "undirected emitted once, from-side only");

    insta::assert_snapshot!(dot.replace("\r\n", "\n"), @r"
    digraph {
    1 ;
    2 ;
    1 -> 2 [dir=none];
    }
    ");
}

#[test]
fn removing_a_node_empties_its_connections_from_the_export() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node(0.0, 0.0)
        .with_node(100.0, 100.0)
        .with_connection(0, 1, false)
        .build();

    editor.remove_entity_at_point(Point::new(0.0, 0.0));

    assert_eq!(editor.graph().connection_count(), 0);
    assert_eq!(editor.graph().node_count(), 1);
    assert!(editor.graph().node(ids[1]).is_some());

    let dot = editor.dot_string();
    assert_eq!(dot, "digraph {\r\n2 ;\r\n}\r\n");
}

#[test]
fn save_to_dot_file_writes_the_same_text() {
    let (editor, _) = TestEditorBuilder::new()
        .with_node(0.0, 0.0)
        .with_node(100.0, 100.0)
        .with_connection(0, 1, true)
        .build();

    let dir = std::env::temp_dir();
    let path = dir.join("graphboard_dot_test.gv");
    editor.save_to_dot_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, editor.dot_string());
    let _ = std::fs::remove_file(&path);
}
