//! Graph query tests exercising the direction-aware matcher through the
//! public `EntityGraph` surface.

use graphboard::types::{ConnectionType, Direction, Point};
use graphboard::EntityGraph;

fn graph_with_directed_pair() -> (EntityGraph, u64, u64) {
    let mut graph = EntityGraph::new();
    let a = graph.create_node(Point::ZERO);
    let b = graph.create_node(Point::new(100.0, 0.0));
    graph.create_connection(a, b, true).unwrap();
    (graph, a, b)
}

#[test]
fn directed_connection_matches_to_but_not_from() {
    let (graph, a, b) = graph_with_directed_pair();

    assert!(graph.connection_between(a, b, Direction::To).is_some());
    assert!(graph.connection_between(a, b, Direction::From).is_none());

    // Viewed from the other endpoint the roles flip.
    assert!(graph.connection_between(b, a, Direction::From).is_some());
    assert!(graph.connection_between(b, a, Direction::To).is_none());
}

#[test]
fn directed_connection_never_matches_none_query() {
    let (graph, a, b) = graph_with_directed_pair();
    assert!(graph.connection_between(a, b, Direction::None).is_none());
    assert!(graph.connection_between(b, a, Direction::None).is_none());
}

#[test]
fn undirected_connection_matches_none_in_both_orders() {
    let mut graph = EntityGraph::new();
    let a = graph.create_node(Point::ZERO);
    let b = graph.create_node(Point::ZERO);
    let id = graph.create_connection(a, b, false).unwrap();

    let hit = graph.connection_between(a, b, Direction::None).unwrap();
    assert_eq!(hit.id(), id);
    assert_eq!(hit.connection_type(), ConnectionType::Undirected);
    assert!(graph.connection_between(b, a, Direction::None).is_some());
}

#[test]
fn adjacency_stays_in_sync_with_connection_collection() {
    let mut graph = EntityGraph::new();
    let a = graph.create_node(Point::ZERO);
    let b = graph.create_node(Point::ZERO);
    let c = graph.create_node(Point::ZERO);
    graph.create_connection(a, b, false).unwrap();
    graph.create_connection(a, c, false).unwrap();
    graph.create_connection(b, c, false).unwrap();

    graph.remove_node(c);

    // Every surviving adjacency entry resolves to a live connection with
    // the node as an endpoint.
    for node in graph.nodes() {
        for &cid in node.connections() {
            let connection = graph.connection(cid).expect("live connection");
            assert!(connection.links(node.id()));
        }
    }
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn snapshot_lists_entities_in_creation_order() {
    let mut graph = EntityGraph::new();
    let a = graph.create_node(Point::ZERO);
    let b = graph.create_node(Point::new(1.0, 2.0));
    graph.create_connection(a, b, false).unwrap();

    let snapshot = graph.snapshot();
    assert_eq!(
        snapshot.nodes.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![a, b]
    );
    assert_eq!(snapshot.connections.len(), 1);
    assert_eq!(snapshot.connections[0].from, a);
    assert_eq!(snapshot.connections[0].to, b);
}

#[test]
fn snapshot_serializes_stably() {
    let mut graph = EntityGraph::new();
    let a = graph.create_node(Point::ZERO);
    let b = graph.create_node(Point::new(100.0, 50.0));
    graph.create_connection(a, b, false).unwrap();

    insta::assert_json_snapshot!(graph.snapshot(), @r###"
    {
      "nodes": [
        {
          "id": 1,
          "position": {
            "x": 0.0,
            "y": 0.0
          },
          "data": {}
        },
        {
          "id": 2,
          "position": {
            "x": 100.0,
            "y": 50.0
          },
          "data": {}
        }
      ],
      "connections": [
        {
          "id": 3,
          "from": 1,
          "to": 2,
          "connection_type": "Undirected"
        }
      ]
    }
    "###);
}
