//! graphboard - interactive node-link graph editor core.
//!
//! Users place nodes on a canvas, connect them, pan/zoom the view, and
//! export the result. This crate is the part that decides what a click,
//! drag, or key-press *means* and keeps the logical graph consistent
//! while the user edits it. Rendering is a collaborator: the crate ships
//! a headless [`scene::Scene`] implementing exactly the contract a
//! renderer must provide (layers, hit tests, entity metadata slots), so
//! everything here runs and tests without a GUI.
//!
//! Entry point is [`editor::GraphEditor`]: feed it [`input::InputEvent`]s
//! and call its command surface.

pub mod constants;
pub mod controller;
pub mod editor;
pub mod error;
pub mod events;
pub mod graph;
pub mod input;
pub mod io;
pub mod logging;
pub mod lookup;
pub mod scene;
pub mod session;
pub mod tools;
pub mod types;

pub use editor::GraphEditor;
pub use error::{GraphError, GraphResult};
pub use graph::EntityGraph;
pub use types::{ConnectionType, Direction, EntityId, EntityKind, EntityRef, InteractionMode, Point};
