//! Headless visual scene: the rendering-collaborator boundary.
//!
//! The editor core never draws anything. What it needs from a renderer is
//! exactly this contract: a view transform, named ordered layers of
//! primitives, geometric hit tests with a tolerance, and a metadata slot on
//! each primitive for an attached logical-entity reference. `Scene` is an
//! in-memory implementation of that contract, so the whole editor runs and
//! tests with no GUI present; a real renderer draws from the same state.
//!
//! - `view` - `ViewTransform`: center + clamped zoom
//! - `spatial` - rstar-backed index for point queries

mod spatial;
mod view;

pub use spatial::SpatialIndex;
pub use view::ViewTransform;

use crate::constants::SEGMENT_HIT_WIDTH;
use crate::types::{EntityRef, Point};
use std::collections::HashMap;

/// Identifier for a scene primitive. Separate id space from graph
/// entities; never exposed past the lookup layer.
pub type PrimitiveId = u64;

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Pure grouping node, no geometry of its own.
    Group,
    /// Axis-aligned rectangle given by center and full size.
    Rect { center: Point, width: f32, height: f32 },
    /// Line segment between two canvas points.
    Segment { from: Point, to: Point },
    /// Text anchored at a point. Not hit-testable.
    Label { position: Point, text: String },
}

impl Shape {
    /// Axis-aligned bounds, if this shape participates in hit testing.
    fn bounds(&self) -> Option<((f32, f32), (f32, f32))> {
        match self {
            Shape::Group | Shape::Label { .. } => None,
            Shape::Rect {
                center,
                width,
                height,
            } => Some((
                (center.x - width / 2.0, center.y - height / 2.0),
                (center.x + width / 2.0, center.y + height / 2.0),
            )),
            Shape::Segment { from, to } => Some((
                (
                    from.x.min(to.x) - SEGMENT_HIT_WIDTH,
                    from.y.min(to.y) - SEGMENT_HIT_WIDTH,
                ),
                (
                    from.x.max(to.x) + SEGMENT_HIT_WIDTH,
                    from.y.max(to.y) + SEGMENT_HIT_WIDTH,
                ),
            )),
        }
    }

    /// Precise containment test with tolerance, run on index candidates.
    fn hit(&self, point: Point, tolerance: f32) -> bool {
        match self {
            Shape::Group | Shape::Label { .. } => false,
            Shape::Rect {
                center,
                width,
                height,
            } => {
                (point.x - center.x).abs() <= width / 2.0 + tolerance
                    && (point.y - center.y).abs() <= height / 2.0 + tolerance
            }
            Shape::Segment { from, to } => {
                segment_distance(point, *from, *to) <= tolerance + SEGMENT_HIT_WIDTH
            }
        }
    }
}

/// Distance from a point to a line segment.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b.sub(a);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(a.add(ab.scale(t)))
}

/// One visual primitive in the scene tree.
#[derive(Debug, Clone)]
pub struct Primitive {
    shape: Shape,
    parent: Option<PrimitiveId>,
    entity: Option<EntityRef>,
    pickable: bool,
    visible: bool,
    highlighted: bool,
}

impl Primitive {
    pub fn group() -> Self {
        Self::with_shape(Shape::Group, false)
    }

    pub fn rect(center: Point, width: f32, height: f32) -> Self {
        Self::with_shape(
            Shape::Rect {
                center,
                width,
                height,
            },
            true,
        )
    }

    pub fn segment(from: Point, to: Point) -> Self {
        Self::with_shape(Shape::Segment { from, to }, true)
    }

    pub fn label(position: Point, text: impl Into<String>) -> Self {
        Self::with_shape(
            Shape::Label {
                position,
                text: text.into(),
            },
            false,
        )
    }

    fn with_shape(shape: Shape, pickable: bool) -> Self {
        Self {
            shape,
            parent: None,
            entity: None,
            pickable,
            visible: true,
            highlighted: false,
        }
    }

    pub fn with_parent(mut self, parent: PrimitiveId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_entity(mut self, entity: EntityRef) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn not_pickable(mut self) -> Self {
        self.pickable = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn parent(&self) -> Option<PrimitiveId> {
        self.parent
    }

    pub fn entity(&self) -> Option<EntityRef> {
        self.entity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

struct Layer {
    name: String,
    /// Primitive ids in draw order; later entries draw on top.
    order: Vec<PrimitiveId>,
}

/// The scene: named ordered layers of primitives plus the view transform.
pub struct Scene {
    view: ViewTransform,
    primitives: HashMap<PrimitiveId, Primitive>,
    layers: Vec<Layer>,
    /// layer index per primitive, parallel to `primitives`.
    layer_of: HashMap<PrimitiveId, usize>,
    index: SpatialIndex,
    next_id: PrimitiveId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            view: ViewTransform::new(),
            primitives: HashMap::new(),
            layers: Vec::new(),
            layer_of: HashMap::new(),
            index: SpatialIndex::new(),
            next_id: 0,
        }
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    fn layer_index(&mut self, name: &str) -> usize {
        if let Some(i) = self.layers.iter().position(|l| l.name == name) {
            return i;
        }
        self.layers.push(Layer {
            name: name.to_string(),
            order: Vec::new(),
        });
        self.layers.len() - 1
    }

    /// Attach a primitive to the top of a named layer.
    pub fn attach(&mut self, layer: &str, primitive: Primitive) -> PrimitiveId {
        self.next_id += 1;
        let id = self.next_id;
        let layer_idx = self.layer_index(layer);
        self.layers[layer_idx].order.push(id);
        self.layer_of.insert(id, layer_idx);
        self.reindex(id, &primitive);
        self.primitives.insert(id, primitive);
        id
    }

    /// Detach a primitive and all of its descendants.
    pub fn detach(&mut self, id: PrimitiveId) {
        let children: Vec<PrimitiveId> = self
            .primitives
            .iter()
            .filter(|(_, p)| p.parent == Some(id))
            .map(|(cid, _)| *cid)
            .collect();
        for child in children {
            self.detach(child);
        }

        if self.primitives.remove(&id).is_some() {
            self.index.remove(id);
            if let Some(layer_idx) = self.layer_of.remove(&id) {
                self.layers[layer_idx].order.retain(|&p| p != id);
            }
        }
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Replace a primitive's geometry (same shape kind expected).
    pub fn set_shape(&mut self, id: PrimitiveId, shape: Shape) {
        let Some(primitive) = self.primitives.get_mut(&id) else {
            return;
        };
        debug_assert_eq!(
            std::mem::discriminant(&primitive.shape),
            std::mem::discriminant(&shape),
            "shape kind changed on update"
        );
        primitive.shape = shape;
        let snapshot = primitive.clone();
        self.reindex(id, &snapshot);
    }

    pub fn set_visible(&mut self, id: PrimitiveId, visible: bool) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.visible = visible;
        }
    }

    pub fn set_highlighted(&mut self, id: PrimitiveId, highlighted: bool) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.highlighted = highlighted;
        }
    }

    /// Attach or clear the logical-entity reference in a primitive's
    /// metadata slot.
    pub fn set_entity(&mut self, id: PrimitiveId, entity: Option<EntityRef>) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.entity = entity;
        }
    }

    fn reindex(&mut self, id: PrimitiveId, primitive: &Primitive) {
        match primitive.shape.bounds() {
            Some((min, max)) if primitive.pickable => self.index.upsert(id, min, max),
            _ => {
                self.index.remove(id);
            }
        }
    }

    /// Topmost pickable, visible primitive of a layer within `tolerance`
    /// of `point`, or `None`.
    pub fn hit_test(&self, layer: &str, point: Point, tolerance: f32) -> Option<PrimitiveId> {
        let layer_idx = self.layers.iter().position(|l| l.name == layer)?;
        let order = &self.layers[layer_idx].order;

        self.index
            .query_point(point.x, point.y, tolerance)
            .into_iter()
            .filter(|id| self.layer_of.get(id) == Some(&layer_idx))
            .filter(|id| {
                self.primitives
                    .get(id)
                    .is_some_and(|p| p.visible && p.pickable && p.shape.hit(point, tolerance))
            })
            .max_by_key(|id| order.iter().position(|p| p == id))
    }

    /// Walk a primitive's ownership chain upward until some primitive
    /// carries an attached logical entity.
    pub fn resolve_entity(&self, id: PrimitiveId) -> Option<EntityRef> {
        let mut current = Some(id);
        while let Some(pid) = current {
            let primitive = self.primitives.get(&pid)?;
            if let Some(entity) = primitive.entity {
                return Some(entity);
            }
            current = primitive.parent;
        }
        None
    }
}
