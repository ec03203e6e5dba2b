//! R-tree spatial index over scene primitives.
//!
//! Keeps point hit tests at O(log n) instead of scanning every primitive.
//! The index stores axis-aligned bounds only; the precise per-shape test
//! (segment distance, tolerance) happens in the scene on the candidates
//! this index returns.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one pickable primitive.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub primitive_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(primitive_id: u64, min: (f32, f32), max: (f32, f32)) -> Self {
        Self {
            primitive_id,
            min_x: min.0,
            min_y: min.1,
            max_x: max.0,
            max_y: max.1,
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.primitive_id == other.primitive_id
    }
}

/// Spatial index mapping canvas points to candidate primitives.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the bounds for a primitive.
    pub fn upsert(&mut self, primitive_id: u64, min: (f32, f32), max: (f32, f32)) {
        if let Some(old) = self.entries.remove(&primitive_id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(primitive_id, min, max);
        self.tree.insert(entry);
        self.entries.insert(primitive_id, entry);
    }

    pub fn remove(&mut self, primitive_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&primitive_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all primitives whose bounds come within `tolerance` of the
    /// point. Candidates only; callers run the precise shape test.
    pub fn query_point(&self, x: f32, y: f32, tolerance: f32) -> Vec<u64> {
        let probe = AABB::from_corners([x - tolerance, y - tolerance], [x + tolerance, y + tolerance]);
        self.tree
            .locate_in_envelope_intersecting(&probe)
            .map(|entry| entry.primitive_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
