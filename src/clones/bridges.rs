//! Clones domain: light bridges between nearby clones.
//!
//! The graph is derived data. It is rebuilt from scratch whenever the set of
//! live clones changes and never patched edge by edge.

use bevy::prelude::*;
use serde::Serialize;

use crate::clones::CloneHandle;

/// An unordered pair of clones close enough to be linked, with the segment
/// to draw between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BridgeEdge {
    pub a: CloneHandle,
    pub b: CloneHandle,
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl BridgeEdge {
    pub fn segment(&self) -> (Vec2, Vec2) {
        (Vec2::from_array(self.start), Vec2::from_array(self.end))
    }

    pub fn connects(&self, handle: CloneHandle) -> bool {
        self.a == handle || self.b == handle
    }
}

#[derive(Debug, Clone, Default)]
pub struct BridgeGraph {
    edges: Vec<BridgeEdge>,
}

impl BridgeGraph {
    /// Link every pair of clones at most `max_distance` apart.
    pub fn recompute(&mut self, clones: &[(CloneHandle, Vec2)], max_distance: f32) {
        self.edges.clear();
        if clones.len() < 2 {
            return;
        }

        for (i, &(a, start)) in clones.iter().enumerate() {
            for &(b, end) in &clones[i + 1..] {
                if start.distance(end) <= max_distance {
                    self.edges.push(BridgeEdge {
                        a,
                        b,
                        start: start.to_array(),
                        end: end.to_array(),
                    });
                }
            }
        }
    }

    pub fn edges(&self) -> &[BridgeEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_point_near_bridge(&self, point: Vec2, tolerance: f32) -> bool {
        self.edges.iter().any(|edge| {
            let (start, end) = edge.segment();
            distance_to_segment(point, start, end) < tolerance
        })
    }
}

fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let span = end - start;
    let length_squared = span.length_squared();
    if length_squared <= f32::EPSILON {
        return point.distance(start);
    }
    let t = ((point - start).dot(span) / length_squared).clamp(0.0, 1.0);
    point.distance(start + span * t)
}
