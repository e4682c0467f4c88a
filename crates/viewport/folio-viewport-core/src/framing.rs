//! Camera framing value types.

use serde::{Deserialize, Serialize};

/// A point in canvas (world) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A camera position + zoom snapshot, matching the graph viewer's viewport
/// triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Framing {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// World-space placement of a selectable node: top-left position plus
/// rendered extent, as reported by the graph viewer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeAnchor {
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl NodeAnchor {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Geometric center of the node.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.position.x + self.width / 2.0,
            y: self.position.y + self.height / 2.0,
        }
    }
}
