//! Small geometric value types, millimeters in field coordinates.

use serde::{Deserialize, Serialize};

/// 2D point or offset in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale this offset to the given length. Zero offsets stay zero.
    pub fn normalized_to(self, len: f32) -> Self {
        let cur = self.length();
        if cur == 0.0 {
            return Self::ZERO;
        }
        let f = len / cur;
        Self::new(self.x * f, self.y * f)
    }
}

/// 3D point: field position plus height above the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Line segment between two field points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    pub const fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }
}
