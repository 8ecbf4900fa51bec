//! Drawing surface: a primitive buffer behind a transform stack.
//!
//! The renderer emits plain serializable primitives; the hosting GUI
//! decides how to put them on screen. The transform stack supports
//! translation, axis sign flips for mirroring, and a depth offset for
//! elevated markers, which is all the field renderer needs.

use serde::{Deserialize, Serialize};

use crate::model::{Point2, Point3};

/// RGB color, 0.0..=1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Bitmap font selector for positioned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    /// Small status text (play-state labels)
    Status,
    /// Robot id labels
    Label,
    /// Rule violation lines
    Rule,
}

impl Font {
    /// Nominal glyph height in drawing units.
    pub fn size(self) -> f32 {
        match self {
            Font::Status => 10.0,
            Font::Label => 18.0,
            Font::Rule => 24.0,
        }
    }
}

/// One drawing primitive in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Primitive {
    /// Isolated points (arc rasterizer output).
    Points { color: Rgb, points: Vec<Point2> },
    /// Connected open polyline.
    LineStrip { color: Rgb, width: f32, points: Vec<Point2> },
    /// Independent segments, two consecutive points each.
    Lines { color: Rgb, width: f32, points: Vec<Point2> },
    /// Filled convex polygon in triangle-fan order, first point is the hub.
    Polygon { color: Rgb, points: Vec<Point3> },
    /// Axis-aligned filled rectangle.
    Rect { color: Rgb, min: Point2, max: Point2 },
    /// Positioned text, anchored at the line start.
    Text { color: Rgb, font: Font, pos: Point2, text: String },
}

/// Translation + axis sign flip + depth offset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    tx: f32,
    ty: f32,
    tz: f32,
    sx: f32,
    sy: f32,
}

impl Transform {
    const IDENTITY: Transform = Transform { tx: 0.0, ty: 0.0, tz: 0.0, sx: 1.0, sy: 1.0 };

    #[inline]
    fn apply(&self, p: Point2) -> Point2 {
        Point2::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }

    #[inline]
    fn apply3(&self, p: Point2) -> Point3 {
        let q = self.apply(p);
        Point3::new(q.x, q.y, self.tz)
    }
}

/// Primitive sink with stateful transform and line width, mirroring the
/// matrix-stack discipline of the hosting GUI toolkit.
#[derive(Debug)]
pub struct Canvas {
    primitives: Vec<Primitive>,
    stack: Vec<Transform>,
    current: Transform,
    line_width: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            stack: Vec::new(),
            current: Transform::IDENTITY,
            line_width: 1.0,
        }
    }

    /// Everything emitted so far, in draw order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Drop all emitted primitives and reset transform state.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.stack.clear();
        self.current = Transform::IDENTITY;
        self.line_width = 1.0;
    }

    /// Save the current transform.
    pub fn push(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the most recently saved transform.
    pub fn pop(&mut self) {
        match self.stack.pop() {
            Some(t) => self.current = t,
            None => debug_assert!(false, "transform stack underflow"),
        }
    }

    /// Translate subsequent drawing by (dx, dy) in the current frame.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current.tx += self.current.sx * dx;
        self.current.ty += self.current.sy * dy;
    }

    /// Translate including a depth offset (used by elevated markers).
    pub fn translate3(&mut self, dx: f32, dy: f32, dz: f32) {
        self.translate(dx, dy);
        self.current.tz += dz;
    }

    /// Multiply the axis signs; (-1, 1) mirrors across the vertical axis.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current.sx *= sx;
        self.current.sy *= sy;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Emit raster points given in the current frame.
    pub fn points<I>(&mut self, color: Rgb, pts: I)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let t = self.current;
        let points =
            pts.into_iter().map(|(x, y)| t.apply(Point2::new(x as f32, y as f32))).collect();
        self.primitives.push(Primitive::Points { color, points });
    }

    pub fn line_strip(&mut self, color: Rgb, pts: &[Point2]) {
        let t = self.current;
        self.primitives.push(Primitive::LineStrip {
            color,
            width: self.line_width,
            points: pts.iter().map(|&p| t.apply(p)).collect(),
        });
    }

    pub fn lines(&mut self, color: Rgb, pts: &[Point2]) {
        debug_assert!(pts.len() % 2 == 0, "segment list must pair up");
        let t = self.current;
        self.primitives.push(Primitive::Lines {
            color,
            width: self.line_width,
            points: pts.iter().map(|&p| t.apply(p)).collect(),
        });
    }

    pub fn polygon(&mut self, color: Rgb, pts: &[Point2]) {
        let t = self.current;
        self.primitives.push(Primitive::Polygon {
            color,
            points: pts.iter().map(|&p| t.apply3(p)).collect(),
        });
    }

    /// Filled square of side `size` centered at `center`.
    pub fn rect(&mut self, color: Rgb, center: Point2, size: f32) {
        let c = self.current.apply(center);
        let off = size * 0.5;
        self.primitives.push(Primitive::Rect {
            color,
            min: Point2::new(c.x - off, c.y - off),
            max: Point2::new(c.x + off, c.y + off),
        });
    }

    pub fn text(&mut self, color: Rgb, font: Font, pos: Point2, text: impl Into<String>) {
        let pos = self.current.apply(pos);
        self.primitives.push(Primitive::Text { color, font, pos, text: text.into() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    #[test]
    fn test_translate_then_draw() {
        let mut canvas = Canvas::new();
        canvas.translate(10.0, -5.0);
        canvas.line_strip(WHITE, &[Point2::new(1.0, 1.0)]);
        match &canvas.primitives()[0] {
            Primitive::LineStrip { points, .. } => {
                assert_eq!(points[0], Point2::new(11.0, -4.0));
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_mirror_scale_applies_after_translate() {
        let mut canvas = Canvas::new();
        canvas.scale(-1.0, 1.0);
        canvas.translate(10.0, 0.0);
        canvas.line_strip(WHITE, &[Point2::new(2.0, 3.0)]);
        // translate happens in the mirrored frame: x -> -(10 + 2)
        match &canvas.primitives()[0] {
            Primitive::LineStrip { points, .. } => {
                assert_eq!(points[0], Point2::new(-12.0, 3.0));
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_push_pop_restores() {
        let mut canvas = Canvas::new();
        canvas.push();
        canvas.translate(100.0, 100.0);
        canvas.pop();
        canvas.line_strip(WHITE, &[Point2::ZERO]);
        match &canvas.primitives()[0] {
            Primitive::LineStrip { points, .. } => assert_eq!(points[0], Point2::ZERO),
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_rect_is_axis_aligned_under_mirror() {
        let mut canvas = Canvas::new();
        canvas.scale(-1.0, -1.0);
        canvas.rect(WHITE, Point2::new(100.0, 0.0), 20.0);
        match &canvas.primitives()[0] {
            Primitive::Rect { min, max, .. } => {
                assert_eq!(*min, Point2::new(-110.0, -10.0));
                assert_eq!(*max, Point2::new(-90.0, 10.0));
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_line_width_captured_per_primitive() {
        let mut canvas = Canvas::new();
        canvas.set_line_width(3.0);
        canvas.lines(WHITE, &[Point2::ZERO, Point2::new(1.0, 0.0)]);
        canvas.set_line_width(1.0);
        canvas.lines(WHITE, &[Point2::ZERO, Point2::new(1.0, 0.0)]);
        let widths: Vec<f32> = canvas
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::Lines { width, .. } => *width,
                other => panic!("unexpected primitive: {:?}", other),
            })
            .collect();
        assert_eq!(widths, vec![3.0, 1.0]);
    }
}
