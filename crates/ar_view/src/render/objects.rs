//! Ball and robot draw routines.
//!
//! Both objects are approximated as 12-sided polygons. Percepts are
//! filled in team color; samples and models are outlined in their
//! classification color, with the outline starting at the orientation
//! angle so the first edge doubles as a heading tick.

use std::f32::consts::PI;

use super::canvas::{Canvas, Font};
use super::colors;
use crate::field::dims;
use crate::model::{BallClass, ObjectClass, Point2, Point3, RobotRef, TeamColor};

/// Sides of the polygon approximation for robots and ball.
const POLY_SEGMENTS: usize = 12;

/// Advance width of one label digit.
const LABEL_DIGIT_WIDTH: f32 = 13.0;

/// Vertical drop of the id label below the robot center.
const LABEL_Y_OFFSET: f32 = 55.0;

/// Perimeter of a `POLY_SEGMENTS`-gon of the given radius, starting at
/// `start_angle` and closing back on the first vertex.
fn polygon_rim(radius: f32, start_angle: f32) -> Vec<Point2> {
    let mut pts = Vec::with_capacity(POLY_SEGMENTS + 1);
    let mut angle = start_angle;
    for _ in 0..=POLY_SEGMENTS {
        pts.push(Point2::new(angle.cos() * radius, angle.sin() * radius));
        angle += 2.0 * PI / POLY_SEGMENTS as f32;
    }
    pts
}

/// Draw a robot marker at `pos`.
///
/// `team` colors percept fills and is ignored for samples and models;
/// a percept without a usable team color is logged and filled with the
/// fallback color. `label` adds the id digits above the marker and
/// `last_touched` the grey touch square.
pub fn draw_robot(
    canvas: &mut Canvas,
    pos: Point2,
    class: ObjectClass,
    team: Option<TeamColor>,
    rotation: f32,
    label: Option<RobotRef>,
    last_touched: bool,
) {
    canvas.push();
    canvas.translate(pos.x, pos.y);

    let rim = polygon_rim(dims::ROBOT_RADIUS, rotation);
    match class {
        ObjectClass::Percept => {
            let fill = match team {
                Some(team) => colors::team_fill(team),
                None => {
                    log::warn!(
                        "unknown robot at ({:.0}|{:.0}): unrecognized team color",
                        pos.x,
                        pos.y
                    );
                    colors::FALLBACK
                }
            };
            let mut fan = Vec::with_capacity(rim.len() + 1);
            fan.push(Point2::ZERO);
            fan.extend(rim);
            canvas.polygon(fill, &fan);
        }
        ObjectClass::Sample | ObjectClass::Model => {
            let color = if class == ObjectClass::Sample { colors::SAMPLE } else { colors::MODEL };
            let mut strip = Vec::with_capacity(rim.len() + 1);
            // Heading spoke from the center, skipped for unrotated markers.
            if rotation != 0.0 {
                strip.push(Point2::ZERO);
            }
            strip.extend(rim);
            canvas.line_strip(color, &strip);
        }
    }

    if last_touched {
        canvas.rect(colors::LAST_TOUCH_MARK, Point2::ZERO, dims::ROBOT_RADIUS);
    }

    canvas.pop();

    if let Some(robot) = label {
        let text = robot.id.to_string();
        let text_width = LABEL_DIGIT_WIDTH * text.len() as f32;
        canvas.text(
            colors::label_color(robot.team),
            Font::Label,
            Point2::new(pos.x - (dims::ROBOT_RADIUS - text_width) / 2.0, pos.y - LABEL_Y_OFFSET),
            text,
        );
    }
}

/// Draw a ball marker at `pos`, elevated by the ball height plus the
/// ball radius.
pub fn draw_ball(canvas: &mut Canvas, pos: Point3, class: BallClass) {
    let color = match class {
        BallClass::Percept => colors::BALL_PERCEPT,
        BallClass::Sample => colors::SAMPLE,
        BallClass::Shadow => colors::BALL_SHADOW,
        BallClass::Model => colors::MODEL,
    };

    canvas.push();
    canvas.translate3(pos.x, pos.y, pos.z + dims::BALL_RADIUS);
    let mut fan = Vec::with_capacity(POLY_SEGMENTS + 2);
    fan.push(Point2::ZERO);
    fan.extend(polygon_rim(dims::BALL_RADIUS, 0.0));
    canvas.polygon(color, &fan);
    canvas.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::Primitive;

    #[test]
    fn test_percept_is_filled_in_team_color() {
        let mut canvas = Canvas::new();
        draw_robot(
            &mut canvas,
            Point2::new(50.0, 60.0),
            ObjectClass::Percept,
            Some(TeamColor::Blue),
            0.0,
            None,
            false,
        );
        match &canvas.primitives()[0] {
            Primitive::Polygon { color, points } => {
                assert_eq!(*color, colors::TEAM_BLUE);
                // hub plus closed rim
                assert_eq!(points.len(), 1 + POLY_SEGMENTS + 1);
                assert_eq!(points[0].x, 50.0);
                assert_eq!(points[0].y, 60.0);
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_percept_without_team_uses_fallback() {
        let mut canvas = Canvas::new();
        draw_robot(&mut canvas, Point2::ZERO, ObjectClass::Percept, None, 0.0, None, false);
        match &canvas.primitives()[0] {
            Primitive::Polygon { color, .. } => assert_eq!(*color, colors::FALLBACK),
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_outline_skips_heading_spoke_when_unrotated() {
        let mut canvas = Canvas::new();
        draw_robot(&mut canvas, Point2::ZERO, ObjectClass::Model, None, 0.0, None, false);
        draw_robot(&mut canvas, Point2::ZERO, ObjectClass::Model, None, 1.25, None, false);
        let lens: Vec<usize> = canvas
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::LineStrip { points, .. } => points.len(),
                other => panic!("unexpected primitive: {:?}", other),
            })
            .collect();
        assert_eq!(lens, vec![POLY_SEGMENTS + 1, POLY_SEGMENTS + 2]);
    }

    #[test]
    fn test_sample_and_model_outline_colors() {
        let mut canvas = Canvas::new();
        draw_robot(&mut canvas, Point2::ZERO, ObjectClass::Sample, None, 0.5, None, false);
        draw_robot(&mut canvas, Point2::ZERO, ObjectClass::Model, None, 0.5, None, false);
        let seen: Vec<_> = canvas
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::LineStrip { color, .. } => *color,
                other => panic!("unexpected primitive: {:?}", other),
            })
            .collect();
        assert_eq!(seen, vec![colors::SAMPLE, colors::MODEL]);
    }

    #[test]
    fn test_last_touched_marker_and_label() {
        let mut canvas = Canvas::new();
        let robot = RobotRef::new(TeamColor::Yellow, 7);
        draw_robot(
            &mut canvas,
            Point2::new(300.0, -200.0),
            ObjectClass::Model,
            None,
            0.4,
            Some(robot),
            true,
        );
        let rect = canvas
            .primitives()
            .iter()
            .find_map(|p| match p {
                Primitive::Rect { min, max, .. } => Some((*min, *max)),
                _ => None,
            })
            .expect("touch marker rect");
        assert_eq!(rect.0, Point2::new(255.0, -245.0));
        assert_eq!(rect.1, Point2::new(345.0, -155.0));

        match canvas.primitives().last().expect("label") {
            Primitive::Text { text, color, font, pos } => {
                assert_eq!(text, "7");
                assert_eq!(*color, colors::label_color(TeamColor::Yellow));
                assert_eq!(*font, Font::Label);
                assert!((pos.y - (-255.0)).abs() < 1e-3);
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_ball_disc_is_elevated_by_radius() {
        let mut canvas = Canvas::new();
        draw_ball(&mut canvas, Point3::new(1000.0, 500.0, 0.0), BallClass::Model);
        match &canvas.primitives()[0] {
            Primitive::Polygon { color, points } => {
                assert_eq!(*color, colors::MODEL);
                assert_eq!(points[0], Point3::new(1000.0, 500.0, dims::BALL_RADIUS));
                for p in points {
                    assert_eq!(p.z, dims::BALL_RADIUS);
                }
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }
}
