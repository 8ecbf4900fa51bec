//! Static field geometry: boundary, lines, defense areas, goals, marks.
//!
//! Everything is derived from the constants in [`crate::field::dims`];
//! the opposite side of the field is always produced by a sign-flip
//! mirror, never by duplicated coordinates.

use super::arc::{circle_points, Quadrant};
use super::canvas::{Canvas, Rgb};
use super::colors;
use crate::field::{dims, marks};
use crate::model::Point2;

/// Draw the complete static field into `canvas`.
pub fn draw_field(canvas: &mut Canvas) {
    let half_len = dims::HALF_LENGTH as f32;
    let half_wid = dims::HALF_WIDTH as f32;

    // Field border and middle line in one strip.
    canvas.line_strip(
        colors::FIELD_LINES,
        &[
            Point2::new(0.0, -half_wid),
            Point2::new(0.0, half_wid),
            Point2::new(-half_len, half_wid),
            Point2::new(-half_len, -half_wid),
            Point2::new(half_len, -half_wid),
            Point2::new(half_len, half_wid),
            Point2::new(0.0, half_wid),
        ],
    );

    // Outer boundary around the runoff area.
    let bound_len = dims::BOUNDARY_HALF_LENGTH as f32;
    let bound_wid = dims::BOUNDARY_HALF_WIDTH as f32;
    canvas.line_strip(
        colors::FIELD_LINES,
        &[
            Point2::new(-bound_len, bound_wid),
            Point2::new(bound_len, bound_wid),
            Point2::new(bound_len, -bound_wid),
            Point2::new(-bound_len, -bound_wid),
            Point2::new(-bound_len, bound_wid),
        ],
    );

    canvas.push();
    draw_defense_area(canvas, 0, colors::FIELD_LINES);
    canvas.scale(-1.0, 1.0);
    draw_defense_area(canvas, 0, colors::FIELD_LINES);
    canvas.pop();

    draw_marks(canvas);
}

/// Draw one defense area at the left goal line: two quarter arcs of
/// radius `DEFENSE_RADIUS + offset` joined by a straight segment.
///
/// The nonzero `offset` variant is the enlarged highlight the violation
/// overlay draws; mirroring the canvas before the call yields the right
/// side.
pub fn draw_defense_area(canvas: &mut Canvas, offset: i32, color: Rgb) {
    let half_dline = dims::DEFENSE_LINE as f32 * 0.5;
    let radius = dims::DEFENSE_RADIUS + offset;

    canvas.push();
    canvas.translate(-(dims::HALF_LENGTH as f32), half_dline);
    canvas.points(color, circle_points(radius, Quadrant::I));
    canvas.lines(
        color,
        &[
            Point2::new(radius as f32, 0.0),
            Point2::new(radius as f32, -(dims::DEFENSE_LINE as f32)),
        ],
    );
    canvas.translate(0.0, -(dims::DEFENSE_LINE as f32));
    canvas.points(color, circle_points(radius, Quadrant::IV));
    canvas.pop();
}

/// Three-sided goal outline behind the right goal line; mirror for the
/// left goal.
fn draw_goal(canvas: &mut Canvas, color: Rgb) {
    let half_goal = (dims::GOAL_WIDTH / 2) as f32;
    let goal_front = dims::HALF_LENGTH as f32;
    let goal_back = (dims::HALF_LENGTH + dims::GOAL_DEPTH) as f32;

    let prev_width = canvas.line_width();
    canvas.set_line_width(marks::GOAL_LINE_WIDTH);
    canvas.line_strip(
        color,
        &[
            Point2::new(goal_front, -half_goal),
            Point2::new(goal_back, -half_goal),
            Point2::new(goal_back, half_goal),
            Point2::new(goal_front, half_goal),
        ],
    );
    canvas.set_line_width(prev_width);
}

/// Center circle, center mark, penalty marks and both goals.
fn draw_marks(canvas: &mut Canvas) {
    let penalty_x = (dims::HALF_LENGTH - dims::PENALTY_MARK_DISTANCE) as f32;

    canvas.points(colors::FIELD_LINES, circle_points(dims::CENTER_RADIUS, Quadrant::ALL));
    canvas.rect(colors::CENTER_MARK, Point2::ZERO, marks::MARK_SIZE);

    canvas.rect(colors::RIGHT_SIDE, Point2::new(penalty_x, 0.0), marks::MARK_SIZE);
    draw_goal(canvas, colors::RIGHT_SIDE);

    canvas.push();
    canvas.scale(-1.0, -1.0);
    canvas.rect(colors::LEFT_SIDE, Point2::new(penalty_x, 0.0), marks::MARK_SIZE);
    draw_goal(canvas, colors::LEFT_SIDE);
    canvas.pop();
}
