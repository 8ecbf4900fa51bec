//! Time-windowed rule-violation overlay and play-state labels.

use std::f32::consts::PI;

use super::canvas::{Canvas, Font};
use super::colors;
use super::field_lines::draw_defense_area;
use crate::field::{dims, overlay};
use crate::model::{
    rules::{rule_name, SCORE_RULE},
    BallModel, BrokenRule, FieldSide, PlayStatePair, Point2, RobotModel,
};

/// Open ring approximated as a closed `segments`-gon outline.
fn ring(canvas: &mut Canvas, center: Point2, radius: f32, segments: usize) {
    let mut pts = Vec::with_capacity(segments + 1);
    let mut angle = 0.0f32;
    for _ in 0..=segments {
        pts.push(Point2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius));
        angle += 2.0 * PI / segments as f32;
    }
    canvas.line_strip(colors::HIGHLIGHT, &pts);
}

/// Render the violation log and the play-state labels.
///
/// The log is ordered oldest to newest; iteration runs newest-first and
/// stops at the first event older than the recency window, so only the
/// tail within the window is ever visited.
pub fn draw_rule_overlay(
    canvas: &mut Canvas,
    broken_rules: &[BrokenRule],
    robot_models: &[RobotModel],
    ball_model: &BallModel,
    play_states: PlayStatePair,
    now: u64,
) {
    canvas.set_line_width(2.0);

    let text_x = -(dims::HALF_LENGTH as f32) + overlay::RULE_TEXT_INSET_X;
    let text_y0 = dims::HALF_WIDTH as f32 - overlay::RULE_TEXT_INSET_Y;

    let mut line_counter = 0usize;
    for rule in broken_rules.iter().rev() {
        if now.saturating_sub(rule.when_broken) > overlay::BROKEN_RULE_WINDOW_MS {
            break;
        }

        // Ring around the breaker's current model position.
        if let Some(breaker) = rule.breaker {
            for model in robot_models.iter().filter(|m| m.robot == breaker) {
                ring(
                    canvas,
                    model.pos,
                    dims::ROBOT_RADIUS + overlay::BREAKER_RING_MARGIN,
                    overlay::BREAKER_RING_SEGMENTS,
                );
            }
        }

        // Freekick crosshair.
        if let Some(pos) = rule.freekick_pos {
            let l = overlay::FREEKICK_CROSS_HALF_LEN;
            canvas.set_line_width(3.0);
            canvas.lines(
                colors::HIGHLIGHT,
                &[
                    Point2::new(pos.x - l, pos.y - l),
                    Point2::new(pos.x + l, pos.y + l),
                    Point2::new(pos.x - l, pos.y + l),
                    Point2::new(pos.x + l, pos.y - l),
                ],
            );
            canvas.set_line_width(2.0);
        }

        // Circle around the current ball model.
        if rule.circle_around_ball {
            ring(canvas, ball_model.pos.xy(), overlay::BALL_CIRCLE_RADIUS, 12);
        }

        // Enlarged defense area on the selected side.
        match rule.defense_area {
            Some(FieldSide::Left) => {
                canvas.push();
                draw_defense_area(canvas, overlay::DEFENSE_HIGHLIGHT_OFFSET, colors::HIGHLIGHT);
                canvas.pop();
            }
            Some(FieldSide::Right) => {
                canvas.push();
                canvas.scale(-1.0, 1.0);
                draw_defense_area(canvas, overlay::DEFENSE_HIGHLIGHT_OFFSET, colors::HIGHLIGHT);
                canvas.pop();
            }
            None => {}
        }

        // Free-form annotation segment.
        if let Some(segment) = rule.line {
            canvas.set_line_width(3.0);
            canvas.lines(colors::HIGHLIGHT, &[segment.p1, segment.p2]);
            canvas.set_line_width(2.0);
        }

        // Text line, most recent on top.
        let mut text = rule_name(rule.rule_number).to_string();
        if rule.rule_number == SCORE_RULE {
            if let Some(breaker) = rule.breaker {
                text.push_str(&format!(" by {} {}", breaker.team.display_name(), breaker.id));
            }
            let (a, b) = rule.standing.unwrap_or((0, 0));
            text.push_str(&format!(" New Standing: {}:{}", a, b));
        } else if let Some(breaker) = rule.breaker {
            text.push_str(&format!(" by {} {}", breaker.team.display_name(), breaker.id));
        }
        canvas.text(
            colors::TEXT,
            Font::Rule,
            Point2::new(text_x, text_y0 - line_counter as f32 * overlay::RULE_TEXT_LINE_STEP),
            text,
        );

        line_counter += 1;
    }

    let (x, y) = overlay::PLAY_STATE_POS;
    canvas.text(
        colors::TEXT,
        Font::Status,
        Point2::new(x, y),
        format!("internal Play_State: {}", play_states.current.display_name()),
    );
    let (x, y) = overlay::NEXT_PLAY_STATE_POS;
    canvas.text(
        colors::TEXT,
        Font::Status,
        Point2::new(x, y),
        format!("next internal Play_State: {}", play_states.next.display_name()),
    );

    canvas.set_line_width(1.0);
}
