//! Frame renderer: fixed draw order over frame-scoped aggregation buffers.
//!
//! One [`FieldView::render`] call per redraw request draws, in order,
//! the static field geometry, the aggregated tracked objects and the
//! rule-violation overlay; later primitives occlude earlier ones. All
//! buffers are cleared and refilled from the collaborator at the start
//! of every call, so a frame never observes stale state.

pub mod arc;
pub mod canvas;
pub mod colors;
pub mod field_lines;
pub mod objects;
pub mod overlay;

pub use canvas::{Canvas, Font, Primitive, Rgb};

use crate::filter::{FilterView, NUM_IDS};
use crate::model::{
    BallClass, BallModel, BallPercept, BallSample, BrokenRule, ObjectClass, PlayStatePair, Point3,
    RobotModel, RobotPercept, RobotSample, TeamColor,
};

/// Orientation magnitude beyond which a percept rotation is treated as
/// an upstream defect.
const MAX_SANE_ROTATION: f32 = 7.0;

/// The field renderer and its per-frame scratch state.
#[derive(Debug, Default)]
pub struct FieldView {
    ball_percepts: Vec<BallPercept>,
    ball_samples: Vec<BallSample>,
    ball_model: BallModel,
    robot_percepts: Vec<RobotPercept>,
    robot_samples: Vec<RobotSample>,
    robot_models: Vec<RobotModel>,
    broken_rules: Vec<BrokenRule>,
    play_states: PlayStatePair,
    timestamp: u64,
}

impl FieldView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one frame of the current collaborator state into `canvas`.
    pub fn render(&mut self, filter: &dyn FilterView, canvas: &mut Canvas) {
        field_lines::draw_field(canvas);
        self.aggregate(filter);
        self.draw_tracked_objects(canvas);
        overlay::draw_rule_overlay(
            canvas,
            &self.broken_rules,
            &self.robot_models,
            &self.ball_model,
            self.play_states,
            self.timestamp,
        );
    }

    /// Flattened robot models of the last rendered frame.
    pub fn robot_models(&self) -> &[RobotModel] {
        &self.robot_models
    }

    /// Flattened robot percepts of the last rendered frame.
    pub fn robot_percepts(&self) -> &[RobotPercept] {
        &self.robot_percepts
    }

    /// Pull the current snapshots into the frame-scoped buffers.
    ///
    /// Every buffer is cleared first; only roster slots the filter
    /// reports as seen contribute, one model per seen slot regardless of
    /// how many percepts the slot produced.
    fn aggregate(&mut self, filter: &dyn FilterView) {
        self.ball_percepts.clear();
        self.ball_samples.clear();
        self.robot_percepts.clear();
        self.robot_samples.clear();
        self.robot_models.clear();
        self.broken_rules.clear();

        self.ball_percepts = filter.current_ball_percepts();
        self.ball_samples = filter.ball_samples();
        self.ball_model = filter.ball_model();

        for team in TeamColor::ALL {
            for id in 0..NUM_IDS as u8 {
                if filter.robot_seen(team, id) {
                    self.robot_percepts.extend(filter.current_robot_percepts(team, id));
                    self.robot_models.push(filter.robot_model(team, id));
                }
            }
        }
        self.robot_samples = filter.robot_samples();

        self.broken_rules = filter.broken_rules();
        self.play_states = filter.internal_play_states();
        self.timestamp = filter.timestamp();
    }

    fn draw_tracked_objects(&self, canvas: &mut Canvas) {
        for percept in &self.robot_percepts {
            let rotation = if percept.rotation_known { percept.rotation } else { 0.0 };
            if rotation.abs() >= MAX_SANE_ROTATION {
                debug_assert!(false, "robot percept rotation out of range: {}", rotation);
                log::warn!(
                    "robot percept at ({:.0}|{:.0}) with out-of-range rotation {}",
                    percept.pos.x,
                    percept.pos.y,
                    rotation
                );
            }
            objects::draw_robot(
                canvas,
                percept.pos,
                ObjectClass::Percept,
                percept.team,
                rotation,
                None,
                false,
            );
        }

        for sample in &self.robot_samples {
            objects::draw_robot(
                canvas,
                sample.pos,
                ObjectClass::Sample,
                None,
                sample.rotation,
                None,
                false,
            );
        }

        canvas.set_line_width(2.0);
        for model in &self.robot_models {
            let last_touched = self.ball_model.last_touched == Some(model.robot);
            objects::draw_robot(
                canvas,
                model.pos,
                ObjectClass::Model,
                None,
                model.rotation,
                Some(model.robot),
                last_touched,
            );
        }
        canvas.set_line_width(1.0);

        for percept in &self.ball_percepts {
            objects::draw_ball(
                canvas,
                Point3::new(percept.pos.x, percept.pos.y, 0.0),
                BallClass::Percept,
            );
        }
        for sample in &self.ball_samples {
            objects::draw_ball(canvas, sample.pos, BallClass::Sample);
        }

        let shadow = self.ball_model.shadow_pos();
        objects::draw_ball(canvas, Point3::new(shadow.x, shadow.y, 0.0), BallClass::Shadow);
        objects::draw_ball(canvas, self.ball_model.pos, BallClass::Model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::dims;
    use crate::fixtures::StaticFilterData;
    use crate::model::{Point2, RobotRef};

    fn single_slot_filter() -> StaticFilterData {
        let robot = RobotRef::new(TeamColor::Yellow, 3);
        let mut filter = StaticFilterData::default();
        filter.timestamp = 50_000;
        filter.robot_percepts.insert(
            robot,
            vec![RobotPercept {
                pos: Point2::new(100.0, 200.0),
                team: Some(TeamColor::Yellow),
                rotation: 0.5,
                rotation_known: true,
            }],
        );
        filter
            .robot_models
            .insert(robot, RobotModel { robot, pos: Point2::new(110.0, 195.0), rotation: 0.5 });
        filter
    }

    #[test]
    fn test_aggregator_flattens_single_seen_slot() {
        let filter = single_slot_filter();
        let mut view = FieldView::new();
        view.render(&filter, &mut Canvas::new());
        assert_eq!(view.robot_percepts().len(), 1);
        assert_eq!(view.robot_models().len(), 1);
        assert_eq!(view.robot_models()[0].robot, RobotRef::new(TeamColor::Yellow, 3));
    }

    #[test]
    fn test_aggregator_clears_between_frames() {
        let filter = single_slot_filter();
        let mut view = FieldView::new();
        view.render(&filter, &mut Canvas::new());
        view.render(&filter, &mut Canvas::new());
        // one render's worth, not two
        assert_eq!(view.robot_percepts().len(), 1);
        assert_eq!(view.robot_models().len(), 1);
    }

    #[test]
    fn test_unseen_roster_contributes_nothing() {
        let filter = StaticFilterData::default();
        let mut view = FieldView::new();
        view.render(&filter, &mut Canvas::new());
        assert!(view.robot_percepts().is_empty());
        assert!(view.robot_models().is_empty());
    }

    #[test]
    fn test_ball_model_disc_position_and_color() {
        let mut filter = StaticFilterData::default();
        filter.ball_model =
            BallModel { pos: Point3::new(1000.0, 500.0, 0.0), last_touched: None };
        let mut view = FieldView::new();
        let mut canvas = Canvas::new();
        view.render(&filter, &mut canvas);

        let model_disc = canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { color, points } if *color == colors::MODEL => {
                    Some(points[0])
                }
                _ => None,
            })
            .last()
            .expect("ball model disc");
        assert_eq!(model_disc, Point3::new(1000.0, 500.0, dims::BALL_RADIUS));
    }

    #[test]
    fn test_two_identical_frames_render_identically() {
        let mut filter = single_slot_filter();
        filter.ball_model = BallModel {
            pos: Point3::new(-420.0, 77.0, 30.0),
            last_touched: Some(RobotRef::new(TeamColor::Yellow, 3)),
        };
        let mut view = FieldView::new();

        let mut first = Canvas::new();
        view.render(&filter, &mut first);
        let mut second = Canvas::new();
        view.render(&filter, &mut second);

        assert_eq!(first.primitives(), second.primitives());
        assert!(!first.primitives().is_empty());
    }

    #[test]
    fn test_last_touched_marker_set_from_ball_model() {
        let mut filter = single_slot_filter();
        filter.ball_model = BallModel {
            pos: Point3::new(0.0, 0.0, 0.0),
            last_touched: Some(RobotRef::new(TeamColor::Yellow, 3)),
        };
        let mut view = FieldView::new();
        let mut canvas = Canvas::new();
        view.render(&filter, &mut canvas);

        let touch_rects = canvas
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { color, .. } if *color == colors::LAST_TOUCH_MARK))
            .count();
        assert_eq!(touch_rects, 1);
    }

    #[test]
    fn test_draw_order_field_then_objects_then_overlay() {
        let filter = single_slot_filter();
        let mut view = FieldView::new();
        let mut canvas = Canvas::new();
        view.render(&filter, &mut canvas);

        let first_polygon =
            canvas.primitives().iter().position(|p| matches!(p, Primitive::Polygon { .. }));
        let first_strip =
            canvas.primitives().iter().position(|p| matches!(p, Primitive::LineStrip { .. }));
        let last_text = canvas
            .primitives()
            .iter()
            .rposition(|p| matches!(p, Primitive::Text { font: Font::Status, .. }));
        // field lines come first, objects after, status labels last
        assert!(first_strip.unwrap() < first_polygon.unwrap());
        assert_eq!(last_text.unwrap(), canvas.primitives().len() - 1);
    }
}
