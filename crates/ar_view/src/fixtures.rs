//! In-memory collaborator used by tests and the diagnostic binaries.

use std::collections::HashMap;

use crate::filter::FilterView;
use crate::model::{
    BallModel, BallPercept, BallSample, BrokenRule, PlayState, PlayStatePair, Point2, Point3,
    RobotModel, RobotPercept, RobotRef, RobotSample, TeamColor,
};

/// A [`FilterView`] backed by plain containers. A roster slot counts as
/// seen when it has a model or at least one percept.
#[derive(Debug, Default, Clone)]
pub struct StaticFilterData {
    pub ball_percepts: Vec<BallPercept>,
    pub ball_samples: Vec<BallSample>,
    pub ball_model: BallModel,
    pub robot_percepts: HashMap<RobotRef, Vec<RobotPercept>>,
    pub robot_models: HashMap<RobotRef, RobotModel>,
    pub robot_samples: Vec<RobotSample>,
    pub broken_rules: Vec<BrokenRule>,
    pub play_states: PlayStatePair,
    pub timestamp: u64,
}

impl StaticFilterData {
    /// A small synthetic scene: both teams on the field, a tracked ball
    /// and one recent violation.
    pub fn demo() -> Self {
        let mut data = StaticFilterData { timestamp: 60_000, ..Default::default() };

        let yellow_3 = RobotRef::new(TeamColor::Yellow, 3);
        let blue_5 = RobotRef::new(TeamColor::Blue, 5);
        for (robot, pos, rotation) in [
            (yellow_3, Point2::new(-1200.0, 350.0), 0.4),
            (blue_5, Point2::new(900.0, -500.0), -2.1),
        ] {
            data.robot_percepts.insert(
                robot,
                vec![RobotPercept {
                    pos: Point2::new(pos.x + 12.0, pos.y - 8.0),
                    team: Some(robot.team),
                    rotation,
                    rotation_known: true,
                }],
            );
            data.robot_models.insert(robot, RobotModel { robot, pos, rotation });
        }

        data.ball_percepts = vec![BallPercept { pos: Point2::new(255.0, 90.0) }];
        data.ball_model = BallModel {
            pos: Point3::new(250.0, 100.0, 40.0),
            last_touched: Some(yellow_3),
        };

        data.broken_rules = vec![BrokenRule {
            rule_number: 23,
            when_broken: data.timestamp - 1200,
            breaker: Some(blue_5),
            freekick_pos: Some(Point2::new(250.0, 100.0)),
            circle_around_ball: true,
            defense_area: None,
            line: None,
            standing: None,
        }];

        data.play_states =
            PlayStatePair { current: PlayState::Running, next: PlayState::FreekickYellow };
        data
    }

    fn slot(&self, team: TeamColor, id: u8) -> RobotRef {
        RobotRef::new(team, id)
    }
}

impl FilterView for StaticFilterData {
    fn current_ball_percepts(&self) -> Vec<BallPercept> {
        self.ball_percepts.clone()
    }

    fn ball_samples(&self) -> Vec<BallSample> {
        self.ball_samples.clone()
    }

    fn ball_model(&self) -> BallModel {
        self.ball_model
    }

    fn robot_seen(&self, team: TeamColor, id: u8) -> bool {
        let slot = self.slot(team, id);
        self.robot_models.contains_key(&slot) || self.robot_percepts.contains_key(&slot)
    }

    fn current_robot_percepts(&self, team: TeamColor, id: u8) -> Vec<RobotPercept> {
        self.robot_percepts.get(&self.slot(team, id)).cloned().unwrap_or_default()
    }

    fn robot_samples(&self) -> Vec<RobotSample> {
        self.robot_samples.clone()
    }

    fn robot_model(&self, team: TeamColor, id: u8) -> RobotModel {
        let slot = self.slot(team, id);
        self.robot_models.get(&slot).copied().unwrap_or(RobotModel {
            robot: slot,
            pos: Point2::ZERO,
            rotation: 0.0,
        })
    }

    fn broken_rules(&self) -> Vec<BrokenRule> {
        self.broken_rules.clone()
    }

    fn internal_play_states(&self) -> PlayStatePair {
        self.play_states
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
