//! Per-frame snapshot types consumed from the tracking and rule
//! collaborators. All of these are rebuilt every render call; the
//! renderer keeps no authoritative copy across frames.

pub mod ball;
pub mod geometry;
pub mod play_state;
pub mod robot;
pub mod rules;

pub use ball::{BallClass, BallModel, BallPercept, BallSample};
pub use geometry::{Point2, Point3, Segment};
pub use play_state::{PlayState, PlayStatePair};
pub use robot::{ObjectClass, RobotModel, RobotPercept, RobotRef, RobotSample, TeamColor};
pub use rules::{BrokenRule, FieldSide, RawBrokenRule};
