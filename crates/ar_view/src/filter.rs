//! Data-access contract to the tracking and rule collaborators.
//!
//! All accessors return already-computed per-frame snapshots and must be
//! safe to call from the render thread without tearing; the renderer
//! copies what it needs into frame-scoped buffers and never retains a
//! collaborator-owned container beyond the current frame.

use crate::model::{
    BallModel, BallPercept, BallSample, BrokenRule, PlayStatePair, RobotModel, RobotPercept,
    RobotSample, TeamColor,
};

/// Number of teams in the roster.
pub const NUM_TEAMS: usize = 2;

/// Robot ids per team; the roster is the full `NUM_TEAMS` x `NUM_IDS` grid.
pub const NUM_IDS: usize = 12;

/// Snapshot view of the tracking filter and rule engine.
pub trait FilterView {
    /// Raw ball detections of the current frame.
    fn current_ball_percepts(&self) -> Vec<BallPercept>;

    /// Ball hypotheses of the particle filter; empty when the
    /// collaborator does not expose its sample set.
    fn ball_samples(&self) -> Vec<BallSample> {
        Vec::new()
    }

    /// The fused ball estimate.
    fn ball_model(&self) -> BallModel;

    /// Whether the roster slot was observed this frame.
    fn robot_seen(&self, team: TeamColor, id: u8) -> bool;

    /// Raw detections for one roster slot. Only called for seen slots.
    fn current_robot_percepts(&self, team: TeamColor, id: u8) -> Vec<RobotPercept>;

    /// Robot hypotheses of the particle filter, all slots flattened;
    /// empty when the collaborator does not expose its sample set.
    fn robot_samples(&self) -> Vec<RobotSample> {
        Vec::new()
    }

    /// The fused estimate for one roster slot. Only called for seen slots.
    fn robot_model(&self, team: TeamColor, id: u8) -> RobotModel;

    /// Violation log, ordered oldest to newest.
    fn broken_rules(&self) -> Vec<BrokenRule>;

    /// Current and next internal play state.
    fn internal_play_states(&self) -> PlayStatePair;

    /// Monotonic clock comparable to `BrokenRule::when_broken`.
    fn timestamp(&self) -> u64;
}
