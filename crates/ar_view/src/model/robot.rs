//! Robot-side frame state: team and classification tags plus the
//! percept / sample / model triple the tracking filter maintains for
//! every roster slot.

use serde::{Deserialize, Serialize};

use super::geometry::Point2;
use crate::error::ViewError;

/// Team color as assigned by vision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamColor {
    Yellow,
    Blue,
}

impl TeamColor {
    /// Both teams in roster order.
    pub const ALL: [TeamColor; 2] = [TeamColor::Yellow, TeamColor::Blue];

    /// Decode the wire color code used by the vision collaborator.
    pub fn from_code(code: i32) -> Result<Self, ViewError> {
        match code {
            0 => Ok(TeamColor::Yellow),
            1 => Ok(TeamColor::Blue),
            other => Err(ViewError::UnknownTeamColor(other)),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TeamColor::Yellow => "Yellow",
            TeamColor::Blue => "Blue",
        }
    }
}

/// Which stage of the tracking pipeline produced an estimate.
///
/// Kept separate from [`TeamColor`]: classification selects the draw
/// style, team selects the fill color of percepts and the label color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    /// Raw vision detection, one per object per frame at best
    Percept,
    /// One particle-filter hypothesis out of the per-object set
    Sample,
    /// The single fused estimate per object
    Model,
}

/// Reference to a slot in the fixed team x id roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotRef {
    pub team: TeamColor,
    pub id: u8,
}

impl RobotRef {
    pub const fn new(team: TeamColor, id: u8) -> Self {
        Self { team, id }
    }
}

/// Raw vision detection of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotPercept {
    pub pos: Point2,
    /// Team color decoded from the percept's wire code; `None` when the
    /// code was not a known team color.
    pub team: Option<TeamColor>,
    /// Orientation in radians; only meaningful when `rotation_known`.
    pub rotation: f32,
    pub rotation_known: bool,
}

/// One particle-filter hypothesis for a robot pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotSample {
    pub pos: Point2,
    pub rotation: f32,
}

/// Fused robot estimate, one per observed roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotModel {
    pub robot: RobotRef,
    pub pos: Point2,
    pub rotation: f32,
}
