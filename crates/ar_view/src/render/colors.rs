//! Fixed display palette.

use super::canvas::Rgb;
use crate::model::TeamColor;

/// Field lines, boundary and center circle
pub const FIELD_LINES: Rgb = Rgb::new(1.0, 1.0, 1.0);
/// Center mark
pub const CENTER_MARK: Rgb = Rgb::new(1.0, 0.0, 0.0);
/// Right-side goal and penalty mark
pub const RIGHT_SIDE: Rgb = Rgb::new(0.0, 0.3, 1.0);
/// Left-side goal and penalty mark
pub const LEFT_SIDE: Rgb = Rgb::new(1.0, 1.0, 0.0);

/// Yellow-team percept fill
pub const TEAM_YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
/// Blue-team percept fill
pub const TEAM_BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
/// Sample outlines and sample ball markers
pub const SAMPLE: Rgb = Rgb::new(1.0, 1.0, 1.0);
/// Model outlines and the model ball marker
pub const MODEL: Rgb = Rgb::new(1.0, 0.0, 0.0);
/// Fallback for estimates with no usable classification
pub const FALLBACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

/// Ball percept markers
pub const BALL_PERCEPT: Rgb = Rgb::new(0.96875, 0.55078125, 0.09765625);
/// Ball shadow marker
pub const BALL_SHADOW: Rgb = Rgb::new(1.0, 0.250980392, 1.0);
/// Last-touched square on the touching robot
pub const LAST_TOUCH_MARK: Rgb = Rgb::new(0.6, 0.6, 0.6);

/// Rule-violation highlight geometry
pub const HIGHLIGHT: Rgb = Rgb::new(1.0, 0.0, 0.0);
/// Overlay text
pub const TEXT: Rgb = Rgb::new(1.0, 1.0, 1.0);

/// Percept fill color for a team.
pub fn team_fill(team: TeamColor) -> Rgb {
    match team {
        TeamColor::Yellow => TEAM_YELLOW,
        TeamColor::Blue => TEAM_BLUE,
    }
}

/// Id label color; chosen for contrast against the team fill.
pub fn label_color(team: TeamColor) -> Rgb {
    match team {
        TeamColor::Yellow => Rgb::new(0.0, 0.0, 0.0),
        TeamColor::Blue => Rgb::new(1.0, 1.0, 1.0),
    }
}
