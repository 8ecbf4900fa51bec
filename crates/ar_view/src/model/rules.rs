//! Rule-violation events and the rule name table.
//!
//! The rule engine reports violations with independently-optional visual
//! annotations. [`BrokenRule`] models every absent part as an explicit
//! `Option`; [`RawBrokenRule`] preserves the producer's sentinel wire
//! encoding (team -1, x -1) and decodes losslessly into the typed form.

use serde::{Deserialize, Serialize};

use super::geometry::{Point2, Segment};
use super::robot::{RobotRef, TeamColor};

/// Number of entries in the rule name table.
pub const RULE_COUNT: usize = 42;

/// 1-based number of the score-adjustment rule; its text line always
/// carries the new standing.
pub const SCORE_RULE: i32 = 29;

/// Display names for rules 1..=42, in rule-number order.
static RULE_NAMES: [&str; RULE_COUNT] = [
    "ball out over touch line",
    "ball out over yellow goal line",
    "ball out over blue goal line",
    "aimless kick over touch line",
    "throw-in position reached",
    "goal kick for yellow",
    "goal kick for blue",
    "corner kick for yellow",
    "corner kick for blue",
    "kickoff position violation",
    "robot too close to ball at opponent freekick",
    "robot inside center circle at kickoff",
    "double touch after restart",
    "ball holding by field robot",
    "goalkeeper held ball too long",
    "robot speed above limit during stop",
    "dribbling over allowed distance",
    "ball speed above limit",
    "attacker touched ball inside opponent defense area",
    "attacker inside opponent defense area",
    "defender touched ball while partially in own defense area",
    "second defender fully inside own defense area",
    "pushing against opponent robot",
    "collision caused by robot",
    "attacker too close to opponent defense area during stop",
    "robot touched opponent goalkeeper",
    "lack of progress",
    "deadlock resolved by neutral restart",
    "goal scored",
    "goal disallowed",
    "penalty kick awarded to yellow",
    "penalty kick awarded to blue",
    "indirect freekick for yellow",
    "indirect freekick for blue",
    "direct freekick for yellow",
    "direct freekick for blue",
    "yellow card issued",
    "red card issued",
    "too many robots on the field",
    "robot over defense area boundary at penalty",
    "timeout taken by yellow",
    "timeout taken by blue",
];

/// Look up a rule name by its 1-based rule number.
///
/// Out-of-range numbers log a warning and resolve to `"unknown"`.
pub fn rule_name(rule_number: i32) -> &'static str {
    if (1..=RULE_COUNT as i32).contains(&rule_number) {
        RULE_NAMES[(rule_number - 1) as usize]
    } else {
        log::warn!("bad index for rule: {}", rule_number);
        "unknown"
    }
}

/// Which defense area a violation highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSide {
    Left,
    Right,
}

/// One logged rule violation with its optional visual annotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrokenRule {
    /// 1-based index into the rule name table.
    pub rule_number: i32,
    /// Event timestamp, comparable to the collaborator clock.
    pub when_broken: u64,
    /// Robot that broke the rule.
    pub breaker: Option<RobotRef>,
    /// Where the resulting freekick is taken.
    pub freekick_pos: Option<Point2>,
    /// Draw a circle around the current ball model.
    pub circle_around_ball: bool,
    /// Defense area to highlight.
    pub defense_area: Option<FieldSide>,
    /// Free-form annotation segment (e.g. an offside line).
    pub line: Option<Segment>,
    /// New score standing; present only for the score-adjustment rule.
    pub standing: Option<(u32, u32)>,
}

/// Sentinel-encoded violation event as emitted by the rule engine.
///
/// Absent parts are flagged by magic values rather than a null marker:
/// breaker team -1, freekick x -1, line p1.x -1, defense side outside
/// {0, 1}. Producers that still speak this encoding go through
/// [`RawBrokenRule::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBrokenRule {
    pub rule_number: i32,
    pub when_broken: u64,
    /// (team code, id); team -1 means no breaker.
    pub rule_breaker: (i32, i32),
    /// Freekick point; x -1 means absent.
    pub freekick_pos: (f32, f32),
    pub circle_around_ball: bool,
    /// 0 = left, 1 = right, anything else = none.
    pub defense_area: i32,
    /// Annotation segment endpoints; p1.x -1 means absent.
    pub line_p1: (f32, f32),
    pub line_p2: (f32, f32),
    /// Score standing, meaningful only for the score-adjustment rule.
    pub standing: (i32, i32),
}

impl RawBrokenRule {
    /// Decode the sentinel encoding into the explicit-`Option` form.
    pub fn decode(&self) -> BrokenRule {
        let breaker = if self.rule_breaker.0 == -1 {
            None
        } else {
            match TeamColor::from_code(self.rule_breaker.0) {
                Ok(team) if self.rule_breaker.1 >= 0 => {
                    Some(RobotRef::new(team, self.rule_breaker.1 as u8))
                }
                _ => {
                    log::warn!(
                        "broken rule {}: unusable breaker reference ({}, {})",
                        self.rule_number,
                        self.rule_breaker.0,
                        self.rule_breaker.1
                    );
                    None
                }
            }
        };

        let freekick_pos = if self.freekick_pos.0 != -1.0 {
            Some(Point2::new(self.freekick_pos.0, self.freekick_pos.1))
        } else {
            None
        };

        let defense_area = match self.defense_area {
            0 => Some(FieldSide::Left),
            1 => Some(FieldSide::Right),
            _ => None,
        };

        let line = if self.line_p1.0 != -1.0 {
            Some(Segment::new(
                Point2::new(self.line_p1.0, self.line_p1.1),
                Point2::new(self.line_p2.0, self.line_p2.1),
            ))
        } else {
            None
        };

        let standing = if self.rule_number == SCORE_RULE {
            Some((self.standing.0.max(0) as u32, self.standing.1.max(0) as u32))
        } else {
            None
        };

        BrokenRule {
            rule_number: self.rule_number,
            when_broken: self.when_broken,
            breaker,
            freekick_pos,
            circle_around_ball: self.circle_around_ball,
            defense_area,
            line,
            standing,
        }
    }
}
