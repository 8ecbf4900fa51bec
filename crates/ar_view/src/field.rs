//! Field geometry and overlay constants
//!
//! All dimensions are millimeters in field-local coordinates centered at
//! midfield, x along the field length, y along the field width. Derived
//! geometry (goal posts, defense arcs, marks) is always computed from
//! these constants plus a mirroring sign, never hand-duplicated.

/// Playing surface dimensions
pub mod dims {
    /// Half field length: center to goal line (field lines are 6050 long)
    pub const HALF_LENGTH: i32 = 3025;
    /// Half field width: center to touch line (field lines are 4050 wide)
    pub const HALF_WIDTH: i32 = 2025;
    /// Half length of the outer boundary, runoff area included
    pub const BOUNDARY_HALF_LENGTH: i32 = 3700;
    /// Half width of the outer boundary, runoff area included
    pub const BOUNDARY_HALF_WIDTH: i32 = 2700;

    /// Goal mouth width
    pub const GOAL_WIDTH: i32 = 700;
    /// Goal depth behind the goal line
    pub const GOAL_DEPTH: i32 = 180;

    /// Radius of the two defense-area quarter arcs
    pub const DEFENSE_RADIUS: i32 = 500;
    /// Length of the straight segment joining the defense arcs
    pub const DEFENSE_LINE: i32 = 350;

    /// Penalty mark distance from the goal line
    pub const PENALTY_MARK_DISTANCE: i32 = 450;
    /// Center circle radius
    pub const CENTER_RADIUS: i32 = 500;

    /// Robot footprint radius
    pub const ROBOT_RADIUS: f32 = 90.0;
    /// Ball radius
    pub const BALL_RADIUS: f32 = 21.5;
}

/// Field mark rendering
pub mod marks {
    /// Side length of the square center/penalty marks
    pub const MARK_SIZE: f32 = 20.0;
    /// Line width of the goal outline
    pub const GOAL_LINE_WIDTH: f32 = 3.0;
}

/// Rule-violation overlay geometry and timing
pub mod overlay {
    /// Only violations younger than this are drawn
    pub const BROKEN_RULE_WINDOW_MS: u64 = 5000;
    /// Added to the robot radius for the breaker highlight ring
    pub const BREAKER_RING_MARGIN: f32 = 100.0;
    /// Segment count of the breaker highlight ring
    pub const BREAKER_RING_SEGMENTS: usize = 24;
    /// Half length of each freekick crosshair diagonal
    pub const FREEKICK_CROSS_HALF_LEN: f32 = 90.0;
    /// Radius of the circle drawn around the ball model
    pub const BALL_CIRCLE_RADIUS: f32 = 500.0;
    /// Defense-radius offset of the highlighted defense area
    pub const DEFENSE_HIGHLIGHT_OFFSET: i32 = 200;

    /// Horizontal inset of the rule text column from the left goal line
    pub const RULE_TEXT_INSET_X: f32 = 100.0;
    /// Vertical inset of the first rule text line from the top touch line
    pub const RULE_TEXT_INSET_Y: f32 = 200.0;
    /// Vertical step between stacked rule text lines
    pub const RULE_TEXT_LINE_STEP: f32 = 250.0;

    /// Anchor of the current play-state label
    pub const PLAY_STATE_POS: (f32, f32) = (-1480.0, 2052.0);
    /// Anchor of the next play-state label
    pub const NEXT_PLAY_STATE_POS: (f32, f32) = (1020.0, 2052.0);
}
