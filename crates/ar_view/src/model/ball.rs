//! Ball-side frame state and the derived display shadow.

use serde::{Deserialize, Serialize};

use super::geometry::{Point2, Point3};
use super::robot::RobotRef;

/// Display classification of a ball marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallClass {
    /// Raw vision detection
    Percept,
    /// Particle-filter hypothesis
    Sample,
    /// Ground shadow of the fused model, display only
    Shadow,
    /// The fused model itself
    Model,
}

/// Raw vision detection of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPercept {
    pub pos: Point2,
}

/// One particle-filter hypothesis for the ball state. Samples carry a
/// velocity, unlike percepts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallSample {
    pub pos: Point3,
    pub velocity: Point2,
}

/// The fused ball estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallModel {
    /// Position with height above the field surface.
    pub pos: Point3,
    /// Robot that last touched the ball, if known.
    pub last_touched: Option<RobotRef>,
}

impl BallModel {
    /// Ground position of the display shadow: the model offset along
    /// (1, -1) scaled to the ball height. Purely cosmetic, not part of
    /// the tracked state.
    pub fn shadow_pos(&self) -> Point2 {
        let offset = Point2::new(1.0, -1.0).normalized_to(self.pos.z);
        Point2::new(self.pos.x + offset.x, self.pos.y + offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_on_ground_ball() {
        let model = BallModel { pos: Point3::new(100.0, 200.0, 0.0), last_touched: None };
        assert_eq!(model.shadow_pos(), Point2::new(100.0, 200.0));
    }

    #[test]
    fn test_shadow_offset_scales_with_height() {
        let model = BallModel { pos: Point3::new(0.0, 0.0, 141.42136), last_touched: None };
        let shadow = model.shadow_pos();
        assert!((shadow.x - 100.0).abs() < 1e-2);
        assert!((shadow.y + 100.0).abs() < 1e-2);
    }
}
