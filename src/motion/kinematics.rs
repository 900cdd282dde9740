// Holonomic inverse kinematics for the three-wheel omni base
// Converts normalized axis positions into per-wheel speeds (deg/s).

use std::f32::consts::TAU;

use crate::config::{DEADZONE, DRIVE_DIRECTIONS, HEADING_STEP, MAX_SPEED, MIN_SPEED};
use crate::messages::WheelSpeeds;

/// What the operator is asking for this cycle, derived fresh from the
/// three axis positions. Nothing carries over between cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIntent {
    /// Rotation on the spot, deg/s, magnitude at most MAX_SPEED
    pub angular: f32,
    /// Translation speed, 0 or MAX_SPEED (no proportional throttle)
    pub linear: f32,
    /// Travel direction in [0, 2π), quantized to 30 degree steps.
    /// `None` when the xy stick is inside the deadzone.
    pub heading: Option<f32>,
}

impl VelocityIntent {
    /// Derive the intent from normalized positions of the angular axis
    /// and the two linear axes.
    pub fn from_positions(a: f32, x: f32, y: f32) -> Self {
        let angular = if -DEADZONE < a && a < DEADZONE {
            0.0
        } else {
            a * MAX_SPEED
        };

        // The xy stick only counts when pushed past the deadzone radius
        let radius = (x * x + y * y).sqrt();
        let (linear, heading) = if radius < DEADZONE {
            (0.0, None)
        } else {
            (MAX_SPEED, Some(quantize_heading(x, y)))
        };

        Self {
            angular,
            linear,
            heading,
        }
    }

    /// Speed for one wheel given its drive direction (mounting angle).
    ///
    /// With no heading the base rotates on the spot and every wheel runs
    /// the angular speed alone. Angular deliberately overrides linear:
    /// the operator can drive off in a straight line and then spin in
    /// place by pushing the angular axis far enough.
    fn wheel_speed(&self, drive_dir: f32) -> i16 {
        let speed = match self.heading {
            None => self.angular.round(),
            Some(heading) => (self.angular + self.linear * (drive_dir - heading).cos()).round(),
        };

        // Too slow to overcome motor friction: switch the motor off
        if -MIN_SPEED < speed && speed < MIN_SPEED {
            return 0;
        }
        speed.clamp(-MAX_SPEED, MAX_SPEED) as i16
    }

    /// Project the intent onto the three wheels (left, right, rear).
    pub fn wheel_speeds(&self) -> WheelSpeeds {
        let [left, right, rear] = DRIVE_DIRECTIONS.map(|dir| self.wheel_speed(dir));
        WheelSpeeds::new(left, right, rear)
    }
}

/// Heading of the xy stick: atan2 with x leading because heading 0 is
/// "forward", shifted into [0, 2π) and rounded to the nearest 30 degree
/// step. Coarse headings are much easier to hold steady by hand.
fn quantize_heading(x: f32, y: f32) -> f32 {
    let mut heading = x.atan2(y);
    if heading < 0.0 {
        heading += TAU;
    }
    // Headings just under a full turn round up to step 12, which is 0
    let step = ((heading / HEADING_STEP).round() as i32).rem_euclid(12);
    step as f32 * HEADING_STEP
}
