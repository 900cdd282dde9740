// Simulated hardware backends for tests and the demo binaries

use std::sync::{Arc, Mutex};

use crate::motion::RotaryAxis;
use crate::motor::DriveMotor;

/// Simulated rotary axis with hard mechanical limits.
///
/// `lo` and `hi` are the limits in degrees relative to the starting
/// position; stall-seeking snaps straight to the nearest limit.
pub struct SimAxis {
    angle: i32,
    lo: i32,
    hi: i32,
}

impl SimAxis {
    pub fn with_travel(lo: i32, hi: i32) -> Self {
        assert!(lo <= 0 && hi >= 0, "travel must bracket the start position");
        Self { angle: 0, lo, hi }
    }

    /// Force the reported angle directly. Unclamped on purpose so tests
    /// can model an encoder that drifts past the mechanical range.
    pub fn set_angle(&mut self, angle: i32) {
        self.angle = angle;
    }

    /// Turn the knob by `delta` degrees, stopping at the limits
    pub fn nudge(&mut self, delta: i32) {
        self.angle = (self.angle + delta).clamp(self.lo, self.hi);
    }

    /// Spring back to the zero reference
    pub fn center(&mut self) {
        self.angle = 0;
    }
}

impl RotaryAxis for SimAxis {
    fn run_until_stalled(&mut self, speed: i16) {
        self.angle = if speed >= 0 { self.hi } else { self.lo };
    }

    fn run_target(&mut self, _speed: i16, target: i32) {
        self.angle = target.clamp(self.lo, self.hi);
    }

    fn angle(&self) -> i32 {
        self.angle
    }

    fn reset_angle(&mut self, angle: i32) {
        // The mechanical limits stay put physically, so they shift with
        // the reference
        let shift = angle - self.angle;
        self.lo += shift;
        self.hi += shift;
        self.angle = angle;
    }

    fn stop(&mut self) {}
}

/// Clonable handle to a [`SimAxis`], for binaries where a keyboard
/// thread feeds the axis while the control loop reads it.
#[derive(Clone)]
pub struct SharedAxis(Arc<Mutex<SimAxis>>);

impl SharedAxis {
    pub fn new(axis: SimAxis) -> Self {
        Self(Arc::new(Mutex::new(axis)))
    }

    pub fn nudge(&self, delta: i32) {
        self.0.lock().unwrap().nudge(delta);
    }

    pub fn center(&self) {
        self.0.lock().unwrap().center();
    }
}

impl RotaryAxis for SharedAxis {
    fn run_until_stalled(&mut self, speed: i16) {
        self.0.lock().unwrap().run_until_stalled(speed);
    }

    fn run_target(&mut self, speed: i16, target: i32) {
        self.0.lock().unwrap().run_target(speed, target);
    }

    fn angle(&self) -> i32 {
        self.0.lock().unwrap().angle()
    }

    fn reset_angle(&mut self, angle: i32) {
        self.0.lock().unwrap().reset_angle(angle);
    }

    fn stop(&mut self) {
        self.0.lock().unwrap().stop();
    }
}

/// Simulated wheel motor recording the last command it was given
#[derive(Debug, Default, Clone, Copy)]
pub struct SimMotor {
    speed: i16,
    running: bool,
}

impl SimMotor {
    pub fn speed(&self) -> i16 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl DriveMotor for SimMotor {
    fn run(&mut self, speed: i16) {
        self.speed = speed;
        self.running = true;
    }

    fn stop(&mut self) {
        self.speed = 0;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_seek_hits_the_limits() {
        let mut axis = SimAxis::with_travel(-430, 450);
        axis.run_until_stalled(20);
        assert_eq!(axis.angle(), 450);
        axis.run_until_stalled(-20);
        assert_eq!(axis.angle(), -430);
    }

    #[test]
    fn test_reset_angle_shifts_the_limits() {
        let mut axis = SimAxis::with_travel(-430, 450);
        axis.run_target(20, 10);
        axis.reset_angle(0);

        // Limits are now symmetric around the new reference
        axis.run_until_stalled(20);
        assert_eq!(axis.angle(), 440);
        axis.run_until_stalled(-20);
        assert_eq!(axis.angle(), -440);
    }

    #[test]
    fn test_nudge_respects_the_limits() {
        let mut axis = SimAxis::with_travel(-100, 100);
        axis.nudge(250);
        assert_eq!(axis.angle(), 100);
        axis.nudge(-50);
        assert_eq!(axis.angle(), 50);
    }
}
