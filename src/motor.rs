// Drive-motor commanding, shared by the drive unit and the remote mode

use tracing::debug;

use crate::messages::WheelSpeeds;

/// Capabilities of a wheel motor. The real robot's actuation primitives
/// sit behind this seam; tests and the binaries use `sim::SimMotor`.
pub trait DriveMotor {
    /// Continuous rotation at the given signed speed (deg/s)
    fn run(&mut self, speed: i16);

    /// Cut power to the motor
    fn stop(&mut self);
}

/// Apply one speed to one motor: zero means stop, not "run at zero".
pub fn command<M: DriveMotor>(motor: &mut M, speed: i16) {
    if speed == 0 {
        motor.stop();
    } else {
        motor.run(speed);
    }
}

/// Apply a wheel-speed triple to the three motors (left, right, rear).
pub fn apply<M: DriveMotor>(motors: &mut [M; 3], speeds: WheelSpeeds) {
    debug!(%speeds, "applying wheel speeds");
    for (motor, speed) in motors.iter_mut().zip(speeds.as_array()) {
        command(motor, speed);
    }
}
