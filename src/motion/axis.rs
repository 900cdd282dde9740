// Rotary control axes: one-time calibration and normalized position readout

use std::thread::sleep;

use tracing::{debug, info};

use crate::config::{CALIBRATION_SETTLE, CALIBRATION_SPEED};

/// Capabilities a rotary input axis must provide. On the real robot each
/// axis is a geared servo; tests and the demo binaries use `sim::SimAxis`.
pub trait RotaryAxis {
    /// Run at a constant speed (deg/s) until mechanically stalled,
    /// leaving the axis resting against the limit. Blocks.
    fn run_until_stalled(&mut self, speed: i16);

    /// Run at a constant speed to the given target angle. Blocks.
    fn run_target(&mut self, speed: i16, target: i32);

    /// Cumulative rotation angle in degrees from the current reference.
    fn angle(&self) -> i32;

    /// Redefine the current physical position as `angle`.
    fn reset_angle(&mut self, angle: i32);

    /// Cut power to the axis.
    fn stop(&mut self);
}

/// Calibration could not establish a usable range
#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    #[error("axis has no travel (positive limit {positive}, negative limit {negative})")]
    NoTravel { positive: i32, negative: i32 },
}

/// An axis whose mechanical travel has been measured, ready for
/// per-cycle position reads.
pub struct CalibratedAxis<A> {
    axis: A,
    half_range: i32,
}

impl<A: RotaryAxis> CalibratedAxis<A> {
    /// Measure the axis travel and center it.
    ///
    /// Drives the axis into each mechanical limit at low speed, records
    /// both extremes, moves back to the midpoint and re-zeroes the angle
    /// reference there. Run once per axis at startup, before the control
    /// loop; takes a few hundred milliseconds plus stall time.
    pub fn calibrate(mut axis: A) -> Result<Self, CalibrationError> {
        axis.reset_angle(0);

        axis.run_until_stalled(CALIBRATION_SPEED);
        sleep(CALIBRATION_SETTLE);
        let positive = axis.angle();

        axis.run_until_stalled(-CALIBRATION_SPEED);
        sleep(CALIBRATION_SETTLE);
        let negative = axis.angle();

        // Midpoint of the two extremes is the mechanical center
        let center = ((positive + negative) as f32 / 2.0).round() as i32;
        axis.run_target(CALIBRATION_SPEED, center);
        sleep(CALIBRATION_SETTLE);

        axis.reset_angle(0);
        axis.stop();

        let half_range = ((positive - negative).abs() as f32 / 2.0).round() as i32;
        debug!(positive, negative, center, half_range, "axis calibrated");

        // A stall at (or next to) the starting point means the axis is
        // mechanically jammed; positions would be meaningless.
        if half_range <= 0 {
            return Err(CalibrationError::NoTravel { positive, negative });
        }

        Ok(Self { axis, half_range })
    }

    /// Normalized position in [-1, 1]: angle divided by the calibrated
    /// half-range, clamped in case the axis slips past a recorded limit.
    pub fn position(&self) -> f32 {
        (self.axis.angle() as f32 / self.half_range as f32).clamp(-1.0, 1.0)
    }

    /// Calibrated distance (degrees) from center to either limit
    pub fn half_range(&self) -> i32 {
        self.half_range
    }

    /// Access the underlying axis (the demo binaries nudge simulated axes)
    pub fn get_mut(&mut self) -> &mut A {
        &mut self.axis
    }
}

/// Calibrate the three control axes in sequence: angular, linear x, linear y.
pub fn calibrate_all<A: RotaryAxis>(
    angular: A,
    x: A,
    y: A,
) -> Result<[CalibratedAxis<A>; 3], CalibrationError> {
    info!("Calibrating axes, do not touch the joystick");
    let angular = CalibratedAxis::calibrate(angular)?;
    let x = CalibratedAxis::calibrate(x)?;
    let y = CalibratedAxis::calibrate(y)?;
    info!(
        angular = angular.half_range(),
        x = x.half_range(),
        y = y.half_range(),
        "Axis half-ranges established"
    );
    Ok([angular, x, y])
}
