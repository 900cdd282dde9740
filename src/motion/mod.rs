// Motion module for the three-wheel omni base
//
// Provides:
// - Rotary-axis calibration and normalized position readout
// - Velocity-intent derivation from axis positions
// - Holonomic inverse kinematics (intent -> wheel speeds)

pub mod axis;
pub mod kinematics;

pub use axis::{CalibratedAxis, CalibrationError, RotaryAxis};
pub use kinematics::VelocityIntent;
