// Loop rate, speed limits and link configuration
use std::f32::consts::PI;
use std::time::Duration;

// Control loop frequency on both ends (one message per tick)
pub const LOOP_HZ: u64 = 10;

// Maximum motor speed in degrees per second
pub const MAX_SPEED: f32 = 1000.0;

// Below this magnitude a motor is switched off instead of driven
// (not enough torque to actually turn the wheel)
pub const MIN_SPEED: f32 = 150.0;

// Normalized axis positions inside (-DEADZONE, DEADZONE) count as no input
pub const DEADZONE: f32 = 0.4;

// Mounting angle of each wheel relative to the chassis, in radians.
// Order matches the wire format: left, right, rear.
pub const DRIVE_DIRECTIONS: [f32; 3] = [5.0 * PI / 6.0, PI / 6.0, 3.0 * PI / 2.0];

// Linear headings are quantized to multiples of 30 degrees
pub const HEADING_STEP: f32 = PI / 6.0;

// Axis calibration: stall-seek speed (deg/s) and settle delay after each move
pub const CALIBRATION_SPEED: i16 = 20;
pub const CALIBRATION_SETTLE: Duration = Duration::from_millis(100);

// Default drive-unit address for the point-to-point link
pub const DEFAULT_ADDR: &str = "127.0.0.1:7070";
