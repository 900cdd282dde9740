// Remote-control preset mode: discrete buttons to fixed maneuvers
//
// Standalone alternative to the joystick controller. Up to four buttons
// are read each poll and mapped to one of eight hardcoded wheel-speed
// triples, all-stop by default.

use crate::messages::WheelSpeeds;

const FULL_SPEED: i16 = 1000;
const HALF_SPEED: i16 = 500;

/// Snapshot of the four remote buttons for one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    pub left_up: bool,
    pub right_up: bool,
    pub left_down: bool,
    pub right_down: bool,
}

/// The eight preset maneuvers, plus the all-stop default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    StrafeLeftForward,
    StrafeRightForward,
    DiagonalBackLeft,
    DiagonalBackRight,
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
    Stop,
}

impl Maneuver {
    /// Map a button snapshot to a maneuver. First match wins; the
    /// two-button chords are checked before single buttons so that
    /// forward, backward and the rotations are actually reachable.
    pub fn from_buttons(b: Buttons) -> Self {
        if b.left_up && b.right_up {
            Self::Forward
        } else if b.left_down && b.right_down {
            Self::Backward
        } else if b.left_up && b.left_down {
            Self::RotateLeft
        } else if b.right_up && b.right_down {
            Self::RotateRight
        } else if b.left_up {
            Self::StrafeLeftForward
        } else if b.left_down {
            Self::DiagonalBackLeft
        } else if b.right_up {
            Self::StrafeRightForward
        } else if b.right_down {
            Self::DiagonalBackRight
        } else {
            Self::Stop
        }
    }

    /// Fixed wheel-speed triple for this maneuver (left, right, rear)
    pub fn wheel_speeds(&self) -> WheelSpeeds {
        match self {
            Self::StrafeLeftForward => WheelSpeeds::new(-FULL_SPEED, FULL_SPEED, HALF_SPEED),
            Self::StrafeRightForward => WheelSpeeds::new(-FULL_SPEED, FULL_SPEED, -HALF_SPEED),
            Self::DiagonalBackLeft => WheelSpeeds::new(FULL_SPEED, 0, -FULL_SPEED),
            Self::DiagonalBackRight => WheelSpeeds::new(0, -FULL_SPEED, FULL_SPEED),
            Self::Forward => WheelSpeeds::new(-FULL_SPEED, FULL_SPEED, 0),
            Self::Backward => WheelSpeeds::new(FULL_SPEED, -FULL_SPEED, 0),
            Self::RotateLeft => WheelSpeeds::new(FULL_SPEED, FULL_SPEED, FULL_SPEED),
            Self::RotateRight => WheelSpeeds::new(-FULL_SPEED, -FULL_SPEED, -FULL_SPEED),
            Self::Stop => WheelSpeeds::stop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons(left_up: bool, right_up: bool, left_down: bool, right_down: bool) -> Buttons {
        Buttons {
            left_up,
            right_up,
            left_down,
            right_down,
        }
    }

    #[test]
    fn test_no_buttons_is_stop() {
        assert_eq!(Maneuver::from_buttons(Buttons::default()), Maneuver::Stop);
        assert_eq!(Maneuver::Stop.wheel_speeds(), WheelSpeeds::stop());
    }

    #[test]
    fn test_single_buttons() {
        assert_eq!(
            Maneuver::from_buttons(buttons(true, false, false, false)),
            Maneuver::StrafeLeftForward
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(false, true, false, false)),
            Maneuver::StrafeRightForward
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(false, false, true, false)),
            Maneuver::DiagonalBackLeft
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(false, false, false, true)),
            Maneuver::DiagonalBackRight
        );
    }

    #[test]
    fn test_chords_win_over_single_buttons() {
        assert_eq!(
            Maneuver::from_buttons(buttons(true, true, false, false)),
            Maneuver::Forward
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(false, false, true, true)),
            Maneuver::Backward
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(true, false, true, false)),
            Maneuver::RotateLeft
        );
        assert_eq!(
            Maneuver::from_buttons(buttons(false, true, false, true)),
            Maneuver::RotateRight
        );
    }

    #[test]
    fn test_crossed_chord_falls_back_to_first_single() {
        // left-up plus right-down is not a defined chord; left-up wins
        assert_eq!(
            Maneuver::from_buttons(buttons(true, false, false, true)),
            Maneuver::StrafeLeftForward
        );
    }

    #[test]
    fn test_rotations_drive_all_wheels_together() {
        assert_eq!(
            Maneuver::RotateLeft.wheel_speeds(),
            WheelSpeeds::new(1000, 1000, 1000)
        );
        assert_eq!(
            Maneuver::RotateRight.wheel_speeds(),
            WheelSpeeds::new(-1000, -1000, -1000)
        );
    }
}
