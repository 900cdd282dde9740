// Controller-side 10 Hz control loop
//
// Each tick is self-contained: read the three axis positions, derive the
// velocity intent, project it onto the wheels, send one line. A failed
// send means the link is gone and ends the loop.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info};

use crate::config::LOOP_HZ;
use crate::link::{CommandSender, LinkError};
use crate::messages::WheelSpeeds;
use crate::motion::{CalibratedAxis, RotaryAxis, VelocityIntent};

pub struct Controller<A> {
    angular: CalibratedAxis<A>,
    x: CalibratedAxis<A>,
    y: CalibratedAxis<A>,
}

impl<A: RotaryAxis> Controller<A> {
    /// Build from calibrated axes, in `calibrate_all` order:
    /// angular, linear x, linear y.
    pub fn new([angular, x, y]: [CalibratedAxis<A>; 3]) -> Self {
        Self { angular, x, y }
    }

    /// One cycle's worth of computation: positions to wheel speeds
    pub fn wheel_speeds(&self) -> WheelSpeeds {
        let intent = VelocityIntent::from_positions(
            self.angular.position(),
            self.x.position(),
            self.y.position(),
        );
        intent.wheel_speeds()
    }
}

/// Run the control loop until the link fails.
pub async fn run<A: RotaryAxis>(
    controller: Controller<A>,
    mut link: CommandSender,
) -> Result<(), LinkError> {
    let mut tick = interval(Duration::from_millis(1000 / LOOP_HZ));
    info!("Control loop started: {} Hz", LOOP_HZ);

    loop {
        tick.tick().await;
        let speeds = controller.wheel_speeds();
        debug!(%speeds, "sending command");
        link.send(&speeds).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::axis::calibrate_all;
    use crate::sim::SimAxis;

    fn controller() -> Controller<SimAxis> {
        let axes = calibrate_all(
            SimAxis::with_travel(-400, 400),
            SimAxis::with_travel(-400, 400),
            SimAxis::with_travel(-400, 400),
        )
        .unwrap();
        Controller::new(axes)
    }

    #[test]
    fn test_centered_axes_command_all_stop() {
        let controller = controller();
        assert_eq!(controller.wheel_speeds(), WheelSpeeds::stop());
    }

    #[test]
    fn test_forward_stick_drives_forward() {
        let mut controller = controller();
        // y axis pushed to its limit: straight-ahead heading
        controller.y.get_mut().set_angle(400);
        assert_eq!(controller.wheel_speeds(), WheelSpeeds::new(-866, 866, 0));
    }

    #[test]
    fn test_angular_axis_spins_in_place() {
        let mut controller = controller();
        controller.angular.get_mut().set_angle(200);
        assert_eq!(controller.wheel_speeds(), WheelSpeeds::new(500, 500, 500));
    }

    #[test]
    fn test_rotation_mixes_into_linear_drive() {
        let mut controller = controller();
        controller.y.get_mut().set_angle(400);
        controller.angular.get_mut().set_angle(-400);
        // Forward drive plus full negative rotation: left saturates,
        // right lands inside the minimum-speed band and switches off
        assert_eq!(controller.wheel_speeds(), WheelSpeeds::new(-1000, 0, -1000));
    }
}
