// Drive-unit receive loop: decode each incoming line and command the
// motors. Malformed lines are recoverable (warn and stop for safety);
// losing the link is fatal.

use tracing::{info, warn};

use crate::link::{CommandReceiver, LinkError};
use crate::messages::WheelSpeeds;
use crate::motor::{self, DriveMotor};

/// Handle one received line. A garbled line must never move the robot,
/// so it commands all-stop instead of being ignored.
pub fn apply_line<M: DriveMotor>(motors: &mut [M; 3], line: &str) {
    match WheelSpeeds::decode(line) {
        Ok(speeds) => motor::apply(motors, speeds),
        Err(e) => {
            warn!("Malformed command {:?}: {}", line, e);
            motor::apply(motors, WheelSpeeds::stop());
        }
    }
}

/// Run until the controller disconnects. The receive has no timeout;
/// with no incoming messages the motors keep their last command.
pub async fn run<M: DriveMotor>(
    mut link: CommandReceiver,
    motors: &mut [M; 3],
) -> Result<(), LinkError> {
    info!("Drive unit ready, waiting for commands");
    loop {
        let line = link.recv().await?;
        apply_line(motors, line);
    }
}
