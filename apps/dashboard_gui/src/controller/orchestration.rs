//! Command orchestration from UI actions to the robot-link queue.

use crossbeam_channel::{Sender, TrySendError};

use shared::protocol::RobotCommand;

pub fn dispatch_robot_command(
    cmd_tx: &Sender<RobotCommand>,
    cmd: RobotCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        RobotCommand::Drive { .. } => "drive",
        RobotCommand::SetDriveMode { .. } => "set_drive_mode",
        RobotCommand::SetSpeedScale { .. } => "set_speed_scale",
        RobotCommand::SetLightMode { .. } => "set_light_mode",
        RobotCommand::EmergencyStop { .. } => "emergency_stop",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->link command"),
        Err(TrySendError::Full(_)) => {
            *status = "Robot link queue is full; command dropped".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Robot link worker disconnected; restart the dashboard".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::DriveMode;

    #[test]
    fn successful_dispatch_leaves_the_status_line_alone() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();

        dispatch_robot_command(
            &tx,
            RobotCommand::SetDriveMode {
                mode: DriveMode::Auto,
            },
            &mut status,
        );
        assert!(status.is_empty());
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn full_queue_surfaces_as_status_text() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_robot_command(&tx, RobotCommand::EmergencyStop { engaged: true }, &mut status);
        dispatch_robot_command(&tx, RobotCommand::EmergencyStop { engaged: false }, &mut status);
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_worker_surfaces_as_status_text() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_robot_command(&tx, RobotCommand::EmergencyStop { engaged: true }, &mut status);
        assert!(status.contains("disconnected"));
    }
}
