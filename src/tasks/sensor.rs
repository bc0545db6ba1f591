// AttitudeWatch - Sensor Task
//
// Reads the accelerometer at the subscribed rate and pushes each reading
// into the UI channel.  Batching to the subscribed size happens on the UI
// side, so this task never touches application state.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use attitude_watch::{HostEvent, SamplingRate};

use crate::drivers::imu::Mpu6050;

pub fn sensor_task(mut imu: Mpu6050, rate: SamplingRate, ui_tx: Sender<HostEvent>) {
    log::info!("Sensor task started ({} Hz)", rate.hz());

    if let Err(e) = imu.init() {
        log::error!("MPU6050 init failed in sensor task: {}", e);
        return;
    }

    let interval = Duration::from_millis(rate.period_ms());

    loop {
        let tick_start = Instant::now();

        match imu.read_accel() {
            Ok(sample) => {
                if ui_tx.send(HostEvent::Sample(sample)).is_err() {
                    // Receiver dropped - UI task has exited. Shut down cleanly.
                    log::warn!("UI channel closed - exiting sensor task");
                    return;
                }
            }
            Err(e) => {
                log::warn!("IMU read error: {}", e);
            }
        }

        // Sleep for the remainder of the sampling interval.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
