// AttitudeWatch - Entry Point
//
// On the watch (`target_os = "espidf"`) this boots the firmware: memory LCD,
// MPU6050 self-test, sensor task and UI task.  On any other target it runs
// the host simulator and prints the final frame to stdout.

#[cfg(target_os = "espidf")]
mod drivers;
#[cfg(target_os = "espidf")]
mod firmware;
#[cfg(target_os = "espidf")]
mod tasks;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("AttitudeWatch firmware starting...");

    firmware::boot()
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("AttitudeWatch simulator starting...");

    let stdout = std::io::stdout();
    attitude_watch::sim::run(attitude_watch::app::default_app(), &mut stdout.lock())
}
