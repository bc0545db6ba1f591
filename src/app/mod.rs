// AttitudeWatch - Applications
//
// Two window handler sets share the platform: the attitude indicator and
// the button demo.  The `button-demo` feature picks which one boots.

pub mod button_demo;
pub mod indicator;

pub use button_demo::ButtonDemo;
pub use indicator::AttitudeIndicator;

/// The app the firmware and the simulator run.
#[cfg(feature = "button-demo")]
pub fn default_app() -> ButtonDemo {
    ButtonDemo::new()
}

/// The app the firmware and the simulator run.
#[cfg(not(feature = "button-demo"))]
pub fn default_app() -> AttitudeIndicator {
    AttitudeIndicator::new()
}
