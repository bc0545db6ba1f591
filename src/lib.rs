//! AttitudeWatch: a wrist-worn artificial horizon.
//!
//! The accelerometer feed is boxcar-averaged per batch, mapped to a roll
//! angle and a pitch offset, and drawn as an attitude director indicator:
//! a rotating horizon with pitch ladder under a fixed bezel.  Everything in
//! this crate runs on the host as well as on the watch; the ESP-IDF drivers
//! and tasks live in the firmware binary, and [`sim`] drives the apps through
//! a scripted session on the host.

pub mod app;
pub mod attitude;
pub mod config;
pub mod events;
pub mod filter;
pub mod gfx;
pub mod input;
pub mod render;
pub mod sim;
pub mod window;

pub use attitude::{Attitude, DisplayParams};
pub use events::{ButtonId, HostEvent, RawSample, SamplingRate};
pub use window::{Window, WindowHandlers};
