//! Tight Rope - a tilt-controlled balancing game
//!
//! Core modules:
//! - `sim`: Fixed-step disc physics, boundary check and shake scoring
//! - `sensor`: Accelerometer samples and sources
//! - `renderer`: Immediate-mode drawing into a software framebuffer
//! - `app`: Host-agnostic controller (buttons, timer callback, subscriptions)
//! - `settings`: Data-driven tuning

pub mod app;
pub mod feedback;
pub mod hud;
pub mod renderer;
pub mod sensor;
pub mod settings;
pub mod sim;

pub use app::{App, Button, Host};
pub use sensor::{AccelSource, TiltSample};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Timer interval between accelerometer samples (ms)
    pub const ACCEL_STEP_MS: u32 = 50;

    /// Mass per unit of disc area
    pub const DISC_DENSITY: f32 = 0.15;
    /// Accelerometer milli-g to force conversion
    pub const ACCEL_RATIO: f32 = 0.05;

    /// Radius of the disc
    pub const INITIAL_RADIUS: f32 = 15.0;

    /// Minimum per-axis change (milli-g) counted as a shake
    pub const SHAKE_THRESHOLD: i32 = 100;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 144;
    pub const SCREEN_HEIGHT: u32 = 168;
}
