pub mod calibration;
pub mod config;
pub mod constants;
pub mod motion;
pub mod platform;
pub mod sampler;
pub mod scene;
pub mod style;

pub use config::*;
pub use platform::*;
pub use scene::*;
