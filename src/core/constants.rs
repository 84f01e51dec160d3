/// Default tuning for a parallax scene.
///
/// Every value here can be overridden per scene through the options object
/// or a `data-*` attribute on the scene element.
pub const DEFAULT_RELATIVE_INPUT: bool = false;
pub const DEFAULT_CLIP_RELATIVE_INPUT: bool = false;

// Drift (in normalized input units) that re-arms calibration
pub const DEFAULT_CALIBRATION_THRESHOLD: f32 = 100.0;

// Milliseconds
pub const DEFAULT_CALIBRATION_DELAY_MS: f64 = 500.0;
pub const DEFAULT_SUPPORT_DELAY_MS: f64 = 500.0;

pub const DEFAULT_CALIBRATE_X: bool = false;
pub const DEFAULT_CALIBRATE_Y: bool = true;
pub const DEFAULT_INVERT_X: bool = true;
pub const DEFAULT_INVERT_Y: bool = true;

// Percent of element size travelled per unit of input
pub const DEFAULT_SCALAR_X: f32 = 10.0;
pub const DEFAULT_SCALAR_Y: f32 = 10.0;

// Fraction of the remaining distance covered each frame
pub const DEFAULT_FRICTION_X: f32 = 0.1;
pub const DEFAULT_FRICTION_Y: f32 = 0.1;

// Input center as a fraction of the reference frame
pub const DEFAULT_ORIGIN_X: f32 = 0.5;
pub const DEFAULT_ORIGIN_Y: f32 = 0.5;

// Device tilt (degrees) mapped onto one unit of input
pub const ORIENTATION_DEGREES_PER_UNIT: f32 = 30.0;

// User agent fragments (lowercase) that mark a handheld device
pub const MOBILE_AGENT_TOKENS: [&str; 10] = [
    "iphone",
    "ipod",
    "ipad",
    "android",
    "blackberry",
    "bb10",
    "mobi",
    "tablet",
    "opera mini",
    "nexus 7",
];
