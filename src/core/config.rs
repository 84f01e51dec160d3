use super::constants::*;
use glam::{BVec2, Vec2};

/// Travel bound for one axis of motion, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Limit {
    #[default]
    Unbounded,
    Bounded(f32),
}

impl Limit {
    /// Finite values bound the axis; NaN and infinities mean "no limit".
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Limit::Bounded(value.abs() as f32)
        } else {
            Limit::Unbounded
        }
    }

    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        match self {
            Limit::Unbounded => value,
            Limit::Bounded(l) => value.clamp(-l, l),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisLimit {
    pub x: Limit,
    pub y: Limit,
}

impl AxisLimit {
    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(v.x), self.y.clamp(v.y))
    }
}

/// A deserialized `data-*` attribute or options-object value.
#[derive(Clone, Debug, PartialEq)]
pub enum DataValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Parse a raw attribute string. `"null"` reads as unset.
pub fn deserialize(raw: &str) -> Option<DataValue> {
    match raw {
        "true" => Some(DataValue::Bool(true)),
        "false" => Some(DataValue::Bool(false)),
        "null" => None,
        s => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(DataValue::Number(n)),
            _ => Some(DataValue::Text(s.to_string())),
        },
    }
}

/// Every configurable field, with its attribute and option spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RelativeInput,
    ClipRelativeInput,
    CalibrationThreshold,
    CalibrationDelay,
    SupportDelay,
    CalibrateX,
    CalibrateY,
    InvertX,
    InvertY,
    LimitX,
    LimitY,
    ScalarX,
    ScalarY,
    FrictionX,
    FrictionY,
    OriginX,
    OriginY,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 17] = [
        ConfigKey::RelativeInput,
        ConfigKey::ClipRelativeInput,
        ConfigKey::CalibrationThreshold,
        ConfigKey::CalibrationDelay,
        ConfigKey::SupportDelay,
        ConfigKey::CalibrateX,
        ConfigKey::CalibrateY,
        ConfigKey::InvertX,
        ConfigKey::InvertY,
        ConfigKey::LimitX,
        ConfigKey::LimitY,
        ConfigKey::ScalarX,
        ConfigKey::ScalarY,
        ConfigKey::FrictionX,
        ConfigKey::FrictionY,
        ConfigKey::OriginX,
        ConfigKey::OriginY,
    ];

    /// Name used after `data-` on the scene element.
    pub fn attribute_name(self) -> &'static str {
        match self {
            ConfigKey::RelativeInput => "relative-input",
            ConfigKey::ClipRelativeInput => "clip-relative-input",
            ConfigKey::CalibrationThreshold => "calibration-threshold",
            ConfigKey::CalibrationDelay => "calibration-delay",
            ConfigKey::SupportDelay => "support-delay",
            ConfigKey::CalibrateX => "calibrate-x",
            ConfigKey::CalibrateY => "calibrate-y",
            ConfigKey::InvertX => "invert-x",
            ConfigKey::InvertY => "invert-y",
            ConfigKey::LimitX => "limit-x",
            ConfigKey::LimitY => "limit-y",
            ConfigKey::ScalarX => "scalar-x",
            ConfigKey::ScalarY => "scalar-y",
            ConfigKey::FrictionX => "friction-x",
            ConfigKey::FrictionY => "friction-y",
            ConfigKey::OriginX => "origin-x",
            ConfigKey::OriginY => "origin-y",
        }
    }

    /// Key used in the JavaScript options object.
    pub fn option_name(self) -> &'static str {
        match self {
            ConfigKey::RelativeInput => "relativeInput",
            ConfigKey::ClipRelativeInput => "clipRelativeInput",
            ConfigKey::CalibrationThreshold => "calibrationThreshold",
            ConfigKey::CalibrationDelay => "calibrationDelay",
            ConfigKey::SupportDelay => "supportDelay",
            ConfigKey::CalibrateX => "calibrateX",
            ConfigKey::CalibrateY => "calibrateY",
            ConfigKey::InvertX => "invertX",
            ConfigKey::InvertY => "invertY",
            ConfigKey::LimitX => "limitX",
            ConfigKey::LimitY => "limitY",
            ConfigKey::ScalarX => "scalarX",
            ConfigKey::ScalarY => "scalarY",
            ConfigKey::FrictionX => "frictionX",
            ConfigKey::FrictionY => "frictionY",
            ConfigKey::OriginX => "originX",
            ConfigKey::OriginY => "originY",
        }
    }
}

/// Settings for one parallax scene.
///
/// Built once from defaults, then caller options, then the scene element's
/// `data-*` attributes (see [`ParallaxConfig::layered`]). Afterwards only the
/// runtime setters on the scene touch it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub relative_input: bool,
    pub clip_relative_input: bool,
    pub calibration_threshold: f32,
    pub calibration_delay_ms: f64,
    pub support_delay_ms: f64,
    pub calibrate: BVec2,
    pub invert: BVec2,
    pub limit: AxisLimit,
    pub scalar: Vec2,
    pub friction: Vec2,
    pub origin: Vec2,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            relative_input: DEFAULT_RELATIVE_INPUT,
            clip_relative_input: DEFAULT_CLIP_RELATIVE_INPUT,
            calibration_threshold: DEFAULT_CALIBRATION_THRESHOLD,
            calibration_delay_ms: DEFAULT_CALIBRATION_DELAY_MS,
            support_delay_ms: DEFAULT_SUPPORT_DELAY_MS,
            calibrate: BVec2::new(DEFAULT_CALIBRATE_X, DEFAULT_CALIBRATE_Y),
            invert: BVec2::new(DEFAULT_INVERT_X, DEFAULT_INVERT_Y),
            limit: AxisLimit::default(),
            scalar: Vec2::new(DEFAULT_SCALAR_X, DEFAULT_SCALAR_Y),
            friction: Vec2::new(DEFAULT_FRICTION_X, DEFAULT_FRICTION_Y),
            origin: Vec2::new(DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y),
        }
    }
}

impl ParallaxConfig {
    /// Defaults, then `options`, then `attributes`; later layers win.
    pub fn layered<O, A>(options: O, attributes: A) -> Self
    where
        O: IntoIterator<Item = (ConfigKey, DataValue)>,
        A: IntoIterator<Item = (ConfigKey, DataValue)>,
    {
        let mut config = Self::default();
        for (key, value) in options.into_iter().chain(attributes) {
            config.apply(key, &value);
        }
        config
    }

    /// Set one field from a loosely typed value. Returns false (and logs) when
    /// the value cannot be used for that field.
    pub fn apply(&mut self, key: ConfigKey, value: &DataValue) -> bool {
        let applied = match key {
            ConfigKey::LimitX => {
                self.limit.x = limit_value(value);
                true
            }
            ConfigKey::LimitY => {
                self.limit.y = limit_value(value);
                true
            }
            ConfigKey::RelativeInput => set_flag(&mut self.relative_input, value),
            ConfigKey::ClipRelativeInput => set_flag(&mut self.clip_relative_input, value),
            ConfigKey::CalibrateX => set_flag(&mut self.calibrate.x, value),
            ConfigKey::CalibrateY => set_flag(&mut self.calibrate.y, value),
            ConfigKey::InvertX => set_flag(&mut self.invert.x, value),
            ConfigKey::InvertY => set_flag(&mut self.invert.y, value),
            ConfigKey::CalibrationThreshold => set_number(&mut self.calibration_threshold, value),
            ConfigKey::ScalarX => set_number(&mut self.scalar.x, value),
            ConfigKey::ScalarY => set_number(&mut self.scalar.y, value),
            ConfigKey::FrictionX => set_number(&mut self.friction.x, value),
            ConfigKey::FrictionY => set_number(&mut self.friction.y, value),
            ConfigKey::OriginX => set_number(&mut self.origin.x, value),
            ConfigKey::OriginY => set_number(&mut self.origin.y, value),
            ConfigKey::CalibrationDelay => match value {
                DataValue::Number(n) => {
                    self.calibration_delay_ms = n.max(0.0);
                    true
                }
                _ => false,
            },
            ConfigKey::SupportDelay => match value {
                DataValue::Number(n) => {
                    self.support_delay_ms = n.max(0.0);
                    true
                }
                _ => false,
            },
        };
        if !applied {
            log::warn!("[config] ignoring {:?} for {}", value, key.option_name());
        }
        applied
    }
}

fn limit_value(value: &DataValue) -> Limit {
    match value {
        DataValue::Number(n) => Limit::from_value(*n),
        _ => Limit::Unbounded,
    }
}

fn set_flag(field: &mut bool, value: &DataValue) -> bool {
    match value {
        DataValue::Bool(b) => *field = *b,
        DataValue::Number(n) => *field = *n != 0.0,
        DataValue::Text(_) => return false,
    }
    true
}

fn set_number(field: &mut f32, value: &DataValue) -> bool {
    match value {
        DataValue::Number(n) => {
            *field = *n as f32;
            true
        }
        _ => false,
    }
}
