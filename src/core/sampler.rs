use super::config::ParallaxConfig;
use super::constants::ORIENTATION_DEGREES_PER_UNIT;
use super::platform::InputSource;
use glam::Vec2;

/// Reference rectangle used to normalize input: the viewport or the scene
/// element's bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub size: Vec2,
    /// Offset of the input origin from `position`.
    pub center: Vec2,
    /// Largest distance from the center to an edge, per axis.
    pub range: Vec2,
}

impl Frame {
    pub fn new(position: Vec2, size: Vec2, origin: Vec2) -> Self {
        let center = size * origin;
        let range = center.max(size - center);
        Self {
            position,
            size,
            center,
            range,
        }
    }

    /// Map a client coordinate into roughly [-1, 1] around the center.
    #[inline]
    pub fn normalize(&self, client: Vec2) -> Vec2 {
        let d = client - self.position - self.center;
        Vec2::new(safe_div(d.x, self.range.x), safe_div(d.y, self.range.y))
    }

    #[inline]
    pub fn clip(&self, client: Vec2) -> Vec2 {
        client.clamp(self.position, self.position + self.size.max(Vec2::ZERO))
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.size.y > self.size.x
    }
}

#[inline]
fn safe_div(n: f32, d: f32) -> f32 {
    if d.abs() > f32::EPSILON {
        n / d
    } else {
        0.0
    }
}

/// Turns raw pointer or tilt events into the normalized input pair and keeps
/// the calibration origin subtracted from it.
#[derive(Clone, Debug)]
pub struct InputSampler {
    source: InputSource,
    input: Vec2,
    calibration: Vec2,
    portrait: Option<bool>,
    calibration_armed: bool,
    orientation_seen: bool,
}

impl InputSampler {
    pub fn new(source: InputSource) -> Self {
        let mut s = Self {
            source,
            input: Vec2::ZERO,
            calibration: Vec2::ZERO,
            portrait: None,
            calibration_armed: true,
            orientation_seen: false,
        };
        s.reset(source);
        s
    }

    /// Prepare for (re)starting on `source`.
    pub fn reset(&mut self, source: InputSource) {
        self.source = source;
        match source {
            InputSource::Orientation => self.portrait = None,
            InputSource::Pointer => {
                self.calibration = Vec2::ZERO;
                self.portrait = Some(false);
            }
        }
    }

    #[inline]
    pub fn source(&self) -> InputSource {
        self.source
    }

    #[inline]
    pub fn input(&self) -> Vec2 {
        self.input
    }

    #[inline]
    pub fn calibration(&self) -> Vec2 {
        self.calibration
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.portrait.unwrap_or(false)
    }

    #[inline]
    pub fn calibration_armed(&self) -> bool {
        self.calibration_armed
    }

    pub fn orientation_seen(&self) -> bool {
        self.orientation_seen
    }

    /// The next orientation sample becomes the new calibration origin.
    pub fn arm_calibration(&mut self) {
        self.calibration_armed = true;
    }

    /// Accept a tilt reading in degrees. Null angles are dropped, as is any
    /// sample while the sampler listens to the pointer.
    pub fn sample_orientation(
        &mut self,
        beta: Option<f32>,
        gamma: Option<f32>,
        viewport: &Frame,
    ) -> bool {
        if self.source != InputSource::Orientation {
            return false;
        }
        let (Some(beta), Some(gamma)) = (beta, gamma) else {
            return false;
        };
        self.orientation_seen = true;
        let reading = Vec2::new(beta, gamma) / ORIENTATION_DEGREES_PER_UNIT;

        let portrait = viewport.is_portrait();
        if self.portrait != Some(portrait) {
            self.portrait = Some(portrait);
            self.calibration_armed = true;
        }
        if self.calibration_armed {
            self.calibration_armed = false;
            self.calibration = reading;
            log::debug!(
                "[sampler] calibrated at ({:.3},{:.3})",
                reading.x,
                reading.y
            );
        }
        self.input = reading;
        true
    }

    /// Accept a pointer position in client coordinates.
    pub fn sample_pointer(
        &mut self,
        client: Vec2,
        config: &ParallaxConfig,
        element: &Frame,
        viewport: &Frame,
    ) -> bool {
        if self.source != InputSource::Pointer {
            return false;
        }
        self.input = if config.relative_input {
            let client = if config.clip_relative_input {
                element.clip(client)
            } else {
                client
            };
            element.normalize(client)
        } else {
            viewport.normalize(client)
        };
        true
    }

    /// Switch to pointer input when orientation was expected but never
    /// delivered a sample. Returns whether the switch happened.
    pub fn fall_back_to_pointer(&mut self) -> bool {
        if self.source == InputSource::Orientation && !self.orientation_seen {
            self.reset(InputSource::Pointer);
            true
        } else {
            false
        }
    }
}
