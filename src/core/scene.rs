use super::calibration::CalibrationTimer;
use super::config::{Limit, ParallaxConfig};
use super::motion::{layer_offset, MotionState};
use super::platform::InputSource;
use super::sampler::{Frame, InputSampler};
use glam::Vec2;
use smallvec::SmallVec;

pub type Depths = SmallVec<[f32; 8]>;
pub type Offsets = SmallVec<[Vec2; 8]>;

/// Browser-independent state of one parallax scene.
///
/// The web layer feeds it events, element bounds and timestamps; it hands
/// back one pixel offset per layer each frame. Disabled scenes ignore input
/// and produce no offsets.
#[derive(Clone, Debug)]
pub struct ParallaxScene {
    config: ParallaxConfig,
    depths: Depths,
    offsets: Offsets,
    sampler: InputSampler,
    motion: MotionState,
    calibration_timer: CalibrationTimer,
    element: Frame,
    viewport_size: Vec2,
    enabled: bool,
}

impl ParallaxScene {
    pub fn new(config: ParallaxConfig, source: InputSource) -> Self {
        Self {
            config,
            depths: Depths::new(),
            offsets: Offsets::new(),
            sampler: InputSampler::new(source),
            motion: MotionState::default(),
            calibration_timer: CalibrationTimer::default(),
            element: Frame::default(),
            viewport_size: Vec2::ZERO,
            enabled: false,
        }
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn sampler(&self) -> &InputSampler {
        &self.sampler
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn calibration_timer(&self) -> &CalibrationTimer {
        &self.calibration_timer
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn source(&self) -> InputSource {
        self.sampler.source()
    }

    pub fn depths(&self) -> &[f32] {
        &self.depths
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    /// Replace the cached layer depths (after a re-scan of the layers).
    pub fn set_depths<I: IntoIterator<Item = f32>>(&mut self, depths: I) {
        self.depths = depths.into_iter().collect();
        self.offsets.clear();
    }

    /// Start listening on `source`. Returns false if already enabled.
    pub fn enable(&mut self, source: InputSource) -> bool {
        if self.enabled {
            return false;
        }
        self.enabled = true;
        self.sampler.reset(source);
        true
    }

    /// Returns false if already disabled.
    pub fn disable(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.enabled = false;
        true
    }

    /// (Re)start the calibration countdown; replaces any pending one.
    pub fn queue_calibration(&mut self, now_ms: f64, delay_ms: f64) {
        self.calibration_timer.queue(now_ms, delay_ms);
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport_size = Vec2::new(width, height);
    }

    #[inline]
    pub fn viewport(&self) -> Frame {
        Frame::new(Vec2::ZERO, self.viewport_size, self.config.origin)
    }

    #[inline]
    pub fn element(&self) -> Frame {
        self.element
    }

    pub fn on_orientation(&mut self, beta: Option<f32>, gamma: Option<f32>) -> bool {
        if !self.enabled {
            return false;
        }
        let viewport = self.viewport();
        self.sampler.sample_orientation(beta, gamma, &viewport)
    }

    pub fn on_pointer(&mut self, client_x: f32, client_y: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let viewport = self.viewport();
        self.sampler.sample_pointer(
            Vec2::new(client_x, client_y),
            &self.config,
            &self.element,
            &viewport,
        )
    }

    /// Support-delay check: drop to pointer input if no tilt ever arrived.
    pub fn fall_back_to_pointer(&mut self) -> bool {
        self.enabled && self.sampler.fall_back_to_pointer()
    }

    /// Run one animation frame against the element's current bounding box.
    /// `None` while disabled.
    pub fn frame(
        &mut self,
        now_ms: f64,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    ) -> Option<&[Vec2]> {
        if !self.enabled {
            return None;
        }
        self.element = Frame::new(
            Vec2::new(left, top),
            Vec2::new(width, height),
            self.config.origin,
        );

        if self.calibration_timer.poll(now_ms) {
            self.sampler.arm_calibration();
        }
        let drift = (self.sampler.input() - self.sampler.calibration()).abs();
        if drift.max_element() > self.config.calibration_threshold
            && !self.calibration_timer.is_pending()
            && !self.sampler.calibration_armed()
        {
            log::debug!(
                "[scene] drift ({:.2},{:.2}) over threshold, recalibrating in {}ms",
                drift.x,
                drift.y,
                self.config.calibration_delay_ms
            );
            self.calibration_timer
                .queue(now_ms, self.config.calibration_delay_ms);
        }

        let velocity = self.motion.step(&self.sampler, &self.config, &self.element);
        let invert = self.config.invert;
        self.offsets.clear();
        self.offsets
            .extend(self.depths.iter().map(|&d| layer_offset(velocity, d, invert)));
        Some(self.offsets.as_slice())
    }

    pub fn calibrate(&mut self, x: Option<bool>, y: Option<bool>) {
        set_axis(&mut self.config.calibrate.x, x);
        set_axis(&mut self.config.calibrate.y, y);
    }

    pub fn invert(&mut self, x: Option<bool>, y: Option<bool>) {
        set_axis(&mut self.config.invert.x, x);
        set_axis(&mut self.config.invert.y, y);
    }

    pub fn friction(&mut self, x: Option<f32>, y: Option<f32>) {
        set_axis(&mut self.config.friction.x, x);
        set_axis(&mut self.config.friction.y, y);
    }

    pub fn scalar(&mut self, x: Option<f32>, y: Option<f32>) {
        set_axis(&mut self.config.scalar.x, x);
        set_axis(&mut self.config.scalar.y, y);
    }

    pub fn limit(&mut self, x: Option<Limit>, y: Option<Limit>) {
        set_axis(&mut self.config.limit.x, x);
        set_axis(&mut self.config.limit.y, y);
    }

    pub fn origin(&mut self, x: Option<f32>, y: Option<f32>) {
        set_axis(&mut self.config.origin.x, x);
        set_axis(&mut self.config.origin.y, y);
    }
}

#[inline]
fn set_axis<T>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}
