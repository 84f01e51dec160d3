use super::config::ParallaxConfig;
use super::sampler::{Frame, InputSampler};
use glam::{BVec2, Vec2};

/// Per-scene motion integrator.
///
/// `motion` is the clamped target displacement for the current frame and
/// `velocity` the smoothed value that actually drives the layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub motion: Vec2,
    pub velocity: Vec2,
}

impl MotionState {
    /// Advance one animation frame and return the new velocity.
    pub fn step(
        &mut self,
        sampler: &InputSampler,
        config: &ParallaxConfig,
        element: &Frame,
    ) -> Vec2 {
        self.motion = target_motion(sampler, config, element);
        self.velocity = smooth(self.velocity, self.motion, config.friction);
        self.velocity
    }
}

/// Calibrated (or raw) input, axis-swapped in portrait, scaled to pixels of
/// the element and clamped by the configured limit.
pub fn target_motion(sampler: &InputSampler, config: &ParallaxConfig, element: &Frame) -> Vec2 {
    let raw = sampler.input();
    let delta = raw - sampler.calibration();
    let m = if sampler.is_portrait() {
        Vec2::new(
            if config.calibrate.x { delta.y } else { raw.y },
            if config.calibrate.y { delta.x } else { raw.x },
        )
    } else {
        Vec2::new(
            if config.calibrate.x { delta.x } else { raw.x },
            if config.calibrate.y { delta.y } else { raw.y },
        )
    };
    let scaled = m * element.size * (config.scalar / 100.0);
    let scaled = Vec2::new(finite_or_zero(scaled.x), finite_or_zero(scaled.y));
    config.limit.apply(scaled)
}

/// First-order low-pass step: `current += (target - current) * friction`.
#[inline]
pub fn smooth(current: Vec2, target: Vec2, friction: Vec2) -> Vec2 {
    let f = friction.clamp(Vec2::ZERO, Vec2::ONE);
    current + (target - current) * f
}

/// Pixel offset of a layer with the given depth.
#[inline]
pub fn layer_offset(velocity: Vec2, depth: f32, invert: BVec2) -> Vec2 {
    let sign = Vec2::new(
        if invert.x { -1.0 } else { 1.0 },
        if invert.y { -1.0 } else { 1.0 },
    );
    velocity * depth * sign
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
