// Host-side tests for the motion integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod platform {
        include!("../src/core/platform.rs");
    }
    pub mod sampler {
        include!("../src/core/sampler.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use crate::core::config::{AxisLimit, Limit, ParallaxConfig};
use crate::core::motion::*;
use crate::core::platform::InputSource;
use crate::core::sampler::{Frame, InputSampler};
use glam::{BVec2, Vec2};

fn frame(w: f32, h: f32) -> Frame {
    Frame::new(Vec2::ZERO, Vec2::new(w, h), Vec2::splat(0.5))
}

fn pointer_sampler(x: f32, y: f32, config: &ParallaxConfig, view: &Frame) -> InputSampler {
    let mut s = InputSampler::new(InputSource::Pointer);
    s.sample_pointer(Vec2::new(x, y), config, view, view);
    s
}

#[test]
fn smoothing_converges_without_overshoot() {
    let target = Vec2::new(10.0, -4.0);
    for f in [0.05_f32, 0.1, 0.5, 0.9, 1.0] {
        let friction = Vec2::splat(f);
        let mut v = Vec2::ZERO;
        for _ in 0..400 {
            let next = smooth(v, target, friction);
            assert!(next.x >= v.x && next.x <= target.x, "x overshoot at friction {}", f);
            assert!(next.y <= v.y && next.y >= target.y, "y overshoot at friction {}", f);
            v = next;
        }
        assert!((v - target).abs().max_element() < 1e-3, "friction {} ended at {:?}", f, v);
    }
}

#[test]
fn unit_friction_jumps_straight_to_target() {
    let v = smooth(Vec2::new(3.0, 3.0), Vec2::new(-7.0, 12.0), Vec2::ONE);
    assert_eq!(v, Vec2::new(-7.0, 12.0));
}

#[test]
fn out_of_range_friction_is_clamped() {
    let v = smooth(Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::new(2.0, -1.0));
    assert_eq!(v, Vec2::new(10.0, 0.0));
}

#[test]
fn motion_scales_with_element_size() {
    let config = ParallaxConfig::default();
    let view = frame(1000.0, 800.0);
    let s = pointer_sampler(1000.0, 800.0, &config, &view);
    let m = target_motion(&s, &config, &view);
    // input (1, 1) * size * 10%
    assert!((m - Vec2::new(100.0, 80.0)).abs().max_element() < 1e-3, "got {:?}", m);
}

#[test]
fn limit_clamps_before_smoothing() {
    let config = ParallaxConfig {
        limit: AxisLimit {
            x: Limit::Bounded(5.0),
            y: Limit::Unbounded,
        },
        friction: Vec2::ONE,
        ..Default::default()
    };
    let view = frame(1000.0, 800.0);

    for (px, py) in [(1000.0, 800.0), (0.0, 0.0), (900.0, 100.0)] {
        let s = pointer_sampler(px, py, &config, &view);
        let mut state = MotionState::default();
        let v = state.step(&s, &config, &view);
        assert!(state.motion.x.abs() <= 5.0);
        assert!(v.x.abs() <= 5.0);
    }

    let s = pointer_sampler(1000.0, 800.0, &config, &view);
    let m = target_motion(&s, &config, &view);
    assert_eq!(m.x, 5.0);
    assert!((m.y - 80.0).abs() < 1e-3);
}

#[test]
fn velocity_follows_motion_by_friction() {
    let config = ParallaxConfig::default();
    let view = frame(1000.0, 800.0);
    let s = pointer_sampler(1000.0, 800.0, &config, &view);
    let mut state = MotionState::default();

    let v1 = state.step(&s, &config, &view);
    assert!((v1 - Vec2::new(10.0, 8.0)).abs().max_element() < 1e-3);
    let v2 = state.step(&s, &config, &view);
    assert!((v2 - Vec2::new(19.0, 15.2)).abs().max_element() < 1e-3);
}

#[test]
fn portrait_swaps_axes() {
    let config = ParallaxConfig {
        calibrate: BVec2::new(false, false),
        ..Default::default()
    };
    let portrait = frame(800.0, 1000.0);
    let mut s = InputSampler::new(InputSource::Orientation);
    s.sample_orientation(Some(30.0), Some(60.0), &portrait);
    assert!(s.is_portrait());

    let element = frame(100.0, 100.0);
    let m = target_motion(&s, &config, &element);
    // input (1, 2) read back as (2, 1)
    assert!((m - Vec2::new(20.0, 10.0)).abs().max_element() < 1e-4, "got {:?}", m);
}

#[test]
fn calibrated_axes_subtract_origin() {
    let config = ParallaxConfig {
        calibrate: BVec2::new(true, true),
        ..Default::default()
    };
    let landscape = frame(1000.0, 800.0);
    let mut s = InputSampler::new(InputSource::Orientation);
    s.sample_orientation(Some(30.0), Some(60.0), &landscape);
    let element = frame(100.0, 100.0);
    assert_eq!(target_motion(&s, &config, &element), Vec2::ZERO);

    s.sample_orientation(Some(45.0), Some(60.0), &landscape);
    let m = target_motion(&s, &config, &element);
    assert!((m - Vec2::new(5.0, 0.0)).abs().max_element() < 1e-4);
}

#[test]
fn zero_depth_layers_stay_put() {
    for v in [Vec2::new(12.0, -3.0), Vec2::new(1e6, 1e6), Vec2::ZERO] {
        let o = layer_offset(v, 0.0, BVec2::new(true, true));
        assert_eq!(o, Vec2::ZERO);
    }
}

#[test]
fn invert_flags_are_independent() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(layer_offset(v, 2.0, BVec2::new(true, false)), Vec2::new(-6.0, 8.0));
    assert_eq!(layer_offset(v, 2.0, BVec2::new(false, true)), Vec2::new(6.0, -8.0));
    assert_eq!(layer_offset(v, 2.0, BVec2::new(false, false)), Vec2::new(6.0, 8.0));
    assert_eq!(layer_offset(v, 2.0, BVec2::new(true, true)), Vec2::new(-6.0, -8.0));
}
