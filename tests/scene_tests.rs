// Host-side tests for the scene state machine and calibration timing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod calibration {
        include!("../src/core/calibration.rs");
    }
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
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::calibration::CalibrationTimer;
use crate::core::config::{Limit, ParallaxConfig};
use crate::core::constants::ORIENTATION_DEGREES_PER_UNIT;
use crate::core::platform::InputSource;
use crate::core::scene::ParallaxScene;
use glam::{BVec2, Vec2};

fn pointer_scene(depths: &[f32]) -> ParallaxScene {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Pointer);
    scene.set_depths(depths.iter().copied());
    scene.resize_viewport(1000.0, 800.0);
    assert!(scene.enable(InputSource::Pointer));
    scene
}

fn run_frame(scene: &mut ParallaxScene, now_ms: f64) -> Option<Vec<Vec2>> {
    scene
        .frame(now_ms, 0.0, 0.0, 1000.0, 800.0)
        .map(|offsets| offsets.to_vec())
}

#[test]
fn timer_fires_once_after_deadline() {
    let mut t = CalibrationTimer::default();
    assert!(!t.is_pending());
    assert!(!t.poll(1e9));

    t.queue(0.0, 500.0);
    assert!(!t.poll(499.9));
    assert!(t.poll(500.0));
    assert!(!t.poll(600.0));
    assert!(!t.is_pending());
}

#[test]
fn requeue_replaces_pending_timer() {
    let mut t = CalibrationTimer::default();
    t.queue(0.0, 500.0);
    t.queue(100.0, 500.0);
    assert_eq!(t.deadline_ms(), Some(600.0));
    assert!(!t.poll(550.0));
    assert!(t.poll(600.0));

    t.queue(0.0, 500.0);
    t.cancel();
    assert!(!t.poll(1000.0));
}

#[test]
fn new_scene_starts_disabled() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Pointer);
    assert!(!scene.is_enabled());
    assert!(!scene.on_pointer(10.0, 10.0));
    assert!(run_frame(&mut scene, 0.0).is_none());
}

#[test]
fn enable_and_disable_are_idempotent() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Pointer);
    assert!(scene.enable(InputSource::Pointer));
    assert!(!scene.enable(InputSource::Pointer));
    assert!(scene.disable());
    assert!(!scene.disable());
    assert!(scene.enable(InputSource::Pointer));
}

#[test]
fn first_frame_moves_layers_by_depth() {
    let mut scene = pointer_scene(&[0.0, 1.0, 2.0]);
    assert!(scene.on_pointer(1000.0, 800.0));
    let offsets = run_frame(&mut scene, 16.0).unwrap();

    assert_eq!(offsets.len(), 3);
    assert_eq!(offsets[0], Vec2::ZERO);
    // velocity (10, 8), inverted on both axes by default
    assert!((offsets[1] - Vec2::new(-10.0, -8.0)).abs().max_element() < 1e-3);
    assert!((offsets[2] - offsets[1] * 2.0).abs().max_element() < 1e-3);
}

#[test]
fn disabled_scene_ignores_input() {
    let mut scene = pointer_scene(&[1.0]);
    scene.on_pointer(1000.0, 800.0);
    for i in 0..5 {
        run_frame(&mut scene, i as f64 * 16.0);
    }
    let input = scene.sampler().input();
    let offsets = scene.offsets().to_vec();
    assert_ne!(offsets[0], Vec2::ZERO);

    assert!(scene.disable());
    assert!(!scene.on_pointer(0.0, 0.0));
    assert!(run_frame(&mut scene, 100.0).is_none());
    assert_eq!(scene.sampler().input(), input);
    assert_eq!(scene.offsets(), offsets.as_slice());
}

#[test]
fn large_drift_recalibrates_after_delay() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Orientation);
    scene.set_depths([1.0]);
    scene.resize_viewport(1000.0, 800.0);
    scene.enable(InputSource::Orientation);

    // first reading calibrates at rest
    assert!(scene.on_orientation(Some(0.0), Some(0.0)));
    assert_eq!(scene.sampler().calibration(), Vec2::ZERO);

    // jump 150 units on x
    let beta = 150.0 * ORIENTATION_DEGREES_PER_UNIT;
    scene.on_orientation(Some(beta), Some(0.0));
    run_frame(&mut scene, 0.0);
    assert_eq!(scene.calibration_timer().deadline_ms(), Some(500.0));

    run_frame(&mut scene, 499.0);
    scene.on_orientation(Some(beta), Some(0.0));
    assert_eq!(scene.sampler().calibration(), Vec2::ZERO);

    run_frame(&mut scene, 500.0);
    assert!(scene.sampler().calibration_armed());
    scene.on_orientation(Some(beta), Some(0.0));
    assert!((scene.sampler().calibration() - Vec2::new(150.0, 0.0)).abs().max_element() < 1e-3);

    run_frame(&mut scene, 516.0);
    assert!(!scene.calibration_timer().is_pending());
}

#[test]
fn small_drift_does_not_queue_calibration() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Orientation);
    scene.resize_viewport(1000.0, 800.0);
    scene.enable(InputSource::Orientation);
    scene.on_orientation(Some(0.0), Some(0.0));
    scene.on_orientation(Some(90.0), Some(-90.0));
    run_frame(&mut scene, 0.0);
    assert!(!scene.calibration_timer().is_pending());
}

#[test]
fn queued_calibration_arms_sampler() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Orientation);
    scene.resize_viewport(1000.0, 800.0);
    scene.enable(InputSource::Orientation);
    scene.on_orientation(Some(0.0), Some(0.0));
    scene.queue_calibration(0.0, 500.0);

    run_frame(&mut scene, 250.0);
    assert!(!scene.sampler().calibration_armed());
    run_frame(&mut scene, 500.0);
    assert!(scene.sampler().calibration_armed());
}

#[test]
fn fallback_switches_to_pointer() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Orientation);
    scene.set_depths([1.0]);
    scene.resize_viewport(1000.0, 800.0);
    assert!(!scene.fall_back_to_pointer());

    scene.enable(InputSource::Orientation);
    assert!(!scene.on_pointer(1000.0, 800.0));
    assert!(scene.fall_back_to_pointer());
    assert_eq!(scene.source(), InputSource::Pointer);
    assert!(scene.on_pointer(1000.0, 800.0));
    assert!(!scene.on_orientation(Some(10.0), Some(10.0)));
    assert!(!scene.fall_back_to_pointer());
}

#[test]
fn runtime_setters_only_touch_given_axes() {
    let mut scene = ParallaxScene::new(ParallaxConfig::default(), InputSource::Pointer);
    scene.invert(Some(false), None);
    scene.calibrate(None, Some(false));
    scene.friction(Some(0.5), None);
    scene.scalar(None, Some(25.0));
    scene.limit(Some(Limit::Bounded(3.0)), None);
    scene.origin(Some(0.0), Some(1.0));

    let c = scene.config();
    assert_eq!(c.invert, BVec2::new(false, true));
    assert_eq!(c.calibrate, BVec2::new(false, false));
    assert_eq!(c.friction, Vec2::new(0.5, 0.1));
    assert_eq!(c.scalar, Vec2::new(10.0, 25.0));
    assert_eq!(c.limit.x, Limit::Bounded(3.0));
    assert_eq!(c.limit.y, Limit::Unbounded);
    assert_eq!(c.origin, Vec2::new(0.0, 1.0));
}

#[test]
fn origin_change_applies_to_next_sample() {
    let mut scene = pointer_scene(&[1.0]);
    scene.on_pointer(0.0, 0.0);
    assert!((scene.sampler().input() - Vec2::new(-1.0, -1.0)).abs().max_element() < 1e-5);

    scene.origin(Some(0.0), Some(0.0));
    scene.on_pointer(0.0, 0.0);
    assert_eq!(scene.sampler().input(), Vec2::ZERO);
}

#[test]
fn limit_bounds_layer_travel() {
    let mut scene = pointer_scene(&[1.0]);
    scene.limit(Some(Limit::Bounded(2.0)), Some(Limit::Bounded(2.0)));
    scene.friction(Some(1.0), Some(1.0));
    scene.on_pointer(1000.0, 800.0);
    let offsets = run_frame(&mut scene, 0.0).unwrap();
    assert_eq!(offsets[0], Vec2::new(-2.0, -2.0));
}

#[test]
fn rescan_replaces_depths() {
    let mut scene = pointer_scene(&[1.0, 2.0]);
    scene.on_pointer(1000.0, 800.0);
    assert_eq!(run_frame(&mut scene, 0.0).unwrap().len(), 2);

    scene.set_depths([0.5, 1.0, 1.5, 2.0]);
    assert_eq!(scene.depths(), &[0.5, 1.0, 1.5, 2.0]);
    assert_eq!(run_frame(&mut scene, 16.0).unwrap().len(), 4);
}
