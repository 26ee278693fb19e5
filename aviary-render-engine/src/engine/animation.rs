//! Per-habitat idle motion.
//!
//! Each profile is tuned as a per-frame rate at `NOMINAL_FRAME_RATE`. The
//! offset is evaluated in closed form from the scene build time, so it is a
//! pure function of elapsed time: repeated calls with the same time give the
//! same offset and nothing drifts over long sessions.

use crate::engine::habitat::{AnimationProfile, PlacedBird};
use crate::engine::scene::{BirdInstance, PlacedBirds};
use bevy::prelude::*;
use constants::render_settings::NOMINAL_FRAME_RATE;

/// Vertical rate and angular frequency of a sine bob.
struct Wave {
    rate: f32,
    frequency: f32,
}

impl Wave {
    const fn new(rate: f32, frequency: f32) -> Self {
        Self { rate, frequency }
    }

    fn amplitude(&self) -> f32 {
        self.rate * NOMINAL_FRAME_RATE / self.frequency
    }

    /// Displacement after `t` seconds of moving at `rate·sin(ω·t + phase)` per frame.
    fn integrated_sin(&self, t: f32, phase: f32) -> f32 {
        self.amplitude() * (phase.cos() - (self.frequency * t + phase).cos())
    }

    /// Displacement after `t` seconds of moving at `rate·cos(ω·t + phase)` per frame.
    fn integrated_cos(&self, t: f32, phase: f32) -> f32 {
        self.amplitude() * ((self.frequency * t + phase).sin() - phase.sin())
    }

    /// Hop height `amplitude·(|sin(ω·t + phase)| - |sin(phase)|)`, zero at `t = 0`.
    ///
    /// Not the integral of the `|sin|` rate: that integral only ever grows, so
    /// a pecking bird would climb without bound. The hop keeps the same
    /// amplitude and period but stays within `±amplitude` of the perch.
    fn hop(&self, t: f32, phase: f32) -> f32 {
        self.amplitude() * ((self.frequency * t + phase).sin().abs() - phase.sin().abs())
    }
}

const BOBBING: Wave = Wave::new(0.003, 0.8);
const FLOATING_LIFT: Wave = Wave::new(0.004, 0.3);
const FLOATING_DRIFT: Wave = Wave::new(0.002, 0.2);
const PERCHING: Wave = Wave::new(0.001, 1.2);
const PECKING: Wave = Wave::new(0.002, 2.0);

impl AnimationProfile {
    /// Offset from the laid-out position `elapsed` seconds into the scene.
    /// `phase_index` de-correlates neighbouring birds.
    pub fn offset(self, phase_index: usize, elapsed: f32) -> Vec3 {
        let phase = phase_index as f32;
        match self {
            AnimationProfile::Bobbing => Vec3::Y * BOBBING.integrated_sin(elapsed, phase),
            AnimationProfile::Floating => Vec3::new(
                FLOATING_DRIFT.integrated_cos(elapsed, phase),
                FLOATING_LIFT.integrated_sin(elapsed, phase),
                0.0,
            ),
            AnimationProfile::Perching => Vec3::Y * PERCHING.integrated_sin(elapsed, phase),
            AnimationProfile::Drumming | AnimationProfile::Hovering => Vec3::ZERO,
            AnimationProfile::Pecking => Vec3::Y * PECKING.hop(elapsed, phase),
        }
    }

    /// Profiles whose offset is zero at every time.
    pub fn is_stationary(self) -> bool {
        matches!(self, AnimationProfile::Drumming | AnimationProfile::Hovering)
    }
}

/// Set every bird's transient offset for the given time since scene build.
pub fn animate(birds: &mut [PlacedBird], elapsed: f32) {
    for bird in birds.iter_mut() {
        bird.animation_offset = bird.animation.offset(bird.index, elapsed);
    }
}

/// Advances the placed birds and moves their root entities.
pub fn animate_birds(
    time: Res<Time>,
    placed: Option<ResMut<PlacedBirds>>,
    mut instances: Query<(&BirdInstance, &mut Transform)>,
) {
    let Some(mut placed) = placed else {
        return;
    };

    let elapsed = (time.elapsed_secs() - placed.built_at).max(0.0);
    animate(&mut placed.birds, elapsed);

    for (instance, mut transform) in &mut instances {
        if instance.generation != placed.generation {
            continue;
        }
        let Some(bird) = placed.birds.get(instance.bird_index) else {
            continue;
        };
        // Spawned at their laid-out position, never moved since.
        if bird.animation.is_stationary() {
            continue;
        }
        transform.translation = bird.presented_position();
    }
}
