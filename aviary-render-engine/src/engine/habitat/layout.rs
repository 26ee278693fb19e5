use super::environment::{EnvironmentConfig, LayoutPattern};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

const BRANCH_RADIUS: f32 = 2.5;
const BRANCH_BASE_HEIGHT: f32 = 2.0;
const BRANCH_TIER_STEP: f32 = 1.5;
const BRANCH_TIERS: usize = 3;

const TRUNK_RADIUS: f32 = 1.2;
const TRUNK_BASE_HEIGHT: f32 = 3.0;
const TRUNK_STEP: f32 = 2.0;

const FLOWER_MIN_RADIUS: f32 = 1.5;
const FLOWER_RADIUS_JITTER: f32 = 1.0;
const FLOWER_MIN_HEIGHT: f32 = 0.5;
const FLOWER_HEIGHT_JITTER: f32 = 2.0;

const LINEAR_SPACING: f32 = 1.5;
const RESTING_HEIGHT: f32 = 0.5;
const LINEAR_HEIGHT: f32 = 1.0;

/// Compute one position per bird, in input order, for a habitat zone.
///
/// Deterministic for every pattern except `Scattered` and `Flowers`, which
/// draw from `rng`.
pub fn compute_positions<R: Rng>(
    config: &EnvironmentConfig,
    bird_count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    if bird_count == 0 {
        return Vec::new();
    }

    let anchor = config.anchor;
    let size = config.size;
    let count = bird_count as f32;
    let angle_of = |index: usize| index as f32 / count * TAU;

    match config.pattern {
        LayoutPattern::Circular => {
            let radius = size.x / 3.0;
            (0..bird_count)
                .map(|i| ring_point(anchor, angle_of(i), radius, RESTING_HEIGHT))
                .collect()
        }
        LayoutPattern::Scattered => (0..bird_count)
            .map(|_| {
                Vec3::new(
                    anchor.x + (rng.gen_range(0.0f32..1.0) - 0.5) * size.x,
                    anchor.y + rng.gen_range(0.0f32..1.0) * size.y,
                    anchor.z + (rng.gen_range(0.0f32..1.0) - 0.5) * size.z,
                )
            })
            .collect(),
        LayoutPattern::Grid => {
            let cols = (count.sqrt().ceil() as usize).max(1);
            let half = cols as f32 / 2.0;
            let cell = Vec2::new(size.x / cols as f32, size.z / cols as f32);
            (0..bird_count)
                .map(|i| {
                    let col = (i % cols) as f32;
                    let row = (i / cols) as f32;
                    Vec3::new(
                        anchor.x + (col - half) * cell.x,
                        anchor.y + RESTING_HEIGHT,
                        anchor.z + (row - half) * cell.y,
                    )
                })
                .collect()
        }
        LayoutPattern::Branches => (0..bird_count)
            .map(|i| {
                let height =
                    BRANCH_BASE_HEIGHT + (i % BRANCH_TIERS) as f32 * BRANCH_TIER_STEP;
                ring_point(anchor, angle_of(i), BRANCH_RADIUS, height)
            })
            .collect(),
        LayoutPattern::Trunk => (0..bird_count)
            .map(|i| {
                let height = TRUNK_BASE_HEIGHT + i as f32 * TRUNK_STEP;
                ring_point(anchor, angle_of(i), TRUNK_RADIUS, height)
            })
            .collect(),
        LayoutPattern::Flowers => (0..bird_count)
            .map(|i| {
                let radius = FLOWER_MIN_RADIUS + rng.gen_range(0.0..FLOWER_RADIUS_JITTER);
                let height = FLOWER_MIN_HEIGHT + rng.gen_range(0.0..FLOWER_HEIGHT_JITTER);
                ring_point(anchor, angle_of(i), radius, height)
            })
            .collect(),
        LayoutPattern::Linear => (0..bird_count)
            .map(|i| {
                Vec3::new(
                    anchor.x + (i as f32 - count / 2.0) * LINEAR_SPACING,
                    anchor.y + LINEAR_HEIGHT,
                    anchor.z,
                )
            })
            .collect(),
    }
}

fn ring_point(anchor: Vec3, angle: f32, radius: f32, height: f32) -> Vec3 {
    Vec3::new(
        anchor.x + angle.cos() * radius,
        anchor.y + height,
        anchor.z + angle.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::habitat::environment::{AnimationProfile, HabitatCategory};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f32 = 1e-4;

    fn config(pattern: LayoutPattern, anchor: Vec3, size: Vec3) -> EnvironmentConfig {
        EnvironmentConfig {
            name: "test",
            colour: 0xFFFFFF,
            anchor,
            size,
            pattern,
            animation: AnimationProfile::Perching,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn empty_group_yields_no_positions() {
        for habitat in HabitatCategory::ALL {
            assert!(compute_positions(&habitat.config(), 0, &mut rng()).is_empty());
        }
    }

    #[test]
    fn circular_places_birds_on_quarter_turns() {
        let cfg = config(LayoutPattern::Circular, Vec3::ZERO, Vec3::new(12.0, 1.0, 12.0));
        let positions = compute_positions(&cfg, 4, &mut rng());
        let expected = [
            Vec3::new(4.0, 0.5, 0.0),
            Vec3::new(0.0, 0.5, 4.0),
            Vec3::new(-4.0, 0.5, 0.0),
            Vec3::new(0.0, 0.5, -4.0),
        ];
        for (got, want) in positions.iter().zip(expected) {
            assert!(got.abs_diff_eq(want, EPS), "{got} != {want}");
            assert!((Vec2::new(got.x, got.z).length() - 4.0).abs() < EPS);
        }
    }

    #[test]
    fn trunk_climbs_two_units_per_bird() {
        let anchor = Vec3::new(6.0, 5.0, 0.0);
        let cfg = config(LayoutPattern::Trunk, anchor, Vec3::new(4.0, 12.0, 4.0));
        let positions = compute_positions(&cfg, 3, &mut rng());
        assert_eq!(positions.len(), 3);
        for pair in positions.windows(2) {
            assert!((pair[1].y - pair[0].y - 2.0).abs() < EPS);
        }
        assert!((positions[0].y - (anchor.y + 3.0)).abs() < EPS);
        for p in &positions {
            let radial = Vec2::new(p.x - anchor.x, p.z - anchor.z).length();
            assert!((radial - 1.2).abs() < EPS);
        }
    }

    #[test]
    fn trunk_height_ignores_group_size() {
        let cfg = config(LayoutPattern::Trunk, Vec3::ZERO, Vec3::ONE);
        let small = compute_positions(&cfg, 2, &mut rng());
        let large = compute_positions(&cfg, 7, &mut rng());
        assert!((small[1].y - large[1].y).abs() < EPS);
    }

    #[test]
    fn branches_cycle_through_three_tiers() {
        let cfg = config(LayoutPattern::Branches, Vec3::ZERO, Vec3::ONE);
        let heights: Vec<f32> = compute_positions(&cfg, 5, &mut rng())
            .iter()
            .map(|p| p.y)
            .collect();
        let expected = [2.0, 3.5, 5.0, 2.0, 3.5];
        for (got, want) in heights.iter().zip(expected) {
            assert!((got - want).abs() < EPS);
        }
    }

    #[test]
    fn grid_uses_ceil_sqrt_columns() {
        let cfg = config(LayoutPattern::Grid, Vec3::ZERO, Vec3::new(6.0, 1.0, 6.0));
        let positions = compute_positions(&cfg, 5, &mut rng());
        // 3 columns, 2 units per cell, offset by half the column count.
        assert!(positions[0].abs_diff_eq(Vec3::new(-3.0, 0.5, -3.0), EPS));
        assert!(positions[2].abs_diff_eq(Vec3::new(1.0, 0.5, -3.0), EPS));
        assert!(positions[3].abs_diff_eq(Vec3::new(-3.0, 0.5, -1.0), EPS));
    }

    #[test]
    fn linear_is_centred_on_anchor() {
        let cfg = config(LayoutPattern::Linear, Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
        let positions = compute_positions(&cfg, 4, &mut rng());
        let xs: Vec<f32> = positions.iter().map(|p| p.x).collect();
        let expected = [-2.0, -0.5, 1.0, 2.5];
        for (got, want) in xs.iter().zip(expected) {
            assert!((got - want).abs() < EPS);
        }
        assert!(positions.iter().all(|p| p.y == 3.0 && p.z == 3.0));
    }

    #[test]
    fn scattered_stays_inside_bounds() {
        let anchor = Vec3::new(-8.0, -1.0, 8.0);
        let size = Vec3::new(6.0, 1.0, 6.0);
        let cfg = config(LayoutPattern::Scattered, anchor, size);
        for p in compute_positions(&cfg, 50, &mut rng()) {
            assert!((p.x - anchor.x).abs() <= size.x / 2.0);
            assert!((p.z - anchor.z).abs() <= size.z / 2.0);
            assert!(p.y >= anchor.y && p.y <= anchor.y + size.y);
        }
    }

    #[test]
    fn flowers_radius_and_height_stay_in_range() {
        let cfg = config(LayoutPattern::Flowers, Vec3::ZERO, Vec3::ONE);
        for p in compute_positions(&cfg, 20, &mut rng()) {
            let radius = Vec2::new(p.x, p.z).length();
            assert!((1.5..2.5 + EPS).contains(&radius));
            assert!((0.5..2.5).contains(&p.y));
        }
    }

    #[test]
    fn same_seed_reproduces_jittered_layouts() {
        for pattern in [LayoutPattern::Scattered, LayoutPattern::Flowers] {
            let cfg = config(pattern, Vec3::ZERO, Vec3::splat(4.0));
            let a = compute_positions(&cfg, 6, &mut ChaCha8Rng::seed_from_u64(99));
            let b = compute_positions(&cfg, 6, &mut ChaCha8Rng::seed_from_u64(99));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn deterministic_patterns_ignore_the_rng() {
        let cfg = config(LayoutPattern::Branches, Vec3::ZERO, Vec3::ONE);
        let a = compute_positions(&cfg, 6, &mut ChaCha8Rng::seed_from_u64(1));
        let b = compute_positions(&cfg, 6, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
    }
}
