//! Bundled catalog through assembly, animation and pointer resolution.

use aviary_render_engine::engine::animation::animate;
use aviary_render_engine::engine::camera::SceneViewport;
use aviary_render_engine::engine::catalog::bundled_catalog;
use aviary_render_engine::engine::habitat::{
    AssembledScene, HabitatCategory, PlacedBird, assemble,
};
use aviary_render_engine::engine::scene::BirdPartKind;
use aviary_render_engine::tools::bird_picker::hit_test::PartCollider;
use aviary_render_engine::tools::bird_picker::{
    InteractionResolver, Resolution, ScreenRaycaster,
};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn bundled_scene(seed: u64) -> AssembledScene {
    let catalog = bundled_catalog().expect("bundled catalog parses");
    assemble(&catalog, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Every part of every bird, placed where the scene would draw it.
fn colliders(birds: &[PlacedBird]) -> Vec<PartCollider> {
    birds
        .iter()
        .flat_map(|bird| {
            let r = bird.record.size.body_radius();
            let root = Transform::from_translation(bird.presented_position());
            BirdPartKind::ALL.into_iter().map(move |kind| PartCollider {
                bird_index: bird.index,
                shape: kind.collider(r),
                transform: GlobalTransform::from(root.mul_transform(kind.local_transform(r))),
            })
        })
        .collect()
}

/// Casts straight down onto `target` regardless of the screen position.
struct DownOnto {
    target: Vec3,
}

impl ScreenRaycaster for DownOnto {
    fn ray_from_screen(&self, _screen: Vec2) -> Option<Ray3d> {
        Some(Ray3d {
            origin: self.target + Vec3::Y * 100.0,
            direction: Dir3::NEG_Y,
        })
    }
}

#[test]
fn bundled_catalog_fills_habitats() {
    let scene = bundled_scene(1);
    let catalog = bundled_catalog().unwrap();
    assert_eq!(scene.birds.len(), catalog.bird_count());

    let counts: Vec<usize> = HabitatCategory::ALL
        .iter()
        .map(|habitat| scene.birds_in(*habitat).count())
        .collect();
    assert_eq!(counts, [4, 3, 3, 2, 2, 0]);

    let ids: HashSet<&str> = scene.birds.iter().map(|b| b.record.id.as_str()).collect();
    assert_eq!(ids.len(), scene.birds.len());

    for (index, bird) in scene.birds.iter().enumerate() {
        assert_eq!(bird.index, index);
        assert_eq!(bird.environment_colour, bird.habitat.config().colour);
    }
}

#[test]
fn layout_seed_reproduces_scene() {
    let positions = |seed| -> Vec<Vec3> {
        bundled_scene(seed).birds.iter().map(|b| b.position).collect()
    };
    assert_eq!(positions(99), positions(99));
}

#[test]
fn animation_moves_only_animated_habitats() {
    let mut scene = bundled_scene(3);
    let rest: Vec<Vec3> = scene.birds.iter().map(|b| b.position).collect();

    for elapsed in [0.5, 2.0, 30.0] {
        animate(&mut scene.birds, elapsed);
        for (bird, rest) in scene.birds.iter().zip(&rest) {
            assert_eq!(bird.position, *rest);
            match bird.habitat {
                HabitatCategory::Garden | HabitatCategory::TreeHigh => {
                    assert_eq!(bird.animation_offset, Vec3::ZERO)
                }
                _ => assert!(bird.animation_offset.length() < 3.0),
            }
        }
    }
}

#[test]
fn click_selects_drag_rotates() {
    let mut scene = bundled_scene(5);
    let parts = colliders(&scene.birds);
    let mut viewport = SceneViewport::default();
    let mut resolver = InteractionResolver::default();

    let target = scene.birds[0].presented_position();
    assert_eq!(scene.birds[0].habitat, HabitatCategory::Water);
    let aim = DownOnto { target };

    resolver.pointer_down(Vec2::new(100.0, 100.0));
    resolver.pointer_move(Vec2::new(102.0, 101.0), &mut viewport);
    let click = resolver.pointer_up(Vec2::new(102.0, 101.0), &aim, &parts, &mut scene.birds);
    assert_eq!(click, Resolution::Selected(0));
    assert!(scene.birds[0].highlighted);
    assert_eq!(scene.birds.iter().filter(|b| b.highlighted).count(), 1);
    assert_eq!(viewport.yaw(), 0.0);

    resolver.pointer_down(Vec2::new(100.0, 100.0));
    resolver.pointer_move(Vec2::new(130.0, 100.0), &mut viewport);
    let drag = resolver.pointer_up(Vec2::new(130.0, 100.0), &aim, &parts, &mut scene.birds);
    assert_eq!(drag, Resolution::Dragged);
    assert!(viewport.yaw() > 0.0);
    assert!(scene.birds[0].highlighted);

    let empty_sky = DownOnto {
        target: Vec3::new(100.0, 0.0, 100.0),
    };
    resolver.pointer_down(Vec2::new(10.0, 10.0));
    let miss = resolver.pointer_up(Vec2::new(10.0, 10.0), &empty_sky, &parts, &mut scene.birds);
    assert_eq!(miss, Resolution::Missed);
    assert!(scene.birds.iter().all(|b| !b.highlighted));
    assert_eq!(resolver.selected(), None);
}
