use crate::engine::habitat::HabitatCategory;
use crate::engine::habitat::environment::colour_from_hex;
use bevy::prelude::*;
use constants::render_settings::{FLOWER_COLOURS, FLOWER_COUNT};
use rand::Rng;
use std::f32::consts::TAU;

const FLOWER_RADIUS: f32 = 0.15;
const FLOWER_HEIGHT: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropShape {
    Disk { radius: f32, height: f32 },
    Trunk { top: f32, bottom: f32, height: f32 },
    Sphere { radius: f32 },
    Slab { size: Vec3 },
}

impl PropShape {
    fn mesh(self) -> Mesh {
        match self {
            PropShape::Disk { radius, height } => Cylinder::new(radius, height).mesh().build(),
            PropShape::Trunk { top, bottom, height } => ConicalFrustum {
                radius_top: top,
                radius_bottom: bottom,
                height,
            }
            .mesh()
            .build(),
            PropShape::Sphere { radius } => Sphere::new(radius).mesh().uv(12, 8),
            PropShape::Slab { size } => Cuboid::from_size(size).mesh().build(),
        }
    }
}

/// Static scenery piece placed relative to the habitat anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropSpec {
    pub shape: PropShape,
    pub colour: u32,
    pub opacity: f32,
    pub translation: Vec3,
}

impl PropSpec {
    fn solid(shape: PropShape, colour: u32, translation: Vec3) -> Self {
        Self {
            shape,
            colour,
            opacity: 1.0,
            translation,
        }
    }

    fn translucent(shape: PropShape, colour: u32, opacity: f32, translation: Vec3) -> Self {
        Self {
            shape,
            colour,
            opacity,
            translation,
        }
    }
}

/// Scenery for one habitat, anchored at its environment config.
/// Only the garden draws from `rng` (flower radii).
pub fn habitat_props<R: Rng>(habitat: HabitatCategory, rng: &mut R) -> Vec<PropSpec> {
    let anchor = habitat.config().anchor;

    match habitat {
        HabitatCategory::Water => vec![PropSpec::translucent(
            PropShape::Disk {
                radius: 4.0,
                height: 0.2,
            },
            0x006994,
            0.7,
            anchor,
        )],
        HabitatCategory::Sky => vec![PropSpec::translucent(
            PropShape::Slab {
                size: Vec3::new(6.0, 1.0, 4.0),
            },
            0xF0F8FF,
            0.6,
            anchor,
        )],
        HabitatCategory::Tree => vec![
            PropSpec::solid(
                PropShape::Trunk {
                    top: 0.3,
                    bottom: 0.5,
                    height: 6.0,
                },
                0x8B4513,
                anchor,
            ),
            PropSpec::solid(
                PropShape::Sphere { radius: 3.0 },
                0x228B22,
                anchor + Vec3::Y * 4.0,
            ),
        ],
        HabitatCategory::TreeHigh => vec![
            PropSpec::solid(
                PropShape::Trunk {
                    top: 0.4,
                    bottom: 0.6,
                    height: 10.0,
                },
                0x654321,
                anchor + Vec3::Y * 2.0,
            ),
            PropSpec::solid(
                PropShape::Sphere { radius: 2.5 },
                0x2F5233,
                anchor + Vec3::Y * 8.0,
            ),
        ],
        HabitatCategory::Garden => {
            let mut props = Vec::with_capacity(FLOWER_COUNT + 1);
            props.push(PropSpec::solid(
                PropShape::Disk {
                    radius: 3.0,
                    height: 0.3,
                },
                0x90EE90,
                anchor - Vec3::Y * 0.5,
            ));
            for i in 0..FLOWER_COUNT {
                let angle = i as f32 / FLOWER_COUNT as f32 * TAU;
                let radius = 1.5 + rng.gen_range(0.0f32..1.0);
                props.push(PropSpec::solid(
                    PropShape::Sphere {
                        radius: FLOWER_RADIUS,
                    },
                    FLOWER_COLOURS[i % FLOWER_COLOURS.len()],
                    anchor
                        + Vec3::new(angle.cos() * radius, FLOWER_HEIGHT, angle.sin() * radius),
                ));
            }
            props
        }
        HabitatCategory::Ground => vec![PropSpec::solid(
            PropShape::Disk {
                radius: 4.0,
                height: 0.2,
            },
            0x8B7355,
            anchor,
        )],
    }
}

pub fn spawn_habitat_props<R: Rng>(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scene_root: Entity,
    rng: &mut R,
) {
    for habitat in HabitatCategory::ALL {
        for prop in habitat_props(habitat, rng) {
            let translucent = prop.opacity < 1.0;
            let material = materials.add(StandardMaterial {
                base_color: colour_from_hex(prop.colour).with_alpha(prop.opacity),
                alpha_mode: if translucent {
                    AlphaMode::Blend
                } else {
                    AlphaMode::Opaque
                },
                perceptual_roughness: 0.8,
                ..default()
            });

            commands.spawn((
                Mesh3d(meshes.add(prop.shape.mesh())),
                MeshMaterial3d(material),
                Transform::from_translation(prop.translation),
                Name::new(format!("{} prop", habitat.key())),
                ChildOf(scene_root),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_habitat_has_scenery() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for habitat in HabitatCategory::ALL {
            assert!(!habitat_props(habitat, &mut rng).is_empty());
        }
    }

    #[test]
    fn garden_has_a_ring_of_flowers() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let anchor = HabitatCategory::Garden.config().anchor;
        let props = habitat_props(HabitatCategory::Garden, &mut rng);
        assert_eq!(props.len(), FLOWER_COUNT + 1);

        for flower in &props[1..] {
            let offset = flower.translation - anchor;
            let radius = Vec2::new(offset.x, offset.z).length();
            assert!((1.5..=2.5).contains(&radius));
            assert!((offset.y - FLOWER_HEIGHT).abs() < 1e-5);
        }
        assert_eq!(props[1].colour, FLOWER_COLOURS[0]);
        assert_eq!(props[6].colour, FLOWER_COLOURS[0]);
    }

    #[test]
    fn tree_crowns_sit_above_anchor() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tree = habitat_props(HabitatCategory::Tree, &mut rng);
        let anchor = HabitatCategory::Tree.config().anchor;
        assert_eq!(tree[1].translation, anchor + Vec3::Y * 4.0);

        let tall = habitat_props(HabitatCategory::TreeHigh, &mut rng);
        let anchor = HabitatCategory::TreeHigh.config().anchor;
        assert_eq!(tall[0].translation, anchor + Vec3::Y * 2.0);
        assert_eq!(tall[1].translation, anchor + Vec3::Y * 8.0);
    }

    #[test]
    fn water_and_clouds_are_translucent() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(habitat_props(HabitatCategory::Water, &mut rng)[0].opacity < 1.0);
        assert!(habitat_props(HabitatCategory::Sky, &mut rng)[0].opacity < 1.0);
    }
}
