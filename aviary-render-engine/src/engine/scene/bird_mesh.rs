use crate::engine::habitat::PlacedBird;
use crate::engine::habitat::environment::colour_from_hex;
use crate::tools::bird_picker::ray::ColliderShape;
use bevy::prelude::*;
use constants::render_settings::{BEAK_COLOUR, BIRD_OPACITY};
use std::f32::consts::FRAC_PI_2;

/// Root of one composite bird. Owns the materials the highlight writes to;
/// the part entities are its children.
#[derive(Component, Debug)]
pub struct BirdInstance {
    pub bird_index: usize,
    /// Scene build this bird belongs to.
    pub generation: u64,
    pub materials: Vec<Handle<StandardMaterial>>,
    /// Highlight state currently presented on screen.
    pub highlighted: bool,
}

/// One pickable piece of a bird, tagged with its bird index so a hit resolves
/// to the bird without walking the hierarchy.
#[derive(Component, Debug, Clone, Copy)]
pub struct BirdPart {
    pub bird_index: usize,
    pub generation: u64,
    pub collider: ColliderShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdPartKind {
    Body,
    Head,
    Beak,
    LeftWing,
    RightWing,
    Tail,
}

impl BirdPartKind {
    pub const ALL: [BirdPartKind; 6] = [
        BirdPartKind::Body,
        BirdPartKind::Head,
        BirdPartKind::Beak,
        BirdPartKind::LeftWing,
        BirdPartKind::RightWing,
        BirdPartKind::Tail,
    ];

    /// Placement relative to the bird root for a body radius `r`.
    pub fn local_transform(self, r: f32) -> Transform {
        match self {
            BirdPartKind::Body => Transform::from_scale(Vec3::new(1.2, 0.8, 0.6)),
            BirdPartKind::Head => Transform::from_xyz(0.8 * r, 0.3 * r, 0.0),
            BirdPartKind::Beak => Transform::from_xyz(1.2 * r, 0.3 * r, 0.0)
                .with_rotation(Quat::from_rotation_z(-FRAC_PI_2)),
            BirdPartKind::LeftWing => {
                Transform::from_xyz(-0.2 * r, 0.0, 0.6 * r).with_scale(Vec3::new(0.3, 0.8, 1.5))
            }
            BirdPartKind::RightWing => {
                Transform::from_xyz(-0.2 * r, 0.0, -0.6 * r).with_scale(Vec3::new(0.3, 0.8, 1.5))
            }
            BirdPartKind::Tail => {
                Transform::from_xyz(-1.1 * r, 0.0, 0.0).with_scale(Vec3::new(0.2, 0.6, 1.2))
            }
        }
    }

    /// Pick volume in the part's local (unscaled) space.
    pub fn collider(self, r: f32) -> ColliderShape {
        match self {
            BirdPartKind::Body => ColliderShape::Sphere { radius: r },
            BirdPartKind::Head => ColliderShape::Sphere { radius: 0.6 * r },
            BirdPartKind::Beak => ColliderShape::Box {
                size: Vec3::new(0.2 * r, 0.4 * r, 0.2 * r),
            },
            BirdPartKind::LeftWing | BirdPartKind::RightWing => {
                ColliderShape::Sphere { radius: 0.7 * r }
            }
            BirdPartKind::Tail => ColliderShape::Sphere { radius: 0.4 * r },
        }
    }

    fn mesh(self, r: f32) -> Mesh {
        match self {
            BirdPartKind::Beak => Cone::new(0.1 * r, 0.4 * r).mesh().resolution(6).build(),
            _ => match self.collider(r) {
                ColliderShape::Sphere { radius } => Sphere::new(radius).mesh().uv(16, 12),
                ColliderShape::Box { size } => Cuboid::from_size(size).mesh().build(),
            },
        }
    }
}

/// Body colour: the family colour when it parses, else the environment colour.
pub fn bird_colour(bird: &PlacedBird) -> Color {
    Srgba::hex(&bird.family_colour)
        .map(Color::from)
        .unwrap_or_else(|_| colour_from_hex(bird.environment_colour))
}

/// Spawn one bird with its parts under `scene_root`.
pub fn spawn_bird(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scene_root: Entity,
    bird: &PlacedBird,
    generation: u64,
) -> Entity {
    let r = bird.record.size.body_radius();

    let plumage = materials.add(StandardMaterial {
        base_color: bird_colour(bird).with_alpha(BIRD_OPACITY),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.45,
        ..default()
    });
    let beak = materials.add(StandardMaterial {
        base_color: colour_from_hex(BEAK_COLOUR),
        perceptual_roughness: 0.35,
        ..default()
    });

    let root = commands
        .spawn((
            Name::new(bird.record.name.clone()),
            Transform::from_translation(bird.presented_position()),
            Visibility::default(),
            ChildOf(scene_root),
        ))
        .id();

    for kind in BirdPartKind::ALL {
        let material = if kind == BirdPartKind::Beak {
            beak.clone()
        } else {
            plumage.clone()
        };
        commands.spawn((
            Mesh3d(meshes.add(kind.mesh(r))),
            MeshMaterial3d(material),
            kind.local_transform(r),
            BirdPart {
                bird_index: bird.index,
                generation,
                collider: kind.collider(r),
            },
            ChildOf(root),
        ));
    }

    commands.entity(root).insert(BirdInstance {
        bird_index: bird.index,
        generation,
        materials: vec![plumage, beak],
        highlighted: false,
    });

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::BirdRecord;
    use crate::engine::habitat::{AnimationProfile, HabitatCategory};
    use crate::tools::bird_picker::ray::ray_hits_shape;

    fn placed(family_colour: &str) -> PlacedBird {
        PlacedBird {
            record: serde_json::from_value::<BirdRecord>(
                serde_json::json!({ "id": "x", "name": "Test" }),
            )
            .unwrap(),
            family_name: "Fam".into(),
            family_colour: family_colour.into(),
            habitat: HabitatCategory::Tree,
            position: Vec3::ZERO,
            environment_colour: 0x228B22,
            animation: AnimationProfile::Perching,
            index: 0,
            animation_offset: Vec3::ZERO,
            highlighted: false,
        }
    }

    #[test]
    fn family_colour_wins_when_valid() {
        let colour = bird_colour(&placed("#ff0000")).to_srgba();
        assert!((colour.red - 1.0).abs() < 1e-5);
        assert!(colour.green.abs() < 1e-5);
    }

    #[test]
    fn invalid_family_colour_falls_back_to_environment() {
        let colour = bird_colour(&placed("not a colour"));
        assert_eq!(colour, colour_from_hex(0x228B22));
    }

    #[test]
    fn wings_mirror_each_other() {
        let left = BirdPartKind::LeftWing.local_transform(0.5);
        let right = BirdPartKind::RightWing.local_transform(0.5);
        assert_eq!(left.translation.z, -right.translation.z);
        assert_eq!(left.scale, right.scale);
    }

    #[test]
    fn beak_points_forward_and_is_pickable_from_the_front() {
        let r = 1.0;
        let xf = GlobalTransform::from(BirdPartKind::Beak.local_transform(r));
        let collider = BirdPartKind::Beak.collider(r);
        let t = ray_hits_shape(Vec3::new(5.0, 0.3, 0.0), Vec3::NEG_X, &xf, collider).unwrap();
        // Beak spans x in [1.0, 1.4] once rotated onto the x axis.
        assert!((t - 3.6).abs() < 1e-4);
    }

    #[test]
    fn body_collider_follows_body_scale() {
        let r = 0.5;
        let xf = GlobalTransform::from(BirdPartKind::Body.local_transform(r));
        let collider = BirdPartKind::Body.collider(r);
        let t = ray_hits_shape(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, &xf, collider).unwrap();
        assert!((t - (10.0 - 0.8 * r)).abs() < 1e-4);
    }
}
