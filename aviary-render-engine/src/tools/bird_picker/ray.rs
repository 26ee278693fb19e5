use bevy::prelude::*;

/// Pickable volume of a bird part in its own local space.
///
/// Spheres become ellipsoids through the part's (non-uniform) scale, which is
/// why the test runs in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    Box { size: Vec3 },
}

/// Ray parameter of the first hit against a shape placed by `xf`.
///
/// `dir` should be normalised so the parameter is a world distance; the local
/// direction is deliberately left unnormalised to keep that parameter.
pub fn ray_hits_shape(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    shape: ColliderShape,
) -> Option<f32> {
    let inv = xf.affine().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);

    match shape {
        ColliderShape::Sphere { radius } => ray_sphere_hit_t(o_local, d_local, radius),
        ColliderShape::Box { size } => {
            let half = size * 0.5;
            ray_aabb_hit_t(o_local, d_local, -half, half)
        }
    }
}

/// Ray against a sphere at the origin. Returns the entry parameter, or the exit
/// parameter when the ray starts inside.
pub fn ray_sphere_hit_t(ray_origin: Vec3, ray_direction: Vec3, radius: f32) -> Option<f32> {
    let a = ray_direction.length_squared();
    if a <= f32::EPSILON {
        return None;
    }
    let half_b = ray_origin.dot(ray_direction);
    let c = ray_origin.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-half_b - root) / a;
    let far = (-half_b + root) / a;
    if far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Slab-method ray against an axis-aligned box.
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: inside it or never.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let mut t0 = (min[axis] - origin) * inv;
        let mut t1 = (max[axis] - origin) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}
