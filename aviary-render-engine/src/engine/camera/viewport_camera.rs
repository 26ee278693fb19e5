use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use constants::interaction::{
    MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, PITCH_LIMIT, ZOOM_PER_SCROLL_PIXEL,
};
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_LOOK_AT, CAMERA_NEAR, CAMERA_START_POSITION,
};

/// Parent of every habitat prop and bird. Its rotation is the scene rotation.
#[derive(Component)]
pub struct SceneRoot;

#[derive(Component)]
pub struct ViewportCamera;

/// Scene rotation and camera distance.
///
/// The drag gesture rotates the scene rather than orbiting the camera; the
/// wheel moves the camera along its depth axis. `rotate` and `zoom` are the
/// only mutators.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneViewport {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for SceneViewport {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_START_POSITION.z,
        }
    }
}

impl SceneViewport {
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Add to yaw and pitch. Pitch is clamped to `±PITCH_LIMIT`, yaw is free.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the camera by a wheel delta in pixels; positive pulls away from the scene.
    pub fn zoom(&mut self, delta_pixels: f32) {
        self.distance = (self.distance + delta_pixels * ZOOM_PER_SCROLL_PIXEL)
            .clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    pub fn scene_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    /// Camera keeps its initial orientation; only the depth changes.
    pub fn camera_transform(&self) -> Transform {
        let orientation = Transform::from_translation(CAMERA_START_POSITION)
            .looking_at(CAMERA_LOOK_AT, Vec3::Y)
            .rotation;
        Transform::from_translation(CAMERA_START_POSITION.with_z(self.distance))
            .with_rotation(orientation)
    }
}

pub fn spawn_viewport_camera(commands: &mut Commands, viewport: &SceneViewport) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        viewport.camera_transform(),
        ViewportCamera,
    ));
}

/// Push the viewport state onto the scene root and the camera.
pub fn apply_scene_viewport(
    viewport: Res<SceneViewport>,
    mut roots: Query<&mut Transform, (With<SceneRoot>, Without<ViewportCamera>)>,
    mut cameras: Query<&mut Transform, (With<ViewportCamera>, Without<SceneRoot>)>,
) {
    if !viewport.is_changed() {
        return;
    }

    for mut transform in &mut roots {
        transform.rotation = viewport.scene_rotation();
    }

    if let Ok(mut camera_transform) = cameras.single_mut() {
        *camera_transform = viewport.camera_transform();
    }
}
