use super::hit_test::PartCollider;
use super::resolver::{CameraRaycaster, InteractionResolver, Resolution};
use super::state::{BirdSelected, SelectionRequest};
use crate::engine::camera::{SceneViewport, ViewportCamera};
use crate::engine::habitat::environment::colour_from_hex;
use crate::engine::scene::{BirdInstance, BirdPart, PlacedBirds, SceneBuilt};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::interaction::SCROLL_LINE_PIXELS;
use constants::render_settings::{HIGHLIGHT_EMISSIVE, HIGHLIGHT_SCALE};

/// Feeds left-button press, move and release into the resolver.
pub fn handle_pointer_input(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ViewportCamera>>,
    parts: Query<(&BirdPart, &GlobalTransform)>,
    mut resolver: ResMut<InteractionResolver>,
    mut viewport: ResMut<SceneViewport>,
    mut placed: ResMut<PlacedBirds>,
    mut selected_events: EventWriter<BirdSelected>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        if buttons.just_released(MouseButton::Left) {
            resolver.pointer_cancel();
        }
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        resolver.pointer_down(cursor_pos);
    }

    if buttons.pressed(MouseButton::Left) && resolver.last_position() != Some(cursor_pos) {
        resolver.pointer_move(cursor_pos, &mut viewport);
    }

    if !buttons.just_released(MouseButton::Left) {
        return;
    }

    let Ok((camera, cam_xf)) = cameras.single() else {
        return;
    };

    let generation = placed.generation;
    let colliders: Vec<PartCollider> = parts
        .iter()
        .filter(|(part, _)| part.generation == generation)
        .map(|(part, xf)| PartCollider {
            bird_index: part.bird_index,
            shape: part.collider,
            transform: *xf,
        })
        .collect();

    let raycaster = CameraRaycaster {
        camera,
        transform: cam_xf,
    };

    match resolver.pointer_up(cursor_pos, &raycaster, &colliders, &mut placed.birds) {
        Resolution::Selected(index) => {
            if let Some(bird) = placed.birds.get(index) {
                info!("Selected {} ({})", bird.record.name, bird.habitat.key());
                selected_events.write(BirdSelected { bird: bird.clone() });
            }
        }
        Resolution::Missed => debug!("Click hit no bird, selection cleared"),
        Resolution::Dragged | Resolution::NoGesture => {}
    }
}

/// Wheel delta in pixels, positive when scrolling towards the user.
pub fn scroll_to_pixels(unit: MouseScrollUnit, y: f32) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => y * SCROLL_LINE_PIXELS,
        MouseScrollUnit::Pixel => y,
    };
    -pixels
}

pub fn handle_wheel_zoom(
    mut scroll_events: EventReader<MouseWheel>,
    mut viewport: ResMut<SceneViewport>,
) {
    let delta: f32 = scroll_events
        .read()
        .map(|event| scroll_to_pixels(event.unit, event.y))
        .sum();

    if delta != 0.0 {
        viewport.zoom(delta);
    }
}

pub fn handle_selection_requests(
    mut requests: EventReader<SelectionRequest>,
    mut resolver: ResMut<InteractionResolver>,
    mut placed: ResMut<PlacedBirds>,
    mut selected_events: EventWriter<BirdSelected>,
) {
    for request in requests.read() {
        match request {
            SelectionRequest::Select { bird_id } => {
                let Some(index) = resolver.select_by_id(bird_id, &mut placed.birds) else {
                    warn!("Selection requested for unknown bird `{bird_id}`");
                    continue;
                };
                if let Some(bird) = placed.birds.get(index) {
                    selected_events.write(BirdSelected { bird: bird.clone() });
                }
            }
            SelectionRequest::Clear => resolver.clear(&mut placed.birds),
        }
    }
}

pub fn forget_selection_on_rebuild(
    mut built: EventReader<SceneBuilt>,
    mut resolver: ResMut<InteractionResolver>,
) {
    if built.read().last().is_some() {
        resolver.forget_selection();
    }
}

/// Mirrors the highlight flag onto scale and part emission.
pub fn sync_highlights(
    placed: Res<PlacedBirds>,
    mut instances: Query<(&mut BirdInstance, &mut Transform)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let highlight_emissive = colour_from_hex(HIGHLIGHT_EMISSIVE).to_linear();

    for (mut instance, mut transform) in &mut instances {
        if instance.generation != placed.generation {
            continue;
        }
        let Some(bird) = placed.birds.get(instance.bird_index) else {
            continue;
        };
        if bird.highlighted == instance.highlighted {
            continue;
        }

        instance.highlighted = bird.highlighted;
        let (scale, emissive) = if bird.highlighted {
            (HIGHLIGHT_SCALE, highlight_emissive)
        } else {
            (1.0, LinearRgba::BLACK)
        };

        transform.scale = Vec3::splat(scale);
        for handle in &instance.materials {
            if let Some(material) = materials.get_mut(handle) {
                material.emissive = emissive;
            }
        }
    }
}
