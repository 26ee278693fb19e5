use bevy::prelude::*;

/// Initial camera placement, looking down onto the habitat ring.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 10.0, 20.0);
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const AMBIENT_LIGHT_COLOUR: u32 = 0x404040;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(15.0, 20.0, 10.0);
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 8_000.0;

/// Emissive colour and uniform scale applied to a selected bird.
pub const HIGHLIGHT_EMISSIVE: u32 = 0x444444;
pub const HIGHLIGHT_SCALE: f32 = 1.3;

pub const BEAK_COLOUR: u32 = 0xFFA500;
pub const BIRD_OPACITY: f32 = 0.9;

/// Body radius per catalog size category.
pub const BIRD_SIZE_TINY: f32 = 0.3;
pub const BIRD_SIZE_SMALL: f32 = 0.5;
pub const BIRD_SIZE_MEDIUM: f32 = 0.8;
pub const BIRD_SIZE_LARGE: f32 = 1.1;

/// Frame rate the per-frame animation rates were tuned against.
pub const NOMINAL_FRAME_RATE: f32 = 60.0;

pub const FLOWER_COLOURS: &[u32] = &[0xFF69B4, 0xFF6347, 0xFFD700, 0x9370DB, 0xFF4500];
pub const FLOWER_COUNT: usize = 8;
