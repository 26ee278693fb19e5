/// Press-to-release travel (pixels) below which a gesture counts as a click.
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

/// Scene rotation applied per pixel of pointer travel while dragging.
pub const YAW_PER_PIXEL: f32 = 0.01;
pub const PITCH_PER_PIXEL: f32 = 0.005;
pub const PITCH_LIMIT: f32 = 0.5;

/// Camera distance change per pixel of wheel delta.
pub const ZOOM_PER_SCROLL_PIXEL: f32 = 0.02;
pub const MIN_CAMERA_DISTANCE: f32 = 10.0;
pub const MAX_CAMERA_DISTANCE: f32 = 40.0;

/// Pixel equivalent of one wheel notch for line-based scroll devices.
pub const SCROLL_LINE_PIXELS: f32 = 100.0;
