use super::hit_test::{PartCollider, nearest_hit};
use crate::engine::camera::SceneViewport;
use crate::engine::habitat::PlacedBird;
use bevy::prelude::*;
use constants::interaction::{DRAG_THRESHOLD_PX, PITCH_PER_PIXEL, YAW_PER_PIXEL};

/// Turns a viewport position into a world ray. Implemented over the Bevy
/// camera in the picker systems and by fixed rays in tests.
pub trait ScreenRaycaster {
    fn ray_from_screen(&self, screen: Vec2) -> Option<Ray3d>;
}

pub struct CameraRaycaster<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl ScreenRaycaster for CameraRaycaster<'_> {
    fn ray_from_screen(&self, screen: Vec2) -> Option<Ray3d> {
        self.camera.viewport_to_world(self.transform, screen).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    PointerDown {
        origin: Vec2,
        last: Vec2,
        dragging: bool,
    },
}

/// Outcome of a pointer release. The resolver is back to `Idle` once one is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Click landed on a bird, which is now the only highlighted one.
    Selected(usize),
    /// Click hit nothing; all highlights were cleared.
    Missed,
    /// Release after a drag, no hit test was run.
    Dragged,
    /// Release without a matching press.
    NoGesture,
}

/// Pointer gesture state and the only writer of `PlacedBird::highlighted`.
#[derive(Resource, Debug, Default)]
pub struct InteractionResolver {
    phase: GesturePhase,
    selected: Option<usize>,
}

impl InteractionResolver {
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::PointerDown { dragging: true, .. })
    }

    pub fn last_position(&self) -> Option<Vec2> {
        match self.phase {
            GesturePhase::PointerDown { last, .. } => Some(last),
            GesturePhase::Idle => None,
        }
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.phase = GesturePhase::PointerDown {
            origin: position,
            last: position,
            dragging: false,
        };
    }

    /// Once the pointer travels past the threshold the gesture is a drag, and
    /// every move from then on rotates the scene by the delta since the last move.
    pub fn pointer_move(&mut self, position: Vec2, viewport: &mut SceneViewport) {
        let GesturePhase::PointerDown {
            origin,
            last,
            dragging,
        } = &mut self.phase
        else {
            return;
        };

        if origin.distance(position) > DRAG_THRESHOLD_PX {
            *dragging = true;
        }

        if *dragging {
            let delta = position - *last;
            viewport.rotate(delta.x * YAW_PER_PIXEL, -delta.y * PITCH_PER_PIXEL);
        }
        *last = position;
    }

    /// Release closes the gesture. Travel of at most the threshold from the
    /// press point is a click and runs the hit test against `colliders`.
    pub fn pointer_up(
        &mut self,
        position: Vec2,
        raycaster: &impl ScreenRaycaster,
        colliders: &[PartCollider],
        birds: &mut [PlacedBird],
    ) -> Resolution {
        let GesturePhase::PointerDown { origin, .. } = std::mem::take(&mut self.phase) else {
            return Resolution::NoGesture;
        };

        if origin.distance(position) > DRAG_THRESHOLD_PX {
            return Resolution::Dragged;
        }

        let hit = raycaster
            .ray_from_screen(position)
            .and_then(|ray| nearest_hit(ray, colliders, birds.len()));

        match hit {
            Some(hit) if self.select_index(hit.bird_index, birds) => {
                Resolution::Selected(hit.bird_index)
            }
            _ => {
                self.clear(birds);
                Resolution::Missed
            }
        }
    }

    /// Release with no usable position, e.g. outside the window. Treated as a
    /// drag: the gesture ends and nothing is hit tested.
    pub fn pointer_cancel(&mut self) -> Resolution {
        match std::mem::take(&mut self.phase) {
            GesturePhase::PointerDown { .. } => Resolution::Dragged,
            GesturePhase::Idle => Resolution::NoGesture,
        }
    }

    /// Highlight exactly one bird. Returns false, changing nothing, for an
    /// index outside the list.
    pub fn select_index(&mut self, index: usize, birds: &mut [PlacedBird]) -> bool {
        if index >= birds.len() {
            return false;
        }
        for bird in birds.iter_mut() {
            bird.highlighted = false;
        }
        birds[index].highlighted = true;
        self.selected = Some(index);
        true
    }

    pub fn select_by_id(&mut self, id: &str, birds: &mut [PlacedBird]) -> Option<usize> {
        let index = birds.iter().position(|bird| bird.record.id == id)?;
        self.select_index(index, birds).then_some(index)
    }

    pub fn clear(&mut self, birds: &mut [PlacedBird]) {
        for bird in birds.iter_mut() {
            bird.highlighted = false;
        }
        self.selected = None;
    }

    /// Forget the selection after a scene rebuild; the new birds start unhighlighted.
    pub fn forget_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::bundled_catalog;
    use crate::engine::habitat::assemble;
    use crate::tools::bird_picker::ray::ColliderShape;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Every screen position maps to the same ray straight down -z through the origin.
    struct FixedRay;

    impl ScreenRaycaster for FixedRay {
        fn ray_from_screen(&self, _screen: Vec2) -> Option<Ray3d> {
            Some(Ray3d {
                origin: Vec3::new(0.0, 0.0, 50.0),
                direction: Dir3::NEG_Z,
            })
        }
    }

    /// Counts how often the hit test asked for a ray.
    #[derive(Default)]
    struct CountingRay(std::cell::Cell<usize>);

    impl ScreenRaycaster for CountingRay {
        fn ray_from_screen(&self, screen: Vec2) -> Option<Ray3d> {
            self.0.set(self.0.get() + 1);
            FixedRay.ray_from_screen(screen)
        }
    }

    fn birds() -> Vec<PlacedBird> {
        let catalog = bundled_catalog().unwrap();
        assemble(&catalog, &mut ChaCha8Rng::seed_from_u64(0)).birds
    }

    fn part(bird_index: usize, z: f32) -> PartCollider {
        PartCollider {
            bird_index,
            shape: ColliderShape::Sphere { radius: 1.0 },
            transform: GlobalTransform::from(Transform::from_xyz(0.0, 0.0, z)),
        }
    }

    #[test]
    fn small_travel_is_a_click() {
        let mut resolver = InteractionResolver::default();
        let mut viewport = SceneViewport::default();
        let mut birds = birds();
        let raycaster = CountingRay::default();

        resolver.pointer_down(Vec2::new(100.0, 100.0));
        resolver.pointer_move(Vec2::new(102.0, 101.0), &mut viewport);
        let outcome = resolver.pointer_up(
            Vec2::new(102.0, 101.0),
            &raycaster,
            &[part(2, 0.0)],
            &mut birds,
        );

        assert_eq!(outcome, Resolution::Selected(2));
        assert_eq!(raycaster.0.get(), 1);
        assert_eq!(viewport, SceneViewport::default());
    }

    #[test]
    fn large_travel_is_a_drag_without_hit_test() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let raycaster = CountingRay::default();

        resolver.pointer_down(Vec2::new(100.0, 100.0));
        let outcome = resolver.pointer_up(
            Vec2::new(110.0, 100.0),
            &raycaster,
            &[part(2, 0.0)],
            &mut birds,
        );

        assert_eq!(outcome, Resolution::Dragged);
        assert_eq!(raycaster.0.get(), 0);
        assert!(birds.iter().all(|bird| !bird.highlighted));
        assert_eq!(resolver.phase(), GesturePhase::Idle);
    }

    #[test]
    fn travel_of_exactly_the_threshold_is_still_a_click() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let raycaster = CountingRay::default();

        // 3-4-5 triangle: exactly 5 px from the press point.
        resolver.pointer_down(Vec2::new(100.0, 100.0));
        let outcome = resolver.pointer_up(Vec2::new(103.0, 104.0), &raycaster, &[], &mut birds);

        assert_eq!(outcome, Resolution::Missed);
        assert_eq!(raycaster.0.get(), 1);
    }

    #[test]
    fn cancelled_release_ends_the_gesture_without_hit_test() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let raycaster = CountingRay::default();

        resolver.pointer_down(Vec2::new(100.0, 100.0));
        assert_eq!(resolver.pointer_cancel(), Resolution::Dragged);
        assert_eq!(resolver.phase(), GesturePhase::Idle);
        assert_eq!(resolver.pointer_cancel(), Resolution::NoGesture);

        let outcome = resolver.pointer_up(Vec2::new(100.0, 100.0), &raycaster, &[], &mut birds);
        assert_eq!(outcome, Resolution::NoGesture);
        assert_eq!(raycaster.0.get(), 0);
    }

    #[test]
    fn drag_rotates_only_past_threshold() {
        let mut resolver = InteractionResolver::default();
        let mut viewport = SceneViewport::default();

        resolver.pointer_down(Vec2::new(100.0, 100.0));
        resolver.pointer_move(Vec2::new(103.0, 100.0), &mut viewport);
        assert!(!resolver.is_dragging());
        assert_eq!(viewport.yaw(), 0.0);

        resolver.pointer_move(Vec2::new(113.0, 104.0), &mut viewport);
        assert!(resolver.is_dragging());
        assert!((viewport.yaw() - 0.10).abs() < 1e-5);
        assert!((viewport.pitch() + 0.02).abs() < 1e-5);
    }

    #[test]
    fn drag_pitch_respects_limit() {
        let mut resolver = InteractionResolver::default();
        let mut viewport = SceneViewport::default();

        resolver.pointer_down(Vec2::ZERO);
        resolver.pointer_move(Vec2::new(0.0, -1000.0), &mut viewport);
        assert_eq!(viewport.pitch(), 0.5);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut resolver = InteractionResolver::default();
        let mut viewport = SceneViewport::default();
        resolver.pointer_move(Vec2::new(500.0, 0.0), &mut viewport);
        assert_eq!(viewport, SceneViewport::default());
        assert_eq!(resolver.phase(), GesturePhase::Idle);
    }

    #[test]
    fn click_moves_the_highlight() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let colliders = [part(4, 0.0)];

        resolver.select_index(1, &mut birds);
        resolver.pointer_down(Vec2::ZERO);
        resolver.pointer_up(Vec2::ZERO, &FixedRay, &colliders, &mut birds);

        let highlighted: Vec<_> = birds
            .iter()
            .enumerate()
            .filter(|(_, bird)| bird.highlighted)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(highlighted, [4]);
        assert_eq!(resolver.selected(), Some(4));
    }

    #[test]
    fn miss_clears_every_highlight() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        resolver.select_index(0, &mut birds);

        resolver.pointer_down(Vec2::ZERO);
        let outcome = resolver.pointer_up(Vec2::ZERO, &FixedRay, &[], &mut birds);

        assert_eq!(outcome, Resolution::Missed);
        assert!(birds.iter().all(|bird| !bird.highlighted));
        assert_eq!(resolver.selected(), None);
    }

    #[test]
    fn nearest_of_two_overlapping_birds_is_selected() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let colliders = [part(0, -3.0), part(5, 3.0)];

        resolver.pointer_down(Vec2::ZERO);
        let outcome = resolver.pointer_up(Vec2::ZERO, &FixedRay, &colliders, &mut birds);
        assert_eq!(outcome, Resolution::Selected(5));
    }

    #[test]
    fn stale_part_list_is_a_miss() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let colliders = [part(birds.len() + 3, 0.0)];

        resolver.pointer_down(Vec2::ZERO);
        let outcome = resolver.pointer_up(Vec2::ZERO, &FixedRay, &colliders, &mut birds);
        assert_eq!(outcome, Resolution::Missed);
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let outcome = resolver.pointer_up(Vec2::ZERO, &FixedRay, &[part(0, 0.0)], &mut birds);
        assert_eq!(outcome, Resolution::NoGesture);
        assert!(birds.iter().all(|bird| !bird.highlighted));
    }

    #[test]
    fn programmatic_selection_by_id() {
        let mut resolver = InteractionResolver::default();
        let mut birds = birds();
        let id = birds[3].record.id.clone();

        assert_eq!(resolver.select_by_id(&id, &mut birds), Some(3));
        assert!(birds[3].highlighted);
        assert_eq!(resolver.select_by_id("no-such-bird", &mut birds), None);
        assert!(birds[3].highlighted);

        resolver.clear(&mut birds);
        assert!(birds.iter().all(|bird| !bird.highlighted));
    }
}
