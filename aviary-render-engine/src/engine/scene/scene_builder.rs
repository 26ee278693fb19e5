use super::bird_mesh::spawn_bird;
use super::environments::spawn_habitat_props;
use crate::engine::camera::{SceneRoot, SceneViewport};
use crate::engine::core::settings::SceneSettings;
use crate::engine::habitat::environment::colour_from_hex;
use crate::engine::habitat::{
    AssembledScene, EnvironmentSummary, HabitatGroup, PlacedBird, assemble,
};
use crate::engine::loading::catalog_loader::{ActiveCatalog, CatalogSource, CatalogUpdate};
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOUR, DIRECTIONAL_LIGHT_ILLUMINANCE,
    DIRECTIONAL_LIGHT_POSITION,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The current scene build: every placed bird plus its habitat grouping.
#[derive(Resource, Debug, Default)]
pub struct PlacedBirds {
    pub birds: Vec<PlacedBird>,
    pub groups: Vec<HabitatGroup>,
    /// Bumped on every rebuild; entities from older builds are ignored.
    pub generation: u64,
    /// `Time::elapsed_secs` at build, the zero point of the animation clock.
    pub built_at: f32,
    pub source: Option<CatalogSource>,
}

impl PlacedBirds {
    pub fn summary(&self) -> Vec<EnvironmentSummary> {
        crate::engine::habitat::assembler::summarise(&self.groups)
    }

    pub fn by_id(&self, id: &str) -> Option<&PlacedBird> {
        self.birds.iter().find(|bird| bird.record.id == id)
    }
}

#[derive(Event, Debug, Clone)]
pub struct SceneBuilt {
    pub generation: u64,
    pub bird_count: usize,
    pub source: CatalogSource,
}

pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: colour_from_hex(AMBIENT_LIGHT_COLOUR),
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Tears down the previous scene and builds a new one from the newest catalog
/// update of this frame.
pub fn rebuild_scene_on_catalog_update(
    mut commands: Commands,
    mut updates: EventReader<CatalogUpdate>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut placed: ResMut<PlacedBirds>,
    mut active: ResMut<ActiveCatalog>,
    mut progress: ResMut<LoadingProgress>,
    mut built: EventWriter<SceneBuilt>,
    settings: Res<SceneSettings>,
    viewport: Res<SceneViewport>,
    time: Res<Time>,
    roots: Query<Entity, With<SceneRoot>>,
) {
    let Some(update) = updates.read().last() else {
        return;
    };

    for root in &roots {
        commands.entity(root).despawn();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(settings.layout_seed);
    let AssembledScene { groups, birds } = assemble(&update.catalog, &mut rng);
    let generation = placed.generation + 1;

    let scene_root = commands
        .spawn((
            SceneRoot,
            Name::new("HabitatScene"),
            Transform::from_rotation(viewport.scene_rotation()),
            Visibility::default(),
        ))
        .id();

    spawn_habitat_props(
        &mut commands,
        &mut meshes,
        &mut materials,
        scene_root,
        &mut rng,
    );
    for bird in &birds {
        spawn_bird(
            &mut commands,
            &mut meshes,
            &mut materials,
            scene_root,
            bird,
            generation,
        );
    }

    *placed = PlacedBirds {
        birds,
        groups,
        generation,
        built_at: time.elapsed_secs(),
        source: Some(update.source),
    };

    let counts: Vec<String> = placed
        .summary()
        .iter()
        .map(|env| format!("{}={}", env.key, env.bird_count))
        .collect();
    info!(
        "Scene built from {:?} catalog: {} birds in {} families [{}]",
        update.source,
        placed.birds.len(),
        update.catalog.families.len(),
        counts.join(", ")
    );

    active.catalog = update.catalog.clone();
    active.source = Some(update.source);
    progress.scene_built = true;

    built.write(SceneBuilt {
        generation,
        bird_count: placed.birds.len(),
        source: update.source,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::bundled_catalog;
    use crate::engine::scene::BirdInstance;

    fn scene_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PlacedBirds>()
            .init_resource::<ActiveCatalog>()
            .init_resource::<LoadingProgress>()
            .init_resource::<SceneSettings>()
            .init_resource::<SceneViewport>()
            .add_event::<CatalogUpdate>()
            .add_event::<SceneBuilt>()
            .add_systems(Update, rebuild_scene_on_catalog_update);
        app
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        let world = app.world_mut();
        let mut query = world.query_filtered::<Entity, F>();
        query.iter(world).count()
    }

    #[test]
    fn catalog_update_builds_scene() {
        let mut app = scene_app();
        let catalog = bundled_catalog().unwrap();
        app.world_mut().send_event(CatalogUpdate {
            catalog: catalog.clone(),
            source: CatalogSource::Bundled,
        });
        app.update();

        let placed = app.world().resource::<PlacedBirds>();
        assert_eq!(placed.generation, 1);
        assert_eq!(placed.birds.len(), catalog.bird_count());
        assert_eq!(placed.source, Some(CatalogSource::Bundled));
        assert!(app.world().resource::<LoadingProgress>().scene_built);
        assert_eq!(app.world().resource::<ActiveCatalog>().catalog, catalog);

        assert_eq!(count::<With<SceneRoot>>(&mut app), 1);
        assert_eq!(count::<With<BirdInstance>>(&mut app), catalog.bird_count());
    }

    #[test]
    fn rebuild_replaces_previous_scene() {
        let mut app = scene_app();
        let catalog = bundled_catalog().unwrap();
        app.world_mut().send_event(CatalogUpdate {
            catalog: catalog.clone(),
            source: CatalogSource::Bundled,
        });
        app.update();

        let mut smaller = catalog.clone();
        smaller.families.truncate(1);
        let expected = smaller.bird_count();
        app.world_mut().send_event(CatalogUpdate {
            catalog: smaller,
            source: CatalogSource::Frontend,
        });
        app.update();

        let placed = app.world().resource::<PlacedBirds>();
        assert_eq!(placed.generation, 2);
        assert_eq!(placed.birds.len(), expected);
        assert_eq!(count::<With<SceneRoot>>(&mut app), 1);
        assert_eq!(count::<With<BirdInstance>>(&mut app), expected);
    }

    #[test]
    fn no_update_no_rebuild() {
        let mut app = scene_app();
        app.update();
        assert_eq!(app.world().resource::<PlacedBirds>().generation, 0);
        assert_eq!(count::<With<SceneRoot>>(&mut app), 0);
    }
}
