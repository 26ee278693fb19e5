use super::classifier::classify;
use super::environment::{AnimationProfile, EnvironmentConfig, HabitatCategory, LayoutPattern};
use super::layout::compute_positions;
use crate::engine::catalog::{BirdCatalog, BirdRecord};
use bevy::prelude::*;
use rand::Rng;

/// A catalog bird placed in the scene.
///
/// Everything except `animation_offset` and `highlighted` is fixed for the
/// lifetime of a scene build. The offset is written only by the animation
/// driver, the highlight flag only by the interaction resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBird {
    pub record: BirdRecord,
    pub family_name: String,
    pub family_colour: String,
    pub habitat: HabitatCategory,
    pub position: Vec3,
    pub environment_colour: u32,
    pub animation: AnimationProfile,
    /// Position in the flattened scene list, used as animation phase.
    pub index: usize,
    pub animation_offset: Vec3,
    pub highlighted: bool,
}

impl PlacedBird {
    /// Where the bird is drawn this frame.
    pub fn presented_position(&self) -> Vec3 {
        self.position + self.animation_offset
    }
}

/// Per-habitat slice of an assembled scene.
#[derive(Debug, Clone)]
pub struct HabitatGroup {
    pub habitat: HabitatCategory,
    pub config: EnvironmentConfig,
    /// Indices into `AssembledScene::birds`.
    pub bird_indices: Vec<usize>,
}

impl HabitatGroup {
    pub fn len(&self) -> usize {
        self.bird_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bird_indices.is_empty()
    }
}

/// Diagnostics line for one habitat.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub colour: u32,
    pub anchor: Vec3,
    pub size: Vec3,
    pub bird_count: usize,
    pub pattern: LayoutPattern,
    pub animation: AnimationProfile,
}

#[derive(Debug, Clone, Default)]
pub struct AssembledScene {
    pub groups: Vec<HabitatGroup>,
    pub birds: Vec<PlacedBird>,
}

impl AssembledScene {
    pub fn birds_in(&self, habitat: HabitatCategory) -> impl Iterator<Item = &PlacedBird> {
        self.birds.iter().filter(move |bird| bird.habitat == habitat)
    }

    pub fn summary(&self) -> Vec<EnvironmentSummary> {
        summarise(&self.groups)
    }
}

/// One diagnostics line per group, in group order.
pub fn summarise(groups: &[HabitatGroup]) -> Vec<EnvironmentSummary> {
    groups
        .iter()
        .map(|group| EnvironmentSummary {
            key: group.habitat.key(),
            name: group.config.name,
            colour: group.config.colour,
            anchor: group.config.anchor,
            size: group.config.size,
            bird_count: group.len(),
            pattern: group.config.pattern,
            animation: group.config.animation,
        })
        .collect()
}

struct PendingBird<'a> {
    record: &'a BirdRecord,
    family_name: &'a str,
    family_colour: &'a str,
}

/// Classify, group and lay out every catalog bird.
///
/// Groups follow `HabitatCategory::ALL`; inside a group birds keep catalog
/// order, which is the index the layout patterns see.
pub fn assemble<R: Rng>(catalog: &BirdCatalog, rng: &mut R) -> AssembledScene {
    let mut pending: Vec<(HabitatCategory, Vec<PendingBird<'_>>)> = HabitatCategory::ALL
        .iter()
        .map(|&habitat| (habitat, Vec::new()))
        .collect();

    for entry in catalog.entries() {
        let habitat = classify(entry.bird, &entry.family.name);
        if let Some((_, birds)) = pending.iter_mut().find(|(h, _)| *h == habitat) {
            birds.push(PendingBird {
                record: entry.bird,
                family_name: &entry.family.name,
                family_colour: &entry.family.color,
            });
        }
    }

    let mut scene = AssembledScene {
        groups: Vec::with_capacity(pending.len()),
        birds: Vec::with_capacity(catalog.bird_count()),
    };

    for (habitat, birds) in pending {
        let config = habitat.config();
        let positions = compute_positions(&config, birds.len(), rng);
        let mut bird_indices = Vec::with_capacity(birds.len());

        for (pending_bird, position) in birds.into_iter().zip(positions) {
            let index = scene.birds.len();
            bird_indices.push(index);
            scene.birds.push(PlacedBird {
                record: pending_bird.record.clone(),
                family_name: pending_bird.family_name.to_string(),
                family_colour: pending_bird.family_colour.to_string(),
                habitat,
                position,
                environment_colour: config.colour,
                animation: config.animation,
                index,
                animation_offset: Vec3::ZERO,
                highlighted: false,
            });
        }

        scene.groups.push(HabitatGroup {
            habitat,
            config,
            bird_indices,
        });
    }

    scene
}
