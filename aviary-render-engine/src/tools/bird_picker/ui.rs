use super::resolver::InteractionResolver;
use super::state::SelectedBirdLabel;
use crate::engine::scene::PlacedBirds;
use bevy::prelude::*;

// Spawns the selected bird caption in the top-left corner
pub fn spawn_selection_label(mut commands: Commands) {
    commands.spawn((
        SelectedBirdLabel,
        Name::new("SelectedBirdLabel"),
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn reflect_selected_bird_label(
    resolver: Res<InteractionResolver>,
    placed: Res<PlacedBirds>,
    mut labels: Query<&mut Text, With<SelectedBirdLabel>>,
) {
    if !resolver.is_changed() && !placed.is_changed() {
        return;
    }

    let caption = resolver
        .selected()
        .and_then(|index| placed.birds.get(index))
        .map(|bird| {
            let mut caption = format!("{} ({})", bird.record.name, bird.family_name);
            if !bird.record.scientific_name.is_empty() {
                caption.push_str(&format!("\n{}", bird.record.scientific_name));
            }
            if bird.record.is_endangered {
                caption.push_str("\nEndangered");
            }
            caption
        })
        .unwrap_or_default();

    for mut text in &mut labels {
        if text.0 != caption {
            text.0 = caption.clone();
        }
    }
}
