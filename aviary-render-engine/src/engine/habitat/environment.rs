use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scene zone a bird is assigned to. Declaration order is the scene order:
/// groups are laid out and flattened in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitatCategory {
    Water,
    Sky,
    Tree,
    TreeHigh,
    Garden,
    Ground,
}

impl HabitatCategory {
    pub const ALL: [HabitatCategory; 6] = [
        HabitatCategory::Water,
        HabitatCategory::Sky,
        HabitatCategory::Tree,
        HabitatCategory::TreeHigh,
        HabitatCategory::Garden,
        HabitatCategory::Ground,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HabitatCategory::Water => "water",
            HabitatCategory::Sky => "sky",
            HabitatCategory::Tree => "tree",
            HabitatCategory::TreeHigh => "treeHigh",
            HabitatCategory::Garden => "garden",
            HabitatCategory::Ground => "ground",
        }
    }

    pub fn config(self) -> EnvironmentConfig {
        match self {
            HabitatCategory::Water => EnvironmentConfig {
                name: "Water Environment",
                colour: 0x4A90E2,
                anchor: Vec3::new(-10.0, 0.0, -5.0),
                size: Vec3::new(6.0, 1.0, 6.0),
                pattern: LayoutPattern::Circular,
                animation: AnimationProfile::Bobbing,
            },
            HabitatCategory::Sky => EnvironmentConfig {
                name: "Sky Environment",
                colour: 0x87CEEB,
                anchor: Vec3::new(0.0, 10.0, -10.0),
                size: Vec3::new(8.0, 2.0, 4.0),
                pattern: LayoutPattern::Scattered,
                animation: AnimationProfile::Floating,
            },
            HabitatCategory::Tree => EnvironmentConfig {
                name: "Tree Environment",
                colour: 0x228B22,
                anchor: Vec3::new(-2.0, 3.0, 2.0),
                size: Vec3::new(6.0, 8.0, 6.0),
                pattern: LayoutPattern::Branches,
                animation: AnimationProfile::Perching,
            },
            HabitatCategory::TreeHigh => EnvironmentConfig {
                name: "Tall Tree Environment",
                colour: 0x2F5233,
                anchor: Vec3::new(6.0, 5.0, 0.0),
                size: Vec3::new(4.0, 12.0, 4.0),
                pattern: LayoutPattern::Trunk,
                animation: AnimationProfile::Drumming,
            },
            HabitatCategory::Garden => EnvironmentConfig {
                name: "Garden Environment",
                colour: 0x9B59B6,
                anchor: Vec3::new(2.0, 1.0, 8.0),
                size: Vec3::new(5.0, 3.0, 5.0),
                pattern: LayoutPattern::Flowers,
                animation: AnimationProfile::Hovering,
            },
            HabitatCategory::Ground => EnvironmentConfig {
                name: "Ground Environment",
                colour: 0x8B4513,
                anchor: Vec3::new(-8.0, -1.0, 8.0),
                size: Vec3::new(6.0, 1.0, 6.0),
                pattern: LayoutPattern::Scattered,
                animation: AnimationProfile::Pecking,
            },
        }
    }
}

/// Geometric rule for positioning birds inside a habitat zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPattern {
    Circular,
    Scattered,
    Grid,
    Branches,
    Trunk,
    Flowers,
    Linear,
}

impl LayoutPattern {
    pub fn name(self) -> &'static str {
        match self {
            LayoutPattern::Circular => "circular",
            LayoutPattern::Scattered => "scattered",
            LayoutPattern::Grid => "grid",
            LayoutPattern::Branches => "branches",
            LayoutPattern::Trunk => "trunk",
            LayoutPattern::Flowers => "flowers",
            LayoutPattern::Linear => "linear",
        }
    }

    /// Unknown names fall back to the linear layout.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "circular" => LayoutPattern::Circular,
            "scattered" => LayoutPattern::Scattered,
            "grid" => LayoutPattern::Grid,
            "branches" => LayoutPattern::Branches,
            "trunk" => LayoutPattern::Trunk,
            "flowers" => LayoutPattern::Flowers,
            _ => LayoutPattern::Linear,
        }
    }
}

/// Idle motion played by every bird of a habitat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationProfile {
    Bobbing,
    Floating,
    Perching,
    Drumming,
    Hovering,
    Pecking,
}

impl AnimationProfile {
    pub fn name(self) -> &'static str {
        match self {
            AnimationProfile::Bobbing => "bobbing",
            AnimationProfile::Floating => "floating",
            AnimationProfile::Perching => "perching",
            AnimationProfile::Drumming => "drumming",
            AnimationProfile::Hovering => "hovering",
            AnimationProfile::Pecking => "pecking",
        }
    }
}

/// Static description of a habitat zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentConfig {
    pub name: &'static str,
    /// 0xRRGGBB
    pub colour: u32,
    pub anchor: Vec3,
    /// Bounding box as (width, height, depth).
    pub size: Vec3,
    pub pattern: LayoutPattern,
    pub animation: AnimationProfile,
}

impl EnvironmentConfig {
    pub fn base_colour(&self) -> Color {
        colour_from_hex(self.colour)
    }
}

/// Convert 0xRRGGBB into an sRGB colour.
pub fn colour_from_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Format 0xRRGGBB as `#rrggbb`.
pub fn hex_string(hex: u32) -> String {
    format!("#{:06x}", hex & 0xFF_FFFF)
}
