//! Scene configuration
//!
//! Every field has a default matching the stock night scene, so a YAML
//! document only needs the keys it wants to change:
//!
//! ```yaml
//! tree:
//!   depth: 8
//!   wind_amplitude_deg: 12
//! sky:
//!   star_count: 400
//! ```

use serde::Deserialize;

use crate::render::Color;

/// Root configuration document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub tree: TreeConfig,
    pub sky: SkyConfig,
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| format!("Scene config parse error: {}", e))
    }
}

/// Tree shape and wind. Branch dimensions are fractions of canvas height.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Number of times the branches branch
    pub depth: u32,
    /// Angle each child branch comes off its parent
    pub branch_angle_deg: f64,
    /// Size of each child relative to its parent
    pub branch_scale: f64,
    pub branch_width: f64,
    pub branch_length: f64,
    /// Largest angle the wind pushes the trunk
    pub wind_amplitude_deg: f64,
    /// Phase advance of the wind, radians per second
    pub wind_frequency: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            branch_angle_deg: 25.0,
            branch_scale: 0.8,
            branch_width: 0.015,
            branch_length: 0.15,
            wind_amplitude_deg: 8.0,
            wind_frequency: 0.5,
        }
    }
}

/// Backdrop: gradient, stars and moon. Positions are fractions of the canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub star_count: usize,
    /// Star field rotation, degrees per second
    pub star_speed_deg: f64,
    pub star_seed: u32,
    pub star_color: Color,
    pub star_alpha: f64,
    /// Pivot of the star field as `[x / width, y / height]`
    pub pivot: [f64; 2],
    pub north_star_radius: f64,
    /// Moon centre relative to the pivot, in canvas widths
    pub moon_offset: [f64; 2],
    pub moon_radius: f64,
    pub moon_inner_radius: f64,
    pub moon_color: Color,
    pub moon_inner_color: Color,
    /// Moon rotation relative to the star field's
    pub moon_orbit_factor: f64,
    /// `(offset, "#hex")` pairs, sorted by offset
    pub gradient: Vec<(f64, Color)>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        let hex = |s: &str| Color::from_hex(s).unwrap_or(Color::BLACK);
        Self {
            star_count: 1000,
            star_speed_deg: 3.0,
            star_seed: 42,
            star_color: Color::WHITE,
            star_alpha: 0.8,
            pivot: [0.75, 1.0 / 6.0],
            north_star_radius: 2.0,
            moon_offset: [-0.5, 0.5],
            moon_radius: 50.0,
            moon_inner_radius: 45.0,
            moon_color: hex("#ddf"),
            moon_inner_color: hex("#eef"),
            moon_orbit_factor: 2.0,
            gradient: vec![
                (0.0, hex("#002")),
                (0.4, hex("#004")),
                (0.5, hex("#226")),
                (0.5, hex("#111")),
                (1.0, hex("#232")),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SceneConfig::from_yaml("").unwrap(), SceneConfig::default());
        assert_eq!(SceneConfig::from_yaml("  \n").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r##"
tree:
  depth: 6
  wind_amplitude_deg: 12
sky:
  star_count: 10
  moon_color: "#fff"
"##;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.tree.depth, 6);
        assert_eq!(config.tree.wind_amplitude_deg, 12.0);
        assert_eq!(config.tree.branch_scale, 0.8);
        assert_eq!(config.sky.star_count, 10);
        assert_eq!(config.sky.moon_color, Color::WHITE);
        assert_eq!(config.sky.gradient.len(), 5);
    }

    #[test]
    fn test_gradient_override() {
        let yaml = r##"
sky:
  gradient:
    - [0.0, "#000"]
    - [1.0, "#fff"]
"##;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sky.gradient, vec![(0.0, Color::BLACK), (1.0, Color::WHITE)]);
    }

    #[test]
    fn test_bad_color_is_reported() {
        let err = SceneConfig::from_yaml("sky:\n  star_color: \"#nothex\"\n").unwrap_err();
        assert!(err.contains("Scene config parse error"), "{}", err);
    }

    #[test]
    fn test_non_ascii_color_is_an_error() {
        assert!(SceneConfig::from_yaml("sky:\n  star_color: \"#é1\"\n").is_err());
        assert!(SceneConfig::from_yaml("sky:\n  moon_color: \"#+fffff\"\n").is_err());
    }

    #[test]
    fn test_default_gradient_has_hard_horizon() {
        let sky = SkyConfig::default();
        assert_eq!(sky.gradient[2].0, sky.gradient[3].0);
        assert_eq!(sky.gradient[0].1, Color::rgb(0, 0, 0x22));
    }
}
