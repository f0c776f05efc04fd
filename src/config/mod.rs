use serde::Deserialize;
use std::path::PathBuf;

/// Fixed defaults and plausibility bounds for roof estimates.
///
/// The estimate flow must never dead-end the user: every failure path
/// in the core lands on one of these defaults instead of an error.
pub mod defaults {
    /// Assumed roof area when nothing usable is supplied, in sq ft
    pub const DEFAULT_AREA_SQFT: f64 = 2500.0;

    /// Scale factor applied when no footprint profile can be selected
    pub const DEFAULT_SCALE_FACTOR: f64 = 1.8;

    /// Aspect ratio applied when no footprint profile can be selected
    pub const DEFAULT_ASPECT_RATIO: f64 = 1.5;

    // Geometric results outside this band are discarded as implausible
    // for a residential/light-commercial roof.
    pub const MIN_PLAUSIBLE_SQFT: f64 = 500.0;
    pub const MAX_PLAUSIBLE_SQFT: f64 = 10_000.0;
}

fn default_size() -> f64 {
    defaults::DEFAULT_AREA_SQFT
}
fn default_fallback_size() -> f64 {
    defaults::DEFAULT_AREA_SQFT
}
fn default_verbose() -> bool {
    false
}

/// Settings loaded from a roofprint.toml config file
///
/// Every field mirrors a CLI argument; CLI values take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub building_size: Option<f64>,
    #[serde(default)]
    pub stories: Option<u32>,
    #[serde(default)]
    pub roof_type: Option<String>,
    #[serde(default)]
    pub roof_pitch: Option<String>,
    #[serde(default = "default_fallback_size")]
    pub fallback_size: f64,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("roofprint.toml"));
    paths.push(PathBuf::from(".roofprint.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("roofprint").join("config.toml"));
        paths.push(config_dir.join("roofprint.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".roofprint.toml"));
        paths.push(home.join(".config").join("roofprint").join("config.toml"));
    }

    paths
}
