/// Viewer configuration loaded from TOML
use std::path::{Path, PathBuf};

use bloom_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use clap::ValueEnum;
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Size of the virtual surface the scene is rendered onto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov: f32,
    /// The camera sits at `(0, 0, -distance)`
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: bloom_core::projection::DEFAULT_FOV,
            distance: 400.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Cube,
    Sphere,
    Plane,
    Circle,
    Surface,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Flat,
    Normal,
    Lit,
    Debug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSection {
    pub frame_rate: u32,
    pub demo: DemoKind,
    pub material: MaterialKind,
    pub color: [f32; 3],
    /// Radians added to every mesh's rotation each frame
    pub spin: f32,
}

impl Default for ViewerSection {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            demo: DemoKind::Cube,
            material: MaterialKind::Lit,
            color: [80.0, 200.0, 255.0],
            spin: 0.01,
        }
    }
}

/// Top-level viewer config. Every section is `serde(default)`, so a file only
/// needs the fields it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub surface: SurfaceConfig,
    pub camera: CameraConfig,
    pub viewer: ViewerSection,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::Validation(format!(
                "surface must be non-empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        if !(self.camera.fov > 0.0) {
            return Err(ConfigError::Validation(format!(
                "camera.fov must be positive, got {}",
                self.camera.fov
            )));
        }
        if !(1..=240).contains(&self.viewer.frame_rate) {
            return Err(ConfigError::Validation(format!(
                "viewer.frame_rate must be in 1..=240, got {}",
                self.viewer.frame_rate
            )));
        }
        Ok(())
    }
}

/// Parse config text.
///
/// A config that parses but fails validation is replaced by the defaults
/// with a warning.
pub fn parse(content: &str) -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = config.validate() {
        warn!("{e}");
        warn!("falling back to default config");
        return Ok(ViewerConfig::default());
    }
    Ok(config)
}

/// Load config from a specific TOML file path
pub fn load_from_path(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.surface.width, 960);
        assert_eq!(config.surface.height, 720);
        assert_eq!(config.camera.fov, 150.0);
        assert_eq!(config.viewer.demo, DemoKind::Cube);
        assert_eq!(config.viewer.material, MaterialKind::Lit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let config = parse("[viewer]\ndemo = \"sphere\"\nmaterial = \"normal\"\n").unwrap();
        assert_eq!(config.viewer.demo, DemoKind::Sphere);
        assert_eq!(config.viewer.material, MaterialKind::Normal);
        assert_eq!(config.viewer.frame_rate, 30);
        assert_eq!(config.surface, SurfaceConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = parse("[camera]\nfov = -3.0\ndistance = 900.0\n").unwrap();
        assert_eq!(config, ViewerConfig::default());

        let config = parse("[viewer]\nframe_rate = 0\n").unwrap();
        assert_eq!(config.viewer.frame_rate, 30);
    }

    #[test]
    fn test_parse_error() {
        let err = parse("[viewer\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = parse("[viewer]\ndemo = \"teapot\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[surface]\nwidth = 640\nheight = 480\n[camera]\ndistance = 250.0").unwrap();

        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.surface.width, 640);
        assert_eq!(config.surface.height, 480);
        assert_eq!(config.camera.distance, 250.0);
        assert_eq!(config.camera.fov, 150.0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path(Path::new("/no/such/bloom.toml")).unwrap_err();
        assert_eq!(err.to_string(), "config file not found: /no/such/bloom.toml");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = ViewerConfig::default();
        config.viewer.demo = DemoKind::Lines;
        let text = toml::to_string(&config).unwrap();
        assert_eq!(parse(&text).unwrap(), config);
    }
}
