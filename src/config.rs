//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HFD_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperfold_fractal::{FractalConfig, FractalError, FractalGenerator};
use hyperfold_math::{PlaneSpeeds, ProjectionError, Projector, SINGULARITY_EPSILON};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rotation configuration
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Fractal configuration
    #[serde(default)]
    pub fractal: FractalConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HFD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HFD_FRACTAL__MAX_DEPTH=4 -> fractal.max_depth = 4
        figment = figment.merge(Env::prefixed("HFD_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde can't: builds the projector and dry-runs the generator
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.projection.to_projector()?;
        self.rotation.validate()?;
        FractalGenerator::from_config(&self.fractal).validate(1, self.fractal.base_size)?;
        self.animation.validate()?;
        Ok(())
    }
}

/// Which wireframe the demo projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireShapeKind {
    /// A single tesseract
    #[default]
    Tesseract,
    /// A tesseract inside a breathing tesseract
    NestedTesseract,
}

/// Projection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Viewer position along w
    pub viewer_distance: f64,
    /// Minimum |d − w| before a vertex counts as singular
    pub singularity_epsilon: f64,
    /// Shape to project
    pub shape: WireShapeKind,
    /// Side length of the tesseract
    pub tesseract_size: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            viewer_distance: 2.0,
            singularity_epsilon: SINGULARITY_EPSILON,
            shape: WireShapeKind::Tesseract,
            tesseract_size: 2.0,
        }
    }
}

impl ProjectionConfig {
    /// Build a projector from this config
    pub fn to_projector(&self) -> Result<Projector, ProjectionError> {
        Ok(Projector::new(self.viewer_distance)?.with_epsilon(self.singularity_epsilon))
    }
}

/// Rotation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Angular velocity per plane in radians per second
    pub speeds: PlaneSpeeds,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            speeds: PlaneSpeeds::double_xy_zw(),
        }
    }
}

impl RotationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.speeds.iter().find(|(_, speed)| !speed.is_finite()) {
            Some((_, speed)) => Err(ConfigError::invalid("rotation.speeds", speed)),
            None => Ok(()),
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Stop after this many frames (0 = no frame limit)
    pub max_frames: u64,
    /// Stop after this many simulated seconds (0 = no time limit)
    pub max_seconds: f64,
    /// Simulated seconds per frame
    pub frame_dt: f64,
    /// Color phase advance per frame, before the pulse step scaling
    pub color_speed: f64,
    /// Smallest half-extent of a breathing shell
    pub breathing_min: f64,
    /// Largest half-extent of a breathing shell
    pub breathing_max: f64,
    /// Peak hue shift of the grid pulse
    pub pulse_amplitude: f64,
    /// Pulse cycles per color cycle
    pub pulse_frequency: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_frames: 600,
            max_seconds: 0.0,
            frame_dt: 1.0 / 60.0,
            color_speed: 0.001,
            breathing_min: 0.3,
            breathing_max: 1.0,
            pulse_amplitude: 0.15,
            pulse_frequency: 0.5,
        }
    }
}

impl AnimationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(ConfigError::invalid("animation.frame_dt", self.frame_dt));
        }
        if !self.max_seconds.is_finite() || self.max_seconds < 0.0 {
            return Err(ConfigError::invalid("animation.max_seconds", self.max_seconds));
        }
        // The demo has no other way to stop
        if self.max_frames == 0 && self.max_seconds == 0.0 {
            return Err(ConfigError::invalid("animation.max_frames", 0.0));
        }
        if !(self.breathing_min > 0.0 && self.breathing_min <= self.breathing_max) {
            return Err(ConfigError::invalid("animation.breathing_min", self.breathing_min));
        }
        if !self.breathing_max.is_finite() {
            return Err(ConfigError::invalid("animation.breathing_max", self.breathing_max));
        }
        Ok(())
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log frame statistics every N frames (0 = never)
    pub stats_interval: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval: 60,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or parsed
    Load(figment::Error),
    /// The projection section can't build a projector
    Projection(ProjectionError),
    /// The fractal section would be rejected by the generator
    Fractal(FractalError),
    /// Any other out-of-range value
    InvalidValue { key: &'static str, value: f64 },
}

impl ConfigError {
    fn invalid(key: &'static str, value: f64) -> Self {
        ConfigError::InvalidValue { key, value }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e)
    }
}

impl From<ProjectionError> for ConfigError {
    fn from(e: ProjectionError) -> Self {
        ConfigError::Projection(e)
    }
}

impl From<FractalError> for ConfigError {
    fn from(e: FractalError) -> Self {
        ConfigError::Fractal(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Configuration error: {}", e),
            ConfigError::Projection(e) => write!(f, "Configuration error in [projection]: {}", e),
            ConfigError::Fractal(e) => write!(f, "Configuration error in [fractal]: {}", e),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Configuration error: invalid value {} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e),
            ConfigError::Projection(e) => Some(e),
            ConfigError::Fractal(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}
