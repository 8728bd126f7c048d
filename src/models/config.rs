use crate::analysis::palette::{DEFAULT_COLOR_LIMIT, DEFAULT_CONTRAST};
use crate::analysis::{CompressionThresholds, PaletteOptions};
use crate::error::ConfigError;
use perceptual_color::Rgb;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Filename marker of generated progressive placeholders.
pub const PROGRESSIVE_MARKER: &str = "-OptimusIMG-progressive";

/// Application configuration loaded from optimus.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory scanned when no path is given on the command line
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Filename marker identifying generated progressive placeholders
    #[serde(default = "default_progressive_marker")]
    pub progressive_marker: String,

    /// Palette complexity settings
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Compression classifier thresholds
    #[serde(default)]
    pub compression: CompressionThresholds,

    /// Progressive placeholder generation
    #[serde(default)]
    pub progressive: ProgressiveConfig,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("public/images")
}

fn default_progressive_marker() -> String {
    PROGRESSIVE_MARKER.to_string()
}

/// Palette complexity settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Distinct colors allowed before an image counts as photographic
    #[serde(default = "default_color_limit")]
    pub color_limit: usize,

    /// Contrast stretch applied before counting (null to disable)
    #[serde(default = "default_contrast")]
    pub contrast: Option<f64>,

    /// Background translucent pixels are flattened onto (hex)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_color_limit() -> usize {
    DEFAULT_COLOR_LIMIT
}

fn default_contrast() -> Option<f64> {
    Some(DEFAULT_CONTRAST)
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            color_limit: default_color_limit(),
            contrast: default_contrast(),
            background: default_background(),
        }
    }
}

/// Progressive placeholder settings
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ProgressiveConfig {
    /// Placeholder size relative to the source
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Gaussian blur sigma applied after scaling
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
}

fn default_scale() -> f64 {
    0.2
}

fn default_blur_sigma() -> f32 {
    8.0
}

impl Default for ProgressiveConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            blur_sigma: default_blur_sigma(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or invalid.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    images_dir = %config.images_dir.display(),
                    color_limit = config.palette.color_limit,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette_options()?;

        let scale = self.progressive.scale;
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(ConfigError::InvalidScale(scale));
        }

        let sigma = self.progressive.blur_sigma;
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(ConfigError::InvalidBlur(sigma));
        }

        Ok(())
    }

    /// Palette classifier options derived from this config.
    pub fn palette_options(&self) -> Result<PaletteOptions, ConfigError> {
        if self.palette.color_limit == 0 {
            return Err(ConfigError::ZeroColorLimit);
        }

        if let Some(contrast) = self.palette.contrast {
            if !(contrast > -1.0 && contrast < 1.0) {
                return Err(ConfigError::InvalidContrast(contrast));
            }
        }

        let background: Rgb = self.palette.background.parse()?;

        Ok(PaletteOptions {
            color_limit: self.palette.color_limit,
            contrast: self.palette.contrast,
            background,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            progressive_marker: default_progressive_marker(),
            palette: PaletteConfig::default(),
            compression: CompressionThresholds::default(),
            progressive: ProgressiveConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.images_dir, PathBuf::from("public/images"));
        assert_eq!(config.progressive_marker, "-OptimusIMG-progressive");
        assert_eq!(config.palette.color_limit, 128);
        assert_eq!(config.palette.contrast, Some(0.6));
        assert_eq!(config.compression.oversized_bytes, 1_500_000);
        assert_eq!(config.progressive.scale, 0.2);
        assert_eq!(config.progressive.blur_sigma, 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_palette_options() {
        let options = AppConfig::default().palette_options().unwrap();
        assert_eq!(options, PaletteOptions::default());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
images_dir: assets/img
palette:
  color_limit: 64
  contrast: null
  background: "#000"
compression:
  oversized_bytes: 900000
progressive:
  scale: 0.1
"##;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.images_dir, PathBuf::from("assets/img"));
        assert_eq!(config.progressive_marker, PROGRESSIVE_MARKER);
        assert_eq!(config.palette.color_limit, 64);
        assert_eq!(config.palette.contrast, None);
        assert_eq!(config.compression.oversized_bytes, 900_000);
        assert_eq!(config.compression.low_min_bytes, 50_000);
        assert_eq!(config.progressive.scale, 0.1);
        assert_eq!(config.progressive.blur_sigma, 8.0);

        let options = config.palette_options().unwrap();
        assert_eq!(options.background, Rgb::BLACK);
        assert_eq!(options.contrast, None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validate_rejects_out_of_range_contrast() {
        let mut config = AppConfig::default();
        config.palette.contrast = Some(1.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidContrast(c)) if c == 1.0
        ));
    }

    #[test]
    fn test_validate_rejects_zero_color_limit() {
        let mut config = AppConfig::default();
        config.palette.color_limit = 0;

        assert!(matches!(config.validate(), Err(ConfigError::ZeroColorLimit)));
    }

    #[test]
    fn test_validate_rejects_bad_background() {
        let mut config = AppConfig::default();
        config.palette.background = "white".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBackground(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_scale_and_blur() {
        let mut config = AppConfig::default();
        config.progressive.scale = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(_))));

        let mut config = AppConfig::default();
        config.progressive.blur_sigma = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBlur(_))));
    }

    #[test]
    fn test_from_file_and_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "palette:\n  color_limit: 16").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.palette.color_limit, 16);
        assert_eq!(AppConfig::load(Some(file.path())), config);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        assert_eq!(AppConfig::load(None), AppConfig::default());

        let missing = Path::new("/nonexistent/optimus.yaml");
        assert!(matches!(
            AppConfig::from_file(missing),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(AppConfig::load(Some(missing)), AppConfig::default());

        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        writeln!(invalid, "palette:\n  contrast: 3.0").unwrap();
        assert_eq!(AppConfig::load(Some(invalid.path())), AppConfig::default());
    }
}
