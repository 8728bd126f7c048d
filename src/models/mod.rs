pub mod advisory;
pub mod config;

pub use advisory::{AdvisoryOutcome, ImageAdvisory};
pub use config::{AppConfig, PaletteConfig, ProgressiveConfig, PROGRESSIVE_MARKER};
