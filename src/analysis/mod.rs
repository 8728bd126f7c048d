//! Image classifiers: encoding efficiency and palette complexity.

pub mod compression;
pub mod palette;

pub use compression::{classify_compression, CompressionLevel, CompressionThresholds};
pub use palette::{classify_palette, Palette, PaletteOptions, PaletteReport, PaletteVerdict};
