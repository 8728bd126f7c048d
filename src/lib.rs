//! OptimusIMG - raster image advisor
//!
//! Scans a folder of JPEG/PNG images and suggests which ones should be
//! compressed further or converted to SVG. Also prepares blurred progressive
//! placeholders. This library exposes modules for integration testing.

pub mod analysis;
pub mod error;
pub mod models;
pub mod services;
