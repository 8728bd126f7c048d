//! Image fixtures written into temporary folders.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File names used by the standard fixture folder
pub mod names {
    /// Two-color PNG logo: tiny file, few colors
    pub const LOGO: &str = "logo.png";

    /// Smooth JPEG gradient: well compressed, many colors
    pub const GRADIENT: &str = "gradient.jpg";

    /// PNG of pseudo-random noise: dense and above the size floor
    pub const NOISE: &str = "noise.png";

    /// Not an image at all
    pub const BROKEN: &str = "broken.png";
}

/// Temporary folder of images, removed on drop.
pub struct ImageFolder {
    dir: TempDir,
}

impl ImageFolder {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Folder with one image of each kind in [`names`].
    pub fn standard() -> Self {
        let folder = Self::new();
        folder.logo(names::LOGO);
        folder.gradient(names::GRADIENT);
        folder.noise(names::NOISE);
        folder.broken(names::BROKEN);
        folder
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    fn prepare(&self, relative: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        path
    }

    /// Orange disc on white.
    pub fn logo(&self, relative: &str) -> PathBuf {
        let path = self.prepare(relative);
        RgbaImage::from_fn(200, 200, |x, y| {
            let (dx, dy) = (x as i32 - 100, y as i32 - 100);
            if dx * dx + dy * dy < 70 * 70 {
                Rgba([255, 140, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
        .save(&path)
        .expect("Failed to write logo");
        path
    }

    /// Red/green gradient across the whole image.
    pub fn gradient(&self, relative: &str) -> PathBuf {
        let path = self.prepare(relative);
        RgbImage::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, 128]))
            .save(&path)
            .expect("Failed to write gradient");
        path
    }

    /// 200x200 of incompressible noise.
    pub fn noise(&self, relative: &str) -> PathBuf {
        let path = self.prepare(relative);
        let mut state: u32 = 0x9E37_79B9;
        let mut next = move || {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        RgbImage::from_fn(200, 200, |_, _| {
            let v = next().to_le_bytes();
            Rgb([v[0], v[1], v[2]])
        })
        .save(&path)
        .expect("Failed to write noise");
        path
    }

    pub fn broken(&self, relative: &str) -> PathBuf {
        let path = self.prepare(relative);
        std::fs::write(&path, b"this is not an image").expect("Failed to write broken file");
        path
    }

    pub fn text(&self, relative: &str) -> PathBuf {
        let path = self.prepare(relative);
        std::fs::write(&path, b"notes").expect("Failed to write text file");
        path
    }
}
