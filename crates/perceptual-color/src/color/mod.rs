//! Color types and conversion functions
//!
//! Every conversion is a pure function and is also exposed as a `From`
//! implementation where no extra input (such as a background) is needed.
//!
//! # Example
//!
//! ```
//! use perceptual_color::{Lab, Rgb, Xyz};
//!
//! let orange = Rgb::new(200, 98, 0);
//! let xyz = Xyz::from(orange);
//! let lab = Lab::from(xyz);
//! assert!(lab.l > 50.0 && lab.a > 0.0 && lab.b > 0.0);
//! ```

mod lab;
mod rgb;
mod xyz;

pub use lab::{rgba_to_lab, xyz_to_lab, Lab, D65};
pub use rgb::{rgba_to_rgb, ParseColorError, Rgb, Rgba};
pub use xyz::{rgb_to_xyz, Xyz};
