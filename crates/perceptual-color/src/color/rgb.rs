//! 8-bit sRGB color types and alpha compositing

use std::fmt;
use std::str::FromStr;

/// Why a hex string is not an [`Rgb`] color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after the optional `#`; only 3 and 6 are colors
    WrongLength(usize),
    /// First character that is not a hex digit
    NotHexDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => write!(f, "expected 3 or 6 hex digits, found {n}"),
            Self::NotHexDigit(c) => write!(f, "{c:?} is not a hex digit"),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// An opaque 8-bit sRGB color.
///
/// Used for backgrounds and for the result of flattening a translucent
/// [`Rgba`] onto a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Opaque white, the default background for palette analysis.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use perceptual_color::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::WHITE);
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .unwrap_or(s)
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::NotHexDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits[..] {
            // Shorthand: F -> FF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
            }
            _ => Err(ParseColorError::WrongLength(digits.len())),
        }
    }
}

/// An 8-bit sRGB color with a fractional alpha.
///
/// `a` is the opacity in `0.0..=1.0`; decoders that produce 8-bit alpha
/// should use [`Rgba::from_u8`], which normalizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity: 0.0 (transparent) to 1.0 (opaque)
    pub a: f64,
}

impl Rgba {
    /// Create a new color. `a` is clamped to `0.0..=1.0`.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create a fully opaque color.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from four 8-bit channels, normalizing alpha to `0.0..=1.0`.
    ///
    /// ```
    /// use perceptual_color::Rgba;
    /// let half = Rgba::from_u8(10, 20, 30, 51);
    /// assert!((half.a - 0.2).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: a as f64 / 255.0,
        }
    }

    /// The color channels without alpha.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb.r, rgb.g, rgb.b)
    }
}

/// Alpha-composite `foreground` over an opaque `background`.
///
/// Each channel is `floor(a * fg + (1 - a) * bg)`. With `a == 1.0` the result
/// is the foreground color; with `a == 0.0` it is the background.
///
/// # Example
///
/// ```
/// use perceptual_color::{rgba_to_rgb, Rgb, Rgba};
///
/// let grey = Rgba::new(100, 100, 100, 0.5);
/// assert_eq!(rgba_to_rgb(Rgb::WHITE, grey), Rgb::new(177, 177, 177));
/// assert_eq!(rgba_to_rgb(Rgb::BLACK, grey), Rgb::new(50, 50, 50));
/// ```
pub fn rgba_to_rgb(background: Rgb, foreground: Rgba) -> Rgb {
    let alpha = foreground.a.clamp(0.0, 1.0);
    let inverse = 1.0 - alpha;
    let blend = |fg: u8, bg: u8| -> u8 {
        (alpha * fg as f64 + inverse * bg as f64)
            .floor()
            .clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: blend(foreground.r, background.r),
        g: blend(foreground.g, background.g),
        b: blend(foreground.b, background.b),
    }
}
