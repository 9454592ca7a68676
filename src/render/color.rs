//! Foundational color type for the preview renderer
//!
//! Normalized RGBA used by the cairo drawing code, with conversions to and
//! from the 8-bit RGB triples the settings model stores and the
//! `gdk::RGBA` values GTK widgets trade in.

use gtk4::cairo;
use serde::{Deserialize, Serialize};

/// RGBA color with 0.0-1.0 channels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an 8-bit RGB triple
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
            a: 1.0,
        }
    }

    /// 8-bit RGB triple, rounded per channel
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Convert to GTK RGBA
    pub fn to_gdk_rgba(&self) -> gtk4::gdk::RGBA {
        gtk4::gdk::RGBA::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32)
    }

    /// Create from GTK RGBA
    pub fn from_gdk_rgba(rgba: &gtk4::gdk::RGBA) -> Self {
        Self {
            r: rgba.red() as f64,
            g: rgba.green() as f64,
            b: rgba.blue() as f64,
            a: rgba.alpha() as f64,
        }
    }

    /// Apply to Cairo context
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }

    /// Same color with a different alpha
    pub fn with_alpha(&self, a: f64) -> Self {
        Self { a, ..*self }
    }

    /// Color scaled toward black; `factor` 1.0 is unchanged, 0.0 is black
    pub fn darkened(&self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_round_trip() {
        // step 17 covers 0 and 255 plus a spread of interior values
        let mut c = 0u32;
        while c <= 255 {
            let rgb = [c as u8, (255 - c) as u8, (c / 2) as u8];
            let back = Color::from_rgb8(rgb).to_rgb8();
            for ch in 0..3 {
                assert!(
                    (i32::from(back[ch]) - i32::from(rgb[ch])).abs() <= 1,
                    "channel {} drifted: {} -> {}",
                    ch,
                    rgb[ch],
                    back[ch]
                );
            }
            c += 17;
        }
    }

    #[test]
    fn test_gdk_round_trip() {
        let rgb = [192, 128, 0];
        let rgba = Color::from_rgb8(rgb).to_gdk_rgba();
        let back = Color::from_gdk_rgba(&rgba).to_rgb8();
        for ch in 0..3 {
            assert!((i32::from(back[ch]) - i32::from(rgb[ch])).abs() <= 1);
        }
    }

    #[test]
    fn test_darkened() {
        let c = Color::new(0.8, 0.4, 0.2, 0.9);
        let d = c.darkened(0.5);
        assert_eq!(d.r, 0.4);
        assert_eq!(d.a, 0.9);
    }
}
