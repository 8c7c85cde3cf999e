//! Dominant color extraction and the HSV sort key.
//!
//! The dominant color is the representative color of the most prominent
//! cluster a median-cut quantizer finds in the image, not the mean of all
//! pixels, so a cover with a large red field and a small blue logo sorts
//! as red.

use std::cmp::Ordering;

use async_trait::async_trait;
use color_thief::ColorFormat;
use reqwest::Client;

use crate::error::AppError;

/// Sampling step handed to the quantizer. 1 looks at every pixel.
pub const QUALITY: u8 = 1;
/// Number of clusters requested from the quantizer; only the first is used.
pub const PALETTE_SIZE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Hue and saturation in `[0, 1]`, value on the 0-255 scale of the input.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = (self.r as f64, self.g as f64, self.b as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;

        if max == min {
            return Hsv { h: 0.0, s: 0.0, v };
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsv {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Sort key, ordered lexicographically on `(h, s, v)`.
#[derive(Debug, Clone, Copy)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hsv {}

impl PartialOrd for Hsv {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hsv {
    fn cmp(&self, other: &Self) -> Ordering {
        self.h
            .total_cmp(&other.h)
            .then_with(|| self.s.total_cmp(&other.s))
            .then_with(|| self.v.total_cmp(&other.v))
    }
}

/// Source of a single representative color for a cover image.
#[async_trait]
pub trait ColorExtractor: Send + Sync {
    async fn dominant_color(&self, url: &str) -> Result<Rgb, AppError>;
}

/// Downloads the artwork and quantizes it with `color_thief`.
#[derive(Debug, Clone)]
pub struct ArtworkColorExtractor {
    http: Client,
}

impl ArtworkColorExtractor {
    pub fn new(http: Client) -> Self {
        ArtworkColorExtractor { http }
    }
}

#[async_trait]
impl ColorExtractor for ArtworkColorExtractor {
    async fn dominant_color(&self, url: &str) -> Result<Rgb, AppError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        dominant_color_from_bytes(&bytes)
    }
}

/// Decodes an encoded image (JPEG, PNG, WebP) and returns its dominant color.
pub fn dominant_color_from_bytes(bytes: &[u8]) -> Result<Rgb, AppError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(AppError::Palette("image has no pixels".to_string()));
    }

    let palette = color_thief::get_palette(image.as_raw(), ColorFormat::Rgba, QUALITY, PALETTE_SIZE)
        .map_err(|e| AppError::Palette(format!("{e:?}")))?;

    palette
        .first()
        .map(|c| Rgb::new(c.r, c.g, c.b))
        .ok_or_else(|| AppError::Palette("quantizer returned an empty palette".to_string()))
}
