use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour `i` of `n`, spread around the hue wheel.
fn hue_step(i: usize, n: usize) -> Color32 {
    let hsl = Hsl::new(360.0 * i as f32 / n as f32, 0.65, 0.6);
    let linear: Srgb = hsl.into_color();
    let rgb: Srgb<u8> = linear.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: genre → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct genre label to its own colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(genres: &[String]) -> Self {
        let n = genres.len();
        let mapping = genres
            .iter()
            .enumerate()
            .map(|(i, genre)| (genre.clone(), hue_step(i, n)))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a genre label.
    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping
            .get(genre)
            .copied()
            .unwrap_or(self.default_color)
    }
}
