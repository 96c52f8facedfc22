use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Region color assignment
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.70, 0.50).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// Maps each region to a stable marker colour. Regions outside the mapping
/// fall back to gray.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    fallback: Color32,
}

impl ColorMap {
    /// Assign one colour per region, in the given order (the table keeps its
    /// region list sorted, so colours are stable across reloads).
    pub fn for_regions(regions: &[String]) -> Self {
        let palette = generate_palette(regions.len());
        let mapping: BTreeMap<String, Color32> =
            regions.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            fallback: Color32::GRAY,
        }
    }

    /// Marker colour for a region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(12);
        assert_eq!(palette.len(), 12);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette_is_empty() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn regions_get_distinct_colors_and_unknowns_fall_back() {
        let map = ColorMap::for_regions(&["Goa".to_string(), "Kerala".to_string()]);
        assert_ne!(map.color_for("Goa"), map.color_for("Kerala"));
        assert_eq!(map.color_for("Sikkim"), Color32::GRAY);
    }
}
