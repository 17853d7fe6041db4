use log::debug;

use super::palette::{Palette, PaletteEntry};
use super::rgb::Rgb;

/// Outcome of looking up a pixel in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatch {
    pub entry: PaletteEntry,
    pub rgb: Rgb,
    pub distance: u32,
}

impl ColorMatch {
    /// `"<name> (<r>, <g>, <b>)"`, using the sampled pixel's channels.
    pub fn label(&self) -> String {
        format!("{} {}", self.entry.name, self.rgb)
    }
}

/// Sum of absolute per-channel differences.
pub fn manhattan_distance(a: Rgb, b: Rgb) -> u32 {
    a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
}

impl Palette {
    /// Linear scan in table order. Ties compare with `<=`, so the last of
    /// several equally close entries wins.
    pub fn nearest(&self, rgb: Rgb) -> ColorMatch {
        let entries = self.entries();
        let mut best = &entries[0];
        let mut best_distance = u32::MAX;

        for entry in entries {
            let distance = manhattan_distance(rgb, entry.rgb);
            if distance <= best_distance {
                best_distance = distance;
                best = entry;
            }
        }

        debug!(
            "Nearest to {}: {} [{}] (distance {})",
            rgb.to_hex(),
            best.name,
            best.key,
            best_distance
        );

        ColorMatch {
            entry: best.clone(),
            rgb,
            distance: best_distance,
        }
    }
}
