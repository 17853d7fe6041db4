pub mod matcher;
pub mod palette;
pub mod rgb;

pub use matcher::{manhattan_distance, ColorMatch};
pub use palette::{Palette, PaletteEntry, PaletteError};
pub use rgb::{HexError, Rgb, TextTone};
