pub mod color;
pub mod constants;
pub mod image;

use log::*;
use std::fs::File;
use std::io::{self, Write};

pub use crate::color::matcher::{manhattan_distance, ColorMatch};
pub use crate::color::palette::{Palette, PaletteEntry, PaletteError};
pub use crate::color::rgb::{HexError, Rgb, TextTone};
pub use crate::image::format::LoadedImage;
pub use crate::image::geometry::DisplayGeometry;
pub use crate::image::loader::{load_image, load_image_from_bytes, LoadError};
pub use crate::image::resize::{fit_dimensions, resize_to_fit, ResizeError};

/// Routes `log` output to `log.txt` in the working directory.
///
/// Returns the error from creating the file so the caller can decide on a
/// fallback; see [`init_stderr_logging`].
pub fn init_logging() -> io::Result<()> {
    let target = Box::new(File::create(constants::LOG_FILE)?);

    builder()
        .target(env_logger::Target::Pipe(target))
        .init();
    Ok(())
}

pub fn init_stderr_logging() {
    builder().target(env_logger::Target::Stderr).init();
}

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter(Some("lib_detect"), LevelFilter::Debug)
        .filter(Some("color_detector"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    builder
}
