use image::imageops::{self, FilterType};
use image::RgbImage;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResizeError {
    #[error("cannot fit {width}x{height} into {box_width}x{box_height}: zero dimension")]
    ZeroDimension {
        width: u32,
        height: u32,
        box_width: u32,
        box_height: u32,
    },
}

/// Largest size with the source's aspect ratio that fits the box.
///
/// Scales from the box width first and falls back to the box height when
/// that overflows, so exactly one side touches the box. Results are
/// truncated and never smaller than one pixel.
pub fn fit_dimensions(
    (width, height): (u32, u32),
    (box_width, box_height): (u32, u32),
) -> Result<(u32, u32), ResizeError> {
    if width == 0 || height == 0 || box_width == 0 || box_height == 0 {
        return Err(ResizeError::ZeroDimension {
            width,
            height,
            box_width,
            box_height,
        });
    }

    let (w, h, bw, bh) = (
        width as u64,
        height as u64,
        box_width as u64,
        box_height as u64,
    );

    let fitted_height = bw * h / w;
    let (new_width, new_height) = if fitted_height > bh {
        (bh * w / h, bh)
    } else {
        (bw, fitted_height)
    };

    Ok((new_width.max(1) as u32, new_height.max(1) as u32))
}

/// Resamples `source` to the size returned by [`fit_dimensions`].
pub fn resize_to_fit(
    source: &RgbImage,
    box_size: (u32, u32),
) -> Result<RgbImage, ResizeError> {
    let (width, height) = fit_dimensions(source.dimensions(), box_size)?;
    debug!(
        "Resizing {}x{} to {}x{}",
        source.width(),
        source.height(),
        width,
        height
    );

    if (width, height) == source.dimensions() {
        return Ok(source.clone());
    }
    Ok(imageops::resize(source, width, height, FilterType::Triangle))
}
