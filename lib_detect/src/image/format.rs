use std::path::{Path, PathBuf};

use image::RgbImage;

use super::geometry::DisplayGeometry;
use super::resize::{resize_to_fit, ResizeError};
use crate::color::Rgb;

/// A decoded image resized for the canvas, together with where it sits on
/// the canvas. The two are only ever created and replaced together.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pixels: RgbImage,
    geometry: DisplayGeometry,
    original_size: (u32, u32),
    path: Option<PathBuf>,
}

impl LoadedImage {
    pub fn new(source: RgbImage, canvas: (u32, u32)) -> Result<Self, ResizeError> {
        let original_size = source.dimensions();
        let pixels = resize_to_fit(&source, canvas)?;
        let geometry = DisplayGeometry::centered(pixels.dimensions(), canvas);

        Ok(Self {
            pixels,
            geometry,
            original_size,
            path: None,
        })
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Pixel in the resized buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixels.get_pixel_checked(x, y).map(|p| Rgb::from(p.0))
    }

    /// Color under a canvas position, if it lands on the image.
    pub fn sample(&self, x: f32, y: f32) -> Option<Rgb> {
        let (px, py) = self.geometry.to_image(x, y)?;
        self.pixel(px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_image() -> RgbImage {
        // Left half red, right half blue.
        RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        })
    }

    #[test]
    fn test_new_centers_resized_image() {
        let loaded = LoadedImage::new(split_image(), (800, 600)).unwrap();
        assert_eq!(loaded.original_size(), (4, 2));
        assert_eq!(
            loaded.geometry(),
            DisplayGeometry {
                offset_x: 0,
                offset_y: 100,
                width: 800,
                height: 400
            }
        );
        assert_eq!(loaded.pixels().dimensions(), (800, 400));
    }

    #[test]
    fn test_sample() {
        let loaded = LoadedImage::new(split_image(), (800, 600)).unwrap();
        assert_eq!(loaded.sample(10.0, 300.0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(loaded.sample(790.0, 300.0), Some(Rgb::new(0, 0, 255)));
        assert_eq!(loaded.sample(10.0, 50.0), None);
        assert_eq!(loaded.sample(10.0, 500.0), None);
    }

    #[test]
    fn test_pixel_out_of_range() {
        let loaded = LoadedImage::new(split_image(), (8, 4)).unwrap();
        assert_eq!(loaded.pixel(7, 3), Some(Rgb::new(0, 0, 255)));
        assert_eq!(loaded.pixel(8, 0), None);
    }
}
