pub mod format;
pub mod geometry;
pub mod loader;
pub mod resize;

pub use format::LoadedImage;
pub use geometry::DisplayGeometry;
pub use loader::{load_image, load_image_from_bytes};
pub use resize::{fit_dimensions, resize_to_fit};
