use std::path::{Path, PathBuf};

use lib_detect::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, IMAGE_EXTENSIONS, IMAGE_FILTER_NAME};
use lib_detect::{load_image, LoadError, LoadedImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageHandlingError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error("Unsupported file extension")]
    UnsupportedExtension,

    #[error("{0}")]
    Load(#[from] LoadError),
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

pub fn pick_image() -> Result<PathBuf, ImageHandlingError> {
    rfd::FileDialog::new()
        .add_filter(IMAGE_FILTER_NAME, &IMAGE_EXTENSIONS)
        .pick_file()
        .ok_or(ImageHandlingError::DialogCanceled)
}

pub fn open_image(path: &Path) -> Result<LoadedImage, ImageHandlingError> {
    if !is_supported(path) {
        return Err(ImageHandlingError::UnsupportedExtension);
    }
    Ok(load_image(path, (CANVAS_WIDTH, CANVAS_HEIGHT))?)
}

pub fn show_error(title: &str, description: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
