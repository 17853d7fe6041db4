#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod filemanager;
mod icon;
mod overlay;

use std::path::Path;

use app::ColorDetector;
use eframe::egui;
use lib_detect::constants::{APP_NAME, PALETTE_FILE, WINDOW_SIZE};
use lib_detect::{Palette, PaletteError};
use log::{error, warn};
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error("Color palette unavailable: {0}")]
    Palette(#[from] PaletteError),
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    if let Err(e) = lib_detect::init_logging() {
        lib_detect::init_stderr_logging();
        warn!("Logging to stderr, could not create log file: {}", e);
    }

    // Matching is meaningless without a palette, so stop before any window opens.
    let palette = Palette::load_or_builtin(Path::new(PALETTE_FILE)).map_err(|e| {
        error!("Failed to load palette: {}", e);
        filemanager::show_error(APP_NAME, &format!("Could not load {}: {}", PALETTE_FILE, e));
        e
    })?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_icon(icon::color_wheel()),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ColorDetector::new(palette)))
        }),
    )?;

    Ok(())
}
