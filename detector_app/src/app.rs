use eframe::egui::{self, Rect};
use eframe::Frame;
use lib_detect::constants::FRAME_MARGIN;
use lib_detect::{ColorMatch, LoadedImage, Palette};
use log::{debug, error, info};

use crate::canvas::Canvas;
use crate::filemanager::{self, ImageHandlingError};
use crate::overlay;

pub struct ColorDetector {
    palette: Palette,
    canvas: Canvas,
    selection: Option<ColorMatch>,
}

impl ColorDetector {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            canvas: Canvas::new(),
            selection: None,
        }
    }

    fn handle_image_load(&mut self, ctx: &egui::Context) {
        let result = filemanager::pick_image().and_then(|path| filemanager::open_image(&path));

        match self.apply_load(result, ctx) {
            Ok(()) => {}
            Err(ImageHandlingError::DialogCanceled) => debug!("Upload canceled"),
            Err(e) => {
                error!("Upload failed: {}", e);
                filemanager::show_error("Could not open image", &e.to_string());
            }
        }
    }

    /// Shows a freshly loaded image. On error nothing changes: the previous
    /// image and selection stay on screen.
    fn apply_load(
        &mut self,
        result: Result<LoadedImage, ImageHandlingError>,
        ctx: &egui::Context,
    ) -> Result<(), ImageHandlingError> {
        let image = result?;
        self.canvas.load_image(image, ctx);
        self.selection = None;
        Ok(())
    }

    fn draw_buttons(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            if ui.button("Upload Image").clicked() {
                self.handle_image_load(ui.ctx());
            }
            ui.add_space(10.0);
            if ui.button("Exit").clicked() {
                info!("Exit requested");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    /// Lays out one frame and returns where the canvas was placed.
    fn draw(&mut self, ctx: &egui::Context) -> Rect {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(FRAME_MARGIN);

        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                let canvas = self.canvas.show(ui);
                if let Some(rgb) = canvas.inner {
                    let found = self.palette.nearest(rgb);
                    info!("Picked {} -> {}", rgb.to_hex(), found.label());
                    self.selection = Some(found);
                }

                overlay::show(ui, self.selection.as_ref());

                if let Some(image) = self.canvas.image() {
                    if let Some(path) = image.path() {
                        let (width, height) = image.original_size();
                        ui.add_space(4.0);
                        ui.vertical_centered(|ui| {
                            ui.weak(format!("{} ({}x{})", path.display(), width, height));
                        });
                    }
                }

                self.draw_buttons(ui);
                canvas.response.rect
            })
            .inner
    }
}

impl eframe::App for ColorDetector {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Pos2, Vec2};
    use image::RgbImage;
    use lib_detect::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, WINDOW_SIZE};
    use lib_detect::{load_image_from_bytes, Rgb};

    fn app() -> ColorDetector {
        ColorDetector::new(Palette::parse("Red,#ff0000,255,0,0\nBlue,#0000ff,0,0,255\n").unwrap())
    }

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> LoadedImage {
        LoadedImage::new(
            RgbImage::from_pixel(width, height, image::Rgb(rgb)),
            (CANVAS_WIDTH, CANVAS_HEIGHT),
        )
        .unwrap()
    }

    fn apply(
        app: &mut ColorDetector,
        ctx: &egui::Context,
        result: Result<LoadedImage, ImageHandlingError>,
    ) -> Result<(), ImageHandlingError> {
        let mut outcome = Ok(());
        let mut result = Some(result);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            if let Some(result) = result.take() {
                outcome = app.apply_load(result, ctx);
            }
        });
        outcome
    }

    #[test]
    fn test_canvas_fits_inside_window() {
        let ctx = egui::Context::default();
        let mut app = app();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::from(WINDOW_SIZE))),
            ..Default::default()
        };

        let mut canvas_rect = Rect::NOTHING;
        let _ = ctx.run(input, |ctx| canvas_rect = app.draw(ctx));

        assert_eq!(
            canvas_rect.size(),
            Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
        );
        assert!(
            ctx.screen_rect().contains_rect(canvas_rect),
            "canvas {:?} outside window {:?}",
            canvas_rect,
            ctx.screen_rect()
        );
    }

    #[test]
    fn test_successful_load_replaces_image_and_clears_selection() {
        let ctx = egui::Context::default();
        let mut app = app();
        apply(&mut app, &ctx, Ok(solid(4, 2, [255, 0, 0]))).unwrap();
        app.selection = Some(app.palette.nearest(Rgb::new(250, 0, 0)));

        apply(&mut app, &ctx, Ok(solid(2, 4, [0, 0, 255]))).unwrap();

        let image = app.canvas.image().unwrap();
        assert_eq!(image.original_size(), (2, 4));
        assert_eq!(image.pixel(0, 0), Some(Rgb::new(0, 0, 255)));
        assert!(app.selection.is_none());
    }

    #[test]
    fn test_failed_load_keeps_current_state() {
        let ctx = egui::Context::default();
        let mut app = app();
        apply(&mut app, &ctx, Ok(solid(4, 2, [255, 0, 0]))).unwrap();
        let selection = app.palette.nearest(Rgb::new(250, 0, 0));
        app.selection = Some(selection.clone());

        let corrupt = load_image_from_bytes(b"not an image", (CANVAS_WIDTH, CANVAS_HEIGHT))
            .unwrap_err();
        let result = apply(&mut app, &ctx, Err(ImageHandlingError::Load(corrupt)));
        assert!(matches!(result, Err(ImageHandlingError::Load(_))));

        let result = apply(&mut app, &ctx, Err(ImageHandlingError::UnsupportedExtension));
        assert!(matches!(result, Err(ImageHandlingError::UnsupportedExtension)));

        let image = app.canvas.image().unwrap();
        assert_eq!(image.original_size(), (4, 2));
        assert_eq!(image.pixel(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(app.selection, Some(selection));
    }

    #[test]
    fn test_failed_first_load_leaves_canvas_empty() {
        let ctx = egui::Context::default();
        let mut app = app();

        let result = apply(&mut app, &ctx, Err(ImageHandlingError::UnsupportedExtension));

        assert!(result.is_err());
        assert!(app.canvas.image().is_none());
        assert!(app.selection.is_none());
    }
}
