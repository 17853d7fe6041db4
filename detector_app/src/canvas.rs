use eframe::egui::{self, Color32, CursorIcon, InnerResponse, Pos2, Rect, Sense, TextureHandle, Vec2};
use lib_detect::constants::{CANVAS_HEIGHT, CANVAS_IDLE_BG, CANVAS_LOADED_BG, CANVAS_WIDTH};
use lib_detect::{DisplayGeometry, LoadedImage, Rgb};
use log::debug;

const IDLE_MESSAGE: &str = "Upload your image";

struct Shown {
    image: LoadedImage,
    texture: TextureHandle,
}

/// Fixed-size drawing area holding at most one image.
#[derive(Default)]
pub struct Canvas {
    shown: Option<Shown>,
}

pub fn size() -> Vec2 {
    Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
}

pub fn screen_to_canvas(canvas_rect: Rect, pos: Pos2) -> Vec2 {
    pos - canvas_rect.min
}

pub fn image_rect(canvas_rect: Rect, geometry: DisplayGeometry) -> Rect {
    let min = canvas_rect.min + Vec2::new(geometry.offset_x as f32, geometry.offset_y as f32);
    Rect::from_min_size(
        min,
        Vec2::new(geometry.width as f32, geometry.height as f32),
    )
}

fn fill(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl Canvas {
    pub fn new() -> Self {
        Self { shown: None }
    }

    /// Swaps in a new image and its texture in one step.
    pub fn load_image(&mut self, image: LoadedImage, ctx: &egui::Context) {
        let pixels = image.pixels();
        let color_image = egui::ColorImage::from_rgb(
            [pixels.width() as usize, pixels.height() as usize],
            pixels.as_raw(),
        );
        let texture = ctx.load_texture("canvas_image", color_image, egui::TextureOptions::LINEAR);
        debug!("Uploaded {:?} texture", texture.size());

        self.shown = Some(Shown { image, texture });
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.shown.as_ref().map(|shown| &shown.image)
    }

    /// Paints the canvas. The inner value is the color under a primary
    /// click, if the click landed on the image.
    pub fn show(&self, ui: &mut egui::Ui) -> InnerResponse<Option<Rgb>> {
        let (canvas_rect, response) = ui.allocate_exact_size(size(), Sense::click());
        let painter = ui.painter_at(canvas_rect);

        let Some(shown) = &self.shown else {
            painter.rect_filled(canvas_rect, 0.0, fill(CANVAS_IDLE_BG));
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                IDLE_MESSAGE,
                egui::FontId::proportional(24.0),
                Color32::WHITE,
            );
            return InnerResponse::new(None, response);
        };

        let geometry = shown.image.geometry();
        painter.rect_filled(canvas_rect, 0.0, fill(CANVAS_LOADED_BG));
        painter.image(
            shown.texture.id(),
            image_rect(canvas_rect, geometry),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        if let Some(hover) = response.hover_pos() {
            let local = screen_to_canvas(canvas_rect, hover);
            if geometry.contains(local.x, local.y) {
                ui.ctx().set_cursor_icon(CursorIcon::Crosshair);
            }
        }

        let picked = response
            .clicked()
            .then(|| response.interact_pointer_pos())
            .flatten()
            .and_then(|pos| {
                let local = screen_to_canvas(canvas_rect, pos);
                shown.image.sample(local.x, local.y)
            });
        InnerResponse::new(picked, response)
    }
}
