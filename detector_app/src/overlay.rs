use eframe::egui::{self, Color32, Pos2, Rect, Vec2};
use lib_detect::constants::{INFO_BAR_BG, INFO_BAR_HEIGHT};
use lib_detect::{ColorMatch, TextTone};

const PADDING: f32 = 20.0;
const TOP_MARGIN: f32 = 10.0;
const FONT_SIZE: f32 = 14.0;

pub fn tone_color(tone: TextTone) -> Color32 {
    match tone {
        TextTone::Light => Color32::WHITE,
        TextTone::Dark => Color32::BLACK,
    }
}

/// Swatch hugging the label, centered horizontally in the bar.
pub fn swatch_rect(bar: Rect, text_size: Vec2) -> Rect {
    let size = text_size + Vec2::splat(PADDING);
    let min = Pos2::new(
        bar.center().x - size.x / 2.0,
        bar.min.y + TOP_MARGIN,
    );
    Rect::from_min_size(min, size)
}

/// Info bar under the canvas: empty until something has been matched.
pub fn show(ui: &mut egui::Ui, selection: Option<&ColorMatch>) {
    let width = ui.available_width();
    let (bar, _) = ui.allocate_exact_size(Vec2::new(width, INFO_BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(bar);
    painter.rect_filled(bar, 0.0, Color32::from_rgb(INFO_BAR_BG[0], INFO_BAR_BG[1], INFO_BAR_BG[2]));

    let Some(selection) = selection else {
        return;
    };

    let rgb = selection.rgb;
    let text_color = tone_color(rgb.text_tone());
    let galley = painter.layout_no_wrap(
        selection.label(),
        egui::FontId::proportional(FONT_SIZE),
        text_color,
    );

    let swatch = swatch_rect(bar, galley.size());
    painter.rect_filled(swatch, 0.0, Color32::from_rgb(rgb.r, rgb.g, rgb.b));
    painter.galley(swatch.center() - galley.size() / 2.0, galley, text_color);
}
