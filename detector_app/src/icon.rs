use std::f32::consts::TAU;

use eframe::egui::ecolor::Hsva;
use eframe::egui::IconData;

const ICON_SIZE: u32 = 64;

/// Hue around the circle, saturation from the center out, transparent
/// outside the disc.
pub fn color_wheel() -> IconData {
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = dx.hypot(dy);
            if distance > radius {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }

            let hue = (dy.atan2(dx) / TAU).rem_euclid(1.0);
            let color = Hsva::new(hue, distance / radius, 1.0, 1.0);
            rgba.extend_from_slice(&color.to_srgba_unmultiplied());
        }
    }

    IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}
