/// Placement of the resized image inside the fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub offset_x: u32,
    pub offset_y: u32,
    pub width: u32,
    pub height: u32,
}

impl DisplayGeometry {
    /// Centers an image of `size` in a canvas of `canvas`. An image larger
    /// than the canvas on one axis is pinned to offset 0 on that axis.
    pub fn centered(size: (u32, u32), canvas: (u32, u32)) -> Self {
        Self {
            offset_x: canvas.0.saturating_sub(size.0) / 2,
            offset_y: canvas.1.saturating_sub(size.1) / 2,
            width: size.0,
            height: size.1,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.to_image(x, y).is_some()
    }

    /// Canvas position to pixel coordinates in the resized image, or `None`
    /// when the position falls outside it.
    pub fn to_image(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (x, y) = (x.floor(), y.floor());
        let left = self.offset_x as f32;
        let top = self.offset_y as f32;

        let inside = left <= x
            && x < left + self.width as f32
            && top <= y
            && y < top + self.height as f32;
        if !inside {
            return None;
        }

        Some(((x - left) as u32, (y - top) as u32))
    }
}
