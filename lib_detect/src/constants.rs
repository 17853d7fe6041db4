pub const APP_NAME: &str = "Color Detector";
pub const LOG_FILE: &str = "log.txt";

/// Palette table looked up in the working directory before falling back to
/// the embedded copy.
pub const PALETTE_FILE: &str = "colors.csv";

pub const IMAGE_FILTER_NAME: &str = "Image files";
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
pub const INFO_BAR_HEIGHT: f32 = 50.0;
/// Padding between the window edge and the canvas on every side.
pub const FRAME_MARGIN: f32 = 20.0;
pub const WINDOW_SIZE: [f32; 2] = [CANVAS_WIDTH as f32 + 2.0 * FRAME_MARGIN, 785.0];

/// Channel sums below this get light overlay text.
pub const LIGHT_TEXT_THRESHOLD: u16 = 500;

pub const CANVAS_IDLE_BG: [u8; 3] = [0x00, 0x66, 0x99];
pub const CANVAS_LOADED_BG: [u8; 3] = [0x2c, 0x2c, 0x2c];
pub const INFO_BAR_BG: [u8; 3] = [0x2c, 0x2c, 0x2c];
