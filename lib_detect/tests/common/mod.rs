#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

pub const CANVAS: (u32, u32) = (800, 600);

/// Six-column rows in the same layout as the shipped table.
pub const BASIC_TABLE: &str = "\
black,Black,#000000,0,0,0
white,White,#FFFFFF,255,255,255
red,Red,#FF0000,255,0,0
maroon,Maroon,#800000,128,0,0
lime,Lime,#00FF00,0,255,0
blue,Blue,#0000FF,0,0,255
navy,Navy,#000080,0,0,128
";

/// 20x10 PNG: left half red, right half navy.
pub fn two_tone_png() -> Vec<u8> {
    let image = RgbImage::from_fn(20, 10, |x, _| {
        if x < 10 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 128])
        }
    });

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
