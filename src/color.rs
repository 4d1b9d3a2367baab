use image::Rgba;

pub type Color = Rgba<u8>;

pub const BLACK: Color = Rgba([0, 0, 0, 255]);
pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const RED: Color = Rgba([255, 0, 0, 255]);
pub const GREEN: Color = Rgba([0, 255, 0, 255]);
pub const BLUE: Color = Rgba([0, 0, 255, 255]);
pub const YELLOW: Color = Rgba([255, 255, 0, 255]);
pub const MAGENTA: Color = Rgba([255, 0, 255, 255]);
pub const CYAN: Color = Rgba([0, 255, 255, 255]);
