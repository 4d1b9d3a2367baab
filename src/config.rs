use crate::color::{Color, BLACK};
use crate::math::plane::PlaneTest;

pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border kept around the fitted diagram, in pixels.
    pub margin: u32,
    pub arrow_size: f32,
    pub background: Color,
    pub output_dir: &'static str,
}

pub const RENDER_CONFIG: RenderConfig = RenderConfig {
    width: 800,
    height: 600,
    margin: 20,
    arrow_size: 15.0,
    background: BLACK,
    output_dir: "./assets",
};

pub const PLANE_TEST: PlaneTest = PlaneTest::one_sided(1e-5);
