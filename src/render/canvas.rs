use crate::color::Color;
use crate::math::vector::Vector;
use image::{ImageError, RgbaImage};
use std::path::Path;

pub type Point = Vector<f32, 2>;

/// Row index for a y-up coordinate.
pub fn flip_y(y: f32, height: u32) -> f32 {
    (height as f32 - 1.0) - y
}

/// Raster target with the origin in the bottom-left corner.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn plot(&mut self, x: f32, y: f32, color: Color) {
        let col = x.round();
        let row = flip_y(y, self.height()).round();
        if col < 0.0 || row < 0.0 || col >= self.width() as f32 || row >= self.height() as f32 {
            return;
        }
        self.image.put_pixel(col as u32, row as u32, color);
    }

    pub fn draw_line(&mut self, start: &Point, end: &Point, color: Color) {
        let delta = *end - *start;
        let steps = delta[0].abs().max(delta[1].abs()).ceil().max(1.0);
        let step = delta.scale(steps.recip());
        for i in 0..=steps as u32 {
            let p = *start + step.scale(i as f32);
            self.plot(p[0], p[1], color);
        }
    }

    pub fn fill_triangle(&mut self, a: &Point, b: &Point, c: &Point, color: Color) {
        let min_x = a[0].min(b[0]).min(c[0]).floor().max(0.0);
        let max_x = a[0].max(b[0]).max(c[0]).ceil().min(self.width() as f32 - 1.0);
        let min_y = a[1].min(b[1]).min(c[1]).floor().max(0.0);
        let max_y = a[1].max(b[1]).max(c[1]).ceil().min(self.height() as f32 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let area = edge(a, b, c);
        if area == 0.0 {
            self.draw_line(a, b, color);
            self.draw_line(b, c, color);
            return;
        }
        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let p = Point::from_data([x as f32, y as f32]);
                let w0 = edge(b, c, &p) / area;
                let w1 = edge(c, a, &p) / area;
                let w2 = edge(a, b, &p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.plot(p[0], p[1], color);
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save(&self, path: &Path) -> Result<(), ImageError> {
        self.image.save(path)
    }
}

fn edge(a: &Point, b: &Point, p: &Point) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}
