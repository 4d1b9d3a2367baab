use crate::color::Color;
use crate::config::RenderConfig;
use crate::math::error::VectorError;
use crate::math::number::Scalar;
use crate::math::space::{find_scale, VectorSpace, Viewport};
use crate::math::vector::Vector;
use canvas::{Canvas, Point};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

pub mod canvas;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Vector(#[from] VectorError),
    #[error("failed to encode diagram: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Draws every member of `space` as an arrow from its chain start to its chain
/// end, fitted into the canvas minus the configured margin. The bounds map onto
/// pixel indices, so `bounds.max` lands on the last row and column in use.
pub fn draw_space<T: Scalar>(
    canvas: &mut Canvas,
    space: &VectorSpace<'_, T, 2>,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let bounds = space.find_bounds()?;
    let viewport = Viewport {
        width: canvas.width().saturating_sub(2 * config.margin + 1),
        height: canvas.height().saturating_sub(2 * config.margin + 1),
    };
    let view = find_scale(viewport, &bounds)?;
    let margin = config.margin as f32;
    let to_pixel = |p: &Vector<T, 2>| {
        let [x, y] = view.apply(p);
        Point::from_data([x.as_f64() as f32 + margin, y.as_f64() as f32 + margin])
    };

    for (id, vector) in space.iter() {
        let start = to_pixel(&space.start_position(id)?);
        let end = to_pixel(&space.end_position(id)?);
        draw_arrow(canvas, &start, &end, vector.color(), config.arrow_size);
    }
    debug!("drew {} arrows at scale {}", space.len(), view.scale);
    Ok(())
}

fn draw_arrow(canvas: &mut Canvas, start: &Point, end: &Point, color: Color, size: f32) {
    canvas.draw_line(start, end, color);

    let direction = (*end - *start).normalized();
    if direction.is_zero() {
        warn!("zero length arrow at {:?} (head skipped)", end.data());
        return;
    }
    let base = Point::from_data([direction[1], -direction[0]]);
    let base_center = *end - direction * size;
    let left = base_center + base * (size / 2.0);
    let right = base_center - base * (size / 2.0);
    canvas.fill_triangle(end, &left, &right, color);
}

/// Renders `space` and writes it as `<output_dir>/<name>.png`.
pub fn save_space<T: Scalar>(
    space: &VectorSpace<'_, T, 2>,
    config: &RenderConfig,
    name: &str,
) -> Result<PathBuf, RenderError> {
    let mut canvas = Canvas::new(config.width, config.height, config.background);
    draw_space(&mut canvas, space, config)?;

    fs::create_dir_all(config.output_dir)?;
    let path = PathBuf::from(config.output_dir).join(format!("{name}.png"));
    canvas.save(&path)?;
    info!("diagram written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, GREEN, RED};
    use crate::math::arena::VectorArena;

    fn config(size: u32) -> RenderConfig {
        RenderConfig {
            width: size,
            height: size,
            margin: 0,
            arrow_size: 15.0,
            background: BLACK,
            output_dir: "./target/diagrams",
        }
    }

    #[test]
    fn arrow_spans_the_fitted_viewport() {
        let mut arena: VectorArena<f64, 2> = VectorArena::new();
        arena.insert(Vector::with_color([10.0, 10.0], RED));
        let space = VectorSpace::all(&arena);

        let config = config(50);
        let mut canvas = Canvas::new(config.width, config.height, config.background);
        draw_space(&mut canvas, &space, &config).unwrap();

        assert_eq!(*canvas.image().get_pixel(25, 24), RED);
        assert_eq!(*canvas.image().get_pixel(0, 49), RED);
        assert_eq!(*canvas.image().get_pixel(5, 5), BLACK);
    }

    #[test]
    fn tip_at_bounds_max_stays_on_canvas() {
        let mut arena: VectorArena<f64, 2> = VectorArena::new();
        arena.insert(Vector::with_color([10.0, 10.0], RED));
        let space = VectorSpace::all(&arena);

        let config = config(50);
        let mut canvas = Canvas::new(config.width, config.height, config.background);
        draw_space(&mut canvas, &space, &config).unwrap();

        // top-right pixel, plus the arrowhead just behind it
        assert_eq!(*canvas.image().get_pixel(49, 0), RED);
        assert_eq!(*canvas.image().get_pixel(45, 2), RED);
    }

    #[test]
    fn chained_arrow_starts_at_previous_end() {
        let mut arena: VectorArena<f32, 2> = VectorArena::new();
        let first = arena.insert(Vector::with_color([4.0, 0.0], RED));
        arena.insert(Vector::with_previous([0.0, 4.0], GREEN, Some(first)));
        let space = VectorSpace::all(&arena);

        let config = RenderConfig {
            margin: 1,
            ..config(42)
        };
        let mut canvas = Canvas::new(config.width, config.height, config.background);
        draw_space(&mut canvas, &space, &config).unwrap();

        // second arrow runs up the last column inside the margin, x = 40
        assert_eq!(*canvas.image().get_pixel(40, 21), GREEN);
        assert_eq!(*canvas.image().get_pixel(41, 21), BLACK);
        assert_eq!(*canvas.image().get_pixel(1, 21), BLACK);
    }

    #[test]
    fn empty_space_is_degenerate() {
        let arena: VectorArena<f64, 2> = VectorArena::new();
        let space = VectorSpace::all(&arena);
        let config = config(10);
        let mut canvas = Canvas::new(10, 10, BLACK);
        let err = draw_space(&mut canvas, &space, &config).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Vector(VectorError::DegenerateBounds { .. })
        ));
    }
}
