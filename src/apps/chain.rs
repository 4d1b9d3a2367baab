use crate::color::{BLUE, RED, WHITE, YELLOW};
use crate::config::RenderConfig;
use crate::math::{Vector, VectorArena, VectorError, VectorSpace};
use crate::render::{save_space, RenderError};
use log::info;
use std::path::PathBuf;

/// Five arrows: two chained pieces, their sum, a third piece chained onto the
/// sum, and the grand total.
pub fn chain_scene() -> Result<VectorArena<f32, 2>, VectorError> {
    let mut arena = VectorArena::with_capacity(5);

    let vec1 = arena.insert(Vector::with_color([3.0, 5.0], RED));
    let vec2 = arena.insert(Vector::with_previous([1.0, 0.0], YELLOW, Some(vec1)));

    let mut sum = *arena.try_get(vec1)? + *arena.try_get(vec2)?;
    sum.set_color(BLUE);
    let vec3 = arena.insert(sum);

    let mut vec4 = Vector::with_color([1.0, 2.5], RED);
    vec4.set_previous(Some(vec3));
    let vec4 = arena.insert(vec4);

    let mut total = *arena.try_get(vec3)? + *arena.try_get(vec4)?;
    total.set_color(WHITE);
    arena.insert(total);

    Ok(arena)
}

pub fn chain_demo(config: &RenderConfig) -> Result<PathBuf, RenderError> {
    let arena = chain_scene()?;
    let space = VectorSpace::all(&arena);
    for (id, v) in space.iter() {
        info!("{} {:?} ends at {:?}", id, v.data(), space.end_position(id)?.data());
    }
    save_space(&space, config, "chain")
}
