use crate::color::{CYAN, MAGENTA, YELLOW};
use crate::config::{RenderConfig, PLANE_TEST};
use crate::math::{plane_normal, Scalar, Vector, VectorArena, VectorError, VectorId, VectorSpace};
use crate::render::{save_space, RenderError};
use log::info;
use std::path::PathBuf;

const TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideKind {
    Equilateral,
    Isosceles,
    Scalene,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleKind {
    Acute,
    Right,
    Obtuse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleClass {
    pub sides: SideKind,
    pub angles: AngleKind,
}

/// Classifies the triangle `pqr` by side lengths and by its largest angle.
/// Returns `None` for collinear or coincident points.
pub fn classify<T: Scalar, const U: usize>(
    p: &Vector<T, U>,
    q: &Vector<T, U>,
    r: &Vector<T, U>,
) -> Option<TriangleClass> {
    let mut sq = [
        (*q - *p).dot(&(*q - *p)).as_f64(),
        (*r - *q).dot(&(*r - *q)).as_f64(),
        (*p - *r).dot(&(*p - *r)).as_f64(),
    ];
    sq.sort_by(f64::total_cmp);
    let [a, b, c] = sq;
    let tol = TOLERANCE * c.max(1.0);

    // 16 * area^2
    let area = 4.0 * a * b - (a + b - c).powi(2);
    if a <= tol || area <= TOLERANCE * c * c {
        return None;
    }

    let sides = if (c - a).abs() <= tol {
        SideKind::Equilateral
    } else if (b - a).abs() <= tol || (c - b).abs() <= tol {
        SideKind::Isosceles
    } else {
        SideKind::Scalene
    };
    let angles = match c - (a + b) {
        d if d.abs() <= tol => AngleKind::Right,
        d if d < 0.0 => AngleKind::Acute,
        _ => AngleKind::Obtuse,
    };
    Some(TriangleClass { sides, angles })
}

/// Triangle ABC with its edge vectors projected onto the triangle's own plane.
pub struct TriangleProjection {
    pub edges: VectorArena<f64, 3>,
    pub flat: VectorArena<f64, 2>,
    /// Projected BC, BA and CA, in that order. CA is chained after BC.
    pub ids: [VectorId; 3],
}

pub const POINT_A: [f64; 3] = [2.0, -3.0, 0.0];
pub const POINT_B: [f64; 3] = [3.0, 0.0, 4.0];
pub const POINT_C: [f64; 3] = [3.0, 2.0, 0.0];

pub fn project_triangle(
    a: [f64; 3],
    b: [f64; 3],
    c: [f64; 3],
) -> Result<TriangleProjection, VectorError> {
    let (a, b, c) = (Vector::from_data(a), Vector::from_data(b), Vector::from_data(c));
    let mut edges = VectorArena::with_capacity(3);
    let bc = edges.insert(Vector::with_color(*(c - b).data(), YELLOW));
    let ba = edges.insert(Vector::with_color(*(a - b).data(), CYAN));
    let ca = edges.insert(Vector::with_previous(*(a - c).data(), MAGENTA, Some(bc)));

    let normal = plane_normal(edges.try_get(bc)?, edges.try_get(ca)?);
    if normal.is_zero() {
        return Err(VectorError::DegenerateBasis);
    }

    let mut flat = VectorArena::with_capacity(3);
    let mut space = VectorSpace::new(&edges);
    for id in [bc, ba, ca] {
        space.add(id)?;
    }
    let projected = space.plane_as_vector_space(
        &normal,
        Some(edges.try_get(bc)?),
        &PLANE_TEST,
        &mut flat,
    )?;
    let ids: [VectorId; 3] = std::array::from_fn(|i| projected.ids()[i]);
    Ok(TriangleProjection { edges, flat, ids })
}

pub fn triangle_demo(config: &RenderConfig) -> Result<PathBuf, RenderError> {
    let projection = project_triangle(POINT_A, POINT_B, POINT_C)?;
    let [bc, ba, _] = projection.ids;

    let origin = Vector::<f64, 2>::new();
    let c_flat = *projection.flat.try_get(bc)?;
    let a_flat = *projection.flat.try_get(ba)?;
    match classify(&a_flat, &origin, &c_flat) {
        Some(class) => info!("triangle ABC is {:?} and {:?}", class.sides, class.angles),
        None => info!("triangle ABC is degenerate"),
    }
    for (id, v) in projection.flat.iter() {
        info!("{} plane coordinates {:?}", id, v.data());
    }

    let space = VectorSpace::all(&projection.flat);
    save_space(&space, config, "triangle")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p2(x: f64, y: f64) -> Vector<f64, 2> {
        Vector::from_data([x, y])
    }

    #[test]
    fn classifies_by_sides_and_angles() {
        let right = classify(&p2(0.0, 0.0), &p2(3.0, 0.0), &p2(0.0, 4.0)).unwrap();
        assert_eq!(right.sides, SideKind::Scalene);
        assert_eq!(right.angles, AngleKind::Right);

        let h = 3f64.sqrt() / 2.0;
        let equilateral = classify(&p2(0.0, 0.0), &p2(1.0, 0.0), &p2(0.5, h)).unwrap();
        assert_eq!(equilateral.sides, SideKind::Equilateral);
        assert_eq!(equilateral.angles, AngleKind::Acute);

        let obtuse = classify(&p2(0.0, 0.0), &p2(4.0, 0.0), &p2(2.0, 0.5)).unwrap();
        assert_eq!(obtuse.sides, SideKind::Isosceles);
        assert_eq!(obtuse.angles, AngleKind::Obtuse);
    }

    #[test]
    fn collinear_points_have_no_class() {
        assert_eq!(classify(&p2(0.0, 0.0), &p2(1.0, 1.0), &p2(3.0, 3.0)), None);
        assert_eq!(classify(&p2(1.0, 1.0), &p2(1.0, 1.0), &p2(2.0, 0.0)), None);
    }

    #[test]
    fn abc_is_acute_isosceles() {
        let (a, b, c) = (
            Vector::from_data(POINT_A),
            Vector::from_data(POINT_B),
            Vector::from_data(POINT_C),
        );
        let class = classify(&a, &b, &c).unwrap();
        assert_eq!(class.sides, SideKind::Isosceles);
        assert_eq!(class.angles, AngleKind::Acute);
    }
}
