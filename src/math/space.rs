use crate::math::arena::{VectorArena, VectorId};
use crate::math::error::VectorError;
use crate::math::number::Scalar;
use crate::math::plane::{orthogonalize, plane_basis, PlaneTest, Vector3};
use crate::math::vector::Vector;
use log::{debug, warn};
use std::collections::HashMap;

/// Ordered view over vectors owned by a [`VectorArena`]. Membership is by
/// handle, so the same vector may appear more than once.
#[derive(Clone, Debug)]
pub struct VectorSpace<'a, T, const U: usize> {
    arena: &'a VectorArena<T, U>,
    members: Vec<VectorId>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T> {
    pub min: [T; 2],
    pub max: [T; 2],
}

impl<T: Scalar> Bounds<T> {
    pub fn width(&self) -> T {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> T {
        self.max[1] - self.min[1]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// World to viewport mapping: `p * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform<T> {
    pub scale: T,
    pub offset: [T; 2],
}

impl<T: Scalar> ViewTransform<T> {
    pub fn apply(&self, p: &Vector<T, 2>) -> [T; 2] {
        [
            p[0] * self.scale + self.offset[0],
            p[1] * self.scale + self.offset[1],
        ]
    }
}

impl<'a, T: Scalar, const U: usize> VectorSpace<'a, T, U> {
    pub fn new(arena: &'a VectorArena<T, U>) -> Self {
        Self {
            arena,
            members: Vec::new(),
        }
    }

    /// Space over every vector currently in `arena`, in insertion order.
    pub fn all(arena: &'a VectorArena<T, U>) -> Self {
        Self {
            arena,
            members: arena.iter().map(|(id, _)| id).collect(),
        }
    }

    pub fn add(&mut self, id: VectorId) -> Result<(), VectorError> {
        if !self.arena.contains(id) {
            return Err(VectorError::UnknownVector(id));
        }
        self.members.push(id);
        Ok(())
    }

    /// Removes the first occurrence of `id`. Absent handles are ignored.
    pub fn remove(&mut self, id: VectorId) {
        if let Some(pos) = self.members.iter().position(|&m| m == id) {
            self.members.remove(pos);
        }
    }

    pub fn contains(&self, id: VectorId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids(&self) -> &[VectorId] {
        &self.members
    }

    pub fn arena(&self) -> &'a VectorArena<T, U> {
        self.arena
    }

    pub fn iter(&self) -> impl Iterator<Item = (VectorId, &'a Vector<T, U>)> + '_ {
        let arena = self.arena;
        self.members
            .iter()
            .filter_map(move |&id| arena.get(id).map(|v| (id, v)))
    }

    pub fn start_position(&self, id: VectorId) -> Result<Vector<T, U>, VectorError> {
        self.arena.start_position(id)
    }

    pub fn end_position(&self, id: VectorId) -> Result<Vector<T, U>, VectorError> {
        self.arena.end_position(id)
    }
}

impl<'a, T: Scalar> VectorSpace<'a, T, 2> {
    /// Bounding box of the chain end positions. `min` starts at the origin and
    /// `max` at `-T::max_value()`, so an empty space keeps both sentinels.
    pub fn find_bounds(&self) -> Result<Bounds<T>, VectorError> {
        let mut bounds = Bounds {
            min: [T::zero(); 2],
            max: [-T::max_value(); 2],
        };
        for &id in &self.members {
            let end = self.end_position(id)?;
            for axis in 0..2 {
                bounds.max[axis] = bounds.max[axis].max(end[axis]);
                bounds.min[axis] = bounds.min[axis].min(end[axis]);
            }
        }
        debug!("space bounds min {:?} max {:?}", bounds.min, bounds.max);
        Ok(bounds)
    }
}

/// Uniform scale fitting `bounds` into `viewport`, with the offset that moves
/// `bounds.min` to the viewport origin.
pub fn find_scale<T: Scalar>(
    viewport: Viewport,
    bounds: &Bounds<T>,
) -> Result<ViewTransform<T>, VectorError> {
    let (width, height) = (bounds.width(), bounds.height());
    if !(width > T::zero() && height > T::zero() && width.is_finite() && height.is_finite()) {
        return Err(VectorError::DegenerateBounds {
            width: width.as_f64(),
            height: height.as_f64(),
        });
    }
    let sx = T::lit(f64::from(viewport.width)) / width;
    let sy = T::lit(f64::from(viewport.height)) / height;
    let scale = sx.min(sy);
    Ok(ViewTransform {
        scale,
        offset: [-bounds.min[0] * scale, -bounds.min[1] * scale],
    })
}

impl<'a, T: Scalar> VectorSpace<'a, T, 3> {
    /// Re-expresses every member in a 2D basis of the plane with `normal`.
    ///
    /// The first axis follows `spanning`, or the first member when `None`,
    /// with its normal component removed.
    /// Projected vectors are written to `out` and returned as a new space in
    /// the same order. Either every member is in the plane or nothing is
    /// written. Chain links between members are re-pointed to the projected
    /// copies; links leaving the space are dropped.
    pub fn plane_as_vector_space<'b>(
        &self,
        normal: &Vector3<T>,
        spanning: Option<&Vector3<T>>,
        test: &PlaneTest,
        out: &'b mut VectorArena<T, 2>,
    ) -> Result<VectorSpace<'b, T, 2>, VectorError> {
        let axis = match spanning {
            Some(v) => *v,
            None => match self.members.first() {
                Some(&id) => *self.arena.try_get(id)?,
                None => return Ok(VectorSpace::new(out)),
            },
        };
        let normal = normal.value().try_normalized()?;
        let (b1, b2) = plane_basis(&orthogonalize(&axis, &normal), &normal);
        if b1.is_zero() || b2.is_zero() {
            return Err(VectorError::DegenerateBasis);
        }

        let mut projected = Vec::with_capacity(self.members.len());
        for (position, &id) in self.members.iter().enumerate() {
            let v = self.arena.try_get(id)?;
            let coords = v
                .plane_coordinates(&b1, &b2, &normal, test)
                .map_err(|err| match err {
                    VectorError::NotInPlane { offset, .. } => {
                        VectorError::NotInPlane {
                            position: Some(position),
                            offset,
                        }
                    }
                    other => other,
                })?;
            projected.push((id, coords));
        }

        let mut mapping: HashMap<VectorId, VectorId> = HashMap::new();
        let mut members = Vec::with_capacity(projected.len());
        for (id, coords) in &projected {
            let new_id = out.insert(*coords);
            mapping.entry(*id).or_insert(new_id);
            members.push(new_id);
        }
        for ((id, _), &new_id) in projected.iter().zip(members.iter()) {
            let Some(prev) = self.arena.get(*id).and_then(|v| v.previous()) else {
                continue;
            };
            match mapping.get(&prev) {
                Some(&mapped) => {
                    if let Some(v) = out.get_mut(new_id) {
                        v.set_previous(Some(mapped));
                    }
                }
                None => warn!("chain link {} -> {} leaves the space (dropped)", id, prev),
            }
        }
        debug!("projected {} vectors onto plane {:?}", members.len(), normal.data());

        let out: &'b VectorArena<T, 2> = out;
        Ok(VectorSpace {
            arena: out,
            members,
        })
    }
}
