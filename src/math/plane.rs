use crate::math::error::VectorError;
use crate::math::number::Scalar;
use crate::math::vector::Vector;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InPlaneMode {
    /// `dot(normal) <= epsilon`: everything on the negative side passes too.
    OneSided,
    /// `|dot(normal)| <= epsilon`.
    Symmetric,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneTest {
    pub epsilon: f64,
    pub mode: InPlaneMode,
}

impl PlaneTest {
    pub const fn one_sided(epsilon: f64) -> Self {
        Self {
            epsilon,
            mode: InPlaneMode::OneSided,
        }
    }

    pub const fn symmetric(epsilon: f64) -> Self {
        Self {
            epsilon,
            mode: InPlaneMode::Symmetric,
        }
    }

    pub fn accepts<T: Scalar>(&self, offset: T) -> bool {
        let epsilon = T::lit(self.epsilon);
        match self.mode {
            InPlaneMode::OneSided => offset <= epsilon,
            InPlaneMode::Symmetric => offset.abs() <= epsilon,
        }
    }
}

impl Default for PlaneTest {
    fn default() -> Self {
        crate::config::PLANE_TEST
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = *self.data();
        let [bx, by, bz] = *other.data();
        Self::from_data([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    pub fn is_in_plane(&self, normal: &Self, test: &PlaneTest) -> bool {
        test.accepts(self.dot(normal))
    }

    /// Scalar projections onto an orthonormal plane basis. Color carries over,
    /// the chain link does not (it points into a 3D arena).
    pub fn plane_coordinates(
        &self,
        b1: &Self,
        b2: &Self,
        normal: &Self,
        test: &PlaneTest,
    ) -> Result<Vector2<T>, VectorError> {
        if !self.is_in_plane(normal, test) {
            return Err(VectorError::NotInPlane {
                position: None,
                offset: self.dot(normal).as_f64(),
            });
        }
        Ok(Vector::with_color(
            [self.dot(b1), self.dot(b2)],
            self.color(),
        ))
    }
}

/// Unit normal of the plane spanned by `v1` and `v2`. Zero when they are
/// parallel or either one is zero.
pub fn plane_normal<T: Scalar>(v1: &Vector3<T>, v2: &Vector3<T>) -> Vector3<T> {
    v1.cross(v2).normalized()
}

pub fn plane_basis<T: Scalar>(v1: &Vector3<T>, normal: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let u = v1.value().normalized();
    let v = normal.value().cross(&u).normalized();
    (u, v)
}

/// `v` minus its component along the unit vector `normal`.
pub fn orthogonalize<T: Scalar>(v: &Vector3<T>, normal: &Vector3<T>) -> Vector3<T> {
    v.value() - normal.value() * v.dot(normal)
}

/// Plane through the origin with an orthonormal basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T> {
    pub normal: Vector3<T>,
    pub b1: Vector3<T>,
    pub b2: Vector3<T>,
}

impl<T: Scalar> Plane<T> {
    pub fn from_spanning(v1: &Vector3<T>, v2: &Vector3<T>) -> Result<Self, VectorError> {
        let normal = plane_normal(v1, v2);
        if normal.is_zero() {
            return Err(VectorError::DegenerateBasis);
        }
        Self::from_normal(v1, &normal)
    }

    /// The first axis follows `v1` with its normal component removed; `v1`
    /// must not be parallel to `normal`.
    pub fn from_normal(v1: &Vector3<T>, normal: &Vector3<T>) -> Result<Self, VectorError> {
        let normal = normal.value().try_normalized()?;
        let (b1, b2) = plane_basis(&orthogonalize(v1, &normal), &normal);
        if b1.is_zero() || b2.is_zero() {
            return Err(VectorError::DegenerateBasis);
        }
        Ok(Self { normal, b1, b2 })
    }

    pub fn coordinates(&self, p: &Vector3<T>, test: &PlaneTest) -> Result<Vector2<T>, VectorError> {
        p.plane_coordinates(&self.b1, &self.b2, &self.normal, test)
    }

    pub fn reconstruct(&self, coords: &Vector2<T>) -> Vector3<T> {
        self.b1 * coords[0] + self.b2 * coords[1]
    }

    /// Component of `p` lying in the plane.
    pub fn project(&self, p: &Vector3<T>) -> Vector3<T> {
        orthogonalize(p, &self.normal)
    }
}
