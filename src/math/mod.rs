pub mod arena;
pub mod error;
pub mod number;
pub mod plane;
pub mod space;
pub mod vector;

pub use arena::{VectorArena, VectorId};
pub use error::VectorError;
pub use number::Scalar;
pub use plane::{
    orthogonalize, plane_basis, plane_normal, InPlaneMode, Plane, PlaneTest, Vector2, Vector3,
};
pub use space::{find_scale, Bounds, VectorSpace, ViewTransform, Viewport};
pub use vector::Vector;
