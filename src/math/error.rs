use crate::math::arena::VectorId;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum VectorError {
    #[error("trying to access an invalid index: {index} (dimension {dimension})")]
    IndexOutOfRange { index: usize, dimension: usize },
    /// `offset` is the signed distance along the plane normal. `position` is
    /// the member index when a whole space was being projected.
    #[error("vector is not in the plane (position {position:?}, normal offset {offset})")]
    NotInPlane {
        position: Option<usize>,
        offset: f64,
    },
    #[error("bounds have no extent (width {width}, height {height})")]
    DegenerateBounds { width: f64, height: f64 },
    #[error("basis vector has zero magnitude")]
    DegenerateBasis,
    #[error("vector {0} does not belong to this arena")]
    UnknownVector(VectorId),
    #[error("previous chain of vector {0} loops back on itself")]
    ChainCycle(VectorId),
}
