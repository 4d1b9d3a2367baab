use crate::math::error::VectorError;
use crate::math::number::Scalar;
use crate::math::vector::Vector;
use log::debug;
use std::fmt;

/// Handle to a vector owned by a [`VectorArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorId(usize);

impl VectorId {
    pub const fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub fn idx(self) -> usize {
        self.0
    }
}

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every vector of a scene. Vectors are never removed, so handles stay
/// valid as long as the arena lives.
#[derive(Clone, Debug, Default)]
pub struct VectorArena<T, const U: usize> {
    vectors: Vec<Vector<T, U>>,
}

impl<T: Scalar, const U: usize> VectorArena<T, U> {
    pub fn new() -> Self {
        Self {
            vectors: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vectors: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, vector: Vector<T, U>) -> VectorId {
        let id = VectorId(self.vectors.len());
        debug!("arena insert {} {:?}", id, vector.data());
        self.vectors.push(vector);
        id
    }

    pub fn get(&self, id: VectorId) -> Option<&Vector<T, U>> {
        self.vectors.get(id.0)
    }

    pub fn get_mut(&mut self, id: VectorId) -> Option<&mut Vector<T, U>> {
        self.vectors.get_mut(id.0)
    }

    pub fn try_get(&self, id: VectorId) -> Result<&Vector<T, U>, VectorError> {
        self.get(id).ok_or(VectorError::UnknownVector(id))
    }

    pub fn contains(&self, id: VectorId) -> bool {
        id.0 < self.vectors.len()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VectorId, &Vector<T, U>)> {
        self.vectors
            .iter()
            .enumerate()
            .map(|(idx, v)| (VectorId(idx), v))
    }

    /// End position of `previous`, or the origin when the vector starts a chain.
    pub fn start_position(&self, id: VectorId) -> Result<Vector<T, U>, VectorError> {
        let mut start = Vector::new();
        let mut link = self.try_get(id)?.previous();
        let mut steps = 0;
        while let Some(prev_id) = link {
            steps += 1;
            if steps > self.vectors.len() {
                return Err(VectorError::ChainCycle(id));
            }
            let prev = self.try_get(prev_id)?;
            start = start + prev.value();
            link = prev.previous();
        }
        Ok(start)
    }

    pub fn end_position(&self, id: VectorId) -> Result<Vector<T, U>, VectorError> {
        Ok(self.start_position(id)? + self.try_get(id)?.value())
    }
}
