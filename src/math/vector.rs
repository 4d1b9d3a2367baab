use crate::color::{Color, WHITE};
use crate::math::arena::VectorId;
use crate::math::error::VectorError;
use crate::math::number::Scalar;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Fixed-dimension vector with display metadata.
///
/// `color` and `previous` are only read by the diagram code. They take no part
/// in equality, and `+`/`-` produce vectors without them.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const U: usize> {
    data: [T; U],
    color: Color,
    previous: Option<VectorId>,
}

impl<T, const U: usize> Vector<T, U>
where
    T: Scalar,
{
    pub fn new() -> Self {
        Self::from_data([T::zero(); U])
    }

    pub fn from_data(data: [T; U]) -> Self {
        Self::with_color(data, WHITE)
    }

    pub fn with_color(data: [T; U], color: Color) -> Self {
        Self::with_previous(data, color, None)
    }

    pub fn with_previous(data: [T; U], color: Color, previous: Option<VectorId>) -> Self {
        Self {
            data,
            color,
            previous,
        }
    }

    pub fn get(&self, index: usize) -> Result<T, VectorError> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimension: U,
            })
    }

    pub fn data(&self) -> &[T; U] {
        &self.data
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn previous(&self) -> Option<VectorId> {
        self.previous
    }

    pub fn set_previous(&mut self, previous: Option<VectorId>) {
        self.previous = previous;
    }

    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.map(|x| x * scalar),
            ..*self
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Euclidean length, summed over coordinates divided by the largest one so
    /// squares neither overflow nor underflow.
    pub fn magnitude(&self) -> T {
        let largest = self.largest_abs();
        if largest == T::zero() || !largest.is_finite() {
            return self.dot(self).sqrt();
        }
        let scaled = self.unit_scaled(largest);
        largest * scaled.dot(&scaled).sqrt()
    }

    /// Zero and non-finite vectors come back unchanged.
    pub fn normalized(&self) -> Self {
        self.try_normalized().unwrap_or(*self)
    }

    pub fn try_normalized(&self) -> Result<Self, VectorError> {
        let largest = self.largest_abs();
        if largest == T::zero() || !largest.is_finite() {
            return Err(VectorError::DegenerateBasis);
        }
        let scaled = self.unit_scaled(largest);
        let norm = scaled.dot(&scaled).sqrt();
        if !norm.is_finite() {
            return Err(VectorError::DegenerateBasis);
        }
        Ok(Self {
            data: scaled.data.map(|x| x / norm),
            ..*self
        })
    }

    fn largest_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }

    fn unit_scaled(&self, largest: T) -> Self {
        Self {
            data: self.data.map(|x| x / largest),
            ..*self
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == T::zero())
    }

    /// Coordinates only, metadata stripped.
    pub fn value(&self) -> Self {
        Self::from_data(self.data)
    }
}

impl<T: Scalar, const U: usize> Default for Vector<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const U: usize> From<[T; U]> for Vector<T, U> {
    fn from(data: [T; U]) -> Self {
        Self::from_data(data)
    }
}

impl<T: PartialEq, const U: usize> PartialEq for Vector<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Scalar, const U: usize> Index<usize> for Vector<T, U> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.data.get(index) {
            Some(x) => x,
            None => panic!("trying to access an invalid index: {} (dimension {})", index, U),
        }
    }
}

impl<T: Scalar, const U: usize> Add for Vector<T, U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_data(std::array::from_fn(|i| self.data[i] + rhs.data[i]))
    }
}

impl<T: Scalar, const U: usize> Sub for Vector<T, U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_data(std::array::from_fn(|i| self.data[i] - rhs.data[i]))
    }
}

impl<T: Scalar, const U: usize> Mul<T> for Vector<T, U> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const U: usize> Neg for Vector<T, U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};
    use approx::assert_relative_eq;

    fn v3(x: f64, y: f64, z: f64) -> Vector<f64, 3> {
        Vector::from_data([x, y, z])
    }

    #[test]
    fn default_is_zero_and_white() {
        let v: Vector<f32, 4> = Vector::new();
        assert!(v.is_zero());
        assert_eq!(v.color(), WHITE);
        assert_eq!(v.previous(), None);
    }

    #[test]
    fn index_access_checks_dimension() {
        let v = v3(1.0, 2.0, 3.0);
        assert_eq!(v.get(2), Ok(3.0));
        assert_eq!(v[0], 1.0);
        assert_eq!(
            v.get(3),
            Err(VectorError::IndexOutOfRange {
                index: 3,
                dimension: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "invalid index")]
    fn index_operator_panics_past_dimension() {
        let v: Vector<f64, 2> = Vector::from_data([1.0, 2.0]);
        let _ = v[2];
    }

    #[test]
    fn add_then_sub_round_trips() {
        let samples = [
            (v3(1.0, -2.0, 3.5), v3(0.25, 8.0, -1.0)),
            (v3(1e6, 1e-6, 0.0), v3(-3.0, 4.0, 5.0)),
            (v3(0.0, 0.0, 0.0), v3(7.0, 7.0, 7.0)),
        ];
        for (a, b) in samples {
            let back = (a + b) - b;
            for i in 0..3 {
                assert_relative_eq!(back[i], a[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn arithmetic_drops_metadata() {
        let a = Vector::with_previous([1.0f64, 2.0], RED, Some(VectorId::new(0)));
        let b = Vector::with_color([3.0, 4.0], RED);
        let sum = a + b;
        assert_eq!(sum, Vector::from_data([4.0, 6.0]));
        assert_eq!(sum.color(), WHITE);
        assert_eq!(sum.previous(), None);
        assert_eq!((a - b).previous(), None);
    }

    #[test]
    fn scale_keeps_metadata() {
        let a = Vector::with_previous([1.0f64, -2.0], RED, Some(VectorId::new(3)));
        let scaled = a * 2.0;
        assert_eq!(scaled, Vector::from_data([2.0, -4.0]));
        assert_eq!(scaled.color(), RED);
        assert_eq!(scaled.previous(), Some(VectorId::new(3)));
    }

    #[test]
    fn equality_ignores_metadata() {
        let plain = v3(1.0, 2.0, 3.0);
        let mut tinted = plain;
        tinted.set_color(RED);
        tinted.set_previous(Some(VectorId::new(1)));
        assert_eq!(plain, tinted);
        assert_ne!(plain, v3(1.0, 2.0, 3.0 + 1e-12));
    }

    #[test]
    fn dot_and_magnitude() {
        let a = v3(1.0, 2.0, 2.0);
        assert_eq!(a.dot(&v3(2.0, 0.0, -1.0)), 0.0);
        assert_eq!(a.magnitude(), 3.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in [v3(3.0, 4.0, 0.0), v3(-1e-3, 2e-3, 5e-4), v3(1e5, -1e5, 1.0)] {
            assert_relative_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-12);
        }
        let flat: Vector<f32, 2> = Vector::from_data([3.0, 4.0]);
        assert_relative_eq!(flat.normalized()[0], 0.6, epsilon = 1e-6);
    }

    #[test]
    fn extreme_magnitudes_normalize_to_unit_length() {
        let huge: Vector<f32, 3> = Vector::from_data([1e20, 0.0, 0.0]);
        let tiny: Vector<f32, 3> = Vector::from_data([1e-25, 0.0, 0.0]);
        assert_relative_eq!(huge.magnitude(), 1e20, max_relative = 1e-6);
        assert_relative_eq!(tiny.magnitude(), 1e-25, max_relative = 1e-6);
        for v in [huge, tiny, Vector::from_data([3e30, -4e30, 0.0])] {
            let unit = v.normalized();
            assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(v.try_normalized().unwrap().magnitude(), 1.0, epsilon = 1e-6);
        }
        assert_eq!(huge.normalized(), Vector::from_data([1.0, 0.0, 0.0]));
    }

    #[test]
    fn normalizing_keeps_metadata() {
        let v = Vector::with_previous([0.0f64, -5.0], RED, Some(VectorId::new(2)));
        let unit = v.normalized();
        assert_eq!(unit, Vector::from_data([0.0, -1.0]));
        assert_eq!(unit.color(), RED);
        assert_eq!(unit.previous(), Some(VectorId::new(2)));
    }

    #[test]
    fn normalizing_zero_is_passthrough() {
        let zero: Vector<f64, 5> = Vector::new();
        assert_eq!(zero.normalized(), zero);
        assert_eq!(zero.try_normalized(), Err(VectorError::DegenerateBasis));
    }

    #[test]
    fn is_zero_has_no_tolerance() {
        assert!(v3(0.0, -0.0, 0.0).is_zero());
        assert!(!v3(0.0, 1e-300, 0.0).is_zero());
    }
}
