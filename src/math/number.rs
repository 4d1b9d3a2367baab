use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};

pub trait Scalar: Float + FromPrimitive + Debug + Display + Default + 'static {
    /// Lossy conversion of an `f64` constant into this scalar type.
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {}

impl Scalar for f64 {}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn lit_converts_between_widths() {
        assert_eq!(<f32 as Scalar>::lit(0.5), 0.5f32);
        assert_eq!(<f64 as Scalar>::lit(-2.25), -2.25f64);
        assert_eq!(Scalar::as_f64(1.5f32), 1.5f64);
    }
}
