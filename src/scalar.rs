use num_traits::{Float, FloatConst};

/// Floating point types that easing curves can be evaluated with.
///
/// This is implemented for `f32` and `f64`. The only thing it adds on top of
/// `num_traits::Float` is an infallible way to turn the curve constants into
/// `Self`.
pub trait Scalar: Float + FloatConst {
    /// Convert a constant into `Self`, rounding to the nearest representable
    /// value.
    fn lit(x: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn lit(x: f64) -> Self {
        x as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(x: f64) -> Self {
        x
    }
}
