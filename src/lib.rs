//! Easetab is a table of the standard easing curves from
//! [easings.net](https://easings.net).
//!
//! An easing curve maps normalized progress `t` in `[0, 1]` to an eased
//! value, usually starting at zero and ending at one. Some curves overshoot
//! that range on the way (`Back`, `Elastic`), others bounce (`Bounce`).
//!
//! Curves are selected with the [`Ease`](enum.Ease.html) enum. Each variant
//! has a stable ordinal, so it can be persisted, and is bound to its formula
//! by name, so reordering the enum can never mix formulas up.
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use easetab::{Ease, RoundingMode};
//!
//! // Curves can be evaluated with `f32` or `f64`
//! assert_approx_eq!(Ease::OutBounce.eval(0.2f32), 0.3025, 1e-3);
//! assert_approx_eq!(Ease::InElastic.eval(0.5f64), -0.015625);
//!
//! // ... or with integer time, rounding the result
//! assert_eq!(Ease::OutBack.eval_int(1, RoundingMode::Round), 1);
//!
//! // Curves can be turned into animations and transformed
//! let x = Ease::InOutSine.anim::<f32>().scale_min_max(-10.0, 10.0);
//! assert_approx_eq!(x.eval(0.5), 0.0);
//! ```
//!
//! The [`preview`](preview/index.html) module turns a curve into the lines
//! of a small foldable preview widget, ready for any renderer to draw.

mod anim;
mod ease;
mod error;
mod functions;
pub mod preview;
mod rounding;
mod scalar;

pub use anim::{Anim, AnimBox, Fun};
pub use ease::{evaluate, evaluate_int, Ease, Family, Kind};
pub use error::EaseError;
pub use rounding::RoundingMode;
pub use scalar::Scalar;

/// Turn any function `Fn(T) -> V` into an [`Anim`](struct.Anim.html).
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easetab::Ease;
///
/// // Half way between two curves.
/// let anim = easetab::fun(|t: f32| (Ease::InCubic.eval(t) + Ease::OutCubic.eval(t)) / 2.0);
///
/// assert_approx_eq!(anim.eval(0.5), 0.5);
/// ```
pub fn fun<T, V>(f: impl Fn(T) -> V) -> Anim<impl Fun<T = T, V = V>> {
    From::from(f)
}

/// An animation that returns time as its value.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let anim = easetab::id::<f32, f32>();
///
/// assert_approx_eq!(anim.eval(0.25), 0.25);
/// assert_approx_eq!(anim.eval(-3.0), -3.0);
/// ```
pub fn id<T, V>() -> Anim<impl Fun<T = T, V = V>>
where
    V: From<T>,
{
    fun(From::from)
}
