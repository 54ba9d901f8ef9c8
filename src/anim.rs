use std::marker::PhantomData;
use std::ops::Deref;

use num_traits::Num;

use crate::{fun, Ease, Scalar};

/// Anything that maps some input `T` to an output `V`.
///
/// `T` is usually normalized time and `V` a value that depends on it, e.g. the
/// eased progress of a curve or a pixel coordinate derived from it.
///
/// A named trait, rather than `Fn(T) -> V`, lets [`Anim`](struct.Anim.html)
/// name the types produced by its combinators on stable Rust.
pub trait Fun {
    /// The function's input type. Usually time.
    type T;

    /// The function's output type.
    type V;

    /// Evaluate the function at time `t`.
    fn eval(&self, t: Self::T) -> Self::V;
}

impl<F> Fun for &F
where
    F: Fun,
{
    type T = F::T;
    type V = F::V;

    fn eval(&self, t: Self::T) -> Self::V {
        (*self).eval(t)
    }
}

impl<T, V> Fun for Box<dyn Fun<T = T, V = V>> {
    type T = T;
    type V = V;

    fn eval(&self, t: Self::T) -> Self::V {
        self.deref().eval(t)
    }
}

/// A function of time, wrapped so that it can be transformed and combined
/// without passing time around by hand.
///
/// Time is only supplied once, when calling [`eval`](#method.eval).
#[derive(Clone, Debug)]
pub struct Anim<F>(pub F);

pub type AnimBox<T, V> = Anim<Box<dyn Fun<T = T, V = V>>>;

impl<F> Anim<F>
where
    F: Fun,
{
    /// Evaluate the animation at time `t`.
    pub fn eval(&self, t: F::T) -> F::V {
        self.0.eval(t)
    }

    /// Apply a function to the values of the animation.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// // Mirror OutSine vertically.
    /// let anim = easetab::Ease::OutSine.anim::<f32>().map(|v| 1.0 - v);
    ///
    /// assert_approx_eq!(anim.eval(0.0), 1.0);
    /// assert_approx_eq!(anim.eval(1.0), 0.0);
    /// ```
    pub fn map<W>(self, f: impl Fn(F::V) -> W) -> Anim<impl Fun<T = F::T, V = W>> {
        self.map_anim(fun(f))
    }

    /// Transform time with the given function before evaluating the animation.
    pub fn map_time<S>(self, f: impl Fn(S) -> F::T) -> Anim<impl Fun<T = S, V = F::V>> {
        fun(f).map_anim(self)
    }

    /// Feed the values of `self` into `anim`.
    pub fn map_anim<W, G, A>(self, anim: A) -> Anim<impl Fun<T = F::T, V = W>>
    where
        G: Fun<T = F::V, V = W>,
        A: Into<Anim<G>>,
    {
        // Stacking closures here blows up compile times for deep chains, so
        // the composition gets a named type instead.
        Anim(MapClosure(self.0, anim.into().0))
    }

    /// Converts from `Anim<F>` to `Anim<&F>`.
    pub fn as_ref(&self) -> Anim<&F> {
        Anim(&self.0)
    }
}

impl<F> Anim<F>
where
    F: Fun + 'static,
{
    /// Erase the type of the animation.
    pub fn into_box(self) -> AnimBox<F::T, F::V> {
        Anim(Box::new(self.0))
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Copy,
{
    /// Evaluate two animations at the same time, yielding pairs of values.
    pub fn zip<G, A>(self, other: A) -> Anim<impl Fun<T = F::T, V = (F::V, G::V)>>
    where
        G: Fun<T = F::T>,
        A: Into<Anim<G>>,
    {
        Anim(ZipClosure(self.0, other.into().0))
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::V: Copy + Num,
{
    /// Given values in `[0 .. 1]`, transform them to be in `[min .. max]`.
    ///
    /// `min` may be larger than `max`, which flips the animation, as needed
    /// for screen coordinates growing downwards.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// let anim = easetab::id::<f32, f32>().scale_min_max(100.0, 40.0);
    ///
    /// assert_approx_eq!(anim.eval(0.0), 100.0);
    /// assert_approx_eq!(anim.eval(0.5), 70.0);
    /// assert_approx_eq!(anim.eval(1.0), 40.0);
    /// ```
    pub fn scale_min_max(self, min: F::V, max: F::V) -> Anim<impl Fun<T = F::T, V = F::V>> {
        self.map(move |v| v * (max - min) + min)
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Scalar,
{
    /// Play the animation along an easing curve: time is eased by `curve`
    /// before the animation sees it.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easetab::Ease;
    ///
    /// let anim = easetab::id::<f64, f64>().scale_min_max(0.0, 8.0).ease(Ease::InCubic);
    ///
    /// assert_approx_eq!(anim.eval(0.5), 1.0);
    /// assert_approx_eq!(anim.eval(1.0), 8.0);
    /// ```
    pub fn ease(self, curve: Ease) -> Anim<impl Fun<T = F::T, V = F::V>> {
        self.map_time(move |t: F::T| curve.eval(t))
    }
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct MapClosure<F, G>(F, G);

impl<F, G> Fun for MapClosure<F, G>
where
    F: Fun,
    G: Fun<T = F::V>,
{
    type T = F::T;
    type V = G::V;

    fn eval(&self, t: F::T) -> G::V {
        self.1.eval(self.0.eval(t))
    }
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct ZipClosure<F, G>(F, G);

impl<F, G> Fun for ZipClosure<F, G>
where
    F: Fun,
    F::T: Copy,
    G: Fun<T = F::T>,
{
    type T = F::T;
    type V = (F::V, G::V);

    fn eval(&self, t: F::T) -> Self::V {
        (self.0.eval(t), self.1.eval(t))
    }
}

#[doc(hidden)]
pub struct WrapFn<T, V, F: Fn(T) -> V>(F, PhantomData<(T, V)>);

impl<T, V, F> From<F> for Anim<WrapFn<T, V, F>>
where
    F: Fn(T) -> V,
{
    fn from(f: F) -> Self {
        Anim(WrapFn(f, PhantomData))
    }
}

impl<T, V, F> Fun for WrapFn<T, V, F>
where
    F: Fn(T) -> V,
{
    type T = T;
    type V = V;

    fn eval(&self, t: T) -> V {
        self.0(t)
    }
}

impl From<Ease> for Anim<Ease> {
    fn from(ease: Ease) -> Self {
        Anim(ease)
    }
}
