use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{fun, functions, Anim, EaseError, Fun, RoundingMode, Scalar};

/// The group a curve belongs to, i.e. the shape of its easing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    Linear,
    Sine,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

/// Which end of the curve the easing is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and slow end.
    InOut,
}

// Each curve is bound to its function by name in a `match`, never by position,
// so the ordinals below only matter for persisted values.
macro_rules! easings {
    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => { 1 + easings!(@count $($tail)*) };

    (
        $(
            $(#[$meta:meta])*
            $name:ident = $ordinal:literal => ($family:ident, $kind:ident, $fun:ident),
        )*
    ) => {
        /// An easing curve, as published on <https://easings.net>.
        ///
        /// The discriminant of each variant is its canonical ordinal. Ordinals
        /// are stable: new curves may only ever be appended.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum Ease {
            $(
                $(#[$meta])*
                $name = $ordinal,
            )*
        }

        impl Ease {
            /// All curves, in canonical order.
            pub const ALL: [Ease; easings!(@count $($name)*)] = [$(Ease::$name,)*];

            /// Evaluate the curve at time `t`.
            ///
            /// `t` is meant to be in `[0, 1]`, but any value is accepted and
            /// evaluated with the same formula.
            #[inline]
            pub fn eval<T: Scalar>(self, t: T) -> T {
                match self {
                    $(Ease::$name => functions::$fun(t),)*
                }
            }

            /// The canonical name of the curve, e.g. `"InOutBounce"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Ease::$name => stringify!($name),)*
                }
            }

            /// The family of the curve, e.g. `Family::Bounce` for `InOutBounce`.
            pub fn family(self) -> Family {
                match self {
                    $(Ease::$name => Family::$family,)*
                }
            }

            /// Whether the curve eases in, out, or both.
            pub fn kind(self) -> Kind {
                match self {
                    $(Ease::$name => Kind::$kind,)*
                }
            }

            /// Look up a curve by its canonical ordinal.
            pub fn from_ordinal(ordinal: u8) -> Result<Ease, EaseError> {
                match ordinal {
                    $($ordinal => Ok(Ease::$name),)*
                    _ => {
                        debug!(ordinal, "rejected unknown easing ordinal");
                        Err(EaseError::UnknownOrdinal(ordinal))
                    }
                }
            }
        }
    };
}

easings! {
    #[default]
    Linear = 0 => (Linear, In, linear),
    InSine = 1 => (Sine, In, in_sine),
    OutSine = 2 => (Sine, Out, out_sine),
    InOutSine = 3 => (Sine, InOut, in_out_sine),
    InCubic = 4 => (Cubic, In, in_cubic),
    OutCubic = 5 => (Cubic, Out, out_cubic),
    InOutCubic = 6 => (Cubic, InOut, in_out_cubic),
    InQuart = 7 => (Quart, In, in_quart),
    OutQuart = 8 => (Quart, Out, out_quart),
    InOutQuart = 9 => (Quart, InOut, in_out_quart),
    InQuint = 10 => (Quint, In, in_quint),
    OutQuint = 11 => (Quint, Out, out_quint),
    InOutQuint = 12 => (Quint, InOut, in_out_quint),
    InExpo = 13 => (Expo, In, in_expo),
    OutExpo = 14 => (Expo, Out, out_expo),
    InOutExpo = 15 => (Expo, InOut, in_out_expo),
    InCirc = 16 => (Circ, In, in_circ),
    OutCirc = 17 => (Circ, Out, out_circ),
    InOutCirc = 18 => (Circ, InOut, in_out_circ),
    /// Overshoots below zero before rising.
    InBack = 19 => (Back, In, in_back),
    /// Overshoots above one before settling.
    OutBack = 20 => (Back, Out, out_back),
    InOutBack = 21 => (Back, InOut, in_out_back),
    InElastic = 22 => (Elastic, In, in_elastic),
    OutElastic = 23 => (Elastic, Out, out_elastic),
    InOutElastic = 24 => (Elastic, InOut, in_out_elastic),
    InBounce = 25 => (Bounce, In, in_bounce),
    OutBounce = 26 => (Bounce, Out, out_bounce),
    InOutBounce = 27 => (Bounce, InOut, in_out_bounce),
}

impl Ease {
    /// Iterate over all curves in canonical order.
    pub fn iter() -> impl Iterator<Item = Ease> {
        Ease::ALL.into_iter()
    }

    /// The canonical ordinal of the curve.
    ///
    /// # Example
    /// ```
    /// use easetab::Ease;
    ///
    /// assert_eq!(Ease::Linear.ordinal(), 0);
    /// assert_eq!(Ease::InOutBounce.ordinal(), 27);
    /// assert_eq!(Ease::from_ordinal(13), Ok(Ease::InExpo));
    /// assert!(Ease::from_ordinal(28).is_err());
    /// ```
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Find the curve of the given `family` and `kind`.
    ///
    /// `Family::Linear` only exists as `Kind::In`.
    ///
    /// # Example
    /// ```
    /// use easetab::{Ease, Family, Kind};
    ///
    /// assert_eq!(Ease::from_parts(Family::Bounce, Kind::Out), Some(Ease::OutBounce));
    /// assert_eq!(Ease::from_parts(Family::Linear, Kind::InOut), None);
    /// ```
    pub fn from_parts(family: Family, kind: Kind) -> Option<Ease> {
        Ease::iter().find(|ease| ease.family() == family && ease.kind() == kind)
    }

    /// Evaluate the curve at an integer time and round the result.
    ///
    /// The integer is converted to `f32` before evaluation, so only `0` and
    /// `1` are inside the normalized range.
    ///
    /// # Example
    /// ```
    /// use easetab::{Ease, RoundingMode};
    ///
    /// assert_eq!(Ease::OutBack.eval_int(1, RoundingMode::Round), 1);
    /// assert_eq!(Ease::InCubic.eval_int(2, RoundingMode::Floor), 8);
    /// ```
    pub fn eval_int(self, t: i32, mode: RoundingMode) -> i32 {
        mode.apply(self.eval(t as f32))
    }

    /// Same as [`eval_int`](#method.eval_int) with the default rounding mode.
    pub fn eval_int_round(self, t: i32) -> i32 {
        self.eval_int(t, RoundingMode::default())
    }

    /// The curve as an animation, mapping time to the eased value.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easetab::Ease;
    ///
    /// // Move from 10 to 20 along a cubic curve.
    /// let anim = Ease::InCubic.anim::<f64>().scale_min_max(10.0, 20.0);
    ///
    /// assert_approx_eq!(anim.eval(0.0), 10.0);
    /// assert_approx_eq!(anim.eval(0.5), 11.25);
    /// assert_approx_eq!(anim.eval(1.0), 20.0);
    /// ```
    pub fn anim<T: Scalar>(self) -> Anim<impl Fun<T = T, V = T>> {
        fun(move |t: T| self.eval(t))
    }
}

impl Fun for Ease {
    type T = f32;
    type V = f32;

    fn eval(&self, t: f32) -> f32 {
        Ease::eval(*self, t)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Ease {
    type Error = EaseError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Ease::from_ordinal(ordinal)
    }
}

impl From<Ease> for u8 {
    fn from(ease: Ease) -> u8 {
        ease.ordinal()
    }
}

/// Parses the canonical name, ignoring case, dashes and underscores, so that
/// `"InOutBounce"`, `"in-out-bounce"` and `"in_out_bounce"` are all accepted.
impl FromStr for Ease {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ease::iter()
            .find(|ease| ease.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                debug!(name = s, "rejected unknown easing name");
                EaseError::UnknownName(s.to_string())
            })
    }
}

/// Evaluate `curve` at time `t`.
///
/// This is the same as [`Ease::eval`](enum.Ease.html#method.eval).
pub fn evaluate<T: Scalar>(curve: Ease, t: T) -> T {
    curve.eval(t)
}

/// Evaluate `curve` at integer time `t`, rounding with `mode`.
///
/// This is the same as [`Ease::eval_int`](enum.Ease.html#method.eval_int).
pub fn evaluate_int(curve: Ease, t: i32, mode: RoundingMode) -> i32 {
    curve.eval_int(t, mode)
}
