//! The closed-form easing functions, one per curve.
//!
//! All formulas follow the reference implementations published on
//! <https://easings.net>. Every function is defined on all reals, but only
//! has its documented shape in `[0, 1]`.

use crate::Scalar;

#[inline]
fn two<T: Scalar>() -> T {
    T::lit(2.0)
}

#[inline]
fn half<T: Scalar>() -> T {
    T::lit(0.5)
}

pub fn linear<T: Scalar>(x: T) -> T {
    x
}

pub fn in_sine<T: Scalar>(x: T) -> T {
    T::one() - (x * T::PI() / two()).cos()
}

pub fn out_sine<T: Scalar>(x: T) -> T {
    (x * T::PI() / two()).sin()
}

pub fn in_out_sine<T: Scalar>(x: T) -> T {
    -((T::PI() * x).cos() - T::one()) / two()
}

// Cubic, Quart and Quint only differ in the exponent and in the factor of the
// first half of InOut, which is `2^(n - 1)`.

#[inline]
fn in_pow<T: Scalar>(x: T, n: i32) -> T {
    x.powi(n)
}

#[inline]
fn out_pow<T: Scalar>(x: T, n: i32) -> T {
    T::one() - (T::one() - x).powi(n)
}

#[inline]
fn in_out_pow<T: Scalar>(x: T, n: i32) -> T {
    if x < half() {
        two::<T>().powi(n - 1) * x.powi(n)
    } else {
        T::one() - (-two::<T>() * x + two()).powi(n) / two()
    }
}

pub fn in_cubic<T: Scalar>(x: T) -> T {
    in_pow(x, 3)
}

pub fn out_cubic<T: Scalar>(x: T) -> T {
    out_pow(x, 3)
}

pub fn in_out_cubic<T: Scalar>(x: T) -> T {
    in_out_pow(x, 3)
}

pub fn in_quart<T: Scalar>(x: T) -> T {
    in_pow(x, 4)
}

pub fn out_quart<T: Scalar>(x: T) -> T {
    out_pow(x, 4)
}

pub fn in_out_quart<T: Scalar>(x: T) -> T {
    in_out_pow(x, 4)
}

pub fn in_quint<T: Scalar>(x: T) -> T {
    in_pow(x, 5)
}

pub fn out_quint<T: Scalar>(x: T) -> T {
    out_pow(x, 5)
}

pub fn in_out_quint<T: Scalar>(x: T) -> T {
    in_out_pow(x, 5)
}

pub fn in_expo<T: Scalar>(x: T) -> T {
    if x == T::zero() {
        T::zero()
    } else {
        two::<T>().powf(T::lit(10.0) * x - T::lit(10.0))
    }
}

pub fn out_expo<T: Scalar>(x: T) -> T {
    if x == T::one() {
        T::one()
    } else {
        T::one() - two::<T>().powf(T::lit(-10.0) * x)
    }
}

pub fn in_out_expo<T: Scalar>(x: T) -> T {
    if x == T::zero() {
        T::zero()
    } else if x == T::one() {
        T::one()
    } else if x < half() {
        two::<T>().powf(T::lit(20.0) * x - T::lit(10.0)) / two()
    } else {
        (two::<T>() - two::<T>().powf(T::lit(-20.0) * x + T::lit(10.0))) / two()
    }
}

pub fn in_circ<T: Scalar>(x: T) -> T {
    T::one() - (T::one() - x.powi(2)).sqrt()
}

pub fn out_circ<T: Scalar>(x: T) -> T {
    (T::one() - (x - T::one()).powi(2)).sqrt()
}

pub fn in_out_circ<T: Scalar>(x: T) -> T {
    if x < half() {
        (T::one() - (T::one() - (two::<T>() * x).powi(2)).sqrt()) / two()
    } else {
        ((T::one() - (-two::<T>() * x + two()).powi(2)).sqrt() + T::one()) / two()
    }
}

const BACK_C1: f64 = 1.70158;

pub fn in_back<T: Scalar>(x: T) -> T {
    let c1 = T::lit(BACK_C1);
    let c3 = c1 + T::one();

    c3 * x.powi(3) - c1 * x.powi(2)
}

pub fn out_back<T: Scalar>(x: T) -> T {
    let c1 = T::lit(BACK_C1);
    let c3 = c1 + T::one();

    T::one() + c3 * (x - T::one()).powi(3) + c1 * (x - T::one()).powi(2)
}

pub fn in_out_back<T: Scalar>(x: T) -> T {
    let c2 = T::lit(BACK_C1) * T::lit(1.525);

    if x < half() {
        ((two::<T>() * x).powi(2) * ((c2 + T::one()) * two() * x - c2)) / two()
    } else {
        let y = two::<T>() * x - two();

        (y.powi(2) * ((c2 + T::one()) * y + c2) + two()) / two()
    }
}

pub fn in_elastic<T: Scalar>(x: T) -> T {
    let c4 = two::<T>() * T::PI() / T::lit(3.0);

    if x == T::zero() {
        T::zero()
    } else if x == T::one() {
        T::one()
    } else {
        -two::<T>().powf(T::lit(10.0) * x - T::lit(10.0))
            * ((x * T::lit(10.0) - T::lit(10.75)) * c4).sin()
    }
}

pub fn out_elastic<T: Scalar>(x: T) -> T {
    let c4 = two::<T>() * T::PI() / T::lit(3.0);

    if x == T::zero() {
        T::zero()
    } else if x == T::one() {
        T::one()
    } else {
        two::<T>().powf(T::lit(-10.0) * x) * ((x * T::lit(10.0) - T::lit(0.75)) * c4).sin()
            + T::one()
    }
}

pub fn in_out_elastic<T: Scalar>(x: T) -> T {
    let c5 = two::<T>() * T::PI() / T::lit(4.5);

    if x == T::zero() {
        T::zero()
    } else if x == T::one() {
        T::one()
    } else if x < half() {
        let phase = (T::lit(20.0) * x - T::lit(11.125)) * c5;

        -(two::<T>().powf(T::lit(20.0) * x - T::lit(10.0)) * phase.sin()) / two()
    } else {
        let phase = (T::lit(20.0) * x - T::lit(11.125)) * c5;

        (two::<T>().powf(T::lit(-20.0) * x + T::lit(10.0)) * phase.sin()) / two() + T::one()
    }
}

pub fn in_bounce<T: Scalar>(x: T) -> T {
    T::one() - out_bounce(T::one() - x)
}

pub fn out_bounce<T: Scalar>(x: T) -> T {
    let n1 = T::lit(7.5625);
    let d1 = T::lit(2.75);

    if x < T::one() / d1 {
        n1 * x * x
    } else if x < two::<T>() / d1 {
        let x = x - T::lit(1.5) / d1;
        n1 * x * x + T::lit(0.75)
    } else if x < T::lit(2.5) / d1 {
        let x = x - T::lit(2.25) / d1;
        n1 * x * x + T::lit(0.9375)
    } else {
        let x = x - T::lit(2.625) / d1;
        n1 * x * x + T::lit(0.984375)
    }
}

pub fn in_out_bounce<T: Scalar>(x: T) -> T {
    if x < half() {
        (T::one() - out_bounce(T::one() - two::<T>() * x)) / two()
    } else {
        (T::one() + out_bounce(two::<T>() * x - T::one())) / two()
    }
}
