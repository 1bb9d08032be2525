use bytemuck::Pod;
use num_traits::{Float, FloatConst, NumCast, Signed};
use std::fmt::{Debug, Display};

#[cfg(test)]
mod test_scalar {
    use super::{almost_equal, clamp, default_epsilon, degrees, radians, smoothstep, step, Scalar};

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-2, 0, 3), 0);
        assert_eq!(clamp(0.5f32, 0.0, 1.0), 0.5);
    }

    #[test]
    fn step_edge() {
        assert_eq!(step(1.0f32, 1.0), 0.0);
        assert_eq!(step(1.0f32, 1.5), 1.0);
        assert_eq!(step(2, 3), 1);
    }

    #[test]
    fn smoothstep_curve() {
        assert_eq!(smoothstep(0.0f64, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0f64, 1.0, 2.0), 1.0);
        assert_eq!(smoothstep(0.0f64, 1.0, 0.5), 0.5);
        assert!(almost_equal(smoothstep(0.0f64, 2.0, 0.5), 0.15625, default_epsilon()));
    }

    #[test]
    fn smoothstep_degenerate_edges() {
        assert!(smoothstep(1.0f32, 1.0, 1.0).is_nan());
    }

    #[test]
    fn almost_equal_is_relative() {
        let eps = default_epsilon::<f32>();
        assert!(almost_equal(1.0f32, 1.0 + f32::EPSILON, eps));
        assert!(almost_equal(1.0e6f32, 1.0e6 + 1.0e-2, eps));
        assert!(!almost_equal(1.0f32, 1.001, eps));
        assert!(almost_equal(0.0f32, 1.0e-6, eps));
    }

    #[test]
    fn integer_equality_is_exact() {
        assert!(3i32.approx_eq(3));
        assert!(!3i32.approx_eq(4));
    }

    #[test]
    fn angle_conversion() {
        assert!(almost_equal(radians(180.0f64), std::f64::consts::PI, default_epsilon()));
        assert!(almost_equal(degrees(std::f32::consts::FRAC_PI_2), 90.0, default_epsilon()));
    }
}

/// Numeric component type of vectors and matrices.
///
/// Implemented for the signed integers and for `f32`/`f64`. Equality through
/// [`Scalar::approx_eq`] is exact for integers and tolerance-based for floats
/// (see [`almost_equal`]).
pub trait Scalar: Signed + NumCast + PartialOrd + Copy + Default + Debug + Display + Pod {
    /// Whether `+`, `-` and `*` are exact (no rounding) for this type.
    const EXACT: bool;

    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! impl_exact_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const EXACT: bool = true;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const EXACT: bool = false;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    almost_equal(self, other, default_epsilon())
                }
            }
        )*
    };
}

impl_exact_scalar!(i8, i16, i32, i64);
impl_float_scalar!(f32, f64);

/// Floating point scalars, required wherever roots or trigonometry are involved.
pub trait Real: Scalar + Float + FloatConst {}

impl<T: Scalar + Float + FloatConst> Real for T {}

/// Tolerance used by `==` on floating point vectors and matrices: `100 * T::epsilon()`.
#[inline]
pub fn default_epsilon<T: Real>() -> T {
    lit::<T>(100.0) * T::epsilon()
}

#[inline]
pub fn clamp<T: Scalar>(val: T, min_val: T, max_val: T) -> T {
    if val < min_val {
        min_val
    } else if val > max_val {
        max_val
    } else {
        val
    }
}

#[inline]
pub fn step<T: Scalar>(edge: T, val: T) -> T {
    if val > edge {
        T::one()
    } else {
        T::zero()
    }
}

/// Hermite interpolation between `edge0` and `edge1`.
///
/// Equal edges divide by zero and produce NaN.
#[inline]
pub fn smoothstep<T: Real>(edge0: T, edge1: T, val: T) -> T {
    let t = clamp((val - edge0) / (edge1 - edge0), T::zero(), T::one());
    t * t * (lit::<T>(3.0) - lit::<T>(2.0) * t)
}

/// Relative comparison: `|a - b| <= eps * max(1, |a|, |b|)`.
#[inline]
pub fn almost_equal<T: Real>(a: T, b: T, eps: T) -> bool {
    let scale = Float::max(T::one(), Float::max(Float::abs(a), Float::abs(b)));
    Float::abs(a - b) <= eps * scale
}

#[inline]
pub fn radians<T: Real>(degrees: T) -> T {
    degrees.to_radians()
}

#[inline]
pub fn degrees<T: Real>(radians: T) -> T {
    radians.to_degrees()
}

#[inline]
pub(crate) fn lit<T: Real>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

#[inline]
pub(crate) fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

#[inline]
pub(crate) fn partial_min<T: Scalar>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub(crate) fn partial_max<T: Scalar>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
