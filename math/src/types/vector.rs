use bytemuck::{Pod, Zeroable};
use num_traits::{Float, NumCast, Signed};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    error::{check_index, DomainError, MathError, MathResult},
    scalar::{self, Real, Scalar},
};


/// Behaviour shared by [`Vector2`], [`Vector3`] and [`Vector4`].
///
/// Methods requiring square roots or trigonometry are only available when the
/// component type is [`Real`].
pub trait VectorOps<T: Scalar>:
    Copy
    + Default
    + Debug
    + PartialEq
    + Pod
    + Index<usize, Output = T>
    + IndexMut<usize>
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<T, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<T>
{
    const DIM: usize;

    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;

    #[inline]
    fn splat(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    #[inline]
    fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    fn get(&self, index: usize) -> MathResult<T> {
        check_index(index, Self::DIM)?;
        Ok(self[index])
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> MathResult<&mut T> {
        check_index(index, Self::DIM)?;
        Ok(&mut self[index])
    }

    #[inline]
    fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        Self::from_fn(|i| f(self[i]))
    }

    #[inline]
    fn zip_map<F: FnMut(T, T) -> T>(self, rhs: Self, mut f: F) -> Self {
        Self::from_fn(|i| f(self[i], rhs[i]))
    }

    #[inline]
    fn dot(self, rhs: Self) -> T {
        (0..Self::DIM).fold(T::zero(), |acc, i| acc + self[i] * rhs[i])
    }

    #[inline]
    fn hadamard(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }

    #[inline]
    fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    fn distance_squared(self, rhs: Self) -> T {
        (self - rhs).length_squared()
    }

    #[inline]
    fn try_div(self, rhs: T) -> MathResult<Self> {
        if rhs == T::zero() {
            return Err(DomainError::DivisionByZero.into());
        }
        Ok(self.map(|c| c / rhs))
    }

    #[inline]
    fn try_div_assign(&mut self, rhs: T) -> MathResult<()> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    #[inline]
    fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| scalar::clamp(self[i], min[i], max[i]))
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, scalar::partial_min)
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, scalar::partial_max)
    }

    #[inline]
    fn abs(self) -> Self {
        self.map(|c| Signed::abs(&c))
    }

    /// One where the component is strictly greater than `edge`, zero elsewhere.
    #[inline]
    fn step(self, edge: Self) -> Self {
        self.zip_map(edge, |c, e| scalar::step(e, c))
    }

    #[inline]
    fn smoothstep(self, edge0: Self, edge1: Self) -> Self
    where
        T: Real,
    {
        Self::from_fn(|i| scalar::smoothstep(edge0[i], edge1[i], self[i]))
    }

    /// Linear interpolation towards `rhs`; `t` must lie in `[0, 1]`.
    #[inline]
    fn lerp(self, rhs: Self, t: T) -> MathResult<Self> {
        if !unit_interval(t) {
            return Err(MathError::InvalidArgument("t must be between 0 and 1"));
        }
        Ok(self.zip_map(rhs, |a, b| a * (T::one() - t) + b * t))
    }

    #[inline]
    fn lerp_cwise(self, rhs: Self, t: Self) -> MathResult<Self> {
        if !(0..Self::DIM).all(|i| unit_interval(t[i])) {
            return Err(MathError::InvalidArgument(
                "t vector values must be between 0 and 1",
            ));
        }
        Ok(Self::from_fn(|i| {
            self[i] * (T::one() - t[i]) + rhs[i] * t[i]
        }))
    }

    /// Orients `self` (a normal) against `incident`, using `reference` for the test.
    #[inline]
    fn face_forward(self, incident: Self, reference: Self) -> Self {
        if reference.dot(incident) < T::zero() {
            self
        } else {
            -self
        }
    }

    /// Euclidean norm, computed on components scaled by the largest magnitude
    /// so tiny and huge vectors neither underflow nor overflow.
    #[inline]
    fn length(self) -> T
    where
        T: Real,
    {
        let largest = (0..Self::DIM)
            .fold(T::zero(), |acc, i| Float::max(acc, Float::abs(self[i])));
        if largest == T::zero() || largest.is_infinite() {
            return Float::sqrt(self.length_squared());
        }
        largest * Float::sqrt(self.map(|c| c / largest).length_squared())
    }

    #[inline]
    fn magnitude(self) -> T
    where
        T: Real,
    {
        self.length()
    }

    #[inline]
    fn distance(self, rhs: Self) -> T
    where
        T: Real,
    {
        (self - rhs).length()
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    #[inline]
    fn normalize(self) -> Self
    where
        T: Real,
    {
        let length = self.length();
        if length == T::zero() {
            self
        } else {
            self.map(|c| c / length)
        }
    }

    #[inline]
    fn angle_between(self, rhs: Self) -> MathResult<T>
    where
        T: Real,
    {
        if self.length() == T::zero() || rhs.length() == T::zero() {
            return Err(DomainError::ZeroLengthVector.into());
        }
        let cos_theta = self.normalize().dot(rhs.normalize());
        Ok(Float::acos(scalar::clamp(cos_theta, -T::one(), T::one())))
    }

    #[inline]
    fn reflect(self, normal: Self) -> Self
    where
        T: Real,
    {
        let n = normal.normalize();
        self - n * (scalar::two::<T>() * self.dot(n))
    }

    /// Refraction through a surface with relative index `eta`.
    ///
    /// Total internal reflection yields the zero vector.
    #[inline]
    fn refract(self, normal: Self, eta: T) -> Self
    where
        T: Real,
    {
        let n = normal.normalize();
        let cos_i = -n.dot(self);
        let sin_t2 = eta * eta * (T::one() - cos_i * cos_i);
        if sin_t2 > T::one() {
            return Self::zero();
        }
        let cos_t = Float::sqrt(T::one() - sin_t2);
        self * eta + n * (eta * cos_i - cos_t)
    }

    #[inline]
    fn approx_eq_eps(self, rhs: Self, eps: T) -> bool
    where
        T: Real,
    {
        (0..Self::DIM).all(|i| scalar::almost_equal(self[i], rhs[i], eps))
    }

    #[inline]
    fn is_finite(self) -> bool
    where
        T: Real,
    {
        (0..Self::DIM).all(|i| self[i].is_finite())
    }
}

#[inline]
fn unit_interval<T: Scalar>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

macro_rules! impl_vector {
    ($name:ident, $dim:literal, $($field:ident: $idx:literal),+) => {
        impl<T: Scalar> VectorOps<T> for $name<T> {
            const DIM: usize = $dim;

            #[inline]
            fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
                Self { $($field: f($idx)),+ }
            }
        }

        impl<T: Scalar> $name<T> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }

            #[inline]
            pub fn as_slice(&self) -> &[T] {
                bytemuck::cast_slice(std::slice::from_ref(self))
            }

            #[inline]
            pub fn cast<U: Scalar>(self) -> Option<$name<U>> {
                Some($name {
                    $($field: <U as NumCast>::from(self.$field)?),+
                })
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("Invalid index {} for {}!", index, stringify!($name)),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("Invalid index {} for {}!", index, stringify!($name)),
                }
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Scalar> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $(self.$field.approx_eq(other.$field))&&+
            }
        }

        impl<T: Scalar> Display for $name<T> {
            fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
                let components = [$(self.$field),+];
                write!(f, "(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }

        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            #[inline]
            fn from(value: [T; $dim]) -> Self {
                Self { $($field: value[$idx]),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            #[inline]
            fn from(value: $name<T>) -> Self {
                value.to_array()
            }
        }

        unsafe impl<T: Zeroable> Zeroable for $name<T> {}

        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector2<$t>> for $t {
                type Output = Vector2<$t>;
                #[inline]
                fn mul(self, rhs: Vector2<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;
                #[inline]
                fn mul(self, rhs: Vector3<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<Vector4<$t>> for $t {
                type Output = Vector4<$t>;
                #[inline]
                fn mul(self, rhs: Vector4<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2<T = f32> {
    pub x: T,
    pub y: T,
}

impl_vector!(Vector2, 2, x: 0, y: 1);

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The z component of the cross product of the two vectors lifted to 3D.
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector!(Vector3, 3, x: 0, y: 1, z: 2);

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    #[inline]
    fn from(value: Vector2<T>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: T::zero(),
        }
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    #[inline]
    fn from(value: Vector4<T>) -> Self {
        value.xyz()
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector2<T> {
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        value.xy()
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Default world up direction, `+Y`.
    #[inline]
    pub fn up() -> Self {
        Self::y()
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector4<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector!(Vector4, 4, x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        Self::vector(value)
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn point(p: Vector3<T>) -> Self {
        Self::new(p.x, p.y, p.z, T::one())
    }

    #[inline]
    pub fn vector(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::zero())
    }

    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, f32, f64);
