pub mod planar;
pub mod projection;

use crate::{
    error::MathResult,
    scalar::{Real, Scalar},
    types::{Matrix3, Matrix4, MatrixOps, Vector3, Vector4, VectorOps},
};


impl<T: Scalar> Matrix4<T> {
    #[inline]
    pub fn scaling(s: Vector3<T>) -> Self {
        Self::new(
            Vector4::x() * s.x,
            Vector4::y() * s.y,
            Vector4::z() * s.z,
            Vector4::w(),
        )
    }

    #[inline]
    pub fn uniform_scaling(s: T) -> Self {
        Self::scaling(Vector3::splat(s))
    }

    #[inline]
    pub fn translation(v: Vector3<T>) -> Self {
        Self::new(
            Vector4::x(),
            Vector4::y(),
            Vector4::z(),
            Vector4::point(v),
        )
    }

    #[inline]
    pub fn uniform_translation(s: T) -> Self {
        Self::translation(Vector3::splat(s))
    }

    #[inline]
    pub fn scale(self, s: Vector3<T>) -> Self {
        self * Self::scaling(s)
    }

    #[inline]
    pub fn uniform_scale(self, s: T) -> Self {
        self * Self::uniform_scaling(s)
    }

    #[inline]
    pub fn translate(self, v: Vector3<T>) -> Self {
        self * Self::translation(v)
    }

    #[inline]
    pub fn uniform_translate(self, s: T) -> Self {
        self * Self::uniform_translation(s)
    }
}

impl<T: Real> Matrix4<T> {
    #[inline]
    pub fn rotation_x(rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(
            Vector3::new(l, o, o),
            Vector3::new(o, cos, sin),
            Vector3::new(o, -sin, cos),
        )
        .into()
    }

    #[inline]
    pub fn rotation_y(rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(
            Vector3::new(cos, o, -sin),
            Vector3::new(o, l, o),
            Vector3::new(sin, o, cos),
        )
        .into()
    }

    #[inline]
    pub fn rotation_z(rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(
            Vector3::new(cos, sin, o),
            Vector3::new(-sin, cos, o),
            Vector3::new(o, o, l),
        )
        .into()
    }

    /// Rotation by `rad` about `axis` (Rodrigues' formula).
    ///
    /// The axis does not need to be normalized. A zero axis has no direction
    /// to turn about and yields the identity.
    pub fn rotation(rad: T, axis: Vector3<T>) -> Self {
        if axis.length() == T::zero() {
            return Self::identity();
        }
        let Vector3 { x, y, z } = axis.normalize();
        let (sin, cos) = rad.sin_cos();
        let t = T::one() - cos;
        Matrix3::from_row_major([
            t * x * x + cos,
            t * x * y - sin * z,
            t * x * z + sin * y,
            t * x * y + sin * z,
            t * y * y + cos,
            t * y * z - sin * x,
            t * x * z - sin * y,
            t * y * z + sin * x,
            t * z * z + cos,
        ])
        .into()
    }

    /// Translate, rotate and scale composed so that scaling applies first.
    #[inline]
    pub fn trs(translation: Vector3<T>, rad: T, axis: Vector3<T>, scale: Vector3<T>) -> Self {
        Self::translation(translation) * Self::rotation(rad, axis) * Self::scaling(scale)
    }

    #[inline]
    pub fn rotate(self, rad: T, axis: Vector3<T>) -> Self {
        self * Self::rotation(rad, axis)
    }

    #[inline]
    pub fn rotate_x(self, rad: T) -> Self {
        self * Self::rotation_x(rad)
    }

    #[inline]
    pub fn rotate_y(self, rad: T) -> Self {
        self * Self::rotation_y(rad)
    }

    #[inline]
    pub fn rotate_z(self, rad: T) -> Self {
        self * Self::rotation_z(rad)
    }

    /// Inverse-transpose of the upper 3x3 block, used to carry normals
    /// through a model transform.
    #[inline]
    pub fn normal_matrix(self) -> MathResult<Matrix3<T>> {
        Ok(Matrix3::from(self).inverse()?.transpose())
    }
}
