//! Homogeneous 2D transforms on [`Matrix3`].
//!
//! Points are `(x, y, 1)`, so translation lives in the third column.

use crate::{
    scalar::{Real, Scalar},
    types::{Matrix3, Vector2, Vector3, VectorOps},
};


impl<T: Scalar> Matrix3<T> {
    #[inline]
    pub fn scaling_2d(s: Vector2<T>) -> Self {
        Self::new(Vector3::x() * s.x, Vector3::y() * s.y, Vector3::z())
    }

    #[inline]
    pub fn uniform_scaling_2d(s: T) -> Self {
        Self::scaling_2d(Vector2::splat(s))
    }

    #[inline]
    pub fn translation_2d(v: Vector2<T>) -> Self {
        Self::new(
            Vector3::x(),
            Vector3::y(),
            Vector3::new(v.x, v.y, T::one()),
        )
    }

    #[inline]
    pub fn uniform_translation_2d(s: T) -> Self {
        Self::translation_2d(Vector2::splat(s))
    }

    #[inline]
    pub fn scale_2d(self, s: Vector2<T>) -> Self {
        self * Self::scaling_2d(s)
    }

    #[inline]
    pub fn uniform_scale_2d(self, s: T) -> Self {
        self * Self::uniform_scaling_2d(s)
    }

    #[inline]
    pub fn translate_2d(self, v: Vector2<T>) -> Self {
        self * Self::translation_2d(v)
    }

    #[inline]
    pub fn uniform_translate_2d(self, s: T) -> Self {
        self * Self::uniform_translation_2d(s)
    }
}

impl<T: Real> Matrix3<T> {
    #[inline]
    pub fn rotation_2d(rad: T) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self::new(
            Vector3::new(cos, sin, T::zero()),
            Vector3::new(-sin, cos, T::zero()),
            Vector3::z(),
        )
    }

    #[inline]
    pub fn trs_2d(translation: Vector2<T>, rad: T, scale: Vector2<T>) -> Self {
        Self::translation_2d(translation) * Self::rotation_2d(rad) * Self::scaling_2d(scale)
    }

    #[inline]
    pub fn uniform_trs_2d(translation: T, rad: T, scale: T) -> Self {
        Self::trs_2d(Vector2::splat(translation), rad, Vector2::splat(scale))
    }

    #[inline]
    pub fn rotate_2d(self, rad: T) -> Self {
        self * Self::rotation_2d(rad)
    }
}
