use crate::{
    error::{DomainError, MathResult},
    scalar::{self, Real},
    types::{Matrix4, MatrixOps, Vector3, Vector4, VectorOps},
};

#[cfg(test)]
mod test_projection {
    use super::{project, project_onto_subspace};
    use crate::{
        error::{DomainError, MathError},
        types::{Matrix3, Matrix4, Vector2, Vector3, Vector4, VectorOps},
    };

    #[test]
    fn onto_vector() {
        let v = Vector3::new(2.0f64, 3.0, 4.0);
        assert_eq!(project(v, Vector3::new(0.0, 5.0, 0.0)), Ok(Vector3::new(0.0, 3.0, 0.0)));
        assert_eq!(
            project(Vector2::new(1.0f32, 1.0), Vector2::new(2.0, 0.0)),
            Ok(Vector2::new(1.0, 0.0))
        );
    }

    #[test]
    fn onto_tiny_vector() {
        let v = Vector2::new(3.0f32, 4.0);
        assert_eq!(project(v, Vector2::new(0.0, 1.0e-30)), Ok(Vector2::new(0.0, 4.0)));
    }

    #[test]
    fn onto_zero_vector() {
        assert_eq!(
            project(Vector3::new(1.0f32, 2.0, 3.0), Vector3::zero()),
            Err(MathError::Domain(DomainError::ZeroLengthVector))
        );
    }

    #[test]
    fn onto_subspace() {
        let plane = Matrix3::new(
            Vector3::new(2.0f64, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::zero(),
        );
        let v = Vector3::new(3.0, -4.0, 5.0);
        assert_eq!(project_onto_subspace(v, plane), Vector3::new(3.0, -4.0, 0.0));
        let line = Matrix3::new(
            Vector3::new(1.0f64, 1.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
            Vector3::new(-1.0, -1.0, 0.0),
        );
        assert_eq!(project_onto_subspace(v, line), Vector3::new(-0.5, -0.5, 0.0));
    }

    #[test]
    fn orthographic_corners() {
        let m = Matrix4::orthographic(-2.0f32, 4.0, -1.0, 3.0, 0.5, 10.0);
        let near = m * Vector4::point(Vector3::new(-2.0, -1.0, -0.5));
        let far = m * Vector4::point(Vector3::new(4.0, 3.0, -10.0));
        assert_eq!(near, Vector4::point(Vector3::new(-1.0, -1.0, -1.0)));
        assert_eq!(far, Vector4::point(Vector3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn perspective_golden() {
        let m = Matrix4::perspective(std::f64::consts::FRAC_PI_2, 2.0, 1.0, 10.0);
        assert_eq!(
            m,
            Matrix4::from_row_major([
                0.5, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, -11.0 / 9.0, -20.0 / 9.0,
                0.0, 0.0, -1.0, 0.0,
            ])
        );
    }

    #[test]
    fn perspective_depth_range() {
        let (near, far) = (0.1f64, 100.0);
        let m = Matrix4::perspective(1.0, 16.0 / 9.0, near, far);
        let clip_near = m * Vector4::point(Vector3::new(0.0, 0.0, -near));
        let clip_far = m * Vector4::point(Vector3::new(0.0, 0.0, -far));
        assert!((clip_near.z / clip_near.w + 1.0).abs() < 1e-9);
        assert!((clip_far.z / clip_far.w - 1.0).abs() < 1e-9);
        assert_eq!(clip_near.w, near);
    }

    #[test]
    fn look_at_golden() {
        let m = Matrix4::look_at_y_up(Vector3::new(0.0f64, 0.0, 5.0), Vector3::zero());
        assert_eq!(m, Matrix4::translation(Vector3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn look_at_basis() {
        let eye = Vector3::new(2.0f64, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at(eye, target, Vector3::z());
        assert_eq!(m * Vector4::point(eye), Vector4::point(Vector3::zero()));
        let distance = (eye - target).length();
        assert_eq!(
            m * Vector4::point(target),
            Vector4::point(Vector3::new(0.0, 0.0, -distance))
        );
        let right = Vector3::new(m[0].x, m[1].x, m[2].x);
        assert!(right.dot(Vector3::z()).abs() < 1e-12);
    }

    #[test]
    fn look_at_then_perspective() {
        let view = Matrix4::look_at_y_up(Vector3::new(0.0f64, 0.0, 3.0), Vector3::zero());
        let proj = Matrix4::perspective(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 5.0);
        let on_axis = proj * view * Vector4::point(Vector3::zero());
        assert!(on_axis.x.abs() < 1e-12 && on_axis.y.abs() < 1e-12);
        let ndc_z = on_axis.z / on_axis.w;
        assert!(ndc_z > -1.0 && ndc_z < 1.0);
        let above = proj * view * Vector4::point(Vector3::new(0.0, 1.0, 0.0));
        assert!(above.y / above.w > 0.0);
    }
}

/// Projection of `v` onto the line spanned by `onto`.
#[inline]
pub fn project<T: Real, V: VectorOps<T>>(v: V, onto: V) -> MathResult<V> {
    if onto.length() == T::zero() {
        return Err(DomainError::ZeroLengthVector.into());
    }
    let unit = onto.normalize();
    Ok(unit * v.dot(unit))
}

/// Projection of `v` onto the column space of `subspace`.
///
/// Columns are orthonormalized first; dependent and zero columns contribute nothing.
#[inline]
pub fn project_onto_subspace<T: Real, M: MatrixOps<T>>(v: M::Column, subspace: M) -> M::Column {
    subspace
        .gram_schmidt()
        .columns()
        .iter()
        .fold(<M::Column as VectorOps<T>>::zero(), |acc, u| acc + *u * u.dot(v))
}

impl<T: Real> Matrix4<T> {
    /// OpenGL orthographic projection mapping the box onto the `[-1, 1]` cube,
    /// `-near` to `-1` and `-far` to `1`.
    #[inline]
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix4<T> {
        let two = scalar::two::<T>();
        let (o, l) = (T::zero(), T::one());
        let (w, h, d) = (right - left, top - bottom, far - near);
        Matrix4::new(
            Vector4::new(two / w, o, o, o),
            Vector4::new(o, two / h, o, o),
            Vector4::new(o, o, -two / d, o),
            Vector4::new(-(right + left) / w, -(top + bottom) / h, -(far + near) / d, l),
        )
    }

    /// Right-handed OpenGL perspective projection with vertical field of view `fov_y_rad`.
    ///
    /// View space looks down `-Z` with `Y` up; depth lands in `[-1, 1]` after
    /// the perspective divide.
    #[inline]
    pub fn perspective(fov_y_rad: T, aspect_ratio: T, z_near: T, z_far: T) -> Matrix4<T> {
        let two = scalar::two::<T>();
        let o = T::zero();
        let y_scale = (fov_y_rad / two).tan().recip();
        let x_scale = y_scale / aspect_ratio;
        let depth = z_near - z_far;
        Matrix4::new(
            Vector4::new(x_scale, o, o, o),
            Vector4::new(o, y_scale, o, o),
            Vector4::new(o, o, (z_far + z_near) / depth, -T::one()),
            Vector4::new(o, o, two * z_far * z_near / depth, o),
        )
    }

    #[inline]
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Matrix4<T> {
        let f = (eye - target).normalize();
        let r = up.cross(f).normalize();
        let u = f.cross(r);
        let o = T::zero();
        Matrix4::new(
            Vector4::new(r.x, u.x, f.x, o),
            Vector4::new(r.y, u.y, f.y, o),
            Vector4::new(r.z, u.z, f.z, o),
            Vector4::new(-eye.dot(r), -eye.dot(u), -eye.dot(f), T::one()),
        )
    }

    #[inline]
    pub fn look_at_y_up(eye: Vector3<T>, target: Vector3<T>) -> Matrix4<T> {
        Self::look_at(eye, target, Vector3::up())
    }
}
