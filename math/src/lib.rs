//! Small fixed-size linear algebra for real-time graphics.
//!
//! Vectors and column-major matrices of dimension 2, 3 and 4, generic over a
//! [`Scalar`](scalar::Scalar) type, plus the transform, projection and view
//! builders a renderer needs every frame. Matrices can be viewed as flat
//! column-major slices for direct uniform upload.

pub mod error;
pub mod scalar;
pub mod transform;
pub mod types;

pub use error::{DomainError, MathError, MathResult};

pub mod prelude {
    pub use crate::error::{DomainError, MathError, MathResult};
    pub use crate::scalar::{Real, Scalar};
    pub use crate::transform::projection::{project, project_onto_subspace};
    pub use crate::types::{
        Matrix2, Matrix3, Matrix4, MatrixOps, Vector2, Vector3, Vector4, VectorOps,
    };
}
