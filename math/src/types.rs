mod matrix;
mod vector;

pub use matrix::{Matrix2, Matrix3, Matrix4, MatrixOps};
pub use vector::{Vector2, Vector3, Vector4, VectorOps};
