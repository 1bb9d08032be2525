use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{Vector2, Vector3, Vector4, VectorOps};
use crate::{
    error::{check_index, DomainError, MathResult},
    scalar::{self, Real, Scalar},
};

mod strassen;

use strassen::strassen;

#[cfg(test)]
mod test_matrix_2 {
    use super::{Matrix2, MatrixOps};
    use crate::{
        error::{DomainError, MathError},
        types::Vector2,
    };

    fn get_matrix_2() -> Matrix2<f64> {
        Matrix2::new(Vector2::new(1.0, 2.0), Vector2::new(0.0, 3.0))
    }

    fn get_matrix_2_transposed() -> Matrix2<f64> {
        Matrix2::new(Vector2::new(1.0, 0.0), Vector2::new(2.0, 3.0))
    }

    #[test]
    fn row_major_construction() {
        let m = Matrix2::from_row_major([1, 2, 3, 4]);
        assert_eq!(m[0], Vector2::new(1, 3));
        assert_eq!(m[1], Vector2::new(2, 4));
        assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
        assert_eq!(m, Matrix2::from_rows([Vector2::new(1, 2), Vector2::new(3, 4)]));
        assert_eq!(m, Matrix2::from_column_major([1, 3, 2, 4]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix2::from_row_major([1, 2, 3, 4]).determinant(), -2);
        assert_eq!(get_matrix_2().determinant(), 3.0);
    }

    #[test]
    fn inverse() {
        let m = Matrix2::<f64>::from_row_major([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            m.inverse(),
            Ok(Matrix2::from_row_major([-2.0, 1.0, 1.5, -0.5]))
        );
        let m = get_matrix_2();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq_eps(&Matrix2::identity(), 1e-12));
        assert!((inv * m).approx_eq_eps(&Matrix2::identity(), 1e-12));
    }

    #[test]
    fn integer_inverse_through_cast() {
        let m = Matrix2::from_row_major([1, 2, 3, 4]);
        assert_eq!(m * m.adjugate(), Matrix2::diagonal(-2));
        let inv = m.cast::<f64>().map(|m| m.inverse());
        assert_eq!(inv, Some(Ok(Matrix2::from_row_major([-2.0, 1.0, 1.5, -0.5]))));
        let exact = m.cast::<f64>().zip(inv.and_then(Result::ok)).map(|(m, inv)| m * inv);
        assert_eq!(exact, Some(Matrix2::identity()));
    }

    #[test]
    fn singular_inverse() {
        let m = Matrix2::from_row_major([1.0f32, 2.0, 2.0, 4.0]);
        assert_eq!(
            m.inverse(),
            Err(MathError::Domain(DomainError::SingularMatrix))
        );
    }

    #[test]
    fn mul() {
        let m = get_matrix_2();
        assert_eq!(m * Matrix2::identity(), m);
        assert_eq!(Matrix2::identity() * m, m);
        let a = Matrix2::from_row_major([1, 2, 3, 4]);
        let b = Matrix2::from_row_major([5, 6, 7, 8]);
        assert_eq!(a * b, Matrix2::from_row_major([19, 22, 43, 50]));
        assert_eq!(b * a, Matrix2::from_row_major([23, 34, 31, 46]));
        assert_eq!(a * Vector2::new(1, 1), Vector2::new(3, 7));
    }

    #[test]
    fn float_mul_keeps_small_entries() {
        let a = Matrix2::from_row_major([1.0e5f32, 3.0e-4, -2.0, 1.0e-3]);
        let b = Matrix2::from_row_major([1.0e-4f32, 7.0, 1.0e6, -5.0e-5]);
        let product = a * b;
        for row in 0..2 {
            for col in 0..2 {
                let expected = a[0][row] * b[col][0] + a[1][row] * b[col][1];
                assert_eq!(product[col][row], expected);
            }
        }
    }

    #[test]
    fn trace() {
        assert_eq!(get_matrix_2().trace(), 4.0);
    }

    #[test]
    fn transpose() {
        assert_eq!(get_matrix_2().transpose(), get_matrix_2_transposed());
    }

    #[test]
    fn minor() {
        let m = Matrix2::from_row_major([1, 2, 3, 4]);
        assert_eq!(m.minor(0, 0), Ok(4));
        assert_eq!(m.minor(0, 1), Ok(3));
        assert_eq!(m.cofactor(0, 1), Ok(-3));
        assert_eq!(m.minor(2, 0), Err(MathError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(m.cofactor(0, 2), Err(MathError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn scalar_ops() {
        let m = Matrix2::<f64>::from_row_major([2.0, 4.0, 6.0, 8.0]);
        assert_eq!(m.try_div(2.0), Ok(Matrix2::from_row_major([1.0, 2.0, 3.0, 4.0])));
        assert_eq!(m.try_div(0.0), Err(MathError::Domain(DomainError::DivisionByZero)));
        assert_eq!(0.5 * m, m * 0.5);
        let mut n = m;
        n *= 2.0;
        n -= m;
        assert_eq!(n, m);
    }

    #[test]
    fn display() {
        let m = Matrix2::from_row_major([1, 2, 3, 4]);
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
    }
}

#[cfg(test)]
mod test_matrix_3 {
    use super::{Matrix2, Matrix3, Matrix4, MatrixOps};
    use crate::{
        error::MathError,
        types::{Vector2, Vector3, VectorOps},
    };

    fn get_matrix_3() -> Matrix3<f64> {
        Matrix3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 4.0, 5.0),
            Vector3::new(0.0, 0.0, 6.0),
        )
    }

    fn naive<M: MatrixOps<i32>>(a: M, b: M) -> M {
        M::from_fn(|row, col| {
            (0..M::DIM)
                .map(|k| a.columns()[k][row] * b.columns()[col][k])
                .sum()
        })
    }

    #[test]
    fn mul() {
        let a = Matrix3::from_row_major([1, 2, 3, 4, 5, 6, 7, 8, 10]);
        let b = Matrix3::from_row_major([2, 0, 1, 1, 3, 2, 0, 1, 4]);
        assert_eq!(
            a * b,
            Matrix3::from_row_major([4, 9, 17, 13, 21, 38, 22, 34, 63])
        );
        assert_eq!(b * a, naive(b, a));
        let m = get_matrix_3();
        assert_eq!(m * Matrix3::identity(), m);
        assert_eq!(Matrix3::identity() * m, m);
    }

    #[test]
    fn float_mul_keeps_small_entries() {
        let t = Matrix3::translation_2d(Vector2::new(1.0e5f32, -3.0e4));
        let s = Matrix3::uniform_scaling_2d(1.0e-4f32);
        let ts = t * s;
        assert_eq!(
            ts.to_cols_array(),
            [1.0e-4, 0.0, 0.0, 0.0, 1.0e-4, 0.0, 1.0e5, -3.0e4, 1.0]
        );
    }

    #[test]
    fn determinant() {
        let a = Matrix3::from_row_major([1, 2, 3, 4, 5, 6, 7, 8, 10]);
        assert_eq!(a.determinant(), -3);
        assert_eq!(get_matrix_3().determinant(), 24.0);
    }

    #[test]
    fn adjugate() {
        let a = Matrix3::from_row_major([1, 2, 3, 4, 5, 6, 7, 8, 10]);
        assert_eq!(a * a.adjugate(), Matrix3::diagonal(-3));
        assert_eq!(a.adjugate() * a, Matrix3::diagonal(-3));
        assert_eq!(a.cofactor_matrix().transpose(), a.adjugate());
    }

    #[test]
    fn inverse() {
        let m = get_matrix_3();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq_eps(&Matrix3::identity(), 1e-12));
        assert!((inv * m).approx_eq_eps(&Matrix3::identity(), 1e-12));
    }

    #[test]
    fn trace() {
        assert_eq!(get_matrix_3().trace(), 11.0);
    }

    #[test]
    fn accessors() {
        let m = Matrix3::from_row_major([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.row(1), Ok(Vector3::new(4, 5, 6)));
        assert_eq!(m.col(1), Ok(Vector3::new(2, 5, 8)));
        assert_eq!(m.col(3), Err(MathError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(m.row(7), Err(MathError::OutOfRange { index: 7, len: 3 }));
        assert_eq!(m.minor(0, 0), Ok(Matrix2::from_row_major([5, 6, 8, 9])));
        assert_eq!(m.minor(1, 2), Ok(Matrix2::from_row_major([1, 2, 7, 8])));
        assert_eq!(m.minor(3, 0), Err(MathError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(m.transpose().row(1), m.col(1));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let m = Matrix3::<f32>::identity();
        let _ = m[3];
    }

    #[test]
    fn gram_schmidt() {
        let m = Matrix3::new(
            Vector3::new(1.0f64, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 1.0),
        );
        let q = m.gram_schmidt();
        assert!((q.transpose() * q).approx_eq_eps(&Matrix3::identity(), 1e-12));
        assert_eq!(q[0], Vector3::new(1.0, 1.0, 0.0).normalize());
    }

    #[test]
    fn gram_schmidt_dependent_columns() {
        let m = Matrix3::new(
            Vector3::new(1.0f64, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
        );
        let q = m.gram_schmidt();
        assert_eq!(q[0], Vector3::x());
        assert_eq!(q[1], Vector3::zero());
        assert_eq!(q[2], Vector3::y());
        assert!(q.is_finite());
        assert_eq!(Matrix3::<f64>::zero().gram_schmidt(), Matrix3::zero());
    }

    #[test]
    fn conversions() {
        let m = Matrix3::from_row_major([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let m4 = Matrix4::from(m);
        assert_eq!(m4[3][3], 1);
        assert_eq!(m4[3][0], 0);
        assert_eq!(m4[0][3], 0);
        assert_eq!(Matrix3::from(m4), m);
        assert_eq!(
            Matrix2::from(m),
            Matrix2::from_row_major([1, 2, 4, 5])
        );
        assert_eq!(Matrix3::from(Matrix2::from(m))[2], Vector3::z());
        assert_eq!(m.cast::<f32>().map(|m| m.trace()), Some(15.0));
        assert_eq!(m.to_cols_array(), [1, 4, 7, 2, 5, 8, 3, 6, 9]);
    }
}


/// Behaviour shared by [`Matrix2`], [`Matrix3`] and [`Matrix4`].
///
/// Matrices are stored as columns: `m.columns()[j][i]` is the entry at row `i`,
/// column `j`.
pub trait MatrixOps<T: Scalar>:
    Copy
    + Default
    + Debug
    + PartialEq
    + Pod
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<T, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<T>
{
    type Column: VectorOps<T>;

    const DIM: usize;

    fn from_columns_fn<F: FnMut(usize) -> Self::Column>(f: F) -> Self;

    fn columns(&self) -> &[Self::Column];

    fn columns_mut(&mut self) -> &mut [Self::Column];

    /// Determinant of the submatrix left after deleting `row` and `col`.
    ///
    /// Panics on an index out of range; [`MatrixOps::cofactor`] is the checked form.
    fn minor_determinant(&self, row: usize, col: usize) -> T;

    #[inline]
    fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_columns_fn(|col| <Self::Column as VectorOps<T>>::from_fn(|row| f(row, col)))
    }

    #[inline]
    fn diagonal(value: T) -> Self {
        Self::from_fn(|row, col| if row == col { value } else { T::zero() })
    }

    #[inline]
    fn identity() -> Self {
        Self::diagonal(T::one())
    }

    #[inline]
    fn zero() -> Self {
        Self::diagonal(T::zero())
    }

    #[inline]
    fn col(&self, col: usize) -> MathResult<Self::Column> {
        check_index(col, Self::DIM)?;
        Ok(self.columns()[col])
    }

    #[inline]
    fn row(&self, row: usize) -> MathResult<Self::Column> {
        check_index(row, Self::DIM)?;
        Ok(<Self::Column as VectorOps<T>>::from_fn(|col| {
            self.columns()[col][row]
        }))
    }

    #[inline]
    fn transpose(self) -> Self {
        Self::from_fn(|row, col| self.columns()[row][col])
    }

    #[inline]
    fn trace(self) -> T {
        (0..Self::DIM).fold(T::zero(), |acc, i| acc + self.columns()[i][i])
    }

    #[inline]
    fn mul_vector(self, rhs: Self::Column) -> Self::Column {
        self.columns()
            .iter()
            .enumerate()
            .fold(<Self::Column as VectorOps<T>>::zero(), |acc, (j, col)| {
                acc + *col * rhs[j]
            })
    }

    /// Laplace expansion along the first row.
    #[inline]
    fn determinant(self) -> T {
        (0..Self::DIM).fold(T::zero(), |acc, col| {
            acc + self.columns()[col][0] * checkerboard(self.minor_determinant(0, col), 0, col)
        })
    }

    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> MathResult<T> {
        check_index(row, Self::DIM)?;
        check_index(col, Self::DIM)?;
        Ok(checkerboard(self.minor_determinant(row, col), row, col))
    }

    #[inline]
    fn cofactor_matrix(self) -> Self {
        Self::from_fn(|row, col| checkerboard(self.minor_determinant(row, col), row, col))
    }

    #[inline]
    fn adjugate(self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Adjugate divided by the determinant.
    ///
    /// Only an exactly zero determinant is rejected, nearly singular matrices
    /// produce large entries. Integer matrices have no inverse in their own
    /// type; use [`MatrixOps::adjugate`] or cast first.
    #[inline]
    fn inverse(self) -> MathResult<Self>
    where
        T: Real,
    {
        let det = self.determinant();
        if det == T::zero() {
            return Err(DomainError::SingularMatrix.into());
        }
        self.adjugate().try_div(det)
    }

    #[inline]
    fn try_div(self, rhs: T) -> MathResult<Self> {
        if rhs == T::zero() {
            return Err(DomainError::DivisionByZero.into());
        }
        Ok(Self::from_columns_fn(|j| self.columns()[j].map(|c| c / rhs)))
    }

    #[inline]
    fn try_div_assign(&mut self, rhs: T) -> MathResult<()> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    #[inline]
    fn gram_schmidt(self) -> Self
    where
        T: Real,
    {
        self.gram_schmidt_with_epsilon(T::epsilon())
    }

    /// Modified Gram-Schmidt over the columns, left to right.
    ///
    /// A column whose residual norm does not exceed
    /// `1000 * N * eps * max_column_norm` is linearly dependent on the
    /// previous ones and stays zero in the result.
    fn gram_schmidt_with_epsilon(self, eps: T) -> Self
    where
        T: Real,
    {
        let max_norm = self
            .columns()
            .iter()
            .fold(T::zero(), |acc, col| Float::max(acc, col.length()));
        let tolerance = scalar::lit::<T>((1000 * Self::DIM) as f64) * eps * max_norm;

        let mut basis = Self::zero();
        for j in 0..Self::DIM {
            let mut residual = self.columns()[j];
            for k in 0..j {
                let e = basis.columns()[k];
                residual -= e * e.dot(residual);
            }
            let norm = residual.length();
            if norm > tolerance {
                basis.columns_mut()[j] = residual.map(|c| c / norm);
            }
        }
        basis
    }

    /// Column-major view of the entries, ready for uniform upload.
    #[inline]
    fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(self.columns())
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    #[inline]
    fn approx_eq_eps(&self, rhs: &Self, eps: T) -> bool
    where
        T: Real,
    {
        self.columns()
            .iter()
            .zip(rhs.columns())
            .all(|(a, b)| a.approx_eq_eps(*b, eps))
    }

    #[inline]
    fn is_finite(&self) -> bool
    where
        T: Real,
    {
        self.columns().iter().all(|col| col.is_finite())
    }
}

/// Textbook product, each entry summed over `k` in ascending order.
///
/// Strassen's step cancels large partial sums against each other, which loses
/// small entries under rounding, so it is only used for exact scalars.
#[inline]
fn row_by_column<T: Scalar, M: MatrixOps<T>>(lhs: M, rhs: M) -> M {
    M::from_fn(|row, col| {
        (0..M::DIM).fold(T::zero(), |acc, k| {
            acc + lhs.columns()[k][row] * rhs.columns()[col][k]
        })
    })
}

#[inline]
fn checkerboard<T: Scalar>(value: T, row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        value
    } else {
        -value
    }
}

/// Index into the matrix that still has index `removed`, given an index into its minor.
#[inline]
fn skip(index: usize, removed: usize) -> usize {
    if index < removed {
        index
    } else {
        index + 1
    }
}

#[inline]
fn assert_minor_index(row: usize, col: usize, dim: usize, name: &str) {
    if row >= dim || col >= dim {
        panic!("Invalid minor ({}, {}) for {}!", row, col, name);
    }
}

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $dim:literal, $len:literal, $($col:ident),+) => {
        impl<T: Scalar> MatrixOps<T> for $name<T> {
            type Column = $vec<T>;

            const DIM: usize = $dim;

            #[inline]
            fn from_columns_fn<F: FnMut(usize) -> Self::Column>(f: F) -> Self {
                Self {
                    columns: std::array::from_fn(f),
                }
            }

            #[inline]
            fn columns(&self) -> &[Self::Column] {
                &self.columns
            }

            #[inline]
            fn columns_mut(&mut self) -> &mut [Self::Column] {
                &mut self.columns
            }

            #[inline]
            fn minor_determinant(&self, row: usize, col: usize) -> T {
                assert_minor_index(row, col, $dim, stringify!($name));
                self.minor_determinant_unchecked(row, col)
            }
        }

        impl<T: Scalar> $name<T> {
            #[inline]
            pub const fn new($($col: $vec<T>),+) -> Self {
                Self {
                    columns: [$($col),+],
                }
            }

            #[inline]
            pub const fn from_columns(columns: [$vec<T>; $dim]) -> Self {
                Self { columns }
            }

            #[inline]
            pub fn from_rows(rows: [$vec<T>; $dim]) -> Self {
                Self::from_fn(|row, col| rows[row][col])
            }

            /// Entries in the order they are read on paper, row after row.
            #[inline]
            pub fn from_row_major(values: [T; $len]) -> Self {
                Self::from_fn(|row, col| values[row * $dim + col])
            }

            #[inline]
            pub fn from_column_major(values: [T; $len]) -> Self {
                Self::from_fn(|row, col| values[col * $dim + row])
            }

            #[inline]
            pub fn to_cols_array(self) -> [T; $len] {
                std::array::from_fn(|k| self.columns[k / $dim][k % $dim])
            }

            #[inline]
            pub fn cast<U: Scalar>(self) -> Option<$name<U>> {
                let mut columns = [$vec::<U>::default(); $dim];
                for (dst, src) in columns.iter_mut().zip(self.columns) {
                    *dst = src.cast()?;
                }
                Some($name { columns })
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = $vec<T>;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match self.columns.get(index) {
                    Some(col) => col,
                    None => panic!("Invalid index {} for {}!", index, stringify!($name)),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match self.columns.get_mut(index) {
                    Some(col) => col,
                    None => panic!("Invalid index {} for {}!", index, stringify!($name)),
                }
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self {
                    columns: self.columns.map(|col| -col),
                }
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self::from_columns_fn(|j| self.columns[j] + rhs.columns[j])
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self::from_columns_fn(|j| self.columns[j] - rhs.columns[j])
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    columns: self.columns.map(|col| col * rhs),
                }
            }
        }

        impl<T: Scalar> Mul<$vec<T>> for $name<T> {
            type Output = $vec<T>;
            #[inline]
            fn mul(self, rhs: $vec<T>) -> Self::Output {
                self.mul_vector(rhs)
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.columns
                    .iter()
                    .zip(other.columns.iter())
                    .all(|(a, b)| a == b)
            }
        }

        impl<T: Scalar> Display for $name<T> {
            fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
                write!(f, "[")?;
                for row in 0..$dim {
                    if row > 0 {
                        write!(f, ",\n ")?;
                    }
                    write!(f, "[")?;
                    for col in 0..$dim {
                        if col > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.columns[col][row])?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }

        unsafe impl<T: Zeroable> Zeroable for $name<T> {}

        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix2<$t>> for $t {
                type Output = Matrix2<$t>;
                #[inline]
                fn mul(self, rhs: Matrix2<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<Matrix3<$t>> for $t {
                type Output = Matrix3<$t>;
                #[inline]
                fn mul(self, rhs: Matrix3<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<Matrix4<$t>> for $t {
                type Output = Matrix4<$t>;
                #[inline]
                fn mul(self, rhs: Matrix4<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix2<T = f32> {
    pub columns: [Vector2<T>; 2],
}

impl_matrix!(Matrix2, Vector2, 2, 4, i, j);

impl<T: Scalar> Mul for Matrix2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        if T::EXACT {
            Self::from_row_major(strassen(self.blocks(), rhs.blocks()))
        } else {
            row_by_column(self, rhs)
        }
    }
}

impl<T: Scalar> From<Matrix3<T>> for Matrix2<T> {
    #[inline]
    fn from(value: Matrix3<T>) -> Self {
        Self::new(value[0].into(), value[1].into())
    }
}

impl<T: Scalar> Matrix2<T> {
    /// The single entry left after deleting `row` and `col`.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> MathResult<T> {
        check_index(row, 2)?;
        check_index(col, 2)?;
        Ok(self.minor_unchecked(row, col))
    }

    #[inline]
    fn minor_unchecked(&self, row: usize, col: usize) -> T {
        self.columns[1 - col][1 - row]
    }

    #[inline]
    fn minor_determinant_unchecked(&self, row: usize, col: usize) -> T {
        self.minor_unchecked(row, col)
    }

    /// Entries as `[a11, a12, a21, a22]`.
    #[inline]
    fn blocks(self) -> [T; 4] {
        let [i, j] = self.columns;
        [i.x, j.x, i.y, j.y]
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix3<T = f32> {
    pub columns: [Vector3<T>; 3],
}

impl_matrix!(Matrix3, Vector3, 3, 9, i, j, k);

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        if T::EXACT {
            (Matrix4::from(self) * Matrix4::from(rhs)).into()
        } else {
            row_by_column(self, rhs)
        }
    }
}

impl<T: Scalar> From<Matrix2<T>> for Matrix3<T> {
    #[inline]
    fn from(value: Matrix2<T>) -> Self {
        Self::new(value[0].into(), value[1].into(), Vector3::z())
    }
}

impl<T: Scalar> From<Matrix4<T>> for Matrix3<T> {
    #[inline]
    fn from(value: Matrix4<T>) -> Self {
        Self::new(value[0].into(), value[1].into(), value[2].into())
    }
}

impl<T: Scalar> Matrix3<T> {
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> MathResult<Matrix2<T>> {
        check_index(row, 3)?;
        check_index(col, 3)?;
        Ok(self.minor_unchecked(row, col))
    }

    #[inline]
    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix2<T> {
        Matrix2::from_fn(|r, c| self.columns[skip(c, col)][skip(r, row)])
    }

    #[inline]
    fn minor_determinant_unchecked(&self, row: usize, col: usize) -> T {
        self.minor_unchecked(row, col).determinant()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix4<T = f32> {
    pub columns: [Vector4<T>; 4],
}

impl_matrix!(Matrix4, Vector4, 4, 16, i, j, k, l);

impl<T: Scalar> Mul for Matrix4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        if T::EXACT {
            Self::from_blocks(strassen(self.blocks(), rhs.blocks()))
        } else {
            row_by_column(self, rhs)
        }
    }
}

impl<T: Scalar> From<Matrix3<T>> for Matrix4<T> {
    #[inline]
    fn from(value: Matrix3<T>) -> Self {
        Self::new(
            value[0].into(),
            value[1].into(),
            value[2].into(),
            Vector4::w(),
        )
    }
}

impl<T: Scalar> Matrix4<T> {
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> MathResult<Matrix3<T>> {
        check_index(row, 4)?;
        check_index(col, 4)?;
        Ok(self.minor_unchecked(row, col))
    }

    #[inline]
    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix3<T> {
        Matrix3::from_fn(|r, c| self.columns[skip(c, col)][skip(r, row)])
    }

    #[inline]
    fn minor_determinant_unchecked(&self, row: usize, col: usize) -> T {
        self.minor_unchecked(row, col).determinant()
    }

    /// 2x2 blocks as `[a11, a12, a21, a22]`.
    #[inline]
    fn blocks(self) -> [Matrix2<T>; 4] {
        let block = |row: usize, col: usize| {
            Matrix2::from_fn(|r, c| self.columns[col + c][row + r])
        };
        [block(0, 0), block(0, 2), block(2, 0), block(2, 2)]
    }

    #[inline]
    fn from_blocks(blocks: [Matrix2<T>; 4]) -> Self {
        Self::from_fn(|row, col| blocks[(row / 2) * 2 + col / 2].columns[col % 2][row % 2])
    }
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, f32, f64);
