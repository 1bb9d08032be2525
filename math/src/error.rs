use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    DivisionByZero,
    SingularMatrix,
    ZeroLengthVector,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            DomainError::DivisionByZero => write!(f, "Cannot divide by zero"),
            DomainError::SingularMatrix => {
                write!(f, "Determinant of matrix must be non zero to calculate inverse")
            }
            DomainError::ZeroLengthVector => {
                write!(f, "Operation undefined for zero-length vector")
            }
        }
    }
}

impl Error for DomainError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    OutOfRange { index: usize, len: usize },
    Domain(DomainError),
    InvalidArgument(&'static str),
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range for dimension {}", index, len)
            }
            MathError::Domain(error) => write!(f, "Domain error: {}", error),
            MathError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl Error for MathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MathError::Domain(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DomainError> for MathError {
    fn from(error: DomainError) -> Self {
        MathError::Domain(error)
    }
}

pub type MathResult<T> = Result<T, MathError>;

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> MathResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::OutOfRange { index, len })
    }
}
