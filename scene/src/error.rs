use std::{
    error::Error,
    fmt::{Display, Formatter},
};

use math::MathError;

use crate::scene::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    Math(MathError),
    InvalidConfig(&'static str),
    UnknownShape(ShapeId),
}

impl Display for SceneError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SceneError::Math(error) => write!(f, "{}", error),
            SceneError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            SceneError::UnknownShape(id) => write!(f, "Unknown shape {}", id),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SceneError::Math(error) => Some(error),
            _ => None,
        }
    }
}

impl From<MathError> for SceneError {
    fn from(error: MathError) -> Self {
        SceneError::Math(error)
    }
}

pub type SceneResult<T> = Result<T, SceneError>;
