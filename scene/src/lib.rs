//! Window-free scene state driven by the math crate: a first person camera,
//! animated shapes and the per-frame uniforms a renderer uploads.

pub mod camera;
pub mod error;
pub mod input;
pub mod scene;
pub mod shape;

pub use camera::{Camera, CameraConfig, CameraConfigBuilder, CameraMatrices};
pub use error::{SceneError, SceneResult};
pub use input::{CameraMovement, CursorTracker};
pub use scene::{DrawCall, Light, LightingUniforms, Scene, ShadingUniforms, ShapeId};
pub use shape::{Shading, Shape, ShapeDescriptor, ShapeKind};
