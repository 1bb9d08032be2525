use std::fmt::{Display, Formatter};

use bytemuck::{Pod, Zeroable};
use math::types::{Matrix3, Matrix4, Vector3, VectorOps};

use crate::{
    camera::{Camera, CameraMatrices},
    error::{SceneError, SceneResult},
    shape::{Shading, Shape, ShapeDescriptor, ShapeKind},
};


/// Position of a shape inside its [`Scene`], handed out in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

impl Display for ShapeId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vector3,
    pub color: Vector3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            color: Vector3::splat(1.0),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct LightingUniforms {
    pub view_position: Vector3,
    pub light_position: Vector3,
    pub light_color: Vector3,
    pub object_color: Vector3,
    pub shininess: f32,
    pub normal: Matrix3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingUniforms {
    Color(Vector3),
    Lighting(LightingUniforms),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub shape: ShapeId,
    pub kind: ShapeKind,
    pub model: Matrix4,
    pub camera: CameraMatrices,
    pub wireframe: bool,
    pub uniforms: ShadingUniforms,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, descriptor: ShapeDescriptor) -> ShapeId {
        self.shapes.push(descriptor.into());
        ShapeId(self.shapes.len() - 1)
    }

    pub fn shape(&self, id: ShapeId) -> SceneResult<&Shape> {
        self.shapes.get(id.0).ok_or(SceneError::UnknownShape(id))
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> SceneResult<&mut Shape> {
        self.shapes.get_mut(id.0).ok_or(SceneError::UnknownShape(id))
    }

    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().enumerate().map(|(index, shape)| (ShapeId(index), shape))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Light cast by the first `Source` shape, white at the origin otherwise.
    pub fn light(&self) -> Light {
        self.light_source()
            .map(|shape| Light {
                position: shape.position(),
                color: shape.color(),
            })
            .unwrap_or_default()
    }

    /// Advances every shape by `delta_time` seconds and moves the light
    /// source along its orbit for the absolute `time`.
    pub fn update(&mut self, time: f32, delta_time: f32) {
        for shape in &mut self.shapes {
            shape.advance(delta_time);
        }
        if let Some(source) = self
            .shapes
            .iter_mut()
            .find(|shape| shape.shading() == Shading::Source)
        {
            let (sin, cos) = time.sin_cos();
            source.set_position(Vector3::new(2.0 * sin, sin, 2.0 * cos));
            source.set_color(Vector3::new(0.5 * cos + 0.5, 0.5 * sin + 0.5, 0.5 * sin + 0.5));
        }
    }

    pub fn frame(&self, camera: &Camera, aspect_ratio: f32) -> SceneResult<Vec<DrawCall>> {
        let light = self.light();
        let matrices = camera.matrices(aspect_ratio);
        self.shapes()
            .filter(|(_, shape)| shape.is_visible())
            .map(|(id, shape)| -> SceneResult<DrawCall> {
                let model = shape.model_matrix();
                let uniforms = match shape.shading() {
                    Shading::Lighting => ShadingUniforms::Lighting(LightingUniforms {
                        view_position: camera.position(),
                        light_position: light.position,
                        light_color: light.color,
                        object_color: shape.color(),
                        shininess: shape.shininess(),
                        normal: model.normal_matrix()?,
                    }),
                    Shading::Basic | Shading::Source => ShadingUniforms::Color(shape.color()),
                };
                Ok(DrawCall {
                    shape: id,
                    kind: shape.kind(),
                    model,
                    camera: matrices,
                    wireframe: shape.is_wireframe(),
                    uniforms,
                })
            })
            .collect()
    }

    fn light_source(&self) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|shape| shape.shading() == Shading::Source)
    }
}
