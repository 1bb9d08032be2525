use math::{
    scalar::radians,
    types::{Matrix3, Matrix4, MatrixOps, Vector3, VectorOps},
};

use crate::error::SceneResult;


#[derive(strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Cube,
    Square,
    Circle,
}

/// Shader family a shape is drawn with.
#[derive(strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum Shading {
    #[default]
    Basic,
    Lighting,
    /// Emissive shape that also acts as the scene's light.
    Source,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub shading: Shading,
    pub tag: String,
    pub color: Vector3,
    pub position: Vector3,
    pub rotation_axis: Vector3,
    /// Degrees.
    pub rotation_angle: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub scale: Vector3,
    pub shininess: f32,
    pub visible: bool,
    pub wireframe: bool,
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Cube,
            shading: Shading::Basic,
            tag: "none".to_string(),
            color: Vector3::splat(1.0),
            position: Vector3::zero(),
            rotation_axis: Vector3::y(),
            rotation_angle: 0.0,
            rotation_speed: 0.0,
            scale: Vector3::splat(1.0),
            shininess: 32.0,
            visible: true,
            wireframe: false,
        }
    }
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_color(mut self, color: Vector3) -> Self {
        self.color = color;
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, axis: Vector3, angle: f32) -> Self {
        self.rotation_axis = axis;
        self.rotation_angle = angle;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }
}

/// Live shape state, animated every frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    state: ShapeDescriptor,
}

impl From<ShapeDescriptor> for Shape {
    fn from(value: ShapeDescriptor) -> Self {
        Self { state: value }
    }
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.state.kind
    }

    #[inline]
    pub fn shading(&self) -> Shading {
        self.state.shading
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.state.tag
    }

    #[inline]
    pub fn color(&self) -> Vector3 {
        self.state.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Vector3) {
        self.state.color = color;
    }

    #[inline]
    pub fn position(&self) -> Vector3 {
        self.state.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3) {
        self.state.position = position;
    }

    #[inline]
    pub fn rotation_angle(&self) -> f32 {
        self.state.rotation_angle
    }

    #[inline]
    pub fn shininess(&self) -> f32 {
        self.state.shininess
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    #[inline]
    pub fn is_wireframe(&self) -> bool {
        self.state.wireframe
    }

    #[inline]
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.state.wireframe = wireframe;
    }

    #[inline]
    pub fn advance(&mut self, delta_time: f32) {
        self.state.rotation_angle += self.state.rotation_speed * delta_time;
    }

    pub fn model_matrix(&self) -> Matrix4 {
        Matrix4::identity()
            .translate(self.state.position)
            .rotate(radians(self.state.rotation_angle), self.state.rotation_axis)
            .scale(self.state.scale)
    }

    /// Fails when the model transform collapses a dimension.
    pub fn normal_matrix(&self) -> SceneResult<Matrix3> {
        Ok(self.model_matrix().normal_matrix()?)
    }
}
