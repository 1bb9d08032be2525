use bytemuck::{Pod, Zeroable};
use math::{
    scalar::{clamp, radians},
    types::{Matrix4, Vector3, VectorOps},
};

use crate::{
    error::{SceneError, SceneResult},
    input::CameraMovement,
};

#[cfg(test)]
mod test_camera {
    use approx::assert_abs_diff_eq;
    use math::types::{Matrix4, MatrixOps, Vector3, Vector4, VectorOps};

    use super::{Camera, CameraConfig};
    use crate::{error::SceneError, input::CameraMovement};

    #[test]
    fn default_basis() {
        let camera = Camera::default();
        assert_eq!(camera.front(), -Vector3::z());
        assert_eq!(camera.right(), Vector3::x());
        assert_eq!(camera.up(), Vector3::y());
        assert_eq!(camera.view_matrix(), Matrix4::identity());
    }

    #[test]
    fn keyboard_moves_along_basis() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        assert_eq!(camera.position(), Vector3::new(0.0, 0.0, -5.0));
        camera.process_keyboard(CameraMovement::Right, 0.1);
        assert_eq!(camera.position(), Vector3::new(1.0, 0.0, -5.0));
        camera.process_keyboard(CameraMovement::Backward, 0.5);
        camera.process_keyboard(CameraMovement::Left, 0.1);
        assert_eq!(camera.position(), Vector3::zero());
    }

    #[test]
    fn mouse_turns_camera() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(900.0, 0.0, true);
        assert_abs_diff_eq!(camera.yaw(), 0.0, epsilon = 1e-4);
        assert_eq!(camera.front(), Vector3::x());
        assert_eq!(camera.right(), Vector3::z());
    }

    #[test]
    fn pitch_is_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 5000.0, true);
        assert_eq!(camera.pitch(), 89.0);
        camera.process_mouse_movement(0.0, -5000.0, true);
        assert_eq!(camera.pitch(), -89.0);
        camera.process_mouse_movement(0.0, -1000.0, false);
        assert_abs_diff_eq!(camera.pitch(), -189.0, epsilon = 1e-3);
    }

    #[test]
    fn scroll_clamps_zoom() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn view_matrix_moves_world() {
        let config = CameraConfig::builder()
            .with_position(Vector3::new(0.0, 0.0, 3.0))
            .build()
            .unwrap();
        let camera = Camera::new(config);
        let p = camera.view_matrix() * Vector4::point(Vector3::zero());
        assert_eq!(p, Vector4::point(Vector3::new(0.0, 0.0, -3.0)));
    }

    #[test]
    fn matrices() {
        let camera = Camera::default();
        let matrices = camera.matrices(16.0 / 9.0);
        assert_eq!(
            matrices.proj,
            Matrix4::perspective(45.0f32.to_radians(), 16.0 / 9.0, 0.1, 100.0)
        );
        assert_eq!(bytemuck::bytes_of(&matrices).len(), 128);
    }

    #[test]
    fn config_validation() {
        assert!(CameraConfig::builder().build().is_ok());
        let invalid = [
            CameraConfig::builder().with_speed(0.0).build(),
            CameraConfig::builder().with_sensitivity(-1.0).build(),
            CameraConfig::builder().with_zoom_range(30.0, 10.0).build(),
            CameraConfig::builder().with_zoom(60.0).build(),
            CameraConfig::builder().with_clip_planes(1.0, 0.5).build(),
            CameraConfig::builder().with_clip_planes(0.0, 10.0).build(),
            CameraConfig::builder().with_world_up(Vector3::zero()).build(),
            CameraConfig::builder().with_orientation(0.0, 95.0).build(),
        ];
        for result in invalid {
            assert!(matches!(result, Err(SceneError::InvalidConfig(_))));
        }
    }
}

const PITCH_LIMIT: f32 = 89.0;

/// View and projection matrices laid out for a single uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct CameraMatrices {
    pub view: Matrix4,
    pub proj: Matrix4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: Vector3,
    pub world_up: Vector3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            world_up: Vector3::up(),
            yaw: -90.0,
            pitch: 0.0,
            speed: 10.0,
            sensitivity: 0.1,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    pub fn builder() -> CameraConfigBuilder {
        CameraConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CameraConfigBuilder {
    config: CameraConfig,
}

impl CameraConfigBuilder {
    pub fn build(self) -> SceneResult<CameraConfig> {
        let config = self.config;
        if !(config.speed > 0.0) {
            return Err(SceneError::InvalidConfig("movement speed must be positive"));
        }
        if !(config.sensitivity > 0.0) {
            return Err(SceneError::InvalidConfig("mouse sensitivity must be positive"));
        }
        let zoom_range = config.min_zoom > 0.0
            && config.min_zoom <= config.max_zoom
            && config.max_zoom < 180.0;
        if !zoom_range {
            return Err(SceneError::InvalidConfig("zoom range must lie within (0, 180) degrees"));
        }
        if !(config.zoom >= config.min_zoom && config.zoom <= config.max_zoom) {
            return Err(SceneError::InvalidConfig("zoom must lie within the zoom range"));
        }
        if !(config.near > 0.0 && config.far > config.near) {
            return Err(SceneError::InvalidConfig("clip planes must satisfy 0 < near < far"));
        }
        if !(config.pitch.abs() <= PITCH_LIMIT) {
            return Err(SceneError::InvalidConfig("pitch must lie within [-89, 89] degrees"));
        }
        if config.world_up.length() == 0.0 {
            return Err(SceneError::InvalidConfig("world up must be non zero"));
        }
        Ok(config)
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.config.position = position;
        self
    }

    pub fn with_world_up(mut self, world_up: Vector3) -> Self {
        self.config.world_up = world_up;
        self
    }

    /// Yaw and pitch in degrees.
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.config.yaw = yaw;
        self.config.pitch = pitch;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.config.speed = speed;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.config.sensitivity = sensitivity;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.config.zoom = zoom;
        self
    }

    pub fn with_zoom_range(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.config.near = near;
        self.config.far = far;
        self
    }
}

/// Euler-angle fly camera.
///
/// Yaw, pitch and zoom are kept in degrees. The orientation basis is derived
/// from them every time they change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vector3,
    front: Vector3,
    up: Vector3,
    right: Vector3,
    world_up: Vector3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            front: -Vector3::z(),
            up: config.world_up,
            right: Vector3::x(),
            world_up: config.world_up,
            yaw: config.yaw,
            pitch: config.pitch,
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom: config.zoom,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            near: config.near,
            far: config.far,
        };
        camera.update_vectors();
        camera
    }

    #[inline]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    #[inline]
    pub fn front(&self) -> Vector3 {
        self.front
    }

    #[inline]
    pub fn up(&self) -> Vector3 {
        self.up
    }

    #[inline]
    pub fn right(&self) -> Vector3 {
        self.right
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;
        if constrain_pitch {
            self.pitch = clamp(self.pitch, -PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = clamp(self.zoom - y_offset, self.min_zoom, self.max_zoom);
    }

    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4 {
        Matrix4::perspective(radians(self.zoom), aspect_ratio, self.near, self.far)
    }

    pub fn matrices(&self, aspect_ratio: f32) -> CameraMatrices {
        CameraMatrices {
            view: self.view_matrix(),
            proj: self.projection_matrix(aspect_ratio),
        }
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (radians(self.yaw), radians(self.pitch));
        self.front = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
