mod log;

use std::error::Error;

use math::types::{Vector3, VectorOps};
use scene::{
    Camera, CameraConfig, CameraMovement, CursorTracker, DrawCall, Scene, Shading,
    ShadingUniforms, ShapeDescriptor, ShapeKind,
};


/// Headless run parameters, overridden by positional arguments
/// `[frames] [time step] [aspect ratio]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SandboxConfig {
    frames: usize,
    delta_time: f32,
    aspect_ratio: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            frames: 8,
            delta_time: 1.0 / 60.0,
            aspect_ratio: 800.0 / 600.0,
        }
    }
}

impl SandboxConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let mut config = Self::default();
        if let Some(frames) = args.next() {
            config.frames = frames.parse()?;
        }
        if let Some(delta_time) = args.next() {
            config.delta_time = delta_time.parse()?;
        }
        if let Some(aspect_ratio) = args.next() {
            config.aspect_ratio = aspect_ratio.parse()?;
        }
        if !(config.delta_time > 0.0) || !(config.aspect_ratio > 0.0) {
            return Err("time step and aspect ratio must be positive".into());
        }
        Ok(config)
    }
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_shape(
        ShapeDescriptor::new(ShapeKind::Cube)
            .with_tag("container")
            .with_shading(Shading::Lighting)
            .with_color(Vector3::new(1.0, 0.5, 0.31))
            .with_rotation(Vector3::new(1.0, 0.3, 0.5), 20.0)
            .with_rotation_speed(50.0),
    );
    scene.add_shape(
        ShapeDescriptor::new(ShapeKind::Cube)
            .with_tag("lamp")
            .with_shading(Shading::Source)
            .with_scale(Vector3::splat(0.2)),
    );
    scene.add_shape(
        ShapeDescriptor::new(ShapeKind::Square)
            .with_tag("floor")
            .with_position(Vector3::new(0.0, -1.0, 0.0))
            .with_rotation(Vector3::x(), -90.0)
            .with_scale(Vector3::splat(10.0))
            .with_color(Vector3::splat(0.4))
            .with_wireframe(true),
    );
    scene.add_shape(
        ShapeDescriptor::new(ShapeKind::Circle)
            .with_tag("marker")
            .with_position(Vector3::new(-2.0, 0.5, -1.0))
            .with_rotation_speed(-30.0)
            .with_shininess(64.0)
            .with_shading(Shading::Lighting),
    );
    scene
}

/// Scripted stand-in for window events: WASD keys and a cursor drawing a circle.
fn scripted_input(frame: usize) -> (Option<CameraMovement>, (f32, f32), f32) {
    let key = "wwddssaa".chars().nth(frame % 8).and_then(CameraMovement::from_key);
    let angle = frame as f32 * 0.25;
    let cursor = (400.0 + 40.0 * angle.cos(), 300.0 + 40.0 * angle.sin());
    let scroll = if frame % 4 == 3 { 1.0 } else { 0.0 };
    (key, cursor, scroll)
}

fn describe(call: &DrawCall) -> String {
    let shading = match call.uniforms {
        ShadingUniforms::Color(color) => format!("color {}", color),
        ShadingUniforms::Lighting(uniforms) => format!(
            "lit light {} shine {} ({} bytes)",
            uniforms.light_position,
            uniforms.shininess,
            bytemuck::bytes_of(&uniforms).len()
        ),
    };
    format!(
        "{} {}{} origin {} {}",
        call.shape,
        call.kind,
        if call.wireframe { " wireframe" } else { "" },
        call.model[3].xyz(),
        shading
    )
}

fn run(config: SandboxConfig) -> Result<(), Box<dyn Error>> {
    let mut scene = build_scene();
    let mut camera = Camera::new(
        CameraConfig::builder()
            .with_position(Vector3::new(0.0, 0.0, 3.0))
            .with_speed(2.5)
            .build()?,
    );
    let mut cursor = CursorTracker::new();
    log::info("SCENE", format!("{} shapes, {:?}", scene.len(), config));
    for (id, shape) in scene.shapes() {
        let summary = format!("{} {} [{}] {}", id, shape.kind(), shape.tag(), shape.shading());
        log::info("SCENE", summary);
    }

    for frame in 0..config.frames {
        let time = frame as f32 * config.delta_time;
        let (key, (x, y), scroll) = scripted_input(frame);
        if let Some(movement) = key {
            camera.process_keyboard(movement, config.delta_time);
        }
        let offset = cursor.track(x, y);
        camera.process_mouse_movement(offset.x, offset.y, true);
        camera.process_mouse_scroll(scroll);
        scene.update(time, config.delta_time);

        let calls = scene.frame(&camera, config.aspect_ratio)?;
        let Some(first) = calls.first() else {
            log::warn("FRAME", format!("{} has nothing to draw", frame));
            continue;
        };
        log::info(
            "FRAME",
            format!(
                "{} t={:.3} camera {} fov {} ({} bytes of camera uniforms)",
                frame,
                time,
                camera.position(),
                camera.zoom(),
                bytemuck::bytes_of(&first.camera).len()
            ),
        );
        for call in &calls {
            log::info("DRAW", describe(call));
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = SandboxConfig::from_args(std::env::args().skip(1))?;
    if let Err(error) = run(config) {
        log::error("SANDBOX", &error);
        return Err(error);
    }
    Ok(())
}
