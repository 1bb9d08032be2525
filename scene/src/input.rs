use math::types::{Vector2, VectorOps};


#[derive(
    strum::EnumIter, strum::Display, strum::EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraMovement {
    /// WASD layout, case insensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::Forward),
            's' => Some(Self::Backward),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Turns absolute cursor positions into per-event offsets.
///
/// Screen `y` grows downwards, so the vertical offset is reversed to make
/// moving the mouse up pitch the camera up.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTracker {
    last: Option<Vector2>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, x: f32, y: f32) -> Vector2 {
        let offset = match self.last {
            Some(last) => Vector2::new(x - last.x, last.y - y),
            None => Vector2::zero(),
        };
        self.last = Some(Vector2::new(x, y));
        offset
    }

    /// Forgets the last position, e.g. after the cursor was recaptured.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
