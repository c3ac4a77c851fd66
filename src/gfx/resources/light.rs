use super::color::Color;

/// Uniform ambient light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Color scaled by intensity, as the shader consumes it
    pub fn radiance(&self) -> [f32; 3] {
        let c = self.color.to_array();
        [c[0] * self.intensity, c[1] * self.intensity, c[2] * self.intensity]
    }
}
