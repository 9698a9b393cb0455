use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check horizontal overlap with a span centred at `x`
    pub fn overlaps_x(&self, x: f32, half_width: f32) -> bool {
        x + half_width > self.min.x && x - half_width < self.max.x
    }
}
