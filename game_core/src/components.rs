use glam::Vec2;

use crate::map::Aabb;

/// Obstacle component - one pillar slot in the recycling pool
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2, // Centre, world coordinates
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Marker for non-moving, gravity-free collision bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBody;

/// Marker for the player-controlled character
#[derive(Debug, Clone, Copy, Default)]
pub struct Character;

/// Dynamic body driven by the physics simulation
#[derive(Debug, Clone, Copy)]
pub struct RigidBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub mass: f32,
    pub affected_by_gravity: bool,
    pub allows_rotation: bool,
}

impl RigidBody {
    pub fn new(pos: Vec2, size: Vec2, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            mass,
            affected_by_gravity: true,
            allows_rotation: false,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }
}
