use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::params::Params;

/// Error loading a host-supplied configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport_width: f32,
    pub initial_scroll: f32,
    pub scroll_speed_initial: f32,
    pub scroll_acceleration: f32,
    pub pillar_count: usize,
    pub pillar_spacing: f32,
    pub pillar_size: Vec2,
    pub pillar_y: f32,
    pub jump_power_initial: f32,
    pub jump_power_increase_rate: f32,
    pub jump_power_max: f32,
    pub min_charge_duration: f64,
    pub max_charge_duration: f64,
    pub min_impulse: Vec2,
    pub max_impulse: Vec2,
    pub ground_offset: f32,
    pub character_spawn_offset: f32,
    pub character_size: Vec2,
    pub character_mass: f32,
    /// Gravity in pixels per second squared
    pub gravity: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Params::VIEWPORT_WIDTH,
            initial_scroll: Params::INITIAL_SCROLL,
            scroll_speed_initial: Params::SCROLL_SPEED_INITIAL,
            scroll_acceleration: Params::SCROLL_ACCELERATION,
            pillar_count: Params::PILLAR_COUNT,
            pillar_spacing: Params::PILLAR_SPACING,
            pillar_size: Vec2::new(Params::PILLAR_WIDTH, Params::PILLAR_HEIGHT),
            pillar_y: Params::PILLAR_Y,
            jump_power_initial: Params::JUMP_POWER_INITIAL,
            jump_power_increase_rate: Params::JUMP_POWER_INCREASE_RATE,
            jump_power_max: Params::JUMP_POWER_MAX,
            min_charge_duration: Params::MIN_CHARGE_DURATION,
            max_charge_duration: Params::MAX_CHARGE_DURATION,
            min_impulse: Vec2::new(Params::MIN_IMPULSE_X, Params::MIN_IMPULSE_Y),
            max_impulse: Vec2::new(Params::MAX_IMPULSE_X, Params::MAX_IMPULSE_Y),
            ground_offset: Params::GROUND_OFFSET,
            character_spawn_offset: Params::CHARACTER_SPAWN_OFFSET,
            character_size: Vec2::new(Params::CHARACTER_WIDTH, Params::CHARACTER_HEIGHT),
            character_mass: Params::CHARACTER_MASS,
            gravity: Vec2::new(0.0, Params::GRAVITY * Params::PIXELS_PER_METER),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalised charge in [0, 1] for a hold duration
    pub fn charge_t(&self, duration: f64) -> f32 {
        let min = self.min_charge_duration;
        let max = self.max_charge_duration;
        let clamped = duration.max(min).min(max);
        ((clamped - min) / (max - min)) as f32
    }

    /// Launch impulse for a hold duration, interpolated per axis
    pub fn impulse_for(&self, duration: f64) -> Vec2 {
        let t = self.charge_t(duration);
        self.min_impulse + t * (self.max_impulse - self.min_impulse)
    }

    /// Character y at or below which it counts as grounded
    pub fn ground_threshold(&self, obstacle_top: f32) -> f32 {
        obstacle_top + self.ground_offset
    }

    /// World x where the character spawns
    pub fn character_spawn_x(&self) -> f32 {
        self.initial_scroll + self.character_spawn_offset
    }
}
