use glam::Vec2;
use log::debug;

use crate::systems::physics::PhysicsBody;
use crate::Config;

/// Jump state of the controlled character
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpState {
    Grounded,
    /// Touch held while grounded; `started_at` is the first touch's timestamp
    Charging { started_at: Option<f64> },
    Airborne,
}

impl JumpState {
    pub fn is_airborne(&self) -> bool {
        matches!(self, JumpState::Airborne)
    }
}

/// Touch-duration charge jump.
///
/// Touch-down while grounded starts a charge, release launches with an
/// impulse interpolated from the hold time. Cancel resolves exactly like
/// release.
#[derive(Debug, Clone)]
pub struct ChargeJump {
    state: JumpState,
}

impl ChargeJump {
    pub fn new() -> Self {
        Self {
            state: JumpState::Grounded,
        }
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn touch_down(&mut self, timestamp: Option<f64>) {
        // Airborne or already charging: ignore
        if self.state == JumpState::Grounded {
            self.state = JumpState::Charging {
                started_at: timestamp,
            };
        }
    }

    /// Resolve a charge at `released_at`, launching `body` if one was held
    pub fn touch_up(
        &mut self,
        released_at: f64,
        body: &mut impl PhysicsBody,
        config: &Config,
    ) -> Option<Vec2> {
        let JumpState::Charging { started_at } = self.state else {
            // No charge, or already in the air: drop it without launching
            return None;
        };

        let duration = released_at - started_at.unwrap_or(released_at);
        let impulse = config.impulse_for(duration);

        body.apply_impulse(impulse);
        self.state = JumpState::Airborne;
        debug!("launch after {:.3}s hold, impulse {}", duration, impulse);

        Some(impulse)
    }

    pub fn touch_cancel(
        &mut self,
        released_at: f64,
        body: &mut impl PhysicsBody,
        config: &Config,
    ) -> Option<Vec2> {
        self.touch_up(released_at, body, config)
    }

    /// Land if the character's y is at or below `threshold`. Returns true on landing.
    pub fn update_grounded(&mut self, y: f32, threshold: f32) -> bool {
        if y > threshold {
            return false;
        }

        match self.state {
            JumpState::Airborne => {
                self.state = JumpState::Grounded;
                debug!("landed at y={}", y);
                true
            }
            // A charge in progress keeps its timestamp
            JumpState::Charging { .. } | JumpState::Grounded => false,
        }
    }
}

impl Default for ChargeJump {
    fn default() -> Self {
        Self::new()
    }
}
