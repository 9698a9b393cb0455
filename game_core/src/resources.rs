use std::collections::VecDeque;

use glam::Vec2;

use crate::config::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this tick
    pub now: f64, // Host timestamp of this tick, seconds
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Horizontal scroll of the world layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    pub offset: f32, // Signed; goes more negative as the world moves left
    pub speed: f32,  // World units per tick
}

impl Scroll {
    pub fn new(config: &Config) -> Self {
        Self {
            offset: -config.initial_scroll,
            speed: config.scroll_speed_initial,
        }
    }

    /// Screen-space x of a world-space x
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x + self.offset
    }

    /// World-space x of the viewport's right edge
    pub fn right_edge(&self, viewport_width: f32) -> f32 {
        -self.offset + viewport_width
    }
}

/// Difficulty progression state
///
/// `jump_power_multiplier` ramps every tick but is not applied to launch
/// impulses. It is kept so a future scaling rule has a value to read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub jump_power_multiplier: f32,
}

impl Progression {
    pub fn new(config: &Config) -> Self {
        Self {
            jump_power_multiplier: config.jump_power_initial,
        }
    }
}

/// Things that happened during the last tick or input
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub recycled: Vec<usize>,   // Slots moved back to the right edge
    pub launched: Option<Vec2>, // Impulse applied on release
    pub landed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.recycled.clear();
        self.launched = None;
        self.landed = false;
    }
}

/// Callbacks delivered by the scene host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Tick { now: f64 },
    TouchBegan { timestamp: Option<f64> },
    TouchEnded { timestamp: Option<f64> },
    TouchCancelled { timestamp: Option<f64> },
}

/// Host events in arrival order
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pub events: VecDeque<HostEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
