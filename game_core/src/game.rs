//! Game session
//!
//! Owns the world and every resource, and serialises host callbacks
//! (frame ticks and touches) onto one sequence.

use glam::Vec2;
use hecs::{Entity, World};
use log::info;

use crate::params::Params;
use crate::{
    create_character, step, ChargeJump, Config, EventQueue, Events, HostEvent, JumpState,
    ObstacleTrack, PhysicsBody, Progression, RigidBody, Scroll, Time,
};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub scroll: Scroll,
    pub progression: Progression,
    pub track: ObstacleTrack,
    pub jump: ChargeJump,
    pub character: Entity,
    pub events: Events,
    pub queue: EventQueue,
    last_tick: Option<f64>,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let track = ObstacleTrack::from_config(&mut world, &config);
        let ground_y = track
            .ground_threshold(&world, &config)
            .unwrap_or(config.pillar_y + config.pillar_size.y / 2.0 + config.ground_offset);
        let character = create_character(&mut world, &config, ground_y);

        info!(
            "scene ready: {} obstacles, pitch {}, character at ({}, {})",
            track.len(),
            track.pitch(),
            config.character_spawn_x(),
            ground_y
        );

        Self {
            world,
            time: Time::default(),
            scroll: Scroll::new(&config),
            progression: Progression::new(&config),
            track,
            jump: ChargeJump::new(),
            character,
            events: Events::new(),
            queue: EventQueue::new(),
            config,
            last_tick: None,
        }
    }

    /// Run one frame at host timestamp `now`
    pub fn tick(&mut self, now: f64) {
        let dt = match self.last_tick {
            Some(last) => ((now - last) as f32).clamp(0.0, Params::MAX_DT),
            None => Params::FIXED_DT,
        };
        self.last_tick = Some(now);
        self.time = Time::new(dt, now);

        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.scroll,
            &mut self.progression,
            &self.track,
            &mut self.jump,
            self.character,
            &mut self.events,
        );
    }

    pub fn touch_down(&mut self, timestamp: Option<f64>) {
        self.jump.touch_down(timestamp);
    }

    /// Release; a missing timestamp falls back to the last tick's clock
    pub fn touch_up(&mut self, timestamp: Option<f64>) -> Option<Vec2> {
        let released_at = timestamp.unwrap_or(self.time.now);
        let Ok(body) = self.world.query_one_mut::<&mut RigidBody>(self.character) else {
            return None;
        };

        let impulse = self.jump.touch_up(released_at, body, &self.config);
        if impulse.is_some() {
            self.events.launched = impulse;
        }
        impulse
    }

    /// Cancelled touches resolve like a normal release
    pub fn touch_cancel(&mut self, timestamp: Option<f64>) -> Option<Vec2> {
        self.touch_up(timestamp)
    }

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Tick { now } => self.tick(now),
            HostEvent::TouchBegan { timestamp } => self.touch_down(timestamp),
            HostEvent::TouchEnded { timestamp } => {
                self.touch_up(timestamp);
            }
            HostEvent::TouchCancelled { timestamp } => {
                self.touch_cancel(timestamp);
            }
        }
    }

    pub fn push(&mut self, event: HostEvent) {
        self.queue.push(event);
    }

    /// Process queued host events strictly in arrival order
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Some(event) = self.queue.pop() {
            self.handle(event);
            processed += 1;
        }
        processed
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    pub fn character_position(&self) -> Option<Vec2> {
        self.world
            .get::<&RigidBody>(self.character)
            .ok()
            .map(|body| body.position())
    }

    pub fn obstacle_positions(&self) -> Vec<Vec2> {
        self.track.positions(&self.world)
    }

    pub fn world_offset(&self) -> f32 {
        self.scroll.offset
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll.speed
    }

    pub fn jump_power_multiplier(&self) -> f32 {
        self.progression.jump_power_multiplier
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
