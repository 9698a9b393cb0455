pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use resources::*;
pub use systems::*;

use hecs::{Entity, World};

/// Advance the side-scroller by one displayed frame
///
/// The grounded check reads the character's position before this frame's
/// physics runs, and a body resting on a pillar sits below the threshold.
/// A character launched between frames is therefore `Grounded` again on the
/// next tick while still rising, and a further touch-down/up in that window
/// stacks a second impulse on top of the first.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    scroll: &mut Scroll,
    progression: &mut Progression,
    track: &ObstacleTrack,
    jump: &mut ChargeJump,
    character: Entity,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Difficulty ramps, then the world moves left
    advance_progression(scroll, progression, config);
    advance_scroll(scroll);

    // 2. Recycle obstacles that left the viewport
    track.tick(world, scroll, config.viewport_width, events);

    // 3. Grounded check against the first obstacle's top
    let character_y = world
        .get::<&RigidBody>(character)
        .ok()
        .map(|body| body.position().y);
    if let (Some(y), Some(threshold)) = (character_y, track.ground_threshold(world, config)) {
        events.landed = jump.update_grounded(y, threshold);
    }

    // 4. Engine simulates after the update callback
    integrate_bodies(world, time, config.gravity);
}

/// Helper to create the character entity, standing on the ground threshold
pub fn create_character(world: &mut World, config: &Config, ground_y: f32) -> Entity {
    let pos = glam::Vec2::new(config.character_spawn_x(), ground_y);
    world.spawn((
        Character,
        RigidBody::new(pos, config.character_size, config.character_mass),
    ))
}
