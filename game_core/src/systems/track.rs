use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::{Config, Events, Obstacle, Scroll, StaticBody};

/// Fixed pool of obstacle slots tiled across the scrolling world.
///
/// Slots are spawned once and recycled in place; storage order is the slot
/// index. Recycling is decided per slot from its own screen position, so
/// slots may drift apart from their initial pitch over time.
#[derive(Debug, Clone)]
pub struct ObstacleTrack {
    slots: Vec<Entity>,
    pitch: f32,
}

impl ObstacleTrack {
    /// Spawn `count` obstacles at `start_x + i * pitch`, all at height `y`
    pub fn initialize(
        world: &mut World,
        count: usize,
        pitch: f32,
        start_x: f32,
        y: f32,
        size: Vec2,
    ) -> Self {
        let slots = (0..count)
            .map(|i| {
                let pos = Vec2::new(start_x + i as f32 * pitch, y);
                world.spawn((Obstacle::new(pos, size), StaticBody))
            })
            .collect();

        Self { slots, pitch }
    }

    /// Build the track described by `config`, starting at the viewport's right edge
    pub fn from_config(world: &mut World, config: &Config) -> Self {
        Self::initialize(
            world,
            config.pillar_count,
            config.pillar_spacing,
            config.viewport_width,
            config.pillar_y,
            config.pillar_size,
        )
    }

    /// Move every slot that has fully left the viewport to one pitch past its right edge
    pub fn tick(
        &self,
        world: &mut World,
        scroll: &Scroll,
        viewport_width: f32,
        events: &mut Events,
    ) {
        let respawn_x = scroll.right_edge(viewport_width) + self.pitch;

        for (slot, &entity) in self.slots.iter().enumerate() {
            let Ok(obstacle) = world.query_one_mut::<&mut Obstacle>(entity) else {
                continue;
            };

            let screen_x = scroll.to_screen_x(obstacle.pos.x);
            if screen_x < -obstacle.size.x {
                debug!("recycling slot {} from x={} to x={}", slot, obstacle.pos.x, respawn_x);
                obstacle.pos.x = respawn_x;
                events.recycled.push(slot);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn slots(&self) -> &[Entity] {
        &self.slots
    }

    fn obstacle(&self, world: &World, index: usize) -> Option<Obstacle> {
        let entity = *self.slots.get(index)?;
        world.get::<&Obstacle>(entity).ok().map(|o| *o)
    }

    /// World position of slot `index`
    pub fn slot_position(&self, world: &World, index: usize) -> Option<Vec2> {
        self.obstacle(world, index).map(|o| o.pos)
    }

    /// World positions of every slot, in storage order
    pub fn positions(&self, world: &World) -> Vec<Vec2> {
        (0..self.slots.len())
            .filter_map(|i| self.slot_position(world, i))
            .collect()
    }

    /// Grounded threshold derived from the first slot's top surface
    pub fn ground_threshold(&self, world: &World, config: &Config) -> Option<f32> {
        self.obstacle(world, 0).map(|base| config.ground_threshold(base.top()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, ObstacleTrack, Events) {
        let mut world = World::new();
        let track = ObstacleTrack::initialize(
            &mut world,
            5,
            180.0,
            800.0,
            150.0,
            Vec2::new(80.0, 300.0),
        );
        (world, track, Events::new())
    }

    fn scrolled_to(offset: f32) -> Scroll {
        Scroll { offset, speed: 2.0 }
    }

    #[test]
    fn test_initialize_spaces_slots_by_pitch() {
        let (world, track, _) = setup();
        assert_eq!(track.len(), 5);
        let xs: Vec<f32> = track.positions(&world).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![800.0, 980.0, 1160.0, 1340.0, 1520.0]);
        for pos in track.positions(&world) {
            assert_eq!(pos.y, 150.0, "All slots share one height");
        }
    }

    #[test]
    fn test_initialize_attaches_static_bodies() {
        let (world, track, _) = setup();
        for &entity in track.slots() {
            assert!(world.get::<&StaticBody>(entity).is_ok());
        }
    }

    #[test]
    fn test_slot_position_out_of_range() {
        let (world, track, _) = setup();
        assert_eq!(track.slot_position(&world, 4), Some(Vec2::new(1520.0, 150.0)));
        assert_eq!(track.slot_position(&world, 5), None);
    }

    #[test]
    fn test_no_recycle_while_visible() {
        let (mut world, track, mut events) = setup();
        // Screen x of slot 0 is exactly -width: not yet fully off screen
        track.tick(&mut world, &scrolled_to(-880.0), 800.0, &mut events);
        assert!(events.recycled.is_empty());
        assert_eq!(track.slot_position(&world, 0).unwrap().x, 800.0);
    }

    #[test]
    fn test_recycle_to_right_edge_plus_pitch() {
        let (mut world, track, mut events) = setup();
        let scroll = scrolled_to(-881.0);
        track.tick(&mut world, &scroll, 800.0, &mut events);

        assert_eq!(events.recycled, vec![0]);
        assert_eq!(track.slot_position(&world, 0).unwrap().x, 881.0 + 800.0 + 180.0);
        assert_eq!(track.slot_position(&world, 0).unwrap().x, scroll.right_edge(800.0) + 180.0);
        assert_eq!(track.slot_position(&world, 1).unwrap().x, 980.0, "Others untouched");
    }

    #[test]
    fn test_multiple_slots_recycle_in_one_tick() {
        let (mut world, track, mut events) = setup();
        track.tick(&mut world, &scrolled_to(-1300.0), 800.0, &mut events);

        // Slots 0..=2 are at screen x -500, -320, -140, all below -80
        assert_eq!(events.recycled, vec![0, 1, 2]);
        for i in 0..3 {
            assert_eq!(track.slot_position(&world, i).unwrap().x, 2280.0);
        }
        assert_eq!(track.slot_position(&world, 3).unwrap().x, 1340.0);
    }

    #[test]
    fn test_ground_threshold_from_first_slot() {
        let (world, track, _) = setup();
        let config = Config::new();
        assert_eq!(track.ground_threshold(&world, &config), Some(340.0));
    }

    #[test]
    fn test_empty_track_has_no_threshold() {
        let mut world = World::new();
        let track = ObstacleTrack::initialize(&mut world, 0, 180.0, 800.0, 150.0, Vec2::ONE);
        assert!(track.is_empty());
        assert_eq!(track.ground_threshold(&world, &Config::new()), None);
    }
}
