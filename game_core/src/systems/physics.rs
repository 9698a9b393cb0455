use glam::Vec2;
use hecs::World;

use crate::{Obstacle, RigidBody, StaticBody, Time};

/// Narrow view of an engine-owned body, enough to launch and track it
pub trait PhysicsBody {
    fn position(&self) -> Vec2;

    /// Apply an instantaneous impulse (velocity change scaled by mass)
    fn apply_impulse(&mut self, impulse: Vec2);
}

impl PhysicsBody for RigidBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if self.mass > 0.0 {
            self.vel += impulse / self.mass;
        }
    }
}

/// Headless stand-in for the host's rigid-body step.
///
/// Integrates gravity and velocity, then rests falling bodies on the top
/// surface of any static obstacle they crossed this step.
pub fn integrate_bodies(world: &mut World, time: &Time, gravity: Vec2) {
    let tops: Vec<_> = world
        .query::<(&Obstacle, &StaticBody)>()
        .iter()
        .map(|(_e, (obstacle, _))| (obstacle.bounds(), obstacle.top()))
        .collect();

    for (_entity, body) in world.query_mut::<&mut RigidBody>() {
        let prev_bottom = body.bottom();

        if body.affected_by_gravity {
            body.vel += gravity * time.dt;
        }
        body.pos += body.vel * time.dt;

        if body.vel.y > 0.0 {
            continue;
        }

        let half_width = body.size.x / 2.0;
        let landing = tops
            .iter()
            .filter(|(bounds, top)| {
                bounds.overlaps_x(body.pos.x, half_width)
                    && prev_bottom >= *top
                    && body.bottom() <= *top
            })
            .map(|(_, top)| *top)
            .reduce(f32::max);

        if let Some(top) = landing {
            body.pos.y = top + body.size.y / 2.0;
            // Kinematic stand-in: no bounce, no slide
            body.vel = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_pillar(world: &mut World, x: f32) {
        world.spawn((
            Obstacle::new(Vec2::new(x, 150.0), Vec2::new(80.0, 300.0)),
            StaticBody,
        ));
    }

    #[test]
    fn test_apply_impulse_scales_by_mass() {
        let mut body = RigidBody::new(Vec2::ZERO, Vec2::splat(30.0), 0.5);
        body.apply_impulse(Vec2::new(30.0, 300.0));
        assert_eq!(body.vel, Vec2::new(60.0, 600.0));
    }

    #[test]
    fn test_massless_body_ignores_impulse() {
        let mut body = RigidBody::new(Vec2::ZERO, Vec2::splat(30.0), 0.0);
        body.apply_impulse(Vec2::new(30.0, 300.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_body_falls_under_gravity() {
        let mut world = World::new();
        let entity = world.spawn((RigidBody::new(
            Vec2::new(0.0, 500.0),
            Vec2::splat(30.0),
            0.5,
        ),));
        let time = Time::new(0.1, 0.0);

        integrate_bodies(&mut world, &time, Vec2::new(0.0, -900.0));

        let body = world.get::<&RigidBody>(entity).unwrap();
        assert!(body.pos.y < 500.0, "Body should fall");
        assert!(body.vel.y < 0.0);
    }

    #[test]
    fn test_body_lands_on_pillar_top() {
        let mut world = World::new();
        spawn_pillar(&mut world, 100.0);
        let entity = world.spawn((RigidBody::new(
            Vec2::new(100.0, 320.0),
            Vec2::splat(30.0),
            0.5,
        ),));
        let time = Time::new(0.1, 0.0);

        integrate_bodies(&mut world, &time, Vec2::new(0.0, -900.0));

        let body = world.get::<&RigidBody>(entity).unwrap();
        assert_eq!(body.pos.y, 315.0, "Should rest on pillar top");
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_body_misses_pillar_when_not_overlapping() {
        let mut world = World::new();
        spawn_pillar(&mut world, 100.0);
        let entity = world.spawn((RigidBody::new(
            Vec2::new(300.0, 320.0),
            Vec2::splat(30.0),
            0.5,
        ),));
        let time = Time::new(0.1, 0.0);

        integrate_bodies(&mut world, &time, Vec2::new(0.0, -900.0));

        let body = world.get::<&RigidBody>(entity).unwrap();
        assert!(body.pos.y < 315.0, "Should fall past the pillar");
    }

    #[test]
    fn test_rising_body_passes_through() {
        let mut world = World::new();
        spawn_pillar(&mut world, 100.0);
        let mut body = RigidBody::new(Vec2::new(100.0, 315.0), Vec2::splat(30.0), 0.5);
        body.vel = Vec2::new(0.0, 600.0);
        let entity = world.spawn((body,));
        let time = Time::new(0.05, 0.0);

        integrate_bodies(&mut world, &time, Vec2::new(0.0, -900.0));

        let body = world.get::<&RigidBody>(entity).unwrap();
        assert!(body.pos.y > 315.0, "Launch should not be cancelled");
    }
}
