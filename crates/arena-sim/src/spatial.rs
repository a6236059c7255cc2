//! Spatial queries over the ECS world.
//!
//! Ray casts serve both the grounding probe and the weapon hit-scan. Only
//! entities carrying a `Position` and a `Collider` take part, and every
//! query is filtered by collision layer.

use glam::Vec3;
use hecs::{Entity, World};

use arena_core::components::{Collider, Shape};
use arena_core::enums::CollisionLayer;
use arena_core::types::Position;

/// A ray with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn down(origin: Vec3) -> Self {
        Self {
            origin,
            direction: Vec3::NEG_Y,
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Which colliders a query may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFilter {
    /// Walkable static geometry.
    Collidable,
    /// Enemy bodies only.
    Enemies,
}

impl QueryFilter {
    pub fn accepts(self, layer: CollisionLayer) -> bool {
        match self {
            QueryFilter::Collidable => layer == CollisionLayer::Solid,
            QueryFilter::Enemies => layer == CollisionLayer::Enemy,
        }
    }
}

/// Nearest intersection reported by a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
    pub layer: CollisionLayer,
}

/// Nearest-hit ray queries.
pub trait SpatialQuery {
    /// Return the nearest collider accepted by `filter` within `max_distance`.
    fn cast(&self, ray: &Ray, max_distance: f32, filter: QueryFilter) -> Option<RayHit>;
}

/// Collision-resolved translation of a box-shaped body through solid geometry.
pub trait MotionResolver {
    /// Move a body centered at `position` with `half_extents` by `displacement`
    /// and return where it ends up.
    fn resolve(&self, position: Vec3, half_extents: Vec3, displacement: Vec3) -> Vec3;
}

impl SpatialQuery for World {
    fn cast(&self, ray: &Ray, max_distance: f32, filter: QueryFilter) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for (entity, (pos, collider)) in self.query::<(&Position, &Collider)>().iter() {
            if !filter.accepts(collider.layer) {
                continue;
            }
            let Some(t) = intersect(ray, pos.0, &collider.shape) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            if best.map_or(true, |b| t < b.distance) {
                best = Some(RayHit {
                    entity,
                    point: ray.at(t),
                    distance: t,
                    layer: collider.layer,
                });
            }
        }

        best
    }
}

impl MotionResolver for World {
    fn resolve(&self, position: Vec3, half_extents: Vec3, displacement: Vec3) -> Vec3 {
        let mut resolved = position;

        for axis in 0..3 {
            if displacement[axis] == 0.0 {
                continue;
            }
            let mut candidate = resolved;
            candidate[axis] += displacement[axis];
            if !blocks(self, resolved, candidate, half_extents) {
                resolved = candidate;
            }
        }

        resolved
    }
}

/// A step is blocked when it enters a solid the body was not already inside.
fn blocks(world: &World, from: Vec3, to: Vec3, half_extents: Vec3) -> bool {
    world
        .query::<(&Position, &Collider)>()
        .iter()
        .filter(|(_, (_, collider))| collider.layer == CollisionLayer::Solid)
        .any(|(_, (pos, collider))| {
            box_overlaps(to, half_extents, pos.0, &collider.shape)
                && !box_overlaps(from, half_extents, pos.0, &collider.shape)
        })
}

fn box_overlaps(center: Vec3, half_extents: Vec3, shape_center: Vec3, shape: &Shape) -> bool {
    match *shape {
        Shape::Aabb { half_extents: other } => {
            let gap = (center - shape_center).abs();
            let reach = half_extents + other;
            gap.x < reach.x && gap.y < reach.y && gap.z < reach.z
        }
        Shape::Sphere { radius } => {
            let closest = shape_center.clamp(center - half_extents, center + half_extents);
            closest.distance_squared(shape_center) < radius * radius
        }
    }
}

fn intersect(ray: &Ray, center: Vec3, shape: &Shape) -> Option<f32> {
    match *shape {
        Shape::Aabb { half_extents } => {
            ray_aabb_intersect(ray.origin, ray.direction, center - half_extents, center + half_extents)
        }
        Shape::Sphere { radius } => ray_sphere_intersect(ray.origin, ray.direction, center, radius),
    }
}

/// Slab test. Returns the distance to the nearest intersection at or ahead
/// of the origin (the exit distance when the origin is inside the box).
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        if dir[axis].abs() < 1e-10 {
            // Parallel to this slab: must already lie within it.
            if origin[axis] < aabb_min[axis] || origin[axis] > aabb_max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let t1 = (aabb_min[axis] - origin[axis]) * inv;
        let t2 = (aabb_max[axis] - origin[axis]) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        Some(if t_min >= 0.0 { t_min } else { t_max })
    } else {
        None
    }
}

/// Ray-sphere intersection for a unit-length `dir`.
pub fn ray_sphere_intersect(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let near = -b - sqrt_disc;
    let far = -b + sqrt_disc;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use arena_core::components::Obstacle;

    fn world_with_ground() -> World {
        let mut world = World::new();
        world.spawn((
            Obstacle,
            Position::new(0.0, 0.0, 0.0),
            Collider::solid_box(Vec3::new(40.0, 0.0, 40.0)),
        ));
        world
    }

    #[test]
    fn test_down_probe_hits_flat_ground() {
        let world = world_with_ground();
        let hit = world
            .cast(&Ray::down(Vec3::new(0.0, 0.8, 0.0)), 1.0, QueryFilter::Collidable)
            .expect("ground should be hit");
        assert!((hit.distance - 0.8).abs() < 1e-6);
        assert_eq!(hit.layer, CollisionLayer::Solid);
    }

    #[test]
    fn test_probe_respects_max_distance() {
        let world = world_with_ground();
        let hit = world.cast(&Ray::down(Vec3::new(0.0, 1.5, 0.0)), 1.0, QueryFilter::Collidable);
        assert!(hit.is_none());
    }

    #[test]
    fn test_filter_excludes_other_layers() {
        let mut world = world_with_ground();
        let enemy = world.spawn((Position::new(0.0, 0.8, 5.0), Collider::enemy_sphere(0.6)));

        let ray = Ray::new(Vec3::new(0.0, 0.8, 0.0), Vec3::Z);
        let hit = world.cast(&ray, 80.0, QueryFilter::Enemies).unwrap();
        assert_eq!(hit.entity, enemy);
        assert!((hit.distance - 4.4).abs() < 1e-5);

        // The ground is not an enemy; a downward shot finds nothing.
        assert!(world
            .cast(&Ray::down(Vec3::new(0.0, 0.8, 0.0)), 80.0, QueryFilter::Enemies)
            .is_none());
        // Enemies are not walkable.
        assert!(world.cast(&ray, 80.0, QueryFilter::Collidable).is_none());
    }

    #[test]
    fn test_nearest_enemy_wins() {
        let mut world = World::new();
        let _far = world.spawn((Position::new(0.0, 0.0, 10.0), Collider::enemy_sphere(0.6)));
        let near = world.spawn((Position::new(0.0, 0.0, 4.0), Collider::enemy_sphere(0.6)));

        let hit = world
            .cast(&Ray::new(Vec3::ZERO, Vec3::Z), 80.0, QueryFilter::Enemies)
            .unwrap();
        assert_eq!(hit.entity, near);
    }

    #[test]
    fn test_ray_sphere_miss_and_behind() {
        assert!(ray_sphere_intersect(Vec3::ZERO, Vec3::Z, Vec3::new(2.0, 0.0, 5.0), 0.6).is_none());
        assert!(ray_sphere_intersect(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 0.6).is_none());
    }

    #[test]
    fn test_resolver_blocks_entering_a_box() {
        let mut world = world_with_ground();
        world.spawn((
            Obstacle,
            Position::new(0.0, 1.0, 2.0),
            Collider::solid_box(Vec3::new(1.0, 1.0, 1.0)),
        ));
        let half = Vec3::new(0.45, 0.9, 0.45);

        // Walking forward into the box is rejected on z, sideways motion survives.
        let start = Vec3::new(0.0, 1.7, 0.0);
        let end = world.resolve(start, half, Vec3::new(0.2, 0.0, 1.0));
        assert_eq!(end, Vec3::new(0.2, 1.7, 0.0));

        // Falling through the ground is rejected.
        let end = world.resolve(Vec3::new(0.0, 1.0, -5.0), half, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(end.y, 1.0);
    }

    #[test]
    fn test_resolver_lets_a_stuck_body_walk_out() {
        let mut world = World::new();
        world.spawn((
            Obstacle,
            Position::new(0.0, 1.0, 0.0),
            Collider::solid_box(Vec3::new(1.0, 1.0, 1.0)),
        ));
        let half = Vec3::new(0.45, 0.9, 0.45);
        let end = world.resolve(Vec3::new(0.0, 1.7, 0.0), half, Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(end.z, 0.5);
    }
}
