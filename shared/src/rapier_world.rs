//! Rapier-based trace world for static map geometry.
//!
//! Headless hosts (simulators, tests) have no engine to answer trace queries, so they build
//! one of these from a list of static blockers and answer line traces against it.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-focused: only scene queries are supported, nothing is ever stepped.
//! - Immutable world: this builder assumes statics do not move after construction.

// Re-export Rapier so downstream crates can use Rapier types without depending on it directly.
pub use rapier3d;

use crate::math::Vec3;
use rapier3d::na::{Point3, Translation3, UnitQuaternion};
use rapier3d::prelude::*;

/// Canonical definition of an immutable blocker.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier, reported back on trace hits.
    pub id: u32,
    /// World-space translation.
    pub translation: Vec3,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

impl WorldStaticDef {
    /// Axis-aligned box centred on `translation`.
    pub fn cuboid(id: u32, translation: Vec3, half_extents: Vec3) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
        }
    }

    pub fn sphere(id: u32, translation: Vec3, radius: f32) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Sphere { radius },
        }
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Oriented cuboid with given half-extents.
    Cuboid { half_extents: Vec3 },

    /// Sphere/ball.
    Sphere { radius: f32 },
}

/// First blocker along a traced segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceHit {
    /// `WorldStaticDef::id` of the blocker.
    pub id: u32,
    /// World-space impact position.
    pub position: Vec3,
    /// Fraction (0..1) of the segment travelled before the impact.
    pub fraction: f32,
}

/// In-memory Rapier structures needed for scene queries against a static world.
pub struct RapierQueryWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
}

impl RapierQueryWorld {
    /// Build a query world from a list of static collider definitions.
    ///
    /// The input is sorted by `id` before insertion.
    pub fn build(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for def in defs.into_iter() {
            let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        // Collision detection only (no dynamics): updates the broad-phase BVH and the
        // narrow-phase so queries can run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();

        let hooks = ();
        let events = ();

        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &hooks,
            &events,
        );

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    /// An empty world: every trace is unobstructed.
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Create a borrowed `QueryPipeline` view suitable for scene queries.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }

    /// Traces the segment `start -> end` and returns the first blocker, if any.
    ///
    /// A start point inside a blocker reports an immediate hit (`fraction == 0`).
    pub fn trace(&self, start: &Vec3, end: &Vec3) -> Option<TraceHit> {
        let delta = end - start;
        if delta.norm_squared() <= 0.0 {
            return None;
        }

        // Unnormalized direction: time of impact is then the fraction of the segment.
        let ray = Ray::new(Point3::from(*start), delta);
        let query_pipeline = self.query_pipeline(QueryFilter::default());

        let (handle, hit) = query_pipeline.cast_ray_and_get_normal(&ray, 1.0, true)?;
        let id = self.colliders.get(handle)?.user_data as u32;
        let fraction = hit.time_of_impact;

        Some(TraceHit {
            id,
            position: start + delta * fraction,
            fraction,
        })
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent rigid-body, so the collider has an identity local transform.
/// The definition id is stored in `user_data` so trace hits can report it.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let mut collider = match &def.shape {
        ColliderShapeDef::Cuboid { half_extents } => {
            let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);
            ColliderBuilder::cuboid(hx, hy, hz).build()
        }
        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius).build(),
    };
    collider.user_data = def.id as u128;
    collider
}
