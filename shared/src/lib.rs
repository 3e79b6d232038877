pub mod constants;
pub mod jump_pad;
pub mod math;
pub mod rapier_world;
pub mod wildcard;
pub mod zipline;

pub use jump_pad::{JumpPadSettings, launch_velocity};
pub use math::{QAngle, Vec3, direction_and_distance, distance, normalize_or_zero};
pub use rapier_world::{ColliderShapeDef, RapierQueryWorld, TraceHit, WorldStaticDef};
pub use wildcard::{matches_any, wildcard_match};
pub use zipline::{NearestPoint, ZiplineGeometry, ZiplineId};
