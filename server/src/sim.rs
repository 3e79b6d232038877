//! Headless [`Host`] for tests.
//!
//! Keeps a flat entity table, integrates velocities on [`SimHost::run`], records every console
//! command and teleport, and answers traces through a [`RapierQueryWorld`] rebuilt whenever the
//! set of blockers changes. Trace radius is ignored (plain segment casts).

use crate::{
    host::{Color, EntityHandle, Host, PlayerPawn, PlayerSlot, Teleport, TraceQuery, TraceResult},
    script::Script,
};
use shared::{QAngle, RapierQueryWorld, Vec3, WorldStaticDef};
use std::collections::HashMap;

/// Standing eye height above the origin.
pub const STANDING_EYE_HEIGHT: f32 = 64.0;

/// Collision radius of spawned `+use` markers.
pub const USE_MARKER_RADIUS: f32 = 8.0;

#[derive(Clone, Copy, Debug)]
struct SimPlayer {
    slot: PlayerSlot,
    user_id: i32,
    eye_height: f32,
}

#[derive(Clone, Debug)]
struct SimEntity {
    class_name: &'static str,
    name: Option<String>,
    origin: Vec3,
    velocity: Vec3,
    angles: QAngle,
    health: i32,
    valid: bool,
    player: Option<SimPlayer>,
}

impl SimEntity {
    fn at(class_name: &'static str, name: Option<&str>, origin: Vec3) -> Self {
        Self {
            class_name,
            name: name.map(str::to_owned),
            origin,
            velocity: Vec3::zeros(),
            angles: QAngle::default(),
            health: 0,
            valid: true,
            player: None,
        }
    }
}

pub struct SimHost {
    pub time: f32,
    pub next_think: Option<f32>,
    pub think_enabled: bool,
    pub commands: Vec<String>,
    pub teleports: Vec<(EntityHandle, Teleport)>,
    pub debug_spheres: Vec<(Vec3, Color)>,
    entities: HashMap<EntityHandle, SimEntity>,
    next_entity: u32,
    blockers: Vec<WorldStaticDef>,
    world: RapierQueryWorld,
}

impl SimHost {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            next_think: None,
            think_enabled: false,
            commands: Vec::new(),
            teleports: Vec::new(),
            debug_spheres: Vec::new(),
            entities: HashMap::new(),
            next_entity: 1,
            blockers: Vec::new(),
            world: RapierQueryWorld::empty(),
        }
    }

    fn spawn(&mut self, entity: SimEntity) -> EntityHandle {
        let handle = EntityHandle(self.next_entity);
        self.next_entity += 1;
        self.entities.insert(handle, entity);
        handle
    }

    fn entity_mut(&mut self, entity: EntityHandle) -> &mut SimEntity {
        self.entities
            .get_mut(&entity)
            .unwrap_or_else(|| panic!("unknown sim entity {entity:?}"))
    }

    fn live(&self, entity: EntityHandle) -> Option<&SimEntity> {
        self.entities.get(&entity).filter(|e| e.valid)
    }

    fn add_static(
        &mut self,
        class_name: &'static str,
        name: Option<&str>,
        def: impl FnOnce(u32) -> WorldStaticDef,
    ) -> EntityHandle {
        let handle = self.spawn(SimEntity::at(class_name, name, Vec3::zeros()));
        let def = def(handle.0);
        self.entity_mut(handle).origin = def.translation;
        self.blockers.push(def);
        self.rebuild_world();
        handle
    }

    fn rebuild_world(&mut self) {
        self.world = RapierQueryWorld::build(self.blockers.clone());
    }

    /// Named point entity (zipline anchor, jump pad, ...).
    pub fn add_anchor(&mut self, name: &str, origin: Vec3) -> EntityHandle {
        self.spawn(SimEntity::at("info_target", Some(name), origin))
    }

    /// Connected player standing at `origin`, alive, looking along +X.
    pub fn add_player(&mut self, slot: PlayerSlot, user_id: i32, origin: Vec3) -> PlayerPawn {
        let mut entity = SimEntity::at("player", None, origin);
        entity.health = 100;
        entity.player = Some(SimPlayer {
            slot,
            user_id,
            eye_height: STANDING_EYE_HEIGHT,
        });
        let handle = self.spawn(entity);
        PlayerPawn {
            entity: handle,
            slot,
        }
    }

    pub fn add_blocker(&mut self, center: Vec3, half_extents: Vec3) -> EntityHandle {
        let def = |id| WorldStaticDef::cuboid(id, center, half_extents);
        self.add_static("func_brush", None, def)
    }

    pub fn add_blocker_sphere(&mut self, center: Vec3, radius: f32) -> EntityHandle {
        let def = |id| WorldStaticDef::sphere(id, center, radius);
        self.add_static("func_brush", None, def)
    }

    /// Removes every trace blocker, spawned markers included.
    pub fn clear_blockers(&mut self) {
        for def in self.blockers.drain(..) {
            self.entities.remove(&EntityHandle(def.id));
        }
        self.rebuild_world();
    }

    /// Points the view of `entity` from its eyes toward `point`.
    pub fn look_at(&mut self, entity: EntityHandle, point: Vec3) {
        let eye = self
            .eye_position(entity)
            .unwrap_or_else(|| panic!("{entity:?} has no eyes"));
        let dir = point - eye;
        let horizontal = (dir.x * dir.x + dir.y * dir.y).sqrt();
        let yaw = dir.y.atan2(dir.x).to_degrees();
        let pitch = -dir.z.atan2(horizontal).to_degrees();
        self.entity_mut(entity).angles = QAngle::new(pitch, yaw, 0.0);
    }

    pub fn set_origin(&mut self, entity: EntityHandle, origin: Vec3) {
        self.entity_mut(entity).origin = origin;
    }

    pub fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec3) {
        self.entity_mut(entity).velocity = velocity;
    }

    pub fn set_angles(&mut self, entity: EntityHandle, angles: QAngle) {
        self.entity_mut(entity).angles = angles;
    }

    pub fn set_health(&mut self, entity: EntityHandle, health: i32) {
        self.entity_mut(entity).health = health;
    }

    /// Eye height above the origin (crouching lowers it).
    pub fn set_eye_height(&mut self, entity: EntityHandle, height: f32) {
        if let Some(player) = self.entity_mut(entity).player.as_mut() {
            player.eye_height = height;
        }
    }

    /// Marks the entity invalid. Handles stay allocated so stale references can be tested.
    pub fn disconnect(&mut self, entity: EntityHandle) {
        self.entity_mut(entity).valid = false;
    }

    pub fn velocity(&self, entity: EntityHandle) -> Vec3 {
        self.entities
            .get(&entity)
            .map_or_else(Vec3::zeros, |e| e.velocity)
    }

    /// Number of recorded console commands mentioning `needle`.
    pub fn command_count(&self, needle: &str) -> usize {
        self.commands.iter().filter(|c| c.contains(needle)).count()
    }

    /// Advances time by `dt`, moves every entity by its velocity and fires the script's
    /// think when it is due.
    pub fn run(&mut self, script: &mut dyn Script, dt: f32) {
        self.time += dt;
        for entity in self.entities.values_mut().filter(|e| e.valid) {
            entity.origin += entity.velocity * dt;
        }

        let due = self.next_think.is_some_and(|at| at <= self.time);
        if self.think_enabled && due {
            self.next_think = None;
            script.think(self);
        }
    }
}

impl Host for SimHost {
    fn find_entity_by_name(&self, name: &str) -> Option<EntityHandle> {
        let entities = self.entities.iter();
        entities
            .filter(|(_, e)| e.valid && e.name.as_deref() == Some(name))
            .map(|(handle, _)| *handle)
            .min()
    }

    fn find_entities_by_class(&self, class_name: &str) -> Vec<EntityHandle> {
        let entities = self.entities.iter();
        let mut found: Vec<_> = entities
            .filter(|(_, e)| e.valid && e.class_name == class_name)
            .map(|(handle, _)| *handle)
            .collect();
        found.sort();
        found
    }

    fn is_valid(&self, entity: EntityHandle) -> bool {
        self.live(entity).is_some()
    }

    fn player_pawn(&self, entity: EntityHandle) -> Option<PlayerPawn> {
        let player = self.live(entity)?.player?;
        Some(PlayerPawn {
            entity,
            slot: player.slot,
        })
    }

    fn pawn_for_user_id(&self, user_id: i32) -> Option<PlayerPawn> {
        self.entities.iter().find_map(|(handle, e)| {
            let player = e.player.filter(|p| p.user_id == user_id)?;
            Some(PlayerPawn {
                entity: *handle,
                slot: player.slot,
            })
        })
    }

    fn abs_origin(&self, entity: EntityHandle) -> Option<Vec3> {
        self.live(entity).map(|e| e.origin)
    }

    fn abs_velocity(&self, entity: EntityHandle) -> Option<Vec3> {
        self.live(entity).map(|e| e.velocity)
    }

    fn eye_position(&self, entity: EntityHandle) -> Option<Vec3> {
        let e = self.live(entity)?;
        let player = e.player?;
        Some(e.origin + Vec3::new(0.0, 0.0, player.eye_height))
    }

    fn eye_angles(&self, entity: EntityHandle) -> Option<QAngle> {
        let e = self.live(entity)?;
        e.player.map(|_| e.angles)
    }

    fn health(&self, entity: EntityHandle) -> Option<i32> {
        self.live(entity).map(|e| e.health)
    }

    fn teleport(&mut self, entity: EntityHandle, teleport: Teleport) {
        self.teleports.push((entity, teleport));
        let Some(e) = self.entities.get_mut(&entity).filter(|e| e.valid) else {
            return;
        };
        if let Some(position) = teleport.position {
            e.origin = position;
        }
        if let Some(angles) = teleport.angles {
            e.angles = angles;
        }
        if let Some(velocity) = teleport.velocity {
            e.velocity = velocity;
        }
    }

    fn trace(&self, query: &TraceQuery) -> TraceResult {
        let Some(hit) = self.world.trace(&query.start, &query.end) else {
            return TraceResult::clear(query.end);
        };
        let hit_entity = EntityHandle(hit.id);
        if query.ignore == Some(hit_entity) {
            return TraceResult::clear(query.end);
        }
        TraceResult {
            did_hit: true,
            end: hit.position,
            hit_entity: Some(hit_entity),
        }
    }

    fn game_time(&self) -> f32 {
        self.time
    }

    fn set_next_think(&mut self, time: f32) {
        self.next_think = Some(time);
    }

    fn set_think_enabled(&mut self, enabled: bool) {
        self.think_enabled = enabled;
        if !enabled {
            self.next_think = None;
        }
    }

    fn server_command(&mut self, command: &str) {
        self.commands.push(command.to_owned());
    }

    fn debug_sphere(&mut self, center: Vec3, _radius: f32, _duration: f32, color: Color) {
        self.debug_spheres.push((center, color));
    }

    fn spawn_use_marker(&mut self, name: &str, position: Vec3) -> Option<EntityHandle> {
        let def = |id| WorldStaticDef::sphere(id, position, USE_MARKER_RADIUS);
        Some(self.add_static("func_button", Some(name), def))
    }

    fn remove_entity(&mut self, entity: EntityHandle) {
        self.entities.remove(&entity);
        let blockers = self.blockers.len();
        self.blockers.retain(|def| def.id != entity.0);
        if self.blockers.len() != blockers {
            self.rebuild_world();
        }
    }
}
