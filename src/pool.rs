//! Fixed-capacity slot storage for transient entities.
//!
//! Slots are allocated once; spawning reactivates a free slot and despawning
//! marks it free again.  The pool never grows, so a spawn request against a
//! full pool is simply dropped by the caller.

use std::marker::PhantomData;

use crate::entities::{Aabb, Entity, PoolKind};
use crate::error::ConfigError;

/// Index of a slot inside its pool, stable for the pool's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

#[derive(Clone, Debug)]
pub struct EntityPool<K> {
    slots: Vec<Entity>,
    _kind: PhantomData<K>,
}

impl<K: PoolKind> EntityPool<K> {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::EmptyPool { name: K::NAME });
        }
        Ok(EntityPool {
            slots: vec![Entity::parked(); capacity],
            _kind: PhantomData,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Activate the lowest free slot.  `None` when every slot is in use.
    pub fn acquire(&mut self) -> Option<SlotId> {
        let index = self.slots.iter().position(|e| !e.active)?;
        self.slots[index].active = true;
        Some(SlotId(index))
    }

    /// Free a slot.  Velocity is zeroed; the position is overwritten by the
    /// next spawn.
    pub fn release(&mut self, slot: SlotId) {
        if let Some(entity) = self.slots.get_mut(slot.0) {
            entity.active = false;
            entity.velocity = glam::Vec2::ZERO;
        }
    }

    pub fn get(&self, slot: SlotId) -> Option<&Entity> {
        self.slots.get(slot.0)
    }

    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Entity> {
        self.slots.get_mut(slot.0)
    }

    pub fn is_active(&self, slot: SlotId) -> bool {
        self.get(slot).map(|e| e.active).unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    /// Every slot, active or not, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Entity)> {
        self.slots.iter().enumerate().map(|(i, e)| (SlotId(i), e))
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (SlotId, &Entity)> {
        self.iter().filter(|(_, e)| e.active)
    }

    pub fn for_each_active(&mut self, mut f: impl FnMut(SlotId, &mut Entity)) {
        for (i, entity) in self.slots.iter_mut().enumerate() {
            if entity.active {
                f(SlotId(i), entity);
            }
        }
    }

    /// Bounding box of an active slot.
    pub fn aabb(&self, slot: SlotId) -> Option<Aabb> {
        self.get(slot)
            .filter(|e| e.active)
            .map(|e| Aabb::new(e.position, K::SIZE))
    }
}
