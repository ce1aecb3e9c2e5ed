//! Per-frame reclamation of entities that left the playfield.

use rand::Rng;

use crate::entities::{ExitPolicy, Playfield, PoolKind};
use crate::motion::spawn_enemy;
use crate::pool::{EntityPool, SlotId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub released: Vec<SlotId>,
    pub respawned: Vec<SlotId>,
}

/// Apply `K::ON_EXIT` to every active entity outside the playfield.
pub fn sweep<K: PoolKind>(
    pool: &mut EntityPool<K>,
    field: &Playfield,
    rng: &mut impl Rng,
) -> SweepReport {
    let mut report = SweepReport::default();
    let exited: Vec<SlotId> = pool
        .iter_active()
        .filter(|(_, e)| K::is_out_of_bounds(e.position, field))
        .map(|(slot, _)| slot)
        .collect();

    for slot in exited {
        match K::ON_EXIT {
            ExitPolicy::Release => {
                pool.release(slot);
                report.released.push(slot);
            }
            ExitPolicy::Respawn => {
                if let Some(entity) = pool.get_mut(slot) {
                    entity.place(spawn_enemy(field.width, rng));
                }
                report.respawned.push(slot);
            }
        }
    }
    report
}
