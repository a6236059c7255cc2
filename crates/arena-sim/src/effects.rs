//! Deferred cosmetic effects (muzzle flash fade, hit-flash revert).
//!
//! Effects run on their own clock, independent of simulation frames. Each
//! task holds the target's generational `Entity` handle and only acts if the
//! entity still exists. Tasks write visual components (`Appearance`,
//! `MuzzleFlash`) and nothing else.

use hecs::{Entity, World};

use arena_core::components::{Appearance, MuzzleFlash};
use arena_core::enums::Material;

/// What a task does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CosmeticAction {
    /// Put back the material the target showed before a hit flash.
    RestoreMaterial(Material),
    /// Switch the muzzle flash light off.
    DimMuzzle,
}

#[derive(Debug, Clone, Copy)]
struct CosmeticTask {
    due_secs: f64,
    target: Entity,
    action: CosmeticAction,
}

#[derive(Debug, Default)]
pub struct CosmeticScheduler {
    clock_secs: f64,
    pending: Vec<CosmeticTask>,
}

impl CosmeticScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` on `target` to run `delay_secs` from now. A pending
    /// task of the same kind on the same target is superseded, so a repeated
    /// flash runs its full duration.
    pub fn schedule(&mut self, delay_secs: f64, target: Entity, action: CosmeticAction) {
        let kind = std::mem::discriminant(&action);
        self.pending.retain(|task| {
            task.target != target || std::mem::discriminant(&task.action) != kind
        });
        self.pending.push(CosmeticTask {
            due_secs: self.clock_secs + delay_secs,
            target,
            action,
        });
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Advance the effect clock and run every task that came due, oldest
    /// first. Returns how many tasks were applied; tasks whose target has
    /// been despawned are dropped without effect.
    pub fn advance(&mut self, world: &mut World, dt: f64) -> usize {
        self.clock_secs += dt.max(0.0);

        let now = self.clock_secs;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due_secs <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs));

        due.into_iter().filter(|task| apply(world, task)).count()
    }
}

fn apply(world: &mut World, task: &CosmeticTask) -> bool {
    match task.action {
        CosmeticAction::RestoreMaterial(material) => {
            match world.get::<&mut Appearance>(task.target) {
                Ok(mut appearance) => {
                    appearance.material = material;
                    true
                }
                Err(_) => false,
            }
        }
        CosmeticAction::DimMuzzle => match world.get::<&mut MuzzleFlash>(task.target) {
            Ok(mut flash) => {
                flash.intensity = 0.0;
                true
            }
            Err(_) => false,
        },
    }
}
