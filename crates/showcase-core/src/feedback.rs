//! Transient click pop with a deferred, cancellable reset.
//!
//! Every click hands out a [`FeedbackTicket`]. The host schedules the reset
//! (a timeout on the web) and hands the ticket back when it fires. Only the
//! newest ticket per object resets anything; older ones are stale.

use crate::config::InteractionConfig;
use crate::pickable::{ObjectId, PickableRegistry};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedbackTicket {
    pub object: ObjectId,
    generation: u64,
}

#[derive(Clone, Debug)]
pub struct ClickFeedback {
    multiplier: f32,
    flash_color: [f32; 3],
    duration_ms: u32,
    pending: FnvHashMap<ObjectId, u64>,
    next_generation: u64,
}

impl ClickFeedback {
    pub fn new(cfg: &InteractionConfig) -> Self {
        Self {
            multiplier: cfg.click_multiplier,
            flash_color: cfg.click_flash_color,
            duration_ms: cfg.click_feedback_ms,
            pending: FnvHashMap::default(),
            next_generation: 0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_pending(&self, id: ObjectId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Pop the object and flash it. Supersedes any pending reset for the
    /// same object.
    pub fn start(&mut self, id: ObjectId, registry: &mut PickableRegistry) -> Option<FeedbackTicket> {
        let obj = registry.get_mut(id)?;
        let popped = obj.base_scale * self.multiplier;
        obj.set_scale(popped);
        obj.target_scale = popped;
        obj.flash = Some(self.flash_color);

        self.next_generation += 1;
        let generation = self.next_generation;
        if self.pending.insert(id, generation).is_some() {
            log::debug!("[click] superseded pending reset on {:?}", id);
        }
        Some(FeedbackTicket {
            object: id,
            generation,
        })
    }

    /// Reset the object if `ticket` is still the newest one for it.
    /// Returns false for stale tickets.
    pub fn complete(&mut self, ticket: FeedbackTicket, registry: &mut PickableRegistry) -> bool {
        if self.pending.get(&ticket.object) != Some(&ticket.generation) {
            return false;
        }
        self.pending.remove(&ticket.object);
        if let Some(obj) = registry.get_mut(ticket.object) {
            obj.set_scale(obj.base_scale);
            obj.target_scale = obj.base_scale;
            obj.flash = None;
        }
        true
    }

    /// Forget the pending reset for one object; its ticket becomes stale.
    pub fn cancel(&mut self, id: ObjectId) {
        self.pending.remove(&id);
    }

    /// Drop every pending reset; outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
