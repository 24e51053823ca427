use crate::pickable::{ObjectId, PickableRegistry};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(ObjectId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    Exit(ObjectId),
    Enter(ObjectId),
}

/// At most one exit followed by at most one enter.
pub type HoverTransitions = SmallVec<[HoverTransition; 2]>;

/// Tracks the single hovered object and keeps its target scale in sync.
#[derive(Clone, Debug)]
pub struct HoverMachine {
    state: HoverState,
    hover_multiplier: f32,
}

impl HoverMachine {
    pub fn new(hover_multiplier: f32) -> Self {
        Self {
            state: HoverState::Idle,
            hover_multiplier,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(id),
        }
    }

    /// Feed the latest hover pick. A change of object always exits the old
    /// one before entering the new one.
    pub fn update(
        &mut self,
        hit: Option<ObjectId>,
        registry: &mut PickableRegistry,
    ) -> HoverTransitions {
        let mut out = HoverTransitions::new();
        if self.hovered() == hit {
            return out;
        }
        if let HoverState::Hovering(prev) = self.state {
            if let Some(o) = registry.get_mut(prev) {
                o.target_scale = o.base_scale;
            }
            self.state = HoverState::Idle;
            log::debug!("[hover] exit {:?}", prev);
            out.push(HoverTransition::Exit(prev));
        }
        if let Some(next) = hit {
            match registry.get_mut(next) {
                Some(o) => {
                    o.target_scale = o.base_scale * self.hover_multiplier;
                    self.state = HoverState::Hovering(next);
                    log::debug!("[hover] enter {:?} ({})", next, o.kind.name());
                    out.push(HoverTransition::Enter(next));
                }
                None => log::warn!("[hover] pick returned unknown object {:?}", next),
            }
        }
        out
    }

    pub fn clear(&mut self, registry: &mut PickableRegistry) -> HoverTransitions {
        self.update(None, registry)
    }
}
