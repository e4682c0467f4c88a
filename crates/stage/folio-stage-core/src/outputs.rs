//! Output contracts from the stage sequencer.
//!
//! Outputs carry the stage transitions produced by one synchronous call or
//! one `update` tick. Hosts (web adapter, tests) drain them and fan the
//! current `(stage, project)` pair out to the rendering regions; the regions
//! never talk to each other directly.

use serde::{Deserialize, Serialize};

use crate::selection::ProjectId;
use crate::stage::AnimationStage;

/// Discrete signals emitted while sequencing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StageEvent {
    /// The visible stage changed. `project` is the selection the stage
    /// applies to (None when unresolved or when returning to idle).
    StageChanged {
        from: AnimationStage,
        to: AnimationStage,
        project: Option<ProjectId>,
    },
    /// A selection started (or restarted) the sequence.
    SequenceStarted { project: Option<ProjectId> },
    /// Deselection reset the sequence to idle.
    SequenceReset,
    /// The final stage was reached via the timer path.
    SequenceCompleted,
}

/// Events produced by one call into the sequencer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<StageEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: StageEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stage transitions only, in emission order.
    pub fn stage_changes(&self) -> impl Iterator<Item = AnimationStage> + '_ {
        self.events.iter().filter_map(|e| match e {
            StageEvent::StageChanged { to, .. } => Some(*to),
            _ => None,
        })
    }
}
