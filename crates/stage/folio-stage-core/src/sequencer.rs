//! StageSequencer: the owner of the post-selection animation sequence.
//!
//! One sequencer lives per mounted canvas view. It is the only writer of
//! the `(AnimationStage, project)` pair and of the pending-timer queue, and
//! every mutation happens synchronously inside `on_selection_changed`,
//! `update`, or `teardown` — there is nothing to lock.

use crate::config::StageDelays;
use crate::outputs::{Outputs, StageEvent};
use crate::selection::{ProjectId, SelectionSignal};
use crate::stage::AnimationStage;
use crate::time::StageTime;
use crate::timer::StageTimer;

/// Converts selection signals into a time-gated stage sequence.
///
/// Hosts call `on_selection_changed` once per logical selection event and
/// `update(dt)` once per frame, draining the returned [`Outputs`] after
/// each call.
#[derive(Debug)]
pub struct StageSequencer {
    delays: StageDelays,
    stage: AnimationStage,
    project: Option<ProjectId>,
    clock: StageTime,
    timers: StageTimer<AnimationStage>,
    outputs: Outputs,
    torn_down: bool,
}

impl Default for StageSequencer {
    fn default() -> Self {
        Self::new(StageDelays::default())
    }
}

impl StageSequencer {
    /// Create a sequencer in the idle state.
    pub fn new(delays: StageDelays) -> Self {
        Self {
            delays,
            stage: AnimationStage::Idle,
            project: None,
            clock: StageTime::zero(),
            timers: StageTimer::new(),
            outputs: Outputs::default(),
            torn_down: false,
        }
    }

    /// Current visible stage.
    #[inline]
    pub fn stage(&self) -> AnimationStage {
        self.stage
    }

    /// Project the current sequence applies to (None while idle or when the
    /// selection did not resolve to a project).
    #[inline]
    pub fn project(&self) -> Option<&ProjectId> {
        self.project.as_ref()
    }

    /// Active delay configuration.
    #[inline]
    pub fn delays(&self) -> &StageDelays {
        &self.delays
    }

    /// Replace the delay configuration. Takes effect on the next
    /// `on_selection_changed`; timers already scheduled keep their deadlines.
    pub fn set_delays(&mut self, delays: StageDelays) {
        self.delays = delays;
    }

    /// Scheduled-but-not-yet-fired stage transitions.
    #[inline]
    pub fn pending_transitions(&self) -> usize {
        self.timers.pending()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Events produced by the most recent call.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// The single entry point for selection state.
    ///
    /// Pending timers from any earlier sequence are cancelled before anything
    /// else happens, so at most one sequence is ever in flight. Deselection
    /// resets to `Idle` synchronously with nothing scheduled; selection sets
    /// `TopNavMorph` synchronously and schedules the remaining three stages
    /// at absolute offsets from this call.
    pub fn on_selection_changed(&mut self, signal: SelectionSignal) -> &Outputs {
        self.outputs.clear();
        if self.torn_down {
            return &self.outputs;
        }

        // Cancellation happens-before scheduling; a superseded sequence can
        // never fire again.
        self.timers.cancel_all();

        if !signal.has_selection {
            self.project = None;
            if !self.stage.is_idle() {
                log::debug!("selection cleared, {} -> idle", self.stage.name());
                self.set_stage(AnimationStage::Idle);
                self.outputs.push_event(StageEvent::SequenceReset);
            }
            return &self.outputs;
        }

        self.project = signal.project;
        log::debug!(
            "selection {:?}: sequence restarts at top-nav-morph",
            self.project
        );
        self.outputs.push_event(StageEvent::SequenceStarted {
            project: self.project.clone(),
        });
        // Stage 1 is synchronous: the nav morph leads the sequence. A
        // reselect mid-flight lands here too, visibly jumping back.
        self.set_stage(AnimationStage::TopNavMorph);

        let now = self.clock;
        for (delay, target) in [
            (self.delays.to_zoom, AnimationStage::Zoom),
            (self.delays.to_node_details, AnimationStage::NodeDetails),
            (self.delays.to_bottom_nav, AnimationStage::BottomNav),
        ] {
            self.timers
                .schedule(now, StageTime::from_millis_clamped(delay), target);
        }

        &self.outputs
    }

    /// Advance the sequencer clock by `dt` and fire due transitions in
    /// deadline order.
    pub fn update(&mut self, dt: StageTime) -> &Outputs {
        self.outputs.clear();
        if self.torn_down {
            return &self.outputs;
        }

        self.clock += dt;
        for target in self.timers.drain_due(self.clock) {
            log::debug!(
                "t={}ms: {} -> {}",
                self.clock.as_millis(),
                self.stage.name(),
                target.name()
            );
            self.set_stage(target);
            if target == AnimationStage::BottomNav {
                self.outputs.push_event(StageEvent::SequenceCompleted);
            }
        }

        &self.outputs
    }

    /// Tear the sequencer down. All pending timers are cancelled
    /// synchronously and every later call is inert.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.outputs.clear();
        self.torn_down = true;
    }

    fn set_stage(&mut self, to: AnimationStage) {
        let from = self.stage;
        self.stage = to;
        self.outputs.push_event(StageEvent::StageChanged {
            from,
            to,
            project: self.project.clone(),
        });
    }
}
