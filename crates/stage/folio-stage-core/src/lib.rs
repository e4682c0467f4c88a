//! Folio Stage Core (host-agnostic)
//!
//! The staged selection animation for the folio canvas: a selection signal
//! from the graph viewer drives an ordered sequence of UI stages (top nav
//! morph, camera zoom, node details, bottom drawer). This crate owns the
//! stage state machine and its pending timers; hosts step it each frame via
//! `StageSequencer::update` and drain the emitted events.

pub mod config;
pub mod error;
pub mod outputs;
pub mod selection;
pub mod sequencer;
pub mod stage;
pub mod time;
pub mod timer;

// Re-exports for consumers (adapters)
pub use config::StageDelays;
pub use error::StageError;
pub use outputs::{Outputs, StageEvent};
pub use selection::{ProjectId, SelectionSignal};
pub use sequencer::StageSequencer;
pub use stage::AnimationStage;
pub use time::StageTime;
pub use timer::{StageTimer, TimerId};

/// Stage core result type
pub type Result<T> = core::result::Result<T, StageError>;
