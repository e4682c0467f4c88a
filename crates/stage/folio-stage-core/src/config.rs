//! Core configuration for folio-stage-core.

use serde::{Deserialize, Serialize};

/// Stage offsets for the post-selection sequence, in milliseconds.
///
/// Every delay is measured from the moment of selection, not from the
/// previous stage, so retuning one value never shifts the others. The
/// sequencer does not enforce `to_zoom <= to_node_details <= to_bottom_nav`;
/// with a non-monotonic configuration each timer still sets its own target
/// stage and whichever fires last wins. Keeping the ordering sane is the
/// integrator's job.
///
/// Values are hot-reloadable: a change takes effect on the next selection,
/// never retroactively on already-scheduled timers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageDelays {
    /// Stage 1: top nav morph. Zero by design — the morph must visually
    /// lead the rest of the sequence, so it is applied synchronously.
    pub to_top_nav_morph: f64,
    /// Stage 2: camera zoom begins.
    pub to_zoom: f64,
    /// Stage 3: radial buttons and inspiration imagery.
    pub to_node_details: f64,
    /// Stage 4: bottom drawer slides up.
    pub to_bottom_nav: f64,
}

impl Default for StageDelays {
    fn default() -> Self {
        Self {
            to_top_nav_morph: 0.0,
            to_zoom: 350.0,
            to_node_details: 1000.0,
            to_bottom_nav: 1350.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_tuning() {
        let delays = StageDelays::default();
        assert_eq!(delays.to_top_nav_morph, 0.0);
        assert_eq!(delays.to_zoom, 350.0);
        assert_eq!(delays.to_node_details, 1000.0);
        assert_eq!(delays.to_bottom_nav, 1350.0);
    }

    #[test]
    fn deserializes_from_config_json() {
        let delays: StageDelays = serde_json::from_str(
            r#"{"to_top_nav_morph":0,"to_zoom":600,"to_node_details":1000,"to_bottom_nav":1350}"#,
        )
        .unwrap();
        assert_eq!(delays.to_zoom, 600.0);
    }
}
