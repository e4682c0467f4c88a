use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_stage_core::{
    Outputs, SelectionSignal, StageDelays, StageSequencer, StageTime,
};

#[wasm_bindgen]
pub struct FolioStage {
    core: StageSequencer,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn outputs_to_js(out: &Outputs) -> Result<JsValue, JsError> {
    swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
}

#[wasm_bindgen]
impl FolioStage {
    /// Create a sequencer. Pass a JSON delays object or undefined/null for
    /// the site defaults.
    /// Example:
    ///   new FolioStage({ to_zoom: 600 })
    #[wasm_bindgen(constructor)]
    pub fn new(delays: JsValue) -> Result<FolioStage, JsError> {
        console_error_panic_hook::set_once();

        let delays: StageDelays = if jsvalue_is_undefined_or_null(&delays) {
            StageDelays::default()
        } else {
            swb::from_value(delays).map_err(|e| JsError::new(&format!("delays error: {e}")))?
        };

        Ok(FolioStage {
            core: StageSequencer::new(delays),
        })
    }

    /// Report a selection change. `signal` is JSON matching SelectionSignal:
    /// `{ has_selection: bool, project?: string }`. Returns the events the
    /// change produced.
    #[wasm_bindgen(js_name = on_selection_changed)]
    pub fn on_selection_changed(&mut self, signal: JsValue) -> Result<JsValue, JsError> {
        let signal: SelectionSignal = swb::from_value(signal)
            .map_err(|e| JsError::new(&format!("selection signal error: {e}")))?;
        let out = self.core.on_selection_changed(signal);
        outputs_to_js(out)
    }

    /// Step the sequencer by dt (milliseconds). Returns the events whose
    /// deadlines passed during this step.
    #[wasm_bindgen]
    pub fn update(&mut self, dt_ms: f64) -> Result<JsValue, JsError> {
        let dt = StageTime::from_millis_f64(dt_ms)
            .map_err(|e| JsError::new(&format!("dt error: {e}")))?;
        let out = self.core.update(dt);
        outputs_to_js(out)
    }

    /// Current stage name ("idle", "top-nav-morph", "zoom", "node-details",
    /// "bottom-nav").
    #[wasm_bindgen]
    pub fn stage(&self) -> String {
        self.core.stage().name().to_string()
    }

    /// Project id the current sequence applies to, or undefined.
    #[wasm_bindgen]
    pub fn project(&self) -> JsValue {
        match self.core.project() {
            Some(id) => JsValue::from_str(id.as_str()),
            None => JsValue::UNDEFINED,
        }
    }

    /// Replace the delay configuration; applies from the next selection.
    #[wasm_bindgen(js_name = set_delays)]
    pub fn set_delays(&mut self, delays: JsValue) -> Result<(), JsError> {
        let delays: StageDelays =
            swb::from_value(delays).map_err(|e| JsError::new(&format!("delays error: {e}")))?;
        self.core.set_delays(delays);
        Ok(())
    }

    /// Scheduled-but-not-yet-fired stage transitions.
    #[wasm_bindgen(js_name = pending_transitions)]
    pub fn pending_transitions(&self) -> u32 {
        self.core.pending_transitions() as u32
    }

    /// Tear the sequencer down before unmount. Every later call is inert.
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.core.teardown();
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
