//! WASM bindings for hosting the layout core directly in a page.
//!
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::controls::ControlValues;
use crate::drag::{PointerSample, StageGeometry};
use crate::events::{PointerPhase, Session};

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn controls_from(value: JsValue) -> Result<ControlValues, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ControlValues::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(js_err)
}

/// Generate the CSS rule for a plain object of control values.
///
/// Missing fields take the page defaults.
#[wasm_bindgen(js_name = buildCss)]
pub fn build_css(controls: JsValue) -> Result<String, JsError> {
    Ok(crate::render_css(&controls_from(controls)?))
}

/// Normalize free-form declarations the way the synthesizer does.
#[wasm_bindgen(js_name = normalizeCustom)]
pub fn normalize_custom(text: &str) -> String {
    crate::css::normalize_custom(text)
}

/// One page session owned by the page script.
#[wasm_bindgen]
pub struct Playground {
    session: Session,
}

#[wasm_bindgen]
impl Playground {
    #[wasm_bindgen(constructor)]
    pub fn new(controls: JsValue) -> Result<Playground, JsError> {
        Ok(Self {
            session: Session::new(controls_from(controls)?),
        })
    }

    /// `[[controlId, eventKind], ...]` to attach listeners for.
    pub fn routes(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.dispatcher().routes()).map_err(js_err)
    }

    pub fn dispatch(&mut self, control: &str, kind: &str, value: &str) -> Result<JsValue, JsError> {
        self.session.dispatch_raw(control, kind, value).map_err(js_err)?;
        self.snapshot()
    }

    /// Feed a pointer event. `geometry` is only read on `down`.
    pub fn pointer(
        &mut self,
        phase: &str,
        pointer_id: i32,
        x: f64,
        y: f64,
        geometry: JsValue,
    ) -> Result<bool, JsError> {
        let phase: PointerPhase = phase.parse().map_err(js_err)?;
        let geometry: StageGeometry = if geometry.is_undefined() || geometry.is_null() {
            StageGeometry::default()
        } else {
            serde_wasm_bindgen::from_value(geometry).map_err(js_err)?
        };
        Ok(self
            .session
            .pointer(phase, PointerSample { pointer_id, x, y }, geometry))
    }

    pub fn css(&self) -> String {
        self.session.rendered().panel_text.clone()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.snapshot()).map_err(js_err)
    }
}
