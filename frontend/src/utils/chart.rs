use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::dashboard::chart::ChartConfig;
use crate::error::{describe_js, SiteError};
use crate::utils::dom::document;

#[wasm_bindgen]
extern "C" {
    /// Chart.js instance, loaded globally by the page.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

/// Builds a chart on the canvas with `canvas_id`.
pub fn render_chart(canvas_id: &str, config: &ChartConfig) -> Result<Chart, SiteError> {
    let canvas: HtmlCanvasElement = document()?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SiteError::missing(format!("canvas#{}", canvas_id)))?
        .dyn_into()
        .map_err(|_| SiteError::Chart {
            canvas: canvas_id.to_string(),
            reason: "element is not a canvas".to_string(),
        })?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = config.serialize(&serializer)?;

    Chart::new(&canvas, &config).map_err(|e| SiteError::Chart {
        canvas: canvas_id.to_string(),
        reason: describe_js(&e),
    })
}
