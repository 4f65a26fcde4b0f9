//! Chart.js binding. The library is loaded by `index.html` as the global `Chart`.

use super::registry::ChartBackend;
use contracts::shared::charts::{ChartConfig, ChartSlot};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Default)]
pub struct ChartJsBackend;

fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call0(target)?;
    Ok(())
}

impl ChartBackend for ChartJsBackend {
    type Handle = JsValue;

    fn construct(&mut self, slot: ChartSlot, config: &ChartConfig) -> Result<JsValue, String> {
        let window = web_sys::window().ok_or("window not available")?;
        let document = window.document().ok_or("document not available")?;
        let canvas = document
            .get_element_by_id(slot.canvas_id())
            .ok_or_else(|| format!("canvas #{} not found", slot.canvas_id()))?;

        let constructor: Function = Reflect::get(&window, &JsValue::from_str("Chart"))
            .ok()
            .and_then(|c| c.dyn_into().ok())
            .ok_or("Chart.js is not loaded")?;

        let js_config = config
            .serialize(&Serializer::json_compatible())
            .map_err(|e| format!("failed to serialize chart config: {}", e))?;

        let args = Array::of2(&canvas.into(), &js_config);
        Reflect::construct(&constructor, &args)
            .map_err(|e| format!("Chart constructor failed: {:?}", e))
    }

    fn destroy(&mut self, handle: JsValue) {
        if let Err(e) = call_method(&handle, "destroy") {
            log::warn!("chart destroy failed: {:?}", e);
        }
    }

    fn resize(&mut self, handle: &JsValue) {
        if let Err(e) = call_method(handle, "resize") {
            log::warn!("chart resize failed: {:?}", e);
        }
    }
}
