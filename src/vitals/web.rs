//! Browser binding to the web-vitals measurement library.
//!
//! The library is expected as the global `webVitals` object (the UMD build
//! loaded by the host page). Acquisition resolves the five measurement
//! functions up front so a partially-loaded library fails as a unit.

use dioxus::logger::tracing::error;
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::{Metric, MetricHandler, VitalsProvider};
use crate::error::VitalsError;

/// Handle to the five measurement functions of the loaded library.
pub struct WebVitals {
    get_cls: Function,
    get_fid: Function,
    get_fcp: Function,
    get_lcp: Function,
    get_ttfb: Function,
}

/// Acquire the measurement library from the page.
pub async fn load() -> Result<WebVitals, VitalsError> {
    let window = web_sys::window()
        .ok_or_else(|| VitalsError::LibraryLoad("no window object".to_string()))?;
    let library = Reflect::get(&window, &JsValue::from_str("webVitals"))
        .map_err(|err| VitalsError::LibraryLoad(format!("{err:?}")))?;
    if library.is_undefined() || library.is_null() {
        return Err(VitalsError::LibraryLoad(
            "webVitals global is not present".to_string(),
        ));
    }

    Ok(WebVitals {
        get_cls: measurement_fn(&library, "getCLS")?,
        get_fid: measurement_fn(&library, "getFID")?,
        get_fcp: measurement_fn(&library, "getFCP")?,
        get_lcp: measurement_fn(&library, "getLCP")?,
        get_ttfb: measurement_fn(&library, "getTTFB")?,
    })
}

/// Resolve one named measurement function from the library object.
fn measurement_fn(library: &JsValue, name: &'static str) -> Result<Function, VitalsError> {
    Reflect::get(library, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(VitalsError::MissingMetric(name))
}

impl VitalsProvider for WebVitals {
    fn on_cls(&self, handler: MetricHandler) {
        register(&self.get_cls, handler);
    }

    fn on_fid(&self, handler: MetricHandler) {
        register(&self.get_fid, handler);
    }

    fn on_fcp(&self, handler: MetricHandler) {
        register(&self.get_fcp, handler);
    }

    fn on_lcp(&self, handler: MetricHandler) {
        register(&self.get_lcp, handler);
    }

    fn on_ttfb(&self, handler: MetricHandler) {
        register(&self.get_ttfb, handler);
    }
}

/// Register `handler` with one measurement function.
///
/// The JS closure is leaked on purpose: the library keeps invoking it for
/// the lifetime of the page and registrations are never torn down.
fn register(measure: &Function, handler: MetricHandler) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |entry: JsValue| {
        handler(metric_from_entry(&entry));
    });
    if let Err(err) = measure.call1(&JsValue::NULL, callback.as_ref().unchecked_ref()) {
        error!(?err, "measurement registration failed");
    }
    callback.forget();
}

/// Adapt a JS metric entry into our [`Metric`]. Missing fields default
/// rather than fail, since the entry shape is outside our control.
fn metric_from_entry(entry: &JsValue) -> Metric {
    let string = |key: &str| {
        Reflect::get(entry, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    };
    let number = |key: &str| {
        Reflect::get(entry, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default()
    };

    Metric {
        name: string("name"),
        value: number("value"),
        delta: number("delta"),
        id: string("id"),
    }
}
