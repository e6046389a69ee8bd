//! WebAssembly bindings for sorttrace.

use core::time::Duration;
use js_sys::{Array, Int32Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use ::sorttrace::prelude::{
    Algorithm, CompareRole, DifferentialCheck, InstrumentOptions, ReplayScheduler, SortError,
    SortResult, TraceEvent, Tracer,
};

fn to_js_error(err: SortError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_algorithm(name: &str) -> Result<Algorithm, JsValue> {
    name.parse::<Algorithm>().map_err(to_js_error)
}

fn get_bool(options: &JsValue, key: &str) -> Option<bool> {
    if options.is_undefined() || options.is_null() {
        return None;
    }
    let options = Object::from(options.clone());
    Reflect::get(&options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_bool())
}

fn get_f64(options: &JsValue, key: &str) -> Option<f64> {
    if options.is_undefined() || options.is_null() {
        return None;
    }
    let options = Object::from(options.clone());
    Reflect::get(&options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn set(target: &Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), &value).map(|_| ())
}

#[wasm_bindgen]
pub struct TraceStatsWasm {
    pub compares: u32,
    pub updates: u32,
    pub placeholders: u32,
}

#[wasm_bindgen]
pub struct SortResultWasm {
    inner: SortResult<i32>,
}

#[wasm_bindgen]
impl SortResultWasm {
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.inner.algorithm().id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn sorted(&self) -> Int32Array {
        Int32Array::from(self.inner.sorted())
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u32 {
        self.inner.trace().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn stats(&self) -> TraceStatsWasm {
        let stats = self.inner.stats();
        TraceStatsWasm {
            compares: stats.compares as u32,
            updates: stats.updates as u32,
            placeholders: stats.placeholders as u32,
        }
    }

    /// Trace events as plain objects:
    /// `{ kind: "compare", role, a, b }` or `{ kind: "update", index, value }`.
    #[wasm_bindgen(getter)]
    pub fn events(&self) -> Result<Array, JsValue> {
        let events = Array::new();
        for event in self.inner.trace().iter() {
            let object = Object::new();
            match *event {
                TraceEvent::Compare { role, a, b } => {
                    set(&object, "kind", JsValue::from_str("compare"))?;
                    let role = match role {
                        CompareRole::Primary => "primary",
                        CompareRole::Secondary => "secondary",
                    };
                    set(&object, "role", JsValue::from_str(role))?;
                    set(&object, "a", JsValue::from_f64(a as f64))?;
                    set(&object, "b", JsValue::from_f64(b as f64))?;
                }
                TraceEvent::Update { index, value } => {
                    set(&object, "kind", JsValue::from_str("update"))?;
                    set(&object, "index", JsValue::from_f64(index as f64))?;
                    set(&object, "value", JsValue::from(value))?;
                }
            }
            events.push(&object);
        }
        Ok(events)
    }

    /// Milliseconds after replay start at which the last event fires.
    ///
    /// Errors when `delay_ms` is negative, `NaN`, infinite or too large to
    /// represent as a duration.
    #[wasm_bindgen(js_name = completionTime)]
    pub fn completion_time(&self, delay_ms: f64) -> Result<f64, JsValue> {
        let delay = Duration::try_from_secs_f64(delay_ms / 1000.0)
            .map_err(|err| JsValue::from_str(&format!("Invalid delay: {delay_ms} ({err})")))?;
        let completion = ReplayScheduler::new()
            .delay(delay)
            .completion_time(self.inner.trace());
        Ok(completion.as_secs_f64() * 1000.0)
    }

    /// Whether the trace replays over `original` to the reference sort.
    pub fn validate(&self, original: &Int32Array) -> bool {
        self.inner.validate(&original.to_vec())
    }
}

/// Sort `data` with the algorithm named `name`.
///
/// `data` may be `null`, which is reported as an invalid input error.
#[wasm_bindgen]
pub fn sort(
    name: &str,
    data: Option<Int32Array>,
    options: &JsValue,
) -> Result<SortResultWasm, JsValue> {
    let algorithm = parse_algorithm(name)?;
    let Some(values) = data.map(|array| array.to_vec()) else {
        return Err(to_js_error(SortError::InvalidInput(
            "array reference is absent".to_string(),
        )));
    };

    let mut builder = Tracer::new().algorithm(algorithm);
    if let Some(padding) = get_bool(options, "mergePadding") {
        builder = builder.merge_padding(padding);
    }
    if get_bool(options, "verify").unwrap_or(false) {
        builder = builder.verify();
    }

    builder
        .build()
        .and_then(|sorter| sorter.sort(&values))
        .map(|inner| SortResultWasm { inner })
        .map_err(to_js_error)
}

/// Identifiers of every available algorithm.
#[wasm_bindgen]
pub fn algorithms() -> Array {
    Algorithm::ALL
        .iter()
        .map(|algorithm| JsValue::from_str(algorithm.id()))
        .collect()
}

/// Run the randomized self-check and return whether every trace replayed correctly.
#[wasm_bindgen(js_name = selfCheck)]
pub fn self_check(options: &JsValue) -> Result<bool, JsValue> {
    let mut check = DifferentialCheck::new();

    if let Some(runs) = get_f64(options, "runs") {
        check = check.runs(runs as usize);
    }
    if let (Some(min), Some(max)) = (get_f64(options, "minLength"), get_f64(options, "maxLength")) {
        check = check.length_range(min as usize, max as usize);
    }
    if let (Some(min), Some(max)) = (get_f64(options, "minValue"), get_f64(options, "maxValue")) {
        check = check.value_range(min as i64, max as i64);
    }
    if let Some(seed) = get_f64(options, "seed") {
        check = check.seed(seed as u64);
    }
    if let Some(padding) = get_bool(options, "mergePadding") {
        check = check.options(InstrumentOptions {
            merge_padding: padding,
        });
    }

    check
        .run()
        .map(|report| report.passed())
        .map_err(to_js_error)
}
