use std::rc::Rc;
use std::time::Duration;

use exodetect_core::{DashboardError, IntervalTimer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `window.setInterval` behind the core [`IntervalTimer`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserInterval;

/// Keeps the JS closure alive for as long as the interval is registered.
pub struct IntervalHandle {
    id: i32,
    _callback: Closure<dyn Fn()>,
}

impl IntervalTimer for BrowserInterval {
    type Handle = IntervalHandle;

    fn set_interval(
        &self,
        period: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<IntervalHandle, DashboardError> {
        let window = web_sys::window()
            .ok_or_else(|| DashboardError::Config("No window object available".to_string()))?;

        let callback = Closure::<dyn Fn()>::new(move || tick());
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| DashboardError::Config(format!("setInterval failed: {:?}", e)))?;

        Ok(IntervalHandle {
            id,
            _callback: callback,
        })
    }

    fn clear_interval(&self, handle: IntervalHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.id);
        }
    }
}
