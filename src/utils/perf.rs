use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DEV_HOSTNAME;
use crate::error::Result;
use crate::utils::dom;

/// Milliseconds from navigation start to the end of the load event.
///
/// `None` while the load event has not finished yet.
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    if load_event_end <= 0.0 || load_event_end < navigation_start {
        return None;
    }
    Some(load_event_end - navigation_start)
}

/// Logs the page load time once the window has loaded. Only active on the dev host.
pub fn monitor_page_load() -> Result<()> {
    let window = dom::window()?;
    let hostname = window.location().hostname()?;
    if hostname != DEV_HOSTNAME {
        debug!("Skipping load timing on {}", hostname);
        return Ok(());
    }

    if dom::document()?.ready_state() == "complete" {
        log_page_load();
        return Ok(());
    }

    let on_load = Closure::once_into_js(move || {
        // loadEventEnd is only filled in after the load handlers return.
        Timeout::new(0, log_page_load).forget();
    });
    window.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
    Ok(())
}

fn log_page_load() {
    let Some(performance) = web_sys::window().and_then(|window| window.performance()) else {
        warn!("Performance API unavailable, no load timing");
        return;
    };
    let timing = performance.timing();
    match page_load_ms(timing.navigation_start(), timing.load_event_end()) {
        Some(ms) => info!("Page load time: {}ms", ms),
        None => debug!("Load event has not finished yet"),
    }
}
