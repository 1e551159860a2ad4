//! Todo Widget Entry Point

mod models;
mod store;
mod storage;
mod config;
mod view;
mod widget;
mod events;
mod browser;
mod context;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Host element the widget mounts into when present
const ROOT_SELECTOR: &str = "[data-js-todo]";
const CONFIG_ATTRIBUTE: &str = "data-js-todo-config";
/// `window.__todoWidgetLogs()` returns the buffered log lines
const LOG_HOOK: &str = "__todoWidgetLogs";

fn main() {
    console_error_panic_hook::set_once();

    let root = find_root();
    let (config, config_error) = read_config(root.as_ref());

    if let Err(e) = ring_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring malformed {}: {}", CONFIG_ATTRIBUTE, e);
    }
    expose_log_tail();

    match root {
        Some(root) => {
            log::info!("Mounting todo widget into {}", ROOT_SELECTOR);
            leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
        }
        None => {
            log::info!("No {} element, mounting todo widget into body", ROOT_SELECTOR);
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}

fn expose_log_tail() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dump = Closure::<dyn Fn() -> js_sys::Array>::new(|| {
        ring_logger::recent()
            .into_iter()
            .map(JsValue::from)
            .collect::<js_sys::Array>()
    });
    if js_sys::Reflect::set(&window, &JsValue::from_str(LOG_HOOK), dump.as_ref()).is_err() {
        log::warn!("Could not install {}", LOG_HOOK);
    }
    dump.forget();
}

fn find_root() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(ROOT_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn read_config(root: Option<&web_sys::HtmlElement>) -> (WidgetConfig, Option<serde_json::Error>) {
    match root.and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE)) {
        Some(raw) => match WidgetConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(e) => (WidgetConfig::default(), Some(e)),
        },
        None => (WidgetConfig::default(), None),
    }
}
