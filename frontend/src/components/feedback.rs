//! User feedback outside the component tree: transient toasts, blocking
//! alerts and confirmations, and the unsaved-changes guard.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, HtmlElement};

const DIRTY_FLAG: &str = "app_dirty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(22, 163, 74, 0.95)",
            ToastKind::Error => "rgba(220, 38, 38, 0.95)",
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
        }
    }
}

/// Shows `message` at the bottom of the screen for three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (name, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", kind.background()),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "6px"),
        ("z-index", "10000"),
        ("max-width", "90vw"),
    ] {
        style.set_property(name, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Blocking alert with a title line.
pub fn alert(title: &str, text: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(&format!("{title}\n\n{text}")).ok();
    }
}

/// Blocking yes/no question; `false` when the browser refuses to ask.
pub fn confirm(text: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(text).ok())
        .unwrap_or(false)
}

/// Raises or lowers the window-level unsaved-changes flag.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str(DIRTY_FLAG),
            &JsValue::from_bool(dirty),
        );
    }
}

fn window_is_dirty() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str(DIRTY_FLAG)).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Asks the browser to confirm leaving the page while the flag is up.
pub fn install_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn(BeforeUnloadEvent)>::new(|event: BeforeUnloadEvent| {
        if window_is_dirty() {
            event.prevent_default();
            event.set_return_value("Vos modifications ne sont pas enregistrées.");
        }
    });
    window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
