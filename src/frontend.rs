mod gallery;
mod pages;
mod widgets;

use crate::assets::BasePath;
use crate::language::{load_language, save_language, Language, PreferenceStore};
use crate::listeners::{GalleryKey, KeySource, TimerSource};
use crate::logging::{self, LogLevel};
use crate::routes::Route;
use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, EventTarget, KeyboardEvent, Storage};
use yew::prelude::*;

const LEAVE_TRANSITION_MS: i32 = 260;

fn log_threshold() -> LogLevel {
    LogLevel::parse(option_env!("NEO_ORBIT_LOG_LEVEL").unwrap_or("info"), LogLevel::Info)
}

pub(crate) fn log(level: LogLevel, event: &str, fields: serde_json::Value) {
    logging::log_event(log_threshold(), level, event, fields);
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `window.localStorage`, read fresh on every call.
pub(crate) struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
        let storage = local_storage().ok_or("local storage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|_| "local storage rejected write")
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(crate) fn navigate(href: &str) {
    if let Some(win) = window() {
        let _ = win.location().set_href(href);
    }
}

/// Navigates after the leave transition, or at once when reduced motion is
/// requested.
pub(crate) fn navigate_after_leave(href: String) {
    if prefers_reduced_motion() {
        navigate(&href);
        return;
    }

    let Some(win) = window() else {
        navigate(&href);
        return;
    };

    let callback = Closure::once_into_js(move || navigate(&href));
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<Function>(),
            LEAVE_TRANSITION_MS,
        )
        .is_err()
    {
        log(LogLevel::Warn, "leave_timer_failed", serde_json::json!({}));
    }
}

/// A DOM listener that is removed when dropped.
pub(crate) struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target,
            event,
            callback,
        })
    }

    pub(crate) fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let target: EventTarget = window()?.into();
        Self::attach(target, event, handler)
    }

    pub(crate) fn on_document_element(
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let root = window()?.document()?.document_element()?;
        Self::attach(root.into(), event, handler)
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// `setInterval` on the window.
pub(crate) struct WindowTimers;

pub(crate) struct IntervalHandle {
    id: Option<i32>,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id, window()) {
            win.clear_interval_with_handle(id);
        }
    }
}

impl TimerSource for WindowTimers {
    type Handle = IntervalHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle {
        let tick = Closure::wrap(tick);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window().and_then(|win| {
            win.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                timeout,
            )
            .ok()
        });

        IntervalHandle { id, _tick: tick }
    }
}

/// Global `keydown` listener on the window.
pub(crate) struct WindowKeys;

impl KeySource for WindowKeys {
    type Handle = Option<EventListenerGuard>;

    fn attach(&self, mut handler: Box<dyn FnMut(GalleryKey)>) -> Self::Handle {
        EventListenerGuard::on_window("keydown", move |event: Event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|keyboard| GalleryKey::from_key(&keyboard.key()))
            else {
                return;
            };

            event.prevent_default();
            handler(key);
        })
    }
}

/// Reads the stored language once when the calling page mounts; selecting a
/// language updates this page's state and persists the choice.
#[hook]
pub(crate) fn use_language(page: Route) -> (Language, Callback<Language>) {
    let language = use_state(|| load_language(&BrowserStore));

    let on_select = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            if let Err(reason) = save_language(&BrowserStore, next) {
                log(
                    LogLevel::Warn,
                    "language_persist_failed",
                    serde_json::json!({ "language": next.code(), "reason": reason }),
                );
            }

            log(
                LogLevel::Info,
                "language_changed",
                serde_json::json!({ "page": page.segment(), "language": next.code() }),
            );
            language.set(next);
        })
    };

    (*language, on_select)
}

#[function_component(App)]
fn app() -> Html {
    let base = BasePath::from_build();
    let route = Route::from_path(&base, &current_path());

    use_effect_with(route, move |route| {
        log(
            LogLevel::Debug,
            "page_mounted",
            serde_json::json!({ "page": route.segment(), "base_path": base.as_str() }),
        );
        || ()
    });

    match route {
        Route::Home => html! { <pages::HomePage /> },
        Route::About => html! { <pages::AboutPage /> },
        Route::Contact => html! { <pages::ContactPage /> },
        Route::Projects => html! { <pages::ProjectsPage /> },
        Route::Resume => html! { <pages::ResumePage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
