use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, MutationObserver,
    MutationObserverInit, MutationRecord, Storage,
};

use crate::config::SidebarConfig;
use crate::controller::SidebarController;
use crate::dom::{ClassList, SidebarElements};
use crate::error::ShellError;
use crate::storage::FlagStore;

#[derive(Debug, Clone)]
pub struct WebElement(pub Element);

impl ClassList for WebElement {
    fn contains(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }
}

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, sandboxed iframe). Reads then see no flag.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl FlagStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError> {
        let storage = self.storage.as_ref().ok_or(ShellError::StorageUnavailable)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

type WebController = SidebarController<WebElement, LocalStore>;
type Shared = Rc<RefCell<WebController>>;

thread_local! {
    // One controller per page; a second set of listeners would undo every flip.
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn document() -> Result<Document, ShellError> {
    window()
        .ok_or(ShellError::NoWindow)?
        .document()
        .ok_or(ShellError::NoDocument)
}

fn warn(err: &ShellError) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("sidebar: {}", err)));
}

/// Attach a click handler that lives as long as the page.
fn on_click<F>(target: &Element, shared: &Shared, handler: F) -> Result<(), ShellError>
where
    F: Fn(&mut WebController) -> Result<(), ShellError> + 'static,
{
    let shared = shared.clone();
    let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_ev: Event| {
        if let Err(err) = handler(&mut *shared.borrow_mut()) {
            warn(&err);
        }
    }));
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Re-sync main content on every class-attribute change of the sidebar.
/// Never disconnected.
fn observe_sidebar_class(sidebar: &Element, shared: &Shared) -> Result<(), ShellError> {
    let shared = shared.clone();
    let cb = Closure::<dyn FnMut(Array, MutationObserver)>::wrap(Box::new(
        move |records: Array, _observer: MutationObserver| {
            let class_changed = records.iter().any(|rec| {
                rec.dyn_into::<MutationRecord>()
                    .ok()
                    .and_then(|r| r.attribute_name())
                    .as_deref()
                    == Some("class")
            });
            if class_changed {
                shared.borrow().sync_content_margin();
            }
        },
    ));
    let observer = MutationObserver::new(cb.as_ref().unchecked_ref())?;
    let opts = MutationObserverInit::new();
    opts.set_attributes(true);
    opts.set_attribute_filter(&Array::of1(&JsValue::from_str("class")));
    observer.observe_with_options(sidebar, &opts)?;
    cb.forget();
    Ok(())
}

fn install(config: &SidebarConfig) -> Result<Shared, ShellError> {
    let doc = document()?;
    if INSTALLED.with(|flag| flag.replace(true)) {
        return Err(ShellError::AlreadyInstalled);
    }
    let elements = SidebarElements::lookup(&config.ids, |id| {
        doc.get_element_by_id(id).map(WebElement)
    });
    // Listener targets; element handles are cheap JS references.
    let targets = elements.clone();

    let mut controller = SidebarController::new(elements, LocalStore::open(), config);
    let bindings = controller.bindings();
    controller.initialize();
    let shared: Shared = Rc::new(RefCell::new(controller));

    if let (true, Some(btn)) = (bindings.mobile_toggle, &targets.mobile_toggle) {
        on_click(&btn.0, &shared, |c| {
            c.toggle_mobile();
            Ok(())
        })?;
    }
    if let (true, Some(overlay)) = (bindings.overlay, &targets.overlay) {
        on_click(&overlay.0, &shared, |c| {
            c.close_mobile();
            Ok(())
        })?;
    }
    if let (true, Some(btn)) = (bindings.desktop_toggle, &targets.desktop_toggle) {
        on_click(&btn.0, &shared, |c| c.toggle_desktop_collapse())?;
    }
    if let (true, Some(logo)) = (bindings.logo_area, &targets.logo_area) {
        on_click(&logo.0, &shared, |c| c.expand_on_logo_click())?;
    }
    if let (true, Some(sidebar)) = (bindings.observe_sidebar, &targets.sidebar) {
        observe_sidebar_class(&sidebar.0, &shared)?;
    }
    Ok(shared)
}

/// Run `f` once the DOM is parsed: now if it already is, otherwise on
/// `DOMContentLoaded`.
fn when_ready<F>(f: F) -> Result<(), ShellError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(f);
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Installed sidebar. Listeners keep the controller alive after this handle
/// is dropped on the JS side. Only one may exist per page; later
/// constructions fail with `AlreadyInstalled`.
#[wasm_bindgen]
pub struct SidebarShell {
    controller: Shared,
}

#[wasm_bindgen]
impl SidebarShell {
    /// Bind against the current document with a JSON config (may be empty).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<SidebarShell, JsValue> {
        let config = SidebarConfig::from_json(config_json)?;
        let controller = install(&config)?;
        Ok(SidebarShell { controller })
    }

    /// Current flags as JSON.
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.borrow().snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Install with the stock ids, classes and storage key once the page is ready.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let res = when_ready(|| match install(&SidebarConfig::default()) {
        Ok(_) => {}
        Err(err @ ShellError::AlreadyInstalled) => warn(&err),
        Err(err) => web_sys::console::error_1(&err.into()),
    });
    if let Err(err) = res {
        web_sys::console::error_1(&err.into());
    }
}
