//! DOM-backed implementations of the dashboard seams.

use std::time::Duration;

use ais_dashboard::render::styles;
use ais_dashboard::timer::Task;
use ais_dashboard::{Scheduler, SessionStore, Surface, TabDeck};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, Storage, Window};

use crate::animation;

const TAB_BUTTON_SELECTOR: &str = ".tab-button";
const TAB_BUTTON_PREFIX: &str = "tab-";
const TAB_PANEL_PREFIX: &str = "tab-content-";
const ACTIVE_CLASS: &str = "active";

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// A container looked up by id on every access, so it survives being
/// replaced by a parent's re-render.
pub struct ElementSurface {
    document: Document,
    id: String,
}

impl ElementSurface {
    pub fn new(document: &Document, id: &str) -> Self {
        Self {
            document: document.clone(),
            id: id.to_string(),
        }
    }

    /// Creates the container as a hidden child of `parent_id` if it is
    /// not on the page yet.
    pub fn ensure(&self, parent_id: &str, class: &str) -> Result<(), JsValue> {
        if self.document.get_element_by_id(&self.id).is_some() {
            return Ok(());
        }
        let Some(parent) = self.document.get_element_by_id(parent_id) else {
            return Err(JsValue::from_str(&format!("missing #{parent_id}")));
        };
        let element: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        element.set_id(&self.id);
        element.set_class_name(class);
        element.style().set_property("display", "none")?;
        parent.append_child(&element)?;
        Ok(())
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.document
            .get_element_by_id(&self.id)
            .and_then(|element| element.query_selector(selector).ok().flatten())
            .is_some()
    }
}

impl Surface for ElementSurface {
    fn set_html(&self, html: &str) {
        match self.document.get_element_by_id(&self.id) {
            Some(element) => element.set_inner_html(html),
            None => log::warn!("container #{} is not on the page", self.id),
        }
    }

    fn is_visible(&self) -> bool {
        html_element(&self.document, &self.id).is_some_and(|element| {
            element
                .style()
                .get_property_value("display")
                .map_or(true, |display| display != "none")
        })
    }

    fn set_visible(&self, visible: bool) {
        let Some(element) = html_element(&self.document, &self.id) else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        if let Err(error) = element.style().set_property("display", display) {
            log::warn!("cannot toggle #{}: {error:?}", self.id);
        }
    }
}

/// Tab buttons `#tab-{id}` with the class `tab-button`, panels `#tab-content-{id}`.
pub struct DomTabDeck {
    document: Document,
}

impl DomTabDeck {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    fn toggle_class(&self, id: &str, active: bool) {
        if let Some(element) = self.document.get_element_by_id(id) {
            if let Err(error) = element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
                log::warn!("cannot update #{id}: {error:?}");
            }
        }
    }

    fn style(&self, id: &str, property: &str, value: &str, transition: Option<String>) {
        let Some(element) = html_element(&self.document, id) else {
            return;
        };
        let style = element.style();
        let applied = match transition {
            Some(transition) => style.set_property("transition", &transition),
            None => style.remove_property("transition").map(drop),
        }
        .and_then(|()| style.set_property(property, value));
        if let Err(error) = applied {
            log::warn!("cannot style #{id}: {error:?}");
        }
    }
}

impl TabDeck for DomTabDeck {
    fn tab_ids(&self) -> Vec<String> {
        let Ok(buttons) = self.document.query_selector_all(TAB_BUTTON_SELECTOR) else {
            return Vec::new();
        };
        (0..buttons.length())
            .filter_map(|index| buttons.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|button| button.id().strip_prefix(TAB_BUTTON_PREFIX).map(str::to_string))
            .collect()
    }

    fn set_panel_active(&self, id: &str, active: bool) {
        self.toggle_class(&format!("{TAB_PANEL_PREFIX}{id}"), active);
    }

    fn set_panel_opacity(&self, id: &str, opacity: f32, transition: Option<Duration>) {
        self.style(
            &format!("{TAB_PANEL_PREFIX}{id}"),
            "opacity",
            &animation::opacity(opacity),
            animation::transition("opacity", transition),
        );
    }

    fn set_button_active(&self, id: &str, active: bool) {
        self.toggle_class(&format!("{TAB_BUTTON_PREFIX}{id}"), active);
    }

    fn set_button_scale(&self, id: &str, scale: f32, transition: Option<Duration>) {
        self.style(
            &format!("{TAB_BUTTON_PREFIX}{id}"),
            "transform",
            &animation::scale(scale),
            animation::transition("transform", transition),
        );
    }
}

/// Tab id of a clicked `.tab-button`, if `element` is one.
pub fn tab_of(element: &Element) -> Option<String> {
    let button = element.closest(TAB_BUTTON_SELECTOR).ok().flatten()?;
    button.id().strip_prefix(TAB_BUTTON_PREFIX).map(str::to_string)
}

/// `window.sessionStorage`; reads and writes are dropped when storage is
/// unavailable (private mode, sandboxed frames).
pub struct SessionStorage {
    storage: Option<Storage>,
}

impl SessionStorage {
    pub fn new(window: &Window) -> Self {
        let storage = window.session_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("sessionStorage unavailable; active tab will not persist");
        }
        Self { storage }
    }
}

impl SessionStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(error) = storage.set_item(key, value) {
                log::warn!("cannot persist {key}: {error:?}");
            }
        }
    }
}

/// `setTimeout`-driven scheduler.
pub struct WindowScheduler {
    window: Window,
}

impl WindowScheduler {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl Scheduler for WindowScheduler {
    fn after(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(error) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            log::error!("setTimeout failed: {error:?}");
        }
    }
}

/// Appends every component stylesheet to `<head>` in one `<style>` element.
pub fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(&styles::ALL.concat()));
    head.append_child(&style)?;
    Ok(())
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
