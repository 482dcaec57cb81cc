use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A single container element the controllers render into.
pub trait Surface {
    /// Replaces the container's markup.
    fn set_html(&self, html: &str);
    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);
}

impl<S: Surface + ?Sized> Surface for Rc<S> {
    fn set_html(&self, html: &str) {
        (**self).set_html(html);
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible);
    }
}

/// In-memory container. Keeps every write so callers can inspect the
/// loading placeholder as well as the final markup.
#[derive(Debug)]
pub struct MemorySurface {
    history: RefCell<Vec<String>>,
    visible: Cell<bool>,
}

impl MemorySurface {
    pub const fn new(visible: bool) -> Self {
        Self {
            history: RefCell::new(Vec::new()),
            visible: Cell::new(visible),
        }
    }

    pub fn html(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    pub fn writes(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Surface for MemorySurface {
    fn set_html(&self, html: &str) {
        self.history.borrow_mut().push(html.to_string());
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}
