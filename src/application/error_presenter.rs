use std::cell::RefCell;
use std::rc::Rc;

use super::render::ErrorSurface;
use crate::domain::logging::LogComponent;
use crate::log_error;

/// Shared failure channel. A new message overwrites the one on screen;
/// there is no queue.
pub struct ErrorPresenter {
    surface: Rc<dyn ErrorSurface>,
    current: RefCell<Option<String>>,
}

impl ErrorPresenter {
    pub fn new(surface: Rc<dyn ErrorSurface>) -> Self {
        Self { surface, current: RefCell::new(None) }
    }

    pub fn show(&self, message: &str) {
        log_error!(LogComponent::Application("ErrorPresenter"), "{}", message);
        *self.current.borrow_mut() = Some(message.to_string());
        self.surface.show_message(message);
    }

    /// Close button.
    pub fn dismiss(&self) {
        self.current.borrow_mut().take();
        self.surface.hide();
    }

    /// Clicks on the modal content keep it open; clicks on the backdrop close it.
    pub fn handle_backdrop_click(&self, inside_modal: bool) {
        if !inside_modal {
            self.dismiss();
        }
    }

    pub fn current_message(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.current.borrow().is_some()
    }
}
