//! Bridges DOM events to the application: components call [`dispatch`] with a
//! named action and the installed [`StockApp`] handles it on the local executor.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::application::{Action, StockApp};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

thread_local! {
    static APP: RefCell<Option<Rc<StockApp>>> = const { RefCell::new(None) };
}

pub fn install(app: Rc<StockApp>) {
    APP.with(|slot| *slot.borrow_mut() = Some(app));
}

fn installed() -> Option<Rc<StockApp>> {
    APP.with(|slot| slot.borrow().clone())
}

/// Kick off the initial loads.
pub fn start() {
    let Some(app) = installed() else {
        log_warn!(LogComponent::Presentation("Dispatch"), "start() before install()");
        return;
    };
    spawn_local(async move { app.start().await });
}

pub fn dispatch(action: Action) {
    let Some(app) = installed() else {
        log_warn!(LogComponent::Presentation("Dispatch"), "Dropped {:?}: app not installed", action);
        return;
    };
    spawn_local(async move {
        // Failures were already surfaced or logged where they happened.
        if let Err(error) = app.dispatch(action.clone()).await {
            log_debug!(LogComponent::Presentation("Dispatch"), "{:?} ended with: {}", action, error);
        }
    });
}
