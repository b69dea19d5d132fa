use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::{AppConfig, Collaborators, StockApp};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::{BrowserTimeProvider, CanvasLineChart, ConsoleLogger, GlooTransport};
use crate::presentation::LeptosViews;
use crate::time_utils::BrowserClock;

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

/// Wire logging, mount the UI and start the initial loads.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    });
    domain::logging::init_logger(console_logger);
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let config = AppConfig::default();
    let ui_config = config.clone();
    leptos::mount_to_body(move || leptos::view! { <App config=ui_config.clone()/> });

    let collaborators = Collaborators {
        transport: Rc::new(GlooTransport::new()),
        chart_engine: Rc::new(CanvasLineChart::new(
            config.chart_canvas_id.clone(),
            config.chart_width,
            config.chart_height,
        )),
        clock: Rc::new(BrowserClock),
    };
    let stock_app = Rc::new(StockApp::new(&config, LeptosViews::targets(), collaborators));
    presentation::dispatch::install(stock_app);
    presentation::dispatch::start();

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Stock board initialized");
}
