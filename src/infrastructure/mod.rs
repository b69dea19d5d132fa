pub mod http;
pub mod rendering;
pub mod services;

pub use http::GlooTransport;
pub use rendering::CanvasLineChart;
pub use services::{BrowserTimeProvider, ConsoleLogger};
