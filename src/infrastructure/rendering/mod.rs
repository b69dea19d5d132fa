pub mod canvas_chart;

pub use canvas_chart::{CanvasLineChart, PlotArea, project_points};
