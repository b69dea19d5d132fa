use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartEngine, ChartResource, PriceSeries},
    errors::ChartError,
    logging::LogComponent,
};
use crate::log_debug;

const PADDING: f64 = 40.0;
const AXIS_SPACE: f64 = 70.0;
const LINE_COLOR: &str = "#667eea";
const FILL_COLOR: &str = "rgba(102, 126, 234, 0.1)";
const TEXT_COLOR: &str = "#666666";

/// Rectangle the line is drawn into, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            left: AXIS_SPACE,
            top: PADDING,
            width: (f64::from(width) - AXIS_SPACE - PADDING).max(1.0),
            height: (f64::from(height) - PADDING * 2.0).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Canvas coordinates of every point, oldest at the left edge. A flat series
/// sits on the vertical middle; a single point sits on the horizontal middle.
pub fn project_points(series: &PriceSeries, area: PlotArea) -> Vec<(f64, f64)> {
    let Some((min, max)) = series.value_range() else {
        return Vec::new();
    };
    let range = max - min;
    let step = if series.len() > 1 { area.width / (series.len() - 1) as f64 } else { 0.0 };

    series
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if series.len() > 1 { area.left + step * i as f64 } else { area.left + area.width / 2.0 };
            let y = if range > 0.0 {
                area.top + (max - value) / range * area.height
            } else {
                area.top + area.height / 2.0
            };
            (x, y)
        })
        .collect()
}

/// Filled close-price line on a 2D canvas
pub struct CanvasLineChart {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasLineChart {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.into(), width, height }
    }

    fn canvas_context(&self) -> Result<CanvasRenderingContext2d, ChartError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::SurfaceUnavailable("no document".to_string()))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| ChartError::SurfaceUnavailable(format!("#{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::SurfaceUnavailable(format!("#{} is not a canvas", self.canvas_id)))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| ChartError::SurfaceUnavailable("2D context unavailable".to_string()))
    }

    fn draw(&self, context: &CanvasRenderingContext2d, series: &PriceSeries) -> Result<(), ChartError> {
        let area = PlotArea::for_canvas(self.width, self.height);
        let points = project_points(series, area);
        context.clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));

        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Ok(());
        };

        context.begin_path();
        context.move_to(first.0, area.bottom());
        for (x, y) in &points {
            context.line_to(*x, *y);
        }
        context.line_to(last.0, area.bottom());
        context.close_path();
        context.set_fill_style_str(FILL_COLOR);
        context.fill();

        context.begin_path();
        context.move_to(first.0, first.1);
        for (x, y) in points.iter().skip(1) {
            context.line_to(*x, *y);
        }
        context.set_stroke_style_str(LINE_COLOR);
        context.set_line_width(2.0);
        context.stroke();

        self.draw_axes(context, series, area)
    }

    fn draw_axes(&self, context: &CanvasRenderingContext2d, series: &PriceSeries, area: PlotArea) -> Result<(), ChartError> {
        let fail = |e: wasm_bindgen::JsValue| ChartError::DrawFailed(format!("{:?}", e));
        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("12px sans-serif");

        if let Some((min, max)) = series.value_range() {
            context.fill_text(&format!("¥{:.2}", max), 4.0, area.top + 4.0).map_err(fail)?;
            context.fill_text(&format!("¥{:.2}", min), 4.0, area.bottom()).map_err(fail)?;
        }
        if let (Some(first), Some(last)) = (series.labels.first(), series.labels.last()) {
            let baseline = area.bottom() + 20.0;
            context.fill_text(first, area.left, baseline).map_err(fail)?;
            let width = context.measure_text(last).map(|m| m.width()).unwrap_or(0.0);
            context.fill_text(last, area.left + area.width - width, baseline).map_err(fail)?;
        }
        context.fill_text(series.label, area.left, area.top - 12.0).map_err(fail)?;
        Ok(())
    }
}

impl ChartEngine for CanvasLineChart {
    fn construct(&self, series: &PriceSeries) -> Result<Box<dyn ChartResource>, ChartError> {
        let context = self.canvas_context()?;
        self.draw(&context, series)?;
        log_debug!(LogComponent::Infrastructure("CanvasLineChart"), "Drew {} points on #{}", series.len(), self.canvas_id);
        Ok(Box::new(CanvasChart { context, width: self.width, height: self.height, disposed: false }))
    }
}

/// The drawn chart; disposing wipes the canvas.
struct CanvasChart {
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    disposed: bool,
}

impl ChartResource for CanvasChart {
    fn dispose(&mut self) {
        if !self.disposed {
            self.context.clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
            self.disposed = true;
        }
    }
}
