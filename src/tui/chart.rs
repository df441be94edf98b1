//! Plotters-powered benchmark scatter widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test/benchmark the data prep separately.
pub struct BenchScatterChart<'a> {
    /// (log10 time, correct digits) per probability algorithm.
    pub probability: &'a [(f64, f64)],
    /// (log10 time, correct digits) per infinite-series algorithm.
    pub series: &'a [(f64, f64)],
    /// (log10 time, correct digits) per numerical-method algorithm.
    pub numerical: &'a [(f64, f64)],
    /// X bounds (log10 of seconds).
    pub x_bounds: [f64; 2],
    /// Y bounds (digits).
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for BenchScatterChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels.
            //
            // We disable the mesh lines to reduce visual clutter in low-resolution
            // terminal rendering; the axes + labels are usually enough.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("log10 time (s)")
                .y_desc("correct digits")
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // Series styling: keep the palette high-contrast for terminal readability.
            let probability_color = RGBColor(255, 0, 255); // magenta
            let series_color = RGBColor(0, 255, 255); // cyan
            let numerical_color = RGBColor(0, 255, 0); // green

            // A colored `Pixel` gives a clean "dot" that looks good in terminals.
            // (`Circle` markers are avoided: the underlying backend currently maps
            // circle radii incorrectly, producing huge circles.)
            chart.draw_series(
                self.probability
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), probability_color)),
            )?;
            chart.draw_series(
                self.series
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), series_color)),
            )?;
            chart.draw_series(
                self.numerical
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), numerical_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
