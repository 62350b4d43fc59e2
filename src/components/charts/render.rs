use web_sys::CanvasRenderingContext2d;

use super::layout::{BarLayout, PieLayout};
use super::types::CanvasSize;
use crate::config::ChartConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	Start,
	Middle,
}

/// Drawing surface the chart layouts are painted on.
pub trait ChartBackend {
	fn clear(&mut self, size: CanvasSize);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
	/// Pie sector between two angles in degrees, counter-clockwise from the positive x axis.
	fn fill_sector(&mut self, center: (f64, f64), radius: f64, start: f64, end: f64, color: &str);
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str);
	fn fill_text(&mut self, x: f64, y: f64, text: &str, font: &str, color: &str, anchor: TextAnchor);
}

pub struct CanvasBackend {
	ctx: CanvasRenderingContext2d,
}

impl CanvasBackend {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl ChartBackend for CanvasBackend {
	fn clear(&mut self, size: CanvasSize) {
		self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_sector(&mut self, center: (f64, f64), radius: f64, start: f64, end: f64, color: &str) {
		let (cx, cy) = center;
		// canvas angles grow clockwise because the y axis points down
		self.ctx.begin_path();
		self.ctx.move_to(cx, cy);
		let _ = self
			.ctx
			.arc(cx, cy, radius, (-start).to_radians(), (-end).to_radians());
		self.ctx.close_path();
		self.ctx.set_fill_style_str(color);
		self.ctx.fill();
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str) {
		self.ctx.begin_path();
		let _ = self
			.ctx
			.arc(center.0, center.1, radius, 0.0, 2.0 * std::f64::consts::PI);
		self.ctx.set_fill_style_str(color);
		self.ctx.fill();
	}

	fn fill_text(&mut self, x: f64, y: f64, text: &str, font: &str, color: &str, anchor: TextAnchor) {
		self.ctx.set_font(font);
		self.ctx.set_fill_style_str(color);
		self.ctx.set_text_baseline("middle");
		self.ctx.set_text_align(match anchor {
			TextAnchor::Start => "start",
			TextAnchor::Middle => "center",
		});
		let _ = self.ctx.fill_text(text, x, y);
	}
}

pub fn render_bar_chart(backend: &mut impl ChartBackend, size: CanvasSize, layout: &BarLayout, config: &ChartConfig) {
	backend.clear(size);
	for bar in layout.bars.iter().flatten() {
		backend.fill_rect(bar.x - bar.width / 2.0, bar.y, bar.width, bar.height, &bar.color);
	}
	for label in &layout.labels {
		backend.fill_text(
			label.x,
			label.y,
			&label.text,
			&config.font,
			&config.text_color,
			TextAnchor::Middle,
		);
	}
}

pub fn render_pie_chart(backend: &mut impl ChartBackend, size: CanvasSize, layout: &PieLayout, config: &ChartConfig) {
	backend.clear(size);
	match layout.slices.as_slice() {
		[only] => backend.fill_circle(layout.center, layout.radius, &only.color),
		slices => {
			for slice in slices {
				backend.fill_sector(
					layout.center,
					layout.radius,
					slice.start_angle,
					slice.end_angle,
					&slice.color,
				);
			}
		}
	}
	for entry in &layout.legend {
		backend.fill_circle(entry.marker, entry.marker_radius, &entry.color);
		backend.fill_text(
			entry.text_position.0,
			entry.text_position.1,
			&entry.text,
			&config.font,
			&config.text_color,
			TextAnchor::Start,
		);
	}
}


#[cfg(test)]
mod tests {
	use super::recording::RecordingBackend;
	use super::*;
	use crate::components::charts::layout::{bar_layout, pie_layout};
	use crate::components::charts::types::{BarChartSpec, PieChartSpec, SMALL_CHART};

	#[test]
	fn bar_labels_use_small_font() {
		let config = ChartConfig::default();
		let spec = BarChartSpec::new(vec![3.0, 1.0]).with_labels(vec![None, Some("0.5".to_string())], true);
		let mut backend = RecordingBackend::default();
		render_bar_chart(&mut backend, SMALL_CHART, &bar_layout(&spec, &config), &config);
		assert_eq!(backend.rects.len(), 2);
		assert_eq!(backend.texts.len(), 1);
		assert_eq!(backend.texts[0].2, "0.5");
		assert_eq!(backend.texts[0].3, "9px sans-serif");
	}

	#[test]
	fn pie_draws_one_sector_and_legend_row_per_slice() {
		let config = ChartConfig::default();
		let layout = pie_layout(&PieChartSpec::binary_proportion(7.0, 10.0), &config);
		let mut backend = RecordingBackend::default();
		render_pie_chart(&mut backend, SMALL_CHART, &layout, &config);
		assert_eq!(backend.clears, 1);
		assert_eq!(backend.sectors.len(), 2);
		assert_eq!(backend.circles.len(), 2);
		let texts: Vec<&str> = backend.texts.iter().map(|t| t.2.as_str()).collect();
		assert_eq!(texts, vec!["70.00% - unique (7)", "30.00% - ambiguous (3)"]);
	}

	#[test]
	fn single_slice_pie_is_drawn_as_circle() {
		let config = ChartConfig::default();
		let layout = pie_layout(&PieChartSpec::category(vec![2.0]), &config);
		let mut backend = RecordingBackend::default();
		render_pie_chart(&mut backend, SMALL_CHART, &layout, &config);
		assert!(backend.sectors.is_empty());
		// pie body plus one legend marker
		assert_eq!(backend.circles.len(), 2);
	}
}
