use std::cmp::Ordering;

use super::legend::{labelise, plain_value};
use super::types::{BarChartSpec, LegendPosition, PieChartSpec};
use crate::config::ChartConfig;

/// Cut used when a pie chart sets no slice limit.
const DEFAULT_MAX_SLICES: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
	/// Horizontal center of the bar.
	pub x: f64,
	/// Top edge of the bar.
	pub y: f64,
	pub width: f64,
	pub height: f64,
	pub value: f64,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLabel {
	pub position: usize,
	pub x: f64,
	pub y: f64,
	pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarLayout {
	/// Bars indexed by series, then position.
	pub bars: Vec<Vec<BarGeometry>>,
	pub labels: Vec<BarLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSliceLayout {
	/// Index of the value in the input.
	pub order: usize,
	pub value: f64,
	/// Set when this slice also carries every value past the slice limit.
	pub others: bool,
	/// Angles in degrees, counter-clockwise from the positive x axis; `end < start`.
	pub start_angle: f64,
	pub end_angle: f64,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub marker: (f64, f64),
	pub marker_radius: f64,
	pub text_position: (f64, f64),
	pub text: String,
	pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieLayout {
	pub center: (f64, f64),
	pub radius: f64,
	pub total: f64,
	pub slices: Vec<PieSliceLayout>,
	pub legend: Vec<LegendEntry>,
}

impl PieLayout {
	/// Slice values in drawing order.
	pub fn values(&self) -> Vec<f64> {
		self.slices.iter().map(|slice| slice.value).collect()
	}

	pub fn legend_texts(&self) -> Vec<&str> {
		self.legend.iter().map(|entry| entry.text.as_str()).collect()
	}
}

pub fn bar_layout(spec: &BarChartSpec, config: &ChartConfig) -> BarLayout {
	let len = spec.positions();
	if len == 0 {
		return BarLayout::default();
	}
	let multi = spec.series.len();
	let (x, y) = (0.0, 0.0);
	let (width, height) = (spec.size.width, spec.size.height);
	let gutter = config.bar_gutter;
	let vgutter = config.bar_vgutter;

	let mut max = spec
		.series
		.iter()
		.flatten()
		.copied()
		.fold(f64::NEG_INFINITY, f64::max);
	// shorter series are padded with zeros
	if spec.series.iter().any(|s| s.len() < len) {
		max = max.max(0.0);
	}
	let scale = if max.is_finite() && max > 0.0 {
		(height - 2.0 * vgutter) / max
	} else {
		0.0
	};

	let raw_width = width / (len as f64 * (100.0 + gutter) + gutter) * 100.0;
	let mut cursor = x + raw_width * gutter / 100.0;
	let hgutter = (raw_width * gutter / 100.0).round();
	let bar_width = raw_width.floor() / multi as f64;

	let mut bars: Vec<Vec<BarGeometry>> = vec![Vec::with_capacity(len); multi];
	for position in 0..len {
		for (series_idx, series) in spec.series.iter().enumerate() {
			let value = series.get(position).copied().unwrap_or(0.0);
			let bar_height = (value * scale).round();
			let color_idx = if multi > 1 { series_idx } else { position };
			bars[series_idx].push(BarGeometry {
				x: (cursor + bar_width / 2.0).round(),
				y: y + height - vgutter - bar_height,
				width: bar_width,
				height: bar_height,
				value,
				color: config.color(color_idx).to_string(),
			});
			cursor += bar_width;
		}
		cursor += hgutter;
	}

	let labels = if spec.show_labels {
		bar_labels(&bars, &spec.labels, config)
	} else {
		Vec::new()
	};

	BarLayout { bars, labels }
}

/// One label per position that has label text, centered over all series at that
/// position and placed below the first series' bar.
fn bar_labels(bars: &[Vec<BarGeometry>], labels: &[Option<String>], config: &ChartConfig) -> Vec<BarLabel> {
	let Some(first) = bars.first() else {
		return Vec::new();
	};
	let mut placed = Vec::new();
	for (position, anchor) in first.iter().enumerate() {
		let Some(Some(text)) = labels.get(position) else {
			continue;
		};
		let total_x: f64 = bars.iter().map(|series| series[position].x).sum();
		placed.push(BarLabel {
			position,
			x: total_x / bars.len() as f64,
			y: anchor.y + anchor.height + config.bar_label_offset,
			text: text.clone(),
		});
	}
	placed
}

pub fn pie_layout(spec: &PieChartSpec, config: &ChartConfig) -> PieLayout {
	let (cx, cy) = spec.center;
	let radius = spec.radius;
	let total: f64 = spec.values.iter().sum();

	let mut sorted: Vec<(usize, f64)> = spec.values.iter().copied().enumerate().collect();
	sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

	let mut cut = spec.max_slices.unwrap_or(DEFAULT_MAX_SLICES);
	let mut search_cut = true;
	let mut others = false;
	for i in 0..sorted.len() {
		if search_cut && total != 0.0 && sorted[i].1 * 100.0 / total < config.min_percent {
			cut = i;
			search_cut = false;
		}
		if i > cut {
			search_cut = false;
			sorted[cut].1 += sorted[i].1;
			others = true;
		}
	}
	sorted.truncate((cut + 1).min(sorted.len()));

	let mut slices = Vec::with_capacity(sorted.len());
	let mut angle = 0.0;
	for (i, &(order, value)) in sorted.iter().enumerate() {
		let sweep = if total != 0.0 { 360.0 * value / total } else { 0.0 };
		if i == 0 {
			angle = 90.0 + sweep / 2.0;
		}
		let sweep = if sorted.len() == 1 && total != 0.0 { 360.0 } else { sweep };
		slices.push(PieSliceLayout {
			order,
			value,
			others: others && i == cut,
			start_angle: angle,
			end_angle: angle - sweep,
			color: config.color(i).to_string(),
		});
		angle -= sweep;
	}

	let legend = pie_legend(spec, &slices, total, config);
	log::debug!(
		"pie layout: {} values, {} slices, total {total}",
		spec.values.len(),
		slices.len()
	);

	PieLayout {
		center: (cx, cy),
		radius,
		total,
		slices,
		legend,
	}
}

fn pie_legend(spec: &PieChartSpec, slices: &[PieSliceLayout], total: f64, config: &ChartConfig) -> Vec<LegendEntry> {
	let (cx, cy) = spec.center;
	let r = spec.radius;
	let x = cx + r + r / 5.0;
	let text_height = config.font_size * 1.2;
	let row_height = text_height.max(2.0 * config.legend_marker_radius);
	let step = text_height * 1.2;

	let texts: Vec<String> = slices
		.iter()
		.map(|slice| {
			let template = if slice.others {
				Some(config.others_label.as_str())
			} else {
				spec.legend.get(slice.order).map(String::as_str)
			};
			match template {
				Some(template) => labelise(template, slice.value, total),
				None => plain_value(slice.value),
			}
		})
		.collect();

	if texts.is_empty() {
		return Vec::new();
	}
	let block_height = step * (texts.len() - 1) as f64 + row_height;
	let block_width = 20.0
		+ texts
			.iter()
			.map(|text| approx_text_width(text, config.font_size))
			.fold(0.0, f64::max);
	let (dx, dy) = match spec.legend_position {
		LegendPosition::East => (0.0, -block_height / 2.0),
		LegendPosition::West => (-block_width - 2.0 * r - 20.0, -block_height / 2.0),
		LegendPosition::North => (-r - block_width / 2.0, -r - block_height - 10.0),
		LegendPosition::South => (-r - block_width / 2.0, r + 10.0),
	};

	let mut row_y = cy + 10.0;
	let mut entries = Vec::with_capacity(texts.len());
	for (slice, text) in slices.iter().zip(texts) {
		entries.push(LegendEntry {
			marker: (x + config.legend_marker_radius + dx, row_y + dy),
			marker_radius: config.legend_marker_radius,
			text_position: (x + 20.0 + dx, row_y + dy),
			text,
			color: slice.color.clone(),
		});
		row_y += step;
	}
	entries
}

// Canvas text metrics are not available off-screen; half an em per glyph is close enough
// for sans-serif digits and labels.
fn approx_text_width(text: &str, font_size: f64) -> f64 {
	text.chars().count() as f64 * font_size * 0.55
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> ChartConfig {
		ChartConfig::default()
	}

	#[test]
	fn bar_geometry_matches_fixed_canvas() {
		let layout = bar_layout(&BarChartSpec::new(vec![10.0, 5.0, 0.0]), &config());
		let bars = &layout.bars[0];
		assert_eq!(bars.len(), 3);
		// 200 / (3 * 120 + 20) * 100 = 52.63..
		assert_eq!(bars[0].width, 52.0);
		assert_eq!(bars[0].height, 80.0);
		assert_eq!(bars[0].y, 20.0);
		assert_eq!(bars[1].height, 40.0);
		assert_eq!(bars[1].y, 60.0);
		assert_eq!(bars[2].height, 0.0);
		assert_eq!(bars[2].y, 100.0);
		assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
		assert!(layout.labels.is_empty());
	}

	#[test]
	fn bar_labels_skip_missing_positions() {
		let spec = BarChartSpec::new(vec![1.0, 2.0, 3.0, 4.0]).with_labels(
			vec![Some("-5".to_string()), None, Some("5".to_string())],
			true,
		);
		let layout = bar_layout(&spec, &config());
		let positions: Vec<usize> = layout.labels.iter().map(|l| l.position).collect();
		assert_eq!(positions, vec![0, 2]);
		for label in &layout.labels {
			let bar = &layout.bars[0][label.position];
			assert_eq!(label.x, bar.x);
			assert_eq!(label.y, 110.0);
		}
	}

	#[test]
	fn bar_labels_hidden_unless_requested() {
		let spec = BarChartSpec::new(vec![1.0]).with_labels(vec![Some("a".to_string())], false);
		assert!(bar_layout(&spec, &config()).labels.is_empty());
	}

	#[test]
	fn all_zero_bars_stay_flat() {
		let layout = bar_layout(&BarChartSpec::new(vec![0.0, 0.0]), &config());
		assert!(layout.bars[0].iter().all(|bar| bar.height == 0.0));
	}

	#[test]
	fn category_legend_keeps_input_numbering() {
		let layout = pie_layout(&PieChartSpec::category(vec![1.0, 4.0, 2.0]), &config());
		assert_eq!(layout.values(), vec![4.0, 2.0, 1.0]);
		assert_eq!(
			layout.legend_texts(),
			vec!["2 - 57.14% (4)", "3 - 28.57% (2)", "1 - 14.29% (1)"]
		);
	}

	#[test]
	fn first_slice_is_centered_at_top() {
		let layout = pie_layout(&PieChartSpec::binary_proportion(1.0, 4.0), &config());
		let first = &layout.slices[0];
		assert_eq!(first.value, 3.0);
		assert!((first.start_angle - 225.0).abs() < 1e-9);
		assert!((first.end_angle + 45.0).abs() < 1e-9);
		let second = &layout.slices[1];
		assert!((second.start_angle - first.end_angle).abs() < 1e-9);
		assert!((second.end_angle + 135.0).abs() < 1e-9);
	}

	#[test]
	fn single_slice_is_a_full_circle() {
		let layout = pie_layout(&PieChartSpec::category(vec![5.0]), &config());
		let slice = &layout.slices[0];
		assert!((slice.start_angle - slice.end_angle - 360.0).abs() < 1e-9);
	}

	#[test]
	fn slices_past_the_limit_fold_into_others() {
		let values = vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0];
		let labels: Vec<String> = (1..=8).map(|n| format!("{n} PSMs")).collect();
		let layout = pie_layout(&PieChartSpec::labeled(values, &labels), &config());
		assert_eq!(layout.slices.len(), 6);
		assert_eq!(layout.values(), vec![10.0, 9.0, 8.0, 7.0, 6.0, 12.0]);
		assert!(layout.slices[5].others);
		assert_eq!(layout.legend_texts()[0], "1 PSMs - 10");
		assert_eq!(layout.legend_texts()[5], "Others");
	}

	#[test]
	fn tiny_values_fold_into_others() {
		let layout = pie_layout(&PieChartSpec::category(vec![500.0, 400.0, 2.0, 1.0]), &config());
		assert_eq!(layout.values(), vec![500.0, 400.0, 3.0]);
		assert!(layout.slices[2].others);
	}

	#[test]
	fn legend_is_vertically_centered_east_of_pie() {
		let layout = pie_layout(&PieChartSpec::category(vec![1.0, 1.0]), &config());
		let (first, second) = (&layout.legend[0], &layout.legend[1]);
		assert_eq!(first.text_position.0, 35.0 + 35.0 + 7.0 + 20.0);
		let middle = (first.marker.1 + second.marker.1) / 2.0;
		assert!((middle - 65.0).abs() < 1.0);
	}
}
