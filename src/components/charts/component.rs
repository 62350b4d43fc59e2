use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::layout::{BarLayout, PieLayout, bar_layout, pie_layout};
use super::render::{CanvasBackend, render_bar_chart, render_pie_chart};
use super::types::{BarChartSpec, CanvasSize, PieChartSpec};
use crate::config::ChartConfig;
use crate::error::{Error, Result};

/// Appends a canvas of the given size to `container` and returns its 2d context.
fn create_canvas(container: &Element, size: CanvasSize) -> Result<CanvasRenderingContext2d> {
	let document = container.owner_document().ok_or(Error::NoDocument)?;
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.map_err(Error::dom)?
		.dyn_into()
		.map_err(|_| Error::Dom("created element is not a canvas".to_string()))?;
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	container.append_child(&canvas).map_err(Error::dom)?;

	canvas
		.get_context("2d")
		.map_err(Error::dom)?
		.ok_or(Error::NoCanvasContext)?
		.dyn_into()
		.map_err(|_| Error::NoCanvasContext)
}

/// Draws a bar chart into a new canvas inside `container`.
pub fn draw_bar(container: &Element, spec: &BarChartSpec, config: &ChartConfig) -> Result<BarLayout> {
	let ctx = create_canvas(container, spec.size)?;
	let layout = bar_layout(spec, config);
	render_bar_chart(&mut CanvasBackend::new(ctx), spec.size, &layout, config);
	debug!(
		"bar chart: {} positions, {} labels",
		spec.positions(),
		layout.labels.len()
	);
	Ok(layout)
}

/// Draws a pie chart into a new canvas inside `container`.
pub fn draw_pie(container: &Element, spec: &PieChartSpec, config: &ChartConfig) -> Result<PieLayout> {
	let ctx = create_canvas(container, spec.size)?;
	let layout = pie_layout(spec, config);
	render_pie_chart(&mut CanvasBackend::new(ctx), spec.size, &layout, config);
	Ok(layout)
}

/// Single-series bar chart at 200x120, optionally labelled below each bar.
pub fn draw_bar_chart(
	container: &Element,
	series_values: Vec<f64>,
	series_labels: Option<Vec<Option<String>>>,
	show_labels: bool,
	config: &ChartConfig,
) -> Result<()> {
	let spec = BarChartSpec::new(series_values).with_labels(series_labels.unwrap_or_default(), show_labels);
	draw_bar(container, &spec, config).map(|_| ())
}

/// Pie chart with legend entries numbered 1..N.
pub fn draw_category_pie_chart(container: &Element, values: Vec<f64>, config: &ChartConfig) -> Result<()> {
	draw_pie(container, &PieChartSpec::category(values), config).map(|_| ())
}

/// Pie chart with caller supplied legend labels, at most 5 slices plus "Others".
pub fn draw_labeled_pie_chart<S: AsRef<str>>(
	container: &Element,
	values: Vec<f64>,
	labels: &[S],
	config: &ChartConfig,
) -> Result<()> {
	draw_pie(container, &PieChartSpec::labeled(values, labels), config).map(|_| ())
}

/// Unique vs. ambiguous pie chart at 300x120.
pub fn draw_binary_proportion_chart(
	container: &Element,
	matched_count: f64,
	total_count: f64,
	config: &ChartConfig,
) -> Result<()> {
	draw_pie(
		container,
		&PieChartSpec::binary_proportion(matched_count, total_count),
		config,
	)
	.map(|_| ())
}

#[component]
pub fn BarChart(
	#[prop(into)] spec: Signal<BarChartSpec>,
	#[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let spec = spec.get();
		container.set_inner_html("");
		if let Err(err) = draw_bar(&container, &spec, &config) {
			warn!("bar chart not drawn: {err}");
		}
	});

	view! { <div node_ref=container_ref class="pia-chart pia-bar-chart" /> }
}

#[component]
pub fn PieChart(
	#[prop(into)] spec: Signal<PieChartSpec>,
	#[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let spec = spec.get();
		container.set_inner_html("");
		if let Err(err) = draw_pie(&container, &spec, &config) {
			warn!("pie chart not drawn: {err}");
		}
	});

	view! { <div node_ref=container_ref class="pia-chart pia-pie-chart" /> }
}
