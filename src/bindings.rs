//! Functions exported to the page scripts under their historical names.

use std::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement};

use crate::components::charts::{
	draw_bar_chart, draw_binary_proportion_chart, draw_category_pie_chart, draw_labeled_pie_chart,
};
use crate::components::diagram::{make_inline_and_selectable, make_selectable, promote_all};
use crate::config::WidgetConfig;
use crate::error::Error;

thread_local! {
	static OPTIONS: RefCell<WidgetConfig> = RefCell::new(WidgetConfig::default());
}

fn options() -> WidgetConfig {
	OPTIONS.with(|options| options.borrow().clone())
}

/// Replaces the widget options with the given JSON object; omitted keys keep their
/// defaults.
#[wasm_bindgen(js_name = setWidgetOptions)]
pub fn set_widget_options(options_json: &str) -> Result<(), JsValue> {
	let parsed = WidgetConfig::from_json(options_json)?;
	OPTIONS.with(|options| *options.borrow_mut() = parsed);
	Ok(())
}

fn numbers(values: &JsValue) -> Vec<f64> {
	Array::from(values)
		.iter()
		.map(|value| value.as_f64().unwrap_or(0.0))
		.collect()
}

fn optional_strings(values: &JsValue) -> Vec<Option<String>> {
	if values.is_undefined() || values.is_null() {
		return Vec::new();
	}
	Array::from(values)
		.iter()
		.map(|value| {
			if value.is_null() || value.is_undefined() {
				None
			} else {
				value.as_string().or_else(|| value.as_f64().map(|n| n.to_string()))
			}
		})
		.collect()
}

/// Bar chart from `[data, labels]`, labelled below the bars when `labelled` is true.
#[wasm_bindgen(js_name = drawPPMChart)]
pub fn draw_ppm_chart(holder: &Element, data_and_labels: &Array, labelled: Option<bool>) -> Result<(), JsValue> {
	let data = numbers(&data_and_labels.get(0));
	let labels = optional_strings(&data_and_labels.get(1));
	draw_bar_chart(
		holder,
		data,
		Some(labels),
		labelled.unwrap_or(false),
		&options().chart,
	)?;
	Ok(())
}

#[wasm_bindgen(js_name = drawIdentificationsChart)]
pub fn draw_identifications_chart(holder: &Element, data: &Array) -> Result<(), JsValue> {
	draw_category_pie_chart(holder, numbers(data), &options().chart)?;
	Ok(())
}

#[wasm_bindgen(js_name = drawPeptideIdentificationsChart)]
pub fn draw_peptide_identifications_chart(holder: &Element, data: &Array, labels: &Array) -> Result<(), JsValue> {
	let labels: Vec<String> = optional_strings(labels)
		.into_iter()
		.map(Option::unwrap_or_default)
		.collect();
	draw_labeled_pie_chart(holder, numbers(data), &labels, &options().chart)?;
	Ok(())
}

#[wasm_bindgen(js_name = drawUniqueChart)]
pub fn draw_unique_chart(holder: &Element, unique: f64, all: f64) -> Result<(), JsValue> {
	draw_binary_proportion_chart(holder, unique, all, &options().chart)?;
	Ok(())
}

/// Inlines the SVG behind `img` and makes it selectable. The returned promise rejects
/// with the error message when the image could not be replaced.
#[wasm_bindgen(js_name = svgInlineAndSelectable)]
pub async fn svg_inline_and_selectable(img: HtmlImageElement) -> Result<(), JsValue> {
	let diagram = make_inline_and_selectable(&img, &options().highlight).await?;
	diagram.keep_alive();
	Ok(())
}

/// Promotes every image matching `selector` in the background.
#[wasm_bindgen(js_name = promoteDiagramImages)]
pub fn promote_diagram_images(selector: &str) -> Result<u32, JsValue> {
	let document = web_sys::window()
		.ok_or(Error::NoWindow)?
		.document()
		.ok_or(Error::NoDocument)?;
	Ok(promote_all(&document, selector, &options().highlight)?)
}

/// Makes an SVG that is already inline selectable.
#[wasm_bindgen(js_name = selectableEdges)]
pub fn selectable_edges(svg: &Element) -> Result<(), JsValue> {
	make_selectable(svg, &options().highlight)?.keep_alive();
	Ok(())
}
