//! Replacing an `<img>` that points at an SVG file with the SVG itself, so its nodes and
//! edges become part of the page and can be restyled.

use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomParser, Element, HtmlImageElement, SupportedType};

use super::dom::{SelectableDiagram, make_selectable};
use crate::config::{HighlightConfig, INVALID_SVG_ATTRIBUTE, REPLACED_SVG_CLASS};
use crate::error::{Error, Result};

/// Attributes carried over from the replaced image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromotedAttributes {
	pub id: Option<String>,
	/// Only set when the image had a class; the SVG keeps its own class otherwise.
	pub class: Option<String>,
}

impl PromotedAttributes {
	pub fn from_image(id: Option<String>, class: Option<String>) -> Self {
		Self {
			id,
			class: class.map(|class| format!("{class} {REPLACED_SVG_CLASS}")),
		}
	}

	pub fn apply(&self, svg: &Element) -> Result<()> {
		if let Some(id) = &self.id {
			svg.set_attribute("id", id).map_err(Error::dom)?;
		}
		if let Some(class) = &self.class {
			svg.set_attribute("class", class).map_err(Error::dom)?;
		}
		svg.remove_attribute(INVALID_SVG_ATTRIBUTE).map_err(Error::dom)?;
		Ok(())
	}
}

/// Fetches the SVG behind `image`, puts it in the image's place and makes it selectable.
///
/// Single shot: no retry and no timeout. On any error the image is left untouched.
pub async fn make_inline_and_selectable(
	image: &HtmlImageElement,
	config: &HighlightConfig,
) -> Result<SelectableDiagram> {
	let url = image.get_attribute("src").ok_or(Error::MissingSource)?;
	let attributes = PromotedAttributes::from_image(image.get_attribute("id"), image.get_attribute("class"));

	let response = Request::get(&url).send().await.map_err(|source| Error::Fetch {
		url: url.clone(),
		source,
	})?;
	if !response.ok() {
		return Err(Error::Status {
			url,
			status: response.status(),
		});
	}
	let body = response.text().await.map_err(|source| Error::Fetch {
		url: url.clone(),
		source,
	})?;

	let page = image.owner_document().ok_or(Error::NoDocument)?;
	let svg = extract_svg(&page, &body)?;
	attributes.apply(&svg)?;
	image.replace_with_with_node_1(&svg).map_err(Error::dom)?;
	info!("inlined diagram from {url}");

	make_selectable(&svg, config)
}

/// Parses `markup` as XML and returns its first `<svg>` element, imported into `page`.
pub fn extract_svg(page: &Document, markup: &str) -> Result<Element> {
	let parser = DomParser::new().map_err(Error::dom)?;
	let fetched = parser
		.parse_from_string(markup, SupportedType::TextXml)
		.map_err(Error::dom)?;
	if let Some(error) = fetched.get_elements_by_tag_name("parsererror").item(0) {
		return Err(Error::Parse(error.text_content().unwrap_or_default()));
	}
	let svg = fetched
		.get_elements_by_tag_name("svg")
		.item(0)
		.ok_or(Error::MissingSvgRoot)?;
	page.import_node_with_deep(&svg, true)
		.map_err(Error::dom)?
		.dyn_into::<Element>()
		.map_err(|_| Error::MissingSvgRoot)
}

/// Runs [`make_inline_and_selectable`] in the background. Failures are logged and leave
/// the image in place; on success the listeners stay attached for the page lifetime.
pub fn promote_in_background(image: HtmlImageElement, config: HighlightConfig) {
	wasm_bindgen_futures::spawn_local(async move {
		match make_inline_and_selectable(&image, &config).await {
			Ok(diagram) => diagram.keep_alive(),
			Err(err) => warn!("diagram image left in place: {err}"),
		}
	});
}

/// Promotes every `<img>` in `document` matching `selector`. Returns how many were found.
pub fn promote_all(document: &Document, selector: &str, config: &HighlightConfig) -> Result<u32> {
	let matches = document.query_selector_all(selector).map_err(Error::dom)?;
	let mut started = 0;
	for idx in 0..matches.length() {
		let Some(image) = matches
			.item(idx)
			.and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
		else {
			continue;
		};
		promote_in_background(image, config.clone());
		started += 1;
	}
	Ok(started)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn class_gets_marker_appended() {
		let attrs = PromotedAttributes::from_image(Some("graph".to_string()), Some("pia-graph wide".to_string()));
		assert_eq!(attrs.id.as_deref(), Some("graph"));
		assert_eq!(attrs.class.as_deref(), Some("pia-graph wide replaced-svg"));
	}

	#[test]
	fn missing_attributes_are_not_invented() {
		assert_eq!(PromotedAttributes::from_image(None, None), PromotedAttributes::default());
	}
}
