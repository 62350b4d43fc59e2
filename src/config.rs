//! Widget configuration.
//!
//! Everything has a default matching the page scripts the widgets replace. A page can
//! override any subset of it at runtime through a JSON object (see
//! [`crate::bindings::set_widget_options`]).

use serde::Deserialize;

/// Default chart palette: hues .6, .2, .05, .1333, .75, 0 at s = v = .75, then the first
/// four hues again at s = 1, v = .5.
pub const DEFAULT_COLORS: [&str; 10] = [
	"#3069bf", "#a3bf30", "#bf5b30", "#bfa330", "#7830bf", "#bf3030", "#003380", "#668000",
	"#802600", "#806600",
];

/// Marker class appended to the class list of a promoted SVG.
pub const REPLACED_SVG_CLASS: &str = "replaced-svg";

/// Attribute removed from promoted SVGs; Graphviz emits it and strict XML validators reject it.
pub const INVALID_SVG_ATTRIBUTE: &str = "xmlns:a";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
	pub colors: Vec<String>,
	/// CSS font shorthand used for legends and bar labels.
	pub font: String,
	pub font_size: f64,
	pub text_color: String,
	/// Horizontal gutter between bars, in percent of a bar's width.
	pub bar_gutter: f64,
	pub bar_vgutter: f64,
	/// Distance between a bar's baseline and its label.
	pub bar_label_offset: f64,
	pub legend_marker_radius: f64,
	pub others_label: String,
	pub min_percent: f64,
}

impl Default for ChartConfig {
	fn default() -> Self {
		Self {
			colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
			font: "9px sans-serif".to_string(),
			font_size: 9.0,
			text_color: "#000".to_string(),
			bar_gutter: 20.0,
			bar_vgutter: 20.0,
			bar_label_offset: 10.0,
			legend_marker_radius: 5.0,
			others_label: "Others".to_string(),
			min_percent: 1.0,
		}
	}
}

impl ChartConfig {
	/// Color for the series or slice at `index`, cycling through the palette.
	pub fn color(&self, index: usize) -> &str {
		if self.colors.is_empty() {
			return DEFAULT_COLORS[index % DEFAULT_COLORS.len()];
		}
		&self.colors[index % self.colors.len()]
	}
}

/// How node selections are matched against edges.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EdgeMatching {
	/// Compare the node title with the source/target parsed out of each edge title.
	#[default]
	Endpoints,
	/// Plain substring search of `"node->"` / `"->node"` in the edge title.
	TitleSubstring,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
	pub normal_color: String,
	pub highlight_color: String,
	pub highlight_width: String,
	pub matching: EdgeMatching,
	pub node_class: String,
	pub edge_class: String,
}

impl Default for HighlightConfig {
	fn default() -> Self {
		Self {
			normal_color: "black".to_string(),
			highlight_color: "red".to_string(),
			highlight_width: "2px".to_string(),
			matching: EdgeMatching::Endpoints,
			node_class: "node".to_string(),
			edge_class: "edge".to_string(),
		}
	}
}

/// Top level options object accepted from the embedding page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
	pub chart: ChartConfig,
	pub highlight: HighlightConfig,
}

impl WidgetConfig {
	pub fn from_json(raw: &str) -> crate::Result<Self> {
		Ok(serde_json::from_str(raw)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config =
			WidgetConfig::from_json(r#"{"highlight": {"highlightColor": "blue", "matching": "titleSubstring"}}"#)
				.unwrap();
		assert_eq!(config.highlight.highlight_color, "blue");
		assert_eq!(config.highlight.normal_color, "black");
		assert_eq!(config.highlight.matching, EdgeMatching::TitleSubstring);
		assert_eq!(config.chart, ChartConfig::default());
	}

	#[test]
	fn palette_cycles() {
		let config = ChartConfig::default();
		assert_eq!(config.color(0), "#3069bf");
		assert_eq!(config.color(10), "#3069bf");
		let empty = ChartConfig {
			colors: Vec::new(),
			..ChartConfig::default()
		};
		assert_eq!(empty.color(1), "#a3bf30");
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(WidgetConfig::from_json("{not json").is_err());
	}
}
