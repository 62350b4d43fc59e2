use leptos::prelude::*;

use super::inline::promote_in_background;
use crate::config::HighlightConfig;

/// Renders a Graphviz SVG as an `<img>`, then swaps in the inline SVG with clickable nodes
/// and edges once it has been fetched.
#[component]
pub fn InlineDiagram(
	#[prop(into)] src: String,
	#[prop(optional, into)] id: Option<String>,
	#[prop(default = "pia-graph".to_string(), into)] class: String,
	#[prop(optional)] config: Option<HighlightConfig>,
) -> impl IntoView {
	let image_ref = NodeRef::<leptos::html::Img>::new();
	let config = config.unwrap_or_default();

	Effect::new(move |promoted: Option<bool>| {
		if promoted == Some(true) {
			return true;
		}
		let Some(image) = image_ref.get() else {
			return false;
		};
		promote_in_background(image, config.clone());
		true
	});

	view! { <img node_ref=image_ref src=src id=id class=class alt="graph" /> }
}
