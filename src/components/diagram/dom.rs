use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, SvgElement};

use super::state::{EdgeStyle, Gesture, HighlightController, Selection};
use super::types::Diagram;
use crate::config::HighlightConfig;
use crate::error::{Error, Result};

struct Listener {
	target: Element,
	event: &'static str,
	callback: Closure<dyn FnMut(MouseEvent)>,
}

/// A Graphviz SVG whose nodes and edges react to clicks.
///
/// Listeners are removed when this is dropped; call [`SelectableDiagram::keep_alive`] to
/// leave them attached for the lifetime of the page.
pub struct SelectableDiagram {
	svg: Element,
	controller: Rc<RefCell<HighlightController>>,
	edges: Rc<Vec<Element>>,
	config: Rc<HighlightConfig>,
	listeners: Vec<Listener>,
}

impl SelectableDiagram {
	pub fn svg(&self) -> &Element {
		&self.svg
	}

	pub fn diagram(&self) -> Diagram {
		self.controller.borrow().diagram().clone()
	}

	pub fn highlighted(&self) -> BTreeSet<usize> {
		self.controller.borrow().highlighted().clone()
	}

	/// Applies a selection as if it came from the mouse.
	pub fn select(&self, selection: Selection) {
		apply_selection(&self.controller, &self.edges, &self.config, selection);
	}

	pub fn keep_alive(self) {
		std::mem::forget(self);
	}
}

impl Drop for SelectableDiagram {
	fn drop(&mut self) {
		for listener in &self.listeners {
			let _ = listener.target.remove_event_listener_with_callback(
				listener.event,
				listener.callback.as_ref().unchecked_ref(),
			);
		}
	}
}

/// Makes the node and edge groups of `svg` selectable.
///
/// Groups are looked up one level below the root's children (`svg > g > g.node`), which
/// is where Graphviz puts them.
pub fn make_selectable(svg: &Element, config: &HighlightConfig) -> Result<SelectableDiagram> {
	let mut diagram = Diagram::default();
	let mut nodes = Vec::new();
	let mut edges = Vec::new();

	for group in diagram_groups(svg) {
		if has_class(&group, &config.node_class) {
			diagram.add_node(title_of(&group));
			nodes.push(group);
		} else if has_class(&group, &config.edge_class) {
			diagram.add_edge(title_of(&group));
			edges.push(group);
		}
	}
	debug!(
		"selectable diagram: {} nodes, {} edges",
		nodes.len(),
		edges.len()
	);

	// an early return drops this and detaches the listeners added so far
	let mut selectable = SelectableDiagram {
		svg: svg.clone(),
		controller: Rc::new(RefCell::new(HighlightController::new(diagram, config.matching))),
		edges: Rc::new(edges),
		config: Rc::new(config.clone()),
		listeners: Vec::new(),
	};

	for (node, element) in nodes.iter().enumerate() {
		let click = selectable.callback(move || Selection::Node {
			node,
			gesture: Gesture::Click,
		});
		selectable.listeners.push(listen(element, "click", click)?);
		let dblclick = selectable.callback(move || Selection::Node {
			node,
			gesture: Gesture::DoubleClick,
		});
		selectable.listeners.push(listen(element, "dblclick", dblclick)?);
	}
	let edges = selectable.edges.clone();
	for (edge, element) in edges.iter().enumerate() {
		let click = selectable.callback(move || Selection::Edge(edge));
		selectable.listeners.push(listen(element, "click", click)?);
	}

	Ok(selectable)
}

impl SelectableDiagram {
	fn callback(&self, selection: impl Fn() -> Selection + 'static) -> Closure<dyn FnMut(MouseEvent)> {
		let (controller, edges, config) = (
			self.controller.clone(),
			self.edges.clone(),
			self.config.clone(),
		);
		Closure::new(move |_: MouseEvent| {
			apply_selection(&controller, &edges, &config, selection());
		})
	}
}

fn listen(target: &Element, event: &'static str, callback: Closure<dyn FnMut(MouseEvent)>) -> Result<Listener> {
	target
		.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		.map_err(Error::dom)?;
	Ok(Listener {
		target: target.clone(),
		event,
		callback,
	})
}

fn apply_selection(
	controller: &Rc<RefCell<HighlightController>>,
	edges: &[Element],
	config: &HighlightConfig,
	selection: Selection,
) {
	let mut controller = controller.borrow_mut();
	controller.select(selection);
	for (idx, edge) in edges.iter().enumerate() {
		if let Err(err) = style_edge(edge, controller.edge_style(idx), config) {
			warn!("could not restyle edge {idx}: {err}");
		}
	}
}

/// Sets stroke color and width of an edge's line and the stroke and fill of its arrowhead.
pub fn style_edge(edge: &Element, style: EdgeStyle, config: &HighlightConfig) -> Result<()> {
	let (color, width) = match style {
		EdgeStyle::Normal => (config.normal_color.as_str(), None),
		EdgeStyle::Highlighted => (
			config.highlight_color.as_str(),
			Some(config.highlight_width.as_str()),
		),
	};
	for child in child_elements(edge) {
		match child.local_name().as_str() {
			"path" => {
				child.set_attribute("stroke", color).map_err(Error::dom)?;
				if let Some(svg) = child.dyn_ref::<SvgElement>() {
					let css = svg.style();
					match width {
						Some(width) => css.set_property("stroke-width", width).map_err(Error::dom)?,
						None => {
							css.remove_property("stroke-width").map_err(Error::dom)?;
						}
					}
				}
			}
			"polygon" => {
				child.set_attribute("stroke", color).map_err(Error::dom)?;
				child.set_attribute("fill", color).map_err(Error::dom)?;
			}
			_ => {}
		}
	}
	Ok(())
}

fn child_elements(parent: &Element) -> Vec<Element> {
	let children = parent.children();
	(0..children.length())
		.filter_map(|idx| children.item(idx))
		.collect()
}

fn diagram_groups(svg: &Element) -> Vec<Element> {
	child_elements(svg)
		.iter()
		.flat_map(child_elements)
		.filter(|el| el.local_name() == "g")
		.collect()
}

fn has_class(element: &Element, class: &str) -> bool {
	element
		.get_attribute("class")
		.is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

fn title_of(group: &Element) -> String {
	child_elements(group)
		.into_iter()
		.find(|el| el.local_name() == "title")
		.and_then(|title| title.text_content())
		.unwrap_or_default()
}
