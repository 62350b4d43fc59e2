use std::collections::BTreeSet;

use super::types::{ARROW, Diagram, DiagramEdge};
use crate::config::EdgeMatching;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
	Click,
	DoubleClick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
	Node { node: usize, gesture: Gesture },
	Edge(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
	Normal,
	Highlighted,
}

/// Highlight state of one diagram.
///
/// Every selection starts from a clean slate: all edges go back to normal before the
/// edges matching the new selection are highlighted, so at most one selection is shown.
#[derive(Clone, Debug)]
pub struct HighlightController {
	diagram: Diagram,
	matching: EdgeMatching,
	selection: Option<Selection>,
	highlighted: BTreeSet<usize>,
}

impl HighlightController {
	pub fn new(diagram: Diagram, matching: EdgeMatching) -> Self {
		Self {
			diagram,
			matching,
			selection: None,
			highlighted: BTreeSet::new(),
		}
	}

	pub fn diagram(&self) -> &Diagram {
		&self.diagram
	}

	pub fn selection(&self) -> Option<Selection> {
		self.selection
	}

	pub fn highlighted(&self) -> &BTreeSet<usize> {
		&self.highlighted
	}

	pub fn edge_style(&self, edge: usize) -> EdgeStyle {
		if self.highlighted.contains(&edge) {
			EdgeStyle::Highlighted
		} else {
			EdgeStyle::Normal
		}
	}

	/// Highlights the edges leaving `node` (titles containing `"node->"`).
	pub fn click_node(&mut self, node: usize) -> &BTreeSet<usize> {
		self.select(Selection::Node {
			node,
			gesture: Gesture::Click,
		})
	}

	/// Highlights the edges entering `node` (titles containing `"->node"`).
	pub fn double_click_node(&mut self, node: usize) -> &BTreeSet<usize> {
		self.select(Selection::Node {
			node,
			gesture: Gesture::DoubleClick,
		})
	}

	pub fn click_edge(&mut self, edge: usize) -> &BTreeSet<usize> {
		self.select(Selection::Edge(edge))
	}

	/// Applies a selection and returns the highlighted edge indices.
	///
	/// Out of range indices clear the highlight.
	pub fn select(&mut self, selection: Selection) -> &BTreeSet<usize> {
		self.highlighted.clear();
		match selection {
			Selection::Node { node, gesture } => {
				if let Some(title) = self.diagram.nodes.get(node).map(|n| n.title.clone()) {
					let matched: Vec<usize> = self
						.diagram
						.edges
						.iter()
						.enumerate()
						.filter(|(_, edge)| self.matches(edge, &title, gesture))
						.map(|(idx, _)| idx)
						.collect();
					self.highlighted.extend(matched);
				}
			}
			Selection::Edge(edge) => {
				if edge < self.diagram.edges.len() {
					self.highlighted.insert(edge);
				}
			}
		}
		self.selection = Some(selection);
		log::debug!(
			"selection {:?}: {} edge(s) highlighted",
			selection,
			self.highlighted.len()
		);
		&self.highlighted
	}

	pub fn clear(&mut self) {
		self.selection = None;
		self.highlighted.clear();
	}

	fn matches(&self, edge: &DiagramEdge, node_title: &str, gesture: Gesture) -> bool {
		match self.matching {
			EdgeMatching::Endpoints => edge.relation.as_ref().is_some_and(|rel| match gesture {
				Gesture::Click => rel.source == node_title,
				Gesture::DoubleClick => rel.target == node_title,
			}),
			EdgeMatching::TitleSubstring => {
				let pattern = match gesture {
					Gesture::Click => format!("{node_title}{ARROW}"),
					Gesture::DoubleClick => format!("{ARROW}{node_title}"),
				};
				edge.title.contains(&pattern)
			}
		}
	}
}
