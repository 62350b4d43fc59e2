/// Separator Graphviz puts between the endpoints of a directed edge title.
pub const ARROW: &str = "->";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramNode {
	pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRelation {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramEdge {
	pub title: String,
	/// `None` when the title is not of the form `source->target`.
	pub relation: Option<EdgeRelation>,
}

impl DiagramEdge {
	pub fn new(title: impl Into<String>) -> Self {
		let title = title.into();
		let relation = title
			.split_once(ARROW)
			.map(|(source, target)| EdgeRelation {
				source: source.trim().to_string(),
				target: target.trim().to_string(),
			})
			.filter(|rel| !rel.source.is_empty() && !rel.target.is_empty());
		Self { title, relation }
	}
}

/// Nodes and edges of one rendered graph, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagram {
	pub nodes: Vec<DiagramNode>,
	pub edges: Vec<DiagramEdge>,
}

impl Diagram {
	pub fn add_node(&mut self, title: impl Into<String>) -> usize {
		self.nodes.push(DiagramNode {
			title: title.into(),
		});
		self.nodes.len() - 1
	}

	pub fn add_edge(&mut self, title: impl Into<String>) -> usize {
		self.edges.push(DiagramEdge::new(title));
		self.edges.len() - 1
	}

	pub fn node_index(&self, title: &str) -> Option<usize> {
		self.nodes.iter().position(|node| node.title == title)
	}

	pub fn edge_index(&self, title: &str) -> Option<usize> {
		self.edges.iter().position(|edge| edge.title == title)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_titles_are_split_at_the_arrow() {
		let edge = DiagramEdge::new("grp3->pep12");
		let relation = edge.relation.unwrap();
		assert_eq!(relation.source, "grp3");
		assert_eq!(relation.target, "pep12");
	}

	#[test]
	fn undirected_titles_have_no_relation() {
		assert_eq!(DiagramEdge::new("a--b").relation, None);
		assert_eq!(DiagramEdge::new("->b").relation, None);
	}

	#[test]
	fn lookup_by_title() {
		let mut diagram = Diagram::default();
		diagram.add_node("A");
		let b = diagram.add_node("B");
		let edge = diagram.add_edge("A->B");
		assert_eq!(diagram.node_index("B"), Some(b));
		assert_eq!(diagram.edge_index("A->B"), Some(edge));
		assert_eq!(diagram.node_index("C"), None);
	}
}
