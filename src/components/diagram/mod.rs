mod component;
mod dom;
mod inline;
pub mod state;
pub mod types;

pub use component::InlineDiagram;
pub use dom::{SelectableDiagram, make_selectable, style_edge};
pub use inline::{
	PromotedAttributes, extract_svg, make_inline_and_selectable, promote_all, promote_in_background,
};
pub use state::{EdgeStyle, Gesture, HighlightController, Selection};
pub use types::{Diagram, DiagramEdge, DiagramNode, EdgeRelation};
