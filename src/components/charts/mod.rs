mod component;
pub mod layout;
pub mod legend;
pub mod render;
pub mod types;

pub use component::{
	BarChart, PieChart, draw_bar, draw_bar_chart, draw_binary_proportion_chart,
	draw_category_pie_chart, draw_labeled_pie_chart, draw_pie,
};
pub use layout::{BarLayout, PieLayout, bar_layout, pie_layout};
pub use types::{BarChartSpec, CanvasSize, LegendPosition, PieChartSpec};
