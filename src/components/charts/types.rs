#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	pub width: f64,
	pub height: f64,
}

impl CanvasSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Canvas used by the bar chart and both single-series pie charts.
pub const SMALL_CHART: CanvasSize = CanvasSize::new(200.0, 120.0);
/// Canvas used by the unique/ambiguous proportion chart.
pub const WIDE_CHART: CanvasSize = CanvasSize::new(300.0, 120.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
	#[default]
	East,
	West,
	North,
	South,
}

/// Input of a bar chart: one or more series plus optional per-position labels.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
	pub size: CanvasSize,
	pub series: Vec<Vec<f64>>,
	pub labels: Vec<Option<String>>,
	pub show_labels: bool,
}

impl BarChartSpec {
	/// Single-series chart at the small fixed size, unlabelled.
	pub fn new(values: Vec<f64>) -> Self {
		Self {
			size: SMALL_CHART,
			series: vec![values],
			labels: Vec::new(),
			show_labels: false,
		}
	}

	/// Labels are matched to bar positions by index; `None` entries and positions past the
	/// end of `labels` get no text.
	pub fn with_labels(mut self, labels: Vec<Option<String>>, show_labels: bool) -> Self {
		self.labels = labels;
		self.show_labels = show_labels;
		self
	}

	/// Number of bar positions, i.e. the length of the longest series.
	pub fn positions(&self) -> usize {
		self.series.iter().map(Vec::len).max().unwrap_or(0)
	}
}

/// Input of a pie chart, mirroring the options object of the charting primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartSpec {
	pub size: CanvasSize,
	pub center: (f64, f64),
	pub radius: f64,
	pub values: Vec<f64>,
	/// Legend templates in input order; see [`super::legend::labelise`].
	pub legend: Vec<String>,
	pub legend_position: LegendPosition,
	pub max_slices: Option<usize>,
}

impl PieChartSpec {
	/// Pie with auto-numbered legend entries `"<n> - %%.%% (##)"`, n counted from 1.
	pub fn category(values: Vec<f64>) -> Self {
		let legend = (1..=values.len())
			.map(|n| format!("{n} - %%.%% (##)"))
			.collect();
		Self {
			size: SMALL_CHART,
			center: (35.0, 60.0),
			radius: 35.0,
			values,
			legend,
			legend_position: LegendPosition::East,
			max_slices: None,
		}
	}

	/// Pie with caller supplied labels, `"<label> - ##"`, showing at most 5 slices before
	/// the rest is folded into an "others" slice.
	///
	/// A missing label leaves that entry without a template, so the raw value is shown.
	pub fn labeled<S: AsRef<str>>(values: Vec<f64>, labels: &[S]) -> Self {
		let legend = labels
			.iter()
			.take(values.len())
			.map(|label| format!("{} - ##", label.as_ref()))
			.collect();
		Self {
			size: SMALL_CHART,
			center: (60.0, 60.0),
			radius: 60.0,
			values,
			legend,
			legend_position: LegendPosition::East,
			max_slices: Some(5),
		}
	}

	/// Two slices, `matched` and `total - matched`.
	///
	/// Out of range input is passed through as is: `matched > total` gives a negative
	/// second slice.
	pub fn binary_proportion(matched: f64, total: f64) -> Self {
		if matched > total || matched < 0.0 {
			log::warn!("proportion chart input out of range: {matched} of {total}");
		}
		Self {
			size: WIDE_CHART,
			center: (60.0, 60.0),
			radius: 50.0,
			values: vec![matched, total - matched],
			legend: vec![
				"%%.%% - unique (##)".to_string(),
				"%%.%% - ambiguous (##)".to_string(),
			],
			legend_position: LegendPosition::East,
			max_slices: None,
		}
	}
}
