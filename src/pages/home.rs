use leptos::prelude::*;

use crate::components::charts::{BarChart, BarChartSpec, PieChart, PieChartSpec};
use crate::components::diagram::InlineDiagram;

/// Mass deviation histogram (ppm buckets) with every other bucket labelled.
fn sample_ppm_chart() -> BarChartSpec {
	let counts = vec![1.0, 3.0, 8.0, 21.0, 34.0, 25.0, 9.0, 4.0, 2.0];
	let labels = (0..counts.len())
		.map(|i| (i % 2 == 0).then(|| format!("{}", i as i32 * 5 - 20)))
		.collect();
	BarChartSpec::new(counts).with_labels(labels, true)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let ppm = Signal::derive(sample_ppm_chart);
	let identifications = Signal::derive(|| PieChartSpec::category(vec![812.0, 96.0, 17.0, 3.0]));
	let peptides = Signal::derive(|| {
		PieChartSpec::labeled(
			vec![420.0, 131.0, 52.0, 20.0, 9.0, 4.0, 2.0],
			&["1 spectrum", "2 spectra", "3 spectra", "4 spectra", "5 spectra", "6 spectra", "7 spectra"],
		)
	});
	let unique = Signal::derive(|| PieChartSpec::binary_proportion(733.0, 928.0));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="pia-overview">
				<h1>"PSM overview"</h1>
				<section class="pia-charts">
					<BarChart spec=ppm />
					<PieChart spec=identifications />
					<PieChart spec=peptides />
					<PieChart spec=unique />
				</section>
				<section class="pia-graph-view">
					<p class="subtitle">
						"Click a node for its outgoing edges, double-click for incoming ones, or click an edge."
					</p>
					<InlineDiagram src="graph.svg" id="protein-graph" />
				</section>
			</div>
		</ErrorBoundary>
	}
}
