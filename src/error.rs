use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by the chart and diagram widgets.
#[derive(Debug, Error)]
pub enum Error {
	#[error("no browser window available")]
	NoWindow,
	#[error("no document attached to the window")]
	NoDocument,
	#[error("canvas 2d context unavailable")]
	NoCanvasContext,
	#[error("DOM operation failed: {0}")]
	Dom(String),
	#[error("image has no src attribute")]
	MissingSource,
	#[error("request for {url} failed: {source}")]
	Fetch {
		url: String,
		#[source]
		source: gloo_net::Error,
	},
	#[error("request for {url} returned status {status}")]
	Status { url: String, status: u16 },
	#[error("fetched document is not well-formed XML: {0}")]
	Parse(String),
	#[error("fetched document has no <svg> element")]
	MissingSvgRoot,
	#[error("invalid options: {0}")]
	Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Wraps a `JsValue` thrown by a web-sys call.
	pub fn dom(value: JsValue) -> Self {
		let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
		Error::Dom(message)
	}
}

impl From<Error> for JsValue {
	fn from(err: Error) -> Self {
		JsValue::from_str(&err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_request() {
		let err = Error::Status {
			url: "graph.svg".to_string(),
			status: 404,
		};
		assert_eq!(err.to_string(), "request for graph.svg returned status 404");
		assert_eq!(Error::MissingSvgRoot.to_string(), "fetched document has no <svg> element");
	}
}
