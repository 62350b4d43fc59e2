//! Legend template expansion.
//!
//! A template may contain `##` (the slice value) and `%%` (its share of the total, with a
//! trailing `%`). Extra characters after a dot set the number of decimals: `##.##` prints
//! the value with two decimals, `%%.%%` the percentage with two.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(##+(?:\.#+)?)|(%%+(?:\.%+)?)").expect("valid placeholder regex"));

/// Expands the placeholders of `template` for a slice of `value` out of `total`.
pub fn labelise(template: &str, value: f64, total: f64) -> String {
	PLACEHOLDER
		.replace_all(template, |caps: &Captures| {
			if let Some(m) = caps.get(1) {
				fixed(value, decimals(m.as_str()))
			} else {
				let m = &caps[2];
				let percent = if total != 0.0 { value * 100.0 / total } else { 0.0 };
				format!("{}%", fixed(percent, decimals(m)))
			}
		})
		.into_owned()
}

/// Formats `value` with `digits` decimals, rounding halves away from zero. `format!`
/// alone rounds exact halves to even, so 0.125 would print as 0.12.
fn fixed(value: f64, digits: usize) -> String {
	let scale = 10f64.powi(digits as i32);
	format!("{:.*}", digits, (value * scale).round() / scale)
}

/// Number of placeholder characters after the dot, e.g. 2 for `%%.%%`.
fn decimals(placeholder: &str) -> usize {
	placeholder
		.split_once('.')
		.map(|(_, fraction)| fraction.len())
		.unwrap_or(0)
}

/// Text shown for a value without a legend template.
pub fn plain_value(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn percent_and_count() {
		assert_eq!(labelise("1 - %%.%% (##)", 3.0, 7.0), "1 - 42.86% (3)");
		assert_eq!(labelise("%%.%% - ambiguous (##)", 3.0, 10.0), "30.00% - ambiguous (3)");
	}

	#[test]
	fn decimals_follow_placeholder() {
		assert_eq!(labelise("##.## / %%", 2.5, 10.0), "2.50 / 25%");
		assert_eq!(labelise("peptides - ##", 12.0, 40.0), "peptides - 12");
	}

	#[test]
	fn halves_round_up() {
		assert_eq!(labelise("%%.%%", 1.0, 800.0), "0.13%");
		assert_eq!(labelise("##", 2.5, 10.0), "3");
		assert_eq!(labelise("1 - %%.%% (##)", 1.0, 8.0), "1 - 12.50% (1)");
	}

	#[test]
	fn zero_total_renders_zero_percent() {
		assert_eq!(labelise("%%.%%", 0.0, 0.0), "0.00%");
	}

	#[test]
	fn text_without_placeholders_is_unchanged() {
		assert_eq!(labelise("Others", 4.0, 9.0), "Others");
		assert_eq!(plain_value(4.0), "4");
		assert_eq!(plain_value(0.5), "0.5");
	}
}
