//! Turns a match into the rows a renderer draws.

use crate::template::SuggestionTemplate;

/// One visual row of ghost text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhostRow {
	/// The row sharing the caret line. `typed` is already in the buffer
	/// and shows through; only `remainder` is drawn grey after it.
	Overlap { typed: String, remainder: String },
	/// A template line drawn entirely grey on a row below the caret.
	Full(String),
}

/// Rows for a suggestion anchored at template line `start`, where `typed`
/// is the trimmed text already on the anchor line.
pub fn ghost_rows(template: &SuggestionTemplate, typed: &str, start: usize) -> Vec<GhostRow> {
	template
		.lines()
		.iter()
		.enumerate()
		.skip(start)
		.map(|(offset, line)| {
			if offset == start {
				GhostRow::Overlap {
					typed: typed.to_string(),
					remainder: line_remainder(line, typed),
				}
			} else {
				GhostRow::Full(line.clone())
			}
		})
		.collect()
}

/// The part of a template line still to be typed: the line minus its own
/// indentation minus the typed text. A cut past the end of the line, or
/// off a character boundary, yields an empty remainder.
fn line_remainder(line: &str, typed: &str) -> String {
	let indent = line.len() - line.trim_start().len();
	let cut = indent + typed.trim().len();
	line.get(cut..).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::{GhostRow, ghost_rows};
	use crate::template::SuggestionTemplate;

	const SUM: &str = "int sum(int a, int b)\n{\n\treturn a + b;\n}";

	fn overlap(typed: &str, remainder: &str) -> GhostRow {
		GhostRow::Overlap {
			typed: typed.to_string(),
			remainder: remainder.to_string(),
		}
	}

	#[test]
	fn overlap_row_splits_typed_from_remainder() {
		let template = SuggestionTemplate::new(SUM);
		let rows = ghost_rows(&template, "int", 0);
		assert_eq!(
			rows,
			vec![
				overlap("int", " sum(int a, int b)"),
				GhostRow::Full("{".to_string()),
				GhostRow::Full("\treturn a + b;".to_string()),
				GhostRow::Full("}".to_string()),
			]
		);
	}

	#[test]
	fn overlap_skips_template_indentation() {
		let template = SuggestionTemplate::new(SUM);
		let rows = ghost_rows(&template, "return", 2);
		assert_eq!(rows, vec![overlap("return", " a + b;"), GhostRow::Full("}".to_string())]);
	}

	#[test]
	fn blank_typed_renders_the_line_unindented() {
		let template = SuggestionTemplate::new(SUM);
		let rows = ghost_rows(&template, "", 2);
		assert_eq!(rows[0], overlap("", "return a + b;"));
	}

	#[test]
	fn fully_typed_line_leaves_no_remainder() {
		let template = SuggestionTemplate::new(SUM);
		let rows = ghost_rows(&template, "int sum(int a, int b)", 0);
		assert_eq!(rows[0], overlap("int sum(int a, int b)", ""));
	}

	#[test]
	fn typed_longer_than_line_leaves_no_remainder() {
		let template = SuggestionTemplate::new("abc");
		let rows = ghost_rows(&template, "abcdef", 0);
		assert_eq!(rows, vec![overlap("abcdef", "")]);
	}

	#[test]
	fn cut_off_a_char_boundary_leaves_no_remainder() {
		let template = SuggestionTemplate::new("αβγ");
		let rows = ghost_rows(&template, "x", 0);
		assert_eq!(rows, vec![overlap("x", "")]);
	}

	#[test]
	fn start_past_template_yields_no_rows() {
		let template = SuggestionTemplate::new(SUM);
		assert!(ghost_rows(&template, "", 9).is_empty());
	}
}
