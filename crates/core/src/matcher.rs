//! Aligns the typed line under the caret with a line of the suggestion.
//!
//! Matching is by content, not by buffer position: the trimmed line is
//! searched for inside the template text, so the suggestion re-attaches
//! wherever the user happens to be typing it. Indentation on either side
//! never participates in the comparison. A hit past the template's first
//! line is only trusted after the preceding buffer lines are confirmed to
//! spell out the template up to that point, which rejects stray repeats of
//! an inner line elsewhere in the document.

use crate::snapshot::EditorSnapshot;
use crate::template::SuggestionTemplate;


/// A successful alignment of the caret line with a template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
	/// Index of the template line the caret line matched.
	pub template_line: usize,
	/// Text the match was computed on: the caret line trimmed, or the
	/// previous line trimmed plus a line break when the caret line is
	/// blank.
	pub matched: String,
}

/// Matches the line at `caret_line` against `template`.
///
/// Returns `None` when the line is out of range, when its text does not
/// occur in the template, or when a multi-line candidate fails
/// confirmation.
pub fn match_line<S: EditorSnapshot>(template: &SuggestionTemplate, snapshot: &S, caret_line: usize) -> Option<LineMatch> {
	let raw = snapshot.raw_line(caret_line)?;
	let mut needle = raw.trim().to_string();

	// A blank line has no content to search for, so look back at the line
	// above. The appended break pins that text to a line end in the
	// template, which lands the match on the line the caret is about to
	// type.
	if needle.is_empty() {
		let prev = caret_line.checked_sub(1)?;
		needle = format!("{}\n", snapshot.raw_line(prev)?.trim());
	}

	let full = template.full_text();
	let start = full.find(&needle)?;
	let end = start + needle.len();

	match full.find('\n') {
		// The hit sits entirely inside template line 0; only an exact
		// prefix counts.
		Some(first_break) if end < first_break => prefix_match(start, needle),
		None => prefix_match(start, needle),
		Some(_) => {
			let template_line = full[..end].matches('\n').count();
			confirm_block(template, snapshot, caret_line, template_line).then_some(LineMatch {
				template_line,
				matched: needle,
			})
		}
	}
}

fn prefix_match(start: usize, matched: String) -> Option<LineMatch> {
	(start == 0).then_some(LineMatch {
		template_line: 0,
		matched,
	})
}

/// Verifies that the `n_lines` buffer lines above the caret, together with
/// the caret line itself, spell out the template up to the candidate line.
///
/// Each buffer line is trimmed and rejoined with `\n`, then the block
/// (minus trailing whitespace) must occur verbatim in the template text.
/// Note the template side is NOT trimmed: a template line with leading
/// indentation therefore never survives this check once typed. Sessions
/// advance across such lines via the commit trigger instead.
fn confirm_block<S: EditorSnapshot>(template: &SuggestionTemplate, snapshot: &S, caret_line: usize, n_lines: usize) -> bool {
	if caret_line < n_lines {
		return false;
	}
	let mut block = String::new();
	for index in caret_line - n_lines..=caret_line {
		let Some(line) = snapshot.trimmed_line(index) else {
			return false;
		};
		block.push_str(&line);
		block.push('\n');
	}
	template.full_text().contains(block.trim_end())
}
