/// A fixed multi-line suggestion, split once into lines at construction.
///
/// The template is immutable for the lifetime of a session: matching walks
/// its lines, rendering slices them, and accepting a suggestion splices a
/// tail of them into the buffer. Lines are split on `'\n'` with the break
/// stripped, so `line(i)` is exactly the text a typed line is compared
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTemplate {
	full_text: String,
	lines: Vec<String>,
}

impl SuggestionTemplate {
	pub fn new(text: impl Into<String>) -> Self {
		let full_text = text.into();
		let lines = full_text.split('\n').map(str::to_string).collect();
		Self { full_text, lines }
	}

	/// The template exactly as configured, line breaks included.
	pub fn full_text(&self) -> &str {
		&self.full_text
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn line(&self, index: usize) -> Option<&str> {
		self.lines.get(index).map(String::as_str)
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.full_text.is_empty()
	}

	/// Text spliced into the buffer when the suggestion is accepted: every
	/// line from `start` on, each followed by a line break. The trailing
	/// break on the last line leaves the caret on a fresh line after the
	/// splice.
	pub fn remainder_from(&self, start: usize) -> String {
		let mut out = String::new();
		for line in self.lines.iter().skip(start) {
			out.push_str(line);
			out.push('\n');
		}
		out
	}
}
