//! Reference buffer for tests and headless hosts.
//!
//! Editors embedding the engine adapt their own buffer type to
//! [`EditorSnapshot`] instead; this rope-backed one keeps the crate
//! self-contained.

use ropey::{Rope, RopeSlice};

use crate::controller::ReplaceRequest;
use crate::snapshot::EditorSnapshot;

/// An in-memory text buffer with a monotonic version.
///
/// Every mutation bumps `version`; update staleness is measured against it.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffer {
	content: Rope,
	version: u64,
}

impl ScratchBuffer {
	pub fn from_text(text: &str) -> Self {
		Self {
			content: Rope::from(text),
			version: 0,
		}
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn text(&self) -> String {
		self.content.to_string()
	}

	/// Line count as ropey sees it: a trailing line break opens a final
	/// empty line.
	pub fn line_count(&self) -> usize {
		self.content.len_lines()
	}

	/// Captures a static view of the current state. Cheap thanks to the
	/// rope's structural sharing.
	pub fn snapshot(&self) -> BufferSnapshot {
		BufferSnapshot {
			content: self.content.clone(),
			version: self.version,
		}
	}

	/// Replaces the text of `line`, its line break excluded, with `text`.
	/// The replacement may span multiple lines. Out-of-range lines are
	/// ignored.
	pub fn replace_line_span(&mut self, line: usize, text: &str) {
		if line >= self.content.len_lines() {
			return;
		}
		let start = self.content.line_to_char(line);
		let end = start + line_text_len(self.content.line(line));
		self.content.remove(start..end);
		self.content.insert(start, text);
		self.version += 1;
	}

	/// Opens an empty line below `line`, as pressing enter at its end
	/// would.
	pub fn open_line_below(&mut self, line: usize) {
		if line >= self.content.len_lines() {
			return;
		}
		let start = self.content.line_to_char(line);
		let end = start + line_text_len(self.content.line(line));
		self.content.insert_char(end, '\n');
		self.version += 1;
	}

	/// Applies an accepted suggestion.
	pub fn apply(&mut self, request: &ReplaceRequest) {
		self.replace_line_span(request.line, &request.text);
	}
}

/// Character length of a line without its terminating break.
fn line_text_len(line: RopeSlice) -> usize {
	let len = line.len_chars();
	if len >= 2 && line.char(len - 2) == '\r' && line.char(len - 1) == '\n' {
		len - 2
	} else if len >= 1 && matches!(line.char(len - 1), '\n' | '\r') {
		len - 1
	} else {
		len
	}
}

/// Point-in-time copy of a [`ScratchBuffer`]'s content and version.
#[derive(Debug, Clone)]
pub struct BufferSnapshot {
	content: Rope,
	version: u64,
}

impl EditorSnapshot for BufferSnapshot {
	fn version(&self) -> u64 {
		self.version
	}

	fn line_count(&self) -> usize {
		self.content.len_lines()
	}

	fn raw_line(&self, index: usize) -> Option<String> {
		if index >= self.content.len_lines() {
			return None;
		}
		let line = self.content.line(index);
		Some(line.slice(..line_text_len(line)).to_string())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::ScratchBuffer;
	use crate::controller::ReplaceRequest;
	use crate::snapshot::EditorSnapshot;

	#[test]
	fn trailing_break_opens_final_empty_line() {
		let buffer = ScratchBuffer::from_text("a\nb\n");
		assert_eq!(buffer.line_count(), 3);
		let snapshot = buffer.snapshot();
		assert_eq!(snapshot.raw_line(1), Some("b".to_string()));
		assert_eq!(snapshot.raw_line(2), Some(String::new()));
		assert_eq!(snapshot.raw_line(3), None);
	}

	#[test]
	fn raw_line_strips_the_break() {
		let buffer = ScratchBuffer::from_text("one\r\ntwo\nthree");
		let snapshot = buffer.snapshot();
		assert_eq!(snapshot.raw_line(0), Some("one".to_string()));
		assert_eq!(snapshot.raw_line(1), Some("two".to_string()));
		assert_eq!(snapshot.raw_line(2), Some("three".to_string()));
	}

	#[test]
	fn trimmed_line_drops_surrounding_whitespace() {
		let buffer = ScratchBuffer::from_text("\t  int x;  ");
		assert_eq!(buffer.snapshot().trimmed_line(0), Some("int x;".to_string()));
	}

	#[test]
	fn replace_line_span_keeps_neighbours() {
		let mut buffer = ScratchBuffer::from_text("aaa\nbbb\nccc");
		buffer.replace_line_span(1, "B");
		assert_eq!(buffer.text(), "aaa\nB\nccc");
		assert_eq!(buffer.version(), 1);
	}

	#[test]
	fn replace_line_span_accepts_multi_line_text() {
		let mut buffer = ScratchBuffer::from_text("int sum(int a, int b)\n{\n");
		buffer.replace_line_span(2, "\treturn a + b;\n}\n");
		assert_eq!(buffer.text(), "int sum(int a, int b)\n{\n\treturn a + b;\n}\n");
	}

	#[test]
	fn replace_out_of_range_is_ignored() {
		let mut buffer = ScratchBuffer::from_text("solo");
		buffer.replace_line_span(5, "x");
		assert_eq!(buffer.text(), "solo");
		assert_eq!(buffer.version(), 0);
	}

	#[test]
	fn open_line_below_inserts_before_the_break() {
		let mut buffer = ScratchBuffer::from_text("head\ntail");
		buffer.open_line_below(0);
		assert_eq!(buffer.text(), "head\n\ntail");
		assert_eq!(buffer.line_count(), 3);
	}

	#[test]
	fn snapshot_version_goes_stale_after_edits() {
		let mut buffer = ScratchBuffer::from_text("x");
		let before = buffer.snapshot();
		buffer.replace_line_span(0, "y");
		assert_eq!(before.version(), 0);
		assert_eq!(buffer.version(), 1);
		assert_eq!(before.raw_line(0), Some("x".to_string()));
	}

	#[test]
	fn apply_splices_the_requested_text() {
		let mut buffer = ScratchBuffer::from_text("int sum(int a, int b)\n{\n");
		buffer.apply(&ReplaceRequest {
			line: 2,
			text: "\treturn a + b;\n}\n".to_string(),
		});
		assert_eq!(buffer.text(), "int sum(int a, int b)\n{\n\treturn a + b;\n}\n");
	}
}
