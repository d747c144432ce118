/// Read-only, line-oriented view of an editor buffer at a point in time.
///
/// The engine never holds a live buffer reference. The host hands it a
/// snapshot per update, and the snapshot's `version` lets the engine drop
/// notifications that describe an older buffer state than the one the host
/// currently shows.
pub trait EditorSnapshot {
	/// Monotonically increasing buffer version this snapshot was taken at.
	fn version(&self) -> u64;

	fn line_count(&self) -> usize;

	/// The line's text without its terminating line break, or `None` when
	/// `index` is out of range.
	fn raw_line(&self, index: usize) -> Option<String>;

	/// `raw_line` with surrounding whitespace stripped, the form every
	/// match is computed on.
	fn trimmed_line(&self, index: usize) -> Option<String> {
		self.raw_line(index).map(|line| line.trim().to_string())
	}
}
