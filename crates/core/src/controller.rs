//! Session driver: folds buffer/caret notifications into match state and
//! render or replace requests.
//!
//! The controller never touches a buffer or a screen. Each [`update`]
//! returns an [`UpdateOutcome`] describing what the host should do: draw
//! ghost rows, splice accepted text, or repaint a span of lines. Hosts
//! apply the outcome; the next notification comes back through [`update`].
//!
//! [`update`]: SuggestionController::update

use tracing::{debug, trace, warn};

use crate::config::SuggestionConfig;
use crate::matcher::{LineMatch, match_line};
use crate::render::{GhostRow, ghost_rows};
use crate::snapshot::EditorSnapshot;
use crate::state::MatchState;
use crate::template::SuggestionTemplate;


/// Half-open span of buffer lines whose rendering must be refreshed.
///
/// `end` may exceed the buffer's line count: overlay rows extend below
/// the last buffer line while a suggestion is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
	pub start: usize,
	pub end: usize,
}

impl LineSpan {
	fn of_overlay(anchor_line: usize, rows: usize) -> Self {
		Self {
			start: anchor_line,
			end: anchor_line + rows,
		}
	}

	fn union(self, other: Self) -> Self {
		Self {
			start: self.start.min(other.start),
			end: self.end.max(other.end),
		}
	}
}

/// Asks the renderer to draw ghost rows anchored at `anchor_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
	pub anchor_line: usize,
	/// Trimmed text already typed on the anchor line.
	pub typed: String,
	/// Template line the anchor line matched.
	pub template_line: usize,
	pub rows: Vec<GhostRow>,
}

/// Asks the host to replace the text of `line`, its line break excluded,
/// with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRequest {
	pub line: usize,
	pub text: String,
}

/// Everything one [`SuggestionController::update`] call decided.
///
/// At most one of `render` and `replace` is present. `invalidate` is set
/// exactly when something on screen changed; `render: None` together with
/// `invalidate: Some` is the request to take existing ghost text down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
	pub state: MatchState,
	pub render: Option<RenderRequest>,
	pub replace: Option<ReplaceRequest>,
	pub invalidate: Option<LineSpan>,
}

impl UpdateOutcome {
	fn noop(state: MatchState) -> Self {
		Self {
			state,
			render: None,
			replace: None,
			invalidate: None,
		}
	}

	pub fn is_noop(&self) -> bool {
		self.render.is_none() && self.replace.is_none() && self.invalidate.is_none()
	}

	/// True when the outcome removes ghost text without drawing new rows.
	pub fn is_clear(&self) -> bool {
		self.render.is_none() && self.invalidate.is_some()
	}
}

/// Owns one suggestion session: the template, the commit trigger, and the
/// current [`MatchState`].
#[derive(Debug, Clone)]
pub struct SuggestionController {
	template: SuggestionTemplate,
	commit_trigger: char,
	state: MatchState,
}

impl SuggestionController {
	pub fn new(config: SuggestionConfig) -> Self {
		if config.template.is_empty() {
			warn!("suggestion template is empty; the session will never match");
		}
		Self {
			template: SuggestionTemplate::new(config.template),
			commit_trigger: config.commit_trigger,
			state: MatchState::Idle,
		}
	}

	pub fn state(&self) -> MatchState {
		self.state
	}

	pub fn template(&self) -> &SuggestionTemplate {
		&self.template
	}

	/// Processes one buffer/caret notification.
	///
	/// `latest_version` is the version of the buffer the host currently
	/// shows. A snapshot older than that describes text the user no longer
	/// sees, so it is dropped without touching the state. `caret_line` is
	/// `None` when the host could not resolve the caret.
	pub fn update<S: EditorSnapshot>(&mut self, snapshot: &S, latest_version: u64, caret_line: Option<usize>) -> UpdateOutcome {
		if snapshot.version() != latest_version {
			trace!(snapshot = snapshot.version(), latest = latest_version, "dropping stale update");
			return UpdateOutcome::noop(self.state);
		}
		let Some(caret_line) = caret_line else {
			return UpdateOutcome::noop(self.state);
		};
		let Some(raw) = snapshot.raw_line(caret_line) else {
			trace!(caret_line, "caret line out of range");
			return UpdateOutcome::noop(self.state);
		};
		let line = raw.trim();

		// A blank caret line cannot start a session, and on line 0 it has
		// no previous line to look back at, so an active overlay comes
		// down. Anywhere else it flows into the matcher's look-back.
		if line.is_empty() {
			if !self.state.is_active() {
				return UpdateOutcome::noop(self.state);
			}
			if caret_line == 0 {
				return self.clear();
			}
		}

		match match_line(&self.template, snapshot, caret_line) {
			Some(found) if raw.ends_with(self.commit_trigger) => self.commit(caret_line, &found),
			Some(found) => self.show(caret_line, line, &found),
			None if self.state.is_active() => self.clear(),
			None => UpdateOutcome::noop(self.state),
		}
	}

	fn show(&mut self, caret_line: usize, typed: &str, found: &LineMatch) -> UpdateOutcome {
		let old_span = self.overlay_span();
		let rows = ghost_rows(&self.template, typed, found.template_line);
		let span = LineSpan::of_overlay(caret_line, rows.len());
		let span = old_span.map_or(span, |old| span.union(old));

		if !self.state.is_active() {
			debug!(anchor_line = caret_line, template_line = found.template_line, "suggestion shown");
		}
		self.state = MatchState::Suggesting {
			anchor_line: caret_line,
			template_line: found.template_line,
		};

		UpdateOutcome {
			state: self.state,
			render: Some(RenderRequest {
				anchor_line: caret_line,
				typed: typed.to_string(),
				template_line: found.template_line,
				rows,
			}),
			replace: None,
			invalidate: Some(span),
		}
	}

	fn clear(&mut self) -> UpdateOutcome {
		let span = self.overlay_span();
		if let MatchState::Suggesting { anchor_line, template_line } = self.state {
			debug!(anchor_line, template_line, "suggestion cleared");
		}
		self.state = MatchState::Idle;
		UpdateOutcome {
			state: self.state,
			render: None,
			replace: None,
			invalidate: span,
		}
	}

	fn commit(&mut self, caret_line: usize, found: &LineMatch) -> UpdateOutcome {
		let text = self.template.remainder_from(found.template_line);
		let inserted = self.template.line_count() - found.template_line;
		let span = LineSpan::of_overlay(caret_line, inserted);
		let span = self.overlay_span().map_or(span, |old| span.union(old));

		debug!(line = caret_line, template_line = found.template_line, "suggestion accepted");
		self.state = MatchState::Idle;

		UpdateOutcome {
			state: self.state,
			render: None,
			replace: Some(ReplaceRequest { line: caret_line, text }),
			invalidate: Some(span),
		}
	}

	/// Buffer lines the current overlay occupies, `None` when idle.
	fn overlay_span(&self) -> Option<LineSpan> {
		match self.state {
			MatchState::Idle => None,
			MatchState::Suggesting { anchor_line, template_line } => {
				Some(LineSpan::of_overlay(anchor_line, self.template.line_count() - template_line))
			}
		}
	}
}
