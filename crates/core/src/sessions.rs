//! One suggestion session per host buffer.

use std::collections::HashMap;

use crate::config::SuggestionConfig;
use crate::controller::SuggestionController;

/// Host-side identity of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u64);

/// Registry owning one [`SuggestionController`] per buffer.
///
/// Attaching an already-attached buffer hands back the existing session
/// untouched, so a buffer never carries two overlays. Sessions are fully
/// independent; nothing is shared across buffers.
#[derive(Debug, Default)]
pub struct Sessions {
	inner: HashMap<BufferId, SuggestionController>,
}

impl Sessions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the buffer's controller, creating it from `config` on first
	/// attach.
	pub fn attach(&mut self, id: BufferId, config: SuggestionConfig) -> &mut SuggestionController {
		self.inner.entry(id).or_insert_with(|| SuggestionController::new(config))
	}

	pub fn get(&self, id: BufferId) -> Option<&SuggestionController> {
		self.inner.get(&id)
	}

	pub fn get_mut(&mut self, id: BufferId) -> Option<&mut SuggestionController> {
		self.inner.get_mut(&id)
	}

	/// Drops the buffer's session. Returns whether one existed.
	pub fn detach(&mut self, id: BufferId) -> bool {
		self.inner.remove(&id).is_some()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}
