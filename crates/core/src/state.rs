/// Where the engine currently is: dormant, or showing ghost text.
///
/// `Suggesting` carries everything needed to redraw or accept the overlay:
/// the buffer line it is anchored on and the template line that buffer line
/// matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
	#[default]
	Idle,
	Suggesting {
		/// Buffer line the overlay is anchored on.
		anchor_line: usize,
		/// Template line that `anchor_line` matched.
		template_line: usize,
	},
}

impl MatchState {
	pub fn is_active(&self) -> bool {
		matches!(self, Self::Suggesting { .. })
	}

	pub fn anchor_line(&self) -> Option<usize> {
		match self {
			Self::Idle => None,
			Self::Suggesting { anchor_line, .. } => Some(*anchor_line),
		}
	}

	pub fn template_line(&self) -> Option<usize> {
		match self {
			Self::Idle => None,
			Self::Suggesting { template_line, .. } => Some(*template_line),
		}
	}
}
