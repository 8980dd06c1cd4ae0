//! Collapsible panes. At least one of them always stays expanded.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    Goal,
    Message,
    Packages,
}

impl PaneId {
    pub const ALL: [Self; 3] = [Self::Goal, Self::Message, Self::Packages];

    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Goal => "Goals",
            Self::Message => "Messages",
            Self::Packages => "Packages",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    collapsed: [bool; PaneId::ALL.len()],
}

impl Default for Panes {
    fn default() -> Self {
        Self {
            collapsed: [false, false, true],
        }
    }
}

impl Panes {
    #[must_use]
    pub const fn is_collapsed(&self, pane: PaneId) -> bool {
        self.collapsed[pane.index()]
    }

    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.collapsed.iter().filter(|c| !**c).count()
    }

    /// Flip a pane. Collapsing the last expanded pane is refused and leaves
    /// the state unchanged. Returns whether anything changed.
    pub fn toggle(&mut self, pane: PaneId) -> bool {
        if self.is_collapsed(pane) {
            self.collapsed[pane.index()] = false;
            return true;
        }
        if self.expanded_count() <= 1 {
            debug!(pane = pane.caption(), "refusing to collapse last open pane");
            return false;
        }
        self.collapsed[pane.index()] = true;
        true
    }
}
