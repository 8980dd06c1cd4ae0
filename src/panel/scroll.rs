//! Scroll position of the message pane and its deferred scroll-to-bottom.

use std::time::{Duration, Instant};

/// How the pane travels to its target offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    /// Halves the remaining distance every frame.
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingScroll {
    due: Instant,
    behavior: ScrollBehavior,
}

/// At most one scroll is pending at a time; scheduling another replaces it.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: usize,
    /// Set while the pane is travelling towards the bottom.
    anchor: Option<ScrollBehavior>,
    pending: Option<PendingScroll>,
}

impl ScrollState {
    /// Schedule a scroll to the bottom once `delay` has passed, cancelling
    /// any scroll still waiting.
    pub fn schedule_to_bottom(&mut self, now: Instant, delay: Duration, behavior: ScrollBehavior) {
        self.pending = Some(PendingScroll {
            due: now + delay,
            behavior,
        });
    }

    pub const fn scroll_to_bottom(&mut self, behavior: ScrollBehavior) {
        self.anchor = Some(behavior);
    }

    /// Start the pending scroll if it is due. Returns true if one fired.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.due <= now => {
                self.pending = None;
                self.scroll_to_bottom(pending.behavior);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn is_following_bottom(&self) -> bool {
        self.anchor.is_some()
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.anchor = None;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub const fn scroll_down(&mut self, lines: usize) {
        self.anchor = None;
        self.offset = self.offset.saturating_add(lines);
    }

    /// Advance one frame and return the first line to draw for content of
    /// `content_height` lines shown in a viewport of `viewport` lines.
    pub fn resolve(&mut self, content_height: usize, viewport: usize) -> usize {
        let max = content_height.saturating_sub(viewport);
        self.offset = self.offset.min(max);

        match self.anchor {
            Some(ScrollBehavior::Instant) => {
                self.offset = max;
                self.anchor = None;
            }
            Some(ScrollBehavior::Smooth) => {
                let step = ((max - self.offset) / 2).max(1);
                self.offset = (self.offset + step).min(max);
                if self.offset == max {
                    self.anchor = None;
                }
            }
            None => {}
        }

        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescheduling_replaces_pending_scroll() {
        let start = Instant::now();
        let mut scroll = ScrollState::default();

        scroll.schedule_to_bottom(start, Duration::from_millis(1), ScrollBehavior::Smooth);
        scroll.schedule_to_bottom(
            start,
            Duration::from_millis(50),
            ScrollBehavior::Smooth,
        );

        // The first request would have been due here; it was replaced.
        assert!(!scroll.fire_due(start + Duration::from_millis(2)));
        assert!(scroll.has_pending());
        assert!(scroll.fire_due(start + Duration::from_millis(50)));
        assert!(!scroll.has_pending());
        assert!(!scroll.fire_due(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_instant_scroll_jumps_to_bottom() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to_bottom(ScrollBehavior::Instant);
        assert_eq!(scroll.resolve(40, 10), 30);
        assert!(!scroll.is_following_bottom());
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to_bottom(ScrollBehavior::Smooth);

        let first = scroll.resolve(40, 10);
        assert!(first > 0 && first < 30);

        let mut frames = 0;
        while scroll.is_following_bottom() {
            scroll.resolve(40, 10);
            frames += 1;
            assert!(frames < 40, "smooth scroll never settled");
        }
        assert_eq!(scroll.resolve(40, 10), 30);
    }

    #[test]
    fn test_manual_scroll_detaches_and_clamps() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to_bottom(ScrollBehavior::Smooth);
        scroll.scroll_down(100);
        assert!(!scroll.is_following_bottom());
        assert_eq!(scroll.resolve(40, 10), 30);

        scroll.scroll_up(5);
        assert_eq!(scroll.resolve(40, 10), 25);
        // Content shorter than the viewport pins the offset at zero.
        assert_eq!(scroll.resolve(3, 10), 0);
    }
}
