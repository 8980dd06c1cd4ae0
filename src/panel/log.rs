//! Message log with severity filtering and session-id grouping.
//!
//! Group markers are computed against the full insertion order when an
//! entry is appended. Whenever the threshold changes, the visible
//! subsequence changes with it, so the `prev_end_adjacent` flag of every
//! group start is re-derived from visible neighbours on the next frame.

use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scroll::{ScrollBehavior, ScrollState};
use crate::error::{Error, Result};

/// Delay before a freshly appended visible entry pulls the pane down.
pub const SCROLL_DELAY: Duration = Duration::from_millis(1);

/// Message severity as reported by the proof engine, most severe first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Severity {
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownSeverity`] for ranks past `Debug`.
    pub fn from_rank(rank: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(rank))
            .copied()
            .ok_or_else(|| Error::UnknownSeverity(rank.to_string()))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
            Self::Info => "Info",
            Self::Debug => "Debug",
        }
    }

    /// One step towards `Error`, saturating.
    #[must_use]
    pub const fn more_severe(self) -> Self {
        match self {
            Self::Error | Self::Warning => Self::Error,
            Self::Notice => Self::Warning,
            Self::Info => Self::Notice,
            Self::Debug => Self::Info,
        }
    }

    /// One step towards `Debug`, saturating.
    #[must_use]
    pub const fn less_severe(self) -> Self {
        match self {
            Self::Error => Self::Warning,
            Self::Warning => Self::Notice,
            Self::Notice => Self::Info,
            Self::Info | Self::Debug => Self::Debug,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A threshold given either by rank or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSelect {
    Rank(u8),
    Name(String),
}

impl LevelSelect {
    /// # Errors
    ///
    /// Returns [`Error::UnknownSeverity`] for an out-of-range rank or an
    /// unrecognised name.
    pub fn resolve(&self) -> Result<Severity> {
        match self {
            Self::Rank(rank) => Severity::from_rank(*rank),
            Self::Name(name) => name.parse(),
        }
    }
}

/// Position of an entry in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

/// One rendered log line. Only the group markers change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub body: String,
    pub severity: Severity,
    pub session_id: Option<String>,
    pub group_start: bool,
    pub group_end: bool,
    /// The group starting here directly follows the end of another group.
    pub prev_end_adjacent: bool,
}

impl LogEntry {
    fn new(body: String, severity: Severity, session_id: Option<String>) -> Self {
        Self {
            body,
            severity,
            session_id,
            group_start: false,
            group_end: false,
            prev_end_adjacent: false,
        }
    }
}

#[derive(Debug)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
    threshold: Severity,
    /// Per-severity display flags, indexed by rank.
    shown: [bool; Severity::ALL.len()],
    readjust_pending: bool,
    scroll: ScrollState,
}

impl Default for MessageLog {
    fn default() -> Self {
        let mut log = Self {
            entries: Vec::new(),
            threshold: Severity::Info,
            shown: [false; Severity::ALL.len()],
            readjust_pending: false,
            scroll: ScrollState::default(),
        };
        log.set_severity_threshold(Severity::Info);
        log
    }
}

impl MessageLog {
    /// Append an entry and link it to its predecessor when both carry the
    /// same session id.
    pub fn append(
        &mut self,
        body: impl Into<String>,
        severity: Severity,
        session_id: Option<String>,
    ) -> EntryId {
        self.append_at(body, severity, session_id, Instant::now())
    }

    pub(crate) fn append_at(
        &mut self,
        body: impl Into<String>,
        severity: Severity,
        session_id: Option<String>,
        now: Instant,
    ) -> EntryId {
        let mut entry = LogEntry::new(body.into(), severity, session_id);

        if let Some(sid) = entry.session_id.as_deref() {
            match self.entries.last_mut() {
                Some(prev) if prev.session_id.as_deref() == Some(sid) => {
                    prev.group_end = false;
                    entry.group_end = true;
                }
                prev => {
                    entry.group_start = true;
                    entry.group_end = true;
                    entry.prev_end_adjacent = prev.is_some_and(|p| p.group_end);
                }
            }
        }

        self.entries.push(entry);

        if self.is_visible(severity) {
            self.scroll
                .schedule_to_bottom(now, SCROLL_DELAY, ScrollBehavior::Smooth);
        }

        EntryId(self.entries.len() - 1)
    }

    pub fn set_severity_threshold(&mut self, threshold: Severity) {
        debug!(level = %threshold, "setting log level");
        for severity in Severity::ALL {
            self.shown[usize::from(severity.rank())] = severity <= threshold;
        }
        self.threshold = threshold;
        self.readjust_pending = true;
    }

    /// Accepts a rank or a severity name. Invalid input leaves the threshold
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSeverity`] when `level` names no severity.
    pub fn select_threshold(&mut self, level: &LevelSelect) -> Result<Severity> {
        let severity = level.resolve()?;
        self.set_severity_threshold(severity);
        Ok(severity)
    }

    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    #[must_use]
    pub fn is_visible(&self, severity: Severity) -> bool {
        self.shown[usize::from(severity.rank())]
    }

    /// Next-frame work: separator re-scan after a filter change, then any
    /// scroll that has become due.
    pub fn on_frame(&mut self, now: Instant) {
        if self.readjust_pending {
            self.readjust_pending = false;
            self.readjust_separators();
            self.scroll.scroll_to_bottom(ScrollBehavior::Instant);
        }
        self.scroll.fire_due(now);
    }

    #[must_use]
    pub const fn readjust_pending(&self) -> bool {
        self.readjust_pending
    }

    fn readjust_separators(&mut self) {
        let shown = self.shown;
        let mut last_visible_end = None;

        for entry in &mut self.entries {
            if entry.group_start {
                entry.prev_end_adjacent = last_visible_end.unwrap_or(false);
            }
            if shown[usize::from(entry.severity.rank())] {
                last_visible_end = Some(entry.group_end);
            }
        }
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&LogEntry> {
        self.entries.get(id.0)
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| self.is_visible(e.severity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub const fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_severity_ranks_and_names() {
        assert_eq!(Severity::Error.rank(), 0);
        assert_eq!(Severity::Debug.rank(), 4);
        assert_eq!(Severity::from_rank(2).unwrap(), Severity::Notice);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert!(matches!(
            Severity::from_rank(5),
            Err(Error::UnknownSeverity(s)) if s == "5"
        ));
        assert!(matches!(
            "Fatal".parse::<Severity>(),
            Err(Error::UnknownSeverity(s)) if s == "Fatal"
        ));
    }

    #[test]
    fn test_default_threshold_is_info() {
        let log = MessageLog::default();
        assert_eq!(log.threshold(), Severity::Info);
        assert!(log.is_visible(Severity::Error));
        assert!(log.is_visible(Severity::Info));
        assert!(!log.is_visible(Severity::Debug));
    }

    #[test]
    fn test_session_run_moves_group_end_forward() {
        let mut log = MessageLog::default();
        let ids: Vec<EntryId> = (0..4)
            .map(|i| log.append(format!("line {i}"), Severity::Info, sid("s1")))
            .collect();

        for (n, id) in ids.iter().enumerate() {
            let entry = log.entry(*id).unwrap();
            assert_eq!(entry.group_start, n == 0, "group_start of entry {n}");
            assert_eq!(entry.group_end, n == 3, "group_end of entry {n}");
        }
    }

    #[test]
    fn test_abutting_groups_flag_prev_end() {
        let mut log = MessageLog::default();
        log.append("a", Severity::Info, sid("s1"));
        let second = log.append("b", Severity::Info, sid("s2"));
        let untagged = log.append("c", Severity::Info, None);
        let third = log.append("d", Severity::Info, sid("s3"));

        let second = log.entry(second).unwrap();
        assert!(second.group_start && second.group_end && second.prev_end_adjacent);

        let untagged = log.entry(untagged).unwrap();
        assert!(!untagged.group_start && !untagged.group_end);

        // Preceded by an untagged entry, so no abutting group.
        assert!(!log.entry(third).unwrap().prev_end_adjacent);
    }

    #[test]
    fn test_grouping_ignores_visibility() {
        let mut log = MessageLog::default();
        let first = log.append("visible", Severity::Info, sid("s1"));
        let hidden = log.append("hidden", Severity::Debug, sid("s1"));

        assert!(!log.entry(first).unwrap().group_end);
        assert!(log.entry(hidden).unwrap().group_end);
    }

    #[test]
    fn test_readjust_skips_hidden_entries() {
        let mut log = MessageLog::default();
        log.append("first group", Severity::Info, sid("s1"));
        log.append("debug noise", Severity::Debug, None);
        let next = log.append("second group", Severity::Info, sid("s2"));

        // Insertion-time: the debug entry sits between the two groups.
        assert!(!log.entry(next).unwrap().prev_end_adjacent);

        log.set_severity_threshold(Severity::Info);
        assert!(log.readjust_pending());
        log.on_frame(Instant::now());
        assert!(!log.readjust_pending());
        assert!(log.entry(next).unwrap().prev_end_adjacent);

        log.set_severity_threshold(Severity::Debug);
        log.on_frame(Instant::now());
        assert!(!log.entry(next).unwrap().prev_end_adjacent);
    }

    #[test]
    fn test_visible_append_schedules_scroll() {
        let mut log = MessageLog::default();
        let now = Instant::now();
        // Settle the initial jump so only the append can anchor the pane again.
        log.on_frame(now);
        log.scroll_mut().resolve(10, 5);
        assert!(!log.scroll().is_following_bottom());

        log.append_at("quiet", Severity::Debug, None, now);
        assert!(!log.scroll().has_pending());

        log.append_at("loud", Severity::Error, None, now);
        assert!(log.scroll().has_pending());
        assert!(!log.scroll().is_following_bottom());

        log.on_frame(now + SCROLL_DELAY);
        assert!(!log.scroll().has_pending());
        assert!(log.scroll().is_following_bottom());
        // Smooth travel covers half the remaining distance per frame.
        assert_eq!(log.scroll_mut().resolve(40, 10), 17);
        assert!(log.scroll().is_following_bottom());
    }

    #[test]
    fn test_threshold_change_jumps_to_bottom_next_frame() {
        let mut log = MessageLog::default();
        let now = Instant::now();
        log.on_frame(now);
        log.scroll_mut().resolve(40, 10);
        log.scroll_mut().scroll_up(30);
        assert!(!log.scroll().is_following_bottom());

        log.set_severity_threshold(Severity::Debug);
        assert!(!log.scroll().is_following_bottom());

        log.on_frame(now);
        assert!(log.scroll().is_following_bottom());
        assert_eq!(log.scroll_mut().resolve(40, 10), 30);
        assert!(!log.scroll().is_following_bottom());
    }

    #[test]
    fn test_select_threshold_rejects_unknown_name() {
        let mut log = MessageLog::default();
        log.set_severity_threshold(Severity::Warning);

        let result = log.select_threshold(&LevelSelect::Name("Verbose".to_string()));
        assert!(result.is_err());
        assert_eq!(log.threshold(), Severity::Warning);

        let result = log.select_threshold(&LevelSelect::Rank(4));
        assert_eq!(result.unwrap(), Severity::Debug);
    }
}
