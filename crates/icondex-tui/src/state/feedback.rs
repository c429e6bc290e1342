//! Transient UI timers: the "copied" marker and the double-Escape chord.

use std::time::{Duration, Instant};

/// Which copy affordance produced a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyKind {
    /// `from module import Class`
    Statement,
    /// Raw dotted import path.
    Path,
}

/// Identifies a single copy action on a single record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyId {
    pub import_path: String,
    pub kind: CopyKind,
}

impl CopyId {
    pub fn new(import_path: impl Into<String>, kind: CopyKind) -> Self {
        Self {
            import_path: import_path.into(),
            kind,
        }
    }
}

/// Tracks the most recent copy and its pending auto-clears.
///
/// Every copy schedules its own clear. A clear only takes effect if the id it
/// was scheduled for is still the one displayed, so an older timer never
/// erases a newer confirmation.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    current: Option<CopyId>,
    pending: Vec<(CopyId, Instant)>,
    ttl: Duration,
}

impl CopyFeedback {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            pending: Vec::new(),
            ttl,
        }
    }

    pub fn mark(&mut self, id: CopyId, now: Instant) {
        self.current = Some(id.clone());
        self.pending.push((id, now + self.ttl));
    }

    /// Fire every clear that is due at `now`. Returns `true` if the marker
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let current = &mut self.current;
        let mut changed = false;

        self.pending.retain(|(id, deadline)| {
            if *deadline > now {
                return true;
            }
            if current.as_ref() == Some(id) {
                *current = None;
                changed = true;
            }
            false
        });

        changed
    }

    pub fn current(&self) -> Option<&CopyId> {
        self.current.as_ref()
    }

    pub fn is_showing(&self, id: &CopyId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Number of clears not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Detects two Escape presses within a short window.
#[derive(Debug, Clone)]
pub struct EscapeChord {
    last: Option<Instant>,
    window: Duration,
}

impl EscapeChord {
    pub fn new(window: Duration) -> Self {
        Self { last: None, window }
    }

    /// Record a press. Returns `true` when it completes a chord.
    ///
    /// The timestamp is updated on every press, chord or not.
    pub fn press(&mut self, now: Instant) -> bool {
        let fired = self
            .last
            .is_some_and(|prev| now.saturating_duration_since(prev) < self.window);
        self.last = Some(now);
        fired
    }

    pub fn last_press(&self) -> Option<Instant> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(2000);

    fn id(path: &str) -> CopyId {
        CopyId::new(path, CopyKind::Statement)
    }

    #[test]
    fn copy_marker_clears_after_ttl() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);

        feedback.mark(id("aws.compute.EC2"), start);
        assert!(feedback.is_showing(&id("aws.compute.EC2")));

        assert!(!feedback.tick(start + Duration::from_millis(1999)));
        assert!(feedback.is_showing(&id("aws.compute.EC2")));

        assert!(feedback.tick(start + TTL));
        assert_eq!(feedback.current(), None);
        assert_eq!(feedback.pending(), 0);
    }

    #[test]
    fn stale_clear_does_not_erase_newer_copy() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);

        feedback.mark(id("a.A"), start);
        feedback.mark(id("b.B"), start + Duration::from_millis(500));
        assert!(feedback.is_showing(&id("b.B")));

        // A's timer fires; B stays.
        assert!(!feedback.tick(start + TTL));
        assert!(feedback.is_showing(&id("b.B")));
        assert_eq!(feedback.pending(), 1);

        // B's own timer clears it.
        assert!(feedback.tick(start + Duration::from_millis(2500)));
        assert_eq!(feedback.current(), None);
    }

    #[test]
    fn statement_and_path_are_distinct_ids() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);

        feedback.mark(CopyId::new("x.Y", CopyKind::Path), start);
        assert!(!feedback.is_showing(&CopyId::new("x.Y", CopyKind::Statement)));
        assert!(feedback.is_showing(&CopyId::new("x.Y", CopyKind::Path)));
    }

    #[test]
    fn double_escape_within_window_fires() {
        let start = Instant::now();
        let mut chord = EscapeChord::new(Duration::from_millis(300));

        assert!(!chord.press(start));
        assert!(chord.press(start + Duration::from_millis(150)));
    }

    #[test]
    fn slow_or_single_escape_does_not_fire() {
        let start = Instant::now();
        let mut chord = EscapeChord::new(Duration::from_millis(300));

        assert!(!chord.press(start));
        assert!(!chord.press(start + Duration::from_millis(400)));
        assert_eq!(chord.last_press(), Some(start + Duration::from_millis(400)));

        // The 400ms press still counts as the start of a new chord.
        assert!(chord.press(start + Duration::from_millis(500)));
    }
}
