//! Live preview support.
//!
//! [`PreviewController`] holds the last rendered preview and skips
//! re-rendering when the source has not changed. [`Debouncer`] models the
//! quiet period between keystrokes and a render: every input event
//! restarts the timer, and the render fires only once the full quiet
//! period has elapsed with no further events. The debouncer is driven by
//! explicit [`Instant`]s so the timing logic is testable without sleeping.

use crate::parser;
use std::time::{Duration, Instant};

/// Default quiet period before a pending preview render fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// How the preview pane presents the converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// HTML injected into the pane and rendered.
    #[default]
    Rendered,
    /// The same HTML shown as escaped text.
    Source,
}

/// Renders markdown to preview HTML, memoizing on the source string.
#[derive(Debug, Default)]
pub struct PreviewController {
    mode: PreviewMode,
    last_source: Option<String>,
    html: String,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Switches presentation mode. The underlying HTML is unchanged; only
    /// how the pane should present it differs.
    pub fn set_mode(&mut self, mode: PreviewMode) {
        self.mode = mode;
    }

    /// Re-renders the preview if the source changed since the last call.
    ///
    /// Returns the fresh HTML, or `None` when the source is identical to
    /// the previous update and the cached preview is still current.
    pub fn update(&mut self, source: &str) -> Option<&str> {
        if self.last_source.as_deref() == Some(source) {
            return None;
        }
        self.last_source = Some(source.to_string());
        self.html = parser::render_html(source);
        Some(&self.html)
    }

    /// The most recently rendered preview HTML.
    pub fn current(&self) -> &str {
        &self.html
    }
}

/// Restartable quiet-period timer for coalescing input events.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Records an input event at `now`, restarting the quiet period. Any
    /// pending fire is pushed back.
    pub fn record_event(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// True when an event has been recorded and the timer has not fired.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Polls the timer. Returns true exactly once per quiet period that
    /// elapses without an intervening event.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_changed_source() {
        let mut preview = PreviewController::new();
        let html = preview.update("# Hi").expect("first update renders");
        assert!(html.contains("<h1>"));
    }

    #[test]
    fn identical_source_skips_rerender() {
        let mut preview = PreviewController::new();
        preview.update("same text");
        assert_eq!(preview.update("same text"), None);
        // A change after a skip still renders.
        assert!(preview.update("different text").is_some());
    }

    #[test]
    fn cached_preview_survives_skipped_updates() {
        let mut preview = PreviewController::new();
        preview.update("**bold**");
        preview.update("**bold**");
        assert!(preview.current().contains("<strong>"));
    }

    #[test]
    fn mode_switch_keeps_html() {
        let mut preview = PreviewController::new();
        preview.update("text");
        let before = preview.current().to_string();
        preview.set_mode(PreviewMode::Source);
        assert_eq!(preview.mode(), PreviewMode::Source);
        assert_eq!(preview.current(), before);
    }

    #[test]
    fn debouncer_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();
        debouncer.record_event(start);
        assert!(!debouncer.fire(start + Duration::from_millis(299)));
        assert!(debouncer.fire(start + Duration::from_millis(300)));
        // Fires only once per quiet period.
        assert!(!debouncer.fire(start + Duration::from_millis(400)));
    }

    #[test]
    fn new_event_restarts_the_timer() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();
        debouncer.record_event(start);
        debouncer.record_event(start + Duration::from_millis(200));
        assert!(!debouncer.fire(start + Duration::from_millis(300)));
        assert!(debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(Instant::now()));
    }
}
