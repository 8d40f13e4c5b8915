//! Resize debouncing.
//!
//! Terminals emit a burst of resize events while a window is dragged. Only
//! the last size is applied, once no new event has arrived for the quiet
//! period.

use std::time::{Duration, Instant};

use hackrain_core::Viewport;

/// Coalesces resize events until the terminal settles.
#[derive(Debug)]
pub struct ResizeDebouncer {
    /// Time without events before a pending size is released.
    quiet: Duration,
    /// Latest size and when it arrived.
    pending: Option<(Viewport, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize event, replacing any pending one.
    pub fn push(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some((viewport, now));
    }

    /// Take the pending size if the quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some((viewport, at)) if now.saturating_duration_since(at) >= self.quiet => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(100);

    #[test]
    fn test_nothing_pending() {
        let mut debouncer = ResizeDebouncer::new(QUIET);
        assert_eq!(debouncer.poll(Instant::now()), None);
    }

    #[test]
    fn test_waits_for_quiet_period() {
        let mut debouncer = ResizeDebouncer::new(QUIET);
        let start = Instant::now();
        debouncer.push(Viewport::from_cells(80, 24), start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(50)), None);
        assert_eq!(
            debouncer.poll(start + QUIET),
            Some(Viewport::from_cells(80, 24))
        );
        assert_eq!(debouncer.poll(start + QUIET * 2), None);
    }

    #[test]
    fn test_burst_keeps_last_size() {
        let mut debouncer = ResizeDebouncer::new(QUIET);
        let start = Instant::now();
        for i in 0..10u16 {
            let at = start + Duration::from_millis(30) * i as u32;
            debouncer.push(Viewport::from_cells(80 + i, 24), at);
            assert_eq!(debouncer.poll(at), None);
        }

        let last = start + Duration::from_millis(270);
        assert_eq!(debouncer.poll(last + Duration::from_millis(99)), None);
        assert_eq!(
            debouncer.poll(last + QUIET),
            Some(Viewport::from_cells(89, 24))
        );
    }
}
