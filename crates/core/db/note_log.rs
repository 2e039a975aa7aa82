//! Shared log of chat notes.
//!
//! Every chat call funnels its incoming notes through [`NoteExchange::exchange`],
//! which is the only way to touch the log. The scan for earlier notes at the
//! same location and the append of the new note happen under one lock, so all
//! callers observe a single total order of notes.

use parking_lot::Mutex;
use routeguide_types::{Point, RouteNote};

/// Append-only note log with echo-on-match semantics.
#[derive(Debug, Default)]
pub struct NoteExchange {
    log: Mutex<Vec<RouteNote>>,
}

impl NoteExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `note` and return every earlier note at the same location.
    ///
    /// Matches come back in log order. The incoming note is appended after
    /// the scan, so it never matches itself. The lock is released before this
    /// returns; delivering the matches is up to the caller and cannot lose
    /// the note, which is already in the log.
    pub fn exchange(&self, note: RouteNote) -> Vec<RouteNote> {
        let mut notes = self.log.lock();

        let matches: Vec<RouteNote> = notes
            .iter()
            .filter(|m| m.location == note.location)
            .cloned()
            .collect();

        log::debug!(
            "note at {} matched {} earlier notes (log size {})",
            note.location,
            matches.len(),
            notes.len() + 1
        );

        notes.push(note);
        matches
    }

    /// Snapshot of the notes stored at `location`, in log order.
    pub fn notes_at(&self, location: &Point) -> Vec<RouteNote> {
        self.log
            .lock()
            .iter()
            .filter(|m| m.location == *location)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}
