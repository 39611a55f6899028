//! Snapshot-based undo/redo history.

use crate::draw::Element;

/// Linear history of committed-scene snapshots.
///
/// `snapshots[cursor]` always matches the committed scene once a gesture has
/// finished. The history starts with a single empty snapshot, so the first
/// undo after drawing returns to a blank board.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    cursor: usize,
    /// Maximum number of snapshots to keep; 0 keeps everything.
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(0)
    }
}

impl History {
    /// Creates a history holding only the empty scene.
    pub fn new(max_entries: usize) -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
            max_entries,
        }
    }

    /// Records a deep copy of `elements` after the cursor.
    ///
    /// Anything after the cursor (the redo branch) is dropped first. When the
    /// depth cap is exceeded the oldest snapshot is discarded.
    pub fn snapshot(&mut self, elements: &[Element]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(elements.to_vec());
        self.cursor += 1;

        if self.max_entries > 0 && self.snapshots.len() > self.max_entries {
            let overflow = self.snapshots.len() - self.max_entries;
            self.snapshots.drain(..overflow);
            self.cursor = self.cursor.saturating_sub(overflow);
            log::debug!("History trimmed {} old snapshot(s)", overflow);
        }
    }

    /// Steps back one snapshot and returns it, or `None` at the start.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps forward one snapshot and returns it, or `None` at the end.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &[Element] {
        self.snapshots
            .get(self.cursor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
