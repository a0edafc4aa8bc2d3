//! Scene timeline: snapshots of the scene over time, for undo/redo style
//! navigation ("go back").

use crate::model::SceneModel;

/// A linear history of scene snapshots with a cursor.
///
/// Recording while the cursor is in the past truncates the redo tail, the
/// way an editor's undo stack behaves.
#[derive(Debug, Clone)]
pub struct SceneTimeline {
    snapshots: Vec<SceneModel>,
    cursor: usize,
}

impl SceneTimeline {
    /// Start a timeline at an initial scene state.
    #[must_use]
    pub fn new(initial: SceneModel) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The scene at the cursor.
    #[must_use]
    pub fn current(&self) -> &SceneModel {
        &self.snapshots[self.cursor]
    }

    /// Number of snapshots recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false // a timeline always holds at least its initial snapshot
    }

    /// Record a new snapshot after the cursor, dropping any redo tail.
    pub fn record(&mut self, scene: SceneModel) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot; returns the new current scene, or `None` at
    /// the beginning of time.
    pub fn back(&mut self) -> Option<&SceneModel> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot; returns the new current scene, or `None`
    /// at the end.
    pub fn forward(&mut self) -> Option<&SceneModel> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Whether stepping back is possible.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether stepping forward is possible.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }
}
