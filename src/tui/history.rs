//! Linear undo/redo history of structural edits.
//!
//! Entries name the edited node by CIDR, which stays valid across arena
//! slot reuse. A join also keeps the [`Shape`] it erased so undo can
//! rebuild the subtree.

use crate::models::Cidr;
use crate::processing::Shape;
use std::collections::VecDeque;

/// Maximum number of undoable edits kept.
pub const UNDO_LIMIT: usize = 50;

/// One structural edit applied to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The leaf `cidr` was split into two halves.
    Split { cidr: Cidr },
    /// The subtree under `cidr` was collapsed. `shape` is what it held.
    Join { cidr: Cidr, shape: Shape },
}

impl Edit {
    pub fn cidr(&self) -> Cidr {
        match self {
            Edit::Split { cidr } | Edit::Join { cidr, .. } => *cidr,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct History {
    undo: VecDeque<Edit>,
    redo: Vec<Edit>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Record a fresh edit. Clears the redo stack.
    pub fn record(&mut self, edit: Edit) {
        self.push_undo(edit);
        self.redo.clear();
    }

    pub fn pop_undo(&mut self) -> Option<Edit> {
        self.undo.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<Edit> {
        self.redo.pop()
    }

    /// Park an undone edit for redo.
    pub fn push_redo(&mut self, edit: Edit) {
        self.redo.push(edit);
    }

    /// Push onto the undo stack without touching redo, evicting the oldest
    /// entry past [`UNDO_LIMIT`].
    pub fn push_undo(&mut self, edit: Edit) {
        self.undo.push_back(edit);
        if self.undo.len() > UNDO_LIMIT {
            self.undo.pop_front();
        }
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
