//! Interactive model and its reducer.
//!
//! [`Model::update`] handles one [`Msg`] to completion and returns the
//! side effects the event loop must perform. The model itself never does
//! I/O, so every transition can be driven directly from tests.

use super::history::{Edit, History};
use super::keys::Action;
use super::layout::{vertical_scroll, viewport_height};
use crate::error::SubnetError;
use crate::models::{subnet_count, Cidr};
use crate::output::to_json;
use crate::processing::{NodeId, SubnetTree};
use std::time::Duration;

/// How long a status message stays on screen.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Status shown after export was requested.
pub const EXPORT_STATUS: &str = "Press 'q' to quit and see JSON output";
/// Status shown after the tree was copied.
pub const COPY_STATUS: &str = "Copied to clipboard!";

/// Input to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Action(Action),
    /// Terminal resized to width, height.
    Resize(u16, u16),
    /// Clear the status message with this sequence number.
    ClearStatus(u64),
}

/// Work the event loop performs on behalf of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    /// Deliver `Msg::ClearStatus(seq)` after the delay.
    ClearStatusAfter(Duration, u64),
    /// Put this text on the clipboard.
    Copy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Status {
    text: String,
    seq: u64,
}

/// State of one interactive session.
#[derive(Debug, Clone)]
pub struct Model {
    tree: SubnetTree,
    /// Leaves of the tree, left to right.
    rows: Vec<NodeId>,
    cursor: usize,
    width: u16,
    height: u16,
    initial_prefix: u8,
    /// First visible split column.
    scroll_offset: usize,
    /// First visible row.
    vertical_scroll: usize,
    history: History,
    status: Option<Status>,
    status_seq: u64,
    show_full_help: bool,
    export_requested: bool,
}

impl Model {
    /// Build a model for `cidr`, optionally pre-split to `initial_split`.
    ///
    /// The split target must be longer than the network's prefix, within the
    /// generation cap and no deeper than the tree's split depth limit.
    pub fn new(cidr: &str, initial_split: Option<u8>) -> Result<Model, SubnetError> {
        let cidr = Cidr::new(cidr)?.masked();
        let mut tree = SubnetTree::new(cidr);

        if let Some(target) = initial_split {
            subnet_count(cidr.bits, target, cidr.addr_bits())?;
            if target > tree.max_split_depth() {
                return Err(SubnetError::TargetExceedsSplitDepth {
                    target,
                    max: tree.max_split_depth(),
                });
            }
            tree.split_to_depth(tree.root(), target);
        }

        let mut model = Model {
            tree,
            rows: Vec::new(),
            cursor: 0,
            width: 0,
            height: 0,
            initial_prefix: cidr.bits,
            scroll_offset: 0,
            vertical_scroll: 0,
            history: History::new(),
            status: None,
            status_seq: 0,
            show_full_help: false,
            export_requested: false,
        };
        model.update_rows();
        log::debug!(
            "interactive model created cidr={} rows={}",
            cidr,
            model.rows.len()
        );
        Ok(model)
    }

    /// Handle one message and report the effects it asks for.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = match msg {
            Msg::Action(action) => self.handle_action(action),
            Msg::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Vec::new()
            }
            Msg::ClearStatus(seq) => {
                if self.status.as_ref().is_some_and(|s| s.seq == seq) {
                    self.status = None;
                }
                Vec::new()
            }
        };
        self.vertical_scroll = vertical_scroll(
            self.vertical_scroll,
            self.cursor,
            self.viewport_height(),
            self.rows.len(),
        );
        effects
    }

    fn handle_action(&mut self, action: Action) -> Vec<Effect> {
        let last_row = self.rows.len().saturating_sub(1);
        match action {
            Action::Quit => return vec![Effect::Quit],
            Action::Up => self.cursor = self.cursor.saturating_sub(1),
            Action::Down => self.cursor = (self.cursor + 1).min(last_row),
            Action::PageUp => {
                let page = self.viewport_height();
                self.vertical_scroll = self.vertical_scroll.saturating_sub(page);
                self.cursor = self.cursor.saturating_sub(page);
            }
            Action::PageDown => {
                let page = self.viewport_height();
                let max_scroll = self.rows.len().saturating_sub(page);
                self.vertical_scroll = (self.vertical_scroll + page).min(max_scroll);
                self.cursor = (self.cursor + page).min(last_row);
            }
            Action::Left => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::Right => {
                let columns = self.max_bits() - self.initial_prefix + 1;
                if self.scroll_offset + 1 < usize::from(columns) {
                    self.scroll_offset += 1;
                }
            }
            Action::Split => return self.split_selected(),
            Action::Join => return self.join_selected(),
            Action::Undo => return self.undo(),
            Action::Redo => return self.redo(),
            Action::Export => {
                self.export_requested = true;
                return self.set_status(EXPORT_STATUS);
            }
            Action::Copy => {
                return match self.export_json() {
                    Ok(json) => {
                        let mut effects = vec![Effect::Copy(json)];
                        effects.extend(self.set_status(COPY_STATUS));
                        effects
                    }
                    Err(err) => {
                        log::warn!("export for clipboard failed: {err}");
                        self.set_status(&format!("Copy failed: {err}"))
                    }
                };
            }
            Action::ToggleHelp => self.show_full_help = !self.show_full_help,
        }
        Vec::new()
    }

    fn split_selected(&mut self) -> Vec<Effect> {
        let Some(id) = self.selected() else {
            return Vec::new();
        };
        let cidr = self.tree[id].cidr();
        if cidr.bits >= self.tree.max_split_depth() {
            log::warn!("split refused cidr={cidr} max={}", self.tree.max_split_depth());
            return self.set_status(&format!(
                "Cannot split beyond /{}",
                self.tree.max_split_depth()
            ));
        }
        if !self.tree.split(id) {
            return Vec::new();
        }

        log::debug!("split cidr={cidr}");
        self.history.record(Edit::Split { cidr });
        self.update_rows();
        self.set_status(&format!("Split /{}", cidr.bits + 1))
    }

    fn join_selected(&mut self) -> Vec<Effect> {
        let parent = self.selected().and_then(|id| self.tree[id].parent);
        let Some(parent) = parent else {
            return self.set_status("Nothing to join");
        };

        let cidr = self.tree[parent].cidr();
        let shape = self.tree.shape(parent);
        self.tree.join(parent);
        log::debug!("joined cidr={cidr}");
        self.history.record(Edit::Join { cidr, shape });
        self.update_rows();
        self.move_cursor_to(parent);
        self.set_status(&format!("Joined into {cidr}"))
    }

    fn undo(&mut self) -> Vec<Effect> {
        let Some(edit) = self.history.pop_undo() else {
            return self.set_status("Nothing to undo");
        };
        let Some(id) = self.tree.find(edit.cidr()) else {
            log::warn!("undo target missing cidr={}", edit.cidr());
            return self.set_status("Nothing to undo");
        };

        match &edit {
            Edit::Split { .. } => {
                self.tree.join(id);
            }
            Edit::Join { shape, .. } => self.tree.restore_shape(id, shape),
        }
        log::debug!("undone {edit:?}");
        self.history.push_redo(edit);
        self.update_rows();
        self.move_cursor_to(id);
        self.set_status("Undone")
    }

    fn redo(&mut self) -> Vec<Effect> {
        let Some(edit) = self.history.pop_redo() else {
            return self.set_status("Nothing to redo");
        };
        let Some(id) = self.tree.find(edit.cidr()) else {
            log::warn!("redo target missing cidr={}", edit.cidr());
            return self.set_status("Nothing to redo");
        };

        match &edit {
            Edit::Split { .. } => {
                self.tree.split(id);
            }
            Edit::Join { .. } => {
                self.tree.join(id);
            }
        }
        log::debug!("redone {edit:?}");
        self.history.push_undo(edit);
        self.update_rows();
        self.move_cursor_to(id);
        self.set_status("Redone")
    }

    fn set_status(&mut self, text: &str) -> Vec<Effect> {
        self.status_seq += 1;
        self.status = Some(Status {
            text: text.to_string(),
            seq: self.status_seq,
        });
        vec![Effect::ClearStatusAfter(STATUS_TIMEOUT, self.status_seq)]
    }

    /// Recollect leaves and keep the cursor and column scroll in range.
    fn update_rows(&mut self) {
        self.rows = self.tree.leaves(self.tree.root());
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.scroll_offset = self
            .scroll_offset
            .min(self.split_levels().saturating_sub(1));
    }

    /// Put the cursor on the first leaf under `id`.
    fn move_cursor_to(&mut self, id: NodeId) {
        let Some(&first) = self.tree.leaves(id).first() else {
            return;
        };
        if let Some(row) = self.rows.iter().position(|&r| r == first) {
            self.cursor = row;
        }
    }

    /// The tree as JSON, children nested under `subnets`.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        to_json(&self.tree.to_network(self.tree.root()), true)
    }

    pub fn tree(&self) -> &SubnetTree {
        &self.tree
    }

    pub fn rows(&self) -> &[NodeId] {
        &self.rows
    }

    /// CIDRs of the current leaves, in row order.
    pub fn row_cidrs(&self) -> Vec<Cidr> {
        self.rows.iter().map(|&id| self.tree[id].cidr()).collect()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.rows.get(self.cursor).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn initial_prefix(&self) -> u8 {
        self.initial_prefix
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn vertical_scroll(&self) -> usize {
        self.vertical_scroll
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn show_full_help(&self) -> bool {
        self.show_full_help
    }

    /// Whether the JSON export should be printed on exit.
    pub fn export_requested(&self) -> bool {
        self.export_requested
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn viewport_height(&self) -> usize {
        viewport_height(usize::from(self.height))
    }

    pub fn has_splits(&self) -> bool {
        self.tree[self.tree.root()].is_split()
    }

    /// Deepest prefix among the leaves.
    pub fn max_bits(&self) -> u8 {
        self.rows
            .iter()
            .map(|&id| self.tree[id].mask_bits())
            .max()
            .unwrap_or(self.initial_prefix)
            .max(self.initial_prefix)
    }

    /// Number of split columns, one per prefix from the root to the deepest
    /// leaf. Zero until something is split.
    pub fn split_levels(&self) -> usize {
        if self.has_splits() {
            usize::from(self.max_bits() - self.initial_prefix) + 1
        } else {
            0
        }
    }
}
