//! The editor session: one controller owning the live application state.
//!
//! The session holds the current grid document, the undo/redo history, the
//! armed color, and the cached generated output. Event handlers receive the
//! session explicitly; there is no ambient module state. Every accepted
//! mutation synchronously regenerates the output and fires a best-effort
//! persistence write.

use crate::codegen::{self, GeneratedCode};
use crate::history::HistoryStack;
use crate::models::{GridConfig, ItemGeometry, RgbColor};
use crate::shortcuts::{self, Action};
use crate::storage::{self, SavedState};
use crossterm::event::KeyEvent;
use std::path::PathBuf;

/// Live editor state for one editing session.
#[derive(Debug)]
pub struct EditorSession {
    config: GridConfig,
    history: HistoryStack,
    selected_color: RgbColor,
    generated: GeneratedCode,
    state_path: Option<PathBuf>,
}

impl EditorSession {
    /// Creates an in-memory session starting from the default document.
    ///
    /// Nothing is persisted; used for tests and headless generation.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(SavedState::default(), None)
    }

    /// Creates a session backed by the given storage slot.
    ///
    /// Rehydrates the last saved state; a missing or malformed slot falls
    /// back to the default document (the failure is logged, not surfaced).
    /// Subsequent mutations write back to the slot fire-and-forget.
    #[must_use]
    pub fn restore(state_path: PathBuf) -> Self {
        let state = storage::load_or_default(&state_path);
        Self::from_state(state, Some(state_path))
    }

    fn from_state(state: SavedState, state_path: Option<PathBuf>) -> Self {
        let generated = codegen::generate(&state.grid_config);
        Self {
            config: state.grid_config,
            history: HistoryStack::new(),
            selected_color: state.selected_color,
            generated,
            state_path,
        }
    }

    /// The current grid document.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The cached generated output for the current document.
    #[must_use]
    pub fn generated(&self) -> &GeneratedCode {
        &self.generated
    }

    /// The color armed for the next paint action.
    #[must_use]
    pub fn selected_color(&self) -> RgbColor {
        self.selected_color
    }

    /// True if at least one edit can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if at least one undone edit can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies a full new arrangement reported by the drag/resize widget.
    ///
    /// This is the only mutation besides [`reset`](Self::reset) that records
    /// history: the pre-mutation document is snapshotted and the redo branch
    /// pruned.
    pub fn apply_layout(&mut self, layout: &[ItemGeometry]) {
        self.history.record(self.config.clone());
        self.config.apply_layout(layout);
        self.sync();
    }

    /// Adds a new 1x1 tile painted with the armed color.
    ///
    /// Returns the new tile's id. Not recorded in history; the follow-up
    /// layout event from the widget is the undoable step.
    pub fn add_item(&mut self) -> String {
        let id = self.config.add_item(self.selected_color);
        self.sync();
        id
    }

    /// Sets the column count from control-panel text input.
    pub fn set_columns_input(&mut self, text: &str) {
        self.config.set_columns_input(text);
        self.sync();
    }

    /// Sets the gap from control-panel text input.
    pub fn set_gap_input(&mut self, text: &str) {
        self.config.set_gap_input(text);
        self.sync();
    }

    /// Sets the corner radius from control-panel text input.
    pub fn set_border_radius_input(&mut self, text: &str) {
        self.config.set_border_radius_input(text);
        self.sync();
    }

    /// Arms a color for the next paint or add action.
    pub fn select_color(&mut self, color: RgbColor) {
        self.selected_color = color;
        self.persist();
    }

    /// Paints one tile directly (swatch dropped onto it).
    pub fn drop_color_on_item(&mut self, id: &str, color: RgbColor) {
        self.config.set_item_color(id, color);
        self.sync();
    }

    /// Steps back one recorded edit. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.config) {
            Some(previous) => {
                self.config = previous;
                self.sync();
                true
            }
            None => false,
        }
    }

    /// Steps forward one undone edit. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.config) {
            Some(next) => {
                self.config = next;
                self.sync();
                true
            }
            None => false,
        }
    }

    /// Restores the default document. The reset itself is undoable.
    pub fn reset(&mut self) {
        self.history.record(self.config.clone());
        self.config.reset_to_default();
        self.sync();
    }

    /// Dispatches a global keyboard shortcut.
    ///
    /// Returns true if the event mapped to an action and changed anything.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match shortcuts::action_for_key(key) {
            Some(Action::Undo) => self.undo(),
            Some(Action::Redo) => self.redo(),
            None => false,
        }
    }

    /// The persistable snapshot of this session.
    #[must_use]
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            grid_config: self.config.clone(),
            selected_color: self.selected_color,
        }
    }

    /// Recomputes the generated output and fires the persistence write.
    fn sync(&mut self) {
        self.generated = codegen::generate(&self.config);
        self.persist();
    }

    /// Best-effort write to the storage slot. Failures are logged, never
    /// surfaced; the editing session continues regardless.
    fn persist(&self) {
        if let Some(path) = &self.state_path {
            if let Err(e) = storage::save(path, &self.saved_state()) {
                tracing::warn!("Failed to persist editor state: {e:#}");
            }
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
