//! Row Edit State
//!
//! Per-row inline edit state machine: `Display` -> `Editing` -> `Display`.
//! Leaving edit mode yields the text the row label should show.

/// Inline edit state of one row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowEdit {
    #[default]
    Display,
    /// Label text captured when editing started
    Editing { label_before: String },
}

impl RowEdit {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowEdit::Editing { .. })
    }

    /// Enter edit mode. Ignored while already editing.
    pub fn begin(&mut self, label: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        *self = RowEdit::Editing {
            label_before: label.to_string(),
        };
        true
    }

    /// Leave edit mode through commit.
    ///
    /// `apply` writes the edit and returns the item's final text, or
    /// `None` when the item no longer exists (label stays as it was).
    /// Returns the label to show, or `None` if not editing.
    pub fn commit<F>(&mut self, apply: F) -> Option<String>
    where
        F: FnOnce() -> Option<String>,
    {
        match std::mem::take(self) {
            RowEdit::Editing { label_before } => Some(apply().unwrap_or(label_before)),
            RowEdit::Display => None,
        }
    }

    /// Leave edit mode discarding the field.
    ///
    /// Restores the label captured at `begin`, not the item's live text.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(self) {
            RowEdit::Editing { label_before } => Some(label_before),
            RowEdit::Display => None,
        }
    }
}
