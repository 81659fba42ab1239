//! Application Context
//!
//! `TodoController` is created once at startup and provided via the
//! Leptos Context API. It runs session flows and redraws the list.

use leptos::html::Input;
use leptos::logging::log;
use leptos::prelude::*;

use crate::config::STORAGE_KEY;
use crate::models::{Filter, TodoItem};
use crate::session::TodoSession;
use crate::state::{self, ViewState, ViewStore};
use crate::store::LocalStorageSlot;

type Session = TodoSession<LocalStorageSlot>;

/// App-wide controller provided via context
#[derive(Clone, Copy)]
pub struct TodoController {
    session: StoredValue<Session>,
    view: ViewStore,
    /// Current text of the add-input
    pub draft: RwSignal<String>,
    /// The add-input element, for refocusing after an add
    pub input_ref: NodeRef<Input>,
}

impl TodoController {
    /// Load persisted todos and render them under the `all` filter
    pub fn new() -> Self {
        let session = Session::start(LocalStorageSlot::new(STORAGE_KEY));
        let view = ViewStore::new(ViewState {
            rows: session.rows(),
            filter: session.current_filter(),
        });
        Self {
            session: StoredValue::new(session),
            view,
            draft: RwSignal::new(String::new()),
            input_ref: NodeRef::new(),
        }
    }

    /// Tracked: rows of the last render
    pub fn rows(&self) -> Vec<TodoItem> {
        state::store_rows(&self.view)
    }

    /// Tracked: active filter
    pub fn filter(&self) -> Filter {
        state::store_filter(&self.view)
    }

    /// Full redraw under the current filter
    pub fn render(&self) {
        let rows = self.session.with_value(|s| s.rows());
        state::store_set_rows(&self.view, rows);
    }

    /// Run a flow; redraw if it changed the list
    fn mutate<F>(&self, flow: F) -> bool
    where
        F: FnOnce(&mut Session) -> bool,
    {
        let changed = self.session.try_update_value(flow).unwrap_or(false);
        if changed {
            self.render();
        }
        changed
    }

    pub fn set_filter(&self, filter: Filter) {
        log!("[TODO] Filter -> {}", filter.as_str());
        self.session.update_value(|s| s.set_filter(filter));
        state::store_set_filter(&self.view, filter);
        self.render();
    }

    /// Add from the input's current text, then clear and refocus it
    pub fn add_from_input(&self) {
        let raw = self.draft.get_untracked();
        if !self.mutate(|s| s.add_from_input(&raw)) {
            return;
        }
        self.draft.set(String::new());
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    pub fn toggle(&self, id: &str) {
        self.mutate(|s| s.toggle(id));
    }

    pub fn delete(&self, id: &str) {
        self.mutate(|s| s.delete(id));
    }

    pub fn clear_completed(&self) {
        self.mutate(|s| s.clear_completed());
    }

    /// Live stored text of an item
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.session.with_value(|s| s.text_of(id))
    }

    /// Commit an inline edit without redrawing the list.
    ///
    /// Returns the text the row label should show.
    pub fn commit_edit(&self, id: &str, raw: &str) -> Option<String> {
        self.session.try_update_value(|s| s.commit_edit(id, raw)).flatten()
    }
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}
