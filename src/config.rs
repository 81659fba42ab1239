//! App Configuration
//!
//! Compile-time constants. The app has no runtime configuration.

/// localStorage key holding the serialized todo list
pub const STORAGE_KEY: &str = "colorful_todo_items";

/// Length of the random base-36 suffix appended to generated ids
pub const ID_SUFFIX_LEN: usize = 5;

/// DOM id of the add-todo input
pub const NEW_TODO_INPUT_ID: &str = "new-todo";

/// DOM id of the rendered list
pub const TODO_LIST_ID: &str = "todo-list";

/// Selector for one rendered row
pub const TODO_ROW_SELECTOR: &str = ".todo-item";

/// Focus target inside a row, in priority order
pub const TODO_ROW_FOCUS_SELECTOR: &str = "input.toggle, button.edit-btn, button.delete-btn, span.text";
