//! Leptos Keyboard Navigation Utilities
//!
//! Document-level keydown binding plus wrap-around focus movement
//! across the rows of a rendered list.

use leptos::logging::warn;
use wasm_bindgen::JsCast;

/// Direction of a focus move between rows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Compute the row index a focus move lands on.
///
/// `current` is the index of the row holding focus, `None` when focus is
/// outside the list (behaves like index -1). Moves wrap in both
/// directions. Returns `None` for an empty list.
pub fn wrap_index(current: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (direction, current) {
        (Direction::Previous, Some(i)) if i > 0 && i < len => i - 1,
        (Direction::Previous, _) => len - 1,
        (Direction::Next, Some(i)) if i + 1 < len => i + 1,
        (Direction::Next, _) => 0,
    };
    Some(next)
}

/// Describes where the rows of a list live in the DOM
#[derive(Clone, Copy, Debug)]
pub struct RowNav {
    /// Element id of the list container
    pub list_id: &'static str,
    /// Selector matching one row
    pub row_selector: &'static str,
    /// Selector for the control inside a row that receives focus
    pub focus_selector: &'static str,
}

impl RowNav {
    /// Move focus to the previous/next row, wrapping around.
    ///
    /// Returns `false` when the list has no rows (nothing happened).
    pub fn move_focus(&self, direction: Direction) -> bool {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let rows = self.rows(&doc);
        let current = doc
            .active_element()
            .and_then(|el| el.closest(self.row_selector).ok().flatten())
            .and_then(|row| rows.iter().position(|r| *r == row));

        let Some(idx) = wrap_index(current, rows.len(), direction) else {
            return false;
        };

        let target = rows[idx]
            .query_selector(self.focus_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = target {
            if el.focus().is_err() {
                warn!("[KEYNAV] Failed to focus row {}", idx);
            }
        }
        true
    }

    fn rows(&self, doc: &web_sys::Document) -> Vec<web_sys::Element> {
        let Some(list) = doc.get_element_by_id(self.list_id) else {
            return Vec::new();
        };
        let Ok(nodes) = list.query_selector_all(self.row_selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }
}

/// Id of the element that currently has focus, if any
pub fn active_element_id() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.active_element())
        .map(|el| el.id())
}

/// Bind a keydown handler on `document`.
///
/// The listener lives for the rest of the page.
pub fn bind_global_keydown<F>(on_keydown: F)
where
    F: Fn(web_sys::KeyboardEvent) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        on_keydown(ev);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if doc
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("[KEYNAV] Failed to bind keydown listener");
            }
        }
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_noop() {
        assert_eq!(wrap_index(None, 0, Direction::Next), None);
        assert_eq!(wrap_index(Some(0), 0, Direction::Previous), None);
    }

    #[test]
    fn test_unfocused_start() {
        // No focused row behaves like index -1
        assert_eq!(wrap_index(None, 3, Direction::Next), Some(0));
        assert_eq!(wrap_index(None, 3, Direction::Previous), Some(2));
    }

    #[test]
    fn test_wraps_both_ways() {
        assert_eq!(wrap_index(Some(2), 3, Direction::Next), Some(0));
        assert_eq!(wrap_index(Some(0), 3, Direction::Previous), Some(2));
    }

    #[test]
    fn test_steps_within_list() {
        assert_eq!(wrap_index(Some(0), 3, Direction::Next), Some(1));
        assert_eq!(wrap_index(Some(2), 3, Direction::Previous), Some(1));
        assert_eq!(wrap_index(Some(0), 1, Direction::Next), Some(0));
        assert_eq!(wrap_index(Some(0), 1, Direction::Previous), Some(0));
    }
}
