//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, BoardError};
use crate::models::Id;
use kanban_dnd::{DragEntity, DropTarget};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The canonical board: column order plus flat task order
    pub board: Board,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Every board error resolves as a logged no-op; nothing here is fatal.

fn log_ignored(op: &str, err: &BoardError) {
    web_sys::console::warn_1(&format!("[BOARD] {} ignored: {}", op, err).into());
}

/// Append a new auto-titled column
pub fn store_add_column(store: &AppStore) {
    store.board().write().add_column();
}

/// Delete a column and its tasks
pub fn store_delete_column(store: &AppStore, id: Id) {
    if let Err(err) = store.board().write().delete_column(id) {
        log_ignored("delete_column", &err);
    }
}

/// Rename a column
pub fn store_update_column_title(store: &AppStore, id: Id, title: String) {
    if let Err(err) = store.board().write().update_column_title(id, title) {
        log_ignored("update_column_title", &err);
    }
}

/// Append a new auto-numbered task to a column
pub fn store_add_task(store: &AppStore, column_id: Id) {
    if let Err(err) = store.board().write().add_task(column_id) {
        log_ignored("add_task", &err);
    }
}

/// Delete a task
pub fn store_delete_task(store: &AppStore, id: Id) {
    if let Err(err) = store.board().write().delete_task(id) {
        log_ignored("delete_task", &err);
    }
}

/// Live task-over-task reorder during the drag gesture
pub fn store_drag_over_task(store: &AppStore, active: Id, over: Id) {
    if let Err(err) = store.board().write().drag_over_task(active, over) {
        log_ignored("drag_over_task", &err);
    }
}

/// Terminal drop action; a missing target is an accepted no-op
pub fn store_drag_end(store: &AppStore, active: DragEntity, over: Option<DropTarget>) {
    web_sys::console::log_1(
        &format!("[DND] drag end: active={:?}, over={:?}", active, over).into(),
    );
    if let Err(err) = store.board().write().drag_end(active, over) {
        log_ignored("drag_end", &err);
    }
}
