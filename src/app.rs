//! Kanban Board App
//!
//! Main application component: owns the store and the drag session signals,
//! dispatches drag-end drops, and renders the column row.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ColumnContainer, DragPreview};
use crate::store::{store_add_column, store_drag_end, AppState, AppStateStoreFields};

use kanban_dnd::*;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Drag session signals shared by every draggable/droppable element
    let dnd = create_dnd_signals();

    // Terminal drop dispatch. Task/task ordering already happened live on
    // drag-over; a gesture released outside any target is an accepted no-op.
    bind_global_mouseup(dnd, move |dragged, target| {
        store_drag_end(&store, dragged, target);
    });

    let columns = move || store.board().read().columns();

    view! {
        <div class="app-layout">
            <div class="board">
                <For
                    each=columns
                    key=|column| (column.id, column.title.clone())
                    children=move |column| {
                        view! { <ColumnContainer column=column dnd=dnd /> }
                    }
                />

                <button
                    class="add-column-btn"
                    on:click=move |_| store_add_column(&store)
                >"+ Add Column"</button>
            </div>

            // Floating ghost during an active gesture
            <DragPreview dnd=dnd />
        </div>
    }
}
