//! Drag Preview Component
//!
//! Floating ghost of the dragged entity, following the cursor. Purely
//! presentational: reads the drag session signals, never mutates the board.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

use kanban_dnd::*;

#[component]
pub fn DragPreview(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let preview_style = move || {
        format!(
            "left: {}px; top: {}px;",
            dnd.cursor_x_read.get() + 8,
            dnd.cursor_y_read.get() + 8
        )
    };

    move || match dnd.dragging_read.get() {
        Some(DragEntity::Column(id)) => {
            let board = store.board().read();
            board.column(id).map(|column| {
                let tasks = board.tasks_in(id);
                view! {
                    <div class="drag-preview column" style=preview_style>
                        <div class="column-header">
                            <span class="column-title">{column.title.clone()}</span>
                        </div>
                        <div class="column-tasks">
                            {tasks.into_iter().map(|task| view! {
                                <div class="task-card">
                                    <span class="task-content">{task.content}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }
                .into_any()
            })
        }
        Some(DragEntity::Task(id)) => {
            let board = store.board().read();
            board.task(id).map(|task| {
                view! {
                    <div class="drag-preview task-card" style=preview_style>
                        <span class="task-content">{task.content.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }
        None => None,
    }
}
