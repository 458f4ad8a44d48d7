//! Task Card Component
//!
//! A single draggable task row with a delete control. Entering another task
//! while dragging fires the live reorder, so the card under the cursor gives
//! immediate feedback.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_delete_task, store_drag_over_task, use_app_store};

use kanban_dnd::*;

#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;
    let content = task.content.clone();

    let on_mousedown = make_on_mousedown(dnd, DragEntity::Task(id));
    let on_enter_target = make_on_mouseenter(dnd, DropTarget::Task(id));

    // Continuous reorder: a task dragged over this one adopts this task's
    // column and takes this task's index in the flat sequence
    let on_mouseenter = move |ev: web_sys::MouseEvent| {
        on_enter_target(ev);
        if let Some(DragEntity::Task(active)) = dnd.dragging_read.get_untracked() {
            if active != id {
                store_drag_over_task(&store, active, id);
            }
        }
    };

    let is_dragging = move || dnd.dragging_read.get() == Some(DragEntity::Task(id));
    let task_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=task_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
        >
            <span class="task-content">{content}</span>
            <button
                class="delete-task-btn"
                on:click=move |_| store_delete_task(&store, id)
            >"×"</button>
        </div>
    }
}
