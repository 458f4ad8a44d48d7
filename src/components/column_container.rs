//! Column Container Component
//!
//! A single column: editable title header, its tasks in flat-sequence order,
//! and add-task / delete-column controls. The header doubles as the drag
//! handle for column reordering.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Column;
use crate::store::{
    store_add_task, store_delete_column, store_update_column_title, use_app_store,
    AppStateStoreFields,
};
use crate::components::TaskCard;

use kanban_dnd::*;

#[component]
pub fn ColumnContainer(column: Column, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let id = column.id;

    // Click-to-edit title state
    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(column.title.clone());

    let commit_title = move || {
        store_update_column_title(&store, id, draft_title.get_untracked());
        set_editing.set(false);
    };

    let on_title_click = move |_| {
        // Suppress the click that ends a drag gesture
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        set_editing.set(true);
    };

    // DnD wiring: header drags the column, body accepts drops onto the column
    let on_mousedown = make_on_mousedown(dnd, DragEntity::Column(id));
    let on_enter_column = make_on_mouseenter(dnd, DropTarget::Column(id));
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_dragging = move || dnd.dragging_read.get() == Some(DragEntity::Column(id));
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Column(cid)) if cid == id)
    };
    let column_class = move || {
        let mut c = String::from("column");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let tasks = move || store.board().read().tasks_in(id);

    view! {
        <div
            class=column_class
            on:mouseenter=on_enter_column
            on:mouseleave=on_mouseleave
        >
            <div class="column-header" on:mousedown=on_mousedown>
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="column-title-input"
                            prop:value=move || draft_title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_draft_title.set(input.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    commit_title();
                                }
                            }
                            on:blur=move |_| commit_title()
                            autofocus=true
                        />
                    }.into_any()
                } else {
                    view! {
                        <span class="column-title" on:click=on_title_click>
                            {move || {
                                store.board().read().column(id)
                                    .map(|col| col.title.clone())
                                    .unwrap_or_default()
                            }}
                        </span>
                    }.into_any()
                }}

                <button
                    class="delete-column-btn"
                    on:click=move |_| store_delete_column(&store, id)
                >"×"</button>
            </div>

            <div class="column-tasks">
                <For
                    each=tasks
                    key=|task| (task.id, task.column_id, task.content.clone())
                    children=move |task| {
                        view! { <TaskCard task=task dnd=dnd /> }
                    }
                />
            </div>

            <button
                class="add-task-btn"
                on:click=move |_| store_add_task(&store, id)
            >"+ Add Task"</button>
        </div>
    }
}
