//! UI Components

mod column_container;
mod drag_preview;
mod task_card;

pub use column_container::ColumnContainer;
pub use drag_preview::DragPreview;
pub use task_card::TaskCard;
