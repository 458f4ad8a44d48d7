//! Board State and Reorder Engine
//!
//! Owns the canonical column and task sequences and computes the new board
//! state for drag-over / drag-end events. Columns and tasks live in id-indexed
//! maps alongside explicit order lists; the per-column task view is a filter
//! over one flat ordered list.

use std::collections::HashMap;

use kanban_dnd::{DragEntity, DropTarget};
use thiserror::Error;

use crate::models::{Column, Id, Task};

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur in board operations.
/// None are fatal; the store layer resolves all of them as logged no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("column not found: {id}")]
    ColumnNotFound { id: Id },

    #[error("task not found: {id}")]
    TaskNotFound { id: Id },

    /// Drag gesture ended outside any valid drop target
    #[error("drag ended with no drop target")]
    InvalidDrop,
}

/// Move the element at `from` to `to`, shifting intervening elements by one.
/// Out-of-range indices leave the sequence untouched.
pub fn array_move<T>(order: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= order.len() || to >= order.len() {
        return;
    }
    let moved = order.remove(from);
    order.insert(to, moved);
}

/// The board aggregate: ordered columns plus one flat ordered task list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: HashMap<Id, Column>,
    column_order: Vec<Id>,
    tasks: HashMap<Id, Task>,
    task_order: Vec<Id>,
    next_id: Id,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }

    // ========================
    // Mutation Operations
    // ========================

    /// Append a new column titled "Column N" (N = current count + 1)
    pub fn add_column(&mut self) -> Id {
        let id = self.alloc_id();
        let column = Column {
            id,
            title: format!("Column {}", self.column_order.len() + 1),
        };
        self.columns.insert(id, column);
        self.column_order.push(id);
        id
    }

    /// Remove a column and every task that belongs to it
    pub fn delete_column(&mut self, id: Id) -> BoardResult<()> {
        if self.columns.remove(&id).is_none() {
            return Err(BoardError::ColumnNotFound { id });
        }
        self.column_order.retain(|cid| *cid != id);
        // Cascade: orphaned tasks would be invisible in every column view
        self.task_order
            .retain(|tid| self.tasks.get(tid).map(|t| t.column_id) != Some(id));
        self.tasks.retain(|_, task| task.column_id != id);
        Ok(())
    }

    /// Replace a column title; empty titles are allowed
    pub fn update_column_title(&mut self, id: Id, title: String) -> BoardResult<()> {
        let column = self
            .columns
            .get_mut(&id)
            .ok_or(BoardError::ColumnNotFound { id })?;
        column.title = title;
        Ok(())
    }

    /// Append a new task to a column, numbered by the global task count
    pub fn add_task(&mut self, column_id: Id) -> BoardResult<Id> {
        if !self.columns.contains_key(&column_id) {
            return Err(BoardError::ColumnNotFound { id: column_id });
        }
        let id = self.alloc_id();
        let task = Task {
            id,
            column_id,
            content: format!("Task {}", self.task_order.len() + 1),
        };
        self.tasks.insert(id, task);
        self.task_order.push(id);
        Ok(id)
    }

    pub fn delete_task(&mut self, id: Id) -> BoardResult<()> {
        if self.tasks.remove(&id).is_none() {
            return Err(BoardError::TaskNotFound { id });
        }
        self.task_order.retain(|tid| *tid != id);
        Ok(())
    }

    // ========================
    // Reorder Engine
    // ========================

    /// Continuous reorder while a task is dragged over another task.
    ///
    /// The active task adopts the over task's column (so crossing into
    /// another column migrates it), then moves to the over task's index in
    /// the flat sequence. This is the only implementation of the task splice;
    /// drag-end over a task is deliberately a no-op.
    pub fn drag_over_task(&mut self, active: Id, over: Id) -> BoardResult<()> {
        if active == over {
            return Ok(());
        }
        let active_idx = self.task_index(active)?;
        let over_idx = self.task_index(over)?;

        let over_column = self
            .tasks
            .get(&over)
            .ok_or(BoardError::TaskNotFound { id: over })?
            .column_id;
        if let Some(task) = self.tasks.get_mut(&active) {
            task.column_id = over_column;
        }
        array_move(&mut self.task_order, active_idx, over_idx);
        Ok(())
    }

    /// Terminal action for a drag gesture.
    ///
    /// Column over column: array-move in the column sequence. Task over
    /// column: membership change only, flat position untouched. Task over
    /// task: already handled continuously by [`Board::drag_over_task`].
    /// No target: `InvalidDrop` - mutations applied during drag-over persist.
    pub fn drag_end(&mut self, active: DragEntity, over: Option<DropTarget>) -> BoardResult<()> {
        let Some(over) = over else {
            return Err(BoardError::InvalidDrop);
        };
        match (active, over) {
            (DragEntity::Column(active_id), DropTarget::Column(over_id)) => {
                self.move_column(active_id, over_id)
            }
            (DragEntity::Task(task_id), DropTarget::Column(column_id)) => {
                self.reassign_task(task_id, column_id)
            }
            // Task/task reordering fires on drag-over; repeating the splice
            // here would double-apply it and drift the indices
            (DragEntity::Task(_), DropTarget::Task(_)) => Ok(()),
            (DragEntity::Column(_), DropTarget::Task(_)) => Ok(()),
        }
    }

    /// Move the active column to the over column's index
    fn move_column(&mut self, active: Id, over: Id) -> BoardResult<()> {
        if active == over {
            return Ok(());
        }
        let active_idx = self.column_index(active)?;
        let over_idx = self.column_index(over)?;
        array_move(&mut self.column_order, active_idx, over_idx);
        Ok(())
    }

    /// Change a task's column membership without touching its flat position
    fn reassign_task(&mut self, task_id: Id, column_id: Id) -> BoardResult<()> {
        if !self.columns.contains_key(&column_id) {
            return Err(BoardError::ColumnNotFound { id: column_id });
        }
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or(BoardError::TaskNotFound { id: task_id })?;
        task.column_id = column_id;
        Ok(())
    }

    fn column_index(&self, id: Id) -> BoardResult<usize> {
        self.column_order
            .iter()
            .position(|cid| *cid == id)
            .ok_or(BoardError::ColumnNotFound { id })
    }

    fn task_index(&self, id: Id) -> BoardResult<usize> {
        self.task_order
            .iter()
            .position(|tid| *tid == id)
            .ok_or(BoardError::TaskNotFound { id })
    }

    // ========================
    // Derived Views
    // ========================

    /// Columns in display order
    pub fn columns(&self) -> Vec<Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
            .cloned()
            .collect()
    }

    /// Tasks belonging to a column, preserving flat-sequence order
    pub fn tasks_in(&self, column_id: Id) -> Vec<Task> {
        self.task_order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .filter(|task| task.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.get(&id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    pub fn task_count(&self) -> usize {
        self.task_order.len()
    }

    /// Task ids in flat-sequence order
    pub fn task_order(&self) -> &[Id] {
        &self.task_order
    }

    /// Column ids in display order
    pub fn column_order(&self) -> &[Id] {
        &self.column_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with columns [A, B] and tasks [{t1, A}, {t2, B}]
    fn two_column_board() -> (Board, Id, Id, Id, Id) {
        let mut board = Board::new();
        let col_a = board.add_column();
        let col_b = board.add_column();
        let t1 = board.add_task(col_a).unwrap();
        let t2 = board.add_task(col_b).unwrap();
        (board, col_a, col_b, t1, t2)
    }

    #[test]
    fn test_array_move_shifts_intervening_elements() {
        let mut order = vec![1, 2, 3, 4, 5];
        array_move(&mut order, 0, 3);
        assert_eq!(order, vec![2, 3, 4, 1, 5]);

        let mut order = vec![1, 2, 3, 4, 5];
        array_move(&mut order, 4, 1);
        assert_eq!(order, vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_array_move_is_self_invertible() {
        let original = vec![10, 20, 30, 40, 50];
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut order = original.clone();
                array_move(&mut order, from, to);
                array_move(&mut order, to, from);
                assert_eq!(order, original, "move {}->{} then back", from, to);
            }
        }
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let mut order = vec![1, 2, 3];
        array_move(&mut order, 5, 1);
        array_move(&mut order, 1, 5);
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_column_numbers_titles() {
        let mut board = Board::new();
        let a = board.add_column();
        let b = board.add_column();
        assert_eq!(board.column(a).unwrap().title, "Column 1");
        assert_eq!(board.column(b).unwrap().title, "Column 2");
        assert_eq!(board.column_order(), &[a, b]);
    }

    #[test]
    fn test_add_task_uses_global_counter() {
        // "Task 3" even though column B holds only one of the existing tasks
        let (mut board, _col_a, col_b, _t1, _t2) = two_column_board();
        let t3 = board.add_task(col_b).unwrap();
        assert_eq!(board.task(t3).unwrap().content, "Task 3");
    }

    #[test]
    fn test_add_task_to_missing_column_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.add_task(99),
            Err(BoardError::ColumnNotFound { id: 99 })
        );
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_update_column_title_allows_empty() {
        let mut board = Board::new();
        let a = board.add_column();
        board.update_column_title(a, String::new()).unwrap();
        assert_eq!(board.column(a).unwrap().title, "");
        assert_eq!(
            board.update_column_title(99, "x".into()),
            Err(BoardError::ColumnNotFound { id: 99 })
        );
    }

    #[test]
    fn test_delete_column_cascades_to_tasks() {
        let (mut board, col_a, col_b, t1, t2) = two_column_board();
        board.delete_column(col_a).unwrap();

        assert_eq!(board.column_count(), 1);
        assert!(board.task(t1).is_none(), "t1 cascades with its column");
        assert_eq!(board.task_order(), &[t2]);
        assert_eq!(board.tasks_in(col_b).len(), 1);
    }

    #[test]
    fn test_delete_task() {
        let (mut board, col_a, _col_b, t1, _t2) = two_column_board();
        board.delete_task(t1).unwrap();
        assert_eq!(board.task_count(), 1);
        assert!(board.tasks_in(col_a).is_empty());
        assert_eq!(board.delete_task(t1), Err(BoardError::TaskNotFound { id: t1 }));
    }

    #[test]
    fn test_drag_over_task_migrates_column_and_reorders() {
        let (mut board, _col_a, col_b, t1, t2) = two_column_board();
        board.drag_over_task(t1, t2).unwrap();

        assert_eq!(board.task(t1).unwrap().column_id, col_b);
        assert_eq!(board.task_order(), &[t2, t1]);
    }

    #[test]
    fn test_drag_over_task_preserves_ids_and_count() {
        let (mut board, _col_a, _col_b, t1, t2) = two_column_board();
        let before: std::collections::HashSet<Id> =
            board.task_order().iter().copied().collect();
        board.drag_over_task(t1, t2).unwrap();
        let after: std::collections::HashSet<Id> =
            board.task_order().iter().copied().collect();

        assert_eq!(board.task_count(), 2);
        assert_eq!(before, after);
    }

    #[test]
    fn test_drag_over_task_on_self_is_noop() {
        let (mut board, _col_a, _col_b, t1, _t2) = two_column_board();
        let before = board.clone();
        board.drag_over_task(t1, t1).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_drag_end_moves_to_over_index() {
        let mut board = Board::new();
        let a = board.add_column();
        let b = board.add_column();
        let c = board.add_column();

        board
            .drag_end(DragEntity::Column(a), Some(DropTarget::Column(c)))
            .unwrap();
        assert_eq!(board.column_order(), &[b, c, a]);
    }

    #[test]
    fn test_column_drag_end_on_self_is_noop() {
        let (mut board, col_a, _col_b, _t1, _t2) = two_column_board();
        let before = board.clone();
        board
            .drag_end(DragEntity::Column(col_a), Some(DropTarget::Column(col_a)))
            .unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_task_dropped_on_column_changes_membership_only() {
        let (mut board, _col_a, col_b, t1, t2) = two_column_board();
        board
            .drag_end(DragEntity::Task(t1), Some(DropTarget::Column(col_b)))
            .unwrap();

        assert_eq!(board.task(t1).unwrap().column_id, col_b);
        // Flat position unchanged
        assert_eq!(board.task_order(), &[t1, t2]);
    }

    #[test]
    fn test_drag_end_over_task_does_not_reapply_splice() {
        let (mut board, _col_a, _col_b, t1, t2) = two_column_board();
        board.drag_over_task(t1, t2).unwrap();
        let after_over = board.clone();

        board
            .drag_end(DragEntity::Task(t1), Some(DropTarget::Task(t2)))
            .unwrap();
        assert_eq!(board, after_over);
    }

    #[test]
    fn test_abandoned_drag_keeps_drag_over_mutations() {
        // Ending the gesture outside any target is a no-op, not a rollback:
        // the live reorder applied during drag-over sticks.
        let (mut board, _col_a, col_b, t1, _t2) = two_column_board();
        let t2 = board.task_order()[1];
        board.drag_over_task(t1, t2).unwrap();
        let after_over = board.clone();

        let result = board.drag_end(DragEntity::Task(t1), None);
        assert_eq!(result, Err(BoardError::InvalidDrop));
        assert_eq!(board, after_over);
        assert_eq!(board.task(t1).unwrap().column_id, col_b);
    }

    #[test]
    fn test_drag_end_with_missing_ids_leaves_board_unchanged() {
        let (mut board, _col_a, _col_b, _t1, _t2) = two_column_board();
        let before = board.clone();

        assert!(board
            .drag_end(DragEntity::Column(77), Some(DropTarget::Column(78)))
            .is_err());
        assert!(board
            .drag_end(DragEntity::Task(77), Some(DropTarget::Column(78)))
            .is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_tasks_in_preserves_relative_order() {
        let mut board = Board::new();
        let a = board.add_column();
        let b = board.add_column();
        let t1 = board.add_task(a).unwrap();
        let _t2 = board.add_task(b).unwrap();
        let t3 = board.add_task(a).unwrap();

        let in_a: Vec<Id> = board.tasks_in(a).iter().map(|t| t.id).collect();
        assert_eq!(in_a, vec![t1, t3]);
    }
}
