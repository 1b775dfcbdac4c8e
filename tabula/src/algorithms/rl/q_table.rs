#[cfg(test)]
#[path = "../../../tests/unit/algorithms/rl/q_table_test.rs"]
mod q_table_test;

use crate::utils::{Float, GenericResult, compare_floats};

/// A dense square table of action values where both states and actions are positions in
/// `0..size`. The table only grows: values of existing cells are kept, new cells start at zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QTable {
    size: usize,
    values: Vec<Float>,
}

impl QTable {
    /// Creates a new zero-filled table of `size x size` cells.
    pub fn new(size: usize) -> Self {
        Self { size, values: vec![0.; size * size] }
    }

    /// Creates a table from its rows. Fails if rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let size = rows.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(format!("table is not square: row {idx} has {} values, expected {size}", row.len()).into());
        }

        Ok(Self { size, values: rows.into_iter().flatten().collect() })
    }

    /// Returns table rows.
    pub fn to_rows(&self) -> Vec<Vec<Float>> {
        self.values.chunks(self.size.max(1)).take(self.size).map(|row| row.to_vec()).collect()
    }

    /// Returns amount of states (and actions) the table can hold.
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Checks whether both state and action are within table capacity.
    pub fn contains(&self, state: usize, action: usize) -> bool {
        state < self.size && action < self.size
    }

    /// Returns value of the action taken in the given state or `None` if the cell is outside
    /// of the table.
    pub fn get(&self, state: usize, action: usize) -> Option<Float> {
        if self.contains(state, action) { self.values.get(state * self.size + action).copied() } else { None }
    }

    /// Sets value of the action taken in the given state. The cell must be within capacity.
    pub fn set(&mut self, state: usize, action: usize, value: Float) {
        assert!(self.contains(state, action), "cell ({state}, {action}) is outside of table with size {}", self.size);

        self.values[state * self.size + action] = value;
    }

    /// Returns max value of the state row considering only the first `limit` actions.
    pub fn max_value(&self, state: usize, limit: usize) -> Option<Float> {
        if state >= self.size {
            return None;
        }

        let start = state * self.size;
        let end = start + limit.min(self.size);

        self.values[start..end].iter().copied().max_by(|a, b| compare_floats(*a, *b))
    }

    /// Grows the table to hold at least `size` states. A new buffer is allocated, existing rows
    /// are copied and new cells are zero-filled. Returns true if the table has grown.
    pub fn ensure_capacity(&mut self, size: usize) -> bool {
        if size <= self.size {
            return false;
        }

        let mut values = vec![0.; size * size];
        self.values.chunks(self.size.max(1)).take(self.size).enumerate().for_each(|(state, row)| {
            values[state * size..state * size + self.size].copy_from_slice(row);
        });

        self.values = values;
        self.size = size;

        true
    }
}
