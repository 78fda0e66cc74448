//! # Columnar Property Store
//!
//! One growable column per declared property slot. Every append touches
//! every column, so all columns always have the same length, which is the
//! number of entities stored.
//!
//! Row access is by dense index and is not bounds-checked beyond what `Vec`
//! indexing does: callers (the graph and its handles) only hold indices that
//! were issued by an append, and nothing is ever removed.

use crate::schema::{PropertyRow, Slot};
use std::fmt;

/// Column-oriented storage for rows of type `R`.
pub struct ColumnStore<R: PropertyRow> {
    columns: R::Columns,
    len: usize,
}

impl<R: PropertyRow> ColumnStore<R> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: R::Columns::default(),
            len: 0,
        }
    }

    /// Create an empty store with room for `capacity` rows in every column.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Self::new();
        store.reserve(capacity);
        store
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of columns.
    #[must_use]
    pub const fn arity(&self) -> usize {
        R::ARITY
    }

    /// Reserve room for `additional` rows in every column.
    pub fn reserve(&mut self, additional: usize) {
        R::reserve(&mut self.columns, additional);
    }

    /// Append a default-constructed value to every column. Returns the new row.
    pub fn append_defaults(&mut self) -> usize {
        self.append_values(R::default())
    }

    /// Append one value per column. Returns the new row.
    pub fn append_values(&mut self, row: R) -> usize {
        row.push_into(&mut self.columns);
        let index = self.len;
        self.len += 1;
        index
    }

    /// Read slot `I` at `row`.
    #[must_use]
    pub fn get<const I: usize>(&self, row: usize) -> &<R as Slot<I>>::Value
    where
        R: Slot<I>,
    {
        &<R as Slot<I>>::column(&self.columns)[row]
    }

    /// Mutable access to slot `I` at `row`.
    pub fn get_mut<const I: usize>(&mut self, row: usize) -> &mut <R as Slot<I>>::Value
    where
        R: Slot<I>,
    {
        &mut <R as Slot<I>>::column_mut(&mut self.columns)[row]
    }

    /// Overwrite slot `I` at `row`.
    pub fn set<const I: usize>(&mut self, row: usize, value: <R as Slot<I>>::Value)
    where
        R: Slot<I>,
    {
        *self.get_mut::<I>(row) = value;
    }

    /// Read every slot at `row`.
    #[must_use]
    pub fn get_all(&self, row: usize) -> R {
        R::read_from(&self.columns, row)
    }

    /// Overwrite every slot at `row`.
    pub fn set_all(&mut self, row: usize, values: R) {
        values.write_into(&mut self.columns, row);
    }

    /// The whole of column `I`, indexed by row.
    #[must_use]
    pub fn column<const I: usize>(&self) -> &[<R as Slot<I>>::Value]
    where
        R: Slot<I>,
    {
        <R as Slot<I>>::column(&self.columns)
    }

    /// Length of each column, in slot order.
    #[must_use]
    pub fn column_lens(&self) -> Vec<usize> {
        R::column_lens(&self.columns)
    }
}

impl<R: PropertyRow> Default for ColumnStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PropertyRow> fmt::Debug for ColumnStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnStore")
            .field("arity", &R::ARITY)
            .field("len", &self.len)
            .finish()
    }
}
