//! # Schema Contract
//!
//! A graph is parameterized by a [`Schema`]: the vertex user-id type, the
//! ordered list of vertex property types, the edge user-id type, and the
//! ordered list of edge property types.
//!
//! Property lists are tuples. `(i64, String)` declares two slots, slot 0 of
//! type `i64` and slot 1 of type `String`; `()` declares none. Each tuple
//! type knows its column layout (one `Vec` per slot) through
//! [`PropertyRow`], and each slot is addressed at compile time through
//! [`Slot<I>`](Slot).
//!
//! ## Well-Formedness
//!
//! The bounds below are the schema check. Id types must be comparable and
//! every property type must be `Default + Clone`; a schema that violates
//! either does not compile, so no storage is ever allocated for it.
//!
//! ```
//! use colgraph_core::Schema;
//!
//! struct Social;
//!
//! impl Schema for Social {
//!     type VertexId = String;
//!     type VertexProps = (u32,);
//!     type EdgeId = u64;
//!     type EdgeProps = (i64, String);
//! }
//! ```

use std::fmt;

// =============================================================================
// SCHEMA TRAIT
// =============================================================================

/// Compile-time description of a graph's identity and property types.
pub trait Schema {
    /// User-supplied vertex identifier.
    type VertexId: PartialEq + fmt::Debug;
    /// Ordered vertex property types, as a tuple.
    type VertexProps: PropertyRow;
    /// User-supplied edge identifier.
    type EdgeId: PartialEq + fmt::Debug;
    /// Ordered edge property types, as a tuple.
    type EdgeProps: PropertyRow;
}

// =============================================================================
// PROPERTY ROWS
// =============================================================================

/// A fixed-arity, heterogeneous row of property values.
///
/// Implemented for `()` and for tuples of up to twelve `Default + Clone`
/// types. `Columns` is the matching tuple of `Vec`s.
pub trait PropertyRow: Sized + Clone + Default {
    /// One growable column per slot.
    type Columns: Default;

    /// Number of slots.
    const ARITY: usize;

    /// Append every element of the row to its column.
    fn push_into(self, columns: &mut Self::Columns);

    /// Clone the values at `row` out of every column.
    fn read_from(columns: &Self::Columns, row: usize) -> Self;

    /// Overwrite the values at `row` in every column.
    fn write_into(self, columns: &mut Self::Columns, row: usize);

    /// Reserve room for `additional` rows in every column.
    fn reserve(columns: &mut Self::Columns, additional: usize);

    /// Length of each column, in slot order.
    fn column_lens(columns: &Self::Columns) -> Vec<usize>;
}

/// Compile-time access to slot `I` of a property row.
pub trait Slot<const I: usize>: PropertyRow {
    /// Type stored in slot `I`.
    type Value;

    fn column(columns: &Self::Columns) -> &Vec<Self::Value>;

    fn column_mut(columns: &mut Self::Columns) -> &mut Vec<Self::Value>;
}

impl PropertyRow for () {
    type Columns = ();

    const ARITY: usize = 0;

    fn push_into(self, _columns: &mut Self::Columns) {}

    fn read_from(_columns: &Self::Columns, _row: usize) -> Self {}

    fn write_into(self, _columns: &mut Self::Columns, _row: usize) {}

    fn reserve(_columns: &mut Self::Columns, _additional: usize) {}

    fn column_lens(_columns: &Self::Columns) -> Vec<usize> {
        Vec::new()
    }
}

macro_rules! property_row {
    (@slot [$($All:ident),+] $T:ident $idx:tt) => {
        impl<$($All: Clone + Default),+> Slot<$idx> for ($($All,)+) {
            type Value = $T;

            fn column(columns: &Self::Columns) -> &Vec<$T> {
                &columns.$idx
            }

            fn column_mut(columns: &mut Self::Columns) -> &mut Vec<$T> {
                &mut columns.$idx
            }
        }
    };

    (@slots $all:tt $($T:ident $idx:tt),+) => {
        $(property_row!(@slot $all $T $idx);)+
    };

    ($arity:literal; $($T:ident $idx:tt),+) => {
        impl<$($T: Clone + Default),+> PropertyRow for ($($T,)+) {
            type Columns = ($(Vec<$T>,)+);

            const ARITY: usize = $arity;

            fn push_into(self, columns: &mut Self::Columns) {
                $(columns.$idx.push(self.$idx);)+
            }

            fn read_from(columns: &Self::Columns, row: usize) -> Self {
                ($(columns.$idx[row].clone(),)+)
            }

            fn write_into(self, columns: &mut Self::Columns, row: usize) {
                $(columns.$idx[row] = self.$idx;)+
            }

            fn reserve(columns: &mut Self::Columns, additional: usize) {
                $(columns.$idx.reserve(additional);)+
            }

            fn column_lens(columns: &Self::Columns) -> Vec<usize> {
                vec![$(columns.$idx.len()),+]
            }
        }

        property_row!(@slots [$($T),+] $($T $idx),+);
    };
}

property_row!(1; A 0);
property_row!(2; A 0, B 1);
property_row!(3; A 0, B 1, C 2);
property_row!(4; A 0, B 1, C 2, D 3);
property_row!(5; A 0, B 1, C 2, D 3, E 4);
property_row!(6; A 0, B 1, C 2, D 3, E 4, F 5);
property_row!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
property_row!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
property_row!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8);
property_row!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8, K 9);
property_row!(11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8, K 9, L 10);
property_row!(12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8, K 9, L 10, M 11);

// =============================================================================
// TESTS
// =============================================================================
