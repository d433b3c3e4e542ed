//! Selection predicates and sort keys
//!
//! Filters restrict which rows a query/update/delete affects; an order
//! picks the column and direction result rows are sorted by. Both are
//! typed rather than string selections, so a malformed predicate is
//! unrepresentable.

use std::cmp::Ordering;

use crate::schema::{Column, Gender};
use crate::types::{ContactId, ContactRow};

/// A selection predicate restricting which rows an operation affects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every row
    All,
    /// The row with exactly this identifier
    IdEq(ContactId),
    /// Rows whose name equals the given text
    NameEq(String),
    /// Rows with the given gender
    GenderEq(Gender),
}

impl Filter {
    /// True if the row satisfies this predicate
    pub fn matches(&self, row: &ContactRow) -> bool {
        match self {
            Filter::All => true,
            Filter::IdEq(id) => row.id == *id,
            Filter::NameEq(name) => row.name == *name,
            Filter::GenderEq(gender) => row.gender == *gender,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// Sort key for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Column to sort by
    pub column: Column,
    /// Sort direction
    pub direction: Direction,
}

impl Order {
    /// Ascending order on the given column
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Ascending,
        }
    }

    /// Descending order on the given column
    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Descending,
        }
    }

    /// Compare two rows under this order
    ///
    /// Absent optional values sort before present ones.
    pub fn compare(&self, a: &ContactRow, b: &ContactRow) -> Ordering {
        let ordering = match self.column {
            Column::Id => a.id.cmp(&b.id),
            Column::Name => a.name.cmp(&b.name),
            Column::Email => a.email.cmp(&b.email),
            Column::Gender => a.gender.ordinal().cmp(&b.gender.ordinal()),
            Column::Mobile => a.mobile.cmp(&b.mobile),
        };
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}
