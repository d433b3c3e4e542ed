//! Projected rows
//!
//! A query names the columns it cares about through a [`Projection`];
//! each matching record is surfaced as a [`Row`] holding one [`Value`]
//! per projected column, in projection order.

use crate::schema::{Column, ALL_COLUMNS};
use crate::types::{ContactId, ContactRow};
use crate::value::Value;

/// Column selection for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Every column, in schema order
    All,
    /// An explicit column list, in the given order
    Columns(Vec<Column>),
}

impl Projection {
    /// The projected columns, in output order
    pub fn columns(&self) -> &[Column] {
        match self {
            Projection::All => &ALL_COLUMNS,
            Projection::Columns(columns) => columns,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::All
    }
}

/// One projected row of a query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(Column, Value)>,
}

impl Row {
    /// Project a stored record down to the given columns
    pub fn project(record: &ContactRow, projection: &Projection) -> Self {
        let cells = projection
            .columns()
            .iter()
            .map(|&column| (column, cell_value(record, column)))
            .collect();
        Self { cells }
    }

    /// Value of a projected column; `None` if the column was not projected
    pub fn get(&self, column: Column) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    /// Row identifier, if the id column was projected
    pub fn id(&self) -> Option<ContactId> {
        self.get(Column::Id)?.as_int().map(ContactId::new)
    }

    /// Projected cells in projection order
    pub fn cells(&self) -> impl Iterator<Item = (Column, &Value)> {
        self.cells.iter().map(|(c, v)| (*c, v))
    }

    /// Number of projected columns
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the projection was empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn cell_value(record: &ContactRow, column: Column) -> Value {
    match column {
        Column::Id => Value::Int(record.id.as_i64()),
        Column::Name => Value::Text(record.name.clone()),
        Column::Email => Value::from(record.email.clone()),
        Column::Gender => Value::Int(record.gender.ordinal()),
        Column::Mobile => Value::from(record.mobile.clone()),
    }
}
