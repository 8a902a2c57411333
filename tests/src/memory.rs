use crate::runtime::{Session, Table};

use std::{any::Any, collections::HashMap};

/// A [`Session`] over rows held in memory.
///
/// Every operation is recorded so tests can assert on what the generated
/// procedures asked for.
#[derive(Default)]
pub struct MemorySession {
    tables: HashMap<&'static str, Vec<Box<dyn Any>>>,

    /// Log of all operations executed through this session
    ops_log: Vec<Op>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Select {
        table: &'static str,
        column: &'static str,
        value: i64,
    },
    Delete {
        table: &'static str,
        key: Vec<i64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The row to delete is not stored, usually because it was deleted
    /// already.
    Missing { table: &'static str, key: Vec<i64> },
}

impl MemorySession {
    pub fn new() -> MemorySession {
        MemorySession::default()
    }

    pub fn insert<T: Table>(&mut self, row: T) -> &mut MemorySession {
        self.tables.entry(T::NAME).or_default().push(Box::new(row));
        self
    }

    pub fn rows<T: Table>(&self) -> Vec<T> {
        self.tables
            .get(T::NAME)
            .into_iter()
            .flatten()
            .filter_map(|row| row.downcast_ref::<T>())
            .cloned()
            .collect()
    }

    pub fn count<T: Table>(&self) -> usize {
        self.tables.get(T::NAME).map_or(0, Vec::len)
    }

    pub fn ops_log(&self) -> &[Op] {
        &self.ops_log
    }

    /// Deleted rows, in deletion order.
    pub fn deletes(&self) -> Vec<(&'static str, Vec<i64>)> {
        self.ops_log
            .iter()
            .filter_map(|op| match op {
                Op::Delete { table, key } => Some((*table, key.clone())),
                Op::Select { .. } => None,
            })
            .collect()
    }
}

impl Session for MemorySession {
    type Error = MemoryError;

    fn select<T: Table>(&mut self, column: &'static str, value: i64) -> Result<Vec<T>, MemoryError> {
        self.ops_log.push(Op::Select {
            table: T::NAME,
            column,
            value,
        });

        Ok(self
            .rows::<T>()
            .into_iter()
            .filter(|row| row.int_column(column) == Some(value))
            .collect())
    }

    fn delete<T: Table>(&mut self, row: &T) -> Result<(), MemoryError> {
        let key = primary_key(row);
        let rows = self.tables.entry(T::NAME).or_default();
        let before = rows.len();

        rows.retain(|stored| {
            stored
                .downcast_ref::<T>()
                .map_or(true, |stored| primary_key(stored) != key)
        });

        if rows.len() == before {
            return Err(MemoryError::Missing {
                table: T::NAME,
                key,
            });
        }

        self.ops_log.push(Op::Delete {
            table: T::NAME,
            key,
        });

        Ok(())
    }
}

fn primary_key<T: Table>(row: &T) -> Vec<i64> {
    T::COLUMNS
        .iter()
        .filter(|column| column.primary_key)
        .filter_map(|column| row.int_column(column.name))
        .collect()
}
