//! Range-signal encoding.

mod range_table;

#[cfg(test)]
mod range_table_tests;

pub use range_table::RangeTable;
