//! Display primitives for CLI output.

pub mod table;

pub use table::{field_table, render_fields};
