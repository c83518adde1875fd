//! Reflected table metadata and the per-dialect table registry.
//!
//! The ORM core owns [`Table`] values until it registers them. Registration
//! hands the table to the dialect's hook by `&mut` for the duration of the
//! call, then freezes it behind an `Arc` in [`Tables`].

mod table;
mod tables;

pub use table::{Field, Table};
pub use tables::Tables;
