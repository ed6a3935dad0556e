//! Reusable admin panel components.

pub mod data_table;
