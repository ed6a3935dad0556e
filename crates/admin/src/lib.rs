//! Glyke Admin library.
//!
//! Client-side state for the staff panel, kept free of any markup so it can
//! be unit tested:
//!
//! - [`staging`] - Product image uploads staged on the add/edit form
//! - [`components`] - Option objects for the data-grid widget

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod staging;

pub use components::data_table::{DataTableConfig, GridError};
pub use staging::{FileDescriptor, ImageStaging};
