//! Core application logic
//!
//! This module contains:
//! - The route table mapping screens to paths, menu labels and titles
//! - Sample records, filters, table and drawer state for the management pages
//! - The appointment board model
//! - Per-page layouts and dashboard content

pub mod board;
pub mod drawer;
pub mod filters;
pub mod pages;
pub mod records;
mod routes;
pub mod table;
pub mod toolbar;

pub use routes::{Route, title_for_path};
