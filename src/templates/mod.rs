//! Job role catalog and sample input templates

pub mod catalog;
pub mod repository;
