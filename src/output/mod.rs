//! Report rendering and output formats

pub mod report;
pub mod formatter;
