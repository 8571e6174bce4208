//! Output rendering
//! Builds the result view and formats it for the terminal or a report file

pub mod formatter;
pub mod render;
pub mod report;
