//! Result presentation module

pub mod formatter;
